// liftlex - LIFT lexicon extraction toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structural validation of LIFT documents.
//!
//! The LIFT 0.13 vocabulary is embedded as a rule table: for each element,
//! its required attributes and the children it may contain, with their
//! cardinality. Validation walks the tree once and stops at the first
//! violation.
//!
//! # Examples
//!
//! ```rust
//! use liftlex_core::schema::{LiftValidator, ValidationError};
//!
//! let validator = LiftValidator::new();
//! assert!(validator
//!     .validate(r#"<lift version="0.13"><entry id="a"/></lift>"#)
//!     .is_ok());
//!
//! let err = validator
//!     .validate(r#"<lift version="0.13"><entry><gloss lang="en"/></entry></lift>"#)
//!     .unwrap_err();
//! assert!(matches!(err, ValidationError::UnknownElement { .. }));
//! ```

use crate::document::line_of;
use roxmltree::{Document as XmlDocument, Node};
use std::fmt;

/// Errors that can occur during structural validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The document is not well-formed XML.
    DocumentParseError {
        /// Parser message.
        message: String,
        /// Line number where the error occurred.
        line: Option<u32>,
        /// Column number where the error occurred.
        column: Option<u32>,
    },

    /// An element is not allowed where it occurs.
    UnknownElement {
        /// The offending element.
        element: String,
        /// Its parent, `None` for the root.
        parent: Option<String>,
        /// Line of the element.
        line: u32,
    },

    /// A required attribute is missing.
    RequiredAttributeMissing {
        /// Element name.
        element: String,
        /// Missing attribute name.
        attribute: String,
        /// Line of the element.
        line: u32,
    },

    /// A child element occurs too often or too rarely.
    CardinalityError {
        /// Parent element name.
        parent: String,
        /// Child element name.
        element: String,
        /// Minimum occurrences allowed.
        min: usize,
        /// Maximum occurrences allowed (None = unbounded).
        max: Option<usize>,
        /// Actual occurrences found.
        actual: usize,
        /// Line of the parent.
        line: u32,
    },

    /// Text appears in an element that only holds elements.
    UnexpectedText {
        /// Element name.
        element: String,
        /// Line of the text.
        line: u32,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DocumentParseError {
                message,
                line,
                column,
            } => {
                write!(f, "Document parse error: {}", message)?;
                if let Some(l) = line {
                    write!(f, " at line {}", l)?;
                    if let Some(c) = column {
                        write!(f, ", column {}", c)?;
                    }
                }
                Ok(())
            }
            ValidationError::UnknownElement {
                element,
                parent,
                line,
            } => match parent {
                Some(p) => write!(
                    f,
                    "Element '{}' is not allowed in '{}' at line {}",
                    element, p, line
                ),
                None => write!(
                    f,
                    "Root element must be 'lift', found '{}' at line {}",
                    element, line
                ),
            },
            ValidationError::RequiredAttributeMissing {
                element,
                attribute,
                line,
            } => write!(
                f,
                "Required attribute '{}' missing from element '{}' at line {}",
                attribute, element, line
            ),
            ValidationError::CardinalityError {
                parent,
                element,
                min,
                max,
                actual,
                line,
            } => write!(
                f,
                "Cardinality error for '{}' in '{}': expected {}..{}, found {} at line {}",
                element,
                parent,
                min,
                max.map_or("unbounded".to_string(), |m| m.to_string()),
                actual,
                line
            ),
            ValidationError::UnexpectedText { element, line } => {
                write!(f, "Unexpected text in element '{}' at line {}", element, line)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Allowed child of an element.
#[derive(Debug, Clone, Copy)]
struct ChildRule {
    name: &'static str,
    min: usize,
    max: Option<usize>,
}

const fn opt(name: &'static str) -> ChildRule {
    ChildRule {
        name,
        min: 0,
        max: Some(1),
    }
}

const fn many(name: &'static str) -> ChildRule {
    ChildRule {
        name,
        min: 0,
        max: None,
    }
}

const fn one(name: &'static str) -> ChildRule {
    ChildRule {
        name,
        min: 1,
        max: Some(1),
    }
}

/// How an element's content is checked.
#[derive(Debug, Clone, Copy)]
enum Content {
    /// Only the listed child elements, no text.
    Elements(&'static [ChildRule]),
    /// Text interleaved with the listed child elements.
    Mixed(&'static [ChildRule]),
    /// Anything (extension points such as `header`).
    Open,
}

#[derive(Debug, Clone, Copy)]
struct ElementRule {
    name: &'static str,
    required: &'static [&'static str],
    content: Content,
}

const MULTITEXT: &[ChildRule] = &[many("form")];
const FIELD_EXTENSIBLE: [ChildRule; 3] = [many("field"), many("trait"), many("annotation")];

const SENSE_CHILDREN: &[ChildRule] = &[
    opt("grammatical-info"),
    many("gloss"),
    opt("definition"),
    many("relation"),
    many("note"),
    many("example"),
    many("reversal"),
    many("illustration"),
    many("subsense"),
    FIELD_EXTENSIBLE[0],
    FIELD_EXTENSIBLE[1],
    FIELD_EXTENSIBLE[2],
];

const RULES: &[ElementRule] = &[
    ElementRule {
        name: "lift",
        required: &["version"],
        content: Content::Elements(&[opt("header"), many("entry")]),
    },
    ElementRule {
        name: "header",
        required: &[],
        content: Content::Open,
    },
    ElementRule {
        name: "entry",
        required: &[],
        content: Content::Elements(&[
            opt("lexical-unit"),
            opt("citation"),
            many("pronunciation"),
            many("variant"),
            many("sense"),
            many("note"),
            many("relation"),
            many("etymology"),
            FIELD_EXTENSIBLE[0],
            FIELD_EXTENSIBLE[1],
            FIELD_EXTENSIBLE[2],
        ]),
    },
    ElementRule {
        name: "lexical-unit",
        required: &[],
        content: Content::Elements(MULTITEXT),
    },
    ElementRule {
        name: "citation",
        required: &[],
        content: Content::Elements(MULTITEXT),
    },
    ElementRule {
        name: "form",
        required: &["lang"],
        content: Content::Elements(&[one("text"), many("annotation")]),
    },
    ElementRule {
        name: "text",
        required: &[],
        content: Content::Mixed(&[many("span")]),
    },
    ElementRule {
        name: "span",
        required: &[],
        content: Content::Mixed(&[many("span")]),
    },
    ElementRule {
        name: "pronunciation",
        required: &[],
        content: Content::Elements(&[
            many("form"),
            many("media"),
            FIELD_EXTENSIBLE[0],
            FIELD_EXTENSIBLE[1],
            FIELD_EXTENSIBLE[2],
        ]),
    },
    ElementRule {
        name: "variant",
        required: &[],
        content: Content::Elements(&[
            many("form"),
            many("pronunciation"),
            many("relation"),
            FIELD_EXTENSIBLE[0],
            FIELD_EXTENSIBLE[1],
            FIELD_EXTENSIBLE[2],
        ]),
    },
    ElementRule {
        name: "sense",
        required: &[],
        content: Content::Elements(SENSE_CHILDREN),
    },
    ElementRule {
        name: "subsense",
        required: &[],
        content: Content::Elements(SENSE_CHILDREN),
    },
    ElementRule {
        name: "grammatical-info",
        required: &["value"],
        content: Content::Elements(&[many("trait")]),
    },
    ElementRule {
        name: "gloss",
        required: &["lang"],
        content: Content::Elements(&[one("text"), many("trait"), many("annotation")]),
    },
    ElementRule {
        name: "definition",
        required: &[],
        content: Content::Elements(MULTITEXT),
    },
    ElementRule {
        name: "note",
        required: &[],
        content: Content::Elements(&[
            many("form"),
            FIELD_EXTENSIBLE[0],
            FIELD_EXTENSIBLE[1],
            FIELD_EXTENSIBLE[2],
        ]),
    },
    ElementRule {
        name: "example",
        required: &[],
        content: Content::Elements(&[
            many("form"),
            many("translation"),
            many("note"),
            FIELD_EXTENSIBLE[0],
            FIELD_EXTENSIBLE[1],
            FIELD_EXTENSIBLE[2],
        ]),
    },
    ElementRule {
        name: "translation",
        required: &[],
        content: Content::Elements(MULTITEXT),
    },
    ElementRule {
        name: "relation",
        required: &["type", "ref"],
        content: Content::Elements(&[
            many("usage"),
            FIELD_EXTENSIBLE[0],
            FIELD_EXTENSIBLE[1],
            FIELD_EXTENSIBLE[2],
        ]),
    },
    ElementRule {
        name: "usage",
        required: &[],
        content: Content::Elements(MULTITEXT),
    },
    ElementRule {
        name: "etymology",
        required: &["type", "source"],
        content: Content::Elements(&[
            many("form"),
            many("gloss"),
            FIELD_EXTENSIBLE[0],
            FIELD_EXTENSIBLE[1],
            FIELD_EXTENSIBLE[2],
        ]),
    },
    ElementRule {
        name: "reversal",
        required: &[],
        content: Content::Elements(&[many("form"), opt("main"), opt("grammatical-info")]),
    },
    ElementRule {
        name: "main",
        required: &[],
        content: Content::Elements(&[many("form"), opt("main"), opt("grammatical-info")]),
    },
    ElementRule {
        name: "illustration",
        required: &["href"],
        content: Content::Elements(&[opt("label")]),
    },
    ElementRule {
        name: "media",
        required: &["href"],
        content: Content::Elements(&[opt("label")]),
    },
    ElementRule {
        name: "label",
        required: &[],
        content: Content::Elements(MULTITEXT),
    },
    ElementRule {
        name: "field",
        required: &["type"],
        content: Content::Elements(&[many("form"), many("trait"), many("annotation")]),
    },
    ElementRule {
        name: "trait",
        required: &["name", "value"],
        content: Content::Elements(&[many("annotation")]),
    },
    ElementRule {
        name: "annotation",
        required: &["name", "value"],
        content: Content::Elements(MULTITEXT),
    },
];

fn rule_for(name: &str) -> Option<&'static ElementRule> {
    RULES.iter().find(|r| r.name == name)
}

/// Validator for the LIFT element vocabulary.
#[derive(Debug, Clone, Default)]
pub struct LiftValidator {
    _private: (),
}

impl LiftValidator {
    /// Create a validator for LIFT 0.13.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a LIFT document given as text.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, in document order.
    pub fn validate(&self, xml: &str) -> Result<(), ValidationError> {
        let doc = XmlDocument::parse(xml).map_err(|e| ValidationError::DocumentParseError {
            message: e.to_string(),
            line: Some(e.pos().row),
            column: Some(e.pos().col),
        })?;
        self.validate_tree(&doc)
    }

    /// Validate an already parsed tree.
    pub fn validate_tree(&self, doc: &XmlDocument<'_>) -> Result<(), ValidationError> {
        let root = doc.root_element();
        if root.tag_name().name() != "lift" {
            return Err(ValidationError::UnknownElement {
                element: root.tag_name().name().to_string(),
                parent: None,
                line: line_of(root),
            });
        }
        self.validate_element(root)
    }

    fn validate_element(&self, node: Node<'_, '_>) -> Result<(), ValidationError> {
        let name = node.tag_name().name();
        let Some(rule) = rule_for(name) else {
            return Err(ValidationError::UnknownElement {
                element: name.to_string(),
                parent: node.parent_element().map(|p| p.tag_name().name().to_string()),
                line: line_of(node),
            });
        };

        for attribute in rule.required {
            if node.attribute(*attribute).is_none() {
                return Err(ValidationError::RequiredAttributeMissing {
                    element: name.to_string(),
                    attribute: attribute.to_string(),
                    line: line_of(node),
                });
            }
        }

        let (children, mixed) = match rule.content {
            Content::Open => return Ok(()),
            Content::Elements(children) => (children, false),
            Content::Mixed(children) => (children, true),
        };

        for child in node.children() {
            if child.is_text() {
                let blank = child.text().map_or(true, |t| t.trim().is_empty());
                if !mixed && !blank {
                    return Err(ValidationError::UnexpectedText {
                        element: name.to_string(),
                        line: line_of(child),
                    });
                }
            } else if child.is_element() {
                let child_name = child.tag_name().name();
                if !children.iter().any(|c| c.name == child_name) {
                    return Err(ValidationError::UnknownElement {
                        element: child_name.to_string(),
                        parent: Some(name.to_string()),
                        line: line_of(child),
                    });
                }
                self.validate_element(child)?;
            }
        }

        for child_rule in children {
            let actual = node
                .children()
                .filter(|c| c.is_element() && c.tag_name().name() == child_rule.name)
                .count();
            let too_many = child_rule.max.map_or(false, |max| actual > max);
            if actual < child_rule.min || too_many {
                return Err(ValidationError::CardinalityError {
                    parent: name.to_string(),
                    element: child_rule.name.to_string(),
                    min: child_rule.min,
                    max: child_rule.max,
                    actual,
                    line: line_of(node),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(xml: &str) -> Result<(), ValidationError> {
        LiftValidator::new().validate(xml)
    }

    #[test]
    fn test_valid_entry() {
        let xml = r#"<lift version="0.13" producer="test">
  <header><anything-goes/></header>
  <entry id="e1">
    <lexical-unit><form lang="tww"><text>ef<span lang="x">e</span></text></form></lexical-unit>
    <trait name="morph-type" value="stem"/>
    <sense id="s1">
      <grammatical-info value="Noun"/>
      <gloss lang="en"><text>road</text></gloss>
      <example><form lang="tww"><text>efe</text></form><translation type="free"><form lang="en"><text>road</text></form></translation></example>
    </sense>
  </entry>
</lift>"#;
        assert_eq!(validate(xml), Ok(()));
    }

    #[test]
    fn test_wrong_root() {
        let err = validate("<dictionary/>").unwrap_err();
        assert!(err.to_string().contains("Root element must be 'lift'"));
    }

    #[test]
    fn test_missing_version() {
        let err = validate("<lift/>").unwrap_err();
        assert_eq!(
            err,
            ValidationError::RequiredAttributeMissing {
                element: "lift".to_string(),
                attribute: "version".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_form_requires_exactly_one_text() {
        let err = validate(
            r#"<lift version="0.13"><entry><lexical-unit><form lang="x"/></lexical-unit></entry></lift>"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::CardinalityError { min: 1, actual: 0, .. }
        ));
    }

    #[test]
    fn test_two_grammatical_infos() {
        let err = validate(
            r#"<lift version="0.13"><entry><sense><grammatical-info value="a"/><grammatical-info value="b"/></sense></entry></lift>"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("'grammatical-info' in 'sense'"));
    }

    #[test]
    fn test_text_outside_mixed_content() {
        let err = validate(r#"<lift version="0.13"><entry>stray</entry></lift>"#).unwrap_err();
        assert!(matches!(err, ValidationError::UnexpectedText { .. }));
    }

    #[test]
    fn test_malformed_xml_reports_position() {
        let err = validate("<lift version=\"0.13\">\n<entry>\n</lift>").unwrap_err();
        match err {
            ValidationError::DocumentParseError { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("unexpected {:?}", other),
        }
    }
}
