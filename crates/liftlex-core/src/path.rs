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

//! Path evaluation for catalog fields.
//!
//! Catalog paths use a small subset of XPath:
//!
//! ```text
//! node path   := "." | step ("/" step)*
//! step        := NAME ( "[@" NAME "=" QUOTED "]" )?
//! value path  := "." | "@" NAME | NAME
//! ```
//!
//! Steps only follow the child axis, so matches always come back in
//! document order.

use crate::catalog::{FieldDefinition, Multiplicity};
use crate::document::{child_elements, line_of, string_value};
use crate::error::{LiftError, Result};
use roxmltree::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    name: String,
    predicate: Option<(String, String)>,
}

impl Step {
    fn accepts(&self, node: Node<'_, '_>) -> bool {
        match &self.predicate {
            Some((attr, value)) => node.attribute(attr.as_str()) == Some(value.as_str()),
            None => true,
        }
    }
}

/// A compiled node path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    steps: Vec<Step>,
}

impl NodePath {
    /// Compile a node path.
    ///
    /// # Errors
    ///
    /// Returns a description of the first syntax problem.
    pub fn parse(path: &str) -> std::result::Result<Self, String> {
        let path = path.trim();
        if path == "." {
            return Ok(Self { steps: Vec::new() });
        }
        if path.is_empty() {
            return Err("empty path".to_string());
        }
        let steps = path
            .split('/')
            .map(parse_step)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    /// Nodes reached from `context`, in document order.
    pub fn select<'a, 'input>(&self, context: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
        let mut current = vec![context];
        for step in &self.steps {
            current = current
                .into_iter()
                .flat_map(|n| child_elements(n, step.name.as_str()))
                .filter(|n| step.accepts(*n))
                .collect();
        }
        current
    }
}

fn parse_step(step: &str) -> std::result::Result<Step, String> {
    let (name, predicate) = match step.find('[') {
        Some(open) => {
            let inner = step[open + 1..]
                .strip_suffix(']')
                .ok_or_else(|| format!("unterminated predicate in '{}'", step))?;
            (&step[..open], Some(parse_predicate(inner)?))
        }
        None => (step, None),
    };
    if !is_name(name) {
        return Err(format!("invalid element name '{}'", name));
    }
    Ok(Step {
        name: name.to_string(),
        predicate,
    })
}

fn parse_predicate(inner: &str) -> std::result::Result<(String, String), String> {
    let body = inner
        .strip_prefix('@')
        .ok_or_else(|| format!("predicate '{}' must test an attribute", inner))?;
    let (attr, quoted) = body
        .split_once('=')
        .ok_or_else(|| format!("predicate '{}' has no '='", inner))?;
    if !is_name(attr) {
        return Err(format!("invalid attribute name '{}'", attr));
    }
    let value = quoted
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .or_else(|| quoted.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
        .ok_or_else(|| format!("predicate value {} must be quoted", quoted))?;
    Ok((attr.to_string(), value.to_string()))
}

fn is_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

/// Where the scalar value lives relative to a matched node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValuePath {
    /// String value of the node itself.
    Text,
    /// An attribute of the node.
    Attribute(String),
    /// String value of the first child element with this name.
    Child(String),
}

impl ValuePath {
    /// Compile a value path.
    pub fn parse(path: &str) -> std::result::Result<Self, String> {
        let path = path.trim();
        if path == "." {
            Ok(ValuePath::Text)
        } else if let Some(attr) = path.strip_prefix('@') {
            if is_name(attr) {
                Ok(ValuePath::Attribute(attr.to_string()))
            } else {
                Err(format!("invalid attribute name '{}'", attr))
            }
        } else if is_name(path) {
            Ok(ValuePath::Child(path.to_string()))
        } else {
            Err(format!("invalid value path '{}'", path))
        }
    }
}

/// One node matched by a field, with its language when the field is
/// language-keyed.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a, 'input> {
    /// The matched node.
    pub node: Node<'a, 'input>,
    /// The `lang` attribute (empty when missing) for language-keyed fields.
    pub lang: Option<&'a str>,
}

/// A unique field that matched more than once at one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ambiguity {
    /// The language the duplicates share, for language-keyed fields.
    pub language: Option<String>,
    /// How many nodes matched.
    pub count: usize,
    /// Line of the first match.
    pub line: u32,
}

/// A catalog field with its paths compiled.
#[derive(Debug, Clone)]
pub struct FieldPath {
    /// The catalog entry.
    pub def: &'static FieldDefinition,
    node_path: NodePath,
    value_path: ValuePath,
}

impl FieldPath {
    /// Compile both paths of a field.
    ///
    /// # Errors
    ///
    /// Returns [`LiftError::InvalidPath`] if either path is malformed.
    pub fn compile(def: &'static FieldDefinition) -> Result<Self> {
        let invalid = |path: &str, reason: String| LiftError::InvalidPath {
            field: def.name.to_string(),
            path: path.to_string(),
            reason,
        };
        let node_path = NodePath::parse(def.node_path).map_err(|r| invalid(def.node_path, r))?;
        let value_path =
            ValuePath::parse(def.value_path).map_err(|r| invalid(def.value_path, r))?;
        Ok(Self {
            def,
            node_path,
            value_path,
        })
    }

    /// Resolve the field under `context`.
    ///
    /// Unique kinds keep the first match (per language for the `*_LANG`
    /// kinds) and report the rest to `ambiguities`. Multiple kinds return
    /// every match. No match yields an empty vector.
    pub fn evaluate<'a, 'input>(
        &self,
        context: Node<'a, 'input>,
        ambiguities: &mut Vec<Ambiguity>,
    ) -> Vec<Match<'a, 'input>> {
        let lang_keyed = self.def.multiplicity.is_lang_keyed();
        let matches: Vec<Match<'a, 'input>> = self
            .node_path
            .select(context)
            .into_iter()
            .map(|node| Match {
                node,
                lang: lang_keyed.then(|| node.attribute("lang").unwrap_or("")),
            })
            .collect();

        match self.def.multiplicity {
            Multiplicity::Unique => {
                if matches.len() > 1 {
                    ambiguities.push(Ambiguity {
                        language: None,
                        count: matches.len(),
                        line: line_of(matches[0].node),
                    });
                }
                matches.into_iter().take(1).collect()
            }
            Multiplicity::UniqueByObjectLang | Multiplicity::UniqueByMetaLang => {
                let mut kept: Vec<Match<'a, 'input>> = Vec::new();
                for m in &matches {
                    if kept.iter().any(|k| k.lang == m.lang) {
                        continue;
                    }
                    let count = matches.iter().filter(|o| o.lang == m.lang).count();
                    if count > 1 {
                        ambiguities.push(Ambiguity {
                            language: m.lang.map(str::to_string),
                            count,
                            line: line_of(m.node),
                        });
                    }
                    kept.push(*m);
                }
                kept
            }
            Multiplicity::Multiple
            | Multiplicity::MultipleWithObjectLang
            | Multiplicity::MultipleWithMetaLang => matches,
        }
    }

    /// The scalar value of a matched node; empty when the value path finds
    /// nothing.
    pub fn value_of(&self, node: Node<'_, '_>) -> String {
        let mixed = self.def.mixed_content;
        let raw = match &self.value_path {
            ValuePath::Text => string_value(node, mixed),
            ValuePath::Attribute(attr) => node.attribute(attr.as_str()).unwrap_or("").to_string(),
            ValuePath::Child(name) => child_elements(node, name.as_str())
                .next()
                .map(|child| string_value(child, mixed))
                .unwrap_or_default(),
        };
        raw.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{resolve, FIELD_CATALOG};
    use crate::LiftDocument;

    const ENTRY: &str = r#"<lift>
<entry id="e1">
  <lexical-unit><form lang="tww"><text>efe</text></form><form lang="fr"><text>chemin</text></form></lexical-unit>
  <trait name="morph-type" value="stem"/>
  <trait name="morph-type" value="root"/>
  <relation type="synonym" ref="e2"/>
  <relation type="antonym" ref="e3"/>
</entry>
</lift>"#;

    fn entry<'a, 'i>(doc: &'a LiftDocument<'i>) -> Node<'a, 'i> {
        doc.entries().next().unwrap()
    }

    #[test]
    fn test_every_catalog_path_compiles() {
        for def in FIELD_CATALOG {
            assert!(FieldPath::compile(def).is_ok(), "{}", def.name);
        }
    }

    #[test]
    fn test_parse_predicate_step() {
        let path = NodePath::parse("trait[@name='morph-type']").unwrap();
        assert_eq!(path.steps.len(), 1);
        assert_eq!(
            path.steps[0].predicate,
            Some(("name".to_string(), "morph-type".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_bad_paths() {
        assert!(NodePath::parse("").is_err());
        assert!(NodePath::parse("trait[@name='x'").is_err());
        assert!(NodePath::parse("trait[name='x']").is_err());
        assert!(NodePath::parse("trait[@name=x]").is_err());
        assert!(NodePath::parse("a//b").is_err());
        assert!(ValuePath::parse("@").is_err());
    }

    #[test]
    fn test_unique_by_lang_yields_one_per_language() {
        let doc = LiftDocument::parse(ENTRY).unwrap();
        let form = FieldPath::compile(resolve("form").unwrap()).unwrap();
        let mut ambiguities = Vec::new();
        let matches = form.evaluate(entry(&doc), &mut ambiguities);
        let langs: Vec<_> = matches.iter().map(|m| m.lang.unwrap()).collect();
        assert_eq!(langs, vec!["tww", "fr"]);
        assert_eq!(form.value_of(matches[0].node), "efe");
        assert!(ambiguities.is_empty());
    }

    #[test]
    fn test_unique_keeps_first_and_reports_ambiguity() {
        let doc = LiftDocument::parse(ENTRY).unwrap();
        let morphtype = FieldPath::compile(resolve("morphtype").unwrap()).unwrap();
        let mut ambiguities = Vec::new();
        let matches = morphtype.evaluate(entry(&doc), &mut ambiguities);
        assert_eq!(matches.len(), 1);
        assert_eq!(morphtype.value_of(matches[0].node), "stem");
        assert_eq!(ambiguities.len(), 1);
        assert_eq!(ambiguities[0].count, 2);
    }

    #[test]
    fn test_multiple_returns_all_matches() {
        let doc = LiftDocument::parse(ENTRY).unwrap();
        let relation = FieldPath::compile(resolve("relation").unwrap()).unwrap();
        let mut ambiguities = Vec::new();
        let values: Vec<_> = relation
            .evaluate(entry(&doc), &mut ambiguities)
            .into_iter()
            .map(|m| {
                assert!(m.lang.is_none());
                relation.value_of(m.node)
            })
            .collect();
        assert_eq!(values, vec!["e2", "e3"]);
    }

    #[test]
    fn test_self_path_and_missing_match() {
        let doc = LiftDocument::parse(ENTRY).unwrap();
        let id = FieldPath::compile(resolve("ID").unwrap()).unwrap();
        let note = FieldPath::compile(resolve("note").unwrap()).unwrap();
        let mut ambiguities = Vec::new();
        let ids = id.evaluate(entry(&doc), &mut ambiguities);
        assert_eq!(id.value_of(ids[0].node), "e1");
        assert!(note.evaluate(entry(&doc), &mut ambiguities).is_empty());
    }
}
