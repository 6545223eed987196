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

//! Loaded LIFT documents.

use crate::error::{LiftError, Result};
use roxmltree::{Document as XmlDocument, Node};

/// Root element name of every LIFT document.
pub const LIFT_ROOT: &str = "lift";

/// Parser limits.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Accept a DTD in the prolog (default: false).
    pub allow_dtd: bool,
    /// Maximum number of XML nodes (default: 50M).
    pub nodes_limit: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_dtd: false,
            nodes_limit: 50_000_000,
        }
    }
}

/// A parsed LIFT lexicon, read-only for its whole lifetime.
///
/// The tree borrows the source text, so the text must outlive the document.
///
/// # Examples
///
/// ```
/// use liftlex_core::LiftDocument;
///
/// let text = r#"<lift version="0.13"><entry id="a"/><entry id="b"/></lift>"#;
/// let doc = LiftDocument::parse(text).unwrap();
/// assert_eq!(doc.entries().count(), 2);
/// assert_eq!(doc.version(), Some("0.13"));
/// ```
pub struct LiftDocument<'input> {
    xml: XmlDocument<'input>,
}

impl<'input> LiftDocument<'input> {
    /// Parse a lexicon with default limits.
    ///
    /// # Errors
    ///
    /// Returns [`LiftError::MalformedDocument`] if the text is not
    /// well-formed XML or its root element is not `lift`.
    pub fn parse(text: &'input str) -> Result<Self> {
        Self::parse_with_options(text, &ParseOptions::default())
    }

    /// Parse a lexicon with explicit limits.
    pub fn parse_with_options(text: &'input str, options: &ParseOptions) -> Result<Self> {
        let mut xml_options = roxmltree::ParsingOptions::default();
        xml_options.allow_dtd = options.allow_dtd;
        xml_options.nodes_limit = options.nodes_limit;

        let xml = XmlDocument::parse_with_options(text, xml_options).map_err(|e| {
            let pos = e.pos();
            LiftError::MalformedDocument {
                message: e.to_string(),
                line: pos.row,
                column: pos.col,
            }
        })?;

        let root = xml.root_element();
        if root.tag_name().name() != LIFT_ROOT {
            let pos = xml.text_pos_at(root.range().start);
            return Err(LiftError::MalformedDocument {
                message: format!(
                    "root element is <{}>, expected <{}>",
                    root.tag_name().name(),
                    LIFT_ROOT
                ),
                line: pos.row,
                column: pos.col,
            });
        }

        Ok(Self { xml })
    }

    /// The `lift` element.
    pub fn root(&self) -> Node<'_, 'input> {
        self.xml.root_element()
    }

    /// The `version` attribute of the root, if any.
    pub fn version(&self) -> Option<&str> {
        self.root().attribute("version")
    }

    /// The `entry` children of the root, in document order.
    pub fn entries(&self) -> impl Iterator<Item = Node<'_, 'input>> + '_ {
        self.root()
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "entry")
    }
}

/// 1-based line of a node, for diagnostics.
pub(crate) fn line_of(node: Node<'_, '_>) -> u32 {
    node.document().text_pos_at(node.range().start).row
}

/// Element children of `node` with the given tag name.
pub(crate) fn child_elements<'a, 'input: 'a, 'n>(
    node: Node<'a, 'input>,
    name: &'n str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'n
where
    'a: 'n,
{
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// The string value of an element.
///
/// Mixed content (`<text>a <span>b</span></text>`) is flattened by taking
/// every descendant text node; otherwise only direct text children count.
pub(crate) fn string_value(node: Node<'_, '_>, mixed: bool) -> String {
    if mixed {
        node.descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect()
    } else {
        node.children()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_lift_root() {
        let err = LiftDocument::parse("<dictionary/>").err().unwrap();
        match err {
            LiftError::MalformedDocument { message, line, .. } => {
                assert!(message.contains("<dictionary>"));
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_broken_xml() {
        let result = LiftDocument::parse("<lift><entry></lift>");
        assert!(matches!(result, Err(LiftError::MalformedDocument { .. })));
    }

    #[test]
    fn test_entries_skip_header() {
        let doc = LiftDocument::parse(
            "<lift><header><fields/></header><entry id=\"x\"/>text<entry/></lift>",
        )
        .unwrap();
        assert_eq!(doc.entries().count(), 2);
    }

    #[test]
    fn test_string_value_mixed_and_plain() {
        let xml = "<lift><text>ab<span>cd</span>ef</text></lift>";
        let doc = LiftDocument::parse(xml).unwrap();
        let text = doc.root().first_element_child().unwrap();
        assert_eq!(string_value(text, true), "abcdef");
        assert_eq!(string_value(text, false), "abef");
    }

    #[test]
    fn test_line_of_entries() {
        let doc = LiftDocument::parse("<lift>\n<entry/>\n\n<entry/>\n</lift>").unwrap();
        let lines: Vec<u32> = doc.entries().map(line_of).collect();
        assert_eq!(lines, vec![2, 4]);
    }
}
