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

//! Level-by-level traversal of a lexicon.

use crate::document::{child_elements, LiftDocument};
use crate::level::Level;
use roxmltree::Node;

/// A node of one level, with its identity and parent linkage.
///
/// Entry ids come from the `id` attribute (or `#<position>` when it is
/// missing). Deeper levels get synthetic ids built from the parent id and a
/// 1-based ordinal, e.g. `e1.2` for the second sense of `e1` and `e1.v1` for
/// its first variant.
#[derive(Debug, Clone)]
pub struct LevelNode<'a, 'input> {
    /// The level of the node.
    pub level: Level,
    /// Identifier, unique per level as long as entry ids are.
    pub id: String,
    /// Identifier of the owning node, `None` for entries.
    pub parent_id: Option<String>,
    /// 1-based position among the parent's children of this level.
    pub ordinal: usize,
    /// The XML element.
    pub node: Node<'a, 'input>,
    /// The owning XML element, `None` for entries.
    pub parent: Option<Node<'a, 'input>>,
}

impl<'a, 'input: 'a> LevelNode<'a, 'input> {
    fn entry(node: Node<'a, 'input>, position: usize) -> Self {
        let ordinal = position + 1;
        let id = match node.attribute("id") {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!("#{}", ordinal),
        };
        Self {
            level: Level::Entry,
            id,
            parent_id: None,
            ordinal,
            node,
            parent: None,
        }
    }

    /// Child level nodes of the given level, in document order.
    fn children(&self, level: Level) -> impl Iterator<Item = LevelNode<'a, 'input>> + 'a {
        let parent_id = self.id.clone();
        let parent = self.node;
        child_elements(self.node, level.element())
            .enumerate()
            .map(move |(i, node)| LevelNode {
                level,
                id: format!("{}.{}{}", parent_id, level.ordinal_prefix(), i + 1),
                parent_id: Some(parent_id.clone()),
                ordinal: i + 1,
                node,
                parent: Some(parent),
            })
    }
}

/// Walk every node of `level` in document order.
///
/// The walk is lazy and restartable: each call re-reads the tree. Entries
/// without senses contribute nothing to the sense (or example) walk.
///
/// # Examples
///
/// ```
/// use liftlex_core::{walk, Level, LiftDocument};
///
/// let doc = LiftDocument::parse(
///     r#"<lift><entry id="a"><sense/><sense/></entry><entry id="b"/></lift>"#,
/// ).unwrap();
/// let ids: Vec<_> = walk(&doc, Level::Sense).map(|n| n.id).collect();
/// assert_eq!(ids, vec!["a.1", "a.2"]);
/// ```
pub fn walk<'a, 'input: 'a>(
    doc: &'a LiftDocument<'input>,
    level: Level,
) -> Box<dyn Iterator<Item = LevelNode<'a, 'input>> + 'a> {
    match level.parent() {
        None => Box::new(
            doc.entries()
                .enumerate()
                .map(|(i, node)| LevelNode::entry(node, i)),
        ),
        Some(parent) => Box::new(walk(doc, parent).flat_map(move |p| p.children(level))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEXICON: &str = r#"<lift>
<entry id="e1">
  <sense><example/><example/></sense>
  <variant/>
  <sense/>
</entry>
<entry>
  <variant/><variant/>
</entry>
<entry id="e3"><sense><example/></sense></entry>
</lift>"#;

    fn ids(doc: &LiftDocument<'_>, level: Level) -> Vec<String> {
        walk(doc, level).map(|n| n.id).collect()
    }

    #[test]
    fn test_entry_ids_fall_back_to_position() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        assert_eq!(ids(&doc, Level::Entry), vec!["e1", "#2", "e3"]);
    }

    #[test]
    fn test_senses_skip_entries_without_senses() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        assert_eq!(ids(&doc, Level::Sense), vec!["e1.1", "e1.2", "e3.1"]);
        let parents: Vec<_> = walk(&doc, Level::Sense)
            .map(|n| n.parent_id.unwrap())
            .collect();
        assert_eq!(parents, vec!["e1", "e1", "e3"]);
    }

    #[test]
    fn test_variants_are_a_separate_branch() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        assert_eq!(ids(&doc, Level::Variant), vec!["e1.v1", "#2.v1", "#2.v2"]);
    }

    #[test]
    fn test_examples_trace_through_senses() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        assert_eq!(ids(&doc, Level::Example), vec!["e1.1.1", "e1.1.2", "e3.1.1"]);
        let first = walk(&doc, Level::Example).next().unwrap();
        assert_eq!(first.parent_id.as_deref(), Some("e1.1"));
        assert_eq!(first.parent.unwrap().tag_name().name(), "sense");
    }

    #[test]
    fn test_ordinals_restart_per_parent() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        let entries: Vec<_> = walk(&doc, Level::Entry).map(|n| n.ordinal).collect();
        assert_eq!(entries, vec![1, 2, 3]);
        let examples: Vec<_> = walk(&doc, Level::Example).map(|n| n.ordinal).collect();
        assert_eq!(examples, vec![1, 2, 1]);
    }

    #[test]
    fn test_walk_is_restartable() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        assert_eq!(ids(&doc, Level::Example), ids(&doc, Level::Example));
    }
}
