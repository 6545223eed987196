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


//! Shared test fixtures and utilities for the liftlex crates.
//!
//! # Quick Start
//!
//! ```rust
//! use liftlex_test::fixtures;
//!
//! let xml = fixtures::tiny();    // two entries, four senses
//! let xml = fixtures::rich();    // every catalog field
//!
//! use liftlex_test::fixtures::builders::{EntryBuilder, LexiconBuilder, SenseBuilder};
//!
//! let xml = LexiconBuilder::new()
//!     .entry(EntryBuilder::new("1").sense(SenseBuilder::new().gloss("en", "road")))
//!     .build();
//!
//! use liftlex_test::count_elements;
//! assert_eq!(count_elements(&xml, "sense"), 1);
//! ```

pub mod fixtures;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> String)>;

/// Count elements named `name` anywhere in `xml`.
///
/// Returns zero when `xml` does not parse.
pub fn count_elements(xml: &str, name: &str) -> usize {
    match roxmltree::Document::parse(xml) {
        Ok(doc) => doc
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == name)
            .count(),
        Err(_) => 0,
    }
}

/// Count elements named `name` whose parent element is named `parent`.
pub fn count_children(xml: &str, parent: &str, name: &str) -> usize {
    match roxmltree::Document::parse(xml) {
        Ok(doc) => doc
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == name)
            .filter(|n| n.parent_element().map(|p| p.tag_name().name()) == Some(parent))
            .count(),
        Err(_) => 0,
    }
}

/// Write `content` to a fresh file inside `dir` and return its path.
pub fn write_fixture(
    dir: &std::path::Path,
    name: &str,
    content: &str,
) -> std::io::Result<std::path::PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_counts() {
        let tiny = fixtures::tiny();
        assert_eq!(count_elements(&tiny, "entry"), 2);
        assert_eq!(count_children(&tiny, "entry", "sense"), 4);

        let rich = fixtures::rich();
        assert_eq!(count_elements(&rich, "entry"), 3);
        assert_eq!(count_children(&rich, "entry", "sense"), 3);
        assert_eq!(count_children(&rich, "entry", "variant"), 1);
        assert_eq!(count_children(&rich, "sense", "example"), 1);
    }

    #[test]
    fn test_all_fixtures_are_well_formed() {
        for (name, fixture) in fixtures::all() {
            let xml = fixture();
            assert!(
                roxmltree::Document::parse(&xml).is_ok(),
                "fixture {} does not parse",
                name
            );
        }
    }

    #[test]
    fn test_malformed_samples_do_not_parse() {
        for (name, xml) in fixtures::errors::malformed_xml_samples() {
            assert!(
                roxmltree::Document::parse(xml).is_err(),
                "sample {} parsed",
                name
            );
        }
    }
}
