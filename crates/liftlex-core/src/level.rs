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

//! The four levels of a LIFT lexicon and their fixed hierarchy.
//!
//! ```text
//! entry
//! ├── sense
//! │   └── example
//! └── variant
//! ```

use std::fmt;

/// A level of the lexicon hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Headword-level record, child of `lift`.
    Entry,
    /// Sub-meaning of an entry.
    Sense,
    /// Alternate form of an entry, sibling of senses.
    Variant,
    /// Usage example, child of a sense.
    Example,
}

struct LevelInfo {
    element: &'static str,
    parent: Option<Level>,
    depth: usize,
    /// Inserted between the parent id and the ordinal in synthetic ids.
    ordinal_prefix: &'static str,
}

// Indexed by `Level as usize`.
const LEVEL_TABLE: [LevelInfo; 4] = [
    LevelInfo {
        element: "entry",
        parent: None,
        depth: 0,
        ordinal_prefix: "",
    },
    LevelInfo {
        element: "sense",
        parent: Some(Level::Entry),
        depth: 1,
        ordinal_prefix: "",
    },
    LevelInfo {
        element: "variant",
        parent: Some(Level::Entry),
        depth: 1,
        ordinal_prefix: "v",
    },
    LevelInfo {
        element: "example",
        parent: Some(Level::Sense),
        depth: 2,
        ordinal_prefix: "",
    },
];

impl Level {
    /// Every level, in declaration order.
    pub const ALL: [Level; 4] = [Level::Entry, Level::Sense, Level::Variant, Level::Example];

    fn info(self) -> &'static LevelInfo {
        &LEVEL_TABLE[self as usize]
    }

    /// The XML element name for nodes of this level.
    pub fn element(self) -> &'static str {
        self.info().element
    }

    /// The owning level, `None` for entries.
    pub fn parent(self) -> Option<Level> {
        self.info().parent
    }

    /// Distance from the entry level.
    pub fn depth(self) -> usize {
        self.info().depth
    }

    pub(crate) fn ordinal_prefix(self) -> &'static str {
        self.info().ordinal_prefix
    }

    /// Levels from the entry level down to `self`, inclusive.
    pub fn lineage(self) -> Vec<Level> {
        let mut chain = vec![self];
        let mut current = self;
        while let Some(parent) = current.parent() {
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }

    /// True when `self` is `other` or one of its ancestors.
    pub fn contains(self, other: Level) -> bool {
        other.lineage().contains(&self)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element())
    }
}
