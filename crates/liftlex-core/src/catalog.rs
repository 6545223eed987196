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

//! The field catalog: every piece of information that can be extracted
//! from a lexicon, described as data.
//!
//! A field names a level, a node path evaluated relative to nodes of that
//! level, a value path evaluated relative to each matched node, and a
//! [`Multiplicity`] telling how many values a single level node may carry.
//! Adding a field means adding a row to [`FIELD_CATALOG`]; nothing else
//! dispatches on field names.

use crate::error::{LiftError, Result};
use crate::level::Level;
use std::fmt;

/// How many values a field may have on one level node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Multiplicity {
    /// At most one value (e.g. the entry id).
    Unique,
    /// At most one value per object language (`form[@lang]`).
    UniqueByObjectLang,
    /// At most one value per meta language (`definition/form[@lang]`).
    UniqueByMetaLang,
    /// Any number of values, each carrying an object language.
    MultipleWithObjectLang,
    /// Any number of values, each carrying a meta language (`gloss[@lang]`).
    MultipleWithMetaLang,
    /// Any number of values with no distinguishing attribute.
    Multiple,
}

impl Multiplicity {
    /// True for the kinds whose values are keyed by a `lang` attribute.
    pub fn is_lang_keyed(self) -> bool {
        !matches!(self, Multiplicity::Unique | Multiplicity::Multiple)
    }

    /// Canonical upper-case name, as printed by `liftlex fields`.
    pub fn as_str(self) -> &'static str {
        match self {
            Multiplicity::Unique => "UNIQUE",
            Multiplicity::UniqueByObjectLang => "UNIQUE_BY_OBJECT_LANG",
            Multiplicity::UniqueByMetaLang => "UNIQUE_BY_META_LANG",
            Multiplicity::MultipleWithObjectLang => "MULTIPLE_WITH_OBJECT_LANG",
            Multiplicity::MultipleWithMetaLang => "MULTIPLE_WITH_META_LANG",
            Multiplicity::Multiple => "MULTIPLE",
        }
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDefinition {
    /// Unique field name used on the command line.
    pub name: &'static str,
    /// Level whose nodes the node path is evaluated against.
    pub level: Level,
    /// Path from a level node to the node(s) holding the value.
    pub node_path: &'static str,
    /// Path from a matched node to the scalar value.
    pub value_path: &'static str,
    /// Cardinality of the field on one level node.
    pub multiplicity: Multiplicity,
    /// Whether the value may contain markup (`<span>`) to be flattened.
    pub mixed_content: bool,
    /// Human-readable description.
    pub description: &'static str,
}

impl FieldDefinition {
    /// True when the field's columns are split by subfield (language).
    pub fn has_subfield(&self) -> bool {
        self.multiplicity.is_lang_keyed()
    }

    /// The attribute naming subfields, when there are any.
    pub fn subfield_name(&self) -> Option<&'static str> {
        self.has_subfield().then_some("lang")
    }
}

/// Every known field, in listing order.
pub const FIELD_CATALOG: &[FieldDefinition] = &[
    FieldDefinition {
        name: "ID",
        level: Level::Entry,
        node_path: ".",
        value_path: "@id",
        multiplicity: Multiplicity::Unique,
        mixed_content: false,
        description: "Identifier of the entry",
    },
    FieldDefinition {
        name: "form",
        level: Level::Entry,
        node_path: "lexical-unit/form",
        value_path: "text",
        multiplicity: Multiplicity::UniqueByObjectLang,
        mixed_content: true,
        description: "Headword of the entry, per object language",
    },
    FieldDefinition {
        name: "citation",
        level: Level::Entry,
        node_path: "citation/form",
        value_path: "text",
        multiplicity: Multiplicity::UniqueByObjectLang,
        mixed_content: true,
        description: "Citation form of the entry, per object language",
    },
    FieldDefinition {
        name: "morphtype",
        level: Level::Entry,
        node_path: "trait[@name='morph-type']",
        value_path: "@value",
        multiplicity: Multiplicity::Unique,
        mixed_content: false,
        description: "Morph type of the entry (stem, root, suffix...)",
    },
    FieldDefinition {
        name: "pronunciation",
        level: Level::Entry,
        node_path: "pronunciation/form",
        value_path: "text",
        multiplicity: Multiplicity::MultipleWithObjectLang,
        mixed_content: true,
        description: "Pronunciations of the entry, per object language",
    },
    FieldDefinition {
        name: "note",
        level: Level::Entry,
        node_path: "note/form",
        value_path: "text",
        multiplicity: Multiplicity::MultipleWithMetaLang,
        mixed_content: true,
        description: "Notes attached to the entry, per meta language",
    },
    FieldDefinition {
        name: "relation",
        level: Level::Entry,
        node_path: "relation",
        value_path: "@ref",
        multiplicity: Multiplicity::Multiple,
        mixed_content: false,
        description: "Targets of the entry's lexical relations",
    },
    FieldDefinition {
        name: "variantform",
        level: Level::Variant,
        node_path: "form",
        value_path: "text",
        multiplicity: Multiplicity::UniqueByObjectLang,
        mixed_content: true,
        description: "Form of a variant, per object language",
    },
    FieldDefinition {
        name: "variantype",
        level: Level::Variant,
        node_path: "trait[@name='variant-type']",
        value_path: "@value",
        multiplicity: Multiplicity::Unique,
        mixed_content: false,
        description: "Type of a variant (dialectal, spelling...)",
    },
    FieldDefinition {
        name: "senseID",
        level: Level::Sense,
        node_path: ".",
        value_path: "@id",
        multiplicity: Multiplicity::Unique,
        mixed_content: false,
        description: "Identifier of the sense",
    },
    FieldDefinition {
        name: "category",
        level: Level::Sense,
        node_path: "grammatical-info",
        value_path: "@value",
        multiplicity: Multiplicity::Unique,
        mixed_content: false,
        description: "Grammatical category (part of speech) of the sense",
    },
    FieldDefinition {
        name: "gloss",
        level: Level::Sense,
        node_path: "gloss",
        value_path: "text",
        multiplicity: Multiplicity::MultipleWithMetaLang,
        mixed_content: true,
        description: "Glosses of the sense, per meta language",
    },
    FieldDefinition {
        name: "definition",
        level: Level::Sense,
        node_path: "definition/form",
        value_path: "text",
        multiplicity: Multiplicity::UniqueByMetaLang,
        mixed_content: true,
        description: "Definition of the sense, per meta language",
    },
    FieldDefinition {
        name: "semanticdomain",
        level: Level::Sense,
        node_path: "trait[@name='semantic-domain-ddp4']",
        value_path: "@value",
        multiplicity: Multiplicity::Multiple,
        mixed_content: false,
        description: "Semantic domains of the sense",
    },
    FieldDefinition {
        name: "example",
        level: Level::Example,
        node_path: "form",
        value_path: "text",
        multiplicity: Multiplicity::UniqueByObjectLang,
        mixed_content: true,
        description: "Example sentence, per object language",
    },
    FieldDefinition {
        name: "translation",
        level: Level::Example,
        node_path: "translation/form",
        value_path: "text",
        multiplicity: Multiplicity::MultipleWithMetaLang,
        mixed_content: true,
        description: "Translations of the example, per meta language",
    },
];

/// Look up a field by name.
///
/// # Errors
///
/// Returns [`LiftError::UnknownField`] when no catalog entry has that name.
///
/// # Examples
///
/// ```
/// use liftlex_core::{catalog, Level};
///
/// let gloss = catalog::resolve("gloss").unwrap();
/// assert_eq!(gloss.level, Level::Sense);
/// assert!(catalog::resolve("nosuchfield").is_err());
/// ```
pub fn resolve(name: &str) -> Result<&'static FieldDefinition> {
    FIELD_CATALOG
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| LiftError::UnknownField {
            name: name.to_string(),
            available: FIELD_CATALOG.iter().map(|f| f.name.to_string()).collect(),
        })
}

/// All fields, in catalog order.
pub fn list_all() -> &'static [FieldDefinition] {
    FIELD_CATALOG
}
