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

//! Error types for lexicon extraction.

use crate::level::Level;
use thiserror::Error;

/// Errors raised while loading a lexicon or shaping a table from it.
///
/// Every variant is fatal for the command that triggered it: no partial
/// table is produced once one of these is returned.
///
/// # Examples
///
/// ```
/// use liftlex_core::LiftError;
///
/// let err = LiftError::UnknownField {
///     name: "nosuchfield".to_string(),
///     available: vec!["form".to_string(), "gloss".to_string()],
/// };
/// assert!(err.to_string().contains("nosuchfield"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiftError {
    /// A requested field is not in the catalog.
    #[error("Unknown field '{name}'. Available fields: {}", .available.join(", "))]
    UnknownField {
        /// The name that failed to resolve.
        name: String,
        /// Every catalog field name, in catalog order.
        available: Vec<String>,
    },

    /// The requested fields live on levels that are siblings, so their rows
    /// cannot be joined (e.g. sense and variant fields together).
    #[error("Cannot build a table from {first} field '{first_field}' and {second} field '{second_field}': an entry may have several of both")]
    IncompatibleLevels {
        /// Level of the first offending field.
        first: Level,
        /// Name of the first offending field.
        first_field: String,
        /// Level of the second offending field.
        second: Level,
        /// Name of the second offending field.
        second_field: String,
    },

    /// No field was requested.
    #[error("No field requested")]
    EmptyFieldList,

    /// The input is not well-formed XML or is not a LIFT document.
    #[error("Malformed lexicon at line {line}, column {column}: {message}")]
    MalformedDocument {
        /// Parser message.
        message: String,
        /// Line number (1-based).
        line: u32,
        /// Column number (1-based).
        column: u32,
    },

    /// A catalog path expression could not be compiled.
    #[error("Invalid path '{path}' for field '{field}': {reason}")]
    InvalidPath {
        /// Field owning the path.
        field: String,
        /// The offending path text.
        path: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The field has several subfield columns and none was chosen.
    #[error("The field '{field}' needs a subfield. Possible values are: {}", .available.join(", "))]
    SubfieldRequired {
        /// Field name.
        field: String,
        /// Subfields present in the table.
        available: Vec<String>,
    },

    /// The requested subfield does not occur for the field.
    #[error("The field '{field}' has no '{subfield}' subfield. Possible subfield(s): {}", .available.join(", "))]
    UnknownSubfield {
        /// Field name.
        field: String,
        /// The requested subfield.
        subfield: String,
        /// Subfields present in the table.
        available: Vec<String>,
    },

    /// A subfield was given for a field that has none.
    #[error("The field '{0}' does not have subfields")]
    NoSubfields(String),
}

/// Result alias for lexicon operations.
pub type Result<T> = std::result::Result<T, LiftError>;
