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


//! Error types for CLDF export.

use thiserror::Error;

/// CLDF export error types.
///
/// # Examples
///
/// ```
/// use liftlex_cldf::CldfError;
///
/// let err = CldfError::MissingFormColumn {
///     available: vec!["ID".to_string(), "gloss".to_string()],
/// };
/// assert!(err.to_string().contains("'form'"));
/// ```
#[derive(Debug, Error)]
pub enum CldfError {
    /// A wordlist needs word forms, but the table has no `form` column.
    #[error("A CLDF wordlist requires the 'form' field (table has: {})", .available.join(", "))]
    MissingFormColumn {
        /// Fields present in the table.
        available: Vec<String>,
    },

    /// I/O error while writing the dataset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Error while serializing the metadata.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid UTF-8 in CSV output.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Context where the invalid UTF-8 was encountered.
        context: String,
    },
}

/// Result type for CLDF operations.
pub type Result<T> = std::result::Result<T, CldfError>;
