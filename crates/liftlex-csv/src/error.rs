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


//! Error types for CSV output.

use thiserror::Error;

/// CSV output error types.
///
/// # Examples
///
/// ```
/// use liftlex_csv::CsvError;
///
/// let err = CsvError::SeparatorConflict {
///     separator: ",".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Aggregate separator ',' must differ from the CSV delimiter"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// The aggregate separator equals the field delimiter, so aggregated
    /// cells could not be told apart from columns.
    #[error("Aggregate separator '{separator}' must differ from the CSV delimiter")]
    SeparatorConflict {
        /// The offending separator.
        separator: String,
    },

    /// The delimiter cannot be used as a single-byte CSV delimiter.
    ///
    /// # Examples
    ///
    /// ```
    /// use liftlex_csv::CsvError;
    ///
    /// let err = CsvError::InvalidDelimiter("→".to_string());
    /// assert!(err.to_string().contains("single ASCII"));
    /// ```
    #[error("Invalid delimiter '{0}': expected a single ASCII character")]
    InvalidDelimiter(String),

    /// A row has a different width than the header.
    #[error("Row width mismatch: expected {expected} columns, got {actual} in row {row}")]
    WidthMismatch {
        /// Expected number of columns.
        expected: usize,
        /// Actual number of cells in the row.
        actual: usize,
        /// Row number where the mismatch occurred (1-based).
        row: usize,
    },

    /// I/O error during CSV writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Invalid UTF-8 in CSV output.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Context where the invalid UTF-8 was encountered.
        context: String,
    },
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;
