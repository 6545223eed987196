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


//! Structured error types for the liftlex CLI.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the error
//! and exits with a failure status.

use liftlex_cldf::CldfError;
use liftlex_core::schema::ValidationError;
use liftlex_core::LiftError;
use liftlex_csv::CsvError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for liftlex CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use liftlex_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB). Set LIFTLEX_MAX_FILE_SIZE (in bytes) to raise it")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// Lexicon parsing or table building failed.
    #[error("{0}")]
    Lift(#[from] LiftError),

    /// The document breaks the LIFT element vocabulary.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// CSV output failed.
    #[error("CSV conversion error: {0}")]
    CsvConversion(String),

    /// CLDF export failed.
    #[error("CLDF conversion error: {0}")]
    CldfConversion(String),

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftlex_cli::error::CliError;
    ///
    /// let err = CliError::file_too_large("huge.lift", 3 * 1024 * 1024, 1024 * 1024);
    /// assert!(err.to_string().contains("(1 MB)"));
    /// ```
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<CsvError> for CliError {
    fn from(err: CsvError) -> Self {
        Self::CsvConversion(err.to_string())
    }
}

impl From<CldfError> for CliError {
    fn from(err: CldfError) -> Self {
        Self::CldfConversion(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: err.to_string(),
        }
    }
}
