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


//! CLI command implementations

mod convert;
mod fields;
mod query;
mod summary;
mod validate;

pub use convert::{convert, ConvertOptions, OutputFormat};
pub use fields::fields;
pub use query::{count, subfields, values};
pub use summary::summary;
pub use validate::validate;

use crate::error::CliError;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};

/// Default maximum file size to prevent OOM attacks (1 GB)
/// Can be overridden via LIFTLEX_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Maximum file size from `LIFTLEX_MAX_FILE_SIZE`, or the default when unset
/// or unparsable.
fn get_max_file_size() -> u64 {
    std::env::var("LIFTLEX_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// The size is checked against the limit before anything is read.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The file size exceeds the maximum allowed size (configurable via `LIFTLEX_MAX_FILE_SIZE`)
/// - The file cannot be read
/// - The file contains invalid UTF-8
///
/// # Examples
///
/// ```no_run
/// use liftlex_cli::commands::read_file;
///
/// # fn main() -> Result<(), liftlex_cli::error::CliError> {
/// let content = read_file("lexicon.lift")?;
/// assert!(content.contains("<lift"));
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
///
/// # Examples
///
/// ```no_run
/// use liftlex_cli::commands::write_output;
///
/// # fn main() -> Result<(), liftlex_cli::error::CliError> {
/// write_output("value,count\n", None)?;
/// write_output("value,count\n", Some("counts.csv"))?;
/// # Ok(())
/// # }
/// ```
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// A ✓ or ✗ marker, colored only when the report goes to stdout.
pub(crate) fn status_mark(ok: bool, output: Option<&str>) -> String {
    let mark = if ok { "✓" } else { "✗" };
    match (output, ok) {
        (Some(_), _) => mark.to_string(),
        (None, true) => mark.green().bold().to_string(),
        (None, false) => mark.red().bold().to_string(),
    }
}
