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


//! Validate command - LIFT structure validation

use super::{read_file, status_mark, write_output};
use crate::error::CliError;
use liftlex_core::schema::LiftValidator;
use liftlex_core::{summarize, LiftDocument};

/// Validate a lexicon against the LIFT element vocabulary.
///
/// # Output
///
/// On success, a ✓ line with the LIFT version and entry count; on failure,
/// a ✗ line, and the validation error is returned.
///
/// # Examples
///
/// ```no_run
/// use liftlex_cli::commands::validate;
///
/// # fn main() -> Result<(), liftlex_cli::error::CliError> {
/// validate("lexicon.lift", None)?;
/// # Ok(())
/// # }
/// ```
pub fn validate(file: &str, output: Option<&str>) -> Result<(), CliError> {
    let content = read_file(file)?;

    if let Err(e) = LiftValidator::new().validate(&content) {
        write_output(&format!("{} {}\n", status_mark(false, output), file), output)?;
        return Err(e.into());
    }

    let doc = LiftDocument::parse(&content)?;
    let summary = summarize(&doc);
    let report = format!(
        "{} {}\n  Version: {}\n  Entries: {}\n",
        status_mark(true, output),
        file,
        doc.version().unwrap_or("unknown"),
        summary.entry_count
    );
    write_output(&report, output)
}
