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


//! liftlex CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Inspection
//!
//! - **validate**: Check a lexicon against the LIFT element vocabulary
//! - **summary**: Entity counts and language inventories
//!
//! ## Queries
//!
//! - **fields**: The field catalog, optionally filtered to one lexicon
//! - **values**: One field as a table
//! - **count**: Value frequencies of one field
//! - **subfields**: Languages in use for one field
//!
//! ## Conversion
//!
//! - **convert**: Any list of fields as CSV or as a CLDF Wordlist
//!
//! # Examples
//!
//! ```no_run
//! use liftlex_cli::commands::{convert, ConvertOptions, OutputFormat};
//!
//! # fn main() -> Result<(), liftlex_cli::error::CliError> {
//! let fields = vec!["form".to_string(), "gloss".to_string()];
//! let options = ConvertOptions {
//!     fields: &fields,
//!     aggregate: true,
//!     aggregate_separator: ";",
//!     delimiter: ",",
//!     dir: "cldf",
//! };
//! convert("lexicon.lift", OutputFormat::Csv, &options, Some("table.csv"))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input files are size-checked before they are read (configurable via
//! `LIFTLEX_MAX_FILE_SIZE`).
//!
//! # Error Handling
//!
//! All commands return `Result<(), CliError>`. Nothing is written to the
//! output file when a command fails.

pub mod cli;
pub mod commands;
pub mod error;
