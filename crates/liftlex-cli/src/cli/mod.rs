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


//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by category and flattened into one top-level enum:
//!
//! - [`core`]: validate, summary
//! - [`query`]: fields, values, count, subfields
//! - [`conversion`]: convert

mod conversion;
mod core;
mod query;

use crate::error::CliError;
use clap::Subcommand;

pub use conversion::ConversionCommands;
pub use core::CoreCommands;
pub use query::QueryCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Core (validate, summary)
/// ├── Query (fields, values, count, subfields)
/// └── Conversion (convert)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use liftlex_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Query commands - flattened to appear at top level
    #[command(flatten)]
    Query(QueryCommands),

    // Conversion commands - flattened to appear at top level
    #[command(flatten)]
    Conversion(ConversionCommands),
}

impl Commands {
    /// Execute the command, writing results to `output` or stdout.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - File I/O fails
    /// - The lexicon cannot be parsed or fails validation
    /// - A field name or subfield is not valid for the request
    /// - Conversion fails
    pub fn execute(self, output: Option<&str>) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(output),
            Commands::Query(cmd) => cmd.execute(output),
            Commands::Conversion(cmd) => cmd.execute(output),
        }
    }
}
