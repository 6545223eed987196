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


//! Conversion of lexicons into tables.

use crate::commands::{self, ConvertOptions, OutputFormat};
use crate::error::CliError;
use clap::Subcommand;

/// Conversion commands.
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert a LIFT file into a table
    ///
    /// Extracts the given fields into rows, one per node of the deepest
    /// level involved, or one per node of the shallowest level with
    /// --aggregate. CSV goes to stdout (or --output); a CLDF Wordlist is
    /// written to --dir.
    Convert {
        /// Output format
        #[arg(short = 'a', long, value_enum, default_value = "CLDFWordlist")]
        format: OutputFormat,

        /// Comma-separated list of fields, in column order
        #[arg(short, long, required = true, value_delimiter = ',')]
        field: Vec<String>,

        /// Aggregate rows on the shallowest level
        #[arg(short = 'g', long)]
        aggregate: bool,

        /// Separator between aggregated values
        #[arg(short = 'p', long, default_value = ";")]
        aggresep: String,

        /// Directory of the CLDF Wordlist
        #[arg(short, long, default_value = "cldf")]
        dir: String,

        /// CSV delimiter (a single character, or "tab")
        #[arg(long, default_value = ",")]
        delimiter: String,

        /// Input LIFT file
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl ConversionCommands {
    /// Execute the conversion command.
    pub fn execute(self, output: Option<&str>) -> Result<(), CliError> {
        match self {
            ConversionCommands::Convert {
                format,
                field,
                aggregate,
                aggresep,
                dir,
                delimiter,
                file,
            } => {
                let options = ConvertOptions {
                    fields: &field,
                    aggregate,
                    aggregate_separator: &aggresep,
                    delimiter: &delimiter,
                    dir: &dir,
                };
                commands::convert(&file, format, &options, output)
            }
        }
    }
}
