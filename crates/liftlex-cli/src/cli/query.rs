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


//! Query commands over the field catalog and single-field tables.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Query commands.
///
/// - **Fields**: List the field catalog
/// - **Values**: Tabulate one field
/// - **Count**: Frequency table of one field
/// - **Subfields**: Languages found for one field
#[derive(Subcommand)]
pub enum QueryCommands {
    /// List the extractable fields
    ///
    /// Prints the field catalog as CSV: name, node path, value path,
    /// level, multiplicity, mixed-content flag and description.
    Fields {
        /// Optional LIFT file, checked for readability
        #[arg(value_name = "FILE")]
        file: Option<String>,
    },

    /// List the values of one field
    Values {
        /// Field to list
        #[arg(short, long, default_value = "form")]
        field: String,

        /// Input LIFT file
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Count the values of one field
    ///
    /// Prints a value,count table sorted by descending count. Fields with
    /// several languages need a subfield.
    Count {
        /// Field to tabulate
        #[arg(short, long, default_value = "category")]
        field: String,

        /// Subfield (language) of the field, if relevant
        #[arg(short, long)]
        subfield: Option<String>,

        /// Input LIFT file
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// List the subfields (languages) of one field
    Subfields {
        /// Field to inspect
        #[arg(short, long, default_value = "form")]
        field: String,

        /// Input LIFT file
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl QueryCommands {
    /// Execute the query command.
    pub fn execute(self, output: Option<&str>) -> Result<(), CliError> {
        match self {
            QueryCommands::Fields { file } => commands::fields(file.as_deref(), output),
            QueryCommands::Values { field, file } => commands::values(&file, &field, output),
            QueryCommands::Count {
                field,
                subfield,
                file,
            } => commands::count(&file, &field, subfield.as_deref(), output),
            QueryCommands::Subfields { field, file } => {
                commands::subfields(&file, &field, output)
            }
        }
    }
}
