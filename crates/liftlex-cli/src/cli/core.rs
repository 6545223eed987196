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


//! Core commands that operate on a whole lexicon.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Core commands.
///
/// - **Validate**: Check the lexicon against the LIFT element vocabulary
/// - **Summary**: Count entities and list languages
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate a LIFT file
    ///
    /// Checks that every element is known, sits under an allowed parent,
    /// carries its required attributes and respects child cardinalities.
    /// The exit code reflects the result.
    Validate {
        /// Input LIFT file
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Summarize a LIFT file
    ///
    /// Prints the number of entries, senses, variants and examples, and
    /// the object and meta languages in use.
    Summary {
        /// Input LIFT file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CoreCommands {
    /// Execute the core command.
    pub fn execute(self, output: Option<&str>) -> Result<(), CliError> {
        match self {
            CoreCommands::Validate { file } => commands::validate(&file, output),
            CoreCommands::Summary { file, json } => commands::summary(&file, json, output),
        }
    }
}
