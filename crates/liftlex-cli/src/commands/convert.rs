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


//! Convert command - build a table and emit it as CSV or a CLDF Wordlist

use super::{read_file, status_mark, write_output};
use crate::error::CliError;
use clap::ValueEnum;
use liftlex_cldf::to_wordlist;
use liftlex_core::{BuildOptions, LiftDocument, TableBuilder};
use liftlex_csv::{to_csv_with_config, ToCsvConfig};
use tracing::{info, warn};

/// Output formats of `convert`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// CSV with two header rows
    #[value(name = "csv")]
    Csv,
    /// CLDF Wordlist dataset (forms.csv + metadata.json)
    #[value(name = "CLDFWordlist")]
    CldfWordlist,
}

/// Options of the `convert` command.
#[derive(Debug, Clone)]
pub struct ConvertOptions<'a> {
    /// Fields to extract, in column order.
    pub fields: &'a [String],
    /// Aggregate descendants into one row per entry-side node.
    pub aggregate: bool,
    /// Separator between aggregated values.
    pub aggregate_separator: &'a str,
    /// CSV delimiter.
    pub delimiter: &'a str,
    /// Target directory of a CLDF dataset.
    pub dir: &'a str,
}

/// Build a table from `file` and emit it in `format`.
///
/// CSV goes to `output` (stdout by default). A CLDF Wordlist is written to
/// `options.dir`, and a report of the written files goes to `output`.
///
/// Field names and separators are checked before the lexicon is read, so a
/// bad request never writes anything.
pub fn convert(
    file: &str,
    format: OutputFormat,
    options: &ConvertOptions<'_>,
    output: Option<&str>,
) -> Result<(), CliError> {
    let csv_config = match format {
        OutputFormat::Csv => ToCsvConfig::with_delimiter(options.delimiter)?,
        OutputFormat::CldfWordlist => ToCsvConfig::default(),
    };
    csv_config.check_separator(options.aggregate_separator)?;
    if format == OutputFormat::CldfWordlist && options.dir.trim().is_empty() {
        return Err(CliError::invalid_input(
            "a CLDF Wordlist needs a target directory (--dir)",
        ));
    }

    let build_options = if options.aggregate {
        BuildOptions::aggregate(options.aggregate_separator)
    } else {
        BuildOptions::repeat()
    };
    let builder = TableBuilder::new(options.fields, build_options)?;

    let content = read_file(file)?;
    let doc = LiftDocument::parse(&content)?;
    let table = builder.build(&doc);
    info!(
        file,
        rows = table.len(),
        columns = table.columns().len(),
        warnings = table.warnings().len(),
        "table built"
    );

    match format {
        OutputFormat::Csv => write_output(&to_csv_with_config(&table, &csv_config)?, output),
        OutputFormat::CldfWordlist => {
            let dataset = to_wordlist(&table)?;
            let paths = dataset.write_to_dir(options.dir)?;

            let mut report = String::new();
            for path in &paths {
                report.push_str(&format!("{} {}\n", status_mark(true, output), path.display()));
            }
            report.push_str(&format!("  Forms: {}\n", dataset.form_count));
            if !dataset.dropped.is_empty() {
                warn!(fields = ?dataset.dropped, "fields not exported to the wordlist");
                report.push_str(&format!("  Dropped fields: {}\n", dataset.dropped.join(", ")));
            }
            write_output(&report, output)
        }
    }
}
