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


//! Single-field queries: values, frequencies and subfields

use super::{read_file, write_output};
use crate::error::CliError;
use liftlex_core::{build_table, catalog, BuildOptions, LiftDocument, LiftError};
use liftlex_csv::{frequencies_to_csv, to_csv, ToCsvConfig};
use tracing::debug;

/// List every value of one field, one row per node of the field's level.
///
/// The output is CSV with the two header rows (field, subfield).
pub fn values(file: &str, field: &str, output: Option<&str>) -> Result<(), CliError> {
    catalog::resolve(field)?;
    let content = read_file(file)?;
    let doc = LiftDocument::parse(&content)?;
    let table = build_table(&doc, &[field], BuildOptions::repeat())?;
    debug!(field, rows = table.len(), "values extracted");
    write_output(&to_csv(&table)?, output)
}

/// Frequency list of one field as `value,count` CSV.
///
/// Language-keyed fields need `subfield` unless the lexicon uses a single
/// language for them.
pub fn count(
    file: &str,
    field: &str,
    subfield: Option<&str>,
    output: Option<&str>,
) -> Result<(), CliError> {
    let def = catalog::resolve(field)?;
    if subfield.is_some_and(|s| !s.is_empty()) && !def.has_subfield() {
        return Err(LiftError::NoSubfields(def.name.to_string()).into());
    }
    let content = read_file(file)?;
    let doc = LiftDocument::parse(&content)?;
    let table = build_table(&doc, &[field], BuildOptions::repeat())?;
    let freq = liftlex_core::count(&table, field, subfield)?;
    debug!(field, distinct = freq.len(), "frequencies computed");
    write_output(&frequencies_to_csv(&freq, &ToCsvConfig::default())?, output)
}

/// The subfield values of one field found in the lexicon.
///
/// # Output
///
/// ```text
/// lang
/// ====
/// en
/// tpi
/// ```
pub fn subfields(file: &str, field: &str, output: Option<&str>) -> Result<(), CliError> {
    let def = catalog::resolve(field)?;
    let name = def
        .subfield_name()
        .ok_or_else(|| LiftError::NoSubfields(def.name.to_string()))?;
    let content = read_file(file)?;
    let doc = LiftDocument::parse(&content)?;
    let table = build_table(&doc, &[field], BuildOptions::repeat())?;

    let mut text = format!("{}\n====\n", name);
    for value in liftlex_core::subfields(&table, field)? {
        text.push_str(&value);
        text.push('\n');
    }
    write_output(&text, output)
}
