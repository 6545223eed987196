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


//! Result table to CLDF Wordlist conversion.

use crate::error::{CldfError, Result};
use crate::mapping::{mapping_for, Target, WORDLIST_MAPPING};
use liftlex_core::{ResultTable, Row};
use serde_json::{json, Value as JsonValue};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CLDF_TERMS: &str = "http://cldf.clld.org/v1.0/terms.rdf";

/// File names of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistConfig {
    /// FormTable file name (default: `forms.csv`).
    pub forms_file: String,
    /// Metadata file name (default: `metadata.json`).
    pub metadata_file: String,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            forms_file: "forms.csv".to_string(),
            metadata_file: "metadata.json".to_string(),
        }
    }
}

/// A rendered Wordlist dataset, ready to be written.
#[derive(Debug, Clone)]
pub struct WordlistDataset {
    /// CSVW metadata describing the FormTable.
    pub metadata: JsonValue,
    /// FormTable content.
    pub forms_csv: String,
    /// Number of form rows.
    pub form_count: usize,
    /// Table fields with no FormTable column, in column order.
    pub dropped: Vec<String>,
    config: WordlistConfig,
}

impl WordlistDataset {
    /// Write both files into `dir`, creating it when missing.
    ///
    /// Returns the written paths, FormTable first.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let forms = dir.join(&self.config.forms_file);
        fs::write(&forms, &self.forms_csv)?;

        let metadata = dir.join(&self.config.metadata_file);
        let mut text = serde_json::to_string_pretty(&self.metadata)?;
        text.push('\n');
        fs::write(&metadata, text)?;

        debug!(dir = %dir.display(), forms = self.form_count, "wordlist written");
        Ok(vec![forms, metadata])
    }
}

/// Convert a result table into a Wordlist with default file names.
pub fn to_wordlist(table: &ResultTable) -> Result<WordlistDataset> {
    to_wordlist_with_config(table, &WordlistConfig::default())
}

/// Convert a result table into a Wordlist.
///
/// Every non-empty `form` cell becomes one FormTable row with the form's
/// language as `Language_ID`. `ID` is `<deepest id>-<lang>`, suffixed with
/// `-2`, `-3`, ... when fanned-out rows would repeat it. `Parent_ID` is the
/// id of the deepest node's parent, empty for entries.
///
/// # Errors
///
/// Returns [`CldfError::MissingFormColumn`] when `form` is not in the
/// table.
///
/// # Examples
///
/// ```
/// use liftlex_core::{build_table, BuildOptions, LiftDocument};
/// use liftlex_cldf::to_wordlist;
///
/// let doc = LiftDocument::parse(r#"<lift><entry id="1">
///   <lexical-unit><form lang="tww"><text>efe</text></form></lexical-unit>
///   <sense><gloss lang="en"><text>road</text></gloss></sense>
/// </entry></lift>"#).unwrap();
/// let table = build_table(&doc, &["form", "gloss"], BuildOptions::default()).unwrap();
///
/// let dataset = to_wordlist(&table).unwrap();
/// assert_eq!(
///     dataset.forms_csv,
///     "ID,Language_ID,Parameter_ID,Form,Parent_ID\n1.1-tww,tww,road,efe,1\n"
/// );
/// ```
pub fn to_wordlist_with_config(
    table: &ResultTable,
    config: &WordlistConfig,
) -> Result<WordlistDataset> {
    let form_columns: Vec<usize> = table.field_columns("form");
    if form_columns.is_empty() {
        return Err(CldfError::MissingFormColumn {
            available: field_names(table),
        });
    }

    let dropped: Vec<String> = field_names(table)
        .into_iter()
        .filter(|f| mapping_for(f).is_none())
        .collect();
    for field in &dropped {
        warn!(field = %field, "field has no CLDF FormTable column, dropped");
    }

    // Plain columns, in mapping order, for the fields actually present.
    let extra: Vec<(&'static str, Vec<usize>)> = WORDLIST_MAPPING
        .iter()
        .filter_map(|m| match m.target {
            Target::Column(name) => {
                let cols = table.field_columns(m.field);
                (!cols.is_empty()).then_some((name, cols))
            }
            _ => None,
        })
        .collect();
    let parameter_columns: Vec<usize> = WORDLIST_MAPPING
        .iter()
        .filter(|m| m.target == Target::Parameter)
        .flat_map(|m| table.field_columns(m.field))
        .collect();

    let mut header = vec!["ID", "Language_ID", "Parameter_ID", "Form", "Parent_ID"];
    header.extend(extra.iter().map(|(name, _)| *name));

    let mut buffer = Vec::new();
    let mut form_count = 0;
    {
        let mut wtr = csv::Writer::from_writer(&mut buffer);
        wtr.write_record(&header)?;

        let mut seen: HashMap<String, usize> = HashMap::new();
        for row in table.rows() {
            let leaf = row.leaf().map(|n| n.id.as_str()).unwrap_or("");
            let parent = parent_id(row);
            let parameter = first_non_empty(row, &parameter_columns);

            for &col in &form_columns {
                let form = row.cells[col].as_str();
                if form.is_empty() {
                    continue;
                }
                let lang = table.columns()[col].subfield.as_str();
                let base = format!("{}-{}", leaf, lang);
                let n = seen.entry(base.clone()).or_insert(0);
                *n += 1;
                let id = if *n == 1 { base } else { format!("{}-{}", base, n) };

                let mut record = vec![id, lang.to_string(), parameter.to_string(), form.to_string()];
                record.push(parent.to_string());
                record.extend(
                    extra
                        .iter()
                        .map(|(_, cols)| first_non_empty(row, cols).to_string()),
                );
                wtr.write_record(&record)?;
                form_count += 1;
            }
        }
        wtr.flush()?;
    }
    let forms_csv = String::from_utf8(buffer).map_err(|_| CldfError::InvalidUtf8 {
        context: "FormTable".to_string(),
    })?;

    debug!(forms = form_count, dropped = dropped.len(), "wordlist built");
    Ok(WordlistDataset {
        metadata: metadata(config, &extra),
        forms_csv,
        form_count,
        dropped,
        config: config.clone(),
    })
}

fn field_names(table: &ResultTable) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for column in table.columns() {
        if !names.contains(&column.field) {
            names.push(column.field.clone());
        }
    }
    names
}

fn parent_id(row: &Row) -> &str {
    match row.lineage.len() {
        0 | 1 => "",
        n => row.lineage[n - 2].id.as_str(),
    }
}

fn first_non_empty<'r>(row: &'r Row, columns: &[usize]) -> &'r str {
    columns
        .iter()
        .map(|&c| row.cells[c].as_str())
        .find(|v| !v.is_empty())
        .unwrap_or("")
}

/// CSVW metadata for a Wordlist with one FormTable.
fn metadata(config: &WordlistConfig, extra: &[(&'static str, Vec<usize>)]) -> JsonValue {
    let term = |name: &str| format!("{}#{}", CLDF_TERMS, name);

    let mut columns = vec![
        json!({
            "name": "ID",
            "required": true,
            "propertyUrl": term("id"),
            "datatype": "string"
        }),
        json!({
            "name": "Language_ID",
            "required": true,
            "propertyUrl": term("languageReference"),
            "datatype": "string"
        }),
        json!({
            "name": "Parameter_ID",
            "required": true,
            "propertyUrl": term("parameterReference"),
            "datatype": "string"
        }),
        json!({
            "name": "Form",
            "required": true,
            "propertyUrl": term("form"),
            "datatype": "string"
        }),
        json!({
            "name": "Parent_ID",
            "datatype": "string"
        }),
    ];
    columns.extend(
        extra
            .iter()
            .map(|(name, _)| json!({ "name": name, "datatype": "string" })),
    );

    json!({
        "@context": ["http://www.w3.org/ns/csvw", { "@language": "en" }],
        "dc:conformsTo": term("Wordlist"),
        "dialect": { "commentPrefix": null },
        "tables": [
            {
                "url": config.forms_file,
                "dc:conformsTo": term("FormTable"),
                "tableSchema": {
                    "columns": columns,
                    "primaryKey": ["ID"]
                }
            }
        ]
    })
}
