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

//! The flat table produced by the [`TableBuilder`](crate::TableBuilder).

use crate::level::Level;
use std::fmt;

/// A two-level column header: field name and subfield (language code, or
/// empty when the field has no subfield).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnKey {
    /// Catalog field name.
    pub field: String,
    /// Language code, or empty.
    pub subfield: String,
}

impl ColumnKey {
    /// Create a column key.
    pub fn new(field: impl Into<String>, subfield: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            subfield: subfield.into(),
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subfield.is_empty() {
            f.write_str(&self.field)
        } else {
            write!(f, "{}/{}", self.field, self.subfield)
        }
    }
}

/// A level node that contributed to a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    /// Level of the node.
    pub level: Level,
    /// Identifier as produced by the walker.
    pub id: String,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Contributing nodes, shallowest first. A row whose ancestor had no
    /// descendants stops at the ancestor.
    pub lineage: Vec<NodeRef>,
    /// One cell per column; missing values are empty strings.
    pub cells: Vec<String>,
}

impl Row {
    /// The shallowest contributing node.
    pub fn root(&self) -> Option<&NodeRef> {
        self.lineage.first()
    }

    /// The deepest contributing node.
    pub fn leaf(&self) -> Option<&NodeRef> {
        self.lineage.last()
    }
}

/// A non-fatal data-quality condition found while building a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A unique field (per language, for `*_LANG` kinds) matched several
    /// nodes; the first match was kept.
    AmbiguousUniqueField {
        /// Field name.
        field: String,
        /// Id of the level node.
        node_id: String,
        /// Shared language, if the field is language-keyed.
        language: Option<String>,
        /// Number of matches.
        count: usize,
        /// Line of the first match.
        line: u32,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::AmbiguousUniqueField {
                field,
                node_id,
                language,
                count,
                line,
            } => {
                write!(f, "field '{}' matched {} times on '{}'", field, count, node_id)?;
                if let Some(lang) = language {
                    write!(f, " for language '{}'", lang)?;
                }
                write!(f, " (line {}); first value kept", line)
            }
        }
    }
}

/// An ordered table with two-level column headers.
///
/// Invariant: every row has exactly `columns().len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    columns: Vec<ColumnKey>,
    rows: Vec<Row>,
    warnings: Vec<Warning>,
}

impl ResultTable {
    pub(crate) fn new(columns: Vec<ColumnKey>, rows: Vec<Row>, warnings: Vec<Warning>) -> Self {
        debug_assert!(rows.iter().all(|r| r.cells.len() == columns.len()));
        Self {
            columns,
            rows,
            warnings,
        }
    }

    /// Column headers, in output order.
    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    /// Rows, in output order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Data-quality warnings gathered while building.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indices of the columns belonging to `field`, in column order.
    pub fn field_columns(&self, field: &str) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.field == field)
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the `(field, subfield)` column.
    pub fn column_index(&self, field: &str, subfield: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.field == field && c.subfield == subfield)
    }

    /// The values of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |r| r.cells[index].as_str())
    }

    /// The cell at `(row, field, subfield)`.
    pub fn get(&self, row: usize, field: &str, subfield: &str) -> Option<&str> {
        let col = self.column_index(field, subfield)?;
        self.rows.get(row).map(|r| r.cells[col].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultTable {
        let columns = vec![
            ColumnKey::new("form", "tww"),
            ColumnKey::new("gloss", "en"),
            ColumnKey::new("gloss", "tpi"),
        ];
        let rows = vec![Row {
            lineage: vec![
                NodeRef {
                    level: Level::Entry,
                    id: "1".to_string(),
                },
                NodeRef {
                    level: Level::Sense,
                    id: "1.1".to_string(),
                },
            ],
            cells: vec!["efe".to_string(), "road".to_string(), "rod".to_string()],
        }];
        ResultTable::new(columns, rows, Vec::new())
    }

    #[test]
    fn test_lookup_by_column_key() {
        let table = sample();
        assert_eq!(table.get(0, "gloss", "tpi"), Some("rod"));
        assert_eq!(table.get(0, "gloss", "fr"), None);
        assert_eq!(table.field_columns("gloss"), vec![1, 2]);
    }

    #[test]
    fn test_row_lineage_ends() {
        let table = sample();
        let row = &table.rows()[0];
        assert_eq!(row.root().unwrap().id, "1");
        assert_eq!(row.leaf().unwrap().level, Level::Sense);
    }

    #[test]
    fn test_column_key_display() {
        assert_eq!(ColumnKey::new("gloss", "en").to_string(), "gloss/en");
        assert_eq!(ColumnKey::new("ID", "").to_string(), "ID");
    }
}
