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


//! Write result tables, frequency lists and the field catalog as CSV.

use crate::error::{CsvError, Result};
use liftlex_core::{FieldDefinition, ResultTable};
use std::io::Write;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header rows (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

impl ToCsvConfig {
    /// Default configuration with a delimiter given as text.
    ///
    /// `\t` and `tab` are accepted for a tab.
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::InvalidDelimiter`] unless `delimiter` is a single
    /// ASCII character.
    pub fn with_delimiter(delimiter: &str) -> Result<Self> {
        let byte = match delimiter {
            "\\t" | "tab" => b'\t',
            d if d.len() == 1 && d.is_ascii() => d.as_bytes()[0],
            d => return Err(CsvError::InvalidDelimiter(d.to_string())),
        };
        Ok(Self {
            delimiter: byte,
            ..Self::default()
        })
    }

    /// Check that aggregated cells joined with `separator` stay
    /// distinguishable from columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use liftlex_csv::ToCsvConfig;
    ///
    /// let config = ToCsvConfig::default();
    /// assert!(config.check_separator(";").is_ok());
    /// assert!(config.check_separator(",").is_err());
    /// ```
    pub fn check_separator(&self, separator: &str) -> Result<()> {
        let delimiter = char::from(self.delimiter).to_string();
        if separator == delimiter {
            return Err(CsvError::SeparatorConflict {
                separator: separator.to_string(),
            });
        }
        Ok(())
    }

    fn writer<W: Write>(&self, writer: W) -> csv::Writer<W> {
        csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(self.quote_style)
            .from_writer(writer)
    }
}

/// Convert a result table to a CSV string.
///
/// The first header row holds field names, the second subfields (empty for
/// fields without subfields).
///
/// # Example
///
/// ```
/// use liftlex_core::{build_table, BuildOptions, LiftDocument};
/// use liftlex_csv::to_csv;
///
/// let doc = LiftDocument::parse(r#"<lift><entry id="1">
///   <sense><gloss lang="en"><text>road</text></gloss></sense>
/// </entry></lift>"#).unwrap();
/// let table = build_table(&doc, &["ID", "gloss"], BuildOptions::default()).unwrap();
///
/// assert_eq!(to_csv(&table).unwrap(), "ID,gloss\n,en\n1,road\n");
/// ```
pub fn to_csv(table: &ResultTable) -> Result<String> {
    to_csv_with_config(table, &ToCsvConfig::default())
}

/// Convert a result table to a CSV string with custom configuration.
pub fn to_csv_with_config(table: &ResultTable, config: &ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(estimate_size(table));
    to_csv_writer_with_config(table, &mut buffer, config)?;
    into_string(buffer)
}

/// Write a result table as CSV using a writer.
pub fn to_csv_writer<W: Write>(table: &ResultTable, writer: W) -> Result<()> {
    to_csv_writer_with_config(table, writer, &ToCsvConfig::default())
}

/// Write a result table as CSV with custom configuration.
///
/// # Errors
///
/// Returns [`CsvError::WidthMismatch`] if a row does not match the header
/// width, or an I/O error from the writer.
pub fn to_csv_writer_with_config<W: Write>(
    table: &ResultTable,
    writer: W,
    config: &ToCsvConfig,
) -> Result<()> {
    let mut wtr = config.writer(writer);
    let width = table.columns().len();

    if config.include_headers {
        wtr.write_record(table.columns().iter().map(|c| c.field.as_str()))?;
        wtr.write_record(table.columns().iter().map(|c| c.subfield.as_str()))?;
    }

    for (index, row) in table.rows().iter().enumerate() {
        if row.cells.len() != width {
            return Err(CsvError::WidthMismatch {
                expected: width,
                actual: row.cells.len(),
                row: index + 1,
            });
        }
        wtr.write_record(&row.cells)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a frequency list as `value,count` CSV.
///
/// # Example
///
/// ```
/// use liftlex_csv::{frequencies_to_csv, ToCsvConfig};
///
/// let freq = vec![("Noun".to_string(), 2), ("".to_string(), 1)];
/// let csv = frequencies_to_csv(&freq, &ToCsvConfig::default()).unwrap();
/// assert_eq!(csv, "value,count\nNoun,2\n,1\n");
/// ```
pub fn frequencies_to_csv(frequencies: &[(String, usize)], config: &ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut wtr = config.writer(&mut buffer);
        if config.include_headers {
            wtr.write_record(["value", "count"])?;
        }
        for (value, count) in frequencies {
            wtr.write_record([value.as_str(), count.to_string().as_str()])?;
        }
        wtr.flush()?;
    }
    into_string(buffer)
}

/// Write field definitions as CSV, one field per row.
pub fn catalog_to_csv(fields: &[FieldDefinition], config: &ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut wtr = config.writer(&mut buffer);
        if config.include_headers {
            wtr.write_record([
                "name",
                "node_path",
                "value_path",
                "level",
                "multiplicity",
                "mixed_content",
                "description",
            ])?;
        }
        for def in fields {
            let level = def.level.to_string().to_uppercase();
            let mixed = def.mixed_content.to_string();
            wtr.write_record([
                def.name,
                def.node_path,
                def.value_path,
                level.as_str(),
                def.multiplicity.as_str(),
                mixed.as_str(),
                def.description,
            ])?;
        }
        wtr.flush()?;
    }
    into_string(buffer)
}

fn into_string(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Estimate CSV output size for pre-allocation: 16 bytes per cell, at
/// least 1KB.
fn estimate_size(table: &ResultTable) -> usize {
    ((table.len() + 2) * table.columns().len() * 16).max(1024)
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftlex_core::{build_table, catalog, BuildOptions, LiftDocument};

    const LEXICON: &str = r#"<lift>
<entry id="1">
  <lexical-unit><form lang="tww"><text>efe</text></form></lexical-unit>
  <sense><gloss lang="en"><text>road, path</text></gloss></sense>
</entry>
</lift>"#;

    #[test]
    fn test_two_header_rows_and_quoting() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        let table = build_table(&doc, &["form", "gloss"], BuildOptions::default()).unwrap();
        let csv = to_csv(&table).unwrap();
        assert_eq!(csv, "form,gloss\ntww,en\nefe,\"road, path\"\n");
    }

    #[test]
    fn test_custom_delimiter_without_headers() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        let table = build_table(&doc, &["form", "gloss"], BuildOptions::default()).unwrap();
        let config = ToCsvConfig {
            include_headers: false,
            ..ToCsvConfig::with_delimiter("tab").unwrap()
        };
        let csv = to_csv_with_config(&table, &config).unwrap();
        assert_eq!(csv, "efe\troad, path\n");
    }

    #[test]
    fn test_delimiter_parsing() {
        assert_eq!(ToCsvConfig::with_delimiter(";").unwrap().delimiter, b';');
        assert_eq!(ToCsvConfig::with_delimiter("\\t").unwrap().delimiter, b'\t');
        assert!(matches!(
            ToCsvConfig::with_delimiter(",,"),
            Err(CsvError::InvalidDelimiter(_))
        ));
    }

    #[test]
    fn test_separator_conflict() {
        let config = ToCsvConfig::with_delimiter(";").unwrap();
        assert!(matches!(
            config.check_separator(";"),
            Err(CsvError::SeparatorConflict { .. })
        ));
        assert!(config.check_separator(",").is_ok());
    }

    #[test]
    fn test_catalog_csv_lists_every_field() {
        let csv = catalog_to_csv(catalog::list_all(), &ToCsvConfig::default()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("name,node_path,value_path,level,multiplicity,mixed_content,description")
        );
        assert!(csv.contains("morphtype,trait[@name='morph-type'],@value,ENTRY,UNIQUE,false,"));
        assert_eq!(csv.lines().count(), catalog::list_all().len() + 1);
    }
}
