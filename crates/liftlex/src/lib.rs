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


//! # liftlex - LIFT lexicon extraction toolkit
//!
//! Turns LIFT (Lexicon Interchange FormaT) dictionaries into flat tables.
//! Fields are picked by name from a fixed catalog; the table has one row per
//! node of the deepest level involved, or one row per entry-side node when
//! aggregating.
//!
//! ## Quick Start
//!
//! ```rust
//! use liftlex::{extract, BuildOptions};
//!
//! let lift = r#"<lift version="0.13">
//!   <entry id="1">
//!     <lexical-unit><form lang="tww"><text>efe</text></form></lexical-unit>
//!     <sense><gloss lang="en"><text>road</text></gloss></sense>
//!     <sense><gloss lang="en"><text>skin</text></gloss></sense>
//!   </entry>
//! </lift>"#;
//!
//! let table = extract(lift, &["form", "gloss"], BuildOptions::default()).unwrap();
//! assert_eq!(table.len(), 2);
//!
//! let table = extract(lift, &["form", "gloss"], BuildOptions::aggregate(";")).unwrap();
//! assert_eq!(table.get(0, "gloss", "en"), Some("road;skin"));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The field catalog
//! - [`schema`]: Structural validation
//!
//! ### Optional Emitters (feature-gated)
//!
//! - `csv_file`: CSV with two header rows (feature = "csv", on by default)
//! - `cldf`: CLDF Wordlist datasets (feature = "cldf")

// Re-export core types
pub use liftlex_core::{
    build_table, count, frequencies, subfields, summarize, walk, Ambiguity, BuildOptions,
    ColumnKey, FieldDefinition, FieldPath, Level, LevelNode, LiftDocument, LiftError, Match,
    Multiplicity, NodePath, NodeRef, ParseOptions, ResultTable, Row, Summary, TableBuilder,
    ValuePath, Warning, FIELD_CATALOG, LIFT_ROOT,
};

mod error;
pub use error::{Error, Result};

// Re-export the field catalog
pub mod catalog {
    //! The field catalog
    pub use liftlex_core::catalog::{list_all, resolve, FieldDefinition, Multiplicity};
}

// Re-export validation
pub mod schema {
    //! Structural validation against the LIFT element vocabulary
    pub use liftlex_core::schema::{LiftValidator, ValidationError};
}

/// CSV emission (requires `csv` feature)
#[cfg(feature = "csv")]
pub mod csv_file {
    pub use liftlex_csv::{
        catalog_to_csv, frequencies_to_csv, to_csv, to_csv_with_config, to_csv_writer,
        to_csv_writer_with_config, CsvError, ToCsvConfig,
    };
}

/// CLDF Wordlist emission (requires `cldf` feature)
#[cfg(feature = "cldf")]
pub mod cldf {
    pub use liftlex_cldf::mapping::{mapping_for, ColumnMapping, Target, WORDLIST_MAPPING};
    pub use liftlex_cldf::{
        to_wordlist, to_wordlist_with_config, CldfError, WordlistConfig, WordlistDataset,
    };
}

// Convenience functions at crate root

/// Parse a lexicon and build a table from the named fields.
///
/// The table owns its cells, so it outlives the parsed document.
///
/// # Errors
///
/// Any [`LiftError`] from parsing or from resolving the field list.
pub fn extract<S: AsRef<str>>(
    input: &str,
    fields: &[S],
    options: BuildOptions,
) -> std::result::Result<ResultTable, LiftError> {
    let doc = LiftDocument::parse(input)?;
    build_table(&doc, fields, options)
}

/// Parse a lexicon and count its entries, senses, variants and examples.
///
/// # Examples
///
/// ```rust
/// let summary = liftlex::summary("<lift><entry/><entry/></lift>").unwrap();
/// assert_eq!(summary.entry_count, 2);
/// ```
#[inline]
pub fn summary(input: &str) -> std::result::Result<Summary, LiftError> {
    Ok(summarize(&LiftDocument::parse(input)?))
}

/// Validate a lexicon against the LIFT element vocabulary.
#[inline]
pub fn validate(input: &str) -> std::result::Result<(), schema::ValidationError> {
    schema::LiftValidator::new().validate(input)
}

/// Parse a lexicon and render the named fields as CSV.
///
/// # Examples
///
/// ```rust
/// use liftlex::{extract_csv, BuildOptions};
///
/// let lift = r#"<lift><entry id="a"><lexical-unit><form lang="x"><text>ba</text></form></lexical-unit></entry></lift>"#;
/// let csv = extract_csv(lift, &["ID", "form"], BuildOptions::default()).unwrap();
/// assert_eq!(csv, "ID,form\n,x\na,ba\n");
/// ```
#[cfg(feature = "csv")]
pub fn extract_csv<S: AsRef<str>>(
    input: &str,
    fields: &[S],
    options: BuildOptions,
) -> Result<String> {
    let config = liftlex_csv::ToCsvConfig::default();
    config.check_separator(&options.aggregate_separator)?;
    let table = extract(input, fields, options)?;
    Ok(liftlex_csv::to_csv_with_config(&table, &config)?)
}

/// Parse a lexicon and build a CLDF Wordlist from the named fields.
///
/// The dataset is returned in memory; see
/// [`WordlistDataset::write_to_dir`](cldf::WordlistDataset::write_to_dir).
#[cfg(feature = "cldf")]
pub fn extract_wordlist<S: AsRef<str>>(
    input: &str,
    fields: &[S],
    options: BuildOptions,
) -> Result<cldf::WordlistDataset> {
    let table = extract(input, fields, options)?;
    Ok(liftlex_cldf::to_wordlist(&table)?)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    const LIFT: &str = r#"<lift version="0.13">
<entry id="1">
  <lexical-unit><form lang="tww"><text>efe</text></form></lexical-unit>
  <sense><grammatical-info value="Noun"/><gloss lang="en"><text>road</text></gloss></sense>
  <sense><grammatical-info value="Noun"/><gloss lang="en"><text>skin</text></gloss></sense>
</entry>
</lift>"#;

    #[test]
    fn test_extract_repeat_and_aggregate() {
        let table = extract(LIFT, &["form", "gloss"], BuildOptions::default()).unwrap();
        assert_eq!(table.len(), 2);
        let table = extract(LIFT, &["form", "gloss"], BuildOptions::aggregate("|")).unwrap();
        assert_eq!(table.get(0, "gloss", "en"), Some("road|skin"));
    }

    #[test]
    fn test_extract_unknown_field() {
        assert!(matches!(
            extract(LIFT, &["nosuchfield"], BuildOptions::default()),
            Err(LiftError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_summary_and_validate() {
        let summary = summary(LIFT).unwrap();
        assert_eq!((summary.entry_count, summary.sense_count), (1, 2));
        assert!(validate(LIFT).is_ok());
        assert!(validate("<lift><entry><gloss/></entry></lift>").is_err());
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_extract_csv_rejects_clashing_separator() {
        let result = extract_csv(LIFT, &["gloss"], BuildOptions::aggregate(","));
        assert!(matches!(result, Err(Error::Csv(_))));
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
