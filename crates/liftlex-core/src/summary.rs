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

//! Reducers over documents and tables: entity counts and frequency lists.

use crate::catalog;
use crate::document::LiftDocument;
use crate::error::{LiftError, Result};
use crate::level::Level;
use crate::table::ResultTable;
use std::collections::{BTreeSet, HashMap};

/// Entity counts and language inventories of a lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    /// Number of entries.
    pub entry_count: usize,
    /// Number of senses.
    pub sense_count: usize,
    /// Number of variants.
    pub variant_count: usize,
    /// Number of examples.
    pub example_count: usize,
    /// `lang` values found on `form` elements.
    pub object_languages: BTreeSet<String>,
    /// `lang` values found on any other element.
    pub meta_languages: BTreeSet<String>,
}

impl Summary {
    /// The count for one level.
    pub fn count(&self, level: Level) -> usize {
        match level {
            Level::Entry => self.entry_count,
            Level::Sense => self.sense_count,
            Level::Variant => self.variant_count,
            Level::Example => self.example_count,
        }
    }
}

/// Count entities and collect languages in a single pass over the entries.
///
/// # Examples
///
/// ```
/// use liftlex_core::{summarize, LiftDocument};
///
/// let doc = LiftDocument::parse(r#"<lift><entry>
///   <lexical-unit><form lang="tww"><text>efe</text></form></lexical-unit>
///   <sense><gloss lang="en"><text>road</text></gloss></sense>
/// </entry></lift>"#).unwrap();
/// let summary = summarize(&doc);
/// assert_eq!(summary.entry_count, 1);
/// assert!(summary.object_languages.contains("tww"));
/// assert!(summary.meta_languages.contains("en"));
/// ```
pub fn summarize(doc: &LiftDocument<'_>) -> Summary {
    let mut summary = Summary::default();
    for entry in doc.entries() {
        summary.entry_count += 1;
        for node in entry.descendants().filter(|n| n.is_element()) {
            let name = node.tag_name().name();
            let parent_name = node.parent_element().map(|p| p.tag_name().name());
            match (name, parent_name) {
                ("sense", Some("entry")) => summary.sense_count += 1,
                ("variant", Some("entry")) => summary.variant_count += 1,
                ("example", Some("sense")) => summary.example_count += 1,
                _ => {}
            }
            if let Some(lang) = node.attribute("lang") {
                if name == "form" {
                    summary.object_languages.insert(lang.to_string());
                } else {
                    summary.meta_languages.insert(lang.to_string());
                }
            }
        }
    }
    summary
}

/// Frequency of each value in one column of `table`.
///
/// The column is chosen by `field` and, for language-keyed fields,
/// `subfield`. When the field has a single column the subfield may be
/// omitted. Empty cells are counted under the empty string. The result is
/// sorted by descending count, ties in first-seen order.
///
/// # Errors
///
/// - [`LiftError::UnknownField`] if the field is not in the catalog
/// - [`LiftError::NoSubfields`] if a subfield is given for a field without any
/// - [`LiftError::SubfieldRequired`] if the field has several columns and no
///   subfield is given
/// - [`LiftError::UnknownSubfield`] if the subfield does not occur
///
/// # Examples
///
/// ```
/// use liftlex_core::{build_table, count, BuildOptions, LiftDocument};
///
/// let doc = LiftDocument::parse(r#"<lift><entry>
///   <sense><grammatical-info value="Noun"/></sense>
///   <sense><grammatical-info value="Verb"/></sense>
///   <sense><grammatical-info value="Noun"/></sense>
///   <sense/>
/// </entry></lift>"#).unwrap();
/// let table = build_table(&doc, &["category"], BuildOptions::default()).unwrap();
/// let freq = count(&table, "category", None).unwrap();
/// assert_eq!(freq[0], ("Noun".to_string(), 2));
/// assert_eq!(freq.len(), 3);
/// ```
pub fn count(
    table: &ResultTable,
    field: &str,
    subfield: Option<&str>,
) -> Result<Vec<(String, usize)>> {
    let def = catalog::resolve(field)?;
    let columns = table.field_columns(def.name);
    let available: Vec<String> = columns
        .iter()
        .map(|&i| table.columns()[i].subfield.clone())
        .collect();

    let column = match subfield.filter(|s| !s.is_empty()) {
        Some(sub) => {
            if !def.has_subfield() {
                return Err(LiftError::NoSubfields(def.name.to_string()));
            }
            table
                .column_index(def.name, sub)
                .ok_or_else(|| LiftError::UnknownSubfield {
                    field: def.name.to_string(),
                    subfield: sub.to_string(),
                    available: available.clone(),
                })?
        }
        None => match columns.as_slice() {
            [only] => *only,
            [] => {
                return Err(LiftError::UnknownField {
                    name: def.name.to_string(),
                    available: table.columns().iter().map(|c| c.field.clone()).collect(),
                })
            }
            _ => {
                return Err(LiftError::SubfieldRequired {
                    field: def.name.to_string(),
                    available,
                })
            }
        },
    };

    Ok(frequencies(table.column_values(column)))
}

/// Frequencies sorted by descending count, ties in first-seen order.
pub fn frequencies<'v>(values: impl IntoIterator<Item = &'v str>) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut position: HashMap<&'v str, usize> = HashMap::new();
    for value in values {
        match position.get(value) {
            Some(&i) => order[i].1 += 1,
            None => {
                position.insert(value, order.len());
                order.push((value.to_string(), 1));
            }
        }
    }
    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

/// Distinct subfield values of `field` in `table`, in column order.
pub fn subfields(table: &ResultTable, field: &str) -> Result<Vec<String>> {
    let def = catalog::resolve(field)?;
    if !def.has_subfield() {
        return Err(LiftError::NoSubfields(def.name.to_string()));
    }
    Ok(table
        .field_columns(def.name)
        .into_iter()
        .map(|i| table.columns()[i].subfield.clone())
        .filter(|s| !s.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_table, BuildOptions};

    const LEXICON: &str = r#"<lift>
<entry id="a">
  <lexical-unit><form lang="tww"><text>a</text></form></lexical-unit>
  <sense>
    <grammatical-info value="Verb"/>
    <gloss lang="en"><text>go</text></gloss>
    <example><form lang="tww"><text>x</text></form><translation><form lang="tpi"><text>y</text></form></translation></example>
  </sense>
  <sense><grammatical-info value="Noun"/><gloss lang="fr"><text>aller</text></gloss></sense>
  <variant><form lang="tww-x"><text>aa</text></form></variant>
</entry>
<entry id="b">
  <sense><grammatical-info value="Noun"/></sense>
  <sense/>
</entry>
</lift>"#;

    #[test]
    fn test_summarize_counts_every_level() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        let s = summarize(&doc);
        assert_eq!(
            (s.entry_count, s.sense_count, s.variant_count, s.example_count),
            (2, 4, 1, 1)
        );
        assert_eq!(s.count(Level::Sense), 4);
        let object: Vec<_> = s.object_languages.iter().map(String::as_str).collect();
        assert_eq!(object, vec!["tpi", "tww", "tww-x"]);
        let meta: Vec<_> = s.meta_languages.iter().map(String::as_str).collect();
        assert_eq!(meta, vec!["en", "fr"]);
    }

    #[test]
    fn test_count_sorts_descending_with_empty_bucket() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        let table = build_table(&doc, &["category"], BuildOptions::default()).unwrap();
        let freq = count(&table, "category", None).unwrap();
        assert_eq!(
            freq,
            vec![
                ("Noun".to_string(), 2),
                ("Verb".to_string(), 1),
                ("".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_count_subfield_rules() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        let table = build_table(&doc, &["gloss"], BuildOptions::default()).unwrap();
        assert!(matches!(
            count(&table, "gloss", None),
            Err(LiftError::SubfieldRequired { .. })
        ));
        assert!(matches!(
            count(&table, "gloss", Some("de")),
            Err(LiftError::UnknownSubfield { .. })
        ));
        let en = count(&table, "gloss", Some("en")).unwrap();
        assert_eq!(en, vec![("".to_string(), 3), ("go".to_string(), 1)]);

        let table = build_table(&doc, &["category"], BuildOptions::default()).unwrap();
        assert_eq!(
            count(&table, "category", Some("en")),
            Err(LiftError::NoSubfields("category".to_string()))
        );
    }

    #[test]
    fn test_frequencies_tie_break_is_first_seen() {
        let freq = frequencies(["b", "a", "a", "b", "c"]);
        assert_eq!(
            freq,
            vec![("b".to_string(), 2), ("a".to_string(), 2), ("c".to_string(), 1)]
        );
    }

    #[test]
    fn test_subfields_in_first_seen_order() {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        let table = build_table(&doc, &["gloss"], BuildOptions::default()).unwrap();
        assert_eq!(subfields(&table, "gloss").unwrap(), vec!["en", "fr"]);
        assert!(subfields(&table, "category").is_err());
    }
}
