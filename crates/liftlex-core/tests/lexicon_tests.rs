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


//! End-to-end extraction tests over the shared LIFT fixtures.

use liftlex_core::schema::LiftValidator;
use liftlex_core::{
    build_table, count, summarize, walk, BuildOptions, Level, LiftDocument, LiftError, Warning,
};
use liftlex_test::fixtures;

fn headers(table: &liftlex_core::ResultTable) -> Vec<String> {
    table.columns().iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_tiny_repeat_mode() {
    let xml = fixtures::tiny();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["ID", "form", "gloss"], BuildOptions::repeat()).unwrap();

    assert_eq!(headers(&table), vec!["ID", "form/tww", "gloss/en", "gloss/tpi"]);
    assert_eq!(table.len(), 4);
    let ids: Vec<_> = table.column_values(0).collect();
    assert_eq!(ids, vec!["1", "1", "2", "2"]);
    assert_eq!(table.get(1, "gloss", "en"), Some("skin"));
    assert_eq!(table.get(1, "gloss", "tpi"), Some(""));
    assert_eq!(table.get(3, "gloss", "tpi"), Some("waswas"));
}

#[test]
fn test_tiny_aggregate_mode() {
    let xml = fixtures::tiny();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["ID", "form", "gloss"], BuildOptions::aggregate(";")).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0, "gloss", "en"), Some("road;skin"));
    assert_eq!(table.get(0, "gloss", "tpi"), Some("rod;"));
    assert_eq!(table.get(1, "gloss", "en"), Some("paddle;swim"));
    assert_eq!(table.get(1, "form", "tww"), Some("hei"));
    for row in table.rows() {
        assert_eq!(row.lineage.len(), 1);
    }
}

#[test]
fn test_rich_entry_ids_and_ambiguous_morph_type() {
    let xml = fixtures::rich();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["ID", "morphtype"], BuildOptions::default()).unwrap();

    let ids: Vec<_> = table.rows().iter().map(|r| r.root().unwrap().id.clone()).collect();
    assert_eq!(ids, vec!["kaikai_1", "#2", "-ne_3"]);
    // The id column holds the attribute itself, empty when missing.
    assert_eq!(table.get(1, "ID", ""), Some(""));
    assert_eq!(table.get(1, "morphtype", ""), Some("stem"));

    assert_eq!(table.warnings().len(), 1);
    match &table.warnings()[0] {
        Warning::AmbiguousUniqueField {
            field,
            node_id,
            count,
            ..
        } => {
            assert_eq!(field, "morphtype");
            assert_eq!(node_id, "#2");
            assert_eq!(*count, 2);
        }
    }
}

#[test]
fn test_rich_same_language_values_join_on_one_node() {
    let xml = fixtures::rich();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["gloss"], BuildOptions::default()).unwrap();

    assert_eq!(headers(&table), vec!["gloss/en", "gloss/tpi"]);
    let en: Vec<_> = table.column_values(0).collect();
    assert_eq!(en, vec!["food", "eat", "good/nice"]);
}

#[test]
fn test_rich_mixed_content_is_flattened() {
    let xml = fixtures::rich();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["note"], BuildOptions::default()).unwrap();
    assert_eq!(table.get(0, "note", "en"), Some("Recorded in Nimbako village"));
}

#[test]
fn test_rich_multiple_field_fans_out_rows() {
    let xml = fixtures::rich();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["senseID", "semanticdomain"], BuildOptions::default()).unwrap();

    let domains: Vec<_> = table.column_values(1).collect();
    assert_eq!(domains, vec!["5.2 Food", "5.2.1 Eat", "5.2.2 Feed", ""]);
    let sense_ids: Vec<_> = table.column_values(0).collect();
    assert_eq!(sense_ids, vec!["sense-food", "", "", ""]);
}

#[test]
fn test_rich_three_level_chain_keeps_childless_ancestors() {
    let xml = fixtures::rich();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["form", "example", "translation"], BuildOptions::default())
        .unwrap();

    assert_eq!(table.len(), 4);
    let lineages: Vec<Vec<&str>> = table
        .rows()
        .iter()
        .map(|r| r.lineage.iter().map(|n| n.id.as_str()).collect())
        .collect();
    assert_eq!(
        lineages,
        vec![
            vec!["kaikai_1", "kaikai_1.1", "kaikai_1.1.1"],
            vec!["kaikai_1", "kaikai_1.2"],
            vec!["#2", "#2.1"],
            vec!["-ne_3"],
        ]
    );
    assert_eq!(table.get(0, "translation", "en"), Some("The food is good."));
    assert_eq!(table.get(3, "form", "tww"), Some("-ne"));
}

#[test]
fn test_rich_variant_branch() {
    let xml = fixtures::rich();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["form", "variantform", "variantype"], BuildOptions::default())
        .unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(0, "variantform", "tww"), Some("kakai"));
    assert_eq!(table.get(0, "variantype", ""), Some("free"));
    assert_eq!(table.get(1, "variantform", "tww"), Some(""));
}

#[test]
fn test_sibling_levels_are_rejected() {
    let xml = fixtures::rich();
    let doc = LiftDocument::parse(&xml).unwrap();
    let err = build_table(&doc, &["gloss", "variantform"], BuildOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        LiftError::IncompatibleLevels {
            first: Level::Sense,
            second: Level::Variant,
            ..
        }
    ));
}

#[test]
fn test_absent_language_field_keeps_one_empty_column() {
    let xml = fixtures::bare_entries();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["form", "gloss"], BuildOptions::default()).unwrap();
    assert_eq!(headers(&table), vec!["form/tww", "gloss"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1, "gloss", ""), Some(""));
}

#[test]
fn test_sparse_languages_columns_in_first_seen_order() {
    let xml = fixtures::sparse_languages();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["gloss"], BuildOptions::default()).unwrap();
    assert_eq!(headers(&table), vec!["gloss/en", "gloss/de"]);
    assert_eq!(table.len(), 3);

    let freq = count(&table, "gloss", Some("de")).unwrap();
    assert_eq!(freq, vec![("".to_string(), 2), ("drei".to_string(), 1)]);
}

#[test]
fn test_empty_lexicon() {
    let xml = fixtures::empty_lexicon();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["form", "gloss"], BuildOptions::default()).unwrap();
    assert!(table.is_empty());
    assert_eq!(headers(&table), vec!["form", "gloss"]);
    assert_eq!(summarize(&doc).entry_count, 0);
}

#[test]
fn test_rich_summary() {
    let xml = fixtures::rich();
    let doc = LiftDocument::parse(&xml).unwrap();
    let summary = summarize(&doc);
    assert_eq!(summary.entry_count, 3);
    assert_eq!(summary.sense_count, 3);
    assert_eq!(summary.variant_count, 1);
    assert_eq!(summary.example_count, 1);
    assert!(summary.object_languages.contains("tww-fonipa"));
    assert!(summary.meta_languages.contains("tpi"));
    assert_eq!(walk(&doc, Level::Sense).count(), summary.sense_count);
}

#[test]
fn test_fixtures_pass_structural_validation() {
    let validator = LiftValidator::new();
    for (name, fixture) in fixtures::all() {
        let xml = fixture();
        assert!(
            validator.validate(&xml).is_ok(),
            "fixture {} failed: {:?}",
            name,
            validator.validate(&xml)
        );
    }
}

#[test]
fn test_invalid_samples_fail_structural_validation() {
    let validator = LiftValidator::new();
    for (name, xml) in fixtures::errors::structurally_invalid_samples() {
        assert!(validator.validate(xml).is_err(), "sample {} passed", name);
    }
}

#[test]
fn test_malformed_and_wrong_root_samples_fail_to_parse() {
    for (name, xml) in fixtures::errors::malformed_xml_samples() {
        assert!(
            matches!(
                LiftDocument::parse(xml),
                Err(LiftError::MalformedDocument { .. })
            ),
            "sample {} parsed",
            name
        );
    }
    for (name, xml) in fixtures::errors::wrong_root_samples() {
        assert!(LiftDocument::parse(xml).is_err(), "sample {} parsed", name);
    }
}
