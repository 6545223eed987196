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


//! Wordlist datasets written to disk from the shared fixtures.

use liftlex_cldf::{to_wordlist, to_wordlist_with_config, WordlistConfig};
use liftlex_core::{build_table, BuildOptions, LiftDocument};
use liftlex_test::fixtures;
use tempfile::TempDir;

#[test]
fn test_tiny_wordlist_written_to_dir() {
    let xml = fixtures::tiny();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["ID", "form", "gloss"], BuildOptions::default()).unwrap();
    let dataset = to_wordlist(&table).unwrap();

    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("cldf");
    let paths = dataset.write_to_dir(&dir).unwrap();
    assert_eq!(paths, vec![dir.join("forms.csv"), dir.join("metadata.json")]);

    let forms = std::fs::read_to_string(dir.join("forms.csv")).unwrap();
    let expected = "\
ID,Language_ID,Parameter_ID,Form,Parent_ID,Entry_ID
1.1-tww,tww,road,efe,1,1
1.2-tww,tww,skin,efe,1,1
2.1-tww,tww,paddle,hei,2,2
2.2-tww,tww,swim,hei,2,2
";
    assert_eq!(forms, expected);

    let metadata: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("metadata.json")).unwrap())
            .unwrap();
    assert_eq!(metadata, dataset.metadata);
}

#[test]
fn test_aggregate_table_gives_one_form_per_entry() {
    let xml = fixtures::tiny();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["form", "gloss"], BuildOptions::aggregate(";")).unwrap();
    let dataset = to_wordlist(&table).unwrap();
    assert_eq!(dataset.form_count, 2);
    assert!(dataset.forms_csv.contains("1-tww,tww,road;skin,efe,\n"));
}

#[test]
fn test_custom_file_names() {
    let xml = fixtures::rich();
    let doc = LiftDocument::parse(&xml).unwrap();
    let table = build_table(&doc, &["form", "pronunciation"], BuildOptions::default()).unwrap();
    let config = WordlistConfig {
        forms_file: "words.csv".to_string(),
        metadata_file: "Wordlist-metadata.json".to_string(),
    };
    let dataset = to_wordlist_with_config(&table, &config).unwrap();
    assert_eq!(dataset.dropped, vec!["pronunciation"]);
    assert_eq!(dataset.metadata["tables"][0]["url"], "words.csv");

    let tmp = TempDir::new().unwrap();
    dataset.write_to_dir(tmp.path()).unwrap();
    assert!(tmp.path().join("words.csv").exists());
    assert!(tmp.path().join("Wordlist-metadata.json").exists());
}
