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


//! Facade tests over the shared fixtures.

use liftlex::{extract, summary, validate, BuildOptions, Level, LiftError};
use liftlex_test::fixtures;

#[test]
fn test_every_fixture_validates_and_summarizes() {
    for (name, fixture) in fixtures::all() {
        let xml = fixture();
        assert!(validate(&xml).is_ok(), "{} should validate", name);
        assert!(summary(&xml).is_ok(), "{} should summarize", name);
    }
}

#[test]
fn test_tiny_scenario() {
    let xml = fixtures::tiny();
    let table = extract(&xml, &["form", "gloss", "ID"], BuildOptions::default()).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table.get(1, "gloss", "tpi"), Some(""));

    let table = extract(&xml, &["form", "gloss", "ID"], BuildOptions::aggregate(";")).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0, "gloss", "en"), Some("road;skin"));
    assert_eq!(table.get(0, "gloss", "tpi"), Some("rod;"));
    assert_eq!(table.rows()[0].root().map(|n| n.level), Some(Level::Entry));
}

#[test]
fn test_catalog_lookup() {
    let def = liftlex::catalog::resolve("gloss").unwrap();
    assert_eq!(def.level, Level::Sense);
    assert!(def.has_subfield());
    assert!(matches!(
        liftlex::catalog::resolve("glosses"),
        Err(LiftError::UnknownField { .. })
    ));
}

#[test]
fn test_malformed_documents_are_errors() {
    for (name, content) in fixtures::errors::malformed_xml_samples() {
        assert!(
            matches!(
                extract(content, &["form"], BuildOptions::default()),
                Err(LiftError::MalformedDocument { .. })
            ),
            "{} should be malformed",
            name
        );
    }
}

#[cfg(feature = "cldf")]
#[test]
fn test_extract_wordlist() {
    let dataset =
        liftlex::extract_wordlist(&fixtures::tiny(), &["form", "gloss"], BuildOptions::default())
            .unwrap();
    assert_eq!(dataset.form_count, 4);
    assert!(dataset.dropped.is_empty());
}
