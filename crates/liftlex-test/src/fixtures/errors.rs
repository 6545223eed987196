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


//! Error test fixtures.
//!
//! Inputs that parsing or validation must reject, each paired with a short
//! name for test messages.

/// Text that is not well-formed XML.
pub fn malformed_xml_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "   \n\t "),
        ("unclosed_root", "<lift version=\"0.13\">"),
        ("mismatched_tags", "<lift version=\"0.13\"><entry></sense></lift>"),
        ("unquoted_attribute", "<lift version=0.13/>"),
        ("bad_entity", "<lift version=\"0.13\"><entry id=\"&nope;\"/></lift>"),
        ("two_roots", "<lift version=\"0.13\"/><lift version=\"0.13\"/>"),
        ("text_before_root", "hello <lift version=\"0.13\"/>"),
    ]
}

/// Well-formed XML whose root is not `lift`.
pub fn wrong_root_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("dictionary", "<dictionary><entry id=\"1\"/></dictionary>"),
        ("html", "<html><body/></html>"),
        ("lift_ranges", "<lift-ranges><range id=\"x\"/></lift-ranges>"),
    ]
}

/// Well-formed LIFT documents that break the element vocabulary.
pub fn structurally_invalid_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("missing_version", "<lift><entry id=\"1\"/></lift>"),
        (
            "gloss_under_entry",
            "<lift version=\"0.13\"><entry><gloss lang=\"en\"><text>x</text></gloss></entry></lift>",
        ),
        (
            "form_without_lang",
            "<lift version=\"0.13\"><entry><lexical-unit><form><text>x</text></form></lexical-unit></entry></lift>",
        ),
        (
            "form_without_text",
            "<lift version=\"0.13\"><entry><lexical-unit><form lang=\"x\"/></lexical-unit></entry></lift>",
        ),
        (
            "trait_without_value",
            "<lift version=\"0.13\"><entry><trait name=\"morph-type\"/></entry></lift>",
        ),
        (
            "two_definitions",
            "<lift version=\"0.13\"><entry><sense><definition/><definition/></sense></entry></lift>",
        ),
        (
            "stray_text",
            "<lift version=\"0.13\"><entry>loose words</entry></lift>",
        ),
    ]
}
