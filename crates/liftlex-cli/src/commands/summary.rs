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


//! Summary command - entity counts and language inventories

use super::{read_file, write_output};
use crate::error::CliError;
use liftlex_core::{summarize, LiftDocument, Summary};
use tracing::debug;

/// Print entity counts and the object and meta languages of a lexicon.
///
/// # Output
///
/// Text mode prints one count per line followed by the two language lists:
///
/// ```text
/// 2 entries
/// 4 senses
/// 0 variants
/// 0 examples
/// Object languages: tww
/// Meta languages: en, tpi
/// ```
///
/// JSON mode prints the same data as a pretty-printed object.
pub fn summary(file: &str, json: bool, output: Option<&str>) -> Result<(), CliError> {
    let content = read_file(file)?;
    let doc = LiftDocument::parse(&content)?;
    let summary = summarize(&doc);
    debug!(file, entries = summary.entry_count, "summarized");

    let text = if json {
        let mut text = serde_json::to_string_pretty(&summary)?;
        text.push('\n');
        text
    } else {
        render_text(&summary)
    };
    write_output(&text, output)
}

fn render_text(summary: &Summary) -> String {
    let join = |langs: &std::collections::BTreeSet<String>| {
        langs.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    };
    format!(
        "{} entries\n{} senses\n{} variants\n{} examples\nObject languages: {}\nMeta languages: {}\n",
        summary.entry_count,
        summary.sense_count,
        summary.variant_count,
        summary.example_count,
        join(&summary.object_languages),
        join(&summary.meta_languages),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let doc = LiftDocument::parse(
            r#"<lift><entry><lexical-unit><form lang="tww"><text>a</text></form></lexical-unit>
            <sense><gloss lang="en"><text>b</text></gloss><gloss lang="tpi"><text>c</text></gloss></sense>
            </entry></lift>"#,
        )
        .unwrap();
        let text = render_text(&summarize(&doc));
        assert_eq!(
            text,
            "1 entries\n1 senses\n0 variants\n0 examples\nObject languages: tww\nMeta languages: en, tpi\n"
        );
    }
}
