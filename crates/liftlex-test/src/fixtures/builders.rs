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


//! Builder pattern for creating LIFT lexicon fixtures.
//!
//! The builders render straight to LIFT text, so property tests can generate
//! lexicons of any shape without hand-writing XML.

use std::fmt::Write;

/// Builder for a whole `<lift>` document.
///
/// # Examples
///
/// ```
/// use liftlex_test::fixtures::builders::{EntryBuilder, LexiconBuilder, SenseBuilder};
///
/// let xml = LexiconBuilder::new()
///     .entry(
///         EntryBuilder::new("1")
///             .form("tww", "efe")
///             .sense(SenseBuilder::new().gloss("en", "road")),
///     )
///     .build();
///
/// assert!(xml.contains(r#"<entry id="1">"#));
/// assert!(xml.contains("<text>road</text>"));
/// ```
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    version: String,
    entries: Vec<EntryBuilder>,
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconBuilder {
    /// Creates an empty LIFT 0.13 lexicon.
    pub fn new() -> Self {
        Self {
            version: "0.13".to_string(),
            entries: Vec::new(),
        }
    }

    /// Sets the `version` attribute.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Adds an entry.
    pub fn entry(mut self, entry: EntryBuilder) -> Self {
        self.entries.push(entry);
        self
    }

    /// Adds several entries.
    pub fn entries(mut self, entries: impl IntoIterator<Item = EntryBuilder>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry was added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the document.
    pub fn build(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            out,
            "<lift version=\"{}\" producer=\"liftlex-test\">",
            escape(&self.version)
        );
        for entry in &self.entries {
            entry.render(&mut out);
        }
        out.push_str("</lift>\n");
        out
    }
}

/// Builder for an `<entry>`.
#[derive(Debug, Clone, Default)]
pub struct EntryBuilder {
    id: Option<String>,
    forms: Vec<(String, String)>,
    citations: Vec<(String, String)>,
    morph_type: Option<String>,
    pronunciations: Vec<(String, String)>,
    notes: Vec<(String, String)>,
    relations: Vec<(String, String)>,
    variants: Vec<VariantBuilder>,
    senses: Vec<SenseBuilder>,
}

impl EntryBuilder {
    /// Creates an entry with an `id` attribute.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Creates an entry without an `id` attribute.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Adds a lexical-unit form.
    pub fn form(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.forms.push((lang.into(), text.into()));
        self
    }

    /// Adds a citation form.
    pub fn citation(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.citations.push((lang.into(), text.into()));
        self
    }

    /// Sets the morph-type trait.
    pub fn morph_type(mut self, value: impl Into<String>) -> Self {
        self.morph_type = Some(value.into());
        self
    }

    /// Adds a pronunciation with one form.
    pub fn pronunciation(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.pronunciations.push((lang.into(), text.into()));
        self
    }

    /// Adds a note with one form.
    pub fn note(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.notes.push((lang.into(), text.into()));
        self
    }

    /// Adds a relation.
    pub fn relation(mut self, kind: impl Into<String>, target: impl Into<String>) -> Self {
        self.relations.push((kind.into(), target.into()));
        self
    }

    /// Adds a variant.
    pub fn variant(mut self, variant: VariantBuilder) -> Self {
        self.variants.push(variant);
        self
    }

    /// Adds a sense.
    pub fn sense(mut self, sense: SenseBuilder) -> Self {
        self.senses.push(sense);
        self
    }

    /// Number of senses added so far.
    pub fn sense_count(&self) -> usize {
        self.senses.len()
    }

    fn render(&self, out: &mut String) {
        match &self.id {
            Some(id) => {
                let _ = writeln!(out, "  <entry id=\"{}\">", escape(id));
            }
            None => out.push_str("  <entry>\n"),
        }
        if !self.forms.is_empty() {
            out.push_str("    <lexical-unit>\n");
            render_forms(out, &self.forms, 6);
            out.push_str("    </lexical-unit>\n");
        }
        if !self.citations.is_empty() {
            out.push_str("    <citation>\n");
            render_forms(out, &self.citations, 6);
            out.push_str("    </citation>\n");
        }
        if let Some(value) = &self.morph_type {
            render_trait(out, "morph-type", value, 4);
        }
        for (lang, text) in &self.pronunciations {
            out.push_str("    <pronunciation>\n");
            render_forms(out, &[(lang.clone(), text.clone())], 6);
            out.push_str("    </pronunciation>\n");
        }
        for variant in &self.variants {
            variant.render(out);
        }
        for sense in &self.senses {
            sense.render(out);
        }
        for (lang, text) in &self.notes {
            out.push_str("    <note>\n");
            render_forms(out, &[(lang.clone(), text.clone())], 6);
            out.push_str("    </note>\n");
        }
        for (kind, target) in &self.relations {
            let _ = writeln!(
                out,
                "    <relation type=\"{}\" ref=\"{}\"/>",
                escape(kind),
                escape(target)
            );
        }
        out.push_str("  </entry>\n");
    }
}

/// Builder for a `<variant>`.
#[derive(Debug, Clone, Default)]
pub struct VariantBuilder {
    forms: Vec<(String, String)>,
    variant_type: Option<String>,
}

impl VariantBuilder {
    /// Creates an empty variant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a form.
    pub fn form(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.forms.push((lang.into(), text.into()));
        self
    }

    /// Sets the variant-type trait.
    pub fn variant_type(mut self, value: impl Into<String>) -> Self {
        self.variant_type = Some(value.into());
        self
    }

    fn render(&self, out: &mut String) {
        out.push_str("    <variant>\n");
        render_forms(out, &self.forms, 6);
        if let Some(value) = &self.variant_type {
            render_trait(out, "variant-type", value, 6);
        }
        out.push_str("    </variant>\n");
    }
}

/// Builder for a `<sense>`.
#[derive(Debug, Clone, Default)]
pub struct SenseBuilder {
    id: Option<String>,
    category: Option<String>,
    glosses: Vec<(String, String)>,
    definitions: Vec<(String, String)>,
    domains: Vec<String>,
    examples: Vec<ExampleBuilder>,
}

impl SenseBuilder {
    /// Creates a sense without an `id` attribute.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `id` attribute.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the grammatical category.
    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    /// Adds a gloss.
    pub fn gloss(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.glosses.push((lang.into(), text.into()));
        self
    }

    /// Adds a definition form.
    pub fn definition(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.definitions.push((lang.into(), text.into()));
        self
    }

    /// Adds a semantic-domain-ddp4 trait.
    pub fn semantic_domain(mut self, value: impl Into<String>) -> Self {
        self.domains.push(value.into());
        self
    }

    /// Adds an example.
    pub fn example(mut self, example: ExampleBuilder) -> Self {
        self.examples.push(example);
        self
    }

    /// Number of examples added so far.
    pub fn example_count(&self) -> usize {
        self.examples.len()
    }

    fn render(&self, out: &mut String) {
        match &self.id {
            Some(id) => {
                let _ = writeln!(out, "    <sense id=\"{}\">", escape(id));
            }
            None => out.push_str("    <sense>\n"),
        }
        if let Some(value) = &self.category {
            let _ = writeln!(out, "      <grammatical-info value=\"{}\"/>", escape(value));
        }
        for (lang, text) in &self.glosses {
            let _ = writeln!(
                out,
                "      <gloss lang=\"{}\"><text>{}</text></gloss>",
                escape(lang),
                escape(text)
            );
        }
        if !self.definitions.is_empty() {
            out.push_str("      <definition>\n");
            render_forms(out, &self.definitions, 8);
            out.push_str("      </definition>\n");
        }
        for example in &self.examples {
            example.render(out);
        }
        for value in &self.domains {
            render_trait(out, "semantic-domain-ddp4", value, 6);
        }
        out.push_str("    </sense>\n");
    }
}

/// Builder for an `<example>`.
#[derive(Debug, Clone, Default)]
pub struct ExampleBuilder {
    forms: Vec<(String, String)>,
    translations: Vec<(String, String)>,
}

impl ExampleBuilder {
    /// Creates an empty example.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vernacular form.
    pub fn form(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.forms.push((lang.into(), text.into()));
        self
    }

    /// Adds a translation with one form.
    pub fn translation(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.push((lang.into(), text.into()));
        self
    }

    fn render(&self, out: &mut String) {
        out.push_str("      <example>\n");
        render_forms(out, &self.forms, 8);
        for (lang, text) in &self.translations {
            out.push_str("        <translation type=\"Free translation\">\n");
            render_forms(out, &[(lang.clone(), text.clone())], 10);
            out.push_str("        </translation>\n");
        }
        out.push_str("      </example>\n");
    }
}

fn render_forms(out: &mut String, forms: &[(String, String)], indent: usize) {
    for (lang, text) in forms {
        let _ = writeln!(
            out,
            "{:indent$}<form lang=\"{}\"><text>{}</text></form>",
            "",
            escape(lang),
            escape(text),
            indent = indent
        );
    }
}

fn render_trait(out: &mut String, name: &str, value: &str, indent: usize) {
    let _ = writeln!(
        out,
        "{:indent$}<trait name=\"{}\" value=\"{}\"/>",
        "",
        name,
        escape(value),
        indent = indent
    );
}

/// Escapes text for use in XML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_entry_has_no_id() {
        let xml = LexiconBuilder::new().entry(EntryBuilder::anonymous()).build();
        assert!(xml.contains("<entry>\n"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape(r#"a<b & "c""#), "a&lt;b &amp; &quot;c&quot;");
        let xml = LexiconBuilder::new()
            .entry(EntryBuilder::new("x").form("en", "fish & chips"))
            .build();
        assert!(xml.contains("fish &amp; chips"));
    }

    #[test]
    fn test_sense_order_is_kept() {
        let xml = LexiconBuilder::new()
            .entry(
                EntryBuilder::new("1")
                    .sense(SenseBuilder::new().gloss("en", "first"))
                    .sense(SenseBuilder::new().gloss("en", "second")),
            )
            .build();
        let first = xml.find("first").unwrap();
        let second = xml.find("second").unwrap();
        assert!(first < second);
    }
}
