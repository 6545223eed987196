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


//! Canonical LIFT documents.

/// Two entries, four senses, glosses in two meta languages.
///
/// `efe` (id `1`) has senses `road/rod` and `skin` (no Tok Pisin gloss);
/// `hei` (id `2`) has senses `paddle/pulim` and `swim/waswas`.
pub fn tiny() -> String {
    TINY.to_string()
}

/// The text of [`tiny`].
pub const TINY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<lift version="0.13">
  <entry id="1">
    <lexical-unit><form lang="tww"><text>efe</text></form></lexical-unit>
    <sense>
      <grammatical-info value="Noun"/>
      <gloss lang="en"><text>road</text></gloss>
      <gloss lang="tpi"><text>rod</text></gloss>
    </sense>
    <sense>
      <grammatical-info value="Noun"/>
      <gloss lang="en"><text>skin</text></gloss>
    </sense>
  </entry>
  <entry id="2">
    <lexical-unit><form lang="tww"><text>hei</text></form></lexical-unit>
    <sense>
      <grammatical-info value="Verb"/>
      <gloss lang="en"><text>paddle</text></gloss>
      <gloss lang="tpi"><text>pulim</text></gloss>
    </sense>
    <sense>
      <grammatical-info value="Verb"/>
      <gloss lang="en"><text>swim</text></gloss>
      <gloss lang="tpi"><text>waswas</text></gloss>
    </sense>
  </entry>
</lift>
"#;

/// A lexicon touching every catalog field.
///
/// Three entries (`kaikai_1`, an entry without id, `-ne_3`), three senses,
/// one variant, one example. The second entry carries two morph-type traits
/// and two English glosses on its sense.
pub fn rich() -> String {
    RICH.to_string()
}

/// The text of [`rich`].
pub const RICH: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<lift version="0.13" producer="liftlex-test">
  <header>
    <ranges>
      <range id="semantic-domain-ddp4" href="file://rich.lift-ranges"/>
    </ranges>
  </header>
  <entry id="kaikai_1" guid="0f7c3d0e-6d7e-4a7c-9a55-3c1f0e2b9a11">
    <lexical-unit>
      <form lang="tww"><text>kaikai</text></form>
      <form lang="tww-fonipa"><text>kaikai</text></form>
    </lexical-unit>
    <citation><form lang="tww"><text>kaikai</text></form></citation>
    <trait name="morph-type" value="stem"/>
    <pronunciation><form lang="tww-fonipa"><text>ˈkaikai</text></form></pronunciation>
    <note type="source"><form lang="en"><text>Recorded in <span lang="tww">Nimbako</span> village</text></form></note>
    <relation type="synonym" ref="-ne_3"/>
    <variant>
      <form lang="tww"><text>kakai</text></form>
      <trait name="variant-type" value="free"/>
    </variant>
    <sense id="sense-food">
      <grammatical-info value="Noun"/>
      <gloss lang="en"><text>food</text></gloss>
      <gloss lang="tpi"><text>kaikai</text></gloss>
      <definition><form lang="en"><text>anything eaten</text></form></definition>
      <example>
        <form lang="tww"><text>Kaikai ne mwa.</text></form>
        <translation type="Free translation"><form lang="en"><text>The food is good.</text></form></translation>
      </example>
      <trait name="semantic-domain-ddp4" value="5.2 Food"/>
    </sense>
    <sense>
      <grammatical-info value="Verb"/>
      <gloss lang="en"><text>eat</text></gloss>
      <trait name="semantic-domain-ddp4" value="5.2.1 Eat"/>
      <trait name="semantic-domain-ddp4" value="5.2.2 Feed"/>
    </sense>
  </entry>
  <entry>
    <lexical-unit><form lang="tww"><text>mwa</text></form></lexical-unit>
    <trait name="morph-type" value="stem"/>
    <trait name="morph-type" value="root"/>
    <sense>
      <grammatical-info value="Adjective"/>
      <gloss lang="en"><text>good</text></gloss>
      <gloss lang="en"><text>nice</text></gloss>
    </sense>
  </entry>
  <entry id="-ne_3">
    <lexical-unit><form lang="tww"><text>-ne</text></form></lexical-unit>
    <trait name="morph-type" value="suffix"/>
  </entry>
</lift>
"#;

/// A lexicon with no entries.
pub fn empty_lexicon() -> String {
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<lift version=\"0.13\"/>\n".to_string()
}

/// Entries without any senses or variants.
pub fn bare_entries() -> String {
    r#"<lift version="0.13">
  <entry id="a"><lexical-unit><form lang="tww"><text>a</text></form></lexical-unit></entry>
  <entry id="b"><lexical-unit><form lang="tww"><text>b</text></form></lexical-unit></entry>
</lift>
"#
    .to_string()
}

/// Glosses with a language no other sense uses, and a sense with no gloss.
pub fn sparse_languages() -> String {
    r#"<lift version="0.13">
  <entry id="x">
    <lexical-unit><form lang="tww"><text>x</text></form></lexical-unit>
    <sense><gloss lang="en"><text>one</text></gloss></sense>
    <sense/>
    <sense><gloss lang="de"><text>drei</text></gloss></sense>
  </entry>
</lift>
"#
    .to_string()
}
