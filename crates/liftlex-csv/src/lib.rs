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


//! CSV output for liftlex result tables.
//!
//! Tables carry two-level column headers, so the CSV form has two header
//! rows: field names, then subfields. Header text may repeat (`gloss,gloss`
//! over `en,tpi`); a column is identified by position.
//!
//! # Examples
//!
//! ```
//! use liftlex_core::{build_table, BuildOptions, LiftDocument};
//! use liftlex_csv::{to_csv_with_config, ToCsvConfig};
//!
//! let doc = LiftDocument::parse(r#"<lift><entry id="1">
//!   <lexical-unit><form lang="tww"><text>efe</text></form></lexical-unit>
//!   <sense><gloss lang="en"><text>road</text></gloss><gloss lang="tpi"><text>rod</text></gloss></sense>
//!   <sense><gloss lang="en"><text>skin</text></gloss></sense>
//! </entry></lift>"#).unwrap();
//!
//! let options = BuildOptions::aggregate("|");
//! let config = ToCsvConfig::with_delimiter(";").unwrap();
//! config.check_separator(&options.aggregate_separator).unwrap();
//!
//! let table = build_table(&doc, &["form", "gloss"], options).unwrap();
//! let csv = to_csv_with_config(&table, &config).unwrap();
//! assert_eq!(csv, "form;gloss;gloss\ntww;en;tpi\nefe;road|skin;rod|\n");
//! ```

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::{
    catalog_to_csv, frequencies_to_csv, to_csv, to_csv_with_config, to_csv_writer,
    to_csv_writer_with_config, ToCsvConfig,
};
