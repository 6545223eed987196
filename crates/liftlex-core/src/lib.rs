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


//! Field extraction and table shaping for LIFT lexicons.
//!
//! A LIFT document is a tree of entries, each holding senses and variants,
//! with senses holding examples. This crate names the interesting values of
//! that tree in a fixed [catalog] of fields and turns any compatible
//! selection of fields into a flat [`ResultTable`]:
//!
//! - [`LiftDocument`] parses and checks the document root
//! - [`walk`] visits every node of a [`Level`] with a stable id
//! - [`TableBuilder`] joins the requested fields into rows, one per deepest
//!   level node (repeat mode) or one per entry-side root (aggregate mode)
//! - [`summarize`] and [`count`] reduce documents and tables to counts
//! - [`schema`] checks a document against the LIFT element vocabulary
//!
//! # Examples
//!
//! ```
//! use liftlex_core::{build_table, BuildOptions, LiftDocument};
//!
//! let doc = LiftDocument::parse(r#"<lift version="0.13">
//!   <entry id="1">
//!     <lexical-unit><form lang="tww"><text>efe</text></form></lexical-unit>
//!     <sense><gloss lang="en"><text>road</text></gloss></sense>
//!     <sense><gloss lang="en"><text>skin</text></gloss></sense>
//!   </entry>
//! </lift>"#).unwrap();
//!
//! let table = build_table(&doc, &["form", "gloss"], BuildOptions::default()).unwrap();
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get(1, "form", "tww"), Some("efe"));
//! assert_eq!(table.get(1, "gloss", "en"), Some("skin"));
//!
//! let table = build_table(&doc, &["form", "gloss"], BuildOptions::aggregate(";")).unwrap();
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.get(0, "gloss", "en"), Some("road;skin"));
//! ```

mod builder;
pub mod catalog;
mod document;
mod error;
mod level;
mod path;
pub mod schema;
mod summary;
mod table;
mod walker;

pub use builder::{build_table, BuildOptions, TableBuilder};
pub use catalog::{FieldDefinition, Multiplicity, FIELD_CATALOG};
pub use document::{LiftDocument, ParseOptions, LIFT_ROOT};
pub use error::{LiftError, Result};
pub use level::Level;
pub use path::{Ambiguity, FieldPath, Match, NodePath, ValuePath};
pub use summary::{count, frequencies, subfields, summarize, Summary};
pub use table::{ColumnKey, NodeRef, ResultTable, Row, Warning};
pub use walker::{walk, LevelNode};
