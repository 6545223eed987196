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


//! CLDF Wordlist export for liftlex result tables.
//!
//! A [Wordlist](https://cldf.clld.org/) is a CSVW dataset: a `FormTable`
//! (`forms.csv`) plus a JSON metadata file describing it. Fields map onto
//! FormTable columns through the [`mapping::WORDLIST_MAPPING`] table;
//! fields without a column are dropped and reported on the dataset.
//!
//! # Examples
//!
//! ```no_run
//! use liftlex_core::{build_table, BuildOptions, LiftDocument};
//! use liftlex_cldf::to_wordlist;
//!
//! let text = std::fs::read_to_string("lexicon.lift").unwrap();
//! let doc = LiftDocument::parse(&text).unwrap();
//! let table = build_table(&doc, &["ID", "form", "gloss"], BuildOptions::default()).unwrap();
//!
//! let dataset = to_wordlist(&table).unwrap();
//! dataset.write_to_dir("cldf").unwrap();
//! ```

mod error;
pub mod mapping;
mod wordlist;

pub use error::{CldfError, Result};
pub use wordlist::{to_wordlist, to_wordlist_with_config, WordlistConfig, WordlistDataset};
