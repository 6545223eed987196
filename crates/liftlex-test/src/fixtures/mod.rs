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


//! Canonical LIFT fixtures.
//!
//! - **documents**: complete lexicons, from empty to every catalog field
//! - **errors**: malformed and structurally invalid inputs
//! - **builders**: fluent builders that render lexicons of any shape

pub mod builders;
mod documents;
pub mod errors;

pub use documents::*;

use crate::FixtureList;

/// Returns all document fixtures for iteration.
///
/// Every fixture is well-formed and passes structural validation.
pub fn all() -> FixtureList {
    vec![
        ("tiny", tiny),
        ("rich", rich),
        ("empty_lexicon", empty_lexicon),
        ("bare_entries", bare_entries),
        ("sparse_languages", sparse_languages),
    ]
}
