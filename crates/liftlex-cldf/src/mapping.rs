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


//! How result table fields map onto FormTable columns.

/// A FormTable column fed from the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `Form`; the subfield becomes `Language_ID` and each non-empty
    /// language yields its own form row.
    Form,
    /// `Parameter_ID`, from the first non-empty column of the field.
    Parameter,
    /// A plain column copied from the first non-empty column of the field.
    Column(&'static str),
}

/// One mapping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Catalog field name.
    pub field: &'static str,
    /// Where its values go.
    pub target: Target,
}

/// The field to FormTable mapping. Fields not listed are dropped.
pub const WORDLIST_MAPPING: &[ColumnMapping] = &[
    ColumnMapping {
        field: "form",
        target: Target::Form,
    },
    ColumnMapping {
        field: "gloss",
        target: Target::Parameter,
    },
    ColumnMapping {
        field: "ID",
        target: Target::Column("Entry_ID"),
    },
    ColumnMapping {
        field: "category",
        target: Target::Column("Category"),
    },
];

/// The mapping rule for `field`, if it has one.
pub fn mapping_for(field: &str) -> Option<&'static ColumnMapping> {
    WORDLIST_MAPPING.iter().find(|m| m.field == field)
}
