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


//! Fields command - the field catalog as CSV

use super::{read_file, write_output};
use crate::error::CliError;
use liftlex_core::{catalog, LiftDocument};
use liftlex_csv::{catalog_to_csv, ToCsvConfig};
use tracing::debug;

/// List every catalog field as CSV.
///
/// The listing does not depend on the lexicon; when one is given it is
/// still read and parsed, so an unreadable file is reported.
pub fn fields(file: Option<&str>, output: Option<&str>) -> Result<(), CliError> {
    if let Some(file) = file {
        let content = read_file(file)?;
        let doc = LiftDocument::parse(&content)?;
        debug!(file, entries = doc.entries().count(), "lexicon loaded");
    }

    let csv = catalog_to_csv(catalog::list_all(), &ToCsvConfig::default())?;
    write_output(&csv, output)
}
