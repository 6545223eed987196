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


//! Unified error type for the convenience functions.

use thiserror::Error;

/// Any failure of a convenience function.
#[derive(Debug, Error)]
pub enum Error {
    /// Parsing or table building failed.
    #[error(transparent)]
    Lift(#[from] liftlex_core::LiftError),

    /// Structural validation failed.
    #[error(transparent)]
    Validation(#[from] liftlex_core::schema::ValidationError),

    /// CSV emission failed.
    #[cfg(feature = "csv")]
    #[error(transparent)]
    Csv(#[from] liftlex_csv::CsvError),

    /// Wordlist emission failed.
    #[cfg(feature = "cldf")]
    #[error(transparent)]
    Cldf(#[from] liftlex_cldf::CldfError),
}

/// Result alias for the convenience functions.
pub type Result<T> = std::result::Result<T, Error>;
