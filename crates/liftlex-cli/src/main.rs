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


//! liftlex command line interface

use clap::Parser;
use liftlex_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// liftlex - LIFT lexicon extraction toolkit
///
/// Extracts fields from LIFT lexicons into flat tables, counts values,
/// validates structure and exports CLDF Wordlists.
///
/// # Examples
///
/// ```bash
/// # Entity counts and languages
/// liftlex summary lexicon.lift
///
/// # One row per sense with forms, glosses and entry ids
/// liftlex convert --format csv --field form,gloss,ID lexicon.lift
///
/// # One row per entry, glosses joined with ';'
/// liftlex convert -a csv -f form,gloss -g -p ';' lexicon.lift
///
/// # Part-of-speech frequencies
/// liftlex count --field category lexicon.lift
/// ```
#[derive(Parser)]
#[command(name = "liftlex")]
#[command(author, version, about = "liftlex - LIFT lexicon extraction toolkit", long_about = None)]
struct Cli {
    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Log detailed progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "liftlex=debug"
        } else {
            "liftlex=error"
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute(cli.output.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
