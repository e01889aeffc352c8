// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Converts a seat map XML file to JSON.
//!
//! Run with: `cargo run -p seatmap --features cli -- data/seatmap1.xml`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use seatmap::{convert_file, SeatMapFormat};

#[derive(Parser, Debug)]
#[command(version, about = "Convert Seat Map XML to JSON")]
struct Cli {
    /// Seat map XML file. Names ending in `1.xml` are read as legacy OTA,
    /// names ending in `2.xml` as NDC seat maps.
    #[arg(required = true)]
    filepath: Vec<PathBuf>,

    /// Schema of the file (`legacy` or `ndc`) instead of the file name
    /// convention.
    #[arg(long)]
    format: Option<SeatMapFormat>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // only the first file is converted
    let input = &cli.filepath[0];

    let result = cli
        .format
        .map_or_else(|| SeatMapFormat::from_path(input), Ok)
        .and_then(|format| convert_file(input, format));

    match result {
        Ok(output) => {
            println!(
                "Successfully created JSON of {} in new file: {}",
                input.display(),
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
