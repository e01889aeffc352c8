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

//! Airline seat map normalizer.
//!
//! Airlines publish seat maps in two incompatible XML schemas: the legacy
//! SOAP wrapped OTA `AirSeatMapRS` and the IATA NDC `SeatAvailabilityRS`. This
//! crate converts either of them into one [`SeatMap`] with the flight's
//! cabins, rows and seats, their availability, price and feature tags.
//!
//! # Examples
//!
//! ```no_run
//! use seatmap::{SeatMap, SeatMapFormat};
//!
//! # fn main() -> Result<(), seatmap::Error> {
//! let data = std::fs::read("seatmap2.xml").expect("file should be readable");
//! let seat_map = SeatMap::try_from_xml(SeatMapFormat::Ndc, &data)?;
//!
//! println!("{}", seat_map.to_json()?);
//! #     Ok(())
//! # }
//! ```

mod error;
mod format;
mod legacy;
mod model;
mod ndc;

pub use error::Error;
pub use format::{convert_file, output_path, SeatMapFormat, OUTPUT_SUFFIX};
pub use model::{Cabin, Fee, Seat, SeatMap, NOT_AVAILABLE};
