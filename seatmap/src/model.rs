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

//! The canonical seat map produced by both schema converters.
//!
//! Field names serialize to the stable camelCase JSON keys consumers expect
//! (`departureAirport`, `numCols`, `currencyCode`, ...). Counts are kept as
//! integers in Rust but written as JSON strings, matching the string-typed
//! attributes of the legacy schema.
//!
//! Values that a source document does not provide are filled with
//! [`NOT_AVAILABLE`] instead of being omitted, so every seat carries the same
//! set of keys.

use serde::{Serialize, Serializer};

/// Placeholder for a value the source document does not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// A flight's seat map normalized from either XML schema.
///
/// # Examples
///
/// ```no_run
/// # let data: Vec<u8> = Vec::new();
/// let seat_map = seatmap::SeatMap::try_from_ndc(&data).unwrap();
///
/// for cabin in &seat_map.cabins {
///     println!("{} rows in layout {}", cabin.num_rows, cabin.layout);
/// }
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMap {
    /// IATA code of the departure airport (e.g. `"LAS"`).
    pub departure_airport: String,
    /// IATA code of the arrival airport (e.g. `"DEN"`).
    pub arrival_airport: String,
    /// Departure date and time (e.g. `"2020-11-22T14:50"`).
    pub departure_date_time: String,
    /// Flight number without carrier prefix (e.g. `"1179"`).
    pub flight_number: String,
    /// Cabins in document order.
    pub cabins: Vec<Cabin>,
}

/// A contiguous seating section of one class.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cabin {
    /// Cabin class code. Empty for NDC seat maps, which don't carry one.
    pub class: String,
    /// Column letters with a space at each aisle (e.g. `"ABC DEF"`).
    pub layout: String,
    /// Number of columns.
    #[serde(serialize_with = "as_string")]
    pub num_cols: usize,
    /// Number of rows.
    #[serde(serialize_with = "as_string")]
    pub num_rows: usize,
    /// Seats row by row, both in document order.
    pub seats: Vec<Vec<Seat>>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Seat {
    /// Row number followed by the column letter (e.g. `"12A"`).
    pub id: String,
    /// `"true"` or `"false"`, the raw indicator of a legacy seat map, or
    /// [`NOT_AVAILABLE`].
    pub available: String,
    /// Human-readable seat features (e.g. `"Extra Legroom"`).
    pub tags: Vec<String>,
    pub fee: Fee,
}

/// The price of a seat.
///
/// `tax` is only known for legacy seat maps and is left out of the JSON for
/// NDC seat maps.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub price: String,
    pub currency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<String>,
}

impl Fee {
    /// A fee with neither price nor currency, as used for unpriced NDC seats.
    pub fn unpriced() -> Self {
        Self {
            price: NOT_AVAILABLE.to_string(),
            currency_code: NOT_AVAILABLE.to_string(),
            tax: None,
        }
    }
}

fn as_string<S: Serializer>(value: &usize, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
