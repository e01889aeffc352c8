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

//! Serde-deserializable structs that mirror the IATA EDIST
//! `SeatAvailabilityRS` XML structure.
//!
//! Seats don't embed their features or prices but reference entries of the
//! `SeatDefinitionList` and `ALaCarteOffer` sections by ID.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SeatAvailabilityXml {
    #[serde(rename = "DataLists", default)]
    pub data_lists: Option<DataListsXml>,
    #[serde(rename = "ALaCarteOffer", default)]
    pub offers: Vec<ALaCarteOfferXml>,
    #[serde(rename = "SeatMap", default)]
    pub seat_maps: Vec<SeatMapXml>,
}

// ---------------------------------------------------------------------------
// Data lists
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct DataListsXml {
    #[serde(rename = "FlightSegmentList", default)]
    pub flight_segment_list: Option<FlightSegmentListXml>,
    #[serde(rename = "SeatDefinitionList", default)]
    pub seat_definition_list: Option<SeatDefinitionListXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlightSegmentListXml {
    #[serde(rename = "FlightSegment", default)]
    pub flight_segments: Vec<FlightSegmentXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlightSegmentXml {
    #[serde(rename = "Departure", default)]
    pub departure: Option<StationXml>,
    #[serde(rename = "Arrival", default)]
    pub arrival: Option<StationXml>,
    #[serde(rename = "MarketingCarrier", default)]
    pub marketing_carrier: Option<MarketingCarrierXml>,
}

/// A `Departure` or `Arrival` of a flight segment.
#[derive(Debug, Deserialize)]
pub(crate) struct StationXml {
    #[serde(rename = "AirportCode", default)]
    pub airport_code: Option<String>,
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "Time", default)]
    pub time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MarketingCarrierXml {
    #[serde(rename = "FlightNumber", default)]
    pub flight_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SeatDefinitionListXml {
    #[serde(rename = "SeatDefinition", default)]
    pub seat_definitions: Vec<SeatDefinitionXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SeatDefinitionXml {
    #[serde(rename = "@SeatDefinitionID", default)]
    pub id: Option<String>,
    #[serde(rename = "Description", default)]
    pub descriptions: Vec<DescriptionXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DescriptionXml {
    #[serde(rename = "Text", default)]
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// Offers
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ALaCarteOfferXml {
    #[serde(rename = "ALaCarteOfferItem", default)]
    pub items: Vec<OfferItemXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OfferItemXml {
    #[serde(rename = "@OfferItemID", default)]
    pub id: Option<String>,
    #[serde(rename = "UnitPriceDetail", default)]
    pub unit_price_detail: Option<UnitPriceDetailXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UnitPriceDetailXml {
    #[serde(rename = "TotalAmount", default)]
    pub total_amount: Option<TotalAmountXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TotalAmountXml {
    #[serde(rename = "SimpleCurrencyPrice", default)]
    pub simple_currency_price: Option<SimpleCurrencyPriceXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimpleCurrencyPriceXml {
    #[serde(rename = "@Code", default)]
    pub code: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

// ---------------------------------------------------------------------------
// Seat maps
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct SeatMapXml {
    #[serde(rename = "Cabin", default)]
    pub cabin: Option<CabinXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CabinXml {
    #[serde(rename = "CabinLayout", default)]
    pub cabin_layout: Option<CabinLayoutXml>,
    #[serde(rename = "Row", default)]
    pub rows: Vec<RowXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CabinLayoutXml {
    #[serde(rename = "Columns", default)]
    pub columns: Vec<ColumnXml>,
    #[serde(rename = "Rows", default)]
    pub rows: Option<RowRangeXml>,
}

/// A column declaration, e.g. `<Columns Position="C">AISLE</Columns>`.
#[derive(Debug, Deserialize)]
pub(crate) struct ColumnXml {
    #[serde(rename = "@Position", default)]
    pub position: Option<String>,
    #[serde(rename = "$text", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RowRangeXml {
    #[serde(rename = "First", default)]
    pub first: Option<String>,
    #[serde(rename = "Last", default)]
    pub last: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RowXml {
    #[serde(rename = "Number", default)]
    pub number: Option<String>,
    #[serde(rename = "Seat", default)]
    pub seats: Vec<SeatXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SeatXml {
    #[serde(rename = "Column", default)]
    pub column: Option<String>,
    #[serde(rename = "OfferItemRefs", default)]
    pub offer_item_refs: Option<String>,
    #[serde(rename = "SeatDefinitionRef", default)]
    pub seat_definition_refs: Vec<String>,
}
