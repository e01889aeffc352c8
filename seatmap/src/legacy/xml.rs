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

//! Serde-deserializable structs that mirror the OTA `AirSeatMapRS` XML
//! wrapped in a SOAP envelope.
//!
//! Element names are matched without their namespace prefix. Every node is
//! optional here; the converter decides which of them are required.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct EnvelopeXml {
    #[serde(rename = "Body", default)]
    pub body: Option<BodyXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BodyXml {
    #[serde(rename = "OTA_AirSeatMapRS", default)]
    pub response: Option<AirSeatMapRsXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirSeatMapRsXml {
    #[serde(rename = "SeatMapResponses", default)]
    pub seat_map_responses: Option<SeatMapResponsesXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SeatMapResponsesXml {
    #[serde(rename = "SeatMapResponse", default)]
    pub seat_map_responses: Vec<SeatMapResponseXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SeatMapResponseXml {
    #[serde(rename = "FlightSegmentInfo", default)]
    pub flight_segment_info: Option<FlightSegmentInfoXml>,
    #[serde(rename = "SeatMapDetails", default)]
    pub seat_map_details: Option<SeatMapDetailsXml>,
}

// ---------------------------------------------------------------------------
// Flight segment
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct FlightSegmentInfoXml {
    #[serde(rename = "@DepartureDateTime", default)]
    pub departure_date_time: Option<String>,
    #[serde(rename = "@FlightNumber", default)]
    pub flight_number: Option<String>,
    #[serde(rename = "DepartureAirport", default)]
    pub departure_airport: Option<AirportXml>,
    #[serde(rename = "ArrivalAirport", default)]
    pub arrival_airport: Option<AirportXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirportXml {
    #[serde(rename = "@LocationCode", default)]
    pub location_code: Option<String>,
}

// ---------------------------------------------------------------------------
// Cabins, rows and seats
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct SeatMapDetailsXml {
    #[serde(rename = "CabinClass", default)]
    pub cabins: Vec<CabinClassXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CabinClassXml {
    #[serde(rename = "@Layout", default)]
    pub layout: Option<String>,
    #[serde(rename = "RowInfo", default)]
    pub rows: Vec<RowInfoXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RowInfoXml {
    #[serde(rename = "@CabinType", default)]
    pub cabin_type: Option<String>,
    #[serde(rename = "SeatInfo", default)]
    pub seats: Vec<SeatInfoXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SeatInfoXml {
    #[serde(rename = "Summary", default)]
    pub summary: Option<SummaryXml>,
    #[serde(rename = "Service", default)]
    pub service: Option<ServiceXml>,
    #[serde(rename = "Features", default)]
    pub features: Vec<FeatureXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryXml {
    #[serde(rename = "@SeatNumber", default)]
    pub seat_number: Option<String>,
    #[serde(rename = "@AvailableInd", default)]
    pub available_ind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceXml {
    #[serde(rename = "Fee", default)]
    pub fee: Option<FeeXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeeXml {
    #[serde(rename = "@Amount", default)]
    pub amount: Option<String>,
    #[serde(rename = "@CurrencyCode", default)]
    pub currency_code: Option<String>,
    #[serde(rename = "Taxes", default)]
    pub taxes: Option<TaxesXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaxesXml {
    #[serde(rename = "@Amount", default)]
    pub amount: Option<String>,
}

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

/// A `<Features>` entry of a seat.
///
/// Plain entries hold a feature name as text. Entries with attributes (e.g.
/// `extension="Preferred"`) are a different kind of marker, so instead of
/// mapping a fixed set of attributes we only record whether there were any.
#[derive(Debug, Default)]
pub(crate) struct FeatureXml {
    pub has_attributes: bool,
    pub text: Option<String>,
}

impl<'de> Deserialize<'de> for FeatureXml {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FeatureVisitor)
    }
}

struct FeatureVisitor;

impl<'de> Visitor<'de> for FeatureVisitor {
    type Value = FeatureXml;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a seat feature element")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FeatureXml, A::Error> {
        let mut feature = FeatureXml::default();

        while let Some(key) = map.next_key::<String>()? {
            if key == "$text" {
                feature.text = Some(map.next_value()?);
                continue;
            }

            // namespace bindings are not attributes of the element
            if key.starts_with('@') && !key.starts_with("@xmlns") {
                feature.has_attributes = true;
            }
            map.next_value::<IgnoredAny>()?;
        }

        Ok(feature)
    }
}
