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

//! Converts OTA `AirSeatMapRS` seat maps wrapped in a SOAP envelope.
//!
//! The legacy schema states everything inline: the cabin layout comes as a
//! ready-made string and each seat carries its own summary, fee and features.
//! Optional parts of a seat that are missing are filled with
//! [`NOT_AVAILABLE`].

use log::{debug, info};

use crate::error::Error;
use crate::model::*;

mod xml;

impl SeatMap {
    /// Builds a seat map from a legacy OTA seat map document.
    ///
    /// The seat map response is looked up at
    /// `Envelope/Body/OTA_AirSeatMapRS/SeatMapResponses/SeatMapResponse`. If
    /// the document contains several responses, only the first is converted.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// let data = std::fs::read("seatmap1.xml").unwrap();
    /// let seat_map = seatmap::SeatMap::try_from_legacy(&data).unwrap();
    ///
    /// println!("{} cabin(s)", seat_map.cabins.len());
    /// ```
    pub fn try_from_legacy(data: &[u8]) -> Result<Self, Error> {
        let xml = std::str::from_utf8(data)?;
        let envelope: xml::EnvelopeXml = quick_xml::de::from_str(xml)?;

        let response = envelope
            .body
            .and_then(|body| body.response)
            .and_then(|rs| rs.seat_map_responses)
            .and_then(|responses| responses.seat_map_responses.into_iter().next())
            .ok_or(Error::MissingField("SeatMapResponse"))?;

        let seat_map = SeatMap::try_from(response)?;
        info!(
            "converted legacy seat map of flight {} with {} cabin(s)",
            seat_map.flight_number,
            seat_map.cabins.len()
        );

        Ok(seat_map)
    }
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// ---------------------------------------------------------------------------
// Conversions from XML structs to the canonical seat map
// ---------------------------------------------------------------------------

impl TryFrom<xml::SeatMapResponseXml> for SeatMap {
    type Error = Error;

    fn try_from(x: xml::SeatMapResponseXml) -> Result<Self, Self::Error> {
        let info = x
            .flight_segment_info
            .ok_or(Error::MissingField("FlightSegmentInfo"))?;

        let departure_airport = info
            .departure_airport
            .and_then(|apt| apt.location_code)
            .ok_or(Error::MissingField("DepartureAirport/@LocationCode"))?;
        let arrival_airport = info
            .arrival_airport
            .and_then(|apt| apt.location_code)
            .ok_or(Error::MissingField("ArrivalAirport/@LocationCode"))?;

        let cabins = x
            .seat_map_details
            .ok_or(Error::MissingField("SeatMapDetails"))?
            .cabins
            .into_iter()
            .map(Cabin::try_from)
            .collect::<Result<_, _>>()?;

        Ok(SeatMap {
            departure_airport,
            arrival_airport,
            departure_date_time: info
                .departure_date_time
                .ok_or(Error::MissingField("FlightSegmentInfo/@DepartureDateTime"))?,
            flight_number: info
                .flight_number
                .ok_or(Error::MissingField("FlightSegmentInfo/@FlightNumber"))?,
            cabins,
        })
    }
}

impl TryFrom<xml::CabinClassXml> for Cabin {
    type Error = Error;

    fn try_from(x: xml::CabinClassXml) -> Result<Self, Self::Error> {
        // the class is only stated on the rows, the first one speaks for all
        let class = x
            .rows
            .first()
            .ok_or(Error::MissingField("CabinClass/RowInfo"))?
            .cabin_type
            .clone()
            .ok_or(Error::MissingField("RowInfo/@CabinType"))?;
        let layout = x.layout.ok_or(Error::MissingField("CabinClass/@Layout"))?;

        let mut cabin = Cabin {
            class,
            num_cols: layout.chars().filter(|&c| c != ' ').count(),
            layout,
            num_rows: 0,
            seats: Vec::with_capacity(x.rows.len()),
        };

        for row in x.rows {
            cabin.seats.push(row.seats.into_iter().map(Seat::from).collect());
            cabin.num_rows += 1;
        }

        debug!(
            "cabin {} with layout {:?}: {} row(s)",
            cabin.class, cabin.layout, cabin.num_rows
        );

        Ok(cabin)
    }
}

impl From<xml::SeatInfoXml> for Seat {
    fn from(x: xml::SeatInfoXml) -> Self {
        let (id, available) = match x.summary {
            Some(summary) => (
                or_not_available(summary.seat_number),
                or_not_available(summary.available_ind),
            ),
            None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
        };

        let fee = match x.service.and_then(|service| service.fee) {
            Some(fee) => Fee {
                price: or_not_available(fee.amount),
                currency_code: or_not_available(fee.currency_code),
                tax: Some(or_not_available(fee.taxes.and_then(|tax| tax.amount))),
            },
            None => Fee {
                tax: Some(NOT_AVAILABLE.to_string()),
                ..Fee::unpriced()
            },
        };

        let tags = x
            .features
            .into_iter()
            .filter(|feature| !feature.has_attributes)
            .filter_map(|feature| feature.text)
            .collect();

        Seat {
            id,
            available,
            tags,
            fee,
        }
    }
}
