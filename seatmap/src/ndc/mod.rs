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

//! Converts IATA NDC (EDIST 17.2) `SeatAvailabilityRS` seat maps.
//!
//! Unlike the legacy schema, NDC seats reference their features and prices by
//! ID. The seat definition and offer lookup tables are therefore built first
//! and then handed to every cabin. The cabin layout isn't given as a string
//! either but reconstructed from the column declarations and their aisle
//! markers.

use log::{debug, info};

use crate::error::Error;
use crate::model::*;

mod lookup;
mod xml;

use lookup::{Offers, SeatDefinitions, AVAILABLE_SEAT_DEFINITION};

/// Column kind marking a column next to an aisle.
const AISLE: &str = "AISLE";

impl SeatMap {
    /// Builds a seat map from an NDC `SeatAvailabilityRS` document.
    ///
    /// Each `SeatMap` element of the document becomes one cabin. Flight
    /// details are taken from the first segment of the `FlightSegmentList`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// let data = std::fs::read("seatmap2.xml").unwrap();
    /// let seat_map = seatmap::SeatMap::try_from_ndc(&data).unwrap();
    ///
    /// for seat in seat_map.cabins.iter().flat_map(|c| c.seats.iter().flatten()) {
    ///     println!("{} {} {}", seat.id, seat.available, seat.fee.price);
    /// }
    /// ```
    pub fn try_from_ndc(data: &[u8]) -> Result<Self, Error> {
        let xml = std::str::from_utf8(data)?;
        let doc: xml::SeatAvailabilityXml = quick_xml::de::from_str(xml)?;

        let data_lists = doc.data_lists.ok_or(Error::MissingField("DataLists"))?;
        let segment = data_lists
            .flight_segment_list
            .and_then(|list| list.flight_segments.into_iter().next())
            .ok_or(Error::MissingField("FlightSegmentList/FlightSegment"))?;

        let departure = segment
            .departure
            .ok_or(Error::MissingField("FlightSegment/Departure"))?;
        let date = departure
            .date
            .ok_or(Error::MissingField("Departure/Date"))?;
        let time = departure
            .time
            .ok_or(Error::MissingField("Departure/Time"))?;

        let definitions = SeatDefinitions::build(
            data_lists
                .seat_definition_list
                .map(|list| list.seat_definitions)
                .unwrap_or_default()
                .as_slice(),
        )?;
        let offers = Offers::build(&doc.offers)?;

        let cabins = doc
            .seat_maps
            .into_iter()
            .map(|seat_map| convert_cabin(seat_map, &definitions, &offers))
            .collect::<Result<_, _>>()?;

        let seat_map = SeatMap {
            departure_airport: departure
                .airport_code
                .ok_or(Error::MissingField("Departure/AirportCode"))?,
            arrival_airport: segment
                .arrival
                .and_then(|arrival| arrival.airport_code)
                .ok_or(Error::MissingField("Arrival/AirportCode"))?,
            departure_date_time: format!("{date}T{time}"),
            flight_number: segment
                .marketing_carrier
                .and_then(|carrier| carrier.flight_number)
                .ok_or(Error::MissingField("MarketingCarrier/FlightNumber"))?,
            cabins,
        };

        info!(
            "converted NDC seat map of flight {} with {} cabin(s)",
            seat_map.flight_number,
            seat_map.cabins.len()
        );

        Ok(seat_map)
    }
}

fn convert_cabin(
    x: xml::SeatMapXml,
    definitions: &SeatDefinitions,
    offers: &Offers,
) -> Result<Cabin, Error> {
    let cabin = x.cabin.ok_or(Error::MissingField("SeatMap/Cabin"))?;
    let cabin_layout = cabin
        .cabin_layout
        .ok_or(Error::MissingField("Cabin/CabinLayout"))?;

    let layout = layout(&cabin_layout.columns)?;
    let range = cabin_layout
        .rows
        .ok_or(Error::MissingField("CabinLayout/Rows"))?;
    let num_rows = num_rows(range)?;

    let seats = cabin
        .rows
        .into_iter()
        .map(|row| convert_row(row, definitions, offers))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "cabin with layout {:?}: {} declared row(s), {} present",
        layout,
        num_rows,
        seats.len()
    );

    Ok(Cabin {
        class: String::new(),
        layout,
        // aisle markers are declared columns too and count as such
        num_cols: cabin_layout.columns.len(),
        num_rows,
        seats,
    })
}

/// Concatenates the column positions to a layout like `"ABC DEF"`.
///
/// A column marked as aisle is followed by a space, unless the letter before
/// it is already preceded by one. Two adjacent aisle columns, one on each side
/// of the aisle, therefore yield a single gap.
fn layout(columns: &[xml::ColumnXml]) -> Result<String, Error> {
    let mut layout = String::with_capacity(columns.len() * 2);

    for column in columns {
        let position = column
            .position
            .as_deref()
            .ok_or(Error::MissingField("Columns/@Position"))?;
        let follows_letter = layout.chars().last().is_some_and(|c| c != ' ');

        layout.push_str(position);

        if column.kind.as_deref() == Some(AISLE) && follows_letter {
            layout.push(' ');
        }
    }

    Ok(layout)
}

/// Number of rows declared by the range, regardless of how many rows the
/// cabin actually lists.
fn num_rows(range: xml::RowRangeXml) -> Result<usize, Error> {
    let first = row_number("Rows/First", range.first)?;
    let last = row_number("Rows/Last", range.last)?;

    last
        .checked_sub(first)
        .and_then(|span| span.checked_add(1))
        .and_then(|count| usize::try_from(count).ok())
        .ok_or_else(|| Error::InvalidValue {
            field: "CabinLayout/Rows",
            value: format!("{first}..{last}"),
        })
}

fn row_number(field: &'static str, value: Option<String>) -> Result<i64, Error> {
    let value = value.ok_or(Error::MissingField(field))?;
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidValue { field, value })
}

fn convert_row(
    x: xml::RowXml,
    definitions: &SeatDefinitions,
    offers: &Offers,
) -> Result<Vec<Seat>, Error> {
    let number = x.number.ok_or(Error::MissingField("Row/Number"))?;

    x.seats
        .into_iter()
        .map(|seat| convert_seat(&number, seat, definitions, offers))
        .collect()
}

fn convert_seat(
    row: &str,
    x: xml::SeatXml,
    definitions: &SeatDefinitions,
    offers: &Offers,
) -> Result<Seat, Error> {
    let column = x.column.ok_or(Error::MissingField("Seat/Column"))?;

    let mut available = false;
    let mut tags = Vec::with_capacity(x.seat_definition_refs.len());
    for id in &x.seat_definition_refs {
        if id == AVAILABLE_SEAT_DEFINITION {
            available = true;
        } else {
            tags.push(definitions.tag(id)?.to_string());
        }
    }

    let fee = match x.offer_item_refs {
        Some(id) => offers.fee(&id)?,
        None => Fee::unpriced(),
    };

    Ok(Seat {
        id: format!("{row}{column}"),
        available: available.to_string(),
        tags,
        fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEAT_MAP: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
    <SeatAvailabilityRS Version="17.2"
      xmlns="http://www.iata.org/IATA/EDIST/2017.2"
      xmlns:ns2="http://www.iata.org/IATA/EDIST/2017.2/CR129">
      <Document>
        <ReferenceVersion>1.0</ReferenceVersion>
      </Document>
      <Success/>
      <ALaCarteOffer OfferID="OF1" Owner="F9">
        <ALaCarteOfferItem OfferItemID="OI-39">
          <UnitPriceDetail>
            <TotalAmount>
              <SimpleCurrencyPrice Code="USD">39.00</SimpleCurrencyPrice>
            </TotalAmount>
          </UnitPriceDetail>
        </ALaCarteOfferItem>
        <ALaCarteOfferItem OfferItemID="OI-16">
          <UnitPriceDetail>
            <TotalAmount>
              <SimpleCurrencyPrice Code="USD">16.00</SimpleCurrencyPrice>
            </TotalAmount>
          </UnitPriceDetail>
        </ALaCarteOfferItem>
      </ALaCarteOffer>
      <SeatMap>
        <SegmentRef>SEG1</SegmentRef>
        <Cabin>
          <CabinLayout>
            <Columns Position="A">WINDOW</Columns>
            <Columns Position="B">AISLE</Columns>
            <Columns Position="C">AISLE</Columns>
            <Columns Position="D">WINDOW</Columns>
            <Rows>
              <First>1</First>
              <Last>3</Last>
            </Rows>
          </CabinLayout>
          <Row>
            <Number>1</Number>
            <Seat>
              <Column>A</Column>
              <OfferItemRefs>OI-39</OfferItemRefs>
              <SeatDefinitionRef>SD4</SeatDefinitionRef>
              <SeatDefinitionRef>SD19</SeatDefinitionRef>
            </Seat>
            <Seat>
              <Column>B</Column>
              <SeatDefinitionRef>SD3</SeatDefinitionRef>
            </Seat>
          </Row>
          <Row>
            <Number>3</Number>
            <Seat>
              <Column>D</Column>
              <OfferItemRefs>OI-16</OfferItemRefs>
              <SeatDefinitionRef>SD4</SeatDefinitionRef>
              <SeatDefinitionRef>SD19</SeatDefinitionRef>
              <SeatDefinitionRef>SD19</SeatDefinitionRef>
            </Seat>
          </Row>
        </Cabin>
      </SeatMap>
      <SeatMap>
        <SegmentRef>SEG1</SegmentRef>
        <Cabin>
          <CabinLayout>
            <Columns Position="A">WINDOW</Columns>
            <Columns Position="B"/>
            <Columns Position="C">AISLE</Columns>
            <Columns Position="D">AISLE</Columns>
            <Columns Position="E"/>
            <Columns Position="F">WINDOW</Columns>
            <Rows>
              <First>8</First>
              <Last>30</Last>
            </Rows>
          </CabinLayout>
          <Row>
            <Number>8</Number>
            <Seat>
              <Column>C</Column>
              <SeatDefinitionRef>SD4</SeatDefinitionRef>
            </Seat>
          </Row>
        </Cabin>
      </SeatMap>
      <DataLists>
        <FlightSegmentList>
          <FlightSegment SegmentKey="SEG1">
            <Departure>
              <AirportCode>LAS</AirportCode>
              <Date>2020-11-22</Date>
              <Time>14:50</Time>
            </Departure>
            <Arrival>
              <AirportCode>DEN</AirportCode>
            </Arrival>
            <MarketingCarrier>
              <AirlineID>F9</AirlineID>
              <FlightNumber>1179</FlightNumber>
            </MarketingCarrier>
          </FlightSegment>
        </FlightSegmentList>
        <SeatDefinitionList>
          <SeatDefinition SeatDefinitionID="SD3">
            <Description>
              <Text>AISLE</Text>
            </Description>
          </SeatDefinition>
          <SeatDefinition SeatDefinitionID="SD4">
            <Description>
              <Text>AVAILABLE</Text>
            </Description>
          </SeatDefinition>
          <SeatDefinition SeatDefinitionID="SD19">
            <Description>
              <Text>EXTRA_LEG_ROOM</Text>
            </Description>
          </SeatDefinition>
        </SeatDefinitionList>
      </DataLists>
    </SeatAvailabilityRS>"#;

    fn column(position: &str, kind: Option<&str>) -> xml::ColumnXml {
        xml::ColumnXml {
            position: Some(position.to_string()),
            kind: kind.map(str::to_string),
        }
    }

    #[test]
    fn convert_flight_segment() {
        let seat_map = SeatMap::try_from_ndc(SEAT_MAP).unwrap();

        assert_eq!(seat_map.departure_airport, "LAS");
        assert_eq!(seat_map.arrival_airport, "DEN");
        assert_eq!(seat_map.departure_date_time, "2020-11-22T14:50");
        assert_eq!(seat_map.flight_number, "1179");
        assert_eq!(seat_map.cabins.len(), 2);
    }

    #[test]
    fn reconstruct_layout() {
        let seat_map = SeatMap::try_from_ndc(SEAT_MAP).unwrap();

        let first = &seat_map.cabins[0];
        assert_eq!(first.class, "");
        assert_eq!(first.layout, "AB CD");
        assert_eq!(first.num_cols, 4);

        let second = &seat_map.cabins[1];
        assert_eq!(second.layout, "ABC DEF");
        assert_eq!(second.num_cols, 6);
    }

    #[test]
    fn single_gap_between_adjacent_aisle_columns() {
        let columns = [
            column("A", Some("WINDOW")),
            column("B", None),
            column("C", Some(AISLE)),
            column("D", Some(AISLE)),
            column("E", None),
            column("F", None),
            column("G", Some(AISLE)),
            column("H", Some(AISLE)),
            column("J", None),
            column("K", Some("WINDOW")),
        ];

        assert_eq!(layout(&columns).unwrap(), "ABC DEFG HJK");
    }

    #[test]
    fn leading_aisle_column_adds_no_gap() {
        let columns = [column("A", Some(AISLE)), column("B", None)];
        assert_eq!(layout(&columns).unwrap(), "AB");
    }

    #[test]
    fn rows_follow_declared_range() {
        let seat_map = SeatMap::try_from_ndc(SEAT_MAP).unwrap();

        // rows 1 and 3 are listed but the range declares 1 to 3
        let first = &seat_map.cabins[0];
        assert_eq!(first.num_rows, 3);
        assert_eq!(first.seats.len(), 2);

        let second = &seat_map.cabins[1];
        assert_eq!(second.num_rows, 23);
        assert_eq!(second.seats.len(), 1);
    }

    #[test]
    fn availability_sentinel_is_not_a_tag() {
        let seat_map = SeatMap::try_from_ndc(SEAT_MAP).unwrap();
        let seat = &seat_map.cabins[0].seats[0][0];

        assert_eq!(seat.id, "1A");
        assert_eq!(seat.available, "true");
        assert_eq!(seat.tags, vec!["Extra Leg Room"]);
    }

    #[test]
    fn keep_duplicate_tags() {
        let seat_map = SeatMap::try_from_ndc(SEAT_MAP).unwrap();
        let seat = &seat_map.cabins[0].seats[1][0];

        assert_eq!(seat.id, "3D");
        assert_eq!(seat.tags, vec!["Extra Leg Room", "Extra Leg Room"]);
    }

    #[test]
    fn resolve_offer_or_default_fee() {
        let seat_map = SeatMap::try_from_ndc(SEAT_MAP).unwrap();
        let row = &seat_map.cabins[0].seats[0];

        assert_eq!(row[0].fee.price, "39.00");
        assert_eq!(row[0].fee.currency_code, "USD");
        assert_eq!(row[0].fee.tax, None);

        assert_eq!(row[1].id, "1B");
        assert_eq!(row[1].available, "false");
        assert_eq!(row[1].tags, vec!["Aisle"]);
        assert_eq!(row[1].fee, Fee::unpriced());
    }

    #[test]
    fn reject_unknown_seat_definition() {
        let xml = std::str::from_utf8(SEAT_MAP)
            .unwrap()
            .replace(">SD3<", ">SD77<");

        let err = SeatMap::try_from_ndc(xml.as_bytes()).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(matches!(
            err,
            Error::UnknownReference { kind: "seat definition", ref id } if id == "SD77"
        ));
    }

    #[test]
    fn reject_unknown_offer() {
        let xml = std::str::from_utf8(SEAT_MAP)
            .unwrap()
            .replace("<OfferItemRefs>OI-16<", "<OfferItemRefs>OI-99<");

        let err = SeatMap::try_from_ndc(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::UnknownReference { kind: "offer item", .. }));
    }

    #[test]
    fn reject_missing_data_lists() {
        let xml = br#"
        <SeatAvailabilityRS xmlns="http://www.iata.org/IATA/EDIST/2017.2">
          <Success/>
        </SeatAvailabilityRS>"#;

        let err = SeatMap::try_from_ndc(xml).unwrap_err();
        assert!(matches!(err, Error::MissingField("DataLists")));
    }

    #[test]
    fn reject_invalid_row_range() {
        let xml = std::str::from_utf8(SEAT_MAP)
            .unwrap()
            .replace("<Last>30</Last>", "<Last>XX</Last>");

        let err = SeatMap::try_from_ndc(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { field: "Rows/Last", .. }));
    }

    #[test]
    fn reject_inverted_row_range() {
        let range = xml::RowRangeXml {
            first: Some("10".to_string()),
            last: Some("2".to_string()),
        };

        assert!(matches!(
            num_rows(range),
            Err(Error::InvalidValue { field: "CabinLayout/Rows", .. })
        ));
    }

    #[test]
    fn reject_row_range_exceeding_integer_bounds() {
        let range = xml::RowRangeXml {
            first: Some(i64::MIN.to_string()),
            last: Some(i64::MAX.to_string()),
        };

        assert!(matches!(
            num_rows(range),
            Err(Error::InvalidValue { field: "CabinLayout/Rows", .. })
        ));
    }
}
