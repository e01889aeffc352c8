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

//! Lookup tables for the IDs that NDC seats reference.
//!
//! Both tables are built once per document before any seat is converted and
//! are read-only afterwards. A seat referencing an ID that is not in the table
//! is an error since the document declared a reference it didn't define.

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::Error;
use crate::model::Fee;

use super::xml;

/// Seat definition that marks a seat as available instead of describing it.
pub(crate) const AVAILABLE_SEAT_DEFINITION: &str = "SD4";

/// Seat definition ID to display tag (e.g. `"EXTRA_LEG_ROOM"` becomes
/// `"Extra Leg Room"`).
#[derive(Debug, Default)]
pub(crate) struct SeatDefinitions {
    tags: HashMap<String, String>,
}

impl SeatDefinitions {
    pub fn build(definitions: &[xml::SeatDefinitionXml]) -> Result<Self, Error> {
        let mut tags = HashMap::with_capacity(definitions.len());

        for definition in definitions {
            let id = definition
                .id
                .clone()
                .ok_or(Error::MissingField("SeatDefinition/@SeatDefinitionID"))?;
            let text = definition
                .descriptions
                .iter()
                .find_map(|desc| desc.text.as_deref())
                .ok_or(Error::MissingField("SeatDefinition/Description/Text"))?;

            tags.insert(id, display_tag(text));
        }

        debug!("{} seat definition(s)", tags.len());
        Ok(Self { tags })
    }

    pub fn tag(&self, id: &str) -> Result<&str, Error> {
        self.tags
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownReference {
                kind: "seat definition",
                id: id.to_string(),
            })
    }
}

/// Offer item ID to the seat's price.
#[derive(Debug, Default)]
pub(crate) struct Offers {
    fees: HashMap<String, Fee>,
}

impl Offers {
    /// Collects the items of all offers.
    ///
    /// If an item ID appears more than once, the last item wins.
    pub fn build(offers: &[xml::ALaCarteOfferXml]) -> Result<Self, Error> {
        let mut fees = HashMap::new();

        for item in offers.iter().flat_map(|offer| &offer.items) {
            let id = item
                .id
                .clone()
                .ok_or(Error::MissingField("ALaCarteOfferItem/@OfferItemID"))?;
            let price = item
                .unit_price_detail
                .as_ref()
                .and_then(|detail| detail.total_amount.as_ref())
                .and_then(|amount| amount.simple_currency_price.as_ref())
                .ok_or(Error::MissingField(
                    "ALaCarteOfferItem/UnitPriceDetail/TotalAmount/SimpleCurrencyPrice",
                ))?;

            let fee = Fee {
                price: price
                    .value
                    .clone()
                    .ok_or(Error::MissingField("SimpleCurrencyPrice"))?,
                currency_code: price
                    .code
                    .clone()
                    .ok_or(Error::MissingField("SimpleCurrencyPrice/@Code"))?,
                tax: None,
            };

            if fees.insert(id.clone(), fee).is_some() {
                warn!("offer item {id} is declared more than once, using the last one");
            }
        }

        debug!("{} offer item(s)", fees.len());
        Ok(Self { fees })
    }

    pub fn fee(&self, id: &str) -> Result<Fee, Error> {
        self.fees
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownReference {
                kind: "offer item",
                id: id.to_string(),
            })
    }
}

/// Turns a definition text like `"EXTRA_LEG_ROOM"` into `"Extra Leg Room"`.
///
/// Every run of letters starts upper-case and continues lower-case, any other
/// character starts a new run.
fn display_tag(text: &str) -> String {
    let mut tag = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars().map(|c| if c == '_' { ' ' } else { c }) {
        if c.is_alphabetic() {
            if in_word {
                tag.extend(c.to_lowercase());
            } else {
                tag.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            tag.push(c);
            in_word = false;
        }
    }

    tag
}
