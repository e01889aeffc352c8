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

//! Selecting the seat map schema and converting files.
//!
//! The schema of an input file is never sniffed from its content. It is
//! either given explicitly or taken from the file name: seat map files end in
//! `1.xml` for the legacy OTA schema and in `2.xml` for the NDC schema.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;

use crate::error::Error;
use crate::model::SeatMap;

/// Suffix appended to the file stem of converted seat maps.
pub const OUTPUT_SUFFIX: &str = "_parsed";

/// The XML schema of a seat map document.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum SeatMapFormat {
    /// SOAP wrapped OTA `AirSeatMapRS`.
    Legacy,
    /// IATA NDC `SeatAvailabilityRS`.
    Ndc,
}

impl SeatMapFormat {
    /// Selects the format by the file name convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use seatmap::SeatMapFormat;
    ///
    /// let format = SeatMapFormat::from_path(Path::new("data/seatmap2.xml")).unwrap();
    /// assert_eq!(format, SeatMapFormat::Ndc);
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let unsupported = || Error::UnsupportedFormat(path.display().to_string());

        if path.extension().and_then(|ext| ext.to_str()) != Some("xml") {
            return Err(unsupported());
        }

        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(unsupported)?;

        match stem.chars().last() {
            Some('1') => Ok(Self::Legacy),
            Some('2') => Ok(Self::Ndc),
            _ => Err(unsupported()),
        }
    }
}

impl FromStr for SeatMapFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" | "ota" | "1" => Ok(Self::Legacy),
            "ndc" | "edist" | "2" => Ok(Self::Ndc),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for SeatMapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Ndc => write!(f, "NDC"),
        }
    }
}

impl SeatMap {
    /// Builds a seat map from a document in the given format.
    pub fn try_from_xml(format: SeatMapFormat, data: &[u8]) -> Result<Self, Error> {
        match format {
            SeatMapFormat::Legacy => Self::try_from_legacy(data),
            SeatMapFormat::Ndc => Self::try_from_ndc(data),
        }
    }

    /// Serializes the seat map to JSON indented by four spaces.
    pub fn to_json(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        serde::Serialize::serialize(self, &mut ser)?;

        String::from_utf8(buf).map_err(|e| Error::Json(e.to_string()))
    }
}

/// Returns the path the converted seat map of `input` is written to, e.g.
/// `data/seatmap1_parsed.json` for `data/seatmap1.xml`.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();

    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.json"))
}

/// Converts the seat map file `input` and writes it as JSON next to it.
///
/// Returns the path of the written file. Nothing is written if the document
/// can't be converted.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use seatmap::{convert_file, SeatMapFormat};
///
/// let input = Path::new("seatmap1.xml");
/// let output = convert_file(input, SeatMapFormat::from_path(input).unwrap()).unwrap();
/// println!("written to {}", output.display());
/// ```
pub fn convert_file(input: &Path, format: SeatMapFormat) -> Result<PathBuf, Error> {
    debug!("converting {} as {format} seat map", input.display());

    let data = fs::read(input)?;
    let json = SeatMap::try_from_xml(format, &data)?.to_json()?;

    let output = output_path(input);
    fs::write(&output, json)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_format_by_file_name() {
        assert_eq!(
            SeatMapFormat::from_path(Path::new("seatmap1.xml")).unwrap(),
            SeatMapFormat::Legacy
        );
        assert_eq!(
            SeatMapFormat::from_path(Path::new("/tmp/flights/seatmap2.xml")).unwrap(),
            SeatMapFormat::Ndc
        );
    }

    #[test]
    fn reject_unknown_file_names() {
        for name in ["seatmap3.xml", "seatmap.xml", "seatmap1.json", "seatmap1", "2.xml.bak"] {
            assert!(
                matches!(
                    SeatMapFormat::from_path(Path::new(name)),
                    Err(Error::UnsupportedFormat(_))
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn parse_format_names() {
        assert_eq!("legacy".parse::<SeatMapFormat>().unwrap(), SeatMapFormat::Legacy);
        assert_eq!("NDC".parse::<SeatMapFormat>().unwrap(), SeatMapFormat::Ndc);
        assert!("soap".parse::<SeatMapFormat>().is_err());
    }

    #[test]
    fn output_path_next_to_input() {
        assert_eq!(
            output_path(Path::new("data/seatmap1.xml")),
            PathBuf::from("data/seatmap1_parsed.json")
        );
        assert_eq!(
            output_path(Path::new("seatmap2.xml")),
            PathBuf::from("seatmap2_parsed.json")
        );
    }

    #[test]
    fn json_is_indented_by_four_spaces() {
        let json = SeatMap::default().to_json().unwrap();
        assert!(json.starts_with("{\n    \"departureAirport\": \"\","));
        assert!(json.ends_with("\"cabins\": []\n}"));
    }
}
