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

use std::fmt;

/// Errors raised while converting a seat map.
///
/// Everything except [`UnsupportedFormat`](Self::UnsupportedFormat),
/// [`Io`](Self::Io) and [`Json`](Self::Json) means the input document is
/// malformed and no seat map was produced.
#[derive(Clone, Debug)]
pub enum Error {
    /// An XML syntax or deserialization error from the underlying parser.
    Xml(String),
    /// A required element or attribute is missing.
    MissingField(&'static str),
    /// A value could not be parsed (e.g. a row number).
    InvalidValue { field: &'static str, value: String },
    /// A seat references a definition or offer the document never declared.
    UnknownReference { kind: &'static str, id: String },
    /// The input is in neither of the supported seat map schemas.
    UnsupportedFormat(String),
    /// Reading the input or writing the output failed.
    Io(String),
    /// The seat map could not be serialized to JSON.
    Json(String),
}

impl Error {
    /// Returns `true` if the error was caused by the content of the document.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::Xml(_)
                | Self::MissingField(_)
                | Self::InvalidValue { .. }
                | Self::UnknownReference { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(e) => write!(f, "XML error: {e}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: {value}")
            }
            Self::UnknownReference { kind, id } => {
                write!(f, "reference to undeclared {kind}: {id}")
            }
            Self::UnsupportedFormat(input) => write!(f, "unsupported seat map format: {input}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<quick_xml::DeError> for Error {
    fn from(e: quick_xml::DeError) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
