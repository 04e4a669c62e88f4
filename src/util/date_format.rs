//! Serde support for the API date/time format `yyyy-MM-dd HH:mm:ss.SSS`.
//!
//! Timestamps are written with exactly three fractional digits, so anything
//! below millisecond precision is truncated. Parsing accepts any number of
//! fractional digits, including none.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDateTime;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Doc {
//!     #[serde(with = "moysklad_api::util::date_format")]
//!     moment: NaiveDateTime,
//! }
//!
//! let doc: Doc = serde_json::from_str(r#"{"moment":"2024-03-01 10:20:30.456"}"#).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&doc).unwrap(),
//!     r#"{"moment":"2024-03-01 10:20:30.456"}"#
//! );
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// Output format (three fractional digits).
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Input format (optional fraction of any length).
const PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Formats a timestamp in the API format.
#[must_use]
pub fn format(date: &NaiveDateTime) -> String {
    date.format(FORMAT).to_string()
}

/// Parses a timestamp in the API format.
///
/// # Errors
///
/// Returns a [`chrono::ParseError`] if the text does not match.
pub fn parse(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text, PARSE_FORMAT)
}

/// Serializes a timestamp in the API format.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(date))
}

/// Deserializes a timestamp in the API format.
///
/// # Errors
///
/// Fails if the value is not a string in the API format.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse(&text).map_err(serde::de::Error::custom)
}

/// The same format for `Option<NaiveDateTime>` fields.
///
/// Pair with `#[serde(default, skip_serializing_if = "Option::is_none")]`.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes an optional timestamp.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(date: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => super::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional timestamp; `null` maps to `None`.
    ///
    /// # Errors
    ///
    /// Fails if a present value is not in the API format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|text| super::parse(&text).map_err(serde::de::Error::custom))
            .transpose()
    }
}
