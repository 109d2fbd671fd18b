//! Date and timestamp encodings used by the monetization API.
//!
//! Subscription dates (`startDate`, `endDate`, ...) are calendar dates and
//! are always written as `YYYY-MM-DD`. The API itself is less consistent when
//! answering: depending on the endpoint it echoes either a bare date or a
//! `YYYY-MM-DD HH:MM:SS` timestamp in the organization's time zone. Readers in
//! this module accept both; the time part of a date field is dropped.
//!
//! Audit fields (`created`, `updated`) are timestamps and round-trip as
//! `YYYY-MM-DD HH:MM:SS`.
//!
//! The submodules are meant for `#[serde(with = "...")]`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Format used when writing calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used when writing timestamps.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp layouts accepted on input, tried in order.
const DATE_TIME_INPUT_FORMATS: [&str; 2] = [DATE_TIME_FORMAT, "%Y-%m-%dT%H:%M:%S"];

/// Parses a calendar date, accepting a trailing time part.
///
/// # Errors
///
/// Returns a human-readable message when `value` is neither a date nor a
/// timestamp in one of the accepted layouts.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }
    parse_date_time(value)
        .map(|dt| dt.date())
        .map_err(|_| format!("invalid date `{value}`, expected YYYY-MM-DD"))
}

/// Parses a timestamp. A bare date is read as midnight.
///
/// # Errors
///
/// Returns a human-readable message when `value` matches none of the
/// accepted layouts.
pub fn parse_date_time(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();
    for format in DATE_TIME_INPUT_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| format!("invalid timestamp `{value}`, expected YYYY-MM-DD HH:MM:SS"))
}

/// `serde` adapter for a required [`NaiveDate`].
pub mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{DATE_FORMAT, parse_date};

    /// Writes the date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    /// Reads a date or a timestamp.
    ///
    /// # Errors
    ///
    /// Fails when the value is not a string in an accepted layout.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_date(&s).map_err(serde::de::Error::custom)
    }
}

/// `serde` adapter for an optional [`NaiveDate`].
///
/// Pair with `#[serde(default, skip_serializing_if = "Option::is_none")]`.
pub mod option_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{DATE_FORMAT, parse_date};

    /// Writes the date as `YYYY-MM-DD`, or `null` when absent.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    /// Reads an optional date; `null` is `None`.
    ///
    /// # Errors
    ///
    /// Fails when a present value is not in an accepted layout.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| parse_date(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// `serde` adapter for an optional [`NaiveDateTime`].
pub mod option_date_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{DATE_TIME_FORMAT, parse_date_time};

    /// Writes the timestamp as `YYYY-MM-DD HH:MM:SS`, or `null` when absent.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.collect_str(&dt.format(DATE_TIME_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    /// Reads an optional timestamp; `null` is `None`.
    ///
    /// # Errors
    ///
    /// Fails when a present value is not in an accepted layout.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| parse_date_time(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
