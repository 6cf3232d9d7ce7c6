//! Type-aware cell value formatting
//!
//! Three directions per column type:
//! - `to_editable`: raw stored value → string placed in the cell editor
//! - `to_display`: raw stored value → string rendered in the grid
//! - `to_stored`: editor string → raw value carried by an `UpdateCell` intent
//!
//! None of these fail. Unparseable dates format to `""` and store unchanged.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::model::{CellValue, ColumnType};

/// Editor form for date cells (local wall-clock time, minute precision)
pub const EDITABLE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Long display form, e.g. `January 5, 2024, 9:30 AM`
pub const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y, %-I:%M %p";

/// Naive date/time layouts accepted on input, tried in order
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn to_editable(value: &CellValue, column_type: ColumnType) -> String {
    to_editable_in(value, column_type, &Local)
}

pub fn to_display(value: &CellValue, column_type: ColumnType) -> String {
    to_display_in(value, column_type, &Local)
}

pub fn to_stored(editable: &str, column_type: ColumnType) -> CellValue {
    to_stored_in(editable, column_type, &Local)
}

pub fn to_editable_in<Tz>(value: &CellValue, column_type: ColumnType, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match column_type {
        ColumnType::Text | ColumnType::Select | ColumnType::Number => raw_text(value),
        ColumnType::Date => parse_date_in(&raw_text(value), tz)
            .map(|dt| dt.format(EDITABLE_DATE_FORMAT).to_string())
            .unwrap_or_default(),
    }
}

pub fn to_display_in<Tz>(value: &CellValue, column_type: ColumnType, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match column_type {
        ColumnType::Text | ColumnType::Select | ColumnType::Number => raw_text(value),
        ColumnType::Date => parse_date_in(&raw_text(value), tz)
            .map(|dt| dt.format(DISPLAY_DATE_FORMAT).to_string())
            .unwrap_or_default(),
    }
}

pub fn to_stored_in<Tz: TimeZone>(editable: &str, column_type: ColumnType, tz: &Tz) -> CellValue {
    match column_type {
        ColumnType::Text | ColumnType::Select | ColumnType::Number => {
            CellValue::String(editable.to_string())
        }
        ColumnType::Date => {
            if editable.trim().is_empty() {
                return CellValue::String(String::new());
            }
            match parse_date_in(editable, tz) {
                Some(dt) => CellValue::String(
                    dt.with_timezone(&Utc)
                        .to_rfc3339_opts(SecondsFormat::Millis, true),
                ),
                None => CellValue::String(editable.to_string()),
            }
        }
    }
}

/// Plain text of a raw value: strings as-is, `null` as empty, anything else
/// as its JSON text
pub fn raw_text(value: &CellValue) -> String {
    match value {
        CellValue::Null => String::new(),
        CellValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse a stored or edited date string into `tz`
///
/// Accepts RFC 3339 with an offset, naive date/times (read as wall-clock
/// time in `tz`) and bare dates (midnight in `tz`).
pub fn parse_date_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(tz));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    // Wall-clock times inside a DST gap have no instant; ambiguous ones take
    // the earlier offset.
    tz.from_local_datetime(&naive).earliest()
}
