//! Series validation: column presence, timestamp parsing and numeric cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::{debug, warn};

use super::raw::RawTable;
use crate::error::EngineError;
use crate::models::series::{Bar, SeriesTable};

/// Required price columns, in the order they are checked.
pub const OHLCV_COLUMNS: [&str; 5] = ["Open", "High", "Low", "Close", "Volume"];

const DATETIME_WITH_OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%z"];
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Validate a candidate table and convert it into a [`SeriesTable`].
///
/// Requires `timestamp_column` plus the five OHLCV columns (case-sensitive).
/// Rows keep their supplied order.
pub fn validate_table(raw: &RawTable, timestamp_column: &str) -> Result<SeriesTable, EngineError> {
    let ts_index = require_column(raw, timestamp_column)?;
    let mut price_indices = [0usize; 5];
    for (slot, name) in price_indices.iter_mut().zip(OHLCV_COLUMNS) {
        *slot = require_column(raw, name)?;
    }

    let mut bars = Vec::with_capacity(raw.row_count());
    for row in 0..raw.row_count() {
        let cell = raw.cell(row, ts_index);
        let timestamp = parse_timestamp(cell).ok_or_else(|| EngineError::MalformedTimestamp {
            column: timestamp_column.to_string(),
            row,
            value: cell.to_string(),
        })?;

        let mut values = [0.0f64; 5];
        for ((value, &index), name) in values.iter_mut().zip(&price_indices).zip(OHLCV_COLUMNS) {
            *value = parse_price(raw.cell(row, index)).ok_or_else(|| {
                EngineError::MalformedValue {
                    column: name.to_string(),
                    row,
                    value: raw.cell(row, index).to_string(),
                }
            })?;
        }
        let [open, high, low, close, volume] = values;
        bars.push(Bar::new(timestamp, open, high, low, close, volume));
    }

    if let Some(row) = first_unordered_row(&bars) {
        warn!(
            column = timestamp_column,
            row = row,
            "Timestamps are not strictly increasing; keeping supplied order"
        );
    }

    debug!(rows = bars.len(), column = timestamp_column, "Validated series table");
    Ok(SeriesTable::new(bars))
}

fn require_column(raw: &RawTable, name: &str) -> Result<usize, EngineError> {
    raw.column_index(name).ok_or_else(|| EngineError::MissingColumn {
        column: name.to_string(),
    })
}

fn parse_price(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn first_unordered_row(bars: &[Bar]) -> Option<usize> {
    bars.windows(2)
        .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        .map(|i| i + 1)
}

/// Parse a timestamp cell into UTC.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` with or without an offset,
/// date-only values (midnight UTC, compact `YYYYMMDD` included) and Unix
/// epoch seconds or milliseconds.
pub fn parse_timestamp(cell: &str) -> Option<DateTime<Utc>> {
    let s = cell.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in DATETIME_WITH_OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0).map(|dt| Utc.from_utc_datetime(&dt));
        }
    }

    parse_epoch(s)
}

fn parse_epoch(s: &str) -> Option<DateTime<Utc>> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i64 = s.parse().ok()?;
    // 13+ digits are milliseconds
    if value > 1_000_000_000_000 {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}
