//! Input surfaces: raw candidate tables, CSV loading and validation.

pub mod csv;
pub mod raw;
pub mod validation;

pub use self::csv::{load_csv, read_csv};
pub use raw::RawTable;
pub use validation::{parse_timestamp, validate_table, OHLCV_COLUMNS};
