//! CSV upload path.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::raw::RawTable;
use crate::error::EngineError;

fn builder() -> ::csv::ReaderBuilder {
    let mut builder = ::csv::ReaderBuilder::new();
    builder.has_headers(true).trim(::csv::Trim::Fields);
    builder
}

/// Read a CSV document with a header row into a [`RawTable`].
///
/// Header names are kept verbatim; surrounding whitespace is trimmed from data
/// cells only.
pub fn read_csv<R: Read>(reader: R) -> Result<RawTable, EngineError> {
    read_records(builder().from_reader(reader))
}

/// Load a CSV file from disk.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<RawTable, EngineError> {
    read_records(builder().from_path(path.as_ref())?)
}

fn read_records<R: Read>(mut reader: ::csv::Reader<R>) -> Result<RawTable, EngineError> {
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(str::to_string).collect());
    }

    debug!(columns = headers.len(), rows = records.len(), "Loaded CSV table");
    Ok(RawTable::new(headers, records))
}
