//! CSV reader for waste-collection exports.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use tracing::debug;

use crate::record::RawRecord;

/// Reads every record from the CSV file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row does not match the
/// `Stream,Substream,Date,Building,Weight,Volume` header layout.
pub fn read_records(path: &str) -> Result<Vec<RawRecord>> {
    let file = File::open(path).with_context(|| format!("opening {path}"))?;
    let records = parse_records(file).with_context(|| format!("reading {path}"))?;
    debug!(path, records = records.len(), "CSV loaded");
    Ok(records)
}

/// Deserializes records from any CSV source. Unknown columns are ignored.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: RawRecord = result?;
        rows.push(record);
    }

    Ok(rows)
}
