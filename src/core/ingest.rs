//! Bridge inventory ingestion
//!
//! Reads the raw inventory CSV and normalizes each row into a
//! [`BridgeRecord`]. Identities are assigned by position (first data row is
//! bridge 1); the raw site id column is discarded.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use csv::StringRecord;
use log::{debug, info};

use crate::core::error::{Error, Result};
use crate::core::geo::Location;
use crate::core::record::{BridgeId, BridgeRecord};
use crate::core::table::BridgeTable;

const NAME_COL: usize = 1;
const HIGHWAY_COL: usize = 2;
const LAT_COL: usize = 3;
const LON_COL: usize = 4;
const YEAR_COL: usize = 5;
const LAST_MAJOR_COL: usize = 6;
const LAST_MINOR_COL: usize = 7;
const NUM_SPANS_COL: usize = 8;
const SPAN_DETAILS_COL: usize = 9;
const LENGTH_COL: usize = 10;
const LAST_INSPECTED_COL: usize = 11;
const BCIS_COL: usize = 12;

/// Progress callback receiving (bytes_read, total_bytes)
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Options for reading an inventory file
pub struct IngestOptions {
    /// Leading rows to skip before bridge data starts
    pub header_rows: usize,

    /// Optional progress callback, called after every row
    pub progress: Option<ProgressCallback>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            header_rows: 2,
            progress: None,
        }
    }
}

fn field<'a>(row: &'a StringRecord, col: usize, line: usize) -> Result<&'a str> {
    row.get(col).ok_or_else(|| Error::InvalidRecord {
        row: line,
        reason: format!("missing column {col}"),
    })
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str, line: usize) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidRecord {
        row: line,
        reason: format!("{what} '{value}' is not a number"),
    })
}

/// Parse span details like `Total=64  (1)=12;(2)=19;` into `[12.0, 19.0]`
pub fn parse_span_details(details: &str) -> Option<Vec<f64>> {
    details
        .split(")=")
        .skip(1)
        .map(|chunk| chunk.split(';').next().unwrap_or("").trim().parse().ok())
        .collect()
}

/// Parse the BCI cells of a row.
///
/// Empty cells are skipped. The first value is the current score, which the
/// inventory repeats at the head of the dated history, so it is dropped.
pub fn parse_bcis<'a, I>(cells: I) -> Option<Vec<f64>>
where
    I: IntoIterator<Item = &'a str>,
{
    let scores: Option<Vec<f64>> = cells
        .into_iter()
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.parse().ok())
        .collect();

    scores.map(|s| s.into_iter().skip(1).collect())
}

/// Normalize one raw inventory row into a record with identity `id`.
///
/// `line` is only used for error reporting.
pub fn format_row(row: &StringRecord, id: BridgeId, line: usize) -> Result<BridgeRecord> {
    let text = |col| field(row, col, line).map(|s| s.trim().to_string());

    let lat: f64 = parse_number(field(row, LAT_COL, line)?, "latitude", line)?;
    let lon: f64 = parse_number(field(row, LON_COL, line)?, "longitude", line)?;
    let num_spans: u32 = parse_number(field(row, NUM_SPANS_COL, line)?, "span count", line)?;
    let length: f64 = parse_number(field(row, LENGTH_COL, line)?, "length", line)?;

    let details = field(row, SPAN_DETAILS_COL, line)?;
    let span_lengths = parse_span_details(details).ok_or_else(|| Error::InvalidRecord {
        row: line,
        reason: format!("span details '{details}' are malformed"),
    })?;
    if span_lengths.len() != num_spans as usize {
        return Err(Error::InvalidRecord {
            row: line,
            reason: format!(
                "{} span length(s) listed but span count is {num_spans}",
                span_lengths.len()
            ),
        });
    }

    let bcis = parse_bcis(row.iter().skip(BCIS_COL)).ok_or_else(|| Error::InvalidRecord {
        row: line,
        reason: "BCI history contains a non-numeric score".to_string(),
    })?;

    Ok(BridgeRecord {
        id,
        name: text(NAME_COL)?,
        highway: text(HIGHWAY_COL)?,
        location: Location::new(lat, lon),
        year_built: text(YEAR_COL)?,
        last_major_rehab: text(LAST_MAJOR_COL)?,
        last_minor_rehab: text(LAST_MINOR_COL)?,
        num_spans,
        span_lengths,
        length,
        last_inspected: text(LAST_INSPECTED_COL)?,
        bcis,
    })
}

fn read_with_progress<R: Read>(reader: R, options: &IngestOptions, total: u64) -> Result<BridgeTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        let line = row.position().map_or(index + 1, |p| p.line() as usize);

        if index >= options.header_rows {
            let id = BridgeId::try_from(records.len() + 1)
                .map_err(|_| Error::InvalidInput("too many bridges for a 32-bit id".to_string()))?;
            records.push(format_row(&row, id, line)?);
        } else {
            debug!("Skipping header row at line {line}");
        }

        if let Some(progress) = &options.progress {
            let read = row.position().map_or(0, |p| p.byte());
            progress(read, total);
        }
    }

    if let Some(progress) = &options.progress {
        progress(total, total);
    }

    BridgeTable::new(records)
}

/// Read an inventory from any reader
pub fn read_bridges<R: Read>(reader: R, options: &IngestOptions) -> Result<BridgeTable> {
    read_with_progress(reader, options, 0)
}

/// Load an inventory CSV file
pub fn load_bridges(path: &Path, options: &IngestOptions) -> Result<BridgeTable> {
    if !path.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Inventory file not found: {}", path.display()),
        )));
    }

    let file = File::open(path)?;
    let total = file.metadata()?.len();
    let table = read_with_progress(file, options, total)?;

    info!("Loaded {} bridge(s) from {}", table.len(), path.display());
    Ok(table)
}
