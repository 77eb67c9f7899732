// src/data/loader.rs

use crate::data::model::{Dataset, Listing};
use std::error::Error;
use std::fmt;
use std::path::Path;
use tracing::{error, info};

/// Columns every listings file must carry. Checked once against the header;
/// rows are then read positionally so nothing downstream re-checks presence.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "ADDRESS",
    "SUBLOCALITY",
    "PRICE",
    "PREDICTED_PRICE",
    "PRICE_DIFFERENCE",
    "PROPERTYSQFT",
    "BEDS",
    "BATH",
];

#[derive(Debug)]
pub enum LoadError {
    NotFound(String),
    Parse(String),
    Schema(Vec<String>),
    Other(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "Data file not found at: {path}"),
            LoadError::Parse(msg) => write!(f, "Error parsing CSV file: {msg}"),
            LoadError::Schema(cols) => {
                write!(f, "Missing required columns in CSV: {}", cols.join(", "))
            }
            LoadError::Other(msg) => write!(f, "Unexpected error while loading data: {msg}"),
        }
    }
}

impl Error for LoadError {}

/// Load the listings CSV at `path` into a fresh `Dataset`.
///
/// A file that parses but holds zero data rows (even a completely empty file)
/// is a successful load of an empty dataset, not a failure.
pub fn load(path: &Path) -> Result<Dataset, LoadError> {
    if !path.exists() {
        let err = LoadError::NotFound(path.display().to_string());
        error!("{err}");
        return Err(err);
    }

    info!("loading data from {}", path.display());

    let mut reader =
        csv::Reader::from_path(path).map_err(|e| fail(LoadError::Other(e.to_string())))?;

    let headers = reader
        .headers()
        .map_err(|e| fail(LoadError::Parse(e.to_string())))?
        .clone();

    // A file with no header line at all reads as an empty record.
    if headers.is_empty() {
        info!("file is empty, loaded 0 rows");
        return Ok(Dataset::empty());
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(fail(LoadError::Schema(missing)));
    }

    let col = |name: &str| headers.iter().position(|h| h == name).unwrap_or(0);
    let idx_address = col("ADDRESS");
    let idx_sublocality = col("SUBLOCALITY");
    let idx_price = col("PRICE");
    let idx_predicted = col("PREDICTED_PRICE");
    let idx_diff = col("PRICE_DIFFERENCE");
    let idx_sqft = col("PROPERTYSQFT");
    let idx_beds = col("BEDS");
    let idx_bath = col("BATH");

    let mut rows = Vec::new();
    let mut diff_numeric = true;

    for record in reader.records() {
        let record = record.map_err(|e| fail(LoadError::Parse(e.to_string())))?;
        let cell = |i: usize| record.get(i).unwrap_or("").trim();

        let (price_difference, diff_ok) = parse_numeric(cell(idx_diff));
        diff_numeric &= diff_ok;

        rows.push(Listing {
            address: cell(idx_address).to_string(),
            sublocality: cell(idx_sublocality).to_string(),
            price: parse_numeric(cell(idx_price)).0,
            predicted_price: parse_numeric(cell(idx_predicted)).0,
            price_difference,
            property_sqft: parse_numeric(cell(idx_sqft)).0,
            beds: parse_numeric(cell(idx_beds)).0,
            bath: parse_numeric(cell(idx_bath)).0,
        });
    }

    info!("successfully loaded {} rows", rows.len());
    Ok(Dataset { rows, diff_numeric })
}

fn fail(err: LoadError) -> LoadError {
    error!("{err}");
    err
}

/// Lenient numeric parse. Blank cells and non-finite values come back as
/// `(None, true)`; text that isn't a number at all as `(None, false)` so the
/// caller can mark the column non-numeric.
fn parse_numeric(cell: &str) -> (Option<f64>, bool) {
    if cell.is_empty() {
        return (None, true);
    }
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => (Some(v), true),
        Ok(_) => (None, true),
        Err(_) => (None, false),
    }
}
