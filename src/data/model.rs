// src/data/model.rs

/// A single listing row, validated against the required columns at load time.
/// Numeric cells that were blank (or unparseable) carry `None` so a few bad
/// rows don't sink the whole file.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub address: String,
    pub sublocality: String,
    pub price: Option<f64>,
    pub predicted_price: Option<f64>,
    pub price_difference: Option<f64>,
    pub property_sqft: Option<f64>,
    pub beds: Option<f64>,
    pub bath: Option<f64>,
}

/// An in-memory snapshot of the listings file. Replaced wholesale on reload,
/// never mutated in place.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub rows: Vec<Listing>,

    /// False when any non-blank PRICE_DIFFERENCE cell failed to parse as a
    /// number. Aggregation over that column is skipped in that case.
    pub diff_numeric: bool,
}

impl Dataset {
    pub fn empty() -> Self {
        Dataset {
            rows: Vec::new(),
            diff_numeric: true,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
