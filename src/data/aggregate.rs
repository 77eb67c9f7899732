// src/data/aggregate.rs

use crate::data::model::{Dataset, Listing};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::warn;

/// The `min(n, rows)` listings with the largest PRICE_DIFFERENCE, descending.
/// Ties keep original file order. Rows with no PRICE_DIFFERENCE value are not
/// eligible, and a non-numeric column skips the view entirely.
pub fn top_properties(dataset: &Dataset, n: usize) -> Vec<Listing> {
    if !dataset.diff_numeric {
        warn!("PRICE_DIFFERENCE column is not numeric, cannot calculate top properties");
        return Vec::new();
    }

    let mut ranked: Vec<&Listing> = dataset
        .rows
        .iter()
        .filter(|row| row.price_difference.is_some())
        .collect();

    // Stable sort, so equal differences stay in row order.
    ranked.sort_by(|a, b| {
        b.price_difference
            .partial_cmp(&a.price_difference)
            .unwrap_or(Ordering::Equal)
    });

    ranked.into_iter().take(n).cloned().collect()
}

/// The `min(m, groups)` sublocalities with the highest mean PRICE_DIFFERENCE,
/// descending. Rows missing either value are dropped before grouping.
pub fn top_neighborhoods(dataset: &Dataset, m: usize) -> Vec<(String, f64)> {
    if !dataset.diff_numeric {
        warn!("PRICE_DIFFERENCE column is not numeric, cannot calculate top neighborhoods");
        return Vec::new();
    }

    // (sum, count) per sublocality; `order` remembers first appearance so the
    // sort below breaks mean ties deterministically.
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for row in &dataset.rows {
        let diff = match row.price_difference {
            Some(d) => d,
            None => continue,
        };
        if row.sublocality.is_empty() {
            continue;
        }
        let entry = totals.entry(row.sublocality.as_str()).or_insert_with(|| {
            order.push(row.sublocality.as_str());
            (0.0, 0)
        });
        entry.0 += diff;
        entry.1 += 1;
    }

    let mut means: Vec<(String, f64)> = order
        .into_iter()
        .map(|name| {
            let (sum, count) = totals[name];
            (name.to_string(), sum / count as f64)
        })
        .collect();

    means.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    means.truncate(m);
    means
}
