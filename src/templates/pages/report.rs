use crate::data::Listing;
use crate::templates::{desktop_layout, flash_banner, Flash};
use maud::{html, Markup};

pub struct ReportVm {
    pub flash: Option<Flash>,
    pub top_properties: Vec<Listing>,
    pub top_neighborhoods: Vec<(String, f64)>,

    /// Set when the matching aggregate was skipped because the
    /// PRICE_DIFFERENCE column was missing values or not numeric.
    pub properties_warning: bool,
    pub neighborhoods_warning: bool,
}

pub fn report_page(vm: &ReportVm) -> Markup {
    desktop_layout(
        "Property Price Report",
        html! {
            main {
                @if let Some(flash) = &vm.flash {
                    (flash_banner(flash))
                }

                h1 { "Property Price Report" }

                section class="card" {
                    h2 { "Top Properties by Price Difference" }
                    @if vm.properties_warning {
                        (flash_banner(&Flash::warning(
                            "Warning: Could not calculate top properties due to missing or invalid PRICE_DIFFERENCE data."
                        )))
                    }
                    @if vm.top_properties.is_empty() && !vm.properties_warning {
                        p { "No properties to show." }
                    } @else if !vm.top_properties.is_empty() {
                        (properties_table(&vm.top_properties))
                    }
                }

                section class="card" {
                    h2 { "Top Neighborhoods by Average Price Difference" }
                    @if vm.neighborhoods_warning {
                        (flash_banner(&Flash::warning(
                            "Warning: Could not calculate top neighborhoods due to missing or invalid data."
                        )))
                    }
                    @if vm.top_neighborhoods.is_empty() && !vm.neighborhoods_warning {
                        p { "No neighborhoods to show." }
                    } @else if !vm.top_neighborhoods.is_empty() {
                        (neighborhoods_table(&vm.top_neighborhoods))
                    }
                }
            }
        },
    )
}

/// Rendered when the data file could not be loaded at all.
pub fn error_page(message: &str) -> Markup {
    desktop_layout(
        "Data Unavailable",
        html! {
            main {
                (flash_banner(&Flash::danger(
                    "Error: Could not load property data. Please check server logs."
                )))
                h1 { "Data Unavailable" }
                p { (message) }
                p { a href="/reload-data" { "Try reloading the data" } }
            }
        },
    )
}

fn properties_table(rows: &[Listing]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Address" }
                    th { "Sublocality" }
                    th class="num" { "Price" }
                    th class="num" { "Predicted" }
                    th class="num" { "Difference" }
                    th class="num" { "Sqft" }
                    th class="num" { "Beds" }
                    th class="num" { "Bath" }
                }
            }
            tbody {
                @for row in rows {
                    tr {
                        td { (row.address) }
                        td { (row.sublocality) }
                        td class="num" { (fmt_opt(row.price, 0)) }
                        td class="num" { (fmt_opt(row.predicted_price, 0)) }
                        td class="num" { (fmt_opt(row.price_difference, 0)) }
                        td class="num" { (fmt_opt(row.property_sqft, 0)) }
                        td class="num" { (fmt_opt(row.beds, 0)) }
                        td class="num" { (fmt_opt(row.bath, 1)) }
                    }
                }
            }
        }
    }
}

fn neighborhoods_table(rows: &[(String, f64)]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Sublocality" }
                    th class="num" { "Mean Price Difference" }
                }
            }
            tbody {
                @for (name, mean) in rows {
                    tr {
                        td { (name) }
                        td class="num" { (format!("{mean:.2}")) }
                    }
                }
            }
        }
    }
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}
