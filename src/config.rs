// src/config.rs

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serve an HTML report over a listings CSV with predicted prices.
#[derive(Parser, Debug, Clone)]
#[command(name = "listing-report", version, about)]
pub struct Config {
    /// Path to the listings CSV
    #[arg(
        long,
        value_name = "PATH",
        env = "LISTING_REPORT_DATA",
        default_value = "cleaned_data_with_predictions.csv"
    )]
    pub data: PathBuf,

    /// Address to bind the server on
    #[arg(
        long,
        value_name = "ADDR",
        env = "LISTING_REPORT_ADDR",
        default_value = "127.0.0.1:3000"
    )]
    pub addr: SocketAddr,
}
