//! Command line configuration for the server.

use std::{net::IpAddr, path::PathBuf};

use clap::Parser;

/// Serve the Finboard personal finance dashboard.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// The address to serve the app from.
    #[arg(long, default_value = "127.0.0.1")]
    pub address: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// A JSON file with an array of transactions to load at start-up.
    #[arg(long, conflicts_with = "no_seed")]
    pub seed_file: Option<PathBuf>,

    /// Start with no transactions instead of the example data.
    #[arg(long)]
    pub no_seed: bool,

    /// The directory with the CSS, JavaScript and image files.
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// The default log filter, e.g. "info" or "finboard=debug".
    ///
    /// The RUST_LOG environment variable takes precedence when set.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Also write debug logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Where the initial transactions come from.
    pub fn seed_source(&self) -> SeedSource {
        match (&self.seed_file, self.no_seed) {
            (Some(path), _) => SeedSource::File(path.clone()),
            (None, true) => SeedSource::Empty,
            (None, false) => SeedSource::Example,
        }
    }
}

/// The transactions the store starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The three example transactions.
    Example,
    /// The records of a JSON seed file.
    File(PathBuf),
    /// No transactions.
    Empty,
}
