//! Command implementations for the dataset-fetch CLI.
//!
//! The chart apps embed their data at compile time; these subcommands
//! refresh the fixture files from the public sources and sanity-check them.

use clap::Subcommand;

pub mod check;
pub mod fetch;

#[derive(Subcommand)]
pub enum Command {
    /// Download the Vietnamese province statistics CSV
    Provinces {
        /// Output path for the provinces CSV
        #[arg(short, long)]
        out: String,
    },

    /// Download the global confirmed-case time series, optionally trimmed
    Covid {
        /// Output path for the wide time-series CSV
        #[arg(short, long)]
        out: String,

        /// Comma-separated country filter (keeps country-level rows only)
        #[arg(long, value_delimiter = ',')]
        countries: Vec<String>,

        /// Window start (YYYY-MM-DD); drops earlier date columns
        #[arg(long)]
        start: Option<String>,

        /// Window end (YYYY-MM-DD); drops later date columns
        #[arg(long)]
        end: Option<String>,
    },

    /// Download the province-boundary GeoJSON, optionally pre-joined
    Geo {
        /// Output path for the GeoJSON
        #[arg(short, long)]
        out: String,

        /// Path to a `Province,ma,Confirm` CSV to join onto the features
        #[arg(long)]
        cases: Option<String>,
    },

    /// Parse and normalize a provinces CSV and report dropped rows
    Check {
        /// Path to the provinces CSV to validate
        #[arg(short, long)]
        provinces: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Provinces { out } => fetch::run_provinces(&out).await,
        Command::Covid {
            out,
            countries,
            start,
            end,
        } => fetch::run_covid(&out, &countries, start.as_deref(), end.as_deref()).await,
        Command::Geo { out, cases } => fetch::run_geo(&out, cases.as_deref()).await,
        Command::Check { provinces } => check::run_check(&provinces),
    }
}
