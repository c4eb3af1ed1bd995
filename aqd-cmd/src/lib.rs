//! Command implementations for the AQD CLI.
//!
//! Each data subcommand loads a measurement dataset from a file or URL,
//! applies the filter flags and prints the requested view as text or JSON.
//! The `quiz` subcommand runs the question bank interactively.

use clap::{Args, Subcommand};

pub mod load;
pub mod quiz;
pub mod report;

/// Default dataset location when neither `--data` nor `AQD_DATA` is given.
pub const DEFAULT_DATA_PATH: &str = "fixtures/air_quality.csv";

/// Dataset location and filter flags shared by the data subcommands.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Path or http(s) URL of the measurement CSV (`.gz` accepted)
    #[arg(short = 'd', long, env = "AQD_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: String,

    /// First day of the date range (DD-MM-YYYY); alone it selects one day
    #[arg(long)]
    pub start: Option<String>,

    /// Last day of the date range (DD-MM-YYYY); alone it selects one day
    #[arg(long)]
    pub end: Option<String>,

    /// AQI category to keep, or "All"
    #[arg(long, default_value = aqd_engine::ALL)]
    pub category: String,

    /// City to keep, or "All"
    #[arg(long, default_value = aqd_engine::ALL)]
    pub city: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Key metrics: average AQI, PM2.5, PM10 and PM2.5/PM10 ratio
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Most and least polluted cities by mean AQI
    Rank {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of cities in each list
        #[arg(short = 'n', long, default_value_t = aqd_engine::DEFAULT_RANK_SIZE)]
        count: usize,
    },

    /// Chronological AQI readings per city
    Trend {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// AQI category shares and AQI histogram
    Distribution {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of histogram bins
        #[arg(short = 'b', long, default_value_t = aqd_engine::distribution::DEFAULT_HISTOGRAM_BINS)]
        bins: usize,
    },

    /// Every dashboard display for the filters, as JSON
    Dashboard {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Selectable cities, categories and the dataset's date span
    Options {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Take the air quality quiz on the terminal
    Quiz {
        /// JSON question bank to use instead of the built-in one
        #[arg(short = 'q', long)]
        questions: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { filter } => report::run_summary(&filter).await,
        Command::Rank { filter, count } => report::run_rank(&filter, count).await,
        Command::Trend { filter } => report::run_trend(&filter).await,
        Command::Distribution { filter, bins } => report::run_distribution(&filter, bins).await,
        Command::Dashboard { filter } => report::run_dashboard(&filter).await,
        Command::Options { filter } => report::run_options(&filter).await,
        Command::Quiz { questions } => quiz::run_quiz_command(questions.as_deref()),
    }
}
