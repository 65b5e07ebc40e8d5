use std::path::PathBuf;

use chrono::NaiveDate;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};

use crate::api::MetricKind;
use crate::app::sample::Operation;
use crate::config::SUPPORTED_LOCALES;

fn parse_kind(raw: &str) -> Result<MetricKind, String> {
    raw.parse()
        .map_err(|_| format!("unknown stat type '{raw}' (weight, heart-rate, sleep, steps)"))
}

/// `Vitaldash` - health metrics dashboard over a simulated backend.
#[derive(Parser, Debug)]
#[command(name = "vitaldash")]
#[command(version)]
#[command(about = "Health metrics dashboard with entry dialogs.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.vitaldash/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Display language; overrides VITALDASH_LANG and the config value
    #[arg(long, global = true, value_parser = PossibleValuesParser::new(SUPPORTED_LOCALES))]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load stat cards and recent activity concurrently and print them
    Dashboard {
        /// Print a JSON snapshot instead of the styled view
        #[arg(long)]
        json: bool,
    },

    /// Print recent activity only
    Activity,

    /// Open the add-entry dialog, fill it in and submit
    Add {
        /// Stat type (weight, heart-rate, sleep, steps)
        #[arg(long = "type", value_name = "TYPE")]
        stat_type: Option<String>,

        /// Value in the stat type's unit
        #[arg(long)]
        value: Option<String>,
    },

    /// Print the daily history table of one metric
    History {
        /// Stat type (weight, heart-rate, sleep, steps)
        #[arg(long = "type", value_name = "TYPE", value_parser = parse_kind)]
        stat_type: MetricKind,
    },

    /// Edit the value of a recent activity entry or a history row
    Edit {
        /// Activity id as listed by `activity`
        #[arg(long, required_unless_present = "date", conflicts_with_all = ["stat_type", "date"])]
        id: Option<String>,

        /// Stat type of the history row
        #[arg(long = "type", value_name = "TYPE", value_parser = parse_kind, requires = "date")]
        stat_type: Option<MetricKind>,

        /// Date of the history row (YYYY-MM-DD)
        #[arg(long, requires = "stat_type")]
        date: Option<NaiveDate>,

        /// New value
        #[arg(long)]
        value: String,
    },

    /// Call one operation repeatedly and report the observed failure rate
    Sample {
        #[arg(long, value_enum, default_value_t = Operation::HealthStats)]
        operation: Operation,

        #[arg(long, default_value = "1000")]
        runs: u32,

        /// Skip the simulated latency
        #[arg(long)]
        no_latency: bool,

        /// Seed the failure RNG for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}
