//! CLI definition using clap

use axlecheck_types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "axlecheck")]
#[command(version)]
#[command(about = "Axle weight compliance checking against federal and state limits")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a single vehicle
    Check {
        /// Axle weights in lbs, front to rear (e.g. 12000,17000,17000,17000,17000)
        #[arg(long, short = 'w', value_delimiter = ',', required = true)]
        weights: Vec<f64>,

        /// Spacing in feet between consecutive axles (e.g. 12,4.5,33,4.5)
        #[arg(long, short = 's', value_delimiter = ',', required = true)]
        spacing: Vec<f64>,

        /// State code (e.g. "NY"). Uses config value, then federal, if not specified.
        #[arg(long)]
        state: Option<String>,

        /// Vehicle category label
        #[arg(long = "type", default_value = "vehicle")]
        vehicle_type: String,
    },

    /// Check every vehicle in a CSV or JSON file
    Batch {
        /// Vehicle file (.csv or .json)
        file: PathBuf,

        /// State code. Uses config value, then federal, if not specified.
        #[arg(long)]
        state: Option<String>,

        /// Also write results to an Excel workbook
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show jurisdiction weight limits
    Limits {
        /// Show only this state (all jurisdictions if omitted)
        #[arg(long)]
        state: Option<String>,
    },

    /// Compute the bridge formula allowance for an axle group
    Bridge {
        /// Distance in feet between the outer axles of the group
        #[arg(long, short = 'l')]
        length: f64,

        /// Number of axles in the group
        #[arg(long, short = 'n')]
        axles: usize,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default state code
        #[arg(long)]
        set_jurisdiction: Option<String>,

        /// Clear the default state code (use federal limits)
        #[arg(long)]
        clear_jurisdiction: bool,

        /// Set jurisdiction table TOML file
        #[arg(long)]
        set_jurisdictions_file: Option<PathBuf>,

        /// Use the built-in jurisdiction table
        #[arg(long)]
        clear_jurisdictions_file: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default log filter (e.g. "warn", "info", "axlecheck_domain=debug")
        #[arg(long)]
        set_log_level: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
