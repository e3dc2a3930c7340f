use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::SimulationInputs;
use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "mvsim")]
#[command(
    about = "Machine vision inspection simulator: required camera accuracy, financial impact and ROI",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one simulation and write the report
    Simulate {
        /// Configuration file (defaults to mvsim.yaml/.yml/.toml in this or a parent directory)
        #[arg(short, long, env = "MVSIM_CONFIG")]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: InputOverrides,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors and unicode table borders
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Check a configuration file and report every problem found
    Validate {
        /// Configuration file (defaults to discovery from the current directory)
        #[arg(short, long, env = "MVSIM_CONFIG")]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a documented default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,

        /// File format of the generated configuration
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFileFormat,
    },

    /// Print the formulas used by the simulation
    Formulas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFileFormat {
    Yaml,
    Toml,
}

impl ConfigFileFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            ConfigFileFormat::Yaml => "mvsim.yaml",
            ConfigFileFormat::Toml => "mvsim.toml",
        }
    }
}

/// Per-field overrides applied on top of the configured inputs.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct InputOverrides {
    /// Percentage of produced parts that are defective
    #[arg(long, help_heading = "Process")]
    pub defect_rate: Option<f64>,

    /// Parts produced per hour
    #[arg(long, help_heading = "Process")]
    pub production_rate: Option<f64>,

    #[arg(long, help_heading = "Process")]
    pub hours_per_day: Option<f64>,

    #[arg(long, help_heading = "Process")]
    pub production_days_per_year: Option<f64>,

    /// Detection rate of the existing inspection, in percent
    #[arg(long, help_heading = "Process")]
    pub current_inspection_rate: Option<f64>,

    /// Maximum tolerated false positive rate, in percent
    #[arg(long, help_heading = "Tolerances")]
    pub max_fp_rate: Option<f64>,

    /// Maximum tolerated false negative rate, in percent
    #[arg(long, help_heading = "Tolerances")]
    pub max_fn_rate: Option<f64>,

    #[arg(long, help_heading = "Tolerances")]
    pub cost_fp: Option<f64>,

    #[arg(long, help_heading = "Tolerances")]
    pub cost_fn: Option<f64>,

    #[arg(long, help_heading = "Implementation")]
    pub num_cameras: Option<u32>,

    /// Cameras covering the same inspection point
    #[arg(long, help_heading = "Implementation")]
    pub overlap_factor: Option<u32>,

    #[arg(long, help_heading = "Implementation")]
    pub system_cost: Option<f64>,

    /// Recurring cost per year
    #[arg(long, help_heading = "Implementation")]
    pub recurring_cost: Option<f64>,

    #[arg(long, help_heading = "Implementation")]
    pub time_horizon_months: Option<u32>,

    #[arg(long, help_heading = "Current model")]
    pub current_precision: Option<f64>,

    #[arg(long, help_heading = "Current model")]
    pub current_recall: Option<f64>,
}

impl InputOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, inputs: SimulationInputs) -> SimulationInputs {
        SimulationInputs {
            defect_rate_pct: self.defect_rate.unwrap_or(inputs.defect_rate_pct),
            production_rate_per_hour: self
                .production_rate
                .unwrap_or(inputs.production_rate_per_hour),
            hours_per_day: self.hours_per_day.unwrap_or(inputs.hours_per_day),
            production_days_per_year: self
                .production_days_per_year
                .unwrap_or(inputs.production_days_per_year),
            current_inspection_detection_rate_pct: self
                .current_inspection_rate
                .unwrap_or(inputs.current_inspection_detection_rate_pct),
            max_fp_rate_pct: self.max_fp_rate.unwrap_or(inputs.max_fp_rate_pct),
            max_fn_rate_pct: self.max_fn_rate.unwrap_or(inputs.max_fn_rate_pct),
            cost_per_false_positive: self.cost_fp.unwrap_or(inputs.cost_per_false_positive),
            cost_per_false_negative: self.cost_fn.unwrap_or(inputs.cost_per_false_negative),
            num_cameras: self.num_cameras.unwrap_or(inputs.num_cameras),
            overlap_factor: self.overlap_factor.unwrap_or(inputs.overlap_factor),
            system_cost: self.system_cost.unwrap_or(inputs.system_cost),
            recurring_cost_per_year: self
                .recurring_cost
                .unwrap_or(inputs.recurring_cost_per_year),
            time_horizon_months: self
                .time_horizon_months
                .unwrap_or(inputs.time_horizon_months),
            current_precision_pct: self
                .current_precision
                .unwrap_or(inputs.current_precision_pct),
            current_recall_pct: self.current_recall.unwrap_or(inputs.current_recall_pct),
        }
    }
}
