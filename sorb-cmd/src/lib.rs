//! Command implementations for the sorbent explorer CLI.
//!
//! Each subcommand loads a materials CSV, drives the same control panel the
//! dashboard uses, and prints the resulting view, overlay or details.

use clap::{Args, Subcommand, ValueEnum};

pub mod explore;
pub mod input;
pub mod output;

/// Where the dataset and dashboard configuration come from.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Materials CSV (gzip-compressed when the path ends in .gz)
    #[arg(short = 'm', long)]
    pub materials_csv: String,

    /// Dashboard configuration JSON (gas-pair presets, pressure steps)
    #[arg(short = 'c', long)]
    pub config: Option<String>,
}

/// Which gas pair to project. Defaults to the configured default preset.
#[derive(Args, Debug, Clone, Default)]
pub struct PairArgs {
    /// Gas-pair preset index
    #[arg(long, conflicts_with_all = ["gas1", "gas2"])]
    pub preset: Option<usize>,

    /// Gas plotted on the x-axes
    #[arg(long, requires = "gas2")]
    pub gas1: Option<String>,

    /// Gas plotted on the y-axes
    #[arg(long, requires = "gas1")]
    pub gas2: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List gases and how many materials were measured for each
    Gases {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Print the loading/Henry view of a gas pair
    View {
        #[command(flatten)]
        dataset: DatasetArgs,

        #[command(flatten)]
        pair: PairArgs,

        /// Pressure slider position (1-based)
        #[arg(short = 'p', long, default_value_t = 1)]
        pressure: usize,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Output path (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Print the error-bar overlay for one selected point (JSON)
    Overlay {
        #[command(flatten)]
        dataset: DatasetArgs,

        #[command(flatten)]
        pair: PairArgs,

        #[arg(short = 'p', long, default_value_t = 1)]
        pressure: usize,

        /// Index of the selected point in the view
        #[arg(short = 'i', long)]
        index: usize,
    },

    /// Print the working capacity between two pressure positions
    Capacity {
        #[command(flatten)]
        dataset: DatasetArgs,

        #[command(flatten)]
        pair: PairArgs,

        /// Lower pressure position (1-based)
        #[arg(long)]
        low: usize,

        /// Upper pressure position (1-based)
        #[arg(long)]
        high: usize,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Print the details of one selected material (JSON)
    Details {
        #[command(flatten)]
        dataset: DatasetArgs,

        #[command(flatten)]
        pair: PairArgs,

        #[arg(short = 'p', long, default_value_t = 1)]
        pressure: usize,

        #[arg(short = 'i', long)]
        index: usize,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Gases { dataset } => explore::run_gases(&dataset),
        Command::View {
            dataset,
            pair,
            pressure,
            format,
            output,
        } => explore::run_view(&dataset, &pair, pressure, format, output.as_deref()),
        Command::Overlay {
            dataset,
            pair,
            pressure,
            index,
        } => explore::run_overlay(&dataset, &pair, pressure, index),
        Command::Capacity {
            dataset,
            pair,
            low,
            high,
            format,
            output,
        } => explore::run_capacity(&dataset, &pair, (low, high), format, output.as_deref()),
        Command::Details {
            dataset,
            pair,
            pressure,
            index,
        } => explore::run_details(&dataset, &pair, pressure, index),
    }
}
