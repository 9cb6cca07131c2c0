use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::filter::{City, DayFilter, MonthFilter};
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "bikeshare-stats")]
#[command(author, version, about = "Explore US bikeshare trip data and report statistics")]
#[command(long_about = "An interactive explorer for US bikeshare trip datasets.\n\n\
    Run without a subcommand (or with `explore`) for the interactive prompt\n\
    loop, or use `report` for a one-shot filtered report.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Data error\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Directory containing the city CSV files (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Explore the data through interactive prompts (the default)
    Explore,

    /// Compute one filtered report and print it
    Report(ReportArgs),
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// City to report on
    #[arg(long, value_enum)]
    pub city: City,

    /// Month filter: jan through jun, or all
    #[arg(long, default_value = "all")]
    pub month: MonthFilter,

    /// Day filter: mon through sun, or all
    #[arg(long, default_value = "all")]
    pub day: DayFilter,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Include the first COUNT raw records in the report
    #[arg(long, value_name = "COUNT")]
    pub sample: Option<usize>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
