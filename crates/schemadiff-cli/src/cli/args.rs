use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "schemadiff",
    version,
    about = "Diff two stress-test reports and flag verdict regressions for CI"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare a baseline report against a current run
    Diff(DiffArgs),
    Version,
}

#[derive(Parser, Clone)]
pub struct DiffArgs {
    /// Baseline report (the prior reference run)
    pub baseline: PathBuf,

    /// Current report (the new run)
    pub current: PathBuf,

    /// Treat newly introduced flakiness as a blocking regression
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
