use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;
use std::path::PathBuf;
use wobos_core::SubstructureKind;

#[derive(Parser, Debug)]
#[command(name = "wobos", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the balance-of-system cost of one plant
    Run {
        /// Plant configuration (.toml or .json); reference defaults when omitted
        #[arg(value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,
        /// Output format for the breakdown
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
        /// Override the substructure (monopile, jacket, spar, semisubmersible)
        #[arg(long)]
        substructure: Option<SubstructureKind>,
        /// Search the cable catalogs instead of using the fixed selections
        #[arg(long)]
        optimize_cables: bool,
        /// Write output to a file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },
    /// Print the reference configuration
    Defaults {
        /// Substructure whose reference vessel fleet is included
        #[arg(long)]
        substructure: Option<SubstructureKind>,
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
    /// Print the per-phase vessel cost ledgers
    Ledger {
        /// Plant configuration (.toml or .json); reference defaults when omitted
        #[arg(value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,
        /// Override the substructure (monopile, jacket, spar, semisubmersible)
        #[arg(long)]
        substructure: Option<SubstructureKind>,
        /// Restrict output to one phase
        #[arg(long, value_enum, default_value_t = LedgerPhase::All)]
        phase: LedgerPhase,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Cost breakdown table
    Plain,
    /// Every stage output as pretty-printed JSON
    Json,
    /// One `path = value` line per scalar output
    Flat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LedgerPhase {
    All,
    Turbine,
    Substructure,
    Electrical,
    Mobilization,
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
