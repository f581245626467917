//! # CLI Argument Definitions
//!
//! Command-line structure of the `fhub` shell, parsed with `clap` derive.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fhub")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Poultry fertility inference from feather density and climate readings")]
pub(crate) struct Cli {
    /// Application config file (TOML or JSON); `FHUB__*` variables override it
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Knowledge base file replacing the one named in the config
    #[arg(long, global = true, value_name = "FILE")]
    pub knowledge_base: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Infer fertility for a single set of readings
    Infer {
        /// Feather density label (LOW or HIGH)
        #[arg(short, long)]
        feather_density: String,
        /// Ambient temperature in degrees Celsius
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: f64,
        /// Relative humidity in percent
        #[arg(long, allow_negative_numbers = true)]
        humidity: Option<f64>,
        /// Pretty-print the JSON result
        #[arg(short, long)]
        pretty: bool,
    },
    /// Infer a JSON array of queries and summarize the batch
    Batch {
        /// File holding `[{ "featherDensity": .., "temperature": .., "humidity": .. }, ..]`
        file: PathBuf,
        /// Pretty-print the JSON report
        #[arg(short, long)]
        pretty: bool,
    },
    /// Print the active knowledge base as TOML
    KnowledgeBase,
}
