mod args;
mod handlers;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use fhub::domain::config::AppConfig;
use fhub::fertility::FertilityQuery;
use fhub::kernel::config::load_config;
use fhub::logger::{LevelFilter, Logger};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config: AppConfig = load_config(cli.config.as_deref())?;
    if let Some(path) = cli.knowledge_base {
        config.engine.knowledge_base = Some(path);
    }

    let logger = init_logger(&config, cli.verbose)?;
    debug!(file_output = logger.has_file_output(), "Logger ready");
    let engine = fhub::engine_from_config(&config)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Infer { feather_density, temperature, humidity, pretty } => {
            let query = FertilityQuery::new(feather_density, temperature, humidity);
            handlers::infer(&engine, &query, pretty, &mut out)?;
        },
        Command::Batch { file, pretty } => handlers::batch(&engine, &file, pretty, &mut out)?,
        Command::KnowledgeBase => handlers::knowledge_base(&engine, &mut out)?,
    }

    Ok(())
}

fn init_logger(config: &AppConfig, verbose: bool) -> Result<Logger> {
    let logging = &config.logging;
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        logging
            .level
            .parse()
            .with_context(|| format!("Invalid log level '{}'", logging.level))?
    };

    let mut builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).console(true).json(logging.json);
    if let Some(filter) = &logging.env_filter {
        builder = builder.env_filter(filter.as_str());
    }
    if let Some(directory) = &logging.directory {
        builder = builder.directory(directory);
    }

    Ok(builder.init()?)
}
