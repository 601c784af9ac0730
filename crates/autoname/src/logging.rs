//! Logging bootstrap for the CLI.
//!
//! Logs always go to stderr so stdout stays machine-readable.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "warn,autoname=info";
const VERBOSE_LOG_FILTER: &str = "info,autoname=debug,autoname_core=debug,autoname_common=debug";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

pub struct LogConfig {
    pub verbose: bool,
    pub format: LogFormat,
}

/// Initialize tracing. `RUST_LOG` wins over the defaults unless `--verbose`
/// is given.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = if config.verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    result.context("Failed to initialize logging")
}
