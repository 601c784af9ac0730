pub mod name;
pub mod plan;
pub mod schema;

pub use name::*;
pub use plan::*;
pub use schema::*;

use crate::error::CliError;
use anyhow::Context;
use autoname_common::config::{discover_config, AutonameConfig, NamingMode};
use clap::Args;
use std::path::Path;
use tracing::debug;

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default, Args)]
pub struct NamingOverrides {
    /// Product code (first segment of every name)
    #[arg(long)]
    pub product: Option<String>,
    /// Environment name; only its first character is used
    #[arg(long)]
    pub env: Option<String>,
    /// Keep declared names instead of deriving them
    #[arg(long)]
    pub pass_through: bool,
}

impl NamingOverrides {
    pub fn apply(&self, config: &mut AutonameConfig) {
        if let Some(product) = &self.product {
            config.naming.product_code = Some(product.clone());
        }
        if let Some(env) = &self.env {
            config.naming.environment = Some(env.clone());
        }
        if self.pass_through {
            config.naming.mode = NamingMode::PassThrough;
        }
    }
}

/// Load the explicit config file, or discover one from the working
/// directory, then apply command-line overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: &NamingOverrides,
) -> Result<AutonameConfig, CliError> {
    let config_file = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let start_dir = std::env::current_dir().context("Failed to get current directory")?;
            discover_config(&start_dir)
        }
    };

    let mut config = match config_file {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            AutonameConfig::load(&path).map_err(CliError::Config)?
        }
        None => AutonameConfig::default(),
    };

    overrides.apply(&mut config);
    Ok(config)
}
