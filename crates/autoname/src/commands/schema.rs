//! Schema command: JSON Schema for the config file or plan input

use crate::commands::plan::ResourceSpec;
use crate::error::CliError;
use anyhow::Context;
use autoname_common::config::AutonameConfig;
use schemars::schema_for;
use std::path::PathBuf;

/// Render the JSON Schema of the config file, or of the plan input when
/// `plan` is set.
pub fn render_schema(plan: bool) -> Result<String, CliError> {
    let schema = if plan {
        schema_for!(Vec<ResourceSpec>)
    } else {
        schema_for!(AutonameConfig)
    };
    let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
    Ok(json)
}

pub fn run_schema(plan: bool, output: Option<PathBuf>) -> Result<(), CliError> {
    let schema_json = render_schema(plan)?;

    if let Some(path) = output {
        std::fs::write(&path, schema_json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
    } else {
        println!("{}", schema_json);
    }
    Ok(())
}
