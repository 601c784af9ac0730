//! Plan command: register a list of resources on a stack with auto-naming

use crate::error::CliError;
use autoname_common::config::AutonameConfig;
use autoname_common::pipeline::{Props, ResourceOptions};
use autoname_common::stack::{RegisteredResource, Stack};
use autoname_common::AutoNaming;
use owo_colors::{OwoColorize, Stream::Stdout};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One resource declaration in a plan file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResourceSpec {
    /// `pkg:module:type` identifier
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Declared name; may be omitted when auto-naming
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub props: Props,
    /// Declared name of the parent resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Read plan input from a file, or from stdin when the path is `-`
pub fn read_plan_input(path: &Path) -> Result<Vec<ResourceSpec>, CliError> {
    let invalid = |message: String| CliError::PlanInput {
        path: path.to_path_buf(),
        message,
    };

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| invalid(e.to_string()))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?
    };

    serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))
}

/// Register every declared resource, in order, on a fresh stack.
///
/// Parents are referenced by their declared name and resolved to the name
/// they were registered under.
pub fn plan_resources(
    config: &AutonameConfig,
    specs: Vec<ResourceSpec>,
) -> Result<Vec<RegisteredResource>, CliError> {
    let policy = config.naming_policy().map_err(CliError::Config)?;

    let mut stack = Stack::new();
    AutoNaming::new(policy)
        .with_tag_rules(config.tag_rules())
        .register(&mut stack);

    let mut declared_to_registered: HashMap<String, String> = HashMap::new();
    for spec in specs {
        let parent = spec
            .parent
            .map(|p| declared_to_registered.get(&p).cloned().unwrap_or(p));
        let registered = stack
            .register_resource(
                &spec.resource_type,
                &spec.name,
                spec.props,
                ResourceOptions { parent },
            )
            .map_err(CliError::Naming)?;
        if !spec.name.is_empty() {
            declared_to_registered.insert(spec.name, registered.name.clone());
        }
    }

    info!(count = stack.resources().len(), "Planned resources");
    Ok(stack.into_resources())
}

/// Run the plan command
pub fn run_plan(config: &AutonameConfig, input: &Path, json: bool) -> Result<(), CliError> {
    let specs = read_plan_input(input)?;
    let resources = plan_resources(config, specs)?;

    if json {
        let out = serde_json::to_string_pretty(&resources).map_err(anyhow::Error::from)?;
        println!("{}", out);
        return Ok(());
    }

    let width = resources
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0);
    for r in &resources {
        let padded = format!("{:<width$}", r.name, width = width);
        println!(
            "{}  {}",
            padded.if_supports_color(Stdout, |t| t.green()),
            r.resource_type
        );
    }
    Ok(())
}
