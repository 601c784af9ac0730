//! Name command: issue logical names for a list of type descriptors

use crate::error::CliError;
use autoname_common::config::AutonameConfig;
use autoname_core::naming::{Naming, NamingContext};

/// Issue one name per descriptor, in order, from a single engine.
pub fn issue_names(
    config: &AutonameConfig,
    resource_types: &[String],
) -> Result<Vec<String>, CliError> {
    let mut policy = config.naming_policy().map_err(CliError::Config)?;
    if policy.is_pass_through() {
        return Err(CliError::PassThroughUnsupported { command: "name" });
    }

    resource_types
        .iter()
        .map(|t| {
            policy
                .get_name(&NamingContext::new(t))
                .map_err(|e| CliError::Naming(e.into()))
        })
        .collect()
}

/// Run the name command
pub fn run_name(config: &AutonameConfig, resource_types: &[String]) -> Result<(), CliError> {
    for name in issue_names(config, resource_types)? {
        println!("{}", name);
    }
    Ok(())
}
