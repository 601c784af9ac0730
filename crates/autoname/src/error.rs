//! CLI error reporting

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Configuration error: {0:#}")]
    #[diagnostic(
        code(autoname::config),
        help("add a [naming] section to autoname.toml, or pass --product and --env")
    )]
    Config(anyhow::Error),

    #[error("Naming failed: {0:#}")]
    #[diagnostic(code(autoname::naming))]
    Naming(anyhow::Error),

    #[error("Cannot read resource plan {}: {message}", .path.display())]
    #[diagnostic(
        code(autoname::plan_input),
        help("expected a JSON array of {{\"type\", \"name\", \"props\", \"parent\"}} objects")
    )]
    PlanInput { path: PathBuf, message: String },

    #[error("The `{command}` command needs the default naming mode")]
    #[diagnostic(code(autoname::usage), help("drop --pass-through or set naming.mode = \"default\""))]
    PassThroughUnsupported { command: &'static str },

    #[error("{0:#}")]
    #[diagnostic(code(autoname::other))]
    Other(#[from] anyhow::Error),
}
