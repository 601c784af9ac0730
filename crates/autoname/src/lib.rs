//! autoname CLI Library
//!
//! This library exposes CLI functionality for programmatic use and testing.

pub mod commands;
pub mod error;
pub mod logging;

pub use commands::NamingOverrides;
pub use error::CliError;
