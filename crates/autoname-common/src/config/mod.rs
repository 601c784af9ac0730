//! Configuration module
//!
//! Handles loading and parsing of autoname configuration files
//! (autoname.toml, autoname.json).

pub mod model;

use anyhow::Context;
use autoname_core::naming::{DefaultNaming, NamingPolicy, PassThroughNaming, TypeCodes};
use std::path::{Path, PathBuf};

pub use self::model::*;

use crate::tags::TagRules;

/// File names searched for, in order, in each directory
pub const CONFIG_FILE_NAMES: &[&str] = &["autoname.toml", "autoname.json"];

impl AutonameConfig {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        // Detect format based on extension
        if path.extension().is_some_and(|ext| ext == "json") {
            return serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON config {}", path.display()));
        }

        // Default to TOML
        toml::from_str(&content).with_context(|| format!("Invalid TOML config {}", path.display()))
    }

    /// Build the naming policy described by the [naming] section
    pub fn naming_policy(&self) -> crate::Result<NamingPolicy> {
        let naming = &self.naming;
        if naming.mode == NamingMode::PassThrough {
            return Ok(PassThroughNaming.into());
        }

        let product_code = naming
            .product_code
            .as_deref()
            .context("naming.product_code is not set")?;
        let environment = naming
            .environment
            .as_deref()
            .context("naming.environment is not set")?;

        let mut type_codes = TypeCodes::default();
        type_codes.extend(naming.type_codes.clone());

        let engine = DefaultNaming::new(product_code, environment)?.with_type_codes(type_codes);
        Ok(engine.into())
    }

    /// Built-in tag rules plus any configured ones
    pub fn tag_rules(&self) -> TagRules {
        let mut rules = TagRules::default();
        rules.extend(self.naming.tag_rules.clone());
        rules
    }
}

/// Walk up directory tree to find autoname.toml or autoname.json
pub fn discover_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let candidate = current.join(file_name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        // Move up one directory
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    None
}
