use crate::tags::TagMutation;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration from autoname.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AutonameConfig {
    /// Naming settings
    #[serde(default)]
    pub naming: NamingSection,
}

/// [naming] section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NamingSection {
    /// Product code, the first segment of every issued name
    pub product_code: Option<String>,
    /// Environment name; only its first character is used
    pub environment: Option<String>,
    /// Naming policy
    #[serde(default)]
    pub mode: NamingMode,
    /// Extra or replacement type-name -> resource-code overrides
    #[serde(default)]
    pub type_codes: BTreeMap<String, String>,
    /// Extra resource types whose name is mirrored into tags
    #[serde(default)]
    pub tag_rules: BTreeMap<String, TagMutation>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum NamingMode {
    /// Derive names by convention
    #[default]
    Default,
    /// Keep the names resources were declared with
    PassThrough,
}
