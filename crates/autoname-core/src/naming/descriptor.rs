use crate::error::{NamingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A resource type descriptor in `pkg:module:type` form,
/// e.g. `aws:ec2/instance:Instance`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeDescriptor {
    pub pkg: String,
    pub module: String,
    pub type_name: String,
    /// Uppercase letters of `type_name`, lower-cased.
    pub type_short: String,
    /// Segments after the type, joined with `:`. Kept so the descriptor
    /// displays as it was parsed.
    pub trailing: Option<String>,
}

impl TypeDescriptor {
    /// Parse a descriptor. The third colon-separated segment is the type;
    /// anything after it plays no part in naming. An empty type segment is
    /// accepted and abbreviates to an empty code.
    pub fn parse(s: &str) -> Result<Self> {
        let segments: Vec<&str> = s.split(':').collect();
        if segments.len() < 3 {
            return Err(NamingError::MalformedTypeDescriptor {
                descriptor: s.to_string(),
                segments: segments.len(),
            });
        }

        let type_name = segments[2];
        let trailing = (segments.len() > 3).then(|| segments[3..].join(":"));

        Ok(Self {
            pkg: segments[0].to_string(),
            module: segments[1].to_string(),
            type_name: type_name.to_string(),
            type_short: type_short(type_name),
            trailing,
        })
    }
}

/// Shared parsing helper used by every naming policy.
pub fn parse_type_descriptor(resource_unique_type_name: &str) -> Result<TypeDescriptor> {
    TypeDescriptor::parse(resource_unique_type_name)
}

/// Abbreviate a PascalCase identifier to its uppercase letters, lower-cased.
///
/// `SubnetGroup` becomes `sg`, `VPC` becomes `vpc`, `Instance` becomes `i`.
pub fn type_short(resource_type: &str) -> String {
    resource_type
        .chars()
        .filter(|c| c.is_uppercase())
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.pkg, self.module, self.type_name)?;
        if let Some(trailing) = &self.trailing {
            write!(f, ":{}", trailing)?;
        }
        Ok(())
    }
}

impl FromStr for TypeDescriptor {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<TypeDescriptor> for String {
    fn from(descriptor: TypeDescriptor) -> String {
        descriptor.to_string()
    }
}

impl TryFrom<String> for TypeDescriptor {
    type Error = NamingError;
    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}
