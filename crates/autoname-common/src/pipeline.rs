//! Resource Transformation Hook
//!
//! A transformation sees every resource as it is registered and may replace
//! its properties, options and name before identity is finalized.

use crate::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Input property bag of a resource
pub type Props = Map<String, Value>;

/// Options that travel with a resource through the transformation chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResourceOptions {
    /// Name of the parent resource, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl ResourceOptions {
    pub fn with_parent(parent: impl Into<String>) -> Self {
        Self {
            parent: Some(parent.into()),
        }
    }
}

/// What a transformation receives for one resource
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTransformArgs {
    /// `pkg:module:type` identifier
    pub resource_type: String,
    /// Name as declared (possibly empty)
    pub name: String,
    pub props: Props,
    pub opts: ResourceOptions,
}

/// Replacement values a transformation hands back
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTransformResult {
    pub props: Props,
    pub opts: ResourceOptions,
    /// New name; `None` keeps the current one
    pub name: Option<String>,
}

impl ResourceTransformResult {
    pub fn new(props: Props, opts: ResourceOptions) -> Self {
        Self {
            props,
            opts,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A hook run once per resource registration.
///
/// Returning `Ok(None)` leaves the resource as it is.
pub trait Transformation {
    fn transform(
        &mut self,
        args: &ResourceTransformArgs,
    ) -> Result<Option<ResourceTransformResult>>;
}

impl<F> Transformation for F
where
    F: FnMut(&ResourceTransformArgs) -> Result<Option<ResourceTransformResult>>,
{
    fn transform(
        &mut self,
        args: &ResourceTransformArgs,
    ) -> Result<Option<ResourceTransformResult>> {
        self(args)
    }
}
