//! In-memory resource stack
//!
//! Registers resources the way an orchestration engine's resource
//! constructor does, with one difference that matters for auto-naming: the
//! name is only required to be non-empty *after* every stack transformation
//! has run. A resource can therefore be declared without a name and receive
//! one from a transformation.

use crate::pipeline::{Props, ResourceOptions, ResourceTransformArgs, Transformation};
use crate::Result;
use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("Missing resource type argument")]
    MissingType,

    #[error("Missing resource name argument for {resource_type}")]
    MissingName { resource_type: String },

    #[error("Transformation `{transformation}` tried to change the parent of {resource_type}")]
    ParentChanged {
        resource_type: String,
        transformation: String,
    },

    #[error("Parent `{parent}` of {resource_type} is not registered")]
    UnknownParent {
        resource_type: String,
        parent: String,
    },

    #[error("Duplicate resource {resource_type} named `{name}`")]
    DuplicateResource { resource_type: String, name: String },
}

/// A resource after its identity has been finalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RegisteredResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    #[serde(default)]
    pub props: Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

struct Installed {
    id: String,
    transformation: Box<dyn Transformation>,
}

/// A stack of registered resources plus the transformations applied to
/// every new registration, in install order.
#[derive(Default)]
pub struct Stack {
    transformations: Vec<Installed>,
    resources: Vec<RegisteredResource>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a stack-level transformation under `id`.
    ///
    /// Installing the same id again is ignored and returns `false`, so a
    /// hook never runs twice for one resource.
    pub fn register_transformation<T>(&mut self, id: impl Into<String>, transformation: T) -> bool
    where
        T: Transformation + 'static,
    {
        let id = id.into();
        if self.is_installed(&id) {
            warn!(transformation = %id, "Transformation already installed, ignoring");
            return false;
        }
        info!(transformation = %id, "Installing stack transformation");
        self.transformations.push(Installed {
            id,
            transformation: Box::new(transformation),
        });
        true
    }

    pub fn is_installed(&self, id: &str) -> bool {
        self.transformations.iter().any(|t| t.id == id)
    }

    pub fn transformation_ids(&self) -> impl Iterator<Item = &str> {
        self.transformations.iter().map(|t| t.id.as_str())
    }

    /// Register a resource, running every installed transformation first.
    pub fn register_resource(
        &mut self,
        resource_type: &str,
        name: &str,
        props: Props,
        opts: ResourceOptions,
    ) -> Result<&RegisteredResource> {
        if resource_type.is_empty() {
            return Err(StackError::MissingType.into());
        }

        let mut args = ResourceTransformArgs {
            resource_type: resource_type.to_string(),
            name: name.to_string(),
            props,
            opts,
        };

        for installed in &mut self.transformations {
            let result = installed
                .transformation
                .transform(&args)
                .with_context(|| {
                    format!(
                        "Transformation `{}` failed for {}",
                        installed.id, resource_type
                    )
                })?;

            let Some(result) = result else {
                continue;
            };
            if result.opts.parent != args.opts.parent {
                return Err(StackError::ParentChanged {
                    resource_type: resource_type.to_string(),
                    transformation: installed.id.clone(),
                }
                .into());
            }
            args.props = result.props;
            args.opts = result.opts;
            if let Some(name) = result.name {
                args.name = name;
            }
        }

        if args.name.is_empty() {
            return Err(StackError::MissingName {
                resource_type: resource_type.to_string(),
            }
            .into());
        }

        if let Some(parent) = &args.opts.parent {
            if !self.resources.iter().any(|r| &r.name == parent) {
                return Err(StackError::UnknownParent {
                    resource_type: resource_type.to_string(),
                    parent: parent.clone(),
                }
                .into());
            }
        }

        if self
            .resources
            .iter()
            .any(|r| r.resource_type == args.resource_type && r.name == args.name)
        {
            return Err(StackError::DuplicateResource {
                resource_type: args.resource_type,
                name: args.name,
            }
            .into());
        }

        debug!(resource_type = %args.resource_type, name = %args.name, "Registered resource");
        self.resources.push(RegisteredResource {
            resource_type: args.resource_type,
            name: args.name,
            props: args.props,
            parent: args.opts.parent,
        });
        Ok(&self.resources[self.resources.len() - 1])
    }

    pub fn resources(&self) -> &[RegisteredResource] {
        &self.resources
    }

    pub fn get(&self, resource_type: &str, name: &str) -> Option<&RegisteredResource> {
        self.resources
            .iter()
            .find(|r| r.resource_type == resource_type && r.name == name)
    }

    pub fn into_resources(self) -> Vec<RegisteredResource> {
        self.resources
    }
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack")
            .field(
                "transformations",
                &self.transformations.iter().map(|t| &t.id).collect::<Vec<_>>(),
            )
            .field("resources", &self.resources)
            .finish()
    }
}
