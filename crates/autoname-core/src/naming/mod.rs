//! Naming policies
//!
//! A policy turns a resource's type descriptor (and, optionally, the name
//! the caller declared) into the logical name the resource is registered
//! under. `DefaultNaming` derives names by convention; `PassThroughNaming`
//! opts out and keeps the declared name.

pub mod default_naming;
pub mod descriptor;
pub mod pass_through;
pub mod registry;
pub mod type_codes;

pub use default_naming::DefaultNaming;
pub use descriptor::{parse_type_descriptor, type_short, TypeDescriptor};
pub use pass_through::PassThroughNaming;
pub use registry::NameRegistry;
pub use type_codes::{TypeCodes, DEFAULT_TYPE_CODES};

use crate::error::Result;

/// What a policy gets to see about one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingContext<'a> {
    /// Fully qualified `pkg:module:type` identifier
    pub resource_type: &'a str,
    /// Name supplied by the caller, if any
    pub name: Option<&'a str>,
}

impl<'a> NamingContext<'a> {
    pub fn new(resource_type: &'a str) -> Self {
        Self {
            resource_type,
            name: None,
        }
    }

    pub fn with_name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }
}

/// A naming strategy. Implementations only provide `get_name`; parsing
/// lives in [`parse_type_descriptor`] and [`type_short`].
pub trait Naming {
    fn get_name(&mut self, ctx: &NamingContext<'_>) -> Result<String>;
}

impl<N: Naming + ?Sized> Naming for Box<N> {
    fn get_name(&mut self, ctx: &NamingContext<'_>) -> Result<String> {
        (**self).get_name(ctx)
    }
}

impl<N: Naming + ?Sized> Naming for &mut N {
    fn get_name(&mut self, ctx: &NamingContext<'_>) -> Result<String> {
        (**self).get_name(ctx)
    }
}

/// Policy chosen at runtime, e.g. from configuration.
#[derive(Debug, Clone)]
pub enum NamingPolicy {
    Default(DefaultNaming),
    PassThrough(PassThroughNaming),
}

impl NamingPolicy {
    pub fn is_pass_through(&self) -> bool {
        matches!(self, NamingPolicy::PassThrough(_))
    }
}

impl Naming for NamingPolicy {
    fn get_name(&mut self, ctx: &NamingContext<'_>) -> Result<String> {
        match self {
            NamingPolicy::Default(naming) => naming.get_name(ctx),
            NamingPolicy::PassThrough(naming) => naming.get_name(ctx),
        }
    }
}

impl From<DefaultNaming> for NamingPolicy {
    fn from(naming: DefaultNaming) -> Self {
        NamingPolicy::Default(naming)
    }
}

impl From<PassThroughNaming> for NamingPolicy {
    fn from(naming: PassThroughNaming) -> Self {
        NamingPolicy::PassThrough(naming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policies_are_interchangeable() {
        let mut policies: Vec<Box<dyn Naming>> = vec![
            Box::new(DefaultNaming::new("app", "prod").unwrap()),
            Box::new(PassThroughNaming),
        ];
        let ctx = NamingContext::new("aws:ec2/instance:Instance").with_name("declared");
        let names: Vec<String> = policies
            .iter_mut()
            .map(|p| p.get_name(&ctx).unwrap())
            .collect();
        assert_eq!(names, vec!["app-p-ec2-001", "declared"]);
    }

    #[test]
    fn test_policy_enum_dispatch() {
        let mut policy = NamingPolicy::from(DefaultNaming::new("app", "test").unwrap());
        assert!(!policy.is_pass_through());
        let ctx = NamingContext::new("aws:s3/bucket:Bucket");
        assert_eq!(policy.get_name(&ctx).unwrap(), "app-t-b-001");
        assert_eq!(policy.get_name(&ctx).unwrap(), "app-t-b-002");
    }
}
