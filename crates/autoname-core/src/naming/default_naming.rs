use super::{Naming, NamingContext, NameRegistry, TypeCodes, TypeDescriptor};
use crate::error::{NamingError, Result};
use tracing::debug;

/// Convention-based naming: `{product}-{env letter}-{resource code}-{seq}`.
///
/// One instance covers one planning run; its registry lives and dies with it.
#[derive(Debug, Clone)]
pub struct DefaultNaming {
    product_code: String,
    static_environment_name: String,
    environment_letter: char,
    type_codes: TypeCodes,
    logical_names: NameRegistry,
}

impl DefaultNaming {
    /// Create an engine with the built-in type-code overrides.
    ///
    /// Both values must be non-empty; only the first character of the
    /// environment name ends up in issued names.
    pub fn new(
        product_code: impl Into<String>,
        static_environment_name: impl Into<String>,
    ) -> Result<Self> {
        let product_code = product_code.into();
        let static_environment_name = static_environment_name.into();

        if product_code.is_empty() {
            return Err(NamingError::EmptyProductCode);
        }
        let environment_letter = static_environment_name
            .chars()
            .next()
            .ok_or(NamingError::EmptyEnvironmentName)?;

        Ok(Self {
            product_code,
            static_environment_name,
            environment_letter,
            type_codes: TypeCodes::default(),
            logical_names: NameRegistry::new(),
        })
    }

    /// Replace the type-code override table
    pub fn with_type_codes(mut self, type_codes: TypeCodes) -> Self {
        self.type_codes = type_codes;
        self
    }

    /// Issue the next logical name for a `pkg:module:type` descriptor.
    pub fn name_for(&mut self, resource_unique_type_name: &str) -> Result<String> {
        let descriptor = TypeDescriptor::parse(resource_unique_type_name)?;
        let resource_code = self.type_codes.resource_code(&descriptor);
        let prefix = format!(
            "{}-{}-{}",
            self.product_code, self.environment_letter, resource_code
        );

        let name = self.logical_names.issue(&prefix);
        debug!(
            resource_type = resource_unique_type_name,
            name = %name,
            "Issued logical name"
        );
        Ok(name)
    }

    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    pub fn environment_name(&self) -> &str {
        &self.static_environment_name
    }

    pub fn environment_letter(&self) -> char {
        self.environment_letter
    }

    pub fn type_codes(&self) -> &TypeCodes {
        &self.type_codes
    }

    /// Names issued so far, oldest first
    pub fn issued(&self) -> impl Iterator<Item = &str> {
        self.logical_names.iter()
    }

    pub fn registry(&self) -> &NameRegistry {
        &self.logical_names
    }
}

impl Naming for DefaultNaming {
    fn get_name(&mut self, ctx: &NamingContext<'_>) -> Result<String> {
        self.name_for(ctx.resource_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_sequence() {
        let mut naming = DefaultNaming::new("app", "prod").unwrap();
        assert_eq!(
            naming.name_for("aws:ec2/instance:Instance").unwrap(),
            "app-p-ec2-001"
        );
        assert_eq!(
            naming.name_for("aws:ec2/instance:Instance").unwrap(),
            "app-p-ec2-002"
        );
        assert_eq!(
            naming.name_for("aws:autoscaling/group:Group").unwrap(),
            "app-p-asg-001"
        );
    }

    #[test]
    fn test_failure_leaves_registry_untouched() {
        let mut naming = DefaultNaming::new("app", "prod").unwrap();
        naming.name_for("aws:s3/bucket:Bucket").unwrap();
        assert!(naming.name_for("aws:Bucket").is_err());
        assert_eq!(naming.registry().len(), 1);
    }

    #[test]
    fn test_environment_case_preserved() {
        let mut naming = DefaultNaming::new("app", "Staging").unwrap();
        assert_eq!(naming.product_code(), "app");
        assert_eq!(naming.environment_name(), "Staging");
        assert_eq!(naming.environment_letter(), 'S');
        assert_eq!(
            naming.name_for("aws:s3/bucket:Bucket").unwrap(),
            "app-S-b-001"
        );
    }

    #[test]
    fn test_empty_context_rejected() {
        assert_eq!(
            DefaultNaming::new("", "prod").unwrap_err(),
            NamingError::EmptyProductCode
        );
        assert_eq!(
            DefaultNaming::new("app", "").unwrap_err(),
            NamingError::EmptyEnvironmentName
        );
    }

    #[test]
    fn test_custom_type_codes() {
        let codes = TypeCodes::new().with_override("Bucket", "s3b");
        let mut naming = DefaultNaming::new("app", "dev").unwrap().with_type_codes(codes);
        assert_eq!(
            naming.name_for("aws:s3/bucket:Bucket").unwrap(),
            "app-d-s3b-001"
        );
        assert_eq!(
            naming.name_for("aws:iam/role:Role").unwrap(),
            "app-d-iam-001"
        );
    }
}
