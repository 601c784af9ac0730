//! Auto-naming adapter
//!
//! Plugs a [`Naming`] policy into the stack's transformation hook: every
//! registered resource is renamed by the policy, and resource kinds listed
//! in the [`TagRules`] also get the name mirrored into their tags.

use crate::pipeline::{ResourceTransformArgs, ResourceTransformResult, Transformation};
use crate::stack::Stack;
use crate::tags::TagRules;
use crate::Result;
use autoname_core::naming::{Naming, NamingContext};
use tracing::debug;

/// Id under which the adapter installs itself on a stack
pub const AUTO_NAMING_ID: &str = "auto-naming";

pub struct AutoNaming<N> {
    naming: N,
    tag_rules: TagRules,
}

impl<N: Naming> AutoNaming<N> {
    pub fn new(naming: N) -> Self {
        Self {
            naming,
            tag_rules: TagRules::default(),
        }
    }

    pub fn with_tag_rules(mut self, tag_rules: TagRules) -> Self {
        self.tag_rules = tag_rules;
        self
    }

    pub fn naming(&self) -> &N {
        &self.naming
    }

    pub fn tag_rules(&self) -> &TagRules {
        &self.tag_rules
    }

    /// Compute the name for one resource and apply its tag rule.
    ///
    /// The tag shape is checked before a name is issued, so a resource with
    /// unusable tags does not consume a sequence number. Checks the stack
    /// makes after its transformations run (unknown parent, duplicate) come
    /// too late for that: a resource rejected there keeps its number used.
    pub fn set_name(&mut self, args: &ResourceTransformArgs) -> Result<ResourceTransformResult> {
        self.tag_rules.check(&args.resource_type, &args.props)?;

        let ctx = NamingContext::new(&args.resource_type).with_name(&args.name);
        let resource_name = self.naming.get_name(&ctx)?;

        let mut props = args.props.clone();
        if self
            .tag_rules
            .apply(&args.resource_type, &mut props, &resource_name)?
        {
            debug!(
                resource_type = %args.resource_type,
                name = %resource_name,
                "Mirrored name into tags"
            );
        }

        Ok(ResourceTransformResult::new(props, args.opts.clone()).with_name(resource_name))
    }

    /// Install on `stack`. Returns `false` if auto-naming was already
    /// installed there, in which case this instance is dropped.
    pub fn register(self, stack: &mut Stack) -> bool
    where
        N: 'static,
    {
        stack.register_transformation(AUTO_NAMING_ID, self)
    }
}

impl<N: Naming> Transformation for AutoNaming<N> {
    fn transform(
        &mut self,
        args: &ResourceTransformArgs,
    ) -> Result<Option<ResourceTransformResult>> {
        self.set_name(args).map(Some)
    }
}

impl<N: std::fmt::Debug> std::fmt::Debug for AutoNaming<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoNaming")
            .field("naming", &self.naming)
            .field("tag_rules", &self.tag_rules)
            .finish()
    }
}
