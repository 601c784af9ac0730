use super::{Naming, NamingContext};
use crate::error::{NamingError, Result};

/// Opt-out policy: hands back the name the caller declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassThroughNaming;

impl PassThroughNaming {
    pub fn new() -> Self {
        Self
    }
}

impl Naming for PassThroughNaming {
    fn get_name(&mut self, ctx: &NamingContext<'_>) -> Result<String> {
        ctx.name
            .map(str::to_string)
            .ok_or_else(|| NamingError::MissingName {
                resource_type: ctx.resource_type.to_string(),
            })
    }
}
