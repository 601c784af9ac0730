use super::TypeDescriptor;
use std::collections::HashMap;

/// Well-known type names whose uppercase abbreviation is ambiguous or
/// unconventional. Matched against the full type segment.
pub const DEFAULT_TYPE_CODES: &[(&str, &str)] = &[
    ("Group", "asg"),
    ("Instance", "ec2"),
    ("Listener", "lsr"),
    ("Record", "rcd"),
    ("Role", "iam"),
    ("SubnetGroup", "sng"),
];

/// Override table mapping a type name to a fixed resource code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCodes {
    codes: HashMap<String, String>,
}

impl Default for TypeCodes {
    fn default() -> Self {
        Self {
            codes: DEFAULT_TYPE_CODES
                .iter()
                .map(|(t, c)| (t.to_string(), c.to_string()))
                .collect(),
        }
    }
}

impl TypeCodes {
    /// Table holding only the built-in overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with no overrides at all
    pub fn empty() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    pub fn with_override(mut self, type_name: impl Into<String>, code: impl Into<String>) -> Self {
        self.codes.insert(type_name.into(), code.into());
        self
    }

    /// Add or replace overrides. Later entries win.
    pub fn extend<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.codes
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    pub fn get(&self, type_name: &str) -> Option<&str> {
        self.codes.get(type_name).map(String::as_str)
    }

    /// Resource code for a descriptor: the override if one exists,
    /// otherwise the mechanical short code.
    pub fn resource_code<'a>(&'a self, descriptor: &'a TypeDescriptor) -> &'a str {
        self.get(&descriptor.type_name)
            .unwrap_or(descriptor.type_short.as_str())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
