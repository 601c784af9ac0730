//! Name tag mirroring
//!
//! A few resource kinds expose their display name only through tags. For
//! those, the issued logical name is also written as a `Name` tag. The
//! shape of the tag collection differs per kind, so each kind maps to a
//! [`TagMutation`].

use crate::pipeline::Props;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use thiserror::Error;

pub const NAME_TAG: &str = "Name";
pub const TAGS_PROPERTY: &str = "tags";

pub const AUTOSCALING_GROUP: &str = "aws:autoscaling/group:Group";
pub const EC2_INSTANCE: &str = "aws:ec2/instance:Instance";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Expected `tags` of {resource_type} to be {expected}, found {found}")]
    UnexpectedShape {
        resource_type: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// How the `Name` tag is written into a resource's `tags` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TagMutation {
    /// `tags` is a list of `{key, value, propagateAtLaunch}` entries
    /// (auto-scaling groups). The `Name` entry propagates to launched
    /// instances.
    AppendList,
    /// `tags` is a plain key/value map
    MergeMap,
}

impl TagMutation {
    /// Check that `tags`, if present, has the shape this mutation writes to.
    pub fn check(self, resource_type: &str, props: &Props) -> Result<(), TagError> {
        match (self, props.get(TAGS_PROPERTY)) {
            (_, None | Some(Value::Null))
            | (TagMutation::AppendList, Some(Value::Array(_)))
            | (TagMutation::MergeMap, Some(Value::Object(_))) => Ok(()),
            (TagMutation::AppendList, Some(other)) => {
                Err(unexpected(resource_type, "a list", other))
            }
            (TagMutation::MergeMap, Some(other)) => Err(unexpected(resource_type, "a map", other)),
        }
    }

    /// Write `name` as the `Name` tag. A missing or null `tags` property is
    /// treated as an empty collection; an existing `Name` tag is replaced.
    pub fn apply(self, resource_type: &str, props: &mut Props, name: &str) -> Result<(), TagError> {
        let tags = props
            .entry(TAGS_PROPERTY.to_string())
            .or_insert(Value::Null);

        match self {
            TagMutation::AppendList => {
                if tags.is_null() {
                    *tags = Value::Array(Vec::new());
                }
                let entries = match tags {
                    Value::Array(entries) => entries,
                    other => return Err(unexpected(resource_type, "a list", other)),
                };
                let entry = json!({
                    "key": NAME_TAG,
                    "value": name,
                    "propagateAtLaunch": true,
                });
                match entries
                    .iter()
                    .position(|e| e.get("key").and_then(Value::as_str) == Some(NAME_TAG))
                {
                    Some(index) => entries[index] = entry,
                    None => entries.push(entry),
                }
            }
            TagMutation::MergeMap => {
                if tags.is_null() {
                    *tags = Value::Object(Map::new());
                }
                let map = match tags {
                    Value::Object(map) => map,
                    other => return Err(unexpected(resource_type, "a map", other)),
                };
                map.insert(NAME_TAG.to_string(), Value::String(name.to_string()));
            }
        }
        Ok(())
    }
}

fn unexpected(resource_type: &str, expected: &'static str, found: &Value) -> TagError {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    };
    TagError::UnexpectedShape {
        resource_type: resource_type.to_string(),
        expected,
        found,
    }
}

/// Lookup table from resource type to tag mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRules {
    rules: HashMap<String, TagMutation>,
}

impl Default for TagRules {
    fn default() -> Self {
        Self::empty()
            .with_rule(AUTOSCALING_GROUP, TagMutation::AppendList)
            .with_rule(EC2_INSTANCE, TagMutation::MergeMap)
    }
}

impl TagRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    pub fn with_rule(mut self, resource_type: impl Into<String>, mutation: TagMutation) -> Self {
        self.rules.insert(resource_type.into(), mutation);
        self
    }

    pub fn extend<I, K>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (K, TagMutation)>,
        K: Into<String>,
    {
        self.rules
            .extend(rules.into_iter().map(|(k, m)| (k.into(), m)));
    }

    pub fn get(&self, resource_type: &str) -> Option<TagMutation> {
        self.rules.get(resource_type).copied()
    }

    /// Check `props` against the rule for `resource_type`, if there is one.
    pub fn check(&self, resource_type: &str, props: &Props) -> Result<(), TagError> {
        match self.get(resource_type) {
            Some(mutation) => mutation.check(resource_type, props),
            None => Ok(()),
        }
    }

    /// Apply the rule for `resource_type`, if there is one.
    /// Returns whether a rule matched.
    pub fn apply(&self, resource_type: &str, props: &mut Props, name: &str) -> Result<bool, TagError> {
        match self.get(resource_type) {
            Some(mutation) => {
                mutation.apply(resource_type, props, name)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
