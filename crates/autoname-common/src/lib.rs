pub mod auto_naming;
pub mod config;
pub mod pipeline;
pub mod stack;
pub mod tags;

pub use auto_naming::AutoNaming;
pub use pipeline::{Props, ResourceOptions, ResourceTransformArgs, ResourceTransformResult, Transformation};
pub use stack::{RegisteredResource, Stack, StackError};

pub type Result<T> = anyhow::Result<T>;
