pub mod error;
pub mod naming;

pub use error::{NamingError, Result};
pub use naming::{
    DefaultNaming, Naming, NamingContext, NamingPolicy, PassThroughNaming, TypeDescriptor,
};
