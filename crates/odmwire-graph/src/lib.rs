//! Service registry data model: the immutable output of wiring compilation.
//!
//! A compiled graph is plain data. Registering it into a live container is
//! the consumer's job; nothing in this crate executes services.

pub mod alias;
pub mod definition;
pub mod graph;
pub mod value;

pub use alias::Alias;
pub use definition::{MethodCall, ServiceArg, ServiceDefinition, Visibility};
pub use graph::{GraphError, ServiceGraph};
pub use value::ParamValue;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        alias::Alias,
        definition::{MethodCall, ServiceArg, ServiceDefinition, Visibility},
        graph::ServiceGraph,
        value::ParamValue,
    };
}
