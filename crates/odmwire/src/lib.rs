//! odmwire compiles a MongoDB ODM wiring configuration — connections,
//! document managers, cache drivers, mapping sources — into an immutable
//! graph of service definitions, aliases, and parameters, ready to be
//! registered into any service registry.
//!
//! Compilation is a pure function: no I/O, no shared state, identical input
//! yields an identical graph. The registry consumer owns instantiation.
//!
//! ```
//! use odmwire::prelude::*;
//!
//! let config = WiringConfig::from_toml_str(
//!     r#"
//!     [[connections]]
//!     id = "default"
//!     server = "mongodb://localhost:27017"
//!
//!     [[document_managers]]
//!     id = "default"
//!     "#,
//! )?;
//!
//! let graph = compile(&config)?;
//! assert!(
//!     graph
//!         .get_definition("doctrine_mongodb.odm.default_document_manager")
//!         .is_some()
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use odmwire_config::{
    BundleSource, CacheDriver, CacheKind, ConnectionConfig, DocumentManagerConfig, MappingSource,
    WiringConfig, WiringConfigError,
};
pub use odmwire_core::{
    CompileError, CompileEvent, CompileSink, Compiler, GraphLookup, LookupError, Naming, NullSink,
    compile,
};
pub use odmwire_graph::{
    Alias, GraphError, MethodCall, ParamValue, ServiceArg, ServiceDefinition, ServiceGraph,
    Visibility,
};

///
/// Prelude
///
/// Domain vocabulary only; errors and observer plumbing stay behind
/// explicit imports.
///

pub mod prelude {
    pub use odmwire_config::prelude::*;
    pub use odmwire_core::prelude::*;
    pub use odmwire_graph::prelude::*;
}
