//! Wiring compiler for odmwire: translates a validated `WiringConfig`
//! into an immutable `ServiceGraph` of definitions, aliases, and
//! parameters.
//!
//! Compilation is pure and synchronous. Registering the result into a live
//! container — and instantiating anything — is the consumer's job.

pub mod automap;
pub mod compile;
pub mod error;
pub mod lookup;
pub mod naming;
pub mod sink;

mod validate;

pub use compile::{Compiler, compile};
pub use error::CompileError;
pub use lookup::{GraphLookup, LookupError};
pub use naming::Naming;
pub use sink::{CompileEvent, CompileSink, NullSink};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        compile::{Compiler, compile},
        error::CompileError,
        lookup::GraphLookup,
        naming::Naming,
    };
}
