//! Wiring input model for odmwire: connections, document managers, bundles,
//! cache drivers, and the TOML loader that produces a [`WiringConfig`].
//!
//! Deserialization is the shape/type validation layer; cross-entry rules
//! (referential integrity, duplicate ids) belong to the compiler.

pub mod cache;
pub mod connection;
pub mod manager;
pub mod mapping;
pub mod wiring;

pub use cache::{CacheDriver, CacheKind};
pub use connection::ConnectionConfig;
pub use manager::DocumentManagerConfig;
pub use mapping::{BundleSource, MappingSource};
pub use wiring::{WiringConfig, WiringConfigError};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        cache::{CacheDriver, CacheKind},
        connection::ConnectionConfig,
        manager::DocumentManagerConfig,
        mapping::{BundleSource, MappingSource},
        wiring::WiringConfig,
    };
}
