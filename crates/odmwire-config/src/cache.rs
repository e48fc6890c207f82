use derive_more::Display;
use serde::Deserialize;

///
/// CacheKind
///
/// The three cache slots every document manager carries. Exactly one
/// driver variant is active per kind per manager.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CacheKind {
    #[display("metadata")]
    Metadata,
    #[display("query")]
    Query,
    #[display("result")]
    Result,
}

impl CacheKind {
    pub const ALL: [Self; 3] = [Self::Metadata, Self::Query, Self::Result];

    /// Setter invoked on the per-connection configuration service.
    #[must_use]
    pub const fn setter(self) -> &'static str {
        match self {
            Self::Metadata => "setMetadataCacheImpl",
            Self::Query => "setQueryCacheImpl",
            Self::Result => "setResultCacheImpl",
        }
    }
}

///
/// CacheDriver
///
/// Unrecognized variants are unrepresentable once deserialized, so the
/// compiler never sees an invalid cache configuration.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum CacheDriver {
    #[default]
    Array,
    Service { id: String },
    Provider { id: String },
}
