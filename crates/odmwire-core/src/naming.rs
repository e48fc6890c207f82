use odmwire_config::CacheKind;

/// Tag recorded on every emitted document manager definition.
pub const DOCUMENT_MANAGER_TAG: &str = "odm.document_manager";

///
/// Constructor references recorded on emitted definitions. The registry
/// consumer maps these to concrete factories; they are part of the wire
/// contract, not class names.
///

pub mod constructor {
    pub const ARRAY_CACHE: &str = "array_cache";
    pub const CACHE_PROVIDER: &str = "cache_provider";
    pub const CONFIGURATION: &str = "configuration";
    pub const CONNECTION: &str = "connection";
    pub const DOCUMENT_MANAGER: &str = "document_manager";
    pub const EVENT_MANAGER: &str = "event_manager";
    pub const MANAGER_REGISTRY: &str = "manager_registry";
    /// Placeholder for a service the host provides at runtime.
    pub const SYNTHETIC: &str = "synthetic";
}

///
/// Naming
///
/// Identifier scheme for every emitted service, alias, and parameter.
/// `Naming::default()` is the wire contract consumers depend on; changing
/// any of its constants breaks downstream lookups.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Naming {
    /// Prefix for managed service ids and parameters.
    pub prefix: String,

    /// Id of the public registry entry point.
    pub root_id: String,

    /// Prefix for per-manager cache aliases.
    pub cache_prefix: String,

    /// Prefix for shared cache provider definitions.
    pub providers_prefix: String,

    /// Frozen alias id kept for pre-rename consumers.
    pub legacy_manager_alias: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            prefix: "doctrine_mongodb.odm".to_string(),
            root_id: "doctrine_mongodb".to_string(),
            cache_prefix: "doctrine.orm".to_string(),
            providers_prefix: "doctrine_cache.providers".to_string(),
            legacy_manager_alias: "doctrine.odm.mongodb.document_manager".to_string(),
        }
    }
}

impl Naming {
    #[must_use]
    pub fn connection_id(&self, connection: &str) -> String {
        format!("{}.{connection}_connection", self.prefix)
    }

    /// Keyed by connection id, never by manager id: managers sharing a
    /// connection share this service.
    #[must_use]
    pub fn configuration_id(&self, connection: &str) -> String {
        format!("{}.{connection}_configuration", self.prefix)
    }

    #[must_use]
    pub fn event_manager_id(&self, connection: &str) -> String {
        format!("{}.{connection}_event_manager", self.prefix)
    }

    #[must_use]
    pub fn document_manager_id(&self, manager: &str) -> String {
        format!("{}.{manager}_document_manager", self.prefix)
    }

    /// Parameter id for a raw option key; hyphens normalize to underscores,
    /// values pass through elsewhere untouched.
    #[must_use]
    pub fn parameter_id(&self, key: &str) -> String {
        format!("{}.{}", self.prefix, normalize_key(key))
    }

    #[must_use]
    pub fn default_connection_alias(&self) -> String {
        format!("{}.default_connection", self.prefix)
    }

    #[must_use]
    pub fn default_document_manager_alias(&self) -> String {
        format!("{}.default_document_manager", self.prefix)
    }

    /// Canonical pointer to the default manager; the legacy alias chains to
    /// this id.
    #[must_use]
    pub fn document_manager_alias(&self) -> String {
        format!("{}.document_manager", self.prefix)
    }

    #[must_use]
    pub fn cache_alias_id(&self, manager: &str, kind: CacheKind) -> String {
        format!("{}.{manager}_{kind}_cache", self.cache_prefix)
    }

    #[must_use]
    pub fn provider_id(&self, name: &str) -> String {
        format!("{}.{name}", self.providers_prefix)
    }

    /// Generated id for a private in-process array cache: the alias name
    /// nested under the provider namespace.
    #[must_use]
    pub fn array_cache_id(&self, manager: &str, kind: CacheKind) -> String {
        self.provider_id(&self.cache_alias_id(manager, kind))
    }
}

/// Normalize a configuration key for use as a parameter name.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.replace('-', "_")
}
