use crate::{
    cache::{CacheDriver, CacheKind},
    mapping::MappingSource,
};
use serde::Deserialize;

///
/// DocumentManagerConfig
///
/// Named unit-of-work bound to one connection. The connection reference
/// defaults to the manager id, matching single-connection setups where the
/// two maps line up 1:1.
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentManagerConfig {
    pub id: String,

    #[serde(default)]
    pub connection: Option<String>,

    #[serde(default)]
    pub database: Option<String>,

    #[serde(default)]
    pub mappings: Vec<MappingSource>,

    /// Merge in every declared bundle no manager explicitly claims.
    #[serde(default)]
    pub auto_mapping: bool,

    #[serde(default)]
    pub metadata_cache_driver: CacheDriver,

    #[serde(default)]
    pub query_cache_driver: CacheDriver,

    #[serde(default)]
    pub result_cache_driver: CacheDriver,

    #[serde(default)]
    pub repository_factory: Option<String>,

    #[serde(default)]
    pub persistent_collection_factory: Option<String>,
}

impl DocumentManagerConfig {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            connection: None,
            database: None,
            mappings: Vec::new(),
            auto_mapping: false,
            metadata_cache_driver: CacheDriver::default(),
            query_cache_driver: CacheDriver::default(),
            result_cache_driver: CacheDriver::default(),
            repository_factory: None,
            persistent_collection_factory: None,
        }
    }

    /// Connection this manager is bound to.
    #[must_use]
    pub fn connection_id(&self) -> &str {
        self.connection.as_deref().unwrap_or(&self.id)
    }

    #[must_use]
    pub const fn cache_driver(&self, kind: CacheKind) -> &CacheDriver {
        match kind {
            CacheKind::Metadata => &self.metadata_cache_driver,
            CacheKind::Query => &self.query_cache_driver,
            CacheKind::Result => &self.result_cache_driver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_reference_defaults_to_the_manager_id() {
        let dm = DocumentManagerConfig::new("default");
        assert_eq!(dm.connection_id(), "default");

        let mut dm = DocumentManagerConfig::new("dm1");
        dm.connection = Some("conn1".to_string());
        assert_eq!(dm.connection_id(), "conn1");
    }

    #[test]
    fn cache_drivers_default_to_array_per_kind() {
        let dm = DocumentManagerConfig::new("default");
        for kind in CacheKind::ALL {
            assert_eq!(dm.cache_driver(kind), &CacheDriver::Array);
        }
    }

    #[test]
    fn full_manager_block_deserializes() {
        let dm: DocumentManagerConfig = toml::from_str(
            r#"
            id = "dm1"
            connection = "cn1"
            database = "app"
            auto_mapping = true
            repository_factory = "repository_factory_service"
            persistent_collection_factory = "persistent_collection_factory_service"
            metadata_cache_driver = { type = "provider", id = "metadata_cache" }

            [[mappings]]
            bundle = "YamlBundle"
            "#,
        )
        .expect("manager block should deserialize");

        assert_eq!(dm.connection_id(), "cn1");
        assert!(dm.auto_mapping);
        assert_eq!(
            dm.repository_factory.as_deref(),
            Some("repository_factory_service")
        );
        assert_eq!(
            dm.cache_driver(CacheKind::Metadata),
            &CacheDriver::Provider {
                id: "metadata_cache".to_string()
            }
        );
        assert_eq!(dm.mappings.len(), 1);
    }
}
