use crate::{
    connection::ConnectionConfig, manager::DocumentManagerConfig, mapping::BundleSource,
};
use odmwire_graph::ParamValue;
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// WiringConfigError
///

#[derive(Debug, ThisError)]
pub enum WiringConfigError {
    #[error("failed to read wiring config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse wiring config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// WiringConfig
///
/// The validated configuration tree handed to the compiler. Connections and
/// managers are lists so declaration order survives loading; the compiler
/// uses that order for first-declared-wins defaults.
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WiringConfig {
    #[serde(default)]
    pub connections: Vec<ConnectionConfig>,

    #[serde(default)]
    pub document_managers: Vec<DocumentManagerConfig>,

    #[serde(default)]
    pub bundles: Vec<BundleSource>,

    #[serde(default)]
    pub default_connection: Option<String>,

    #[serde(default)]
    pub default_document_manager: Option<String>,

    #[serde(default)]
    pub default_database: Option<String>,

    /// Global ODM options (proxy/hydrator settings and friends). Hyphenated
    /// keys are accepted here and normalized to underscores at compile time.
    #[serde(default)]
    pub options: BTreeMap<String, ParamValue>,
}

impl WiringConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, WiringConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, WiringConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| WiringConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&raw)
    }

    /// Look up a declared bundle by name.
    #[must_use]
    pub fn bundle(&self, name: &str) -> Option<&BundleSource> {
        self.bundles.iter().find(|bundle| bundle.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_DOC: &str = r#"
        default_database = "app"
        default_document_manager = "dm2"

        [options]
        proxy-namespace = "Proxies"
        auto_generate_proxy_classes = true

        [[connections]]
        id = "cn1"
        server = "mongodb://localhost:27017"

        [[connections]]
        id = "cn2"

        [[bundles]]
        name = "YamlBundle"
        document_namespace = "yaml_bundle::documents"

        [[document_managers]]
        id = "dm1"
        connection = "cn1"

        [[document_managers]]
        id = "dm2"
        connection = "cn2"
        auto_mapping = true
    "#;

    #[test]
    fn full_document_loads_in_declaration_order() {
        let config = WiringConfig::from_toml_str(FULL_DOC).expect("full document should load");

        let conn_ids: Vec<&str> = config.connections.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(conn_ids, vec!["cn1", "cn2"]);

        let dm_ids: Vec<&str> = config
            .document_managers
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(dm_ids, vec!["dm1", "dm2"]);

        assert_eq!(config.default_database.as_deref(), Some("app"));
        assert_eq!(config.default_document_manager.as_deref(), Some("dm2"));
        assert_eq!(
            config.options["proxy-namespace"],
            ParamValue::str("Proxies")
        );
        assert_eq!(
            config.bundle("YamlBundle").map(|b| b.document_namespace.as_str()),
            Some("yaml_bundle::documents")
        );
        assert!(config.bundle("XmlBundle").is_none());
    }

    #[test]
    fn unknown_top_level_keys_are_rejected() {
        let err = WiringConfig::from_toml_str(r#"connexions = []"#)
            .expect_err("typoed key should be rejected");
        assert!(matches!(err, WiringConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_surfaces_the_path_in_the_error() {
        let err = WiringConfig::from_toml_file("/nonexistent/odmwire.toml")
            .expect_err("missing file should fail to load");
        assert!(
            err.to_string().contains("/nonexistent/odmwire.toml"),
            "io error should carry the path, got: {err}"
        );
    }

    #[test]
    fn empty_document_yields_empty_lists_for_the_compiler_to_reject() {
        let config = WiringConfig::from_toml_str("").expect("empty document should parse");
        assert!(config.connections.is_empty());
        assert!(config.document_managers.is_empty());
    }
}
