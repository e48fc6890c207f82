use odmwire_graph::ParamValue;
use serde::Deserialize;
use std::collections::BTreeMap;

///
/// ConnectionConfig
///
/// Named configuration for reaching one backing MongoDB instance.
/// Declared as a list in the wiring document so declaration order is
/// preserved for default-pointer derivation.
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    pub id: String,

    /// Server URI; the connection service receives a null literal when unset.
    #[serde(default)]
    pub server: Option<String>,

    /// Driver options, passed through to the connection constructor.
    #[serde(default)]
    pub options: BTreeMap<String, ParamValue>,
}

impl ConnectionConfig {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            server: None,
            options: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_connection_needs_only_an_id() {
        let conn: ConnectionConfig =
            toml::from_str(r#"id = "default""#).expect("id-only connection should deserialize");
        assert_eq!(conn.id, "default");
        assert!(conn.server.is_none());
        assert!(conn.options.is_empty());
    }

    #[test]
    fn driver_options_carry_mixed_scalar_types() {
        let conn: ConnectionConfig = toml::from_str(
            r#"
            id = "cn1"
            server = "mongodb://localhost:27017"

            [options]
            connect = true
            w = 2
            "#,
        )
        .expect("connection with options should deserialize");

        assert_eq!(conn.server.as_deref(), Some("mongodb://localhost:27017"));
        assert_eq!(conn.options["connect"], ParamValue::Bool(true));
        assert_eq!(conn.options["w"], ParamValue::Int(2));
    }
}
