use serde::Deserialize;

///
/// MappingSource
///
/// One declared mapping location for a document manager. When `namespace`
/// is omitted it is resolved from the [`BundleSource`] of the same name.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MappingSource {
    pub bundle: String,

    #[serde(default)]
    pub namespace: Option<String>,

    /// Free-form mapping flavor (`yaml`, `xml`, `attribute`, ...).
    #[serde(default)]
    pub kind: Option<String>,
}

impl MappingSource {
    #[must_use]
    pub fn new(bundle: impl Into<String>) -> Self {
        Self {
            bundle: bundle.into(),
            namespace: None,
            kind: None,
        }
    }
}

///
/// BundleSource
///
/// Pre-resolved bundle registration supplied by the loader: the bundle name
/// and the document namespace it contributes. Replaces runtime namespace
/// scanning; declaration order drives the auto-mapping merge order.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BundleSource {
    pub name: String,
    pub document_namespace: String,
}

impl BundleSource {
    #[must_use]
    pub fn new(name: impl Into<String>, document_namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document_namespace: document_namespace.into(),
        }
    }
}
