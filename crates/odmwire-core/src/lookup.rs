//! Read-side helpers over a compiled graph: resolve the services console
//! tooling needs by manager or connection name, without any container.

use crate::naming::{DOCUMENT_MANAGER_TAG, Naming};
use odmwire_graph::{ParamValue, ServiceDefinition, ServiceGraph};
use thiserror::Error as ThisError;

///
/// LookupError
///

#[derive(Debug, ThisError)]
pub enum LookupError {
    #[error("no connection named `{0}` in the compiled graph")]
    UnknownConnection(String),

    #[error("no document manager named `{0}` in the compiled graph")]
    UnknownDocumentManager(String),
}

///
/// GraphLookup
///

#[derive(Clone, Copy, Debug)]
pub struct GraphLookup<'a> {
    graph: &'a ServiceGraph,
    naming: &'a Naming,
}

impl<'a> GraphLookup<'a> {
    #[must_use]
    pub const fn new(graph: &'a ServiceGraph, naming: &'a Naming) -> Self {
        Self { graph, naming }
    }

    /// Definition backing the named document manager.
    pub fn document_manager(&self, name: &str) -> Result<&'a ServiceDefinition, LookupError> {
        self.graph
            .get_definition(&self.naming.document_manager_id(name))
            .ok_or_else(|| LookupError::UnknownDocumentManager(name.to_string()))
    }

    /// Definition backing the named connection.
    pub fn connection(&self, name: &str) -> Result<&'a ServiceDefinition, LookupError> {
        self.graph
            .get_definition(&self.naming.connection_id(name))
            .ok_or_else(|| LookupError::UnknownConnection(name.to_string()))
    }

    /// Default manager definition, following the recorded default pointer.
    pub fn default_document_manager(&self) -> Result<&'a ServiceDefinition, LookupError> {
        let name = self
            .graph
            .parameter(&self.naming.parameter_id("default_document_manager"))
            .and_then(ParamValue::as_str)
            .unwrap_or_default();

        self.document_manager(name)
    }

    /// Manager names recovered from tagged definitions, in emission order.
    #[must_use]
    pub fn document_manager_names(&self) -> Vec<&'a str> {
        let prefix = format!("{}.", self.naming.prefix);

        self.graph
            .definitions()
            .filter(|definition| {
                definition
                    .tags
                    .iter()
                    .any(|tag| tag == DOCUMENT_MANAGER_TAG)
            })
            .filter_map(|definition| {
                definition
                    .id
                    .strip_prefix(prefix.as_str())?
                    .strip_suffix("_document_manager")
            })
            .collect()
    }
}
