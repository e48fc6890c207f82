use crate::{alias::Alias, definition::ServiceDefinition, value::ParamValue};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error as ThisError;

///
/// GraphError
///

#[derive(Debug, ThisError)]
pub enum GraphError {
    #[error("reference `{id}` from `{referenced_by}` resolves to no definition or alias")]
    DanglingReference { id: String, referenced_by: String },

    #[error("duplicate identifier `{id}`")]
    DuplicateIdentifier { id: String },
}

///
/// ServiceGraph
///
/// Insertion-ordered set of service definitions, aliases, and parameters.
/// Definitions and aliases share one id namespace; duplicates are rejected
/// at insertion and `verify` rejects dangling references. Once returned by
/// the compiler the graph only hands out shared references.
///

#[derive(Debug, Default, Serialize)]
pub struct ServiceGraph {
    definitions: Vec<ServiceDefinition>,
    aliases: Vec<Alias>,
    parameters: BTreeMap<String, ParamValue>,

    #[serde(skip)]
    definition_index: HashMap<String, usize>,
    #[serde(skip)]
    alias_index: HashMap<String, usize>,
}

impl ServiceGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, rejecting any id already taken.
    pub fn insert_definition(&mut self, definition: ServiceDefinition) -> Result<(), GraphError> {
        if self.contains_id(&definition.id) {
            return Err(GraphError::DuplicateIdentifier { id: definition.id });
        }

        self.definition_index
            .insert(definition.id.clone(), self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    /// Register an alias, rejecting any id already taken.
    pub fn insert_alias(&mut self, alias: Alias) -> Result<(), GraphError> {
        if self.contains_id(&alias.id) {
            return Err(GraphError::DuplicateIdentifier { id: alias.id });
        }

        self.alias_index.insert(alias.id.clone(), self.aliases.len());
        self.aliases.push(alias);
        Ok(())
    }

    /// Set a parameter; parameters live in their own namespace and the last
    /// write wins.
    pub fn set_parameter(&mut self, key: impl Into<String>, value: ParamValue) {
        self.parameters.insert(key.into(), value);
    }

    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.definition_index.contains_key(id) || self.alias_index.contains_key(id)
    }

    #[must_use]
    pub fn get_definition(&self, id: &str) -> Option<&ServiceDefinition> {
        self.definition_index
            .get(id)
            .map(|&index| &self.definitions[index])
    }

    #[must_use]
    pub fn get_alias(&self, id: &str) -> Option<&Alias> {
        self.alias_index.get(id).map(|&index| &self.aliases[index])
    }

    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&ParamValue> {
        self.parameters.get(key)
    }

    /// Definitions in insertion order.
    pub fn definitions(&self) -> impl Iterator<Item = &ServiceDefinition> {
        self.definitions.iter()
    }

    /// Aliases in insertion order.
    pub fn aliases(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.iter()
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Resolve an id through alias indirection to a concrete definition.
    /// Returns None for unknown ids and for alias cycles.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&ServiceDefinition> {
        let mut current = id;
        // Each hop consumes one alias; more hops than aliases means a cycle.
        for _ in 0..=self.aliases.len() {
            if let Some(definition) = self.get_definition(current) {
                return Some(definition);
            }
            current = &self.get_alias(current)?.target;
        }

        None
    }

    /// Check every reference and alias target against the id namespace.
    pub fn verify(&self) -> Result<(), GraphError> {
        for definition in &self.definitions {
            for arg in definition.all_args() {
                if let Some(id) = arg.as_ref_id() {
                    if !self.contains_id(id) {
                        return Err(GraphError::DanglingReference {
                            id: id.to_string(),
                            referenced_by: definition.id.clone(),
                        });
                    }
                }
            }
        }

        for alias in &self.aliases {
            if !self.contains_id(&alias.target) {
                return Err(GraphError::DanglingReference {
                    id: alias.target.clone(),
                    referenced_by: alias.id.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ServiceArg;

    fn definition(id: &str) -> ServiceDefinition {
        ServiceDefinition::new(id, "test")
    }

    #[test]
    fn duplicate_definition_id_is_rejected() {
        let mut graph = ServiceGraph::new();
        graph
            .insert_definition(definition("svc"))
            .expect("first insert should succeed");

        let err = graph
            .insert_definition(definition("svc"))
            .expect_err("second insert with same id should fail");
        assert!(
            err.to_string().contains("duplicate identifier `svc`"),
            "error should name the colliding id, got: {err}"
        );
    }

    #[test]
    fn alias_and_definition_share_one_id_namespace() {
        let mut graph = ServiceGraph::new();
        graph
            .insert_definition(definition("svc"))
            .expect("definition insert should succeed");

        graph
            .insert_alias(Alias::new("svc", "anywhere"))
            .expect_err("alias colliding with a definition id should fail");
    }

    #[test]
    fn resolve_chases_alias_chains_to_a_definition() {
        let mut graph = ServiceGraph::new();
        graph.insert_definition(definition("target")).unwrap();
        graph.insert_alias(Alias::new("inner", "target")).unwrap();
        graph.insert_alias(Alias::new("outer", "inner")).unwrap();

        let resolved = graph
            .resolve("outer")
            .expect("two-hop alias chain should resolve");
        assert_eq!(resolved.id, "target");
    }

    #[test]
    fn resolve_returns_none_on_alias_cycle() {
        let mut graph = ServiceGraph::new();
        graph.insert_alias(Alias::new("a", "b")).unwrap();
        graph.insert_alias(Alias::new("b", "a")).unwrap();

        assert!(graph.resolve("a").is_none());
    }

    #[test]
    fn verify_reports_the_dangling_reference_and_its_holder() {
        let mut graph = ServiceGraph::new();
        graph
            .insert_definition(definition("svc").with_arg(ServiceArg::reference("missing")))
            .unwrap();

        let err = graph.verify().expect_err("dangling ref should fail verify");
        match err {
            GraphError::DanglingReference { id, referenced_by } => {
                assert_eq!(id, "missing");
                assert_eq!(referenced_by, "svc");
            }
            other => panic!("expected DanglingReference, got: {other}"),
        }
    }

    #[test]
    fn verify_accepts_refs_that_resolve_through_aliases() {
        let mut graph = ServiceGraph::new();
        graph.insert_definition(definition("target")).unwrap();
        graph.insert_alias(Alias::new("pointer", "target")).unwrap();
        graph
            .insert_definition(definition("svc").with_arg(ServiceArg::reference("pointer")))
            .unwrap();

        graph
            .verify()
            .expect("reference to an alias should count as resolved");
    }

    #[test]
    fn insertion_order_is_preserved_for_iteration() {
        let mut graph = ServiceGraph::new();
        for id in ["c", "a", "b"] {
            graph.insert_definition(definition(id)).unwrap();
        }

        let ids: Vec<&str> = graph.definitions().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn graph_serializes_without_internal_indexes() {
        let mut graph = ServiceGraph::new();
        graph.insert_definition(definition("svc")).unwrap();
        graph.set_parameter("key", ParamValue::str("value"));

        let json = serde_json::to_value(&graph).expect("graph should serialize");
        assert!(json.get("definitions").is_some());
        assert!(json.get("parameters").is_some());
        assert!(json.get("definition_index").is_none());
    }
}
