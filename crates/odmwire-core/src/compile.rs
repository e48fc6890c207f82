//! The wiring compiler: a pure translation from a `WiringConfig` to a
//! `ServiceGraph`. No I/O, no shared state; identical input yields an
//! identical graph.

use crate::{
    automap::effective_mappings,
    error::CompileError,
    naming::{DOCUMENT_MANAGER_TAG, Naming, constructor},
    sink::{CompileEvent, CompileSink},
    validate::validate_input,
};
use odmwire_config::{CacheDriver, CacheKind, WiringConfig};
use odmwire_graph::{Alias, MethodCall, ParamValue, ServiceArg, ServiceDefinition, ServiceGraph};
use std::collections::{BTreeMap, BTreeSet};

/// Compile with the default naming scheme.
pub fn compile(config: &WiringConfig) -> Result<ServiceGraph, CompileError> {
    Compiler::new().compile(config)
}

///
/// Compiler
///
/// Holds only the naming scheme; safe to reuse across compilations and
/// across threads.
///

#[derive(Clone, Debug, Default)]
pub struct Compiler {
    naming: Naming,
}

impl Compiler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_naming(naming: Naming) -> Self {
        Self { naming }
    }

    #[must_use]
    pub const fn naming(&self) -> &Naming {
        &self.naming
    }

    pub fn compile(&self, config: &WiringConfig) -> Result<ServiceGraph, CompileError> {
        self.compile_inner(config, None)
    }

    /// Compile while routing one event per emitted item through `sink`.
    pub fn compile_with_sink(
        &self,
        config: &WiringConfig,
        sink: &dyn CompileSink,
    ) -> Result<ServiceGraph, CompileError> {
        self.compile_inner(config, Some(sink))
    }

    fn compile_inner(
        &self,
        config: &WiringConfig,
        sink: Option<&dyn CompileSink>,
    ) -> Result<ServiceGraph, CompileError> {
        validate_input(config)?;

        let naming = &self.naming;

        // First-declared wins when no explicit default is set.
        let default_connection = config
            .default_connection
            .clone()
            .unwrap_or_else(|| config.connections[0].id.clone());
        let default_manager = config
            .default_document_manager
            .clone()
            .unwrap_or_else(|| config.document_managers[0].id.clone());
        let default_database = config
            .default_database
            .clone()
            .unwrap_or_else(|| "default".to_string());

        let mut graph = ServiceGraph::new();

        self.set_parameter(
            &mut graph,
            sink,
            "default_connection",
            ParamValue::str(&default_connection),
        );
        self.set_parameter(
            &mut graph,
            sink,
            "default_document_manager",
            ParamValue::str(&default_manager),
        );
        self.set_parameter(
            &mut graph,
            sink,
            "default_database",
            ParamValue::str(&default_database),
        );
        for (key, value) in &config.options {
            self.set_parameter(&mut graph, sink, key, value.clone());
        }

        // Ids the host must provide at runtime; emitted as synthetic
        // placeholders at the end so the graph stays closed.
        let mut external_ids: Vec<String> = Vec::new();
        let mut seen_external = BTreeSet::new();
        let mut note_external = |id: &str| {
            if seen_external.insert(id.to_string()) {
                external_ids.push(id.to_string());
            }
        };

        // Per-connection services. The configuration is keyed by connection
        // id and assembled from every manager bound to that connection.
        for connection in &config.connections {
            let mut configuration = ServiceDefinition::new(
                naming.configuration_id(&connection.id),
                constructor::CONFIGURATION,
            );

            let mut namespaces: BTreeMap<String, ParamValue> = BTreeMap::new();
            for manager in config
                .document_managers
                .iter()
                .filter(|manager| manager.connection_id() == connection.id)
            {
                for mapping in effective_mappings(config, manager)? {
                    namespaces.insert(mapping.bundle, ParamValue::Str(mapping.namespace));
                }
            }
            if !namespaces.is_empty() {
                configuration.push_call(MethodCall::new(
                    "setDocumentNamespaces",
                    vec![ServiceArg::Value(ParamValue::Map(namespaces))],
                ));
            }

            for manager in config
                .document_managers
                .iter()
                .filter(|manager| manager.connection_id() == connection.id)
            {
                let database = manager.database.as_deref().unwrap_or(&default_database);
                configuration.push_call(MethodCall::new(
                    "setDefaultDB",
                    vec![ServiceArg::Value(ParamValue::str(database))],
                ));

                if let Some(factory) = &manager.repository_factory {
                    note_external(factory);
                    configuration.push_call(MethodCall::new(
                        "setRepositoryFactory",
                        vec![ServiceArg::reference(factory.as_str())],
                    ));
                }
                if let Some(factory) = &manager.persistent_collection_factory {
                    note_external(factory);
                    configuration.push_call(MethodCall::new(
                        "setPersistentCollectionFactory",
                        vec![ServiceArg::reference(factory.as_str())],
                    ));
                }

                for kind in CacheKind::ALL {
                    configuration.push_call(MethodCall::new(
                        kind.setter(),
                        vec![ServiceArg::reference(
                            naming.cache_alias_id(&manager.id, kind),
                        )],
                    ));
                }
            }

            let connection_def = ServiceDefinition::new(
                naming.connection_id(&connection.id),
                constructor::CONNECTION,
            )
            .with_arg(ServiceArg::Value(
                connection
                    .server
                    .as_deref()
                    .map_or(ParamValue::Null, ParamValue::str),
            ))
            .with_arg(ServiceArg::Value(ParamValue::Map(
                connection.options.clone(),
            )))
            .with_arg(ServiceArg::reference(
                naming.configuration_id(&connection.id),
            ));

            self.emit_definition(&mut graph, sink, connection_def)?;
            self.emit_definition(&mut graph, sink, configuration)?;
            self.emit_definition(
                &mut graph,
                sink,
                ServiceDefinition::new(
                    naming.event_manager_id(&connection.id),
                    constructor::EVENT_MANAGER,
                ),
            )?;
        }

        // Per-manager cache wiring and the manager services themselves.
        let mut emitted_providers = BTreeSet::new();
        for manager in &config.document_managers {
            for kind in CacheKind::ALL {
                let target = match manager.cache_driver(kind) {
                    CacheDriver::Service { id } => {
                        note_external(id);
                        id.clone()
                    }
                    CacheDriver::Provider { id } => {
                        let provider_id = naming.provider_id(id);
                        if emitted_providers.insert(provider_id.clone()) {
                            self.emit_definition(
                                &mut graph,
                                sink,
                                ServiceDefinition::new(
                                    provider_id.as_str(),
                                    constructor::CACHE_PROVIDER,
                                )
                                .with_arg(ServiceArg::Value(ParamValue::str(id.as_str()))),
                            )?;
                        }
                        provider_id
                    }
                    CacheDriver::Array => {
                        let cache_id = naming.array_cache_id(&manager.id, kind);
                        self.emit_definition(
                            &mut graph,
                            sink,
                            ServiceDefinition::new(cache_id.as_str(), constructor::ARRAY_CACHE),
                        )?;
                        cache_id
                    }
                };

                self.emit_alias(
                    &mut graph,
                    sink,
                    Alias::new(naming.cache_alias_id(&manager.id, kind), target),
                )?;
            }

            let connection = manager.connection_id();
            let manager_def = ServiceDefinition::new(
                naming.document_manager_id(&manager.id),
                constructor::DOCUMENT_MANAGER,
            )
            .with_args([
                ServiceArg::reference(naming.connection_id(connection)),
                ServiceArg::reference(naming.configuration_id(connection)),
                ServiceArg::reference(naming.event_manager_id(connection)),
            ])
            .public()
            .tagged(DOCUMENT_MANAGER_TAG);

            self.emit_definition(&mut graph, sink, manager_def)?;
        }

        // Root registry entry point.
        let connection_map: BTreeMap<String, ParamValue> = config
            .connections
            .iter()
            .map(|c| (c.id.clone(), ParamValue::Str(naming.connection_id(&c.id))))
            .collect();
        let manager_map: BTreeMap<String, ParamValue> = config
            .document_managers
            .iter()
            .map(|m| {
                (
                    m.id.clone(),
                    ParamValue::Str(naming.document_manager_id(&m.id)),
                )
            })
            .collect();
        let root = ServiceDefinition::new(naming.root_id.as_str(), constructor::MANAGER_REGISTRY)
            .with_args([
                ServiceArg::Value(ParamValue::Map(connection_map)),
                ServiceArg::Value(ParamValue::Map(manager_map)),
                ServiceArg::Value(ParamValue::str(&default_connection)),
                ServiceArg::Value(ParamValue::str(&default_manager)),
            ])
            .public();
        self.emit_definition(&mut graph, sink, root)?;

        // Default pointers. Skipped when the alias id would equal its target
        // (an entry literally named `default`): the name already resolves.
        let default_connection_service = naming.connection_id(&default_connection);
        let default_connection_alias = naming.default_connection_alias();
        if default_connection_alias != default_connection_service {
            self.emit_alias(
                &mut graph,
                sink,
                Alias::new(default_connection_alias, default_connection_service).public(),
            )?;
        }

        let default_manager_service = naming.document_manager_id(&default_manager);
        let default_manager_alias = naming.default_document_manager_alias();
        if default_manager_alias != default_manager_service {
            self.emit_alias(
                &mut graph,
                sink,
                Alias::new(default_manager_alias, default_manager_service.as_str()).public(),
            )?;
        }

        // Canonical manager alias, and the frozen legacy id chained onto it
        // so both resolve to the same definition with the same visibility.
        self.emit_alias(
            &mut graph,
            sink,
            Alias::new(
                naming.document_manager_alias(),
                default_manager_service.as_str(),
            )
            .public(),
        )?;
        self.emit_alias(
            &mut graph,
            sink,
            Alias::new(
                naming.legacy_manager_alias.as_str(),
                naming.document_manager_alias(),
            )
            .public(),
        )?;

        // Host-provided services referenced above, declared synthetically so
        // every reference in the graph resolves.
        for id in external_ids {
            if !graph.contains_id(&id) {
                self.emit_definition(
                    &mut graph,
                    sink,
                    ServiceDefinition::new(id, constructor::SYNTHETIC),
                )?;
            }
        }

        graph.verify()?;
        if let Some(sink) = sink {
            sink.record(CompileEvent::Verified {
                definitions: graph.definition_count(),
                aliases: graph.alias_count(),
            });
        }

        Ok(graph)
    }

    fn emit_definition(
        &self,
        graph: &mut ServiceGraph,
        sink: Option<&dyn CompileSink>,
        definition: ServiceDefinition,
    ) -> Result<(), CompileError> {
        let id = definition.id.clone();
        graph.insert_definition(definition)?;
        if let Some(sink) = sink {
            sink.record(CompileEvent::DefinitionEmitted { id: &id });
        }

        Ok(())
    }

    fn emit_alias(
        &self,
        graph: &mut ServiceGraph,
        sink: Option<&dyn CompileSink>,
        alias: Alias,
    ) -> Result<(), CompileError> {
        let id = alias.id.clone();
        let target = alias.target.clone();
        graph.insert_alias(alias)?;
        if let Some(sink) = sink {
            sink.record(CompileEvent::AliasEmitted {
                id: &id,
                target: &target,
            });
        }

        Ok(())
    }

    fn set_parameter(
        &self,
        graph: &mut ServiceGraph,
        sink: Option<&dyn CompileSink>,
        key: &str,
        value: ParamValue,
    ) {
        let id = self.naming.parameter_id(key);
        graph.set_parameter(id.as_str(), value);
        if let Some(sink) = sink {
            sink.record(CompileEvent::ParameterSet { key: &id });
        }
    }
}
