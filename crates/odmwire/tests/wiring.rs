//! Whole-pipeline coverage: TOML document in, resolved services out.

use odmwire::{GraphLookup, Naming, ParamValue, ServiceArg, WiringConfig, compile};

const BAD_WIRING: &str = r#"
    [[connections]]
    id = "cn1"

    [document_mangers]
"#;

const FULL_WIRING: &str = r#"
    default_database = "app"
    default_document_manager = "dm2"

    [options]
    proxy-namespace = "Proxies"

    [[connections]]
    id = "cn1"
    server = "mongodb://primary:27017"

    [connections.options]
    connect = true

    [[connections]]
    id = "cn2"

    [[bundles]]
    name = "CatalogBundle"
    document_namespace = "catalog::documents"

    [[bundles]]
    name = "BillingBundle"
    document_namespace = "billing::documents"

    [[document_managers]]
    id = "dm1"
    connection = "cn1"
    auto_mapping = true
    metadata_cache_driver = { type = "provider", id = "metadata_cache" }

    [[document_managers]]
    id = "dm2"
    connection = "cn2"
    database = "billing"
    repository_factory = "billing_repository_factory"

    [[document_managers.mappings]]
    bundle = "BillingBundle"
"#;

#[test]
fn malformed_documents_are_rejected_by_the_loader() {
    let err = WiringConfig::from_toml_str(BAD_WIRING)
        .expect_err("misspelled top-level table should be rejected");
    assert!(
        err.to_string().contains("wiring config"),
        "loader error should identify itself, got: {err}"
    );
}

#[test]
fn a_full_document_compiles_and_resolves_end_to_end() {
    let config = WiringConfig::from_toml_str(FULL_WIRING).expect("document should load");
    let graph = compile(&config).expect("document should compile");
    graph.verify().expect("compiled graph should be closed");

    let naming = Naming::default();
    let lookup = GraphLookup::new(&graph, &naming);

    // dm2 is the configured default.
    let default = lookup
        .default_document_manager()
        .expect("default manager should resolve");
    assert_eq!(default.id, "doctrine_mongodb.odm.dm2_document_manager");
    assert_eq!(lookup.document_manager_names(), vec!["dm1", "dm2"]);

    // Auto-mapping gave dm1 the bundle dm2 did not claim.
    let cn1_configuration = graph
        .get_definition("doctrine_mongodb.odm.cn1_configuration")
        .expect("cn1 configuration should exist");
    let namespaces = cn1_configuration
        .calls
        .iter()
        .find(|call| call.method == "setDocumentNamespaces")
        .expect("cn1 should register namespaces");
    let map = match &namespaces.args[..] {
        [ServiceArg::Value(ParamValue::Map(map))] => map,
        other => panic!("unexpected namespace args: {other:?}"),
    };
    assert_eq!(
        map.get("CatalogBundle"),
        Some(&ParamValue::str("catalog::documents"))
    );
    assert!(!map.contains_key("BillingBundle"));

    // The hyphenated option landed on the normalized parameter.
    assert_eq!(
        graph.parameter("doctrine_mongodb.odm.proxy_namespace"),
        Some(&ParamValue::str("Proxies"))
    );

    // Provider-driven metadata cache for dm1.
    let alias = graph
        .get_alias("doctrine.orm.dm1_metadata_cache")
        .expect("dm1 metadata cache alias should exist");
    assert_eq!(alias.target, "doctrine_cache.providers.metadata_cache");

    // The host-provided repository factory resolves inside the graph.
    assert!(graph.resolve("billing_repository_factory").is_some());
}
