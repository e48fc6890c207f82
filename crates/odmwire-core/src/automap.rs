//! Mapping-source resolution, including the auto-mapping merge.

use crate::error::CompileError;
use odmwire_config::{DocumentManagerConfig, WiringConfig};
use std::collections::BTreeSet;

///
/// ResolvedMapping
///
/// A mapping source with its document namespace fully resolved.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedMapping {
    pub bundle: String,
    pub namespace: String,
}

/// Effective mapping list for one manager: explicit mappings first, then —
/// when `auto_mapping` is set — every declared bundle no manager explicitly
/// claims, in bundle-declaration order.
pub fn effective_mappings(
    config: &WiringConfig,
    manager: &DocumentManagerConfig,
) -> Result<Vec<ResolvedMapping>, CompileError> {
    let mut resolved = Vec::with_capacity(manager.mappings.len());
    for mapping in &manager.mappings {
        let namespace = match &mapping.namespace {
            Some(namespace) => namespace.clone(),
            None => config
                .bundle(&mapping.bundle)
                .map(|bundle| bundle.document_namespace.clone())
                .ok_or_else(|| CompileError::UnknownMappingSource {
                    manager: manager.id.clone(),
                    bundle: mapping.bundle.clone(),
                })?,
        };

        resolved.push(ResolvedMapping {
            bundle: mapping.bundle.clone(),
            namespace,
        });
    }

    if manager.auto_mapping {
        let claimed = claimed_bundles(config);
        for bundle in &config.bundles {
            if claimed.contains(bundle.name.as_str()) {
                continue;
            }
            resolved.push(ResolvedMapping {
                bundle: bundle.name.clone(),
                namespace: bundle.document_namespace.clone(),
            });
        }
    }

    Ok(resolved)
}

// Bundles any manager claims by name; auto-mapping never touches these.
fn claimed_bundles(config: &WiringConfig) -> BTreeSet<&str> {
    config
        .document_managers
        .iter()
        .flat_map(|manager| manager.mappings.iter())
        .map(|mapping| mapping.bundle.as_str())
        .collect()
}
