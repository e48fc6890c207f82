//! Input validation pass: presence, uniqueness, referential integrity.
//! Runs before any emission so failures never leave partial output.

use crate::error::CompileError;
use odmwire_config::WiringConfig;
use std::collections::BTreeSet;

pub(crate) fn validate_input(config: &WiringConfig) -> Result<(), CompileError> {
    if config.connections.is_empty() {
        return Err(CompileError::NoConnections);
    }
    if config.document_managers.is_empty() {
        return Err(CompileError::NoDocumentManagers);
    }

    let mut connection_ids = BTreeSet::new();
    for connection in &config.connections {
        if !connection_ids.insert(connection.id.as_str()) {
            return Err(CompileError::DuplicateIdentifier {
                id: connection.id.clone(),
            });
        }
    }

    let mut manager_ids = BTreeSet::new();
    for manager in &config.document_managers {
        if !manager_ids.insert(manager.id.as_str()) {
            return Err(CompileError::DuplicateIdentifier {
                id: manager.id.clone(),
            });
        }

        let connection = manager.connection_id();
        if !connection_ids.contains(connection) {
            return Err(CompileError::UnknownConnection {
                manager: manager.id.clone(),
                connection: connection.to_string(),
            });
        }
    }

    Ok(())
}
