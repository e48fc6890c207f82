use odmwire_graph::GraphError;
use thiserror::Error as ThisError;

///
/// CompileError
///
/// Compilation aborts on the first error; there is no partial output.
/// Every variant carries the offending identifier(s) so the host can
/// present a precise configuration error.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum CompileError {
    #[error("reference `{id}` from `{referenced_by}` resolves to no definition or alias")]
    DanglingReference { id: String, referenced_by: String },

    #[error("duplicate identifier `{id}`")]
    DuplicateIdentifier { id: String },

    #[error("at least one connection must be configured")]
    NoConnections,

    #[error("at least one document manager must be configured")]
    NoDocumentManagers,

    #[error("document manager `{manager}` references unknown connection `{connection}`")]
    UnknownConnection { manager: String, connection: String },

    #[error(
        "document manager `{manager}` maps bundle `{bundle}`, which is not declared and has no explicit namespace"
    )]
    UnknownMappingSource { manager: String, bundle: String },
}

impl From<GraphError> for CompileError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::DanglingReference { id, referenced_by } => {
                Self::DanglingReference { id, referenced_by }
            }
            GraphError::DuplicateIdentifier { id } => Self::DuplicateIdentifier { id },
        }
    }
}
