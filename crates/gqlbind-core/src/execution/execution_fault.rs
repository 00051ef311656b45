use thiserror::Error;

/// A defect in the wiring between the bound schema and the engine. Unlike
/// field errors these abort the request: they mean the dispatch tables and
/// the schema have diverged.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutionFault {
    #[error("no resolver is registered for {object}.{field}")]
    MissingResolver {
        field: String,
        object: String,
    },

    #[error("root object type `{0}` is not bound")]
    UnboundRootObject(String),

    #[error("unknown field {object}.{field}")]
    UnknownField {
        field: String,
        object: String,
    },
}
