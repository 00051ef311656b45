use crate::value::CoercionError;
use thiserror::Error;

/// Problems with a request as a whole. These are reported as a response with
/// `null` data and a single error, before any field is resolved.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("Variable \"${name}\" got invalid value: {err}")]
    InvalidVariable {
        name: String,
        err: CoercionError,
    },

    #[error("Variable \"${name}\" of required type \"{type_name}\" was not provided.")]
    MissingVariable {
        name: String,
        type_name: String,
    },

    #[error("Must provide operation name if query contains multiple operations.")]
    MultipleOperationsWithoutName,

    #[error("Must provide an operation.")]
    NoOperation,

    #[error("Schema is not configured for {0} operations.")]
    UnsupportedOperation(crate::operation::OperationKind),

    #[error("Unknown operation named \"{0}\".")]
    UnknownOperation(String),
}
