use crate::types::DefinitionKind;
use crate::value::CoercionError;
use thiserror::Error;

/// A binder-fatal problem. Binding stops at the first one.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BindError {
    #[error(
        "arguments `{argument1}` and `{argument2}` of {object}.{field} both map to \
        host name `{host_name}`"
    )]
    ArgumentNameCollision {
        argument1: String,
        argument2: String,
        field: String,
        host_name: String,
        object: String,
    },

    #[error(
        "{type_name} cannot be used as argument `{argument}` of {object}.{field}: \
        only input and scalar types are allowed (found {kind})"
    )]
    InvalidArgumentType {
        argument: String,
        field: String,
        kind: DefinitionKind,
        object: String,
        type_name: String,
    },

    #[error("default value for {object}.{field}({argument}:) is not valid: {err}")]
    InvalidDefaultValue {
        argument: String,
        err: CoercionError,
        field: String,
        object: String,
    },

    #[error("fields `{field1}` and `{field2}` of {object} both map to member `{member}`")]
    MemberNameCollision {
        field1: String,
        field2: String,
        member: String,
        object: String,
    },

    #[error("type `{type_name}` referenced by {referenced_by} is not defined")]
    UndefinedType {
        referenced_by: String,
        type_name: String,
    },
}
