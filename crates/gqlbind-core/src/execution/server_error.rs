use crate::ast;
use crate::execution::FieldError;
use crate::execution::PathSegment;
use serde_json::Value as Json;

/// One entry of a response's `errors` list. Serializes with its keys in
/// `message`, `locations`, `path`, `extensions` order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ServerError {
    pub message: String,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub locations: Vec<Location>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub path: Vec<PathSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Map<String, Json>>,
}
impl ServerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: vec![],
            extensions: None,
        }
    }

    pub(crate) fn from_field_error(
        err: FieldError,
        path: Vec<PathSegment>,
        position: ast::Pos,
    ) -> Self {
        Self {
            message: err.message,
            locations: vec![position.into()],
            path,
            extensions: err.extensions,
        }
    }

    pub fn to_json(&self) -> Json {
        serde_json::to_value(self)
            .expect("error entries have string keys and JSON values")
    }
}

/// A line/column position in the request document.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}
impl std::convert::From<ast::Pos> for Location {
    fn from(pos: ast::Pos) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
        }
    }
}
