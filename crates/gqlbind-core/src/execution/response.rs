use crate::execution::ServerError;
use serde_json::Value as Json;

/// The `{data, errors}` envelope returned for every executed request.
///
/// `errors` is always present, and empty when nothing went wrong.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Response {
    pub data: Json,
    pub errors: Vec<ServerError>,
}
impl Response {
    /// A response with `null` data and the single error `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: Json::Null,
            errors: vec![ServerError::new(message)],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> Json {
        serde_json::to_value(self)
            .expect("responses have string keys and JSON values")
    }
}
