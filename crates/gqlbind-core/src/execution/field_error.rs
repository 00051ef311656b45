/// The error a resolver returns for its field. The engine records it in the
/// response together with the field's path and location.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub(crate) extensions: Option<serde_json::Map<String, serde_json::Value>>,
    pub(crate) message: String,
}
impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            extensions: None,
            message: message.into(),
        }
    }

    /// Attach an entry to the error's `extensions` object.
    pub fn with_extension(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extensions
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.into(), value);
        self
    }

    pub fn extensions(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.extensions.as_ref()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
impl<E: std::error::Error> std::convert::From<E> for FieldError {
    fn from(err: E) -> Self {
        Self::new(err.to_string())
    }
}
