use crate::execution::FieldError;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;

/// The coerced arguments of one field, keyed by schema argument name.
///
/// Every declared argument is present once defaults are applied; arguments
/// that were neither provided nor defaulted hold `null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments(IndexMap<String, serde_json::Value>);
impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    /// Deserialize argument `name` into `T`. A missing argument deserializes
    /// from `null`, so `Option<T>` targets yield `None`.
    pub fn try_get<T: DeserializeOwned>(&self, name: &str) -> Result<T, FieldError> {
        let value = self.0.get(name).cloned().unwrap_or(serde_json::Value::Null);
        serde_json::from_value(value)
            .map_err(|err| FieldError::new(format!("invalid argument `{name}`: {err}")))
    }

    pub fn insert(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.0.insert(name.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
impl std::convert::From<IndexMap<String, serde_json::Value>> for Arguments {
    fn from(value: IndexMap<String, serde_json::Value>) -> Self {
        Self(value)
    }
}
impl<K: Into<String>> std::iter::FromIterator<(K, serde_json::Value)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, serde_json::Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}
