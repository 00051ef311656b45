use indexmap::IndexMap;

/// Variable values supplied alongside a request, keyed by name without the
/// leading `$`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Variables(IndexMap<String, serde_json::Value>);
impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.0.insert(name.into(), value);
    }

    /// Builder-style [`insert()`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.insert(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl<K: Into<String>> std::iter::FromIterator<(K, serde_json::Value)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, serde_json::Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}
