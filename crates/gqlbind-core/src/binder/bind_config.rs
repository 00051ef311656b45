use indexmap::IndexMap;

/// Operator-supplied overrides for the [`Binder`](crate::binder::Binder),
/// usually loaded from a JSON file:
///
/// ```json
/// {
///   "models": {
///     "Todo": { "model": "app::Todo", "fields": { "owner": { "resolver": true } } }
///   },
///   "scalars": { "Time": ["chrono::DateTime"] }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindConfig {
    /// Per schema type: the implementation type to bind against and per-field
    /// overrides.
    pub models: IndexMap<String, ModelConfig>,

    /// Per scalar: the host type names accepted for it. Replaces the built-in
    /// table for that scalar.
    pub scalars: IndexMap<String, Vec<String>>,
}
impl BindConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Bind schema type `type_name` against the implementation type `model`.
    pub fn with_model(mut self, type_name: impl Into<String>, model: impl Into<String>) -> Self {
        self.models.entry(type_name.into()).or_default().model = Some(model.into());
        self
    }

    /// Require a hand-written resolver for `type_name.field_name`.
    pub fn with_forced_resolver(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        self.models
            .entry(type_name.into())
            .or_default()
            .fields
            .insert(field_name.into(), FieldConfig { resolver: true });
        self
    }

    pub fn model_for(&self, type_name: &str) -> Option<&str> {
        self.models.get(type_name)?.model.as_deref()
    }

    pub fn is_resolver_forced(&self, type_name: &str, field_name: &str) -> bool {
        self.models.get(type_name)
            .and_then(|model| model.fields.get(field_name))
            .is_some_and(|field| field.resolver)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    pub fields: IndexMap<String, FieldConfig>,
    pub model: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    pub resolver: bool,
}
