use crate::binder::Member;
use crate::binder::MemberCatalog;
use indexmap::IndexMap;

/// A [`MemberCatalog`] populated through registration calls or deserialized
/// from JSON of the form `{ "<impl type>": [<member>, ...] }`.
///
/// ```
/// use gqlbind_core::binder::HostType;
/// use gqlbind_core::binder::Member;
/// use gqlbind_core::binder::MemberCatalog;
/// use gqlbind_core::binder::StaticCatalog;
///
/// let catalog = StaticCatalog::new()
///     .with_type("Todo", vec![Member::field("id", HostType::named("i32"))]);
/// assert_eq!(catalog.members("Todo").map(|m| m.len()), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct StaticCatalog {
    types: IndexMap<String, Vec<Member>>,
}
impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Register (or replace) the members of `impl_type`.
    pub fn register(&mut self, impl_type: impl Into<String>, members: Vec<Member>) {
        self.types.insert(impl_type.into(), members);
    }

    pub fn with_type(mut self, impl_type: impl Into<String>, members: Vec<Member>) -> Self {
        self.register(impl_type, members);
        self
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}
impl MemberCatalog for StaticCatalog {
    fn members(&self, impl_type: &str) -> Option<&[Member]> {
        self.types.get(impl_type).map(Vec::as_slice)
    }
}
