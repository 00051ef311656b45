use crate::binder::BoundField;
use indexmap::IndexMap;

/// Binder output for one schema object type.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundObject {
    pub(crate) disable_concurrency: bool,
    pub(crate) fields: IndexMap<String, BoundField>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) model: String,
    pub(crate) name: String,
    pub(crate) root: bool,
}
impl BoundObject {
    /// Set only on the Mutation root: its fields resolve one after another,
    /// in document order.
    pub fn disable_concurrency(&self) -> bool {
        self.disable_concurrency
    }

    pub fn field(&self, name: &str) -> Option<&BoundField> {
        self.fields.get(name)
    }

    /// Bound fields in schema declaration order.
    pub fn fields(&self) -> &IndexMap<String, BoundField> {
        &self.fields
    }

    /// Interfaces the object declares it satisfies.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    /// The implementation type the object was bound against.
    pub fn model(&self) -> &str {
        self.model.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_root(&self) -> bool {
        self.root
    }
}
