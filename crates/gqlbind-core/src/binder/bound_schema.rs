use crate::binder::BindDiagnostic;
use crate::binder::BoundObject;
use crate::schema::Schema;
use std::sync::Arc;

/// The result of a successful binder run: one [`BoundObject`] per schema
/// object type, sorted by type name, plus the diagnostics collected on the
/// way.
#[derive(Clone, Debug)]
pub struct BoundSchema {
    pub(crate) diagnostics: Vec<BindDiagnostic>,
    pub(crate) objects: Vec<BoundObject>,
    pub(crate) schema: Arc<Schema>,
}
impl BoundSchema {
    pub fn diagnostics(&self) -> &[BindDiagnostic] {
        &self.diagnostics
    }

    pub fn object(&self, name: &str) -> Option<&BoundObject> {
        self.objects
            .binary_search_by(|obj| obj.name().cmp(name))
            .ok()
            .map(|idx| &self.objects[idx])
    }

    pub fn objects(&self) -> &[BoundObject] {
        &self.objects
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }
}
