use crate::introspection::InputValueView;
use crate::introspection::TypeView;
use crate::introspection::object_list;
use crate::schema::Schema;
use crate::types::FieldDef;
use crate::value::FieldValue;
use crate::value::HostObject;
use std::sync::Arc;

/// A `__Field`.
#[derive(Clone, Debug)]
pub struct FieldView {
    def: FieldDef,
    schema: Arc<Schema>,
}
impl FieldView {
    pub fn new(schema: Arc<Schema>, def: FieldDef) -> Self {
        Self {
            def,
            schema,
        }
    }

    pub fn args(&self) -> Vec<InputValueView> {
        self.def.arguments().values()
            .map(|arg| InputValueView::new(Arc::clone(&self.schema), arg.to_owned()))
            .collect()
    }

    pub fn def(&self) -> &FieldDef {
        &self.def
    }

    pub fn name(&self) -> &str {
        self.def.name()
    }

    pub fn type_view(&self) -> TypeView {
        TypeView::from_type_ref(Arc::clone(&self.schema), Arc::clone(self.def.type_ref()))
    }
}

impl HostObject for FieldView {
    fn type_name(&self) -> &str {
        "__Field"
    }

    fn read_member(&self, member: &str) -> Option<FieldValue> {
        Some(match member {
            "name" => self.def.name().into(),
            "description" => self.def.description().into(),
            "args" => object_list(self.args()),
            "type_" => FieldValue::object(self.type_view()),
            "is_deprecated" => self.def.deprecation().is_deprecated().into(),
            "deprecation_reason" => self.def.deprecation().reason().into(),
            _ => return None,
        })
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
