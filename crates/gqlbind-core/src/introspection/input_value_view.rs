use crate::introspection::TypeView;
use crate::schema::Schema;
use crate::types::InputValueDef;
use crate::value::FieldValue;
use crate::value::HostObject;
use std::sync::Arc;

/// An `__InputValue`: a field argument, directive argument or input field.
#[derive(Clone, Debug)]
pub struct InputValueView {
    def: InputValueDef,
    schema: Arc<Schema>,
}
impl InputValueView {
    pub fn new(schema: Arc<Schema>, def: InputValueDef) -> Self {
        Self {
            def,
            schema,
        }
    }

    /// The default literal rendered as GraphQL source text.
    pub fn default_value(&self) -> Option<String> {
        self.def.default_value().map(ToString::to_string)
    }
}

impl HostObject for InputValueView {
    fn type_name(&self) -> &str {
        "__InputValue"
    }

    fn read_member(&self, member: &str) -> Option<FieldValue> {
        Some(match member {
            "name" => self.def.name().into(),
            "description" => self.def.description().into(),
            "type_" => FieldValue::object(TypeView::from_type_ref(
                Arc::clone(&self.schema),
                Arc::clone(self.def.type_ref()),
            )),
            "default_value" => self.default_value().into(),
            _ => return None,
        })
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
