use crate::introspection::InputValueView;
use crate::introspection::object_list;
use crate::schema::Schema;
use crate::types::DirectiveDef;
use crate::value::FieldValue;
use crate::value::HostObject;
use std::sync::Arc;

/// A `__Directive`.
#[derive(Clone, Debug)]
pub struct DirectiveView {
    def: DirectiveDef,
    schema: Arc<Schema>,
}
impl DirectiveView {
    pub fn new(schema: Arc<Schema>, def: DirectiveDef) -> Self {
        Self {
            def,
            schema,
        }
    }
}

impl HostObject for DirectiveView {
    fn type_name(&self) -> &str {
        "__Directive"
    }

    fn read_member(&self, member: &str) -> Option<FieldValue> {
        Some(match member {
            "name" => self.def.name().into(),
            "description" => self.def.description().into(),
            "locations" => FieldValue::list(
                self.def.locations().into_iter().map(FieldValue::enum_value),
            ),
            "args" => object_list(
                self.def.arguments().values()
                    .map(|arg| InputValueView::new(Arc::clone(&self.schema), arg.to_owned())),
            ),
            "is_repeatable" => self.def.is_repeatable().into(),
            _ => return None,
        })
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
