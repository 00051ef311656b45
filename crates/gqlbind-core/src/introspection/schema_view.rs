use crate::introspection::DirectiveView;
use crate::introspection::TypeView;
use crate::introspection::object_list;
use crate::schema::Schema;
use crate::value::FieldValue;
use crate::value::HostObject;
use std::sync::Arc;

/// The `__Schema` object returned by the `__schema` root field.
#[derive(Clone, Debug)]
pub struct SchemaView {
    schema: Arc<Schema>,
}
impl SchemaView {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self { schema }
    }

    fn root_type(&self, name: Option<&str>) -> FieldValue {
        name.and_then(|name| TypeView::from_definition(Arc::clone(&self.schema), name))
            .map_or(FieldValue::Null, FieldValue::object)
    }
}

impl HostObject for SchemaView {
    fn type_name(&self) -> &str {
        "__Schema"
    }

    fn read_member(&self, member: &str) -> Option<FieldValue> {
        use crate::operation::OperationKind;

        Some(match member {
            "types" => object_list(
                self.schema.types().keys()
                    .filter_map(|name| TypeView::from_definition(Arc::clone(&self.schema), name)),
            ),
            "query_type" => self.root_type(self.schema.root_type_name(OperationKind::Query)),
            "mutation_type" =>
                self.root_type(self.schema.root_type_name(OperationKind::Mutation)),
            "subscription_type" =>
                self.root_type(self.schema.root_type_name(OperationKind::Subscription)),
            "directives" => object_list(
                self.schema.directives().values()
                    .map(|def| DirectiveView::new(Arc::clone(&self.schema), def.to_owned())),
            ),
            _ => return None,
        })
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
