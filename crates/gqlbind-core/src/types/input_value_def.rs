use crate::ast;
use crate::loc;
use crate::types::TypeRef;
use std::sync::Arc;

/// An [input value](https://spec.graphql.org/October2021/#InputValueDefinition)
/// declaration: a field argument, a directive argument, or a field of an input
/// object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDef {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<ast::Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) owner: String,
    pub(crate) type_ref: Arc<TypeRef>,
}
impl InputValueDef {
    pub(crate) fn from_ast(
        owner: &str,
        def_location: loc::SchemaDefLocation,
        input_value: &ast::schema::InputValue,
    ) -> Self {
        Self {
            def_location,
            default_value: input_value.default_value.to_owned(),
            description: input_value.description.to_owned(),
            name: input_value.name.to_owned(),
            owner: owner.to_string(),
            type_ref: Arc::new(TypeRef::from_ast(&input_value.value_type)),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The default literal declared in the schema, if any. This is the raw
    /// literal; the [`Binder`](crate::binder::Binder) coerces it against
    /// [`Self::type_ref()`] once, at bind time.
    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Qualified name of the element declaring this input value, e.g.
    /// `Query.todo` for a field argument or `TodoInput` for an input field.
    pub fn owner(&self) -> &str {
        self.owner.as_str()
    }

    pub fn type_ref(&self) -> &Arc<TypeRef> {
        &self.type_ref
    }
}
