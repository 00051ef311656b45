use crate::ast;
use crate::loc;
use crate::types::Deprecation;
use crate::types::InputValueDef;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::sync::Arc;

/// A [field](https://spec.graphql.org/October2021/#FieldDefinition) declared
/// on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    pub(crate) arguments: IndexMap<String, InputValueDef>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) deprecation: Deprecation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) owner: String,
    pub(crate) type_ref: Arc<TypeRef>,
}
impl FieldDef {
    pub(crate) fn from_ast(
        owner: &str,
        origin: Option<&std::path::Path>,
        field: &ast::schema::Field,
    ) -> Self {
        let qualified_name = format!("{owner}.{}", field.name);
        Self {
            arguments: field.arguments.iter().map(|arg| (
                arg.name.to_owned(),
                InputValueDef::from_ast(
                    &qualified_name,
                    loc::SchemaDefLocation::from_origin(origin, arg.position),
                    arg,
                ),
            )).collect(),
            def_location: loc::SchemaDefLocation::from_origin(origin, field.position),
            deprecation: Deprecation::from_ast(&field.directives),
            description: field.description.to_owned(),
            name: field.name.to_owned(),
            owner: owner.to_string(),
            type_ref: Arc::new(TypeRef::from_ast(&field.field_type)),
        }
    }

    /// The declared arguments, in declaration order.
    pub fn arguments(&self) -> &IndexMap<String, InputValueDef> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation(&self) -> &Deprecation {
        &self.deprecation
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Name of the object or interface type declaring this field.
    pub fn owner(&self) -> &str {
        self.owner.as_str()
    }

    pub fn type_ref(&self) -> &Arc<TypeRef> {
        &self.type_ref
    }
}
