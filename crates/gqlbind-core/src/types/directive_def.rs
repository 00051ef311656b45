use crate::ast;
use crate::loc;
use crate::types::InputValueDef;
use indexmap::IndexMap;

/// A directive declaration, either one of the built-ins (`@skip`, `@include`,
/// `@deprecated`, `@specifiedBy`) or a custom directive from the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDef {
    pub(crate) arguments: IndexMap<String, InputValueDef>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<ast::schema::DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl DirectiveDef {
    pub(crate) fn from_ast(
        def_location: loc::SchemaDefLocation,
        def: &ast::schema::DirectiveDefinition,
    ) -> Self {
        let owner = format!("@{}", def.name);
        Self {
            arguments: def.arguments.iter().map(|arg| (
                arg.name.to_owned(),
                InputValueDef::from_ast(&owner, def_location.clone(), arg),
            )).collect(),
            def_location,
            description: def.description.to_owned(),
            locations: def.locations.to_owned(),
            name: def.name.to_owned(),
            repeatable: def.repeatable,
        }
    }

    pub fn arguments(&self) -> &IndexMap<String, InputValueDef> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The locations this directive may be applied at, as their introspection
    /// names (`FIELD`, `FRAGMENT_SPREAD`, ...).
    pub fn locations(&self) -> Vec<&'static str> {
        self.locations.iter().map(|location| location.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }
}
