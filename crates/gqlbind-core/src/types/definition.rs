use crate::loc;
use crate::types::DefinitionKind;
use crate::types::EnumValueDef;
use crate::types::FieldDef;
use crate::types::InputValueDef;
use indexmap::IndexMap;

/// One named type in a [`Schema`](crate::schema::Schema).
///
/// Only object and interface definitions declare [`fields()`](Self::fields);
/// only objects (and interfaces implementing other interfaces) declare
/// [`interfaces()`](Self::interfaces). Accessors for the parts a kind does not
/// have return empty collections.
#[derive(Clone, Debug, PartialEq)]
pub struct Definition {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) enum_values: IndexMap<String, EnumValueDef>,
    pub(crate) fields: IndexMap<String, FieldDef>,
    pub(crate) input_fields: IndexMap<String, InputValueDef>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) kind: DefinitionKind,
    pub(crate) name: String,
    pub(crate) union_members: Vec<String>,
}
impl Definition {
    pub(crate) fn new(
        kind: DefinitionKind,
        name: impl Into<String>,
        def_location: loc::SchemaDefLocation,
    ) -> Self {
        Self {
            def_location,
            description: None,
            enum_values: IndexMap::new(),
            fields: IndexMap::new(),
            input_fields: IndexMap::new(),
            interfaces: vec![],
            kind,
            name: name.into(),
            union_members: vec![],
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Declared values of an enum type, in declaration order.
    pub fn enum_values(&self) -> &IndexMap<String, EnumValueDef> {
        &self.enum_values
    }

    /// Declared fields of an object or interface type, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, FieldDef> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Declared fields of an input object type, in declaration order.
    pub fn input_fields(&self) -> &IndexMap<String, InputValueDef> {
        &self.input_fields
    }

    /// Names of the interfaces this type declares it implements.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Member type names of a union type.
    pub fn union_members(&self) -> &[String] {
        &self.union_members
    }
}
