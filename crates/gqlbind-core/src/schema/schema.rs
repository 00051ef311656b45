use crate::operation::OperationKind;
use crate::types::Definition;
use crate::types::DefinitionKind;
use crate::types::DirectiveDef;
use crate::types::FieldDef;
use indexmap::IndexMap;

/// The complete, immutable type system a request executes against.
///
/// Built once by the [`SchemaBuilder`](crate::schema::SchemaBuilder) and
/// shared read-only (typically behind an [`Arc`](std::sync::Arc)) by every
/// request afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directives: IndexMap<String, DirectiveDef>,
    pub(crate) introspection_fields: IndexMap<String, FieldDef>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, Definition>,
}
impl Schema {
    /// All directive declarations (built-in ones first), keyed by name.
    pub fn directives(&self) -> &IndexMap<String, DirectiveDef> {
        &self.directives
    }

    /// All named types (built-in scalars and introspection types included),
    /// keyed by name.
    pub fn types(&self) -> &IndexMap<String, Definition> {
        &self.types
    }

    pub fn get_type(&self, name: &str) -> Option<&Definition> {
        self.types.get(name)
    }

    pub fn query_type(&self) -> &Definition {
        self.types
            .get(&self.query_type)
            .expect("query root type is validated by SchemaBuilder")
    }

    pub fn mutation_type(&self) -> Option<&Definition> {
        self.mutation_type.as_ref().and_then(|name| self.types.get(name))
    }

    pub fn subscription_type(&self) -> Option<&Definition> {
        self.subscription_type.as_ref().and_then(|name| self.types.get(name))
    }

    /// Name of the root object type for `kind`, if the schema defines one.
    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// The root operation kind `type_name` serves as, if any.
    pub fn root_kind_of(&self, type_name: &str) -> Option<OperationKind> {
        [OperationKind::Query, OperationKind::Mutation, OperationKind::Subscription]
            .into_iter()
            .find(|kind| self.root_type_name(*kind) == Some(type_name))
    }

    /// The implicit `__schema` and `__type(name:)` fields available on the
    /// query root. They are not part of the query type's declared fields.
    pub fn introspection_field(&self, name: &str) -> Option<&FieldDef> {
        self.introspection_fields.get(name)
    }

    /// Object definitions, in schema declaration order.
    pub fn objects(&self) -> impl Iterator<Item = &Definition> {
        self.types.values().filter(|def| def.kind() == DefinitionKind::Object)
    }

    /// The object types an interface or union may resolve to. Empty for any
    /// other kind of definition.
    pub fn possible_types(&self, abstract_def: &Definition) -> Vec<&Definition> {
        match abstract_def.kind() {
            DefinitionKind::Interface => self.objects()
                .filter(|obj| obj.interfaces().iter().any(|i| i == abstract_def.name()))
                .collect(),

            DefinitionKind::Union => abstract_def.union_members().iter()
                .filter_map(|name| self.types.get(name))
                .filter(|def| def.kind() == DefinitionKind::Object)
                .collect(),

            _ => vec![],
        }
    }

    /// Every type name a fragment type condition may use to select fields of
    /// `object_name`: the object itself, its interfaces, and the unions that
    /// include it.
    pub fn implementors(&self, object_name: &str) -> Vec<&str> {
        let mut names = vec![];
        let Some(def) = self.types.get(object_name) else {
            return names;
        };
        names.push(def.name());
        names.extend(def.interfaces().iter().map(String::as_str));
        names.extend(
            self.types.values()
                .filter(|d| d.kind() == DefinitionKind::Union)
                .filter(|d| d.union_members().iter().any(|m| m == object_name))
                .map(|d| d.name()),
        );
        names
    }

    /// Whether `object_name` is a valid runtime type for a field declared
    /// with the (possibly abstract) type `declared_name`.
    pub fn is_possible_type(&self, declared_name: &str, object_name: &str) -> bool {
        if declared_name == object_name {
            return true;
        }
        self.types.get(declared_name)
            .map(|def| self.possible_types(def).iter().any(|obj| obj.name() == object_name))
            .unwrap_or(false)
    }
}
