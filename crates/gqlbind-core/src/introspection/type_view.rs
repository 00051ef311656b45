use crate::execution::FieldError;
use crate::execution::ResolverContext;
use crate::introspection::EnumValueView;
use crate::introspection::FieldView;
use crate::introspection::InputValueView;
use crate::introspection::object_list;
use crate::schema::Schema;
use crate::types::Definition;
use crate::types::DefinitionKind;
use crate::types::TypeRef;
use crate::value::Arguments;
use crate::value::FieldValue;
use crate::value::HostObject;
use std::sync::Arc;

/// A `__Type`: either a named definition or one wrapper level (`NON_NULL` or
/// `LIST`) of a type occurrence.
///
/// Wrapper levels are derived lazily from a shared [`TypeRef`]. The
/// `NON_NULL` level of `T!` and the `T` below it view the same `TypeRef`; the
/// lower level only records that the non-null flag has been stepped over, so
/// nothing is copied and the shared reference is never modified.
#[derive(Clone, Debug)]
pub struct TypeView {
    repr: TypeRepr,
    schema: Arc<Schema>,
}

#[derive(Clone, Debug)]
enum TypeRepr {
    Definition(String),
    Wrapped {
        non_null_stripped: bool,
        type_ref: Arc<TypeRef>,
    },
}

impl TypeView {
    /// The view of a named type, or `None` if the schema defines no such
    /// type.
    pub fn from_definition(schema: Arc<Schema>, name: &str) -> Option<Self> {
        schema.get_type(name)?;
        Some(Self {
            repr: TypeRepr::Definition(name.to_string()),
            schema,
        })
    }

    /// The outermost level of a type occurrence.
    pub fn from_type_ref(schema: Arc<Schema>, type_ref: Arc<TypeRef>) -> Self {
        let repr = match type_ref.as_named() {
            Some(named_ref) if named_ref.nullable() =>
                TypeRepr::Definition(named_ref.name().to_string()),
            _ => TypeRepr::Wrapped {
                non_null_stripped: false,
                type_ref,
            },
        };
        Self {
            repr,
            schema,
        }
    }

    fn is_non_null_level(&self) -> bool {
        match &self.repr {
            TypeRepr::Definition(_) => false,
            TypeRepr::Wrapped { non_null_stripped, type_ref } =>
                !type_ref.nullable() && !non_null_stripped,
        }
    }

    /// The named definition this level stands for. `None` for wrapper
    /// levels.
    pub fn definition(&self) -> Option<&Definition> {
        let name = match &self.repr {
            TypeRepr::Definition(name) => name.as_str(),
            TypeRepr::Wrapped { type_ref, .. } if !self.is_non_null_level() =>
                type_ref.named_type()?,
            TypeRepr::Wrapped { .. } => return None,
        };
        self.schema.get_type(name)
    }

    /// The `__TypeKind` of this level.
    pub fn kind(&self) -> &'static str {
        if self.is_non_null_level() {
            return "NON_NULL";
        }
        if let TypeRepr::Wrapped { type_ref, .. } = &self.repr {
            if type_ref.as_list().is_some() {
                return "LIST";
            }
        }
        self.definition()
            .map(|def| def.kind().introspection_name())
            .unwrap_or("UNKNOWN")
    }

    pub fn name(&self) -> Option<&str> {
        self.definition().map(Definition::name)
    }

    /// The next level down: the same occurrence without its non-null flag
    /// for `NON_NULL`, the element type for `LIST`, and nothing for named
    /// types.
    pub fn of_type(&self) -> Option<TypeView> {
        let TypeRepr::Wrapped { type_ref, .. } = &self.repr else {
            return None;
        };

        if self.is_non_null_level() {
            return Some(Self {
                repr: TypeRepr::Wrapped {
                    non_null_stripped: true,
                    type_ref: Arc::clone(type_ref),
                },
                schema: Arc::clone(&self.schema),
            });
        }

        type_ref.list_element().map(|element| {
            Self::from_type_ref(Arc::clone(&self.schema), Arc::clone(element))
        })
    }

    /// The definition behind this level if it is one of `kinds`. Wrapper
    /// levels and definitions of any other kind have no members.
    fn definition_of_kind(&self, kinds: &[DefinitionKind]) -> Option<&Definition> {
        self.definition().filter(|def| kinds.contains(&def.kind()))
    }

    pub fn fields(&self, include_deprecated: bool) -> Vec<FieldView> {
        let kinds = [DefinitionKind::Object, DefinitionKind::Interface];
        let Some(def) = self.definition_of_kind(&kinds) else {
            return vec![];
        };
        def.fields().values()
            .filter(|field| include_deprecated || !field.deprecation().is_deprecated())
            .map(|field| FieldView::new(Arc::clone(&self.schema), field.to_owned()))
            .collect()
    }

    pub fn enum_values(&self, include_deprecated: bool) -> Vec<EnumValueView> {
        let Some(def) = self.definition_of_kind(&[DefinitionKind::Enum]) else {
            return vec![];
        };
        def.enum_values().values()
            .filter(|value| include_deprecated || !value.deprecation().is_deprecated())
            .map(|value| EnumValueView::new(value.to_owned()))
            .collect()
    }

    pub fn input_fields(&self) -> Vec<InputValueView> {
        let Some(def) = self.definition_of_kind(&[DefinitionKind::InputObject]) else {
            return vec![];
        };
        def.input_fields().values()
            .map(|input| InputValueView::new(Arc::clone(&self.schema), input.to_owned()))
            .collect()
    }

    pub fn interfaces(&self) -> Vec<TypeView> {
        let kinds = [DefinitionKind::Object, DefinitionKind::Interface];
        let Some(def) = self.definition_of_kind(&kinds) else {
            return vec![];
        };
        def.interfaces().iter()
            .filter_map(|name| Self::from_definition(Arc::clone(&self.schema), name))
            .collect()
    }

    pub fn possible_types(&self) -> Vec<TypeView> {
        let kinds = [DefinitionKind::Interface, DefinitionKind::Union];
        let Some(def) = self.definition_of_kind(&kinds) else {
            return vec![];
        };
        self.schema.possible_types(def).into_iter()
            .filter_map(|obj| Self::from_definition(Arc::clone(&self.schema), obj.name()))
            .collect()
    }
}

#[async_trait::async_trait]
impl HostObject for TypeView {
    fn type_name(&self) -> &str {
        "__Type"
    }

    fn read_member(&self, member: &str) -> Option<FieldValue> {
        Some(match member {
            "kind" => FieldValue::enum_value(self.kind()),
            "name" => self.name().into(),
            "description" => self.definition().and_then(Definition::description).into(),
            "interfaces" => object_list(self.interfaces()),
            "possible_types" => object_list(self.possible_types()),
            "input_fields" => object_list(self.input_fields()),
            "of_type" => self.of_type().map_or(FieldValue::Null, FieldValue::object),
            _ => return None,
        })
    }

    async fn call_method(
        &self,
        _ctx: &ResolverContext<'_>,
        method: &str,
        args: &Arguments,
    ) -> Result<FieldValue, FieldError> {
        let include_deprecated = args.try_get::<Option<bool>>("includeDeprecated")?
            .unwrap_or(false);
        match method {
            "fields" => Ok(object_list(self.fields(include_deprecated))),
            "enum_values" => Ok(object_list(self.enum_values(include_deprecated))),
            _ => Err(FieldError::new(format!("`__Type` has no method `{method}`"))),
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
