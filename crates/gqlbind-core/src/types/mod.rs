mod definition;
mod definition_kind;
mod deprecation;
mod directive_def;
mod enum_value_def;
mod field_def;
mod input_value_def;
mod type_ref;

pub use definition::Definition;
pub use definition_kind::DefinitionKind;
pub use deprecation::Deprecation;
pub use directive_def::DirectiveDef;
pub use enum_value_def::EnumValueDef;
pub use field_def::FieldDef;
pub use input_value_def::InputValueDef;
pub use type_ref::ListTypeRef;
pub use type_ref::NamedTypeRef;
pub use type_ref::TypeRef;
