use crate::binder::HostType;
use crate::binder::Member;
use crate::binder::Param;
use crate::binder::StaticCatalog;
use std::sync::LazyLock;

const DIRECTIVE_VIEW: &str = "gqlbind_core::introspection::DirectiveView";
const ENUM_VALUE_VIEW: &str = "gqlbind_core::introspection::EnumValueView";
const FIELD_VIEW: &str = "gqlbind_core::introspection::FieldView";
const INPUT_VALUE_VIEW: &str = "gqlbind_core::introspection::InputValueView";
const SCHEMA_VIEW: &str = "gqlbind_core::introspection::SchemaView";
const TYPE_VIEW: &str = "gqlbind_core::introspection::TypeView";

static CATALOG: LazyLock<StaticCatalog> = LazyLock::new(build_catalog);

/// The implementation type bound to an introspection object type.
pub(crate) fn builtin_model(type_name: &str) -> Option<&'static str> {
    Some(match type_name {
        "__Directive" => DIRECTIVE_VIEW,
        "__EnumValue" => ENUM_VALUE_VIEW,
        "__Field" => FIELD_VIEW,
        "__InputValue" => INPUT_VALUE_VIEW,
        "__Schema" => SCHEMA_VIEW,
        "__Type" => TYPE_VIEW,
        _ => return None,
    })
}

/// Members of the introspection views, in the form the
/// [`Binder`](crate::binder::Binder) consumes.
pub fn catalog() -> &'static StaticCatalog {
    &CATALOG
}

fn build_catalog() -> StaticCatalog {
    let named = HostType::named;
    let list = |name: &str| HostType::list(HostType::named(name));
    let opt = |ty: HostType| HostType::optional(ty);
    let opt_string = || opt(named("String"));
    let include_deprecated = || vec![Param::new("include_deprecated", named("bool"))];

    StaticCatalog::new()
        .with_type(SCHEMA_VIEW, vec![
            Member::field("types", list(TYPE_VIEW)),
            Member::field("query_type", named(TYPE_VIEW)),
            Member::field("mutation_type", opt(named(TYPE_VIEW))),
            Member::field("subscription_type", opt(named(TYPE_VIEW))),
            Member::field("directives", list(DIRECTIVE_VIEW)),
        ])
        .with_type(TYPE_VIEW, vec![
            Member::field("kind", named("__TypeKind")),
            Member::field("name", opt_string()),
            Member::field("description", opt_string()),
            Member::method("fields", include_deprecated(), vec![opt(list(FIELD_VIEW))]),
            Member::field("interfaces", opt(list(TYPE_VIEW))),
            Member::field("possible_types", opt(list(TYPE_VIEW))),
            Member::method("enum_values", include_deprecated(), vec![opt(list(ENUM_VALUE_VIEW))]),
            Member::field("input_fields", opt(list(INPUT_VALUE_VIEW))),
            Member::field("of_type", opt(named(TYPE_VIEW))),
        ])
        .with_type(FIELD_VIEW, vec![
            Member::field("name", named("String")),
            Member::field("description", opt_string()),
            Member::field("args", list(INPUT_VALUE_VIEW)),
            Member::field("type_", named(TYPE_VIEW)),
            Member::field("is_deprecated", named("bool")),
            Member::field("deprecation_reason", opt_string()),
        ])
        .with_type(INPUT_VALUE_VIEW, vec![
            Member::field("name", named("String")),
            Member::field("description", opt_string()),
            Member::field("type_", named(TYPE_VIEW)),
            Member::field("default_value", opt_string()),
        ])
        .with_type(ENUM_VALUE_VIEW, vec![
            Member::field("name", named("String")),
            Member::field("description", opt_string()),
            Member::field("is_deprecated", named("bool")),
            Member::field("deprecation_reason", opt_string()),
        ])
        .with_type(DIRECTIVE_VIEW, vec![
            Member::field("name", named("String")),
            Member::field("description", opt_string()),
            Member::field("locations", list("__DirectiveLocation")),
            Member::field("args", list(INPUT_VALUE_VIEW)),
            Member::field("is_repeatable", named("bool")),
        ])
}
