//! Live introspection: the schema exposed as a graph of host objects that the
//! execution engine resolves like any other bound object.

mod catalog;
mod directive_view;
mod enum_value_view;
mod field_view;
mod input_value_view;
mod introspection_sdl;
mod schema_view;
mod type_view;

pub use catalog::catalog;
pub(crate) use catalog::builtin_model;
pub use directive_view::DirectiveView;
pub use enum_value_view::EnumValueView;
pub use field_view::FieldView;
pub use input_value_view::InputValueView;
pub(crate) use introspection_sdl::INTROSPECTION_SDL;
pub use schema_view::SchemaView;
pub use type_view::TypeView;

use crate::value::FieldValue;
use crate::value::HostObject;

fn object_list<T: HostObject>(views: impl IntoIterator<Item = T>) -> FieldValue {
    FieldValue::List(views.into_iter().map(FieldValue::object).collect())
}

#[cfg(test)]
mod tests;
