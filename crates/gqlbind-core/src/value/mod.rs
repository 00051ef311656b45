//! Runtime values flowing between host code and the execution engine.

mod arguments;
mod coercion;
mod field_value;
mod host_object;
mod leaf_output;

pub use arguments::Arguments;
pub use coercion::CoercionError;
pub use coercion::coerce_input;
pub use coercion::literal_to_json;
pub use field_value::FieldValue;
pub use host_object::HostObject;
pub use host_object::downcast_parent;
pub(crate) use leaf_output::serialize_leaf;

#[cfg(test)]
mod tests;
