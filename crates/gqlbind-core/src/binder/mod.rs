//! Matches schema object fields against the members of their implementation
//! types and decides, per field, how the engine will resolve it.

mod bind_config;
mod bind_diagnostic;
mod bind_error;
#[allow(clippy::module_inception)]
mod binder;
mod bound_argument;
mod bound_field;
mod bound_object;
mod bound_schema;
mod host_type;
mod member;
mod member_catalog;
mod naming;
mod resolution_mode;
mod signature_matcher;
mod static_catalog;

pub use bind_config::BindConfig;
pub use bind_config::FieldConfig;
pub use bind_config::ModelConfig;
pub use bind_diagnostic::BindDiagnostic;
pub use bind_error::BindError;
pub use binder::Binder;
pub use bound_argument::BoundArgument;
pub use bound_field::BoundField;
pub use bound_object::BoundObject;
pub use bound_schema::BoundSchema;
pub use host_type::HostType;
pub use host_type::HostTypeParseError;
pub use member::Member;
pub use member::MemberKind;
pub use member::Param;
pub use member_catalog::MemberCatalog;
pub use naming::to_member_name;
pub use resolution_mode::ResolutionMode;
pub use static_catalog::StaticCatalog;

#[cfg(test)]
mod tests;
