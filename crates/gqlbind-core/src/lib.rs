//! Schema binder and execution engine for schema-first GraphQL servers.
//!
//! A [`Schema`](schema::Schema) is built once from a parsed SDL document, the
//! [`Binder`](binder::Binder) matches each object field against the members
//! an implementation exposes through a [`MemberCatalog`](binder::MemberCatalog),
//! and an [`ExecutableSchema`](execution::ExecutableSchema) executes
//! operations against the resulting binding.

pub mod ast;
pub mod binder;
pub mod execution;
mod file_reader;
pub mod introspection;
pub mod loc;
pub mod operation;
pub mod schema;
pub mod types;
pub mod value;

pub use file_reader::ReadContentError;
