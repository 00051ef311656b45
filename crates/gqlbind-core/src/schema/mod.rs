mod builtin_sdl;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;

pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
