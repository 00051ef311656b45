//! Executes operations against a [`BoundSchema`](crate::binder::BoundSchema).

mod executable_schema;
mod executable_schema_builder;
mod execution_fault;
mod executor;
mod field_error;
mod field_resolver;
mod request_state;
mod resolver_context;
mod resolver_middleware;
mod response;
mod response_path;
mod server_error;

pub use executable_schema::ExecutableSchema;
pub use executable_schema_builder::ExecutableSchemaBuildError;
pub use executable_schema_builder::ExecutableSchemaBuilder;
pub use execution_fault::ExecutionFault;
pub use field_error::FieldError;
pub use field_resolver::FieldResolver;
pub use field_resolver::FnResolver;
pub use request_state::RequestState;
pub use resolver_context::ResolverContext;
pub use resolver_middleware::NextResolver;
pub use resolver_middleware::ResolverMiddleware;
pub use response::Response;
pub use response_path::PathSegment;
pub use response_path::ResponsePath;
pub use server_error::Location;
pub use server_error::ServerError;

#[cfg(test)]
mod tests;
