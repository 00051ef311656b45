mod collected_field;
mod field_collector;
mod operation_kind;
mod request;
mod request_error;
mod variables;

pub use collected_field::CollectedField;
pub use field_collector::FieldCollector;
pub use operation_kind::OperationKind;
pub use request::Request;
pub use request::SelectedOperation;
pub use request_error::RequestError;
pub use variables::Variables;

#[cfg(test)]
mod tests;
