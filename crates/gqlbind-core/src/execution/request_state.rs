use crate::ast;
use crate::execution::ServerError;
use crate::operation::Variables;
use std::sync::Mutex;
use std::sync::PoisonError;
use tokio_util::sync::CancellationToken;

/// Per-request state shared by every field resolution of one execution.
#[derive(Debug)]
pub struct RequestState<'a> {
    cancellation: CancellationToken,
    document: &'a ast::operation::Document,
    errors: Mutex<Vec<ServerError>>,
    variables: Variables,
}
impl<'a> RequestState<'a> {
    pub(crate) fn new(
        document: &'a ast::operation::Document,
        variables: Variables,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            cancellation,
            document,
            errors: Mutex::new(vec![]),
            variables,
        }
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn document(&self) -> &'a ast::operation::Document {
        self.document
    }

    /// Snapshot of the errors recorded so far.
    pub fn errors(&self) -> Vec<ServerError> {
        self.errors.lock().unwrap_or_else(PoisonError::into_inner).to_owned()
    }

    /// The operation's variables after coercion.
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub(crate) fn into_errors(self) -> Vec<ServerError> {
        self.errors.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn record_error(&self, error: ServerError) {
        log::debug!("field error at {:?}: {}", error.path, error.message);
        self.errors.lock().unwrap_or_else(PoisonError::into_inner).push(error);
    }
}
