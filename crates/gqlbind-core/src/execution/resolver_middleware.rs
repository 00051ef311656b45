use crate::execution::FieldError;
use crate::execution::ResolverContext;
use crate::value::FieldValue;
use futures::future::BoxFuture;

/// Wraps every resolver invocation (generated or user-supplied) of an
/// [`ExecutableSchema`](crate::execution::ExecutableSchema). Direct member
/// reads are not wrapped.
///
/// An implementation decides whether and when to run `next`, and may
/// rewrite its result.
#[async_trait::async_trait]
pub trait ResolverMiddleware: Send + Sync {
    async fn around_resolver(
        &self,
        ctx: &ResolverContext<'_>,
        next: NextResolver<'_>,
    ) -> Result<FieldValue, FieldError>;
}

/// The wrapped resolver call. Nothing runs until [`run()`](Self::run) is
/// awaited.
pub struct NextResolver<'a> {
    call: BoxFuture<'a, Result<FieldValue, FieldError>>,
}
impl<'a> NextResolver<'a> {
    pub(crate) fn new(call: BoxFuture<'a, Result<FieldValue, FieldError>>) -> Self {
        Self {
            call,
        }
    }

    pub async fn run(self) -> Result<FieldValue, FieldError> {
        self.call.await
    }
}
