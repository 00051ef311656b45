use crate::execution::FieldError;
use crate::execution::ResolverContext;
use crate::value::Arguments;
use crate::value::FieldValue;
use crate::value::HostObject;
use std::future::Future;
use std::sync::Arc;

/// Hand-written resolution logic for a field the binder could not match to a
/// member of the host type.
#[async_trait::async_trait]
pub trait FieldResolver: Send + Sync {
    async fn resolve(
        &self,
        ctx: &ResolverContext<'_>,
        parent: &Arc<dyn HostObject>,
        args: &Arguments,
    ) -> Result<FieldValue, FieldError>;
}

/// Adapts an async closure into a [`FieldResolver`].
///
/// The closure sees the [`ResolverContext`] only while it builds its future;
/// anything the future needs from it (the path, a clone of the cancellation
/// token) has to be copied out first.
///
/// ```
/// # use gqlbind_core::execution::FnResolver;
/// # use gqlbind_core::value::FieldValue;
/// let resolver = FnResolver::new(|ctx, _parent, args| {
///     let path = ctx.path().to_string();
///     async move {
///         let name = args.get("name").and_then(|v| v.as_str()).unwrap_or("world");
///         Ok(FieldValue::from(format!("hello, {name} (at {path})")))
///     }
/// });
/// # let _ = resolver;
/// ```
pub struct FnResolver<F>(F);
impl<F> FnResolver<F> {
    pub fn new<Fut>(f: F) -> Self
    where
        F: Fn(&ResolverContext<'_>, Arc<dyn HostObject>, Arguments) -> Fut + Send + Sync,
        Fut: Future<Output = Result<FieldValue, FieldError>> + Send + 'static,
    {
        Self(f)
    }
}
#[async_trait::async_trait]
impl<F, Fut> FieldResolver for FnResolver<F>
where
    F: Fn(&ResolverContext<'_>, Arc<dyn HostObject>, Arguments) -> Fut + Send + Sync,
    Fut: Future<Output = Result<FieldValue, FieldError>> + Send + 'static,
{
    async fn resolve(
        &self,
        ctx: &ResolverContext<'_>,
        parent: &Arc<dyn HostObject>,
        args: &Arguments,
    ) -> Result<FieldValue, FieldError> {
        (self.0)(ctx, Arc::clone(parent), args.to_owned()).await
    }
}
