use crate::execution::FieldError;
use crate::execution::ResolverContext;
use crate::value::Arguments;
use crate::value::FieldValue;
use std::any::Any;

/// A value of the host program that stands in for an instance of a schema
/// object type.
///
/// The two optional hooks correspond to the binding modes the
/// [`Binder`](crate::binder::Binder) can choose for a field:
///
/// * [`read_member()`](Self::read_member) serves `DirectMember` fields.
/// * [`call_method()`](Self::call_method) serves `GeneratedResolver` fields.
///
/// `UserResolver` fields never reach the host object itself; they go through
/// the [`FieldResolver`](crate::execution::FieldResolver) registered for
/// them.
#[async_trait::async_trait]
pub trait HostObject: Send + Sync + 'static {
    /// Name of the schema object type this value is an instance of.
    fn type_name(&self) -> &str;

    /// Read a plain member by its host name. `None` means the member does not
    /// exist.
    fn read_member(&self, _member: &str) -> Option<FieldValue> {
        None
    }

    /// Invoke a method by its host name with the field's coerced arguments.
    async fn call_method(
        &self,
        _ctx: &ResolverContext<'_>,
        method: &str,
        _args: &Arguments,
    ) -> Result<FieldValue, FieldError> {
        Err(FieldError::new(format!(
            "`{}` does not implement method `{method}`",
            self.type_name(),
        )))
    }

    fn as_any(&self) -> &dyn Any;
}

/// Downcast a resolver's parent object to its concrete host type.
pub fn downcast_parent<T: HostObject>(parent: &dyn HostObject) -> Option<&T> {
    parent.as_any().downcast_ref::<T>()
}
