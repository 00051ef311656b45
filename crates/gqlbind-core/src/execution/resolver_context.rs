use crate::execution::PathSegment;
use crate::execution::ResponsePath;
use crate::schema::Schema;
use crate::types::FieldDef;
use crate::value::Arguments;
use tokio_util::sync::CancellationToken;

/// Execution state of the field being resolved, handed to resolvers and
/// middleware.
#[derive(Clone, Copy, Debug)]
pub struct ResolverContext<'a> {
    pub(crate) arguments: &'a Arguments,
    pub(crate) cancellation: &'a CancellationToken,
    pub(crate) field: &'a FieldDef,
    pub(crate) object_type: &'a str,
    pub(crate) path: &'a ResponsePath<'a>,
    pub(crate) schema: &'a Schema,
}
impl<'a> ResolverContext<'a> {
    /// The coerced arguments of the field.
    pub fn arguments(&self) -> &'a Arguments {
        self.arguments
    }

    /// Cancelled when the request is; long-running resolvers may poll it.
    pub fn cancellation(&self) -> &'a CancellationToken {
        self.cancellation
    }

    pub fn field(&self) -> &'a FieldDef {
        self.field
    }

    /// Name of the object type the field is being resolved on.
    pub fn object_type(&self) -> &'a str {
        self.object_type
    }

    pub fn path(&self) -> &'a ResponsePath<'a> {
        self.path
    }

    pub fn path_segments(&self) -> Vec<PathSegment> {
        self.path.to_vec()
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }
}
