use crate::binder::Member;

/// Source of implementation-type metadata for the [`Binder`](crate::binder::Binder).
///
/// A catalog may come from static analysis of source code or from explicit
/// registration (see [`StaticCatalog`](crate::binder::StaticCatalog)); the
/// binder only relies on this shape.
pub trait MemberCatalog {
    /// The exported members of `impl_type`, in declaration order, or `None`
    /// if the catalog knows no such type.
    fn members(&self, impl_type: &str) -> Option<&[Member]>;
}
