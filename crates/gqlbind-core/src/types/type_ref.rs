use crate::ast;
use std::sync::Arc;

/// Describes one occurrence of a type in a schema position: the type of a
/// field, of an argument, of an input field or of a variable.
///
/// Non-null wrapping is not a node of its own. It is a `nullable` flag
/// stored inline on the [`ListTypeRef`] or [`NamedTypeRef`] it applies to, so
/// `[Todo!]!` is a non-nullable list whose element is a non-nullable named
/// `Todo`. Introspection reconstructs the `NON_NULL` wrappers from these flags
/// (see [`TypeView`](crate::introspection::TypeView)).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    List(ListTypeRef),
    Named(NamedTypeRef),
}
impl TypeRef {
    /// Build a [`TypeRef`] from a parsed `graphql_parser` type.
    pub fn from_ast(ast_type: &ast::operation::Type) -> Self {
        Self::from_ast_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_impl(ast_type: &ast::operation::Type, nullable: bool) -> Self {
        match ast_type {
            ast::operation::Type::ListType(inner) =>
                Self::List(ListTypeRef {
                    element: Arc::new(Self::from_ast_impl(inner, true)),
                    nullable,
                }),

            ast::operation::Type::NamedType(name) =>
                Self::Named(NamedTypeRef {
                    name: name.to_owned(),
                    nullable,
                }),

            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_impl(inner, false),
        }
    }

    pub fn list(element: TypeRef, nullable: bool) -> Self {
        Self::List(ListTypeRef {
            element: Arc::new(element),
            nullable,
        })
    }

    pub fn named(name: impl Into<String>, nullable: bool) -> Self {
        Self::Named(NamedTypeRef {
            name: name.into(),
            nullable,
        })
    }

    /// Unwrap the [`ListTypeRef`] if this reference is one.
    pub fn as_list(&self) -> Option<&ListTypeRef> {
        if let Self::List(list_ref) = self {
            Some(list_ref)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeRef`] if this reference is one.
    pub fn as_named(&self) -> Option<&NamedTypeRef> {
        if let Self::Named(named_ref) = self {
            Some(named_ref)
        } else {
            None
        }
    }

    /// The element type when this is a list, [`None`] otherwise.
    pub fn list_element(&self) -> Option<&Arc<TypeRef>> {
        self.as_list().map(|list_ref| &list_ref.element)
    }

    /// The leaf type name when this is not a list, [`None`] otherwise.
    pub fn named_type(&self) -> Option<&str> {
        self.as_named().map(|named_ref| named_ref.name.as_str())
    }

    /// Recursively unwrap list elements and return the inner-most type name.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List(ListTypeRef { element, .. })
                => element.innermost_type_name(),
            Self::Named(NamedTypeRef { name, .. })
                => name.as_str(),
        }
    }

    /// Indicates if this [`TypeRef`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(ListTypeRef { nullable, .. }) => *nullable,
            Self::Named(NamedTypeRef { nullable, .. }) => *nullable,
        }
    }

    /// A copy of this reference with the outer non-null flag cleared.
    ///
    /// List elements are shared with `self`, so this never copies more than
    /// the outermost level.
    pub fn to_nullable(&self) -> Self {
        match self {
            Self::List(list_ref) => Self::List(ListTypeRef {
                element: Arc::clone(&list_ref.element),
                nullable: true,
            }),
            Self::Named(named_ref) => Self::Named(NamedTypeRef {
                name: named_ref.name.to_owned(),
                nullable: true,
            }),
        }
    }

    /// Check if two type references are structurally equal: same list
    /// nesting, same nullability at each level and the same leaf type name.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(a), Self::List(b))
                => a.nullable == b.nullable
                    && a.element.is_equivalent_to(&b.element),
            (Self::Named(a), Self::Named(b))
                => a.nullable == b.nullable && a.name == b.name,
            _ => false,
        }
    }
}
impl std::convert::From<ListTypeRef> for TypeRef {
    fn from(value: ListTypeRef) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeRef> for TypeRef {
    fn from(value: NamedTypeRef) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_ref) => write!(
                f,
                "[{}]{}",
                list_ref.element,
                if list_ref.nullable { "" } else { "!" },
            ),

            Self::Named(named_ref) => write!(
                f,
                "{}{}",
                named_ref.name,
                if named_ref.nullable { "" } else { "!" },
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeRef {
    pub(super) element: Arc<TypeRef>,
    pub(super) nullable: bool,
}
impl ListTypeRef {
    pub fn element(&self) -> &Arc<TypeRef> {
        &self.element
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeRef {
    pub(super) name: String,
    pub(super) nullable: bool,
}
impl NamedTypeRef {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
