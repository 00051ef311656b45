use crate::value::HostObject;
use std::sync::Arc;

/// What a member read or a resolver call hands back to the engine, before it
/// is completed against the field's declared type.
#[derive(Clone)]
pub enum FieldValue {
    Null,
    /// A leaf value for a scalar field. Serialized according to the scalar's
    /// rules (e.g. `Int` must fit in 32 bits).
    Scalar(serde_json::Value),
    /// The name of an enum value.
    Enum(String),
    List(Vec<FieldValue>),
    /// A host object whose own fields are resolved against the bound object
    /// named by [`HostObject::type_name()`].
    Object(Arc<dyn HostObject>),
}
impl FieldValue {
    pub fn object(object: impl HostObject) -> Self {
        Self::Object(Arc::new(object))
    }

    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    pub fn list<T: Into<FieldValue>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Scalar(value) => value.is_null(),
            _ => false,
        }
    }
}
impl std::fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Self::Enum(name) => f.debug_tuple("Enum").field(name).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Object(object) =>
                f.debug_tuple("Object").field(&object.type_name()).finish(),
        }
    }
}
impl std::convert::From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Scalar(value)
    }
}
impl std::convert::From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.into())
    }
}
impl std::convert::From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Scalar(value.into())
    }
}
impl std::convert::From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.into())
    }
}
impl std::convert::From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value.into())
    }
}
impl std::convert::From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}
impl std::convert::From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}
impl<T: Into<FieldValue>> std::convert::From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
impl<T: Into<FieldValue>> std::convert::From<Vec<T>> for FieldValue {
    fn from(value: Vec<T>) -> Self {
        Self::list(value)
    }
}
impl std::convert::From<Arc<dyn HostObject>> for FieldValue {
    fn from(value: Arc<dyn HostObject>) -> Self {
        Self::Object(value)
    }
}
