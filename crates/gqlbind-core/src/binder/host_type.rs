use thiserror::Error;

/// The type of a member parameter or result, as reported by a
/// [`MemberCatalog`](crate::binder::MemberCatalog).
///
/// Its textual form mirrors the Rust spelling, so catalogs can be written by
/// hand as JSON: `i32`, `Option<String>`, `Vec<Option<Todo>>`, and the two
/// markers `Context` (the resolver context parameter) and `Error` (a
/// fallible result).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum HostType {
    Context,
    Error,
    List(Box<HostType>),
    Named(String),
    Optional(Box<HostType>),
}
impl HostType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(element: HostType) -> Self {
        Self::List(Box::new(element))
    }

    pub fn optional(inner: HostType) -> Self {
        Self::Optional(Box::new(inner))
    }
}
impl std::str::FromStr for HostType {
    type Err = HostTypeParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if let Some(inner) = strip_generic(text, "Option") {
            return Ok(Self::optional(inner.parse()?));
        }
        if let Some(inner) = strip_generic(text, "Vec") {
            return Ok(Self::list(inner.parse()?));
        }

        match text {
            "Context" => Ok(Self::Context),
            "Error" => Ok(Self::Error),
            "" => Err(HostTypeParseError::Empty),
            name if name.chars().all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '&')) =>
                Ok(Self::Named(name.to_string())),
            other => Err(HostTypeParseError::InvalidTypeName(other.to_string())),
        }
    }
}
impl std::convert::TryFrom<String> for HostType {
    type Error = HostTypeParseError;

    fn try_from(value: String) -> Result<Self, HostTypeParseError> {
        value.parse()
    }
}
impl std::convert::From<HostType> for String {
    fn from(value: HostType) -> Self {
        value.to_string()
    }
}
impl std::fmt::Display for HostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Context => write!(f, "Context"),
            Self::Error => write!(f, "Error"),
            Self::List(element) => write!(f, "Vec<{element}>"),
            Self::Named(name) => write!(f, "{name}"),
            Self::Optional(inner) => write!(f, "Option<{inner}>"),
        }
    }
}

fn strip_generic<'t>(text: &'t str, wrapper: &str) -> Option<&'t str> {
    text.strip_prefix(wrapper)?
        .trim_start()
        .strip_prefix('<')?
        .strip_suffix('>')
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum HostTypeParseError {
    #[error("empty host type")]
    Empty,

    #[error("`{0}` is not a valid host type")]
    InvalidTypeName(String),
}
