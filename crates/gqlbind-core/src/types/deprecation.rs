use crate::ast;

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Whether a field or enum value carries a
/// [`@deprecated`](https://spec.graphql.org/October2021/#sec--deprecated)
/// annotation, and the reason it gives.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Deprecation {
    Deprecated(String),
    #[default]
    NotDeprecated,
}
impl Deprecation {
    pub(crate) fn from_ast(directives: &[ast::schema::Directive]) -> Self {
        let Some(directive) = directives.iter().find(|d| d.name == "deprecated") else {
            return Self::NotDeprecated;
        };

        let reason = directive.arguments.iter()
            .find(|(name, _)| name == "reason")
            .and_then(|(_, value)| match value {
                ast::Value::String(reason) => Some(reason.to_owned()),
                _ => None,
            })
            .unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string());

        Self::Deprecated(reason)
    }

    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated(reason) => Some(reason.as_str()),
            Self::NotDeprecated => None,
        }
    }
}
