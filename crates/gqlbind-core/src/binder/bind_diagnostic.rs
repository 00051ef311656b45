/// A non-fatal binding finding. Every diagnostic means the affected field(s)
/// fell back to [`ResolutionMode::UserResolver`](crate::binder::ResolutionMode::UserResolver).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BindDiagnostic {
    ForcedResolver {
        field: String,
        object: String,
    },

    IncompatibleMember {
        field: String,
        member: String,
        model: String,
        object: String,
        reason: String,
    },

    MissingImplementationType {
        model: String,
        object: String,
    },

    MissingMember {
        field: String,
        member: String,
        model: String,
        object: String,
    },
}
impl BindDiagnostic {
    /// The schema object the diagnostic is about.
    pub fn object(&self) -> &str {
        match self {
            Self::ForcedResolver { object, .. }
                | Self::IncompatibleMember { object, .. }
                | Self::MissingImplementationType { object, .. }
                | Self::MissingMember { object, .. } => object.as_str(),
        }
    }

    /// The affected field, or `None` when the whole object is affected.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ForcedResolver { field, .. }
                | Self::IncompatibleMember { field, .. }
                | Self::MissingMember { field, .. } => Some(field.as_str()),
            Self::MissingImplementationType { .. } => None,
        }
    }
}
impl std::fmt::Display for BindDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ForcedResolver { field, object } =>
                write!(f, "{object}.{field} is configured to require a resolver"),
            Self::IncompatibleMember { field, member, model, object, reason } =>
                write!(f, "{model}::{member} cannot serve {object}.{field}: {reason}"),
            Self::MissingImplementationType { model, object } =>
                write!(f, "implementation type {model} for {object} was not found"),
            Self::MissingMember { field, member, model, object } =>
                write!(f, "no member {model}::{member} matches {object}.{field}"),
        }
    }
}
