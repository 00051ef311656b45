use crate::types::InputValueDef;

/// Binder output for one field argument.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundArgument {
    pub(crate) def: InputValueDef,
    pub(crate) default: Option<serde_json::Value>,
    pub(crate) host_name: String,
    pub(crate) strip_optional: bool,
}
impl BoundArgument {
    pub fn def(&self) -> &InputValueDef {
        &self.def
    }

    /// The schema default, already coerced to the argument's type.
    pub fn default(&self) -> Option<&serde_json::Value> {
        self.default.as_ref()
    }

    pub fn host_name(&self) -> &str {
        self.host_name.as_str()
    }

    pub fn name(&self) -> &str {
        self.def.name()
    }

    /// Whether the host parameter may be the plain type instead of an
    /// `Option`. Set for nullable arguments that have a non-null default.
    pub fn strip_optional(&self) -> bool {
        self.strip_optional
    }
}
