use crate::types::Deprecation;

/// One value declared on an enum type.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDef {
    pub(crate) deprecation: Deprecation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl EnumValueDef {
    pub fn deprecation(&self) -> &Deprecation {
        &self.deprecation
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
