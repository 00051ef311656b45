use crate::types::EnumValueDef;
use crate::value::FieldValue;
use crate::value::HostObject;

/// An `__EnumValue`.
#[derive(Clone, Debug)]
pub struct EnumValueView {
    def: EnumValueDef,
}
impl EnumValueView {
    pub fn new(def: EnumValueDef) -> Self {
        Self { def }
    }
}

impl HostObject for EnumValueView {
    fn type_name(&self) -> &str {
        "__EnumValue"
    }

    fn read_member(&self, member: &str) -> Option<FieldValue> {
        Some(match member {
            "name" => self.def.name().into(),
            "description" => self.def.description().into(),
            "is_deprecated" => self.def.deprecation().is_deprecated().into(),
            "deprecation_reason" => self.def.deprecation().reason().into(),
            _ => return None,
        })
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
