use crate::binder::BoundArgument;
use crate::binder::ResolutionMode;
use crate::types::FieldDef;

/// Binder output for one object field.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundField {
    pub(crate) arguments: Vec<BoundArgument>,
    pub(crate) def: FieldDef,
    pub(crate) forced_resolver: bool,
    pub(crate) host_name: String,
    pub(crate) mode: ResolutionMode,
}
impl BoundField {
    pub fn arguments(&self) -> &[BoundArgument] {
        &self.arguments
    }

    pub fn def(&self) -> &FieldDef {
        &self.def
    }

    pub fn forced_resolver(&self) -> bool {
        self.forced_resolver
    }

    /// Name of the host member (or method) the field maps to.
    pub fn host_name(&self) -> &str {
        self.host_name.as_str()
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        self.def.name()
    }
}
