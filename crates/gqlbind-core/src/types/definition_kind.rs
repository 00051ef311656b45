/// The category of a named type. The variant names mirror the values of the
/// `__TypeKind` introspection enum.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl DefinitionKind {
    /// The `__TypeKind` value reported for this kind.
    pub fn introspection_name(&self) -> &'static str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
        }
    }

    /// Types that may appear in input positions (arguments, variables, input
    /// fields).
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Enum | Self::InputObject | Self::Scalar)
    }

    /// Types whose values are serialized directly rather than through a
    /// selection set.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum | Self::Scalar)
    }

    /// Types that resolve to objects and therefore require a selection set.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }
}
impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.introspection_name())
    }
}
