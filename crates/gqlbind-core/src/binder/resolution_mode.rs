/// How the engine obtains the value of a bound field.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ResolutionMode {
    /// Read a plain member of the parent object
    /// ([`HostObject::read_member()`](crate::value::HostObject::read_member)).
    DirectMember,

    /// Call a method of the parent object whose signature matches the field
    /// ([`HostObject::call_method()`](crate::value::HostObject::call_method)).
    GeneratedResolver {
        returns_error: bool,
        takes_context: bool,
    },

    /// A hand-written [`FieldResolver`](crate::execution::FieldResolver)
    /// must be registered for the field.
    UserResolver,
}
impl std::fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::DirectMember => "direct member",
            Self::GeneratedResolver { .. } => "generated resolver",
            Self::UserResolver => "user resolver",
        })
    }
}
