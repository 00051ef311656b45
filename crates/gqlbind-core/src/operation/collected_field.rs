use crate::ast;
use indexmap::IndexMap;

/// One field to resolve, after fragments have been inlined and `@skip` /
/// `@include` applied.
///
/// All occurrences sharing a response key are merged into one
/// `CollectedField`: the first occurrence supplies the field name, the
/// arguments and the position, and every occurrence contributes its
/// selection set to [`selections()`](Self::selections).
#[derive(Clone, Debug, PartialEq)]
pub struct CollectedField<'a> {
    pub(crate) arguments: IndexMap<String, serde_json::Value>,
    pub(crate) name: String,
    pub(crate) position: ast::Pos,
    pub(crate) response_key: String,
    pub(crate) selections: Vec<&'a ast::operation::SelectionSet>,
}
impl<'a> CollectedField<'a> {
    /// Raw argument values with variables already substituted. Arguments
    /// bound to an unset variable are left out.
    pub fn arguments(&self) -> &IndexMap<String, serde_json::Value> {
        &self.arguments
    }

    /// The schema field name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn position(&self) -> ast::Pos {
        self.position
    }

    /// The alias if one was given, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.response_key.as_str()
    }

    /// The sub-selection sets of every merged occurrence, in document order.
    pub fn selections(&self) -> &[&'a ast::operation::SelectionSet] {
        &self.selections
    }
}
