use crate::ast;
use crate::operation::CollectedField;
use crate::operation::Variables;
use crate::value::literal_to_json;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::collections::HashMap;
use std::collections::HashSet;

/// Flattens selection sets into the ordered list of fields to resolve for an
/// object.
///
/// Named fragment spreads and inline fragments are inlined when their type
/// condition is one of the implementor names passed to
/// [`collect()`](Self::collect), fields (and fragments) excluded by `@skip` or
/// `@include` are dropped, and occurrences sharing a response key are merged.
/// Collection is a pure function of its inputs, so collecting the same
/// selection sets twice yields identical results.
#[derive(Clone, Debug)]
pub struct FieldCollector<'a> {
    fragments: HashMap<&'a str, &'a ast::operation::FragmentDefinition>,
    variables: &'a Variables,
}
impl<'a> FieldCollector<'a> {
    pub fn new(document: &'a ast::operation::Document, variables: &'a Variables) -> Self {
        let fragments = document.definitions.iter()
            .filter_map(|def| match def {
                ast::operation::Definition::Fragment(fragment) =>
                    Some((fragment.name.as_str(), fragment)),
                ast::operation::Definition::Operation(_) => None,
            })
            .collect();

        Self {
            fragments,
            variables,
        }
    }

    /// Collect the fields of `selection_sets` (all selecting on the same
    /// object) for an object whose type, interfaces and containing unions are
    /// named by `implementors`.
    pub fn collect(
        &self,
        selection_sets: &[&'a ast::operation::SelectionSet],
        implementors: &[&str],
    ) -> Vec<CollectedField<'a>> {
        let mut fields = IndexMap::new();
        let mut visited_fragments = HashSet::new();
        for selection_set in selection_sets {
            self.collect_into(selection_set, implementors, &mut fields, &mut visited_fragments);
        }
        fields.into_values().collect()
    }

    fn collect_into(
        &self,
        selection_set: &'a ast::operation::SelectionSet,
        implementors: &[&str],
        fields: &mut IndexMap<String, CollectedField<'a>>,
        visited_fragments: &mut HashSet<&'a str>,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::operation::Selection::Field(field) => {
                    if !self.is_included(&field.directives) {
                        continue;
                    }
                    let response_key = field.alias.as_ref().unwrap_or(&field.name);
                    match fields.entry(response_key.to_owned()) {
                        Entry::Occupied(mut entry) =>
                            entry.get_mut().selections.push(&field.selection_set),

                        Entry::Vacant(entry) => {
                            entry.insert(CollectedField {
                                arguments: self.field_arguments(field),
                                name: field.name.to_owned(),
                                position: field.position,
                                response_key: response_key.to_owned(),
                                selections: vec![&field.selection_set],
                            });
                        },
                    }
                },

                ast::operation::Selection::FragmentSpread(spread) => {
                    if !self.is_included(&spread.directives)
                        || !visited_fragments.insert(spread.fragment_name.as_str()) {
                        continue;
                    }
                    let Some(&fragment) = self.fragments.get(spread.fragment_name.as_str()) else {
                        log::debug!(
                            "Skipping spread of undefined fragment `{}`.",
                            spread.fragment_name,
                        );
                        continue;
                    };
                    if !type_condition_applies(Some(&fragment.type_condition), implementors) {
                        continue;
                    }
                    self.collect_into(&fragment.selection_set, implementors, fields, visited_fragments);
                },

                ast::operation::Selection::InlineFragment(inline) => {
                    if !self.is_included(&inline.directives)
                        || !type_condition_applies(inline.type_condition.as_ref(), implementors) {
                        continue;
                    }
                    self.collect_into(&inline.selection_set, implementors, fields, visited_fragments);
                },
            }
        }
    }

    fn field_arguments(&self, field: &ast::operation::Field) -> IndexMap<String, serde_json::Value> {
        field.arguments.iter()
            .filter(|(_, value)| match value {
                ast::Value::Variable(var_name) => self.variables.contains(var_name),
                _ => true,
            })
            .map(|(name, value)| (name.to_owned(), literal_to_json(value, self.variables)))
            .collect()
    }

    /// `@skip(if:)` and `@include(if:)` compose by logical AND.
    fn is_included(&self, directives: &[ast::operation::Directive]) -> bool {
        directives.iter().all(|directive| {
            let condition = directive.arguments.iter()
                .find(|(name, _)| name == "if")
                .and_then(|(_, value)| literal_to_json(value, self.variables).as_bool());
            match (directive.name.as_str(), condition) {
                ("skip", Some(true)) => false,
                ("include", Some(false)) => false,
                _ => true,
            }
        })
    }
}

fn type_condition_applies(
    type_condition: Option<&ast::operation::TypeCondition>,
    implementors: &[&str],
) -> bool {
    match type_condition {
        None => true,
        Some(graphql_parser::query::TypeCondition::On(type_name)) =>
            implementors.contains(&type_name.as_str()),
    }
}
