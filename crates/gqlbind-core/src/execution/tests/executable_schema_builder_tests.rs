use super::todo_fixture::MutationRoot;
use super::todo_fixture::QueryRoot;
use super::todo_fixture::TODO_SDL;
use super::todo_fixture::TodoStore;
use super::todo_fixture::TodoUserResolver;
use super::todo_fixture::bind;
use super::todo_fixture::todo_catalog;
use crate::execution::ExecutableSchema;
use crate::execution::ExecutableSchemaBuildError;
use crate::operation::OperationKind;
use std::sync::Arc;

#[test]
fn user_resolved_field_needs_a_resolver() {
    let store = Arc::new(TodoStore::default());
    let result = ExecutableSchema::builder(bind(TODO_SDL, &todo_catalog()))
        .query_root(QueryRoot(Arc::clone(&store)))
        .mutation_root(MutationRoot(store))
        .build();

    assert_eq!(result.unwrap_err(), ExecutableSchemaBuildError::MissingResolver {
        field: "user".to_string(),
        object: "Todo".to_string(),
    });
}

#[test]
fn resolver_for_a_bound_member_is_rejected() {
    let result = ExecutableSchema::builder(bind(TODO_SDL, &todo_catalog()))
        .resolver("Todo", "user", TodoUserResolver)
        .resolver("Todo", "text", TodoUserResolver)
        .build();

    assert_eq!(result.unwrap_err(), ExecutableSchemaBuildError::UnknownResolverTarget {
        field: "text".to_string(),
        object: "Todo".to_string(),
    });
}

#[test]
fn resolver_for_an_undefined_field_is_rejected() {
    let result = ExecutableSchema::builder(bind(TODO_SDL, &todo_catalog()))
        .resolver("Todo", "user", TodoUserResolver)
        .resolver("Todo", "owner", TodoUserResolver)
        .build();

    assert!(matches!(
        result.unwrap_err(),
        ExecutableSchemaBuildError::UnknownResolverTarget { field, .. } if field == "owner",
    ));
}

#[test]
fn root_object_must_match_the_root_type() {
    let store = Arc::new(TodoStore::default());
    let result = ExecutableSchema::builder(bind(TODO_SDL, &todo_catalog()))
        .query_root(MutationRoot(store))
        .resolver("Todo", "user", TodoUserResolver)
        .build();

    assert_eq!(result.unwrap_err(), ExecutableSchemaBuildError::RootTypeMismatch {
        expected: "Query".to_string(),
        found: "Mutation".to_string(),
        operation: OperationKind::Query,
    });
}

#[test]
fn roots_default_to_empty_objects() {
    let exec = ExecutableSchema::builder(bind(TODO_SDL, &todo_catalog()))
        .resolver("Todo", "user", TodoUserResolver)
        .build()
        .unwrap();

    assert_eq!(exec.query_root.type_name(), "Query");
    assert_eq!(
        exec.mutation_root.as_ref().map(|root| root.type_name().to_string()),
        Some("Mutation".to_string()),
    );
}
