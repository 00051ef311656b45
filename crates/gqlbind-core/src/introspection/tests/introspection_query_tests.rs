use crate::binder::Binder;
use crate::binder::BoundSchema;
use crate::binder::StaticCatalog;
use crate::execution::ExecutableSchema;
use crate::execution::ExecutionFault;
use crate::execution::FnResolver;
use crate::operation::Request;
use crate::schema::SchemaBuilder;
use crate::value::FieldValue;
use crate::value::HostObject;
use serde_json::json;
use std::any::Any;
use std::sync::Arc;

const SDL: &str = r#"
"A thing to do."
type Todo {
  id: ID!
  text: String!
  legacy: String @deprecated(reason: "use text")
}
type Query {
  todos: [Todo!]!
  search(term: String = "all", limit: Int): [Todo]
}
"#;

struct TodoStub;
impl HostObject for TodoStub {
    fn type_name(&self) -> &str {
        "Todo"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn bound() -> BoundSchema {
    let schema = SchemaBuilder::new().load_str(None, SDL).unwrap().build().unwrap();
    Binder::new(Arc::new(schema), &StaticCatalog::new()).bind().unwrap()
}

fn exec() -> ExecutableSchema {
    ExecutableSchema::builder(bound())
        .resolver("Query", "todos", FnResolver::new(|_, _, _| async {
            Ok(FieldValue::list(vec![FieldValue::object(TodoStub)]))
        }))
        .resolver("Query", "search", FnResolver::new(|_, _, _| async { Ok(FieldValue::Null) }))
        .resolver("Todo", "id", FnResolver::new(|_, _, _| async { Ok(FieldValue::from("x")) }))
        .resolver("Todo", "text", FnResolver::new(|_, _, _| async { Ok(FieldValue::from("x")) }))
        .resolver("Todo", "legacy", FnResolver::new(|_, _, _| async { Ok(FieldValue::Null) }))
        .build()
        .unwrap()
}

async fn data(query: &str) -> serde_json::Value {
    let response = exec().execute(Request::parse(query).unwrap()).await.unwrap();
    assert!(response.is_ok(), "unexpected errors: {:?}", response.errors);
    response.data
}

#[test]
fn introspection_types_bind_without_diagnostics() {
    let bound = bound();

    assert!(bound.object("__Type").is_some());
    assert!(bound.object("__Schema").is_some());
    assert!(
        bound.diagnostics().iter().all(|diag| !diag.object().starts_with("__")),
        "{:?}",
        bound.diagnostics(),
    );
}

#[tokio::test]
async fn type_wrappers_are_reported_outermost_first() {
    let data = data(r#"{
      __type(name: "Query") {
        fields {
          name
          type { kind name ofType { kind name ofType { kind name ofType { kind name } } } }
        }
      }
    }"#).await;

    assert_eq!(data["__type"]["fields"][0], json!({
        "name": "todos",
        "type": {
            "kind": "NON_NULL",
            "name": null,
            "ofType": {
                "kind": "LIST",
                "name": null,
                "ofType": {
                    "kind": "NON_NULL",
                    "name": null,
                    "ofType": {"kind": "OBJECT", "name": "Todo"},
                },
            },
        },
    }));
}

#[tokio::test]
async fn arguments_expose_defaults() {
    let data = data(r#"{
      __type(name: "Query") { fields { name args { name defaultValue type { name } } } }
    }"#).await;

    assert_eq!(data["__type"]["fields"][1], json!({
        "name": "search",
        "args": [
            {"name": "term", "defaultValue": "\"all\"", "type": {"name": "String"}},
            {"name": "limit", "defaultValue": null, "type": {"name": "Int"}},
        ],
    }));
}

#[tokio::test]
async fn deprecated_fields_are_opt_in() {
    let data = data(r#"{
      visible: __type(name: "Todo") { description fields { name } }
      all: __type(name: "Todo") {
        fields(includeDeprecated: true) { name isDeprecated deprecationReason }
      }
    }"#).await;

    assert_eq!(data["visible"], json!({
        "description": "A thing to do.",
        "fields": [{"name": "id"}, {"name": "text"}],
    }));
    assert_eq!(data["all"]["fields"][2], json!({
        "name": "legacy",
        "isDeprecated": true,
        "deprecationReason": "use text",
    }));
}

#[tokio::test]
async fn schema_lists_roots_and_types() {
    let data = data("{ __schema { queryType { name } mutationType { name } types { name } } }").await;

    assert_eq!(data["__schema"]["queryType"], json!({"name": "Query"}));
    assert_eq!(data["__schema"]["mutationType"], json!(null));
    let names: Vec<&str> = data["__schema"]["types"].as_array().unwrap()
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert!(names.contains(&"Todo"));
    assert!(names.contains(&"__Schema"));
    assert!(names.contains(&"Boolean"));
}

#[tokio::test]
async fn schema_lists_directives() {
    let data = data("{ __schema { directives { name locations } } }").await;
    let skip = data["__schema"]["directives"].as_array().unwrap()
        .iter()
        .find(|d| d["name"] == "skip")
        .cloned();

    assert_eq!(
        skip,
        Some(json!({"name": "skip", "locations": ["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"]})),
    );
}

#[tokio::test]
async fn wrong_kind_members_are_empty_lists() {
    let data = data(r#"{
      todo: __type(name: "Todo") { inputFields { name } enumValues { name } possibleTypes { name } }
      id: __type(name: "ID") { fields { name } interfaces { name } }
      query: __type(name: "Query") { fields { type { kind fields { name } } } }
    }"#).await;

    assert_eq!(data["todo"], json!({"inputFields": [], "enumValues": [], "possibleTypes": []}));
    assert_eq!(data["id"], json!({"fields": [], "interfaces": []}));
    assert_eq!(data["query"]["fields"][0]["type"], json!({"kind": "NON_NULL", "fields": []}));
}

#[tokio::test]
async fn unknown_type_is_null() {
    let data = data(r#"{ __type(name: "Nope") { name } }"#).await;

    assert_eq!(data, json!({"__type": null}));
}

#[tokio::test]
async fn introspection_fields_exist_only_on_the_query_root() {
    let err = exec()
        .execute(Request::parse("{ todos { __schema { queryType { name } } } }").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err, ExecutionFault::UnknownField {
        field: "__schema".to_string(),
        object: "Todo".to_string(),
    });
}
