use super::todo_fixture::MutationRoot;
use super::todo_fixture::QueryRoot;
use super::todo_fixture::Record;
use super::todo_fixture::TODO_SDL;
use super::todo_fixture::TodoStore;
use super::todo_fixture::TodoUserResolver;
use super::todo_fixture::bind;
use super::todo_fixture::todo_catalog;
use super::todo_fixture::todo_schema;
use crate::binder::HostType;
use crate::binder::Member;
use crate::binder::StaticCatalog;
use crate::execution::ExecutableSchema;
use crate::execution::ExecutionFault;
use crate::execution::FieldError;
use crate::execution::FieldResolver;
use crate::execution::FnResolver;
use crate::execution::NextResolver;
use crate::execution::PathSegment;
use crate::execution::ResolverContext;
use crate::execution::ResolverMiddleware;
use crate::operation::Request;
use crate::operation::Variables;
use crate::value::Arguments;
use crate::value::FieldValue;
use crate::value::HostObject;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;

async fn run(exec: &ExecutableSchema, query: &str) -> serde_json::Value {
    exec.execute(Request::parse(query).unwrap()).await.unwrap().to_json()
}

fn store_with(todos: &[(&str, &str)]) -> Arc<TodoStore> {
    let store = Arc::new(TodoStore::default());
    for (text, user_id) in todos {
        store.create(text.to_string(), user_id.to_string());
    }
    store
}

mod todo_server {
    use super::*;

    #[tokio::test]
    async fn create_then_list() {
        let exec = todo_schema(Arc::new(TodoStore::default()));

        let created = run(&exec, r#"
            mutation {
              createTodo(input: {text: "buy milk", userId: "U1"}) {
                id text done user { id name }
              }
            }
        "#).await;
        assert_eq!(created, json!({
            "data": {
                "createTodo": {
                    "id": "T1",
                    "text": "buy milk",
                    "done": false,
                    "user": {"id": "U1", "name": "user U1"},
                },
            },
            "errors": [],
        }));

        let listed = run(&exec, "{ todos { id text done user { name } } }").await;
        assert_eq!(listed, json!({
            "data": {
                "todos": [{
                    "id": "T1",
                    "text": "buy milk",
                    "done": false,
                    "user": {"name": "user U1"},
                }],
            },
            "errors": [],
        }));
    }

    #[tokio::test]
    async fn response_keys_follow_document_order() {
        let exec = todo_schema(store_with(&[("a", "U1")]));
        let response = exec.execute(
            Request::parse("{ todos { user { name } done t: text id } }").unwrap(),
        ).await.unwrap();

        assert_eq!(
            serde_json::to_string(&response.data).unwrap(),
            r#"{"todos":[{"user":{"name":"user U1"},"done":false,"t":"a","id":"T1"}]}"#,
        );
    }

    #[tokio::test]
    async fn typename_reports_the_bound_object() {
        let exec = todo_schema(store_with(&[("a", "U1")]));
        let response = run(&exec, "{ __typename todos { __typename user { __typename } } }").await;

        assert_eq!(response["data"], json!({
            "__typename": "Query",
            "todos": [{"__typename": "Todo", "user": {"__typename": "User"}}],
        }));
    }

    #[tokio::test]
    async fn variables_reach_generated_resolvers() {
        let exec = todo_schema(Arc::new(TodoStore::default()));
        let request = Request::parse(r#"
            mutation Create($input: NewTodo!) { createTodo(input: $input) { text } }
        "#)
            .unwrap()
            .with_variables(Variables::new().with("input", json!({"text": "x", "userId": "U9"})));
        let response = exec.execute(request).await.unwrap();

        assert!(response.is_ok(), "{:?}", response.errors);
        assert_eq!(response.data, json!({"createTodo": {"text": "x"}}));
    }
}

mod single_lookup {
    use super::*;

    const LOOKUP_SDL: &str = "
        type Todo { id: Int! text: String! done: Boolean! }
        type Query { todo(id: Int!): Todo }
    ";

    fn lookup_schema() -> ExecutableSchema {
        let catalog = StaticCatalog::new()
            .with_type("Todo", vec![
                Member::field("id", HostType::named("i32")),
                Member::field("text", HostType::named("String")),
                Member::field("done", HostType::named("bool")),
            ]);
        ExecutableSchema::builder(bind(LOOKUP_SDL, &catalog))
            .resolver("Query", "todo", FnResolver::new(|_, _, args: Arguments| async move {
                match args.get("id").and_then(|id| id.as_i64()) {
                    Some(1) => Ok(FieldValue::object(
                        Record::new("Todo")
                            .with("id", 1)
                            .with("text", "write tests")
                            .with("done", false),
                    )),
                    _ => Ok(FieldValue::Null),
                }
            }))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn found_todo_is_the_whole_envelope() {
        let exec = lookup_schema();
        let response = run(&exec, "{ todo(id: 1) { id text done } }").await;

        assert_eq!(
            response.to_string(),
            r#"{"data":{"todo":{"id":1,"text":"write tests","done":false}},"errors":[]}"#,
        );
    }

    #[tokio::test]
    async fn missing_todo_is_null_without_errors() {
        let exec = lookup_schema();
        let response = run(&exec, "{ todo(id: 99) { id } }").await;

        assert_eq!(response.to_string(), r#"{"data":{"todo":null},"errors":[]}"#);
    }
}

mod mutations {
    use super::*;

    #[tokio::test]
    async fn root_fields_run_in_document_order() {
        let exec = todo_schema(Arc::new(TodoStore::default()));
        let response = run(&exec, r#"
            mutation {
              first: createTodo(input: {text: "slow one", userId: "U1"}) { id }
              second: createTodo(input: {text: "fast one", userId: "U1"}) { id }
            }
        "#).await;

        assert_eq!(response["data"], json!({
            "first": {"id": "T1"},
            "second": {"id": "T2"},
        }));
    }

    #[tokio::test]
    async fn missing_mutation_type_is_a_request_error() {
        let bound = bind("type Query { a: Int }", &StaticCatalog::new());
        let exec = ExecutableSchema::builder(bound)
            .resolver("Query", "a", FnResolver::new(|_, _, _| async { Ok(FieldValue::from(1)) }))
            .build()
            .unwrap();
        let response = run(&exec, "mutation { a }").await;

        assert_eq!(response, json!({
            "data": null,
            "errors": [{"message": "Schema is not configured for mutation operations."}],
        }));
    }
}

mod null_propagation {
    use super::*;

    const ITEMS_SDL: &str = "
        type Item { name: String! }
        type Query {
          items: [Item!]
          strictItems: [Item!]!
          sparseItems: [Item!]
          item: Item!
        }
    ";

    fn items() -> FieldValue {
        FieldValue::list(vec![
            FieldValue::object(Record::new("Item").with("name", "a")),
            FieldValue::object(Record::new("Item").with("name", FieldValue::Null)),
            FieldValue::object(Record::new("Item").with("name", "c")),
        ])
    }

    fn items_schema() -> ExecutableSchema {
        let catalog = StaticCatalog::from_json_str(
            r#"{"Item": [{"name": "name", "results": ["String"]}]}"#,
        ).unwrap();
        ExecutableSchema::builder(bind(ITEMS_SDL, &catalog))
            .resolver("Query", "items", FnResolver::new(|_, _, _| async { Ok(items()) }))
            .resolver("Query", "strictItems", FnResolver::new(|_, _, _| async { Ok(items()) }))
            .resolver("Query", "sparseItems", FnResolver::new(|_, _, _| async {
                Ok(FieldValue::list(vec![
                    FieldValue::Null,
                    FieldValue::object(Record::new("Item").with("name", "b")),
                ]))
            }))
            .resolver("Query", "item", FnResolver::new(|_, _, _| async {
                Ok(FieldValue::object(Record::new("Item").with("name", FieldValue::Null)))
            }))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn null_element_nulls_the_nullable_list() {
        let exec = items_schema();
        let response = exec.execute(Request::parse("{ items { name } }").unwrap()).await.unwrap();

        assert_eq!(response.data, json!({"items": null}));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "must not be null");
        assert_eq!(response.errors[0].path, vec![
            PathSegment::Field("items".to_string()),
            PathSegment::Index(1),
            PathSegment::Field("name".to_string()),
        ]);
        assert_eq!(response.errors[0].locations.len(), 1);
    }

    #[tokio::test]
    async fn violation_bubbles_to_data() {
        let exec = items_schema();
        let response = exec.execute(
            Request::parse("{ items { name } strictItems { name } }").unwrap(),
        ).await.unwrap();

        assert_eq!(response.data, json!(null));
        assert_eq!(response.errors.len(), 2);
    }

    #[tokio::test]
    async fn non_null_object_field() {
        let exec = items_schema();
        let response = run(&exec, "{ item { name } }").await;

        assert_eq!(response["data"], json!(null));
        assert_eq!(response["errors"][0]["path"], json!(["item", "name"]));
    }

    #[tokio::test]
    async fn fault_in_later_element_outranks_earlier_violation() {
        let exec = items_schema();
        let err = exec.execute(Request::parse("{ sparseItems { nope } }").unwrap())
            .await
            .unwrap_err();

        assert_eq!(err, ExecutionFault::UnknownField {
            field: "nope".to_string(),
            object: "Item".to_string(),
        });
    }

    #[tokio::test]
    async fn sibling_values_survive_a_nulled_field() {
        let exec = items_schema();
        let response = run(&exec, "{ items { name } alias: items { __typename } }").await;

        assert_eq!(response["data"], json!({
            "items": null,
            "alias": [{"__typename": "Item"}, {"__typename": "Item"}, {"__typename": "Item"}],
        }));
    }
}

mod field_errors {
    use super::*;

    const GREET_SDL: &str = "
        type Query {
          greet(name: String = \"world\"): String!
          maybe: String
          boom: String
          stuck: String
        }
    ";

    struct Panicking;
    #[async_trait::async_trait]
    impl FieldResolver for Panicking {
        async fn resolve(
            &self,
            _ctx: &ResolverContext<'_>,
            _parent: &Arc<dyn HostObject>,
            _args: &Arguments,
        ) -> Result<FieldValue, FieldError> {
            panic!("resolver exploded")
        }
    }

    struct Stuck;
    #[async_trait::async_trait]
    impl FieldResolver for Stuck {
        async fn resolve(
            &self,
            _ctx: &ResolverContext<'_>,
            _parent: &Arc<dyn HostObject>,
            _args: &Arguments,
        ) -> Result<FieldValue, FieldError> {
            futures::future::pending::<()>().await;
            Ok(FieldValue::Null)
        }
    }

    fn greet_schema() -> ExecutableSchema {
        ExecutableSchema::builder(bind(GREET_SDL, &StaticCatalog::new()))
            .resolver("Query", "greet", FnResolver::new(|_, _, args: Arguments| async move {
                let name = args.get("name").and_then(|v| v.as_str()).unwrap_or("?").to_string();
                Ok(FieldValue::from(format!("hello, {name}")))
            }))
            .resolver("Query", "maybe", FnResolver::new(|_, _, _| async {
                Err(FieldError::new("not today").with_extension("code", json!("NOPE")))
            }))
            .resolver("Query", "boom", Panicking)
            .resolver("Query", "stuck", Stuck)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn argument_defaults_apply() {
        let exec = greet_schema();

        assert_eq!(run(&exec, "{ greet }").await["data"], json!({"greet": "hello, world"}));
        assert_eq!(
            run(&exec, r#"{ greet(name: "Ann") }"#).await["data"],
            json!({"greet": "hello, Ann"}),
        );
        assert_eq!(
            run(&exec, "query($n: String) { greet(name: $n) }").await["data"],
            json!({"greet": "hello, world"}),
        );
    }

    #[tokio::test]
    async fn explicit_null_argument_overrides_default() {
        let exec = greet_schema();
        let response = run(&exec, "{ greet(name: null) }").await;

        assert_eq!(response["data"], json!({"greet": "hello, ?"}));
    }

    #[tokio::test]
    async fn unknown_argument_is_a_field_error() {
        let exec = greet_schema();
        let response = run(&exec, "{ greet(bogus: 1) }").await;

        assert_eq!(response["data"], json!(null));
        assert_eq!(
            response["errors"][0]["message"],
            json!("Unknown argument \"bogus\" on field \"Query.greet\"."),
        );
    }

    #[tokio::test]
    async fn resolver_error_is_recorded_with_extensions() {
        let exec = greet_schema();
        let response = run(&exec, "{ greet maybe }").await;

        assert_eq!(response["data"], json!({"greet": "hello, world", "maybe": null}));
        assert_eq!(response["errors"][0]["message"], json!("not today"));
        assert_eq!(response["errors"][0]["path"], json!(["maybe"]));
        assert_eq!(response["errors"][0]["extensions"], json!({"code": "NOPE"}));
    }

    #[tokio::test]
    async fn panic_becomes_internal_error() {
        let exec = greet_schema();
        let response = run(&exec, "{ greet boom }").await;

        assert_eq!(response["data"], json!({"greet": "hello, world", "boom": null}));
        assert_eq!(response["errors"][0]["message"], json!("internal system error"));
        assert_eq!(response["errors"][0]["path"], json!(["boom"]));
    }

    #[tokio::test]
    async fn cancelled_request_abandons_resolvers() {
        let exec = greet_schema();
        let token = CancellationToken::new();
        token.cancel();
        let request = Request::parse("{ __typename stuck }")
            .unwrap()
            .with_cancellation(token);
        let response = exec.execute(request).await.unwrap();

        assert_eq!(response.data, json!({"__typename": "Query", "stuck": null}));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "request cancelled");
    }

    #[tokio::test]
    async fn closure_resolvers_see_their_context() {
        let exec = ExecutableSchema::builder(bind("type Query { location: String }", &StaticCatalog::new()))
            .resolver("Query", "location", FnResolver::new(|ctx, _, _| {
                let path = ctx.path().to_string();
                let cancelled = ctx.cancellation().is_cancelled();
                async move { Ok(FieldValue::from(format!("{path} cancelled={cancelled}"))) }
            }))
            .build()
            .unwrap();

        assert_eq!(
            run(&exec, "{ here: location }").await["data"],
            json!({"here": "here cancelled=false"}),
        );
    }

    #[tokio::test]
    async fn unknown_field_is_a_fault() {
        let exec = greet_schema();
        let err = exec.execute(Request::parse("{ nope }").unwrap()).await.unwrap_err();

        assert_eq!(err, ExecutionFault::UnknownField {
            field: "nope".to_string(),
            object: "Query".to_string(),
        });
    }
}

mod request_errors {
    use super::*;

    #[tokio::test]
    async fn subscriptions_are_rejected() {
        let exec = todo_schema(Arc::new(TodoStore::default()));
        let response = run(&exec, "subscription { todos { id } }").await;

        assert_eq!(response, json!({
            "data": null,
            "errors": [{"message": "subscriptions are not supported"}],
        }));
    }

    #[tokio::test]
    async fn ambiguous_operation() {
        let exec = todo_schema(Arc::new(TodoStore::default()));
        let response = run(&exec, "query A { todos { id } } query B { todos { text } }").await;

        assert_eq!(response["data"], json!(null));
        assert_eq!(response["errors"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_variable() {
        let exec = todo_schema(Arc::new(TodoStore::default()));
        let response = run(&exec, "mutation($input: NewTodo!) { createTodo(input: $input) { id } }").await;

        assert_eq!(response["data"], json!(null));
        assert_eq!(
            response["errors"][0]["message"],
            json!("Variable \"$input\" of required type \"NewTodo!\" was not provided."),
        );
    }
}

mod middleware {
    use super::*;

    #[derive(Default)]
    struct PathRecorder {
        paths: Arc<Mutex<Vec<String>>>,
    }
    #[async_trait::async_trait]
    impl ResolverMiddleware for PathRecorder {
        async fn around_resolver(
            &self,
            ctx: &ResolverContext<'_>,
            next: NextResolver<'_>,
        ) -> Result<FieldValue, FieldError> {
            self.paths.lock().unwrap().push(ctx.path().to_string());
            next.run().await
        }
    }

    struct Shout;
    #[async_trait::async_trait]
    impl ResolverMiddleware for Shout {
        async fn around_resolver(
            &self,
            _ctx: &ResolverContext<'_>,
            next: NextResolver<'_>,
        ) -> Result<FieldValue, FieldError> {
            match next.run().await? {
                FieldValue::Scalar(serde_json::Value::String(s)) => Ok(s.to_uppercase().into()),
                other => Ok(other),
            }
        }
    }

    #[tokio::test]
    async fn wraps_resolvers_but_not_member_reads() {
        let store = store_with(&[("a", "U1")]);
        let recorder = PathRecorder::default();
        let paths = Arc::clone(&recorder.paths);
        let exec = ExecutableSchema::builder(bind(TODO_SDL, &todo_catalog()))
            .query_root(QueryRoot(store))
            .mutation_root(MutationRoot(Arc::new(TodoStore::default())))
            .resolver("Todo", "user", TodoUserResolver)
            .middleware(recorder)
            .build()
            .unwrap();

        run(&exec, "{ todos { id text user { name } } }").await;

        assert_eq!(*paths.lock().unwrap(), vec!["todos", "todos.0.user"]);
    }

    #[tokio::test]
    async fn can_rewrite_results() {
        let exec = ExecutableSchema::builder(bind("type Query { hi: String }", &StaticCatalog::new()))
            .resolver("Query", "hi", FnResolver::new(|_, _, _| async { Ok(FieldValue::from("hi there")) }))
            .middleware(Shout)
            .build()
            .unwrap();

        assert_eq!(run(&exec, "{ hi }").await["data"], json!({"hi": "HI THERE"}));
    }
}
