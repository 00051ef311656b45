use crate::operation::OperationKind;
use crate::operation::Request;
use crate::operation::RequestError;
use crate::operation::Variables;
use crate::schema::SchemaBuilder;
use crate::value::CoercionError;
use serde_json::json;

mod operation_selection {
    use super::*;

    #[test]
    fn single_anonymous_operation() {
        let request = Request::parse("{ a }").unwrap();
        let op = request.select_operation().unwrap();

        assert_eq!(op.kind(), OperationKind::Query);
        assert_eq!(op.name(), None);
    }

    #[test]
    fn named_operation_is_selected() {
        let request = Request::parse("query A { a } mutation B { b }")
            .unwrap()
            .with_operation_name("B");
        let op = request.select_operation().unwrap();

        assert_eq!(op.kind(), OperationKind::Mutation);
        assert_eq!(op.name(), Some("B"));
    }

    #[test]
    fn multiple_operations_require_a_name() {
        let request = Request::parse("query A { a } query B { b }").unwrap();

        assert_eq!(
            request.select_operation().unwrap_err(),
            RequestError::MultipleOperationsWithoutName,
        );
    }

    #[test]
    fn unknown_operation_name() {
        let request = Request::parse("query A { a }")
            .unwrap()
            .with_operation_name("Z");

        assert_eq!(
            request.select_operation().unwrap_err(),
            RequestError::UnknownOperation("Z".to_string()),
        );
    }

    #[test]
    fn document_without_operations() {
        let request = Request::parse("fragment F on Query { a }").unwrap();

        assert_eq!(request.select_operation().unwrap_err(), RequestError::NoOperation);
    }
}

mod variables {
    use super::*;

    fn schema() -> crate::schema::Schema {
        SchemaBuilder::new()
            .load_str(None, concat!(
                "input TodoInput { text: String!, done: Boolean = false }\n",
                "type Query { a: Int }\n",
            ))
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn defaults_and_coercion() {
        let schema = schema();
        let request = Request::parse(
            "query($n: Int = 3, $input: TodoInput!, $ids: [ID!]) { a }",
        ).unwrap();
        let provided = Variables::new()
            .with("input", json!({"text": "x"}))
            .with("ids", json!(5))
            .with("undeclared", json!(1));

        let coerced = request.select_operation()
            .unwrap()
            .coerce_variables(&schema, &provided)
            .unwrap();

        assert_eq!(coerced.get("n"), Some(&json!(3)));
        assert_eq!(coerced.get("input"), Some(&json!({"text": "x", "done": false})));
        assert_eq!(coerced.get("ids"), Some(&json!(["5"])));
        assert_eq!(coerced.get("undeclared"), None);
    }

    #[test]
    fn missing_required_variable() {
        let schema = schema();
        let request = Request::parse("query($id: Int!) { a }").unwrap();

        let err = request.select_operation()
            .unwrap()
            .coerce_variables(&schema, &Variables::new())
            .unwrap_err();

        assert_eq!(err, RequestError::MissingVariable {
            name: "id".to_string(),
            type_name: "Int!".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Variable \"$id\" of required type \"Int!\" was not provided.",
        );
    }

    #[test]
    fn invalid_variable_value() {
        let schema = schema();
        let request = Request::parse("query($input: TodoInput) { a }").unwrap();
        let provided = Variables::new().with("input", json!({"text": "x", "bogus": 1}));

        let err = request.select_operation()
            .unwrap()
            .coerce_variables(&schema, &provided)
            .unwrap_err();

        assert_eq!(err, RequestError::InvalidVariable {
            name: "input".to_string(),
            err: CoercionError::UnknownInputField {
                input_type: "TodoInput".to_string(),
                field: "bogus".to_string(),
            },
        });
    }
}
