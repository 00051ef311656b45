use crate::execution::FieldError;
use crate::execution::Location;
use crate::execution::PathSegment;
use crate::execution::Response;
use crate::execution::ResponsePath;
use crate::execution::ServerError;
use serde_json::json;

#[test]
fn errors_key_is_always_present() {
    let response = Response {
        data: json!({"a": 1}),
        errors: vec![],
    };

    assert_eq!(response.to_json(), json!({"data": {"a": 1}, "errors": []}));
    assert_eq!(serde_json::to_value(&response).unwrap(), response.to_json());
}

#[test]
fn server_error_omits_empty_members() {
    let error = ServerError::new("nope");

    assert_eq!(error.to_json(), json!({"message": "nope"}));
    assert_eq!(serde_json::to_value(&error).unwrap(), json!({"message": "nope"}));
}

#[test]
fn server_error_carries_path_and_location() {
    let root = ResponsePath::new(None, PathSegment::Field("todos".to_string()));
    let item = ResponsePath::new(Some(&root), PathSegment::Index(2));
    let leaf = ResponsePath::new(Some(&item), PathSegment::Field("text".to_string()));
    let error = ServerError::from_field_error(
        FieldError::new("bad").with_extension("code", json!(7)),
        leaf.to_vec(),
        crate::ast::Pos { line: 3, column: 5 },
    );

    assert_eq!(leaf.to_string(), "todos.2.text");
    assert_eq!(error.locations, vec![Location { line: 3, column: 5 }]);
    assert_eq!(error.to_json(), json!({
        "message": "bad",
        "locations": [{"line": 3, "column": 5}],
        "path": ["todos", 2, "text"],
        "extensions": {"code": 7},
    }));
    assert_eq!(serde_json::to_value(&error).unwrap(), error.to_json());
}

#[test]
fn serialized_keys_keep_envelope_order() {
    let error = ServerError::from_field_error(
        FieldError::new("bad").with_extension("code", json!(7)),
        vec![PathSegment::Field("todo".to_string())],
        crate::ast::Pos { line: 1, column: 3 },
    );
    let response = Response {
        data: json!({"todo": null}),
        errors: vec![error],
    };

    assert_eq!(
        response.to_json().to_string(),
        concat!(
            r#"{"data":{"todo":null},"errors":[{"message":"bad","#,
            r#""locations":[{"line":1,"column":3}],"path":["todo"],"extensions":{"code":7}}]}"#,
        ),
    );
}

#[test]
fn field_error_from_std_error() {
    let io_err = std::io::Error::other("disk on fire");
    let err: FieldError = io_err.into();

    assert_eq!(err.message(), "disk on fire");
    assert_eq!(err.extensions(), None);
}
