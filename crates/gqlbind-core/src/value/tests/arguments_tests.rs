use crate::value::Arguments;
use serde_json::json;

#[test]
fn try_get_deserializes() {
    let args: Arguments = [("limit", json!(5)), ("tags", json!(["a", "b"]))]
        .into_iter()
        .collect();

    assert_eq!(args.try_get::<i32>("limit").unwrap(), 5);
    assert_eq!(args.try_get::<Vec<String>>("tags").unwrap(), vec!["a", "b"]);
}

#[test]
fn missing_argument_reads_as_null() {
    let args = Arguments::new();

    assert_eq!(args.try_get::<Option<i32>>("limit").unwrap(), None);
    assert!(args.try_get::<i32>("limit").is_err());
}

#[test]
fn wrong_type_is_a_field_error() {
    let mut args = Arguments::new();
    args.insert("limit", json!("five"));

    let err = args.try_get::<i32>("limit").unwrap_err();
    assert!(err.message().starts_with("invalid argument `limit`"), "{err}");
}
