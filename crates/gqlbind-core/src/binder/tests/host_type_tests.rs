use crate::binder::HostType;
use crate::binder::HostTypeParseError;

#[test]
fn parses_nested_generics() {
    let parsed: HostType = "Option<Vec<Option<app::Todo>>>".parse().unwrap();

    assert_eq!(parsed, HostType::optional(HostType::list(HostType::optional(
        HostType::named("app::Todo"),
    ))));
    assert_eq!(parsed.to_string(), "Option<Vec<Option<app::Todo>>>");
}

#[test]
fn markers_are_recognized() {
    assert_eq!("Context".parse::<HostType>(), Ok(HostType::Context));
    assert_eq!("Error".parse::<HostType>(), Ok(HostType::Error));
}

#[test]
fn rejects_garbage() {
    assert_eq!("".parse::<HostType>(), Err(HostTypeParseError::Empty));
    assert_eq!(
        "Vec<a b>".parse::<HostType>(),
        Err(HostTypeParseError::InvalidTypeName("a b".to_string())),
    );
}

#[test]
fn deserializes_from_json_strings() {
    let parsed: Vec<HostType> = serde_json::from_str(r#"["i32", "Vec<String>"]"#).unwrap();

    assert_eq!(parsed, vec![
        HostType::named("i32"),
        HostType::list(HostType::named("String")),
    ]);
    assert!(serde_json::from_str::<HostType>(r#""Option<>""#).is_err());
}
