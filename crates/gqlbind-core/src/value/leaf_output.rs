use crate::types::Definition;
use crate::types::DefinitionKind;
use crate::value::FieldValue;
use serde_json::Value as Json;

/// Serialize a resolved value for a scalar or enum field. The error is the
/// message of the field error to report.
pub(crate) fn serialize_leaf(def: &Definition, value: &FieldValue) -> Result<Json, String> {
    let type_name = def.name();
    match (def.kind(), value) {
        (DefinitionKind::Enum, FieldValue::Enum(name))
            | (DefinitionKind::Enum, FieldValue::Scalar(Json::String(name))) =>
            if def.enum_values().contains_key(name) {
                Ok(Json::String(name.to_owned()))
            } else {
                Err(format!("Enum `{type_name}` cannot represent value: {name:?}"))
            },

        (DefinitionKind::Scalar, FieldValue::Scalar(json)) =>
            serialize_scalar(type_name, json),

        (DefinitionKind::Scalar, FieldValue::Enum(name)) =>
            serialize_scalar(type_name, &Json::String(name.to_owned())),

        _ => Err(format!("expected a value of leaf type `{type_name}`, got {value:?}")),
    }
}

fn serialize_scalar(type_name: &str, json: &Json) -> Result<Json, String> {
    let serialized = match type_name {
        "Int" => json.as_i64()
            .or_else(|| json.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .filter(|int| i32::try_from(*int).is_ok())
            .map(Json::from),
        "Float" => json.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map(Json::Number),
        "String" => json.is_string().then(|| json.to_owned()),
        "Boolean" => json.is_boolean().then(|| json.to_owned()),
        "ID" => match json {
            Json::String(_) => Some(json.to_owned()),
            Json::Number(number) if number.is_i64() || number.is_u64() =>
                Some(Json::String(number.to_string())),
            _ => None,
        },
        _ => Some(json.to_owned()),
    };

    serialized.ok_or_else(|| format!("{type_name} cannot represent value: {json}"))
}
