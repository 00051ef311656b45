use crate::ast;
use crate::operation::Variables;
use crate::schema::Schema;
use crate::types::DefinitionKind;
use crate::types::TypeRef;
use serde_json::Value as Json;
use thiserror::Error;

type Result<T> = std::result::Result<T, CoercionError>;

/// Convert a literal from a document into JSON, substituting variables.
///
/// Enum literals become strings. A variable with no binding becomes `null`;
/// callers that must distinguish an absent variable from a `null` one check
/// for `Value::Variable` before calling this.
pub fn literal_to_json(value: &ast::Value, variables: &Variables) -> Json {
    match value {
        ast::Value::Variable(name) =>
            variables.get(name).cloned().unwrap_or(Json::Null),
        ast::Value::Int(number) =>
            number.as_i64().map_or(Json::Null, Json::from),
        ast::Value::Float(float) =>
            serde_json::Number::from_f64(*float).map_or(Json::Null, Json::Number),
        ast::Value::String(string) => Json::String(string.to_owned()),
        ast::Value::Boolean(boolean) => Json::Bool(*boolean),
        ast::Value::Null => Json::Null,
        ast::Value::Enum(name) => Json::String(name.to_owned()),
        ast::Value::List(items) => Json::Array(
            items.iter().map(|item| literal_to_json(item, variables)).collect(),
        ),
        ast::Value::Object(fields) => Json::Object(
            fields.iter()
                .map(|(name, field)| (name.to_owned(), literal_to_json(field, variables)))
                .collect(),
        ),
    }
}

/// Coerce a raw input value (an argument, a variable, or a default literal
/// already converted to JSON) to the input type `type_ref`.
///
/// Follows the input coercion rules of GraphQL: a single value given for a
/// list type is wrapped in a one-element list, `Int`s are accepted where a
/// `Float` is expected, and omitted input object fields take their declared
/// default.
pub fn coerce_input(schema: &Schema, type_ref: &TypeRef, value: &Json) -> Result<Json> {
    if value.is_null() {
        return if type_ref.nullable() {
            Ok(Json::Null)
        } else {
            Err(CoercionError::NullForNonNullType {
                type_name: type_ref.to_string(),
            })
        };
    }

    match type_ref {
        TypeRef::List(list_ref) => match value {
            Json::Array(items) => items.iter()
                .map(|item| coerce_input(schema, list_ref.element(), item))
                .collect::<Result<Vec<_>>>()
                .map(Json::Array),
            single => Ok(Json::Array(vec![
                coerce_input(schema, list_ref.element(), single)?,
            ])),
        },

        TypeRef::Named(named_ref) => coerce_named(schema, named_ref.name(), value),
    }
}

fn coerce_named(schema: &Schema, type_name: &str, value: &Json) -> Result<Json> {
    let def = schema.get_type(type_name)
        .ok_or_else(|| CoercionError::UndefinedType(type_name.to_string()))?;

    let invalid = || CoercionError::InvalidValue {
        type_name: type_name.to_string(),
        value: value.to_owned(),
    };

    match def.kind() {
        DefinitionKind::Scalar => match type_name {
            "Int" => value.as_i64()
                .filter(|int| i32::try_from(*int).is_ok())
                .map(Json::from)
                .ok_or_else(invalid),
            "Float" => value.as_f64()
                .and_then(serde_json::Number::from_f64)
                .map(Json::Number)
                .ok_or_else(invalid),
            "String" => value.is_string()
                .then(|| value.to_owned())
                .ok_or_else(invalid),
            "Boolean" => value.is_boolean()
                .then(|| value.to_owned())
                .ok_or_else(invalid),
            "ID" => match value {
                Json::String(_) => Ok(value.to_owned()),
                Json::Number(number) if number.is_i64() || number.is_u64() =>
                    Ok(Json::String(number.to_string())),
                _ => Err(invalid()),
            },
            // Custom scalars are opaque to the engine.
            _ => Ok(value.to_owned()),
        },

        DefinitionKind::Enum => {
            let name = value.as_str().ok_or_else(invalid)?;
            if def.enum_values().contains_key(name) {
                Ok(value.to_owned())
            } else {
                Err(CoercionError::UnknownEnumValue {
                    enum_name: type_name.to_string(),
                    value: name.to_string(),
                })
            }
        },

        DefinitionKind::InputObject => {
            let fields = value.as_object().ok_or_else(invalid)?;
            if let Some(unknown) = fields.keys().find(|name| !def.input_fields().contains_key(*name)) {
                return Err(CoercionError::UnknownInputField {
                    input_type: type_name.to_string(),
                    field: unknown.to_owned(),
                });
            }

            let mut coerced = serde_json::Map::new();
            for (name, input_field) in def.input_fields() {
                if let Some(field_value) = fields.get(name) {
                    coerced.insert(
                        name.to_owned(),
                        coerce_input(schema, input_field.type_ref(), field_value)?,
                    );
                } else if let Some(default) = input_field.default_value() {
                    let default = literal_to_json(default, &Variables::default());
                    coerced.insert(
                        name.to_owned(),
                        coerce_input(schema, input_field.type_ref(), &default)?,
                    );
                } else if !input_field.type_ref().nullable() {
                    return Err(CoercionError::MissingInputField {
                        input_type: type_name.to_string(),
                        field: name.to_owned(),
                        field_type: input_field.type_ref().to_string(),
                    });
                }
            }
            Ok(Json::Object(coerced))
        },

        kind => Err(CoercionError::NotAnInputType {
            type_name: type_name.to_string(),
            kind,
        }),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error("expected a value of type `{type_name}`, found {value}")]
    InvalidValue {
        type_name: String,
        value: Json,
    },

    #[error("input field `{input_type}.{field}` of required type `{field_type}` was not provided")]
    MissingInputField {
        input_type: String,
        field: String,
        field_type: String,
    },

    #[error("`{type_name}` is a {kind} type and cannot be used as input")]
    NotAnInputType {
        type_name: String,
        kind: DefinitionKind,
    },

    #[error("expected a non-null value of type `{type_name}`, found null")]
    NullForNonNullType {
        type_name: String,
    },

    #[error("type `{0}` is not defined")]
    UndefinedType(String),

    #[error("`{value}` is not a value of enum `{enum_name}`")]
    UnknownEnumValue {
        enum_name: String,
        value: String,
    },

    #[error("`{field}` is not a field of input type `{input_type}`")]
    UnknownInputField {
        input_type: String,
        field: String,
    },
}
