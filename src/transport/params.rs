use serde::Serialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("request could not be serialized: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request must serialize to a flat object, got {kind}")]
    NotAnObject { kind: &'static str },

    #[error("field {field} is not a scalar value")]
    NestedField { field: String },
}

/// Flatten a request model into query parameters.
///
/// Fields that are `null`, empty strings or empty containers are left out.
/// Whitespace-only strings are sent as given. Numbers render as decimal,
/// booleans as `1`/`0`.
/// Parameter order follows the field order of the model.
pub fn encode_params<T: Serialize>(request: &T) -> Result<Vec<(String, String)>, EncodeError> {
    let fields = match serde_json::to_value(request)? {
        Value::Object(fields) => fields,
        other => {
            return Err(EncodeError::NotAnObject {
                kind: kind_of(&other),
            });
        }
    };

    let mut params = Vec::<(String, String)>::with_capacity(fields.len());
    for (key, value) in fields {
        let rendered = match value {
            Value::Null => continue,
            Value::String(text) => text,
            Value::Bool(flag) => if flag { "1" } else { "0" }.to_owned(),
            Value::Number(number) => number.to_string(),
            Value::Array(items) if items.is_empty() => continue,
            Value::Object(items) if items.is_empty() => continue,
            Value::Array(_) | Value::Object(_) => {
                return Err(EncodeError::NestedField { field: key });
            }
        };
        if rendered.is_empty() {
            continue;
        }
        params.push((key, rendered));
    }
    Ok(params)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
