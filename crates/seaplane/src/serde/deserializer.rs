/// Deserializer for building variants and schemas from JSON
use serde_json::Value as JsonValue;

use crate::args::{OptionMap, ParseOption};
use crate::error::{SeaplaneError, SeaplaneResult};
use crate::variant::Variant;

/// Convert a JSON scalar to a variant.
///
/// Integers that fit `i64` become Integer, every other number becomes Real.
/// Arrays and objects have no variant counterpart.
pub fn from_value(json_value: &JsonValue) -> SeaplaneResult<Variant> {
    match json_value {
        JsonValue::Null => Ok(Variant::Absent),
        JsonValue::Bool(b) => Ok(Variant::Boolean(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Variant::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Variant::Real(f))
            } else {
                Err(SeaplaneError::InvalidSchema(format!("unsupported number: {}", n)))
            }
        }
        JsonValue::String(s) => Ok(Variant::Text(s.clone())),
        JsonValue::Array(_) => Err(SeaplaneError::InvalidSchema(
            "arrays cannot be option defaults".to_string(),
        )),
        JsonValue::Object(_) => Err(SeaplaneError::InvalidSchema(
            "objects cannot be option defaults".to_string(),
        )),
    }
}

/// Build a schema from a JSON object of `name: default` pairs.
///
/// A `null` default declares an option with no kind; filling it fails later.
pub fn schema_from_json(json_value: &JsonValue) -> SeaplaneResult<OptionMap> {
    let object = json_value.as_object().ok_or_else(|| {
        SeaplaneError::InvalidSchema("schema must be a JSON object".to_string())
    })?;

    let mut schema = OptionMap::with_capacity_and_hasher(object.len(), Default::default());
    for (name, default) in object {
        let value = from_value(default).map_err(|e| match e {
            SeaplaneError::InvalidSchema(msg) => {
                SeaplaneError::InvalidSchema(format!("{}: {}", name, msg))
            }
            other => other,
        })?;
        schema.insert(name.clone(), value);
    }
    Ok(schema)
}

/// Parse a JSON document and build a schema from it
pub fn schema_from_json_str(json_str: &str) -> SeaplaneResult<OptionMap> {
    let json_value: JsonValue = serde_json::from_str(json_str)
        .map_err(|e| SeaplaneError::InvalidSchema(format!("invalid JSON: {}", e)))?;
    schema_from_json(&json_value)
}

/// Load parser settings from JSON; missing fields keep their defaults.
pub fn parse_option_from_json_str(json_str: &str) -> Result<ParseOption, String> {
    serde_json::from_str(json_str).map_err(|e| format!("Failed to parse options: {}", e))
}
