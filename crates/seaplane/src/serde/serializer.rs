/// Serializer for converting variants to serde_json::Value
use serde_json::{Map, Number, Value as JsonValue};

use crate::args::{OptionMap, sorted_entries};
use crate::variant::Variant;

/// Convert a variant to a serde_json::Value
pub fn to_value(variant: &Variant) -> JsonValue {
    match variant {
        Variant::Absent => JsonValue::Null,
        Variant::Boolean(b) => JsonValue::Bool(*b),
        Variant::Integer(i) => JsonValue::Number(Number::from(*i)),
        // JSON has no inf/nan
        Variant::Real(n) => Number::from_f64(*n)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(variant.format())),
        Variant::Text(s) => JsonValue::String(s.clone()),
    }
}

/// Convert an option table to a JSON object, keys in name order
pub fn options_to_json(options: &OptionMap) -> JsonValue {
    let mut object = Map::new();
    for (name, value) in sorted_entries(options) {
        object.insert(name.to_owned(), to_value(value));
    }
    JsonValue::Object(object)
}

/// Convert an option table to a JSON string
pub fn to_string(options: &OptionMap, pretty: bool) -> Result<String, String> {
    let json_value = options_to_json(options);

    if pretty {
        serde_json::to_string_pretty(&json_value)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e))
    } else {
        serde_json::to_string(&json_value).map_err(|e| format!("Failed to serialize to JSON: {}", e))
    }
}
