/// JSON conversion for variants and option tables
///
/// Kinds map onto JSON as:
/// - Absent -> null
/// - Boolean -> boolean
/// - Integer -> integer number
/// - Real -> number (non-finite values become their rendered string)
/// - Text -> string
///
/// Schemas can be declared as a JSON object of defaults, see
/// [`schema_from_json_str`].
mod deserializer;
mod serializer;

pub use deserializer::{
    from_value as variant_from_json, parse_option_from_json_str, schema_from_json,
    schema_from_json_str,
};
pub use serializer::{
    options_to_json, to_string as options_to_json_string, to_value as variant_to_json,
};
