use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads an optional string field, treating any non-string JSON value as absent.
///
/// Payloads come from browsers and scripts; a `main_title` sent as a number
/// should surface as "main_title required" rather than a parse failure.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Returns the value only when it is present and non-empty.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
