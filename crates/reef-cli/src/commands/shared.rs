use serde::de::DeserializeOwned;

/// Parse an enum value the way its serde representation spells it,
/// accepting `-` and `_` interchangeably.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let trimmed = raw.trim();
    let candidates = [trimmed.replace('-', "_"), trimmed.replace('_', "-")];
    let mut last_error = None;
    for candidate in candidates {
        match serde_json::from_value(serde_json::Value::String(candidate)) {
            Ok(value) => return Ok(value),
            Err(error) => last_error = Some(error),
        }
    }
    Err(anyhow::anyhow!(
        "invalid {field} '{raw}': {}",
        last_error.map_or_else(String::new, |error| error.to_string())
    ))
}
