use serde::{Deserialize, Deserializer};

/// Deserializes an optional string into an optional `i64`.
///
/// Query strings carry every value as text and an empty value (`?page=`) is
/// treated the same as a missing one.
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("`{s}` is not a valid integer"))),
        None => Ok(None),
    }
}
