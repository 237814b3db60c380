use serde::{Deserialize, Deserializer};

// the frontend sends category ids and difficulty either as numbers or as
// the string value of a <select>, so both are accepted
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

/// Deserialize a number or string into its string form (`1` and `"1"` both give `"1"`).
pub fn deserialize_optional_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        NumberOrString::Number(n) => n.to_string(),
        NumberOrString::Text(s) => s,
    }))
}

/// Required variant of [`deserialize_optional_id_string`].
pub fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n.to_string()),
        NumberOrString::Text(s) => Ok(s),
    }
}

/// Deserialize a number or numeric string into an `i32`.
pub fn deserialize_optional_lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("{n} is out of range"))),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("Wrong value {s}, can not parse to integer"))),
    }
}

/// Like [`deserialize_optional_lenient_i32`], but `0` counts as absent.
pub fn deserialize_optional_nonzero_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_lenient_i32(deserializer)?.filter(|n| *n != 0))
}

/// Query-string page number; anything that isn't an integer means page 1.
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(1))
}
