use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Adzuna reports some booleans as `1`/`0` or `"1"`/`"0"`.
pub(crate) fn loose_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let flag = match value {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => Some(n.as_f64().map_or(false, |n| n != 0.0)),
        Some(Value::String(s)) => match s.trim() {
            "1" | "true" => Some(true),
            "0" | "false" | "" => Some(false),
            other => {
                return Err(serde::de::Error::custom(format!(
                    "expected a boolean flag, got '{}'",
                    other
                )))
            }
        },
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected a boolean flag, got {}",
                other
            )))
        }
    };
    Ok(flag)
}

/// Contract-type filters go out as `1`/`0`.
pub(crate) fn flag<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(b) => serializer.serialize_u8(u8::from(*b)),
        None => serializer.serialize_none(),
    }
}
