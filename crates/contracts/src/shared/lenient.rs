//! Deserializers for scraped columns whose JSON type varies between sources.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, number or bool and keeps it as text; `null` becomes `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Reads a counter that may be missing, `null`, a float or a numeric string.
/// Anything that is not a non-negative number reads as `0`.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_string")]
        value: Option<String>,
    }

    #[derive(Deserialize)]
    struct Counter {
        #[serde(default, deserialize_with = "count")]
        n: u64,
    }

    fn counter(json: &str) -> u64 {
        serde_json::from_str::<Counter>(json).unwrap().n
    }

    fn probe(json: &str) -> Option<String> {
        serde_json::from_str::<Probe>(json).unwrap().value
    }

    #[test]
    fn test_opt_string_accepts_mixed_types() {
        assert_eq!(probe(r#"{"value": "110001"}"#).as_deref(), Some("110001"));
        assert_eq!(probe(r#"{"value": 110001}"#).as_deref(), Some("110001"));
        assert_eq!(probe(r#"{"value": null}"#), None);
        assert_eq!(probe(r#"{}"#), None);
    }

    #[test]
    fn test_count_defaults_to_zero() {
        assert_eq!(counter(r#"{"n": 42}"#), 42);
        assert_eq!(counter(r#"{"n": 42.0}"#), 42);
        assert_eq!(counter(r#"{"n": "17"}"#), 17);
        assert_eq!(counter(r#"{"n": null}"#), 0);
        assert_eq!(counter(r#"{"n": -3}"#), 0);
        assert_eq!(counter(r#"{}"#), 0);
    }
}
