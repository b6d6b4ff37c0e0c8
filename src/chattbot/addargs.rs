//! Parsing for the `--add-args` option.
//!
//! The value is parsed first as a strict JSON object. On parse failure it
//! falls back to a permissive `key:value,key:value` heuristic that strips
//! brace and quote characters. The fallback is deprecated: it is lossy for
//! values containing `,` and exists only so loosely-quoted invocations keep
//! working.

use crate::error::{BotError, Result};
use std::collections::BTreeMap;

pub fn parse_add_args(raw: &str) -> Result<BTreeMap<String, String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "{}" {
        return Ok(BTreeMap::new());
    }

    if let Ok(map) = serde_json::from_str::<BTreeMap<String, serde_json::Value>>(trimmed) {
        return Ok(map
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect());
    }

    split_heuristic(trimmed)
}

fn split_heuristic(raw: &str) -> Result<BTreeMap<String, String>> {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '\'' | '"'))
        .collect();

    let mut map = BTreeMap::new();
    for segment in stripped.split(',') {
        let mut parts = segment.splitn(2, ':');
        let key = parts.next().unwrap_or("").trim();
        let value = parts
            .next()
            .ok_or_else(|| {
                BotError::Validation(format!(
                    "could not parse add-args segment '{}': expected key:value",
                    segment.trim()
                ))
            })?
            .trim();
        if key.is_empty() {
            return Err(BotError::Validation(format!(
                "could not parse add-args segment '{}': empty key",
                segment.trim()
            )));
        }
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_default_yield_no_arguments() {
        assert!(parse_add_args("{}").unwrap().is_empty());
        assert!(parse_add_args("   ").unwrap().is_empty());
    }

    #[test]
    fn strict_json_object() {
        let map = parse_add_args(r#"{"command": "echo hi"}"#).unwrap();
        assert_eq!(map.get("command").map(String::as_str), Some("echo hi"));
    }

    #[test]
    fn json_non_string_values_are_stringified() {
        let map = parse_add_args(r#"{"count": 3, "flag": true}"#).unwrap();
        assert_eq!(map.get("count").map(String::as_str), Some("3"));
        assert_eq!(map.get("flag").map(String::as_str), Some("true"));
    }

    #[test]
    fn fallback_splits_on_comma_and_colon() {
        let map = parse_add_args("command:echo hi,other:x").unwrap();
        assert_eq!(map.get("command").map(String::as_str), Some("echo hi"));
        assert_eq!(map.get("other").map(String::as_str), Some("x"));
    }

    #[test]
    fn fallback_strips_brace_and_quote_characters() {
        let map = parse_add_args("{'command': 'ls -la'}").unwrap();
        assert_eq!(map.get("command").map(String::as_str), Some("ls -la"));
    }

    #[test]
    fn fallback_keeps_colons_inside_values() {
        let map = parse_add_args("url:http://example.com").unwrap();
        assert_eq!(
            map.get("url").map(String::as_str),
            Some("http://example.com")
        );
    }

    #[test]
    fn fallback_rejects_segment_without_colon() {
        let err = parse_add_args("just-a-value").unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));
    }

    #[test]
    fn fallback_is_lossy_for_values_containing_commas() {
        // Documented limitation of the deprecated heuristic: the value is cut
        // at the comma and the remainder is treated as a new segment.
        assert!(parse_add_args("command:echo a, b").is_err());
    }
}
