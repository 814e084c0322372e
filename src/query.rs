//! Query string rendering for JSON-valued parameters.
//!
//! Parameters are rendered as `application/x-www-form-urlencoded` pairs in
//! insertion order. Nested values flatten into bracketed keys
//! (`tags[0]=a&tags[1]=b`, `filter[name]=x`), booleans render as `1`/`0`, and
//! `null` values are omitted entirely.

use serde_json::{Map, Value};
use url::form_urlencoded;

/// Renders `params` as an encoded query string without the leading `?`.
///
/// Returns an empty string when no parameter produces a pair.
pub(crate) fn encode(params: &Map<String, Value>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        append(&mut serializer, key, value);
    }
    serializer.finish()
}

fn append(serializer: &mut form_urlencoded::Serializer<'_, String>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            serializer.append_pair(key, if *b { "1" } else { "0" });
        }
        Value::Number(n) => {
            serializer.append_pair(key, &n.to_string());
        }
        Value::String(s) => {
            serializer.append_pair(key, s);
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                append(serializer, &format!("{}[{}]", key, index), item);
            }
        }
        Value::Object(fields) => {
            for (name, field) in fields {
                append(serializer, &format!("{}[{}]", key, name), field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_scalars() {
        let encoded = encode(&params(json!({
            "q": "hello world",
            "page": 2,
            "ratio": 0.5,
            "active": true,
            "archived": false,
        })));

        assert_eq!(encoded, "q=hello+world&page=2&ratio=0.5&active=1&archived=0");
    }

    #[test]
    fn test_null_is_omitted() {
        let encoded = encode(&params(json!({ "a": null, "b": "x" })));
        assert_eq!(encoded, "b=x");
    }

    #[test]
    fn test_arrays_and_objects_use_bracketed_keys() {
        let encoded = encode(&params(json!({
            "ids": [1, 2],
            "filter": { "name": "web" },
        })));

        assert_eq!(encoded, "ids%5B0%5D=1&ids%5B1%5D=2&filter%5Bname%5D=web");
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let encoded = encode(&params(json!({ "label": "a&b=c" })));
        assert_eq!(encoded, "label=a%26b%3Dc");

        let decoded: Vec<(String, String)> = form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(decoded, vec![("label".to_string(), "a&b=c".to_string())]);
    }

    #[test]
    fn test_empty_params() {
        assert_eq!(encode(&Map::new()), "");
        assert_eq!(encode(&params(json!({ "empty": [] }))), "");
    }
}
