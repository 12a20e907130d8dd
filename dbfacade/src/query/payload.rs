use crate::utils::is_truthy;
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

/// The canonical query payload.
///
/// Keys of a caller-built payload that are not interpreted here are kept in
/// `extra` and sent along unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPayload {
    pub query: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_vars: Option<Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
    pub count: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QueryPayload {
    pub fn new(query: impl Into<Value>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Takes over a payload object assembled by the caller.
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        let query = map.remove("query").unwrap_or_default();
        let bind_vars = map.remove("bindVars").filter(|v| !v.is_null());

        let options = match map.remove("options") {
            Some(Value::Object(options)) => options,
            Some(other) if is_truthy(&other) => {
                debug!("ignoring non-object payload options `{}`", other);
                Map::new()
            }
            _ => Map::new(),
        };

        let count = map.remove("count").is_some_and(|v| is_truthy(&v));
        let batch_size = map.remove("batchSize").filter(|v| !v.is_null());
        let cache = map.remove("cache").filter(|v| !v.is_null());

        Self {
            query,
            bind_vars,
            options,
            count,
            batch_size,
            cache,
            extra: map,
        }
    }

    /// Query text, if the payload carries a string
    pub fn query_str(&self) -> Option<&str> {
        self.query.as_str()
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    pub fn to_value(&self) -> Value {
        // Serialization of string-keyed maps and plain values cannot fail
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_map_keeps_unknown_keys() {
        let map = json!({
            "query": "FOR d IN c RETURN d",
            "bindVars": {"x": 1},
            "options": {"fullCount": true},
            "count": true,
            "batchSize": 100,
            "ttl": 30,
        });
        let Value::Object(map) = map else { unreachable!() };

        let payload = QueryPayload::from_map(map);
        assert_eq!(payload.query_str(), Some("FOR d IN c RETURN d"));
        assert_eq!(payload.bind_vars, Some(json!({"x": 1})));
        assert_eq!(payload.option("fullCount"), Some(&json!(true)));
        assert!(payload.count);
        assert_eq!(payload.batch_size, Some(json!(100)));
        assert_eq!(payload.cache, None);
        assert_eq!(payload.extra.get("ttl"), Some(&json!(30)));
    }

    #[test]
    fn serializes_with_wire_names() {
        let mut payload = QueryPayload::new("RETURN @v");
        payload.bind_vars = Some(json!({"v": 1}));
        payload.batch_size = Some(json!(5));

        assert_eq!(
            payload.to_value(),
            json!({
                "query": "RETURN @v",
                "bindVars": {"v": 1},
                "count": false,
                "batchSize": 5,
            })
        );
    }
}
