use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Index metadata as reported by the storage engine.
///
/// Only `id` and `name` are interpreted here, every other field (type, fields,
/// uniqueness, ...) is carried untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    /// Full index handle, `<collection>/<index id>`
    pub id: String,
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IndexDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_owned(), value.into());
        self
    }

    /// Returns true if this index is the one addressed by `handle`, either by
    /// its full id or by its name.
    pub fn is_addressed_by(&self, handle: &str, name: &str) -> bool {
        self.id == handle || self.name == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn engine_fields_round_through() {
        let raw = json!({
            "id": "users/0",
            "name": "primary",
            "type": "primary",
            "fields": ["_key"],
            "unique": true,
        });

        let idx: IndexDescriptor = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(idx.id, "users/0");
        assert_eq!(idx.name, "primary");
        assert_eq!(idx.extra["type"], "primary");
        assert_eq!(serde_json::to_value(&idx).unwrap(), raw);
    }

    #[test]
    fn addressing() {
        let idx = IndexDescriptor::new("users/42", "by_email");
        assert!(idx.is_addressed_by("users/42", "42"));
        assert!(idx.is_addressed_by("users/by_email", "by_email"));
        assert!(!idx.is_addressed_by("users/43", "43"));
    }
}
