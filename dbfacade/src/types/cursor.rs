use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result stream handed back by the query engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub result: Vec<Value>,
    #[serde(default)]
    pub has_more: bool,
    /// Total number of results, only present if requested with `count`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default)]
    pub warnings: Vec<Value>,
}

impl Cursor {
    pub fn new(result: Vec<Value>) -> Self {
        Self {
            result,
            ..Default::default()
        }
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl IntoIterator for Cursor {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.result.into_iter()
    }
}
