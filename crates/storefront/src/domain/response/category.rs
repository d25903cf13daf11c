use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category listing entry; seen both as `{id, name}` and `{CategoryId, Name}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "CategoryId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,

    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name_alt: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Category {
    pub fn key(&self) -> Option<i64> {
        self.id.or(self.category_id)
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.name_alt.as_deref())
            .unwrap_or("")
    }
}
