use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{FieldRule, Record, RecordId};

const ID: FieldRule = FieldRule::new("id", &["id"]);
const CONTENT: FieldRule = FieldRule::new("content", &["content", "text", "body"]);
const CREATED_AT: FieldRule = FieldRule::new("created_at", &["created_at", "createdAt", "date"]);
const STATUS: FieldRule = FieldRule::new("status", &["status", "approved", "is_approved"]);

/// News item shown in the app feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub id: RecordId,
    pub content: String,
    pub created_at: String,
    pub status: bool,
}

impl Record for News {
    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> bool {
        self.status
    }

    fn collection_name() -> &'static str {
        "news"
    }

    fn normalize(raw: &Value) -> Self {
        Self {
            id: RecordId(ID.integer(raw)),
            content: CONTENT.text(raw),
            created_at: CREATED_AT.text(raw),
            status: STATUS.flag(raw),
        }
    }
}

/// Form for `POST /admin/news/add`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsDto {
    pub content: String,
}

impl NewsDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.content.trim().is_empty() {
            return Err("Please enter news content.".into());
        }
        Ok(())
    }

    pub fn to_form(&self) -> Vec<(String, String)> {
        vec![("content".to_string(), self.content.trim().to_string())]
    }
}
