use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::approval::ApprovalState;
use crate::domain::common::{Record, RecordId};
use crate::system::http::FormPart;

// ============================================================================
// Field rules
// ============================================================================

/// Backend key synonyms for each agenda field, in priority order
pub mod rules {
    use crate::domain::common::FieldRule;

    pub const ID: FieldRule = FieldRule::new("id", &["id"]);
    pub const TITLE: FieldRule = FieldRule::new("title", &["title"]);
    pub const DESCRIPTION: FieldRule = FieldRule::new("description", &["description", "desc"]);
    pub const DATETIME: FieldRule =
        FieldRule::new("datetime", &["datetime", "date_time", "dateTime"]);
    pub const LOCATION: FieldRule = FieldRule::new("location", &["location", "place"]);
    pub const IMAGE: FieldRule = FieldRule::new("image_url", &["image_url", "image"]);
    pub const STATUS: FieldRule = FieldRule::new(
        "status",
        &[
            "status",
            "approved",
            "is_approved",
            "registration_status",
            "registration_Status",
        ],
    );

    pub const ALL: &[FieldRule] = &[ID, TITLE, DESCRIPTION, DATETIME, LOCATION, IMAGE, STATUS];
}

// ============================================================================
// Record
// ============================================================================

/// Event agenda item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agenda {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// As sent by the backend (usually `YYYY-MM-DDTHH:MM[:SS]`)
    pub datetime: String,
    pub location: String,
    pub image_url: Option<String>,
    /// `true` = approved, `false` = pending
    pub status: bool,
}

impl Agenda {
    pub fn approval_state(&self) -> ApprovalState {
        ApprovalState::from(self.status)
    }
}

impl Record for Agenda {
    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> bool {
        self.status
    }

    fn collection_name() -> &'static str {
        "agendas"
    }

    fn normalize(raw: &Value) -> Self {
        Self {
            id: RecordId(rules::ID.integer(raw)),
            title: rules::TITLE.text(raw),
            description: rules::DESCRIPTION.text(raw),
            datetime: rules::DATETIME.text(raw),
            location: rules::LOCATION.text(raw),
            image_url: rules::IMAGE.optional_text(raw),
            status: rules::STATUS.flag(raw),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Image chosen for upload alongside a new agenda
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    /// Declared media type, e.g. `image/png`
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Validated agenda ready for `POST /admin/agendas/add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAgenda {
    pub title: String,
    pub description: String,
    pub datetime: String,
    pub location: String,
    pub image: Option<ImageUpload>,
}

impl NewAgenda {
    /// Multipart payload: text fields first, then the optional image
    pub fn to_multipart(&self) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::text("title", &self.title),
            FormPart::text("description", &self.description),
            FormPart::text("datetime", &self.datetime),
            FormPart::text("location", &self.location),
        ];
        if let Some(image) = &self.image {
            parts.push(FormPart::File {
                name: "image".to_string(),
                file_name: image.file_name.clone(),
                content_type: image.content_type.clone(),
                bytes: image.bytes.clone(),
            });
        }
        parts
    }
}
