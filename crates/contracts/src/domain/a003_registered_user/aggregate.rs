use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{FieldRule, Record, RecordId};

const ID: FieldRule = FieldRule::new("id", &["id"]);
const PF_ID: FieldRule = FieldRule::new("pf_id", &["pf_id", "pfId", "pf"]);
const NAME: FieldRule = FieldRule::new("name", &["name", "full_name"]);
const DEPARTMENT: FieldRule = FieldRule::new("department", &["department", "dept"]);
const LOCATION: FieldRule = FieldRule::new("location", &["location", "place"]);
const MOBILE: FieldRule = FieldRule::new("mobile", &["mobile", "phone"]);
const STATUS: FieldRule = FieldRule::new("status", &["status", "is_active"]);
const REGISTERED: FieldRule = FieldRule::new("registered", &["registered"]);

/// Event participant managed from the "User Management" tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: RecordId,
    /// Employee number; kept as text because the backend sends numbers or strings
    pub pf_id: String,
    pub name: String,
    pub department: String,
    pub location: String,
    pub mobile: String,
    pub status: bool,
    pub registered: String,
}

impl Record for RegisteredUser {
    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> bool {
        self.status
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn normalize(raw: &Value) -> Self {
        Self {
            id: RecordId(ID.integer(raw)),
            pf_id: PF_ID.text(raw),
            name: NAME.text(raw),
            department: DEPARTMENT.text(raw),
            location: LOCATION.text(raw),
            mobile: MOBILE.text(raw),
            status: STATUS.flag(raw),
            registered: REGISTERED.text(raw),
        }
    }
}

/// Form for `POST /admin/users/add`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisteredUserDto {
    pub pf_id: String,
    pub name: String,
    pub department: String,
    pub location: String,
    pub mobile: String,
}

impl RegisteredUserDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.pf_id.trim().is_empty() {
            return Err("Please enter PF ID.".into());
        }
        if !self.pf_id.trim().chars().all(|c| c.is_ascii_digit()) {
            return Err("PF ID must contain digits only.".into());
        }
        if self.name.trim().is_empty() {
            return Err("Please enter name.".into());
        }
        Ok(())
    }

    pub fn to_form(&self) -> Vec<(String, String)> {
        [
            ("pf_id", &self.pf_id),
            ("name", &self.name),
            ("department", &self.department),
            ("location", &self.location),
            ("mobile", &self.mobile),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.trim().to_string()))
        .collect()
    }
}
