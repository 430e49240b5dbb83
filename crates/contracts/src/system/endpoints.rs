//! Admin API paths, relative to the configured base URL

use crate::domain::common::RecordId;

pub const LOGIN: &str = "/admin/login";
pub const LOGOUT: &str = "/admin/logout";
pub const USERS_UPLOAD_CSV: &str = "/admin/users/upload_csv";

/// `GET /admin/{collection}`
pub fn list_path(collection: &str) -> String {
    format!("/admin/{}", collection)
}

/// `POST /admin/{collection}/add`
pub fn add_path(collection: &str) -> String {
    format!("/admin/{}/add", collection)
}

/// `POST /admin/{collection}/delete/{id}`: real deletion
pub fn delete_path(collection: &str, id: RecordId) -> String {
    format!("/admin/{}/delete/{}", collection, id)
}

/// `POST /admin/{collection}/updateStatus/{id}`: sets the record to approved.
/// Never removes anything.
pub fn update_status_path(collection: &str, id: RecordId) -> String {
    format!("/admin/{}/updateStatus/{}", collection, id)
}
