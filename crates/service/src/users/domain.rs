use serde::{Deserialize, Serialize};

use models::user::UserKind;

/// Input for directory insertion; the password arrives pre-hashed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewUser {
    #[serde(rename = "type")]
    pub kind: UserKind,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
}
