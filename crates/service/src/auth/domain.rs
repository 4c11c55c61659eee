use sea_orm::entity::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::user::UserKind;

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterInput {
    #[serde(rename = "type")]
    pub kind: UserKind,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Token payload. `sub` is the user id; verification checks `exp` but does
/// not re-check that the subject still exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub exp: usize,
}

/// User view returned to clients; never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub phone: String,
    pub created_at: DateTimeWithTimeZone,
}

impl From<&models::user::Model> for PublicUser {
    fn from(u: &models::user::Model) -> Self {
        Self {
            id: u.id,
            email: u.email.clone(),
            name: u.name.clone(),
            kind: u.kind.clone(),
            phone: u.phone.clone(),
            created_at: u.created_at,
        }
    }
}

/// Result of a successful register or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: PublicUser,
}
