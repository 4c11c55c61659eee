use serde::{Deserialize, Serialize};

/// Attributes for creating a business. The owner comes from the verified
/// token, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewBusiness {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub whatsapp_number: String,
    pub opening_hours: Option<serde_json::Value>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BusinessPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub whatsapp_number: Option<String>,
    pub opening_hours: Option<serde_json::Value>,
}

/// Listing row with the owner joined in by the repository.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessWithOwner {
    #[serde(flatten)]
    pub business: models::business::Model,
    pub owner: Option<models::user::Model>,
}
