use serde::{Deserialize, Serialize};

/// Aggregate counts for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionStats {
    pub total: u64,
    pub likes: u64,
    pub loves: u64,
    pub dislikes: u64,
}

/// Listing row with the reacting user joined in by the repository.
#[derive(Debug, Clone, Serialize)]
pub struct ReactionWithUser {
    #[serde(flatten)]
    pub reaction: models::reaction::Model,
    pub user: Option<models::user::Model>,
}

/// Listing row with the reacted product joined in by the repository.
#[derive(Debug, Clone, Serialize)]
pub struct ReactionWithProduct {
    #[serde(flatten)]
    pub reaction: models::reaction::Model,
    pub product: Option<models::product::Model>,
}
