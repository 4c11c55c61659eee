use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Attributes for creating a product; the business comes from the query,
/// never the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub weight_grams: Option<i32>,
    pub quantity_units: Option<i32>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub weight_grams: Option<i32>,
    pub quantity_units: Option<i32>,
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

/// Listing row with the business joined in by the repository.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithBusiness {
    #[serde(flatten)]
    pub product: models::product::Model,
    pub business: Option<models::business::Model>,
}
