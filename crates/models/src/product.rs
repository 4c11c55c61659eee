use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::business;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub weight_grams: Option<i32>,
    pub quantity_units: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "business::Entity",
        from = "Column::BusinessId",
        to = "business::Column::Id",
        on_delete = "Cascade"
    )]
    Business,
}

impl Related<business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Business.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    let len = name.trim().chars().count();
    if len < 3 {
        return Err(ModelError::Validation("name must be at least 3 characters".into()));
    }
    if len > 255 {
        return Err(ModelError::Validation("name must not exceed 255 characters".into()));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), ModelError> {
    if description.chars().count() > 1000 {
        return Err(ModelError::Validation("description must not exceed 1000 characters".into()));
    }
    Ok(())
}

pub fn validate_price(price: Decimal) -> Result<(), ModelError> {
    // Column precision is two decimals; anything below 0.01 would round away.
    if price < Decimal::new(1, 2) {
        return Err(ModelError::Validation("price must be at least 0.01".into()));
    }
    Ok(())
}

pub fn validate_weight_grams(weight: i32) -> Result<(), ModelError> {
    if weight < 1 {
        return Err(ModelError::Validation("weight must be at least 1 gram".into()));
    }
    Ok(())
}

pub fn validate_quantity_units(quantity: i32) -> Result<(), ModelError> {
    if quantity < 1 {
        return Err(ModelError::Validation("quantity must be at least 1 unit".into()));
    }
    Ok(())
}

pub fn validate_image_url(url: &str) -> Result<(), ModelError> {
    if url.chars().count() > 500 {
        return Err(ModelError::Validation("image url must not exceed 500 characters".into()));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ModelError::Validation("image url must be a valid url".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_floor_is_one_cent() {
        assert!(validate_price(Decimal::new(1, 2)).is_ok()); // 0.01
        assert!(validate_price(Decimal::new(5, 3)).is_err()); // 0.005 rounds away
        assert!(validate_price(Decimal::ZERO).is_err());
        assert!(validate_price(Decimal::new(-100, 2)).is_err());
    }

    #[test]
    fn name_length_bounds() {
        assert!(validate_name("ab").is_err());
        assert!(validate_name("pan integral").is_ok());
    }
}
