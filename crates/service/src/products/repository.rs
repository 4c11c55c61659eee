use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{NewProduct, ProductPatch};
use crate::errors::ServiceError;

/// Repository abstraction for product persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, input: NewProduct, business_id: Uuid) -> Result<models::product::Model, ServiceError>;
    async fn find_all_with_business(
        &self,
        business_id: Option<Uuid>,
    ) -> Result<Vec<(models::product::Model, Option<models::business::Model>)>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<models::product::Model>, ServiceError>;
    async fn find_by_business(&self, business_id: Uuid) -> Result<Vec<models::product::Model>, ServiceError>;
    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<models::product::Model, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Keeps insertion order; listings iterate newest-first to mirror the
    /// `created_at DESC` ordering of the real store.
    #[derive(Default)]
    pub struct MockProductRepository {
        rows: Mutex<Vec<models::product::Model>>,
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn insert(&self, input: NewProduct, business_id: Uuid) -> Result<models::product::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let product = models::product::Model {
                id: Uuid::new_v4(),
                business_id,
                name: input.name,
                description: input.description,
                weight_grams: input.weight_grams,
                quantity_units: input.quantity_units,
                price: input.price,
                image_url: input.image_url,
                is_available: input.is_available.unwrap_or(true),
                created_at: Utc::now().into(),
            };
            rows.push(product.clone());
            Ok(product)
        }

        async fn find_all_with_business(
            &self,
            business_id: Option<Uuid>,
        ) -> Result<Vec<(models::product::Model, Option<models::business::Model>)>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .rev()
                .filter(|p| business_id.map_or(true, |b| p.business_id == b))
                .map(|p| (p.clone(), None))
                .collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<models::product::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|p| p.id == id).cloned())
        }

        async fn find_by_business(&self, business_id: Uuid) -> Result<Vec<models::product::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().rev().filter(|p| p.business_id == business_id).cloned().collect())
        }

        async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<models::product::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| ServiceError::not_found("product"))?;
            if let Some(name) = patch.name {
                row.name = name;
            }
            if let Some(description) = patch.description {
                row.description = Some(description);
            }
            if let Some(weight) = patch.weight_grams {
                row.weight_grams = Some(weight);
            }
            if let Some(quantity) = patch.quantity_units {
                row.quantity_units = Some(quantity);
            }
            if let Some(price) = patch.price {
                row.price = price;
            }
            if let Some(url) = patch.image_url {
                row.image_url = Some(url);
            }
            if let Some(available) = patch.is_available {
                row.is_available = available;
            }
            Ok(row.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            rows.retain(|p| p.id != id);
            Ok(())
        }
    }
}
