use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{BusinessPatch, NewBusiness};
use crate::errors::ServiceError;

/// Repository abstraction for business persistence.
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    async fn insert(&self, input: NewBusiness, owner_id: Uuid) -> Result<models::business::Model, ServiceError>;
    async fn find_all_with_owner(&self) -> Result<Vec<(models::business::Model, Option<models::user::Model>)>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<models::business::Model>, ServiceError>;
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<models::business::Model>, ServiceError>;
    async fn update(&self, id: Uuid, patch: BusinessPatch) -> Result<models::business::Model, ServiceError>;
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
    pub struct MockBusinessRepository {
        rows: Mutex<Vec<models::business::Model>>,
    }

    #[async_trait]
    impl BusinessRepository for MockBusinessRepository {
        async fn insert(&self, input: NewBusiness, owner_id: Uuid) -> Result<models::business::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let business = models::business::Model {
                id: Uuid::new_v4(),
                owner_id,
                name: input.name,
                description: input.description,
                address: input.address,
                whatsapp_number: input.whatsapp_number,
                opening_hours: input.opening_hours,
                created_at: Utc::now().into(),
            };
            rows.push(business.clone());
            Ok(business)
        }

        async fn find_all_with_owner(&self) -> Result<Vec<(models::business::Model, Option<models::user::Model>)>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().rev().map(|b| (b.clone(), None)).collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<models::business::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|b| b.id == id).cloned())
        }

        async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<models::business::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().rev().filter(|b| b.owner_id == owner_id).cloned().collect())
        }

        async fn update(&self, id: Uuid, patch: BusinessPatch) -> Result<models::business::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or_else(|| ServiceError::not_found("business"))?;
            if let Some(name) = patch.name {
                row.name = name;
            }
            if let Some(description) = patch.description {
                row.description = Some(description);
            }
            if let Some(address) = patch.address {
                row.address = address;
            }
            if let Some(number) = patch.whatsapp_number {
                row.whatsapp_number = number;
            }
            if let Some(hours) = patch.opening_hours {
                row.opening_hours = Some(hours);
            }
            Ok(row.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            rows.retain(|b| b.id != id);
            Ok(())
        }
    }
}
