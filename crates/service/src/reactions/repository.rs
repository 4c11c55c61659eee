use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ServiceError;
use models::reaction::ReactionKind;

/// Repository abstraction for reaction persistence.
///
/// `insert` surfaces a storage-level uniqueness violation on
/// (user, product) as `Conflict`; everything else passes through as a
/// database error.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    async fn find_by_user_and_product(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<models::reaction::Model>, ServiceError>;
    async fn insert(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        kind: ReactionKind,
    ) -> Result<models::reaction::Model, ServiceError>;
    async fn update_kind(&self, id: Uuid, kind: ReactionKind) -> Result<models::reaction::Model, ServiceError>;
    async fn find_by_product_with_user(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<(models::reaction::Model, Option<models::user::Model>)>, ServiceError>;
    async fn find_by_user_with_product(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(models::reaction::Model, Option<models::product::Model>)>, ServiceError>;
    async fn find_by_product(&self, product_id: Uuid) -> Result<Vec<models::reaction::Model>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Keeps insertion order; listings iterate newest-first to mirror the
    /// `created_at DESC` ordering of the real store. `insert` enforces the
    /// (user, product) uniqueness the way the store's index would.
    #[derive(Default)]
    pub struct MockReactionRepository {
        rows: Mutex<Vec<models::reaction::Model>>,
    }

    #[async_trait]
    impl ReactionRepository for MockReactionRepository {
        async fn find_by_user_and_product(
            &self,
            user_id: Uuid,
            product_id: Uuid,
        ) -> Result<Option<models::reaction::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .find(|r| r.user_id == user_id && r.product_id == product_id)
                .cloned())
        }

        async fn insert(
            &self,
            user_id: Uuid,
            product_id: Uuid,
            kind: ReactionKind,
        ) -> Result<models::reaction::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|r| r.user_id == user_id && r.product_id == product_id) {
                return Err(ServiceError::Conflict(
                    "a reaction from this user already exists for this product".into(),
                ));
            }
            let reaction = models::reaction::Model {
                id: Uuid::new_v4(),
                user_id,
                product_id,
                kind: kind.as_str().to_string(),
                created_at: Utc::now().into(),
            };
            rows.push(reaction.clone());
            Ok(reaction)
        }

        async fn update_kind(&self, id: Uuid, kind: ReactionKind) -> Result<models::reaction::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| ServiceError::not_found("reaction"))?;
            row.kind = kind.as_str().to_string();
            Ok(row.clone())
        }

        async fn find_by_product_with_user(
            &self,
            product_id: Uuid,
        ) -> Result<Vec<(models::reaction::Model, Option<models::user::Model>)>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .rev()
                .filter(|r| r.product_id == product_id)
                .map(|r| (r.clone(), None))
                .collect())
        }

        async fn find_by_user_with_product(
            &self,
            user_id: Uuid,
        ) -> Result<Vec<(models::reaction::Model, Option<models::product::Model>)>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .rev()
                .filter(|r| r.user_id == user_id)
                .map(|r| (r.clone(), None))
                .collect())
        }

        async fn find_by_product(&self, product_id: Uuid) -> Result<Vec<models::reaction::Model>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().rev().filter(|r| r.product_id == product_id).cloned().collect())
        }

        async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            rows.retain(|r| r.id != id);
            Ok(())
        }
    }
}
