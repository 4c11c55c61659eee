use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::reactions::repository::ReactionRepository;
use models::reaction::ReactionKind;
use models::{product, reaction, user};

pub struct SeaOrmReactionRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl ReactionRepository for SeaOrmReactionRepository {
    async fn find_by_user_and_product(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<reaction::Model>, ServiceError> {
        reaction::Entity::find()
            .filter(reaction::Column::UserId.eq(user_id))
            .filter(reaction::Column::ProductId.eq(product_id))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn insert(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        kind: ReactionKind,
    ) -> Result<reaction::Model, ServiceError> {
        let am = reaction::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            product_id: Set(product_id),
            kind: Set(kind.as_str().to_string()),
            created_at: Set(Utc::now().into()),
        };
        // A concurrent insert for the same (user, product) can slip past the
        // service's optimistic lookup; the unique index catches it here.
        am.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::Conflict(
                "a reaction from this user already exists for this product".into(),
            ),
            _ => ServiceError::Db(e.to_string()),
        })
    }

    async fn update_kind(&self, id: Uuid, kind: ReactionKind) -> Result<reaction::Model, ServiceError> {
        let mut am: reaction::ActiveModel = reaction::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or_else(|| ServiceError::not_found("reaction"))?
            .into();
        am.kind = Set(kind.as_str().to_string());
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_product_with_user(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<(reaction::Model, Option<user::Model>)>, ServiceError> {
        reaction::Entity::find()
            .find_also_related(user::Entity)
            .filter(reaction::Column::ProductId.eq(product_id))
            .order_by_desc(reaction::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_user_with_product(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(reaction::Model, Option<product::Model>)>, ServiceError> {
        reaction::Entity::find()
            .find_also_related(product::Entity)
            .filter(reaction::Column::UserId.eq(user_id))
            .order_by_desc(reaction::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_product(&self, product_id: Uuid) -> Result<Vec<reaction::Model>, ServiceError> {
        reaction::Entity::find()
            .filter(reaction::Column::ProductId.eq(product_id))
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        reaction::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}
