use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::businesses::domain::{BusinessPatch, NewBusiness};
use crate::businesses::repository::BusinessRepository;
use crate::errors::ServiceError;
use models::{business, user};

pub struct SeaOrmBusinessRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl BusinessRepository for SeaOrmBusinessRepository {
    async fn insert(&self, input: NewBusiness, owner_id: Uuid) -> Result<business::Model, ServiceError> {
        let am = business::ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner_id),
            name: Set(input.name),
            description: Set(input.description),
            address: Set(input.address),
            whatsapp_number: Set(input.whatsapp_number),
            opening_hours: Set(input.opening_hours),
            created_at: Set(Utc::now().into()),
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all_with_owner(&self) -> Result<Vec<(business::Model, Option<user::Model>)>, ServiceError> {
        business::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(business::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<business::Model>, ServiceError> {
        business::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<business::Model>, ServiceError> {
        business::Entity::find()
            .filter(business::Column::OwnerId.eq(owner_id))
            .order_by_desc(business::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(&self, id: Uuid, patch: BusinessPatch) -> Result<business::Model, ServiceError> {
        let mut am: business::ActiveModel = business::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or_else(|| ServiceError::not_found("business"))?
            .into();
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(description) = patch.description {
            am.description = Set(Some(description));
        }
        if let Some(address) = patch.address {
            am.address = Set(address);
        }
        if let Some(number) = patch.whatsapp_number {
            am.whatsapp_number = Set(number);
        }
        if let Some(hours) = patch.opening_hours {
            am.opening_hours = Set(Some(hours));
        }
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        // Dependent products and their reactions go with the row via the
        // store's cascading foreign keys.
        business::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}
