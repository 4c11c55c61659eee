use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::products::domain::{NewProduct, ProductPatch};
use crate::products::repository::ProductRepository;
use models::{business, product};

pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn insert(&self, input: NewProduct, business_id: Uuid) -> Result<product::Model, ServiceError> {
        let am = product::ActiveModel {
            id: Set(Uuid::new_v4()),
            business_id: Set(business_id),
            name: Set(input.name),
            description: Set(input.description),
            weight_grams: Set(input.weight_grams),
            quantity_units: Set(input.quantity_units),
            price: Set(input.price),
            image_url: Set(input.image_url),
            is_available: Set(input.is_available.unwrap_or(true)),
            created_at: Set(Utc::now().into()),
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all_with_business(
        &self,
        business_id: Option<Uuid>,
    ) -> Result<Vec<(product::Model, Option<business::Model>)>, ServiceError> {
        let mut query = product::Entity::find().find_also_related(business::Entity);
        if let Some(business_id) = business_id {
            query = query.filter(product::Column::BusinessId.eq(business_id));
        }
        query
            .order_by_desc(product::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_business(&self, business_id: Uuid) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::BusinessId.eq(business_id))
            .order_by_desc(product::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<product::Model, ServiceError> {
        let mut am: product::ActiveModel = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or_else(|| ServiceError::not_found("product"))?
            .into();
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(description) = patch.description {
            am.description = Set(Some(description));
        }
        if let Some(weight) = patch.weight_grams {
            am.weight_grams = Set(Some(weight));
        }
        if let Some(quantity) = patch.quantity_units {
            am.quantity_units = Set(Some(quantity));
        }
        if let Some(price) = patch.price {
            am.price = Set(price);
        }
        if let Some(url) = patch.image_url {
            am.image_url = Set(Some(url));
        }
        if let Some(available) = patch.is_available {
            am.is_available = Set(available);
        }
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}
