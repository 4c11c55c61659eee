use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::users::domain::NewUser;
use crate::users::repository::UserRepository;
use models::user;

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, input: NewUser) -> Result<user::Model, ServiceError> {
        let am = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            kind: Set(input.kind.as_str().to_string()),
            name: Set(input.name),
            phone: Set(input.phone),
            email: Set(input.email),
            password_hash: Set(input.password_hash),
            created_at: Set(Utc::now().into()),
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<user::Model>, ServiceError> {
        user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}
