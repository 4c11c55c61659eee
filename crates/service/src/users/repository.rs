use async_trait::async_trait;
use uuid::Uuid;

use super::domain::NewUser;
use crate::errors::ServiceError;

/// Repository abstraction for identity persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, input: NewUser) -> Result<models::user::Model, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<models::user::Model>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<models::user::Model>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<Uuid, models::user::Model>>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn insert(&self, input: NewUser) -> Result<models::user::Model, ServiceError> {
            let mut users = self.users.lock().unwrap();
            // The store enforces email uniqueness; the mock mirrors it.
            if users.values().any(|u| u.email == input.email) {
                return Err(ServiceError::Conflict("email is already registered".into()));
            }
            let user = models::user::Model {
                id: Uuid::new_v4(),
                kind: input.kind.as_str().to_string(),
                name: input.name,
                phone: input.phone,
                email: input.email,
                password_hash: input.password_hash,
                created_at: Utc::now().into(),
            };
            users.insert(user.id, user.clone());
            Ok(user)
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<models::user::Model>, ServiceError> {
            let users = self.users.lock().unwrap();
            Ok(users.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<models::user::Model>, ServiceError> {
            let users = self.users.lock().unwrap();
            Ok(users.values().find(|u| u.email == email).cloned())
        }
    }
}
