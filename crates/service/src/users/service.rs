use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::NewUser;
use super::repository::UserRepository;
use crate::errors::ServiceError;
use models::user;

/// User directory service independent of web framework.
pub struct UsersService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UsersService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Insert a new identity. The caller provides the password hash.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: NewUser) -> Result<user::Model, ServiceError> {
        user::validate_email(&input.email)?;
        user::validate_name(&input.name)?;
        user::validate_phone(&input.phone)?;
        let created = self.repo.insert(input).await?;
        info!(user_id = %created.id, email = %created.email, "user_created");
        Ok(created)
    }

    /// Lookup by id; absence is a valid outcome.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<user::Model>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Lookup by email (exact, case-sensitive match as stored).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
        self.repo.find_by_email(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repository::mock::MockUserRepository;
    use models::user::UserKind;

    fn input(email: &str) -> NewUser {
        NewUser {
            kind: UserKind::Customer,
            name: "Ana".into(),
            phone: "555-0100".into(),
            email: email.into(),
            password_hash: "$argon2id$stub".into(),
        }
    }

    #[tokio::test]
    async fn create_and_lookup() {
        let svc = UsersService::new(Arc::new(MockUserRepository::default()));
        let created = svc.create(input("ana@example.com")).await.unwrap();
        let by_id = svc.find_by_id(created.id).await.unwrap();
        assert_eq!(by_id.map(|u| u.email), Some("ana@example.com".into()));
        let by_email = svc.find_by_email("ana@example.com").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(created.id));
    }

    #[tokio::test]
    async fn missing_lookup_is_none_not_error() {
        let svc = UsersService::new(Arc::new(MockUserRepository::default()));
        assert!(svc.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
        assert!(svc.find_by_email("ghost@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        let svc = UsersService::new(Arc::new(MockUserRepository::default()));
        let err = svc.create(input("not-an-email")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
