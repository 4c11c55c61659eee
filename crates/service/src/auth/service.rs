use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};

use super::domain::{AuthSession, Claims, LoginInput, PublicUser, RegisterInput};
use crate::errors::ServiceError;
use crate::users::domain::NewUser;
use crate::users::repository::UserRepository;
use crate::users::UsersService;
use models::user;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

/// Credential manager independent of web framework.
///
/// Sits on top of the user directory: registration inserts through it,
/// login resolves through it. Password hashing is argon2 with a fresh
/// OS-random salt per user; verification goes through the hash's own
/// verifier, never a string compare.
pub struct AuthService<R: UserRepository> {
    users: Arc<UsersService<R>>,
    cfg: AuthConfig,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(users: Arc<UsersService<R>>, cfg: AuthConfig) -> Self {
        Self { users, cfg }
    }

    /// Register a new user with a hashed password and issue a token.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthSession, ServiceError> {
        user::validate_email(&input.email)?;
        user::validate_name(&input.name)?;
        user::validate_phone(&input.phone)?;
        if input.password.len() < 6 {
            return Err(ServiceError::Validation("password too short (>=6)".into()));
        }

        if let Some(existing) = self.users.find_by_email(&input.email).await? {
            debug!("email taken: {}", existing.email);
            return Err(ServiceError::Conflict("email is already registered".into()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| ServiceError::Hash(e.to_string()))?
            .to_string();

        let created = self
            .users
            .create(NewUser {
                kind: input.kind,
                name: input.name,
                phone: input.phone,
                email: input.email,
                password_hash: hash,
            })
            .await?;

        let token = self.sign_token(&created)?;
        info!(user_id = %created.id, email = %created.email, "user_registered");
        Ok(AuthSession { access_token: token, user: PublicUser::from(&created) })
    }

    /// Authenticate a user and issue a token.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, ServiceError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or_else(ServiceError::invalid_credentials)?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| ServiceError::Hash(e.to_string()))?;
        if Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed)
            .is_err()
        {
            return Err(ServiceError::invalid_credentials());
        }

        let token = self.sign_token(&user)?;
        info!(user_id = %user.id, "user_logged_in");
        Ok(AuthSession { access_token: token, user: PublicUser::from(&user) })
    }

    /// Decode and validate a bearer token, returning its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        let key = DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes());
        let data = decode::<Claims>(token, &key, &Validation::default())
            .map_err(|_| ServiceError::Unauthorized("invalid or expired token".into()))?;
        Ok(data.claims)
    }

    fn sign_token(&self, user: &user::Model) -> Result<String, ServiceError> {
        let exp = (chrono::Utc::now() + chrono::Duration::hours(self.cfg.token_ttl_hours))
            .timestamp() as usize;
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            kind: user.kind.clone(),
            exp,
        };
        encode(
            &JwtHeader::default(),
            &claims,
            &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()),
        )
        .map_err(|e| ServiceError::Token(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repository::mock::MockUserRepository;
    use models::user::UserKind;

    fn svc() -> AuthService<MockUserRepository> {
        svc_with_ttl(12)
    }

    fn svc_with_ttl(hours: i64) -> AuthService<MockUserRepository> {
        let users = Arc::new(UsersService::new(Arc::new(MockUserRepository::default())));
        AuthService::new(users, AuthConfig { jwt_secret: "test-secret".into(), token_ttl_hours: hours })
    }

    fn register_input(email: &str) -> RegisterInput {
        RegisterInput {
            kind: UserKind::Business,
            name: "Panaderia Sol".into(),
            phone: "555-0101".into(),
            email: email.into(),
            password: "Secret123".into(),
        }
    }

    #[tokio::test]
    async fn register_then_login() {
        let svc = svc();
        let session = svc.register(register_input("sol@example.com")).await.unwrap();
        assert_eq!(session.user.email, "sol@example.com");
        assert!(!session.access_token.is_empty());

        let login = svc
            .login(LoginInput { email: "sol@example.com".into(), password: "Secret123".into() })
            .await
            .unwrap();
        assert_eq!(login.user.id, session.user.id);
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let svc = svc();
        svc.register(register_input("dup@example.com")).await.unwrap();
        let err = svc.register(register_input("dup@example.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let svc = svc();
        svc.register(register_input("known@example.com")).await.unwrap();

        let wrong_pass = svc
            .login(LoginInput { email: "known@example.com".into(), password: "nope".into() })
            .await
            .unwrap_err();
        let unknown_email = svc
            .login(LoginInput { email: "ghost@example.com".into(), password: "Secret123".into() })
            .await
            .unwrap_err();

        match (&wrong_pass, &unknown_email) {
            (ServiceError::Unauthorized(a), ServiceError::Unauthorized(b)) => assert_eq!(a, b),
            other => panic!("expected Unauthorized pair, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn short_password_rejected() {
        let svc = svc();
        let mut input = register_input("short@example.com");
        input.password = "abc".into();
        let err = svc.register(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn token_round_trip_carries_identity() {
        let svc = svc();
        let session = svc.register(register_input("claims@example.com")).await.unwrap();
        let claims = svc.verify_token(&session.access_token).unwrap();
        assert_eq!(claims.sub, session.user.id);
        assert_eq!(claims.email, "claims@example.com");
        assert_eq!(claims.kind, "business");
    }

    #[tokio::test]
    async fn garbage_and_forged_tokens_rejected() {
        let svc = svc();
        assert!(matches!(svc.verify_token("not.a.token"), Err(ServiceError::Unauthorized(_))));

        // Signed with a different secret
        let users = Arc::new(UsersService::new(Arc::new(MockUserRepository::default())));
        let other = AuthService::new(users, AuthConfig { jwt_secret: "other".into(), token_ttl_hours: 12 });
        let session = other.register(register_input("forged@example.com")).await.unwrap();
        assert!(matches!(svc.verify_token(&session.access_token), Err(ServiceError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn expired_token_rejected() {
        // TTL in the past puts exp beyond the default leeway.
        let svc = svc_with_ttl(-1);
        let session = svc.register(register_input("stale@example.com")).await.unwrap();
        assert!(matches!(svc.verify_token(&session.access_token), Err(ServiceError::Unauthorized(_))));
    }
}
