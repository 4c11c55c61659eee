use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::errors::ApiError;
use crate::state::ServerState;
use service::auth::domain::Claims;
use service::errors::ServiceError;

/// Acting identity resolved from a verified bearer token.
///
/// Runs first on every protected route: authenticate, then the handler
/// loads the resource and authorizes against these claims. Verification
/// does not re-check that the subject still exists.
pub struct AuthUser(pub Claims);

#[async_trait]
impl FromRequestParts<ServerState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError(ServiceError::Unauthorized("missing bearer token".into())))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError(ServiceError::Unauthorized("invalid authorization header (expect Bearer)".into())))?;

        let claims = state.auth.verify_token(token)?;
        Ok(AuthUser(claims))
    }
}
