use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::state::ServerState;
use service::users::domain::NewUser;

#[utoipa::path(post, path = "/api/users", tag = "users", request_body = crate::openapi::CreateUserRequest, responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewUser>,
) -> Result<(StatusCode, Json<models::user::Model>), ApiError> {
    let created = state.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/users/{id}", tag = "users", params(("id" = Uuid, Path, description = "User id")), responses((status = 200, description = "User or null")))]
pub async fn find_by_id(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<models::user::Model>>, ApiError> {
    let found = state.users.find_by_id(id).await?;
    Ok(Json(found))
}

#[utoipa::path(get, path = "/api/users/email/{email}", tag = "users", params(("email" = String, Path, description = "User email")), responses((status = 200, description = "User or null")))]
pub async fn find_by_email(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> Result<Json<Option<models::user::Model>>, ApiError> {
    let found = state.users.find_by_email(&email).await?;
    Ok(Json(found))
}
