use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::extract::AuthUser;
use crate::state::ServerState;
use service::access;
use service::businesses::domain::{BusinessPatch, BusinessWithOwner, NewBusiness};

#[utoipa::path(post, path = "/api/businesses", tag = "businesses", request_body = crate::openapi::CreateBusinessRequest, responses((status = 201, description = "Created"), (status = 401, description = "Unauthorized"), (status = 403, description = "Forbidden")))]
pub async fn create(
    State(state): State<ServerState>,
    AuthUser(claims): AuthUser,
    Json(input): Json<NewBusiness>,
) -> Result<(StatusCode, Json<models::business::Model>), ApiError> {
    access::ensure_business_account(&claims.kind)?;
    let created = state.businesses.create(input, claims.sub).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/businesses", tag = "businesses", responses((status = 200, description = "All businesses, newest first")))]
pub async fn find_all(
    State(state): State<ServerState>,
) -> Result<Json<Vec<BusinessWithOwner>>, ApiError> {
    let all = state.businesses.find_all().await?;
    Ok(Json(all))
}

#[utoipa::path(get, path = "/api/businesses/{id}", tag = "businesses", params(("id" = Uuid, Path, description = "Business id")), responses((status = 200, description = "Business"), (status = 404, description = "Not Found")))]
pub async fn find_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::business::Model>, ApiError> {
    let business = state.businesses.find_one(id).await?;
    Ok(Json(business))
}

#[utoipa::path(put, path = "/api/businesses/{id}", tag = "businesses", params(("id" = Uuid, Path, description = "Business id")), request_body = crate::openapi::UpdateBusinessRequest, responses((status = 200, description = "Updated"), (status = 403, description = "Forbidden"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<BusinessPatch>,
) -> Result<Json<models::business::Model>, ApiError> {
    access::ensure_business_account(&claims.kind)?;
    let updated = state.businesses.update(id, patch, claims.sub).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/api/businesses/{id}", tag = "businesses", params(("id" = Uuid, Path, description = "Business id")), responses((status = 204, description = "Deleted"), (status = 403, description = "Forbidden"), (status = 404, description = "Not Found")))]
pub async fn remove(
    State(state): State<ServerState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    access::ensure_business_account(&claims.kind)?;
    state.businesses.remove(id, claims.sub).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/api/businesses/owner/me", tag = "businesses", responses((status = 200, description = "Caller's businesses"), (status = 401, description = "Unauthorized"), (status = 403, description = "Forbidden")))]
pub async fn my_businesses(
    State(state): State<ServerState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<models::business::Model>>, ApiError> {
    access::ensure_business_account(&claims.kind)?;
    let mine = state.businesses.find_by_owner(claims.sub).await?;
    Ok(Json(mine))
}
