use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::extract::AuthUser;
use crate::state::ServerState;
use service::access;
use service::products::domain::{NewProduct, ProductPatch, ProductWithBusiness};

#[derive(Debug, Deserialize)]
pub struct BusinessIdQuery {
    #[serde(rename = "businessId")]
    pub business_id: Uuid,
}

#[derive(Debug, Deserialize, Default)]
pub struct BusinessIdFilter {
    #[serde(rename = "businessId")]
    pub business_id: Option<Uuid>,
}

#[utoipa::path(post, path = "/api/products", tag = "products", params(("businessId" = Uuid, Query, description = "Owning business")), request_body = crate::openapi::CreateProductRequest, responses((status = 201, description = "Created"), (status = 403, description = "Forbidden"), (status = 404, description = "Not Found")))]
pub async fn create(
    State(state): State<ServerState>,
    AuthUser(claims): AuthUser,
    Query(query): Query<BusinessIdQuery>,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<models::product::Model>), ApiError> {
    access::ensure_business_account(&claims.kind)?;
    let created = state.products.create(input, query.business_id, claims.sub).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/products", tag = "products", params(("businessId" = Option<Uuid>, Query, description = "Optional business filter")), responses((status = 200, description = "Products, newest first")))]
pub async fn find_all(
    State(state): State<ServerState>,
    Query(query): Query<BusinessIdFilter>,
) -> Result<Json<Vec<ProductWithBusiness>>, ApiError> {
    let all = state.products.find_all(query.business_id).await?;
    Ok(Json(all))
}

#[utoipa::path(get, path = "/api/products/{id}", tag = "products", params(("id" = Uuid, Path, description = "Product id")), responses((status = 200, description = "Product"), (status = 404, description = "Not Found")))]
pub async fn find_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::product::Model>, ApiError> {
    let product = state.products.find_one(id).await?;
    Ok(Json(product))
}

#[utoipa::path(put, path = "/api/products/{id}", tag = "products", params(("id" = Uuid, Path, description = "Product id")), request_body = crate::openapi::UpdateProductRequest, responses((status = 200, description = "Updated"), (status = 403, description = "Forbidden"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<models::product::Model>, ApiError> {
    access::ensure_business_account(&claims.kind)?;
    let updated = state.products.update(id, patch, claims.sub).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/api/products/{id}", tag = "products", params(("id" = Uuid, Path, description = "Product id")), responses((status = 204, description = "Deleted"), (status = 403, description = "Forbidden"), (status = 404, description = "Not Found")))]
pub async fn remove(
    State(state): State<ServerState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    access::ensure_business_account(&claims.kind)?;
    state.products.remove(id, claims.sub).await?;
    Ok(StatusCode::NO_CONTENT)
}
