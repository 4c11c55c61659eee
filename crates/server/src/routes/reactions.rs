use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::extract::AuthUser;
use crate::state::ServerState;
use models::reaction::ReactionKind;
use service::reactions::domain::{ReactionStats, ReactionWithProduct, ReactionWithUser};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateReactionBody {
    pub product_id: Uuid,
    #[serde(rename = "type")]
    pub kind: ReactionKind,
}

#[derive(Debug, Deserialize)]
pub struct ProductIdQuery {
    #[serde(rename = "productId")]
    pub product_id: Uuid,
}

#[derive(Debug, Deserialize, Default)]
pub struct ProductIdFilter {
    #[serde(rename = "productId")]
    pub product_id: Option<Uuid>,
}

#[utoipa::path(post, path = "/api/reactions", tag = "reactions", request_body = crate::openapi::CreateReactionRequest, responses((status = 201, description = "Recorded or replaced"), (status = 401, description = "Unauthorized"), (status = 409, description = "Conflict")))]
pub async fn create(
    State(state): State<ServerState>,
    AuthUser(claims): AuthUser,
    Json(body): Json<CreateReactionBody>,
) -> Result<(StatusCode, Json<models::reaction::Model>), ApiError> {
    let reaction = state.reactions.react(body.product_id, body.kind, claims.sub).await?;
    Ok((StatusCode::CREATED, Json(reaction)))
}

#[utoipa::path(get, path = "/api/reactions", tag = "reactions", params(("productId" = Option<Uuid>, Query, description = "Product filter")), responses((status = 200, description = "Product's reactions, or [] without a filter")))]
pub async fn find_by_product(
    State(state): State<ServerState>,
    Query(query): Query<ProductIdFilter>,
) -> Result<Json<Vec<ReactionWithUser>>, ApiError> {
    match query.product_id {
        Some(product_id) => Ok(Json(state.reactions.find_by_product(product_id).await?)),
        None => Ok(Json(Vec::new())),
    }
}

#[utoipa::path(get, path = "/api/reactions/my-reactions", tag = "reactions", responses((status = 200, description = "Caller's reactions"), (status = 401, description = "Unauthorized")))]
pub async fn my_reactions(
    State(state): State<ServerState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<ReactionWithProduct>>, ApiError> {
    let mine = state.reactions.find_by_user(claims.sub).await?;
    Ok(Json(mine))
}

#[utoipa::path(get, path = "/api/reactions/stats", tag = "reactions", params(("productId" = Uuid, Query, description = "Product id")), responses((status = 200, description = "Counts by kind")))]
pub async fn stats(
    State(state): State<ServerState>,
    Query(query): Query<ProductIdQuery>,
) -> Result<Json<ReactionStats>, ApiError> {
    let stats = state.reactions.stats(query.product_id).await?;
    Ok(Json(stats))
}

#[utoipa::path(delete, path = "/api/reactions", tag = "reactions", params(("productId" = Uuid, Query, description = "Product id")), responses((status = 204, description = "Removed"), (status = 401, description = "Unauthorized"), (status = 404, description = "Not Found")))]
pub async fn remove(
    State(state): State<ServerState>,
    AuthUser(claims): AuthUser,
    Query(query): Query<ProductIdQuery>,
) -> Result<StatusCode, ApiError> {
    state.reactions.remove(claims.sub, query.product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
