use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessRequest {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub whatsapp_number: String,
    pub opening_hours: Option<serde_json::Value>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusinessRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub whatsapp_number: Option<String>,
    pub opening_hours: Option<serde_json::Value>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub weight_grams: Option<i32>,
    pub quantity_units: Option<i32>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub weight_grams: Option<i32>,
    pub quantity_units: Option<i32>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReactionRequest {
    pub product_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::users::create,
        crate::routes::users::find_by_id,
        crate::routes::users::find_by_email,
        crate::routes::businesses::create,
        crate::routes::businesses::find_all,
        crate::routes::businesses::find_one,
        crate::routes::businesses::update,
        crate::routes::businesses::remove,
        crate::routes::businesses::my_businesses,
        crate::routes::products::create,
        crate::routes::products::find_all,
        crate::routes::products::find_one,
        crate::routes::products::update,
        crate::routes::products::remove,
        crate::routes::reactions::create,
        crate::routes::reactions::find_by_product,
        crate::routes::reactions::my_reactions,
        crate::routes::reactions::stats,
        crate::routes::reactions::remove,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            CreateUserRequest,
            CreateBusinessRequest,
            UpdateBusinessRequest,
            CreateProductRequest,
            UpdateProductRequest,
            CreateReactionRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "users"),
        (name = "businesses"),
        (name = "products"),
        (name = "reactions"),
    )
)]
pub struct ApiDoc;
