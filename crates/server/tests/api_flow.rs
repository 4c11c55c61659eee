use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use serde_json::{json, Value};
use tower::Service;
use uuid::Uuid;

use server::routes;
use server::startup::build_state;
use service::auth::AuthConfig;

async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect().await?;
    // Run migrations to ensure schema; ignore the already-applied case
    if let Err(e) = migration::Migrator::up(&db, None).await {
        let msg = format!("{}", e);
        if msg.contains("duplicate key value violates unique constraint") {
            eprintln!("migrations already applied, continue: {}", msg);
        } else {
            return Err(e.into());
        }
    }
    let state = build_state(db, AuthConfig { jwt_secret: "test-secret".into(), token_ttl_hours: 12 });
    Ok(routes::build_router(tower_http::cors::CorsLayer::very_permissive(), state))
}

fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(serde_json::to_vec(body).unwrap())).unwrap()
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<&Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let body = match body {
        Some(v) => Body::from(serde_json::to_vec(v).unwrap()),
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register(app: &mut Router, kind: &str) -> (String, String) {
    let email = format!("user_{}@example.com", Uuid::new_v4());
    let resp = app
        .call(post_json(
            "/api/auth/register",
            None,
            &json!({"type": kind, "name": "Tester", "phone": "555-0100", "email": email, "password": "S3curePass!"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    let token = body["access_token"].as_str().unwrap().to_string();
    let user_id = body["user"]["id"].as_str().unwrap().to_string();
    (token, user_id)
}

async fn create_business(app: &mut Router, token: &str) -> String {
    let resp = app
        .call(post_json(
            "/api/businesses",
            Some(token),
            &json!({"name": "Cafe Luna", "address": "Calle 1 #23", "whatsappNumber": "555-0102"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    json_body(resp).await["id"].as_str().unwrap().to_string()
}

async fn create_product(app: &mut Router, token: &str, business_id: &str) -> String {
    let resp = app
        .call(post_json(
            &format!("/api/products?businessId={}", business_id),
            Some(token),
            &json!({"name": "Tomates", "price": 12.50, "weightGrams": 500}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    json_body(resp).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_register_login_and_owner_listing() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let mut app = build_app().await?;

    let email = format!("user_{}@example.com", Uuid::new_v4());
    let resp = app
        .call(post_json(
            "/api/auth/register",
            None,
            &json!({"type": "business", "name": "Tester", "phone": "555-0100", "email": email, "password": "S3curePass!"}),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let registered = json_body(resp).await;
    assert!(registered["user"].get("passwordHash").is_none());

    // Duplicate registration conflicts
    let resp = app
        .call(post_json(
            "/api/auth/register",
            None,
            &json!({"type": "business", "name": "Tester", "phone": "555-0100", "email": email, "password": "S3curePass!"}),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Login
    let resp = app
        .call(post_json("/api/auth/login", None, &json!({"email": email, "password": "S3curePass!"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let token = json_body(resp).await["access_token"].as_str().unwrap().to_string();

    let business_id = create_business(&mut app, &token).await;

    let resp = app.call(request("GET", "/api/businesses/owner/me", Some(&token), None)).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let mine = json_body(resp).await;
    assert!(mine
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b["id"].as_str() == Some(business_id.as_str())));
    Ok(())
}

#[tokio::test]
async fn test_login_failures_are_unauthorized() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let mut app = build_app().await?;
    let (_, _) = register(&mut app, "customer").await;

    let resp = app
        .call(post_json("/api/auth/login", None, &json!({"email": "ghost@example.com", "password": "whatever1"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_customer_cannot_open_business() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let mut app = build_app().await?;
    let (token, _) = register(&mut app, "customer").await;

    let resp = app
        .call(post_json(
            "/api/businesses",
            Some(&token),
            &json!({"name": "Nope", "address": "x", "whatsappNumber": "y"}),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn test_two_hop_product_authorization() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let mut app = build_app().await?;
    let (owner_token, _) = register(&mut app, "business").await;
    let (other_token, _) = register(&mut app, "business").await;

    let business_id = create_business(&mut app, &owner_token).await;
    let product_id = create_product(&mut app, &owner_token, &business_id).await;

    // A different business account is not the owner of the parent business
    let resp = app
        .call(request(
            "PUT",
            &format!("/api/products/{}", product_id),
            Some(&other_token),
            Some(&json!({"price": 1.00})),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app
        .call(request(
            "PUT",
            &format!("/api/products/{}", product_id),
            Some(&owner_token),
            Some(&json!({"price": 9.99})),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["price"].as_str(), Some("9.99"));
    Ok(())
}

#[tokio::test]
async fn test_reaction_upsert_and_stats() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let mut app = build_app().await?;
    let (owner_token, _) = register(&mut app, "business").await;
    let (customer_token, _) = register(&mut app, "customer").await;

    let business_id = create_business(&mut app, &owner_token).await;
    let product_id = create_product(&mut app, &owner_token, &business_id).await;

    let resp = app
        .call(post_json("/api/reactions", Some(&customer_token), &json!({"productId": product_id, "type": "like"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Second reaction replaces the first instead of accumulating
    let resp = app
        .call(post_json("/api/reactions", Some(&customer_token), &json!({"productId": product_id, "type": "love"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .call(request("GET", &format!("/api/reactions/stats?productId={}", product_id), None, None))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let stats = json_body(resp).await;
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["likes"], 0);
    assert_eq!(stats["loves"], 1);

    let resp = app
        .call(request("GET", "/api/reactions/my-reactions", Some(&customer_token), None))
        .await?;
    let mine = json_body(resp).await;
    assert_eq!(mine.as_array().unwrap().len(), 1);

    // Remove and verify the empty stats shape
    let resp = app
        .call(request("DELETE", &format!("/api/reactions?productId={}", product_id), Some(&customer_token), None))
        .await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .call(request("GET", &format!("/api/reactions/stats?productId={}", product_id), None, None))
        .await?;
    let stats = json_body(resp).await;
    assert_eq!(stats["total"], 0);
    assert_eq!(stats["dislikes"], 0);
    Ok(())
}

#[tokio::test]
async fn test_business_delete_cascades_to_products() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let mut app = build_app().await?;
    let (owner_token, _) = register(&mut app, "business").await;
    let business_id = create_business(&mut app, &owner_token).await;
    let product_id = create_product(&mut app, &owner_token, &business_id).await;

    let resp = app
        .call(request("DELETE", &format!("/api/businesses/{}", business_id), Some(&owner_token), None))
        .await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.call(request("GET", &format!("/api/products/{}", product_id), None, None)).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_missing_and_malformed_tokens_rejected() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let mut app = build_app().await?;

    let resp = app
        .call(post_json("/api/businesses", None, &json!({"name": "x", "address": "y", "whatsappNumber": "z"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .call(post_json("/api/businesses", Some("not.a.token"), &json!({"name": "x", "address": "y", "whatsappNumber": "z"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
