use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_with_format;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;
use service::auth::{AuthConfig, AuthService};
use service::businesses::repo::seaorm::SeaOrmBusinessRepository;
use service::businesses::BusinessesService;
use service::products::repo::seaorm::SeaOrmProductRepository;
use service::products::ProductsService;
use service::reactions::repo::seaorm::SeaOrmReactionRepository;
use service::reactions::ReactionsService;
use service::users::repo::seaorm::SeaOrmUserRepository;
use service::users::UsersService;

/// Initialize logging via shared common utils, honoring the configured
/// output format (config.toml `server.log_format`, then `LOG_FORMAT`).
fn init_logging() {
    init_logging_with_format(&load_log_format());
}

fn load_log_format() -> String {
    configs::load_default()
        .map(|cfg| cfg.server.log_format)
        .ok()
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()))
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_auth_config() -> AuthConfig {
    let cfg = configs::load_default()
        .map(|mut c| {
            c.auth.normalize_from_env();
            c.auth
        })
        .unwrap_or_else(|_| {
            let mut auth = configs::AuthConfig::default();
            auth.normalize_from_env();
            auth
        });
    let jwt_secret = if cfg.jwt_secret.trim().is_empty() {
        "dev-secret-change-me".to_string()
    } else {
        cfg.jwt_secret
    };
    AuthConfig { jwt_secret, token_ttl_hours: cfg.token_ttl_hours }
}

/// Wire every service to its SeaORM repository over one connection.
pub fn build_state(db: sea_orm::DatabaseConnection, auth_cfg: AuthConfig) -> ServerState {
    let user_repo = Arc::new(SeaOrmUserRepository { db: db.clone() });
    let business_repo = Arc::new(SeaOrmBusinessRepository { db: db.clone() });
    let product_repo = Arc::new(SeaOrmProductRepository { db: db.clone() });
    let reaction_repo = Arc::new(SeaOrmReactionRepository { db });

    let users = Arc::new(UsersService::new(user_repo));
    let auth = Arc::new(AuthService::new(Arc::clone(&users), auth_cfg));
    let businesses = Arc::new(BusinessesService::new(business_repo));
    let products = Arc::new(ProductsService::new(product_repo, Arc::clone(&businesses)));
    let reactions = Arc::new(ReactionsService::new(reaction_repo));

    ServerState { users, auth, businesses, products, reactions }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // DB connection
    let db = models::db::connect().await?;

    let state = build_state(db, load_auth_config());

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting marketplace api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
