use std::sync::Arc;

use service::auth::AuthService;
use service::businesses::repo::seaorm::SeaOrmBusinessRepository;
use service::businesses::BusinessesService;
use service::products::repo::seaorm::SeaOrmProductRepository;
use service::products::ProductsService;
use service::reactions::repo::seaorm::SeaOrmReactionRepository;
use service::reactions::ReactionsService;
use service::users::repo::seaorm::SeaOrmUserRepository;
use service::users::UsersService;

pub type UsersSvc = UsersService<SeaOrmUserRepository>;
pub type AuthSvc = AuthService<SeaOrmUserRepository>;
pub type BusinessesSvc = BusinessesService<SeaOrmBusinessRepository>;
pub type ProductsSvc = ProductsService<SeaOrmProductRepository, SeaOrmBusinessRepository>;
pub type ReactionsSvc = ReactionsService<SeaOrmReactionRepository>;

/// Shared application state: every service wired once at startup with its
/// SeaORM repository and handed to the router.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<UsersSvc>,
    pub auth: Arc<AuthSvc>,
    pub businesses: Arc<BusinessesSvc>,
    pub products: Arc<ProductsSvc>,
    pub reactions: Arc<ReactionsSvc>,
}
