use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use gb_api::app::create_app;
use gb_api::routes::groups::AppState;
use gb_core::services::group::GroupService;
use gb_core::services::token::TokenService;
use gb_infra::database::mysql::{MySqlGroupRepository, MySqlUserRepository};
use gb_infra::DatabasePool;
use gb_shared::config::{AuthConfig, DatabaseConfig, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Groupboard API server");

    // Load configuration
    let database_config = DatabaseConfig::from_env();
    let server_config = ServerConfig::from_env();
    let auth_config = AuthConfig::from_env();

    if auth_config.is_using_default_secret() {
        log::warn!("JWT_SECRET is not set; using the default development secret");
    }

    // Database pool and repositories
    let pool = DatabasePool::new(database_config)
        .await
        .context("failed to connect to the database")?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let group_repository = Arc::new(MySqlGroupRepository::new(pool.get_pool().clone()));

    // Services
    let group_service = Arc::new(GroupService::new(user_repository, group_repository));
    let token_service = Arc::new(TokenService::new(&auth_config));

    let app_state = web::Data::new(AppState { group_service });
    let token_data = web::Data::from(token_service);

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone(), token_data.clone()))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
