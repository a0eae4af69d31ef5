//! Application factory
//!
//! Builds the Actix-web application from pre-wired services. The binary
//! passes repositories backed by MySQL; the integration tests pass the
//! in-memory mocks from `gb_core`.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use gb_core::repositories::{GroupRepository, UserRepository};
use gb_core::services::token::TokenService;

use crate::dto::MessageBody;
use crate::middleware::cors::create_cors;
use crate::routes::groups::{create::create_group, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, G>(
    app_state: web::Data<AppState<U, G>>,
    token_service: web::Data<TokenService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    G: GroupRepository + 'static,
{
    let cors = create_cors();

    App::new()
        // Shared services
        .app_data(app_state)
        .app_data(token_service)
        // Middleware (last wrap registered runs outermost, so CORS sees the
        // request before the logger)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Group routes
        .route("/groups", web::post().to(create_group::<U, G>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "groupboard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(MessageBody::new("The requested resource was not found"))
}
