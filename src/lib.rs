pub mod config;
pub mod directory;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod session;
pub mod state;
pub mod templates_structs;

use actix_web::{HttpResponse, web};

/// Register every directory route. `main` and the integration tests share
/// this so they exercise the same wiring.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::directory_handlers::mount))
        .route("/directory", web::get().to(handlers::directory_handlers::view))
        .route("/retry", web::post().to(handlers::directory_handlers::retry))
        .route("/modal/close", web::get().to(handlers::directory_handlers::close_modal))
        .route("/users/{id}", web::get().to(handlers::directory_handlers::select))
        .route("/users/{id}/delete", web::post().to(handlers::directory_handlers::delete))
        .route("/api/users/{id}", web::get().to(handlers::api_handlers::read_user));
}

/// Default service for unknown routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(errors::NOT_FOUND_PAGE)
}
