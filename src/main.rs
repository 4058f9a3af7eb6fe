use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use userdir::config::AppConfig;
use userdir::directory::DirectoryStore;
use userdir::services::UserService;
use userdir::session::middleware::ensure_directory_id;
use userdir::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();

    let service = UserService::new(&config.api_base_url, config.api_timeout)
        .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;
    log::info!("Reading users from {}", service.base_url());

    let store = DirectoryStore::new(config.max_sessions, config.session_idle);
    let state = web::Data::new(AppState::new(Arc::new(service), store, &config.app_name));
    let secret_key = config.session_key.clone();

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(middleware::from_fn(ensure_directory_id))
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(userdir::configure)
            .default_service(web::to(userdir::not_found))
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
