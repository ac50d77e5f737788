use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use zjazd::api::ApiClient;
use zjazd::auth::provider::IdentityClient;
use zjazd::config::{Config, Theme};
use zjazd::handlers;
use zjazd::i18n::LocaleStore;
use zjazd::templates_structs::ShellConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().expect("API_BASE_URL and AUTH_BASE_URL must be set");

    let api = web::Data::new(ApiClient::new(&config.api_base_url));
    let identity = web::Data::new(IdentityClient::new(&config.auth_base_url));

    // Base and fallback locale bundles are compiled in; parsing them is a
    // startup invariant.
    let locales = Arc::new(LocaleStore::bundled().expect("Bundled locale files must parse"));
    let shell = web::Data::new(ShellConfig::new("Zjazd", Theme::default(), locales));

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(api.clone())
            .app_data(identity.clone())
            .app_data(shell.clone())
            .app_data(config.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Festival agenda
            .route("/", web::get().to(handlers::agenda_handlers::index))
            // Meetings — /meetings/{id}/edit BEFORE /meetings/{id} to avoid routing conflict
            .route("/meetings", web::get().to(handlers::meeting_handlers::list))
            .route(
                "/meetings/{id}/edit",
                web::get().to(handlers::meeting_handlers::edit_form),
            )
            .route(
                "/meetings/{id}",
                web::get().to(handlers::meeting_handlers::detail),
            )
            .route(
                "/meetings/{id}",
                web::post().to(handlers::meeting_handlers::confirm),
            )
            // Profiles
            .route("/u/{slug}", web::get().to(handlers::user_handlers::profile))
            // Identity
            .route("/login", web::get().to(handlers::auth_handlers::login))
            .route(
                "/auth/callback",
                web::get().to(handlers::auth_handlers::callback),
            )
            .route("/logout", web::post().to(handlers::auth_handlers::logout))
            // Language preference
            .route("/lang", web::post().to(handlers::lang_handlers::set_language))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
