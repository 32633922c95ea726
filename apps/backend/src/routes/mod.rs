use actix_web::web;

pub mod config;
pub mod games;
pub mod health;

/// Register every application route.
///
/// `main.rs` wraps this with CORS and logging middleware; tests call it
/// directly on a bare `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Range configuration: /api/config
    cfg.service(web::scope("/api/config").configure(config::configure_routes));

    // Games: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
