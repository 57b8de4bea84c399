use actix_web::web;

pub mod health;
pub mod scores;

/// Configure application routes.
///
/// `main.rs` and the test harness both register routes through this
/// function so tests exercise exactly the paths production serves.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // API routes: /api/**
    cfg.service(
        web::scope("/api")
            .configure(health::configure_routes)
            .configure(scores::configure_routes),
    );
}
