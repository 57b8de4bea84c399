use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the public API:
/// - Any origin may call; the leaderboard is unauthenticated and public
/// - Only allow methods actually used by the API
pub fn cors_middleware() -> Cors {
    Cors::default()
        .allow_any_origin()
        // Methods actually used by the API
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        // Headers the browser may send
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        // Headers the browser is allowed to read from responses
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(3600)
}
