use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::routes;
use backend::state::app_state::AppState;

/// Build an in-process service wired with the production route
/// configuration.
///
/// In production, `main.rs` additionally wraps CORS and request tracing;
/// tests register the same paths without those wrappers so endpoint
/// behavior can be exercised directly.
pub async fn create_test_app(
    state: web::Data<AppState>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(App::new().app_data(state).configure(routes::configure)).await
}
