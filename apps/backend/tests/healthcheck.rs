use actix_web::{test, web};
use backend::state::app_state::AppState;
use serde_json::json;

mod support;

use support::app_builder::create_test_app;

#[actix_web::test]
async fn test_health_endpoint() {
    let app = create_test_app(web::Data::new(AppState::new())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": true }));
}
