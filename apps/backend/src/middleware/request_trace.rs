use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Tags each request with a UUID (request extensions + `x-request-id`
/// response header) and logs one completion line with method, path, status
/// and duration.
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let request_id = Uuid::new_v4().to_string();

        // Insert request_id into request extensions
        req.extensions_mut().insert(request_id.clone());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };

            let duration_us = start.elapsed().as_micros() as u64;
            let status_code = status.as_u16();

            if status.is_server_error() {
                error!(http.method = %method, url.path = %path, http.status_code = %status_code, duration_us = %duration_us, request_id = %request_id, "request completed");
            } else if status.is_client_error() {
                warn!(http.method = %method, url.path = %path, http.status_code = %status_code, duration_us = %duration_us, request_id = %request_id, "request completed");
            } else {
                info!(http.method = %method, url.path = %path, http.status_code = %status_code, duration_us = %duration_us, request_id = %request_id, "request completed");
            }

            match result {
                Ok(mut res) => {
                    // Add x-request-id header to response
                    res.headers_mut().insert(
                        header::HeaderName::from_static("x-request-id"),
                        header::HeaderValue::from_str(&request_id)
                            .unwrap_or_else(|_| header::HeaderValue::from_static("invalid-uuid")),
                    );
                    Ok(res)
                }
                Err(err) => Err(err),
            }
        })
    }
}
