use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use actix_web::HttpMessage;
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use log::{error, info, warn};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};
use std::time::Instant;
use uuid::Uuid;

use crate::config::CorsConfig;
use crate::metrics::Metrics;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Counter-based ids under test, UUID v4 otherwise
fn generate_request_id() -> String {
    let is_test = cfg!(test)
        || std::env::var("RUST_ENV")
            .unwrap_or_default()
            .eq_ignore_ascii_case("test");

    if is_test {
        let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("test-{}", counter)
    } else {
        Uuid::new_v4().to_string()
    }
}

/// Access log + request id + HTTP metrics
pub struct Logger;

impl<S, B> Transform<S, ServiceRequest> for Logger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = LoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoggerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct LoggerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for LoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let start_time = Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();
        let peer_addr = req.peer_addr().map(|addr| addr.to_string());

        let correlation_id = generate_request_id();
        req.extensions_mut().insert(correlation_id.clone());

        Box::pin(async move {
            let mut res = svc.call(req).await?;
            let duration = start_time.elapsed();

            if let Ok(header_value) = HeaderValue::try_from(correlation_id.as_str()) {
                res.headers_mut()
                    .insert(HeaderName::from_static("x-request-id"), header_value);
            }

            let status_code = res.status().as_u16();
            let endpoint = res
                .request()
                .match_pattern()
                .unwrap_or_else(|| "unmatched".to_string());
            if let Some(metrics) = Metrics::global() {
                metrics.record_http_request(method.as_str(), &endpoint, status_code, duration);
            }

            let peer = peer_addr.unwrap_or_else(|| "unknown".to_string());
            if status_code >= 500 {
                error!(
                    "request_id={} {} {} {} {}ms {}",
                    correlation_id, method, uri, status_code, duration.as_millis(), peer
                );
            } else if status_code >= 400 {
                warn!(
                    "request_id={} {} {} {} {}ms {}",
                    correlation_id, method, uri, status_code, duration.as_millis(), peer
                );
            } else {
                info!(
                    "request_id={} {} {} {} {}ms {}",
                    correlation_id, method, uri, status_code, duration.as_millis(), peer
                );
            }

            Ok(res)
        })
    }
}

pub fn cors_middleware(config: &CorsConfig) -> actix_cors::Cors {
    let mut cors = actix_cors::Cors::default()
        .allowed_methods(vec!["GET", "PUT", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::ACCEPT,
            actix_web::http::header::CONTENT_TYPE,
        ])
        .expose_headers(vec![HeaderName::from_static("x-request-id")])
        .max_age(3600);

    for origin in &config.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
