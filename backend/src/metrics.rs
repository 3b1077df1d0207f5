use actix_web::{get, HttpResponse, Responder};
use once_cell::sync::Lazy;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::time::Duration;

/// Process-wide metrics registry
static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Process-wide metrics; `None` if registration failed at startup
static METRICS: Lazy<Option<Metrics>> = Lazy::new(|| match Metrics::new(&REGISTRY) {
    Ok(metrics) => Some(metrics),
    Err(e) => {
        log::error!("Failed to register metrics: {}", e);
        None
    }
});

/// HTTP request metrics
pub struct Metrics {
    /// Request duration histogram (in seconds)
    pub request_duration: HistogramVec,
    /// Total HTTP requests counter
    pub requests_total: IntCounterVec,
}

impl Metrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .namespace("alumni_portal")
            .subsystem("http"),
            &["method", "endpoint", "status_code"],
        )?;
        registry.register(Box::new(request_duration.clone()))?;

        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests")
                .namespace("alumni_portal")
                .subsystem("http"),
            &["method", "endpoint", "status_code"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        Ok(Self {
            request_duration,
            requests_total,
        })
    }

    pub fn global() -> Option<&'static Metrics> {
        METRICS.as_ref()
    }

    pub fn record_http_request(
        &self,
        method: &str,
        endpoint: &str,
        status_code: u16,
        duration: Duration,
    ) {
        let status_str = status_code.to_string();
        let labels = [method, endpoint, status_str.as_str()];

        self.request_duration
            .with_label_values(&labels)
            .observe(duration.as_secs_f64());
        self.requests_total.with_label_values(&labels).inc();
    }
}

/// Renders the global registry in the Prometheus text format
pub fn render() -> Result<String, prometheus::Error> {
    // Touch the lazy so the families exist even before the first request
    let _ = Metrics::global();
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

#[get("/metrics")]
pub async fn metrics_handler() -> impl Responder {
    match render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(e) => {
            log::error!("Failed to encode metrics: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_register_on_private_registry() {
        let registry = Registry::new();
        let metrics = Metrics::new(&registry).unwrap();
        metrics.record_http_request("GET", "/api/analytics/stats", 200, Duration::from_millis(3));

        let families = registry.gather();
        let names: Vec<&str> = families.iter().map(|f| f.get_name()).collect();
        assert!(names.contains(&"alumni_portal_http_http_requests_total"));
        assert!(names.contains(&"alumni_portal_http_http_request_duration_seconds"));
    }

    #[test]
    fn test_double_registration_fails() {
        let registry = Registry::new();
        assert!(Metrics::new(&registry).is_ok());
        assert!(Metrics::new(&registry).is_err());
    }

    #[test]
    fn test_render_global_registry() {
        if let Some(metrics) = Metrics::global() {
            metrics.record_http_request("GET", "/health", 200, Duration::from_millis(1));
        }
        let body = render().unwrap();
        assert!(body.contains("alumni_portal_http_http_requests_total"));
    }
}
