use actix_web::{HttpResponse};
use std::sync::atomic::{AtomicU64, Ordering};

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn snapshot() -> MetricsResponse {
    MetricsResponse {
        http_requests_total: REQUEST_COUNT.load(Ordering::Relaxed),
        http_errors_total: ERROR_COUNT.load(Ordering::Relaxed),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
}

impl MetricsResponse {
    /// Prometheus text exposition format
    pub fn render(&self) -> String {
        format!(
            "# HELP http_requests_total Total number of HTTP requests\n\
             # TYPE http_requests_total counter\n\
             http_requests_total {}\n\
             \n\
             # HELP http_errors_total Total number of HTTP responses with status >= 400\n\
             # TYPE http_errors_total counter\n\
             http_errors_total {}\n",
            self.http_requests_total, self.http_errors_total
        )
    }
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Request counters in Prometheus text format", body = String, content_type = "text/plain")
    )
)]
pub async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(snapshot().render())
}
