/// Prometheus counters and exposition
use actix_web::{HttpResponse, Responder};
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, TextEncoder};

/// Handler that serialises Prometheus metrics in text format.
pub async fn metrics_handler() -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(_) => HttpResponse::Ok()
            .content_type(encoder.format_type())
            .body(buffer),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

fn register_counter(name: &str, help: &str) -> IntCounter {
    IntCounter::new(name, help)
        .and_then(|c| {
            prometheus::default_registry().register(Box::new(c.clone()))?;
            Ok(c)
        })
        .unwrap_or_else(|e| {
            tracing::error!("failed to create {} counter: {}", name, e);
            IntCounter::new(format!("dummy_{}", name), "dummy").expect("dummy counter")
        })
}

static SIGNUP_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_counter("signup_requests_total", "Total number of signup requests")
});

static SIGNIN_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_counter("signin_requests_total", "Total number of signin requests")
});

static SIGNIN_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "signin_failures_total",
        "Total number of failed signin attempts (wrong password or unknown username)",
    )
});

static CONTENT_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "content_created_total",
        "Total number of content entries created",
    )
});

/// Increment signup requests counter
#[inline]
pub fn inc_signup_requests() {
    SIGNUP_REQUESTS_TOTAL.inc();
}

/// Increment signin requests counter
#[inline]
pub fn inc_signin_requests() {
    SIGNIN_REQUESTS_TOTAL.inc();
}

/// Increment signin failures counter
#[inline]
pub fn inc_signin_failures() {
    SIGNIN_FAILURES_TOTAL.inc();
}

/// Increment created-content counter
#[inline]
pub fn inc_content_created() {
    CONTENT_CREATED_TOTAL.inc();
}
