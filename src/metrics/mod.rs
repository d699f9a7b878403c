//! Basic metrics instrumentation for contact submissions.
//!
//! Provides counters for submission outcomes and duration tracking for the save request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for the contact form.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of submit attempts, including rejected ones
    submissions_total: Arc<AtomicU64>,

    /// Submissions confirmed by the endpoint
    contacts_saved_total: Arc<AtomicU64>,

    /// Submissions stopped by required-field validation
    validation_failures: Arc<AtomicU64>,

    /// Responses with a non-success status
    server_errors_total: Arc<AtomicU64>,

    /// Requests that produced no response
    transport_errors_total: Arc<AtomicU64>,

    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_total: Arc::new(AtomicU64::new(0)),
            contacts_saved_total: Arc::new(AtomicU64::new(0)),
            validation_failures: Arc::new(AtomicU64::new(0)),
            server_errors_total: Arc::new(AtomicU64::new(0)),
            transport_errors_total: Arc::new(AtomicU64::new(0)),
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a submit attempt.
    pub fn record_submission(&self) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a confirmed save.
    pub fn record_contact_saved(&self) {
        self.contacts_saved_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a validation failure.
    pub fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a non-success response.
    pub fn record_server_error(&self) {
        self.server_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request that never got a response.
    pub fn record_transport_error(&self) {
        self.transport_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn contacts_saved_total(&self) -> u64 {
        self.contacts_saved_total.load(Ordering::Relaxed)
    }

    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures.load(Ordering::Relaxed)
    }

    pub fn server_errors_total(&self) -> u64 {
        self.server_errors_total.load(Ordering::Relaxed)
    }

    pub fn transport_errors_total(&self) -> u64 {
        self.transport_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_total: self.submissions_total(),
            contacts_saved_total: self.contacts_saved_total(),
            validation_failures_total: self.validation_failures_total(),
            server_errors_total: self.server_errors_total(),
            transport_errors_total: self.transport_errors_total(),
            http_requests_total: self.http_requests_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub submissions_total: u64,
    pub contacts_saved_total: u64,
    pub validation_failures_total: u64,
    pub server_errors_total: u64,
    pub transport_errors_total: u64,
    pub http_requests_total: u64,
    pub http_duration_avg_ms: f64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }
}
