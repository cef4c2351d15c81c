//! In-process counters for requests and contact operations.
//!
//! The server records every request it serves and the API client records
//! every call it makes. Nothing is exported; the server logs a summary when
//! it stops.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    errors: AtomicU64,
    duration_ms: AtomicU64,
    listed: AtomicU64,
    created: AtomicU64,
    deleted: AtomicU64,
    rejected: AtomicU64,
}

impl Counters {
    fn all(&self) -> [&AtomicU64; 7] {
        [
            &self.requests,
            &self.errors,
            &self.duration_ms,
            &self.listed,
            &self.created,
            &self.deleted,
            &self.rejected,
        ]
    }
}

fn bump(counter: &AtomicU64, by: u64) {
    counter.fetch_add(by, Ordering::Relaxed);
}

fn read(counter: &AtomicU64) -> u64 {
    counter.load(Ordering::Relaxed)
}

/// Metrics collector. Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one HTTP request (served or sent) and add its duration.
    pub fn record_http_request(&self, duration: Duration) {
        bump(&self.counters.requests, 1);
        bump(&self.counters.duration_ms, duration.as_millis() as u64);
    }

    /// Count a request that failed or answered with an error status.
    pub fn record_http_error(&self) {
        bump(&self.counters.errors, 1);
    }

    /// Add the number of contacts one list call returned.
    pub fn record_contacts_listed(&self, count: usize) {
        bump(&self.counters.listed, count as u64);
    }

    pub fn record_contact_created(&self) {
        bump(&self.counters.created, 1);
    }

    pub fn record_contact_deleted(&self) {
        bump(&self.counters.deleted, 1);
    }

    /// Count a create rejected by the field rules.
    pub fn record_validation_failure(&self) {
        bump(&self.counters.rejected, 1);
    }

    pub fn http_requests_total(&self) -> u64 {
        read(&self.counters.requests)
    }

    pub fn http_errors_total(&self) -> u64 {
        read(&self.counters.errors)
    }

    /// Cumulative request time in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        read(&self.counters.duration_ms)
    }

    /// Mean request time in milliseconds, 0 before the first request.
    pub fn http_duration_avg_ms(&self) -> f64 {
        match self.http_requests_total() {
            0 => 0.0,
            count => self.http_duration_total_ms() as f64 / count as f64,
        }
    }

    pub fn contacts_listed_total(&self) -> u64 {
        read(&self.counters.listed)
    }

    pub fn contacts_created_total(&self) -> u64 {
        read(&self.counters.created)
    }

    pub fn contacts_deleted_total(&self) -> u64 {
        read(&self.counters.deleted)
    }

    pub fn validation_failures_total(&self) -> u64 {
        read(&self.counters.rejected)
    }

    /// Zero every counter.
    pub fn reset(&self) {
        for counter in self.counters.all() {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Point-in-time copy of every counter.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            contacts_listed_total: self.contacts_listed_total(),
            contacts_created_total: self.contacts_created_total(),
            contacts_deleted_total: self.contacts_deleted_total(),
            validation_failures_total: self.validation_failures_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub contacts_listed_total: u64,
    pub contacts_created_total: u64,
    pub contacts_deleted_total: u64,
    pub validation_failures_total: u64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requests={} errors={} avg_ms={:.1} listed={} created={} deleted={} rejected={}",
            self.http_requests_total,
            self.http_errors_total,
            self.http_duration_avg_ms,
            self.contacts_listed_total,
            self.contacts_created_total,
            self.contacts_deleted_total,
            self.validation_failures_total,
        )
    }
}

/// Times one HTTP request and records it when completed.
///
/// A timer dropped without completing records nothing.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Record the request as successful.
    pub fn complete(self) {
        self.metrics.record_http_request(self.elapsed());
    }

    /// Record the request and count it as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.elapsed());
        self.metrics.record_http_error();
    }
}
