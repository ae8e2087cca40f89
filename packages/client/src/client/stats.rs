//! Client statistics

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

/// Request counters shared by every clone of a client
#[derive(Debug)]
pub struct ClientStats {
    /// Requests handed to the transport
    pub total_requests: AtomicU64,
    /// Requests answered with a 2xx status
    pub successful_requests: AtomicU64,
    /// Requests that failed in transport or with a non-success status
    pub failed_requests: AtomicU64,
    /// Requests abandoned through their cancellation token
    pub cancelled_requests: AtomicU64,
    /// Fire-and-forget requests accepted by the service
    pub webhook_requests: AtomicU64,
    /// Client creation time
    pub created_at: Instant,
}

impl Default for ClientStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            total_requests: AtomicU64::new(0),
            successful_requests: AtomicU64::new(0),
            failed_requests: AtomicU64::new(0),
            cancelled_requests: AtomicU64::new(0),
            webhook_requests: AtomicU64::new(0),
            created_at: Instant::now(),
        }
    }

    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_success(&self) {
        self.successful_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cancelled(&self) {
        self.cancelled_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_webhook(&self) {
        self.webhook_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of the counters
    #[must_use]
    pub fn snapshot(&self) -> ClientStatsSnapshot {
        ClientStatsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            successful_requests: self.successful_requests.load(Ordering::Relaxed),
            failed_requests: self.failed_requests.load(Ordering::Relaxed),
            cancelled_requests: self.cancelled_requests.load(Ordering::Relaxed),
            webhook_requests: self.webhook_requests.load(Ordering::Relaxed),
            uptime: self.created_at.elapsed(),
        }
    }
}

/// Snapshot of [`ClientStats`] at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClientStatsSnapshot {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub cancelled_requests: u64,
    pub webhook_requests: u64,
    pub uptime: Duration,
}

impl ClientStatsSnapshot {
    /// Share of finished requests that succeeded, 1.0 before any finished
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        let finished = self.successful_requests + self.failed_requests;
        if finished == 0 {
            1.0
        } else {
            self.successful_requests as f64 / finished as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let stats = ClientStats::new();
        stats.record_request();
        stats.record_request();
        stats.record_success();
        stats.record_failure();
        stats.record_cancelled();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_requests, 2);
        assert_eq!(snapshot.cancelled_requests, 1);
        assert!((snapshot.success_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_serializes_for_export() {
        let stats = ClientStats::new();
        stats.record_webhook();
        let json = serde_json::to_value(stats.snapshot()).unwrap();
        assert_eq!(json["webhook_requests"], 1);
        assert_eq!(json["total_requests"], 0);
    }

    #[test]
    fn fresh_client_reports_full_success() {
        assert!((ClientStats::new().snapshot().success_rate() - 1.0).abs() < f64::EPSILON);
    }
}
