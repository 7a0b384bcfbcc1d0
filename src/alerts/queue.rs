//! Pending-alert queue with delivery tracking.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use uuid::Uuid;

use crate::alerts::sink::NotificationSink;
use crate::error::{Result, SherpaError};

/// One raised alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Collision-free identity, stable across persistence.
    pub id: Uuid,
    /// When the alert was raised.
    pub timestamp: DateTime<Utc>,
    /// Human-readable alert message.
    pub message: String,
}

/// Queues alerts for delivery to an external sink.
///
/// A raised alert enters the pending set first and is removed only on
/// confirmed delivery or an explicit operator delete. Delivery failure
/// leaves it pending for the next `flush`.
#[derive(Debug)]
pub struct AlertQueue {
    pending: RwLock<Vec<Alert>>,
    sink: Arc<dyn NotificationSink>,
}

impl AlertQueue {
    /// Create a queue delivering through the given sink.
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            pending: RwLock::new(Vec::new()),
            sink,
        }
    }

    /// Raise an alert: queue it, then attempt immediate delivery.
    ///
    /// Returns the alert and whether delivery was confirmed.
    pub fn raise(&self, message: &str) -> (Alert, bool) {
        let alert = Alert {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            message: message.to_string(),
        };
        self.pending.write().push(alert.clone());

        match self.sink.deliver(message) {
            Ok(()) => {
                self.pending.write().retain(|a| a.id != alert.id);
                (alert, true)
            }
            Err(err) => {
                warn!(sink = self.sink.name(), %err, "alert delivery failed, kept pending");
                (alert, false)
            }
        }
    }

    /// Retry delivery of every pending alert; delivered alerts leave
    /// the queue. Returns how many were delivered.
    pub fn flush(&self) -> usize {
        let snapshot = self.pending.read().clone();
        let mut delivered = 0;

        for alert in snapshot {
            match self.sink.deliver(&alert.message) {
                Ok(()) => {
                    self.pending.write().retain(|a| a.id != alert.id);
                    delivered += 1;
                }
                Err(err) => {
                    warn!(sink = self.sink.name(), %err, "alert redelivery failed");
                }
            }
        }

        delivered
    }

    /// The pending alerts, newest last.
    pub fn pending(&self) -> Vec<Alert> {
        self.pending.read().clone()
    }

    /// Reload previously persisted pending alerts (queued before any
    /// alert raised in this process).
    pub fn restore(&self, alerts: Vec<Alert>) {
        let mut pending = self.pending.write();
        let mut restored = alerts;
        restored.append(&mut pending);
        *pending = restored;
    }

    /// Remove one pending alert by position.
    pub fn delete_at(&self, index: usize) -> Result<Alert> {
        let mut pending = self.pending.write();
        if index < pending.len() {
            Ok(pending.remove(index))
        } else {
            Err(SherpaError::not_found(format!("alert at index {index}")))
        }
    }

    /// Remove every pending alert with the given timestamp. Returns how
    /// many were removed.
    pub fn delete_by_timestamp(&self, timestamp: DateTime<Utc>) -> usize {
        let mut pending = self.pending.write();
        let before = pending.len();
        pending.retain(|a| a.timestamp != timestamp);
        before - pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::sink::MemorySink;

    #[test]
    fn test_raise_with_healthy_sink_delivers_immediately() {
        let sink = Arc::new(MemorySink::new());
        let queue = AlertQueue::new(sink.clone());

        let (_, delivered) = queue.raise("coverage low");
        assert!(delivered);
        assert!(queue.pending().is_empty());
        assert_eq!(sink.delivered(), vec!["coverage low"]);
    }

    #[test]
    fn test_raise_with_failing_sink_keeps_pending() {
        let sink = Arc::new(MemorySink::new());
        sink.set_failing(true);
        let queue = AlertQueue::new(sink.clone());

        let (_, delivered) = queue.raise("coverage low");
        assert!(!delivered);
        assert_eq!(queue.pending().len(), 1);
    }

    #[test]
    fn test_flush_retries_pending() {
        let sink = Arc::new(MemorySink::new());
        sink.set_failing(true);
        let queue = AlertQueue::new(sink.clone());
        queue.raise("first");
        queue.raise("second");
        assert_eq!(queue.pending().len(), 2);

        sink.set_failing(false);
        assert_eq!(queue.flush(), 2);
        assert!(queue.pending().is_empty());
        assert_eq!(sink.delivered(), vec!["first", "second"]);
    }

    #[test]
    fn test_delete_at() {
        let sink = Arc::new(MemorySink::new());
        sink.set_failing(true);
        let queue = AlertQueue::new(sink);
        queue.raise("first");
        queue.raise("second");

        let removed = queue.delete_at(0).unwrap();
        assert_eq!(removed.message, "first");
        assert_eq!(queue.pending().len(), 1);
        assert!(queue.delete_at(5).is_err());
    }

    #[test]
    fn test_delete_by_timestamp() {
        let sink = Arc::new(MemorySink::new());
        sink.set_failing(true);
        let queue = AlertQueue::new(sink);
        let (alert, _) = queue.raise("first");

        assert_eq!(queue.delete_by_timestamp(alert.timestamp), 1);
        assert_eq!(queue.delete_by_timestamp(alert.timestamp), 0);
        assert!(queue.pending().is_empty());
    }
}
