//! Notification sink trait and built-in implementations.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::error::{Result, SherpaError};

/// An external delivery channel for alert messages.
///
/// Delivery is fire-and-forget from the engine's perspective: a failure
/// is non-fatal and leaves the alert pending for retry. Implementations
/// that call out over the network own their timeout and must report
/// failure past it rather than block.
pub trait NotificationSink: Send + Sync + Debug {
    /// Deliver one message. `Ok` means confirmed delivery.
    fn deliver(&self, message: &str) -> Result<()>;

    /// Name of this sink (for diagnostics).
    fn name(&self) -> &'static str;
}

/// The default sink when none is configured: every delivery fails, so
/// alerts accumulate as pending until an operator wires a real channel.
#[derive(Debug, Default)]
pub struct DisabledSink;

impl NotificationSink for DisabledSink {
    fn deliver(&self, _message: &str) -> Result<()> {
        Err(SherpaError::delivery("no notification sink configured"))
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

/// An in-memory sink that records delivered messages. The failure
/// toggle simulates an unreachable channel.
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl MemorySink {
    /// Create a healthy in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle delivery failure.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Messages delivered so far.
    pub fn delivered(&self) -> Vec<String> {
        self.delivered.lock().clone()
    }
}

impl NotificationSink for MemorySink {
    fn deliver(&self, message: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SherpaError::delivery("sink unreachable"));
        }
        self.delivered.lock().push(message.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
