//! Threshold alerting and delivery.
//!
//! The policy turns a gap summary and the feedback accuracy into
//! independent, human-readable alert messages. The queue keeps every
//! raised alert pending until a notification sink confirms delivery;
//! failed deliveries are retried on the next evaluation cycle, never
//! discarded.

pub mod policy;
pub mod queue;
pub mod sink;

pub use policy::{AlertPolicy, AlertThresholds};
pub use queue::{Alert, AlertQueue};
pub use sink::{DisabledSink, MemorySink, NotificationSink};
