use chrono::{DateTime, Utc};

/// A fact produced by a successful mutation.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **message-worthy** (the view layer turns them into notifications)
/// - never produced by a rejected operation
pub trait Event: Clone + core::fmt::Debug {
    /// Stable event name/type identifier (e.g. "inventory.product.created").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (wall clock at commit time).
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable notification text for the event.
    fn message(&self) -> String;
}
