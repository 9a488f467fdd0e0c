use chrono::{DateTime, Utc};

use ddd_core::EventId;

/// A domain event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - **named**: `event_type()` is the key handlers are registered under
///
/// Bounded contexts usually model their events as one enum, where the variant
/// decides the type name (e.g. `CustomerEvent::Created(_)` → `"CustomerCreatedEvent"`).
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "ProductCreatedEvent").
    fn event_type(&self) -> &'static str;

    /// Identifier of this particular occurrence.
    fn event_id(&self) -> EventId;

    /// Schema version for this event type.
    fn version(&self) -> u32 {
        1
    }

    /// When the event occurred (set once, at creation).
    fn occurred_at(&self) -> DateTime<Utc>;
}
