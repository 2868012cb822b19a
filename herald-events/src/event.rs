//! Event definitions and traits

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::Debug;
use uuid::Uuid;

/// Event trait
///
/// Anything that can be dispatched through an
/// [`EventDispatcher`](crate::EventDispatcher). The dispatcher only reads
/// [`name`](Event::name) to route the event; the payload and timestamp are
/// passed through to handlers untouched.
pub trait Event: Send + Sync + Debug + 'static {
    /// Get event name
    fn name(&self) -> &str;

    /// Get the opaque payload carried by this event
    fn payload(&self) -> &dyn Any;

    /// Get the time the event was created
    fn timestamp(&self) -> DateTime<Utc>;

    /// Cast to Any for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// Base event metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event ID
    pub id: Uuid,

    /// Event name
    pub name: String,

    /// Timestamp when event was created
    pub timestamp: DateTime<Utc>,

    /// Optional correlation ID for tracing
    pub correlation_id: Option<Uuid>,

    /// Free-form caller attributes
    pub attributes: serde_json::Value,
}

impl EventMetadata {
    /// Create new event metadata
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            timestamp: Utc::now(),
            correlation_id: None,
            attributes: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Set correlation ID
    pub fn with_correlation_id(mut self, id: Uuid) -> Self {
        self.correlation_id = Some(id);
        self
    }

    /// Set a single attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        if let serde_json::Value::Object(map) = &mut self.attributes {
            map.insert(key.into(), value);
        }
        self
    }
}

/// Ready-made event carrying a typed payload.
///
/// ```rust
/// use herald_events::{Event, GenericEvent};
///
/// let event = GenericEvent::new("order_placed", 42u64);
/// assert_eq!(event.name(), "order_placed");
/// assert_eq!(event.payload().downcast_ref::<u64>(), Some(&42));
/// ```
#[derive(Debug, Clone)]
pub struct GenericEvent<P> {
    /// Event metadata
    pub metadata: EventMetadata,

    /// Event payload
    pub payload: P,
}

impl<P> GenericEvent<P> {
    /// Create a new event with fresh metadata
    pub fn new(name: impl Into<String>, payload: P) -> Self {
        Self {
            metadata: EventMetadata::new(name),
            payload,
        }
    }

    /// Create an event from existing metadata
    pub fn with_metadata(metadata: EventMetadata, payload: P) -> Self {
        Self { metadata, payload }
    }

    /// Borrow the typed payload
    pub fn payload_ref(&self) -> &P {
        &self.payload
    }
}

impl<P> Event for GenericEvent<P>
where
    P: Debug + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.metadata.name
    }

    fn payload(&self) -> &dyn Any {
        &self.payload
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.metadata.timestamp
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
