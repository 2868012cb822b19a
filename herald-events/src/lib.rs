//! Synchronous in-process event dispatching for Herald
//!
//! This crate maps event names to ordered lists of handlers and invokes
//! those handlers when an event with that name is dispatched.
//!
//! ## Features
//!
//! - **Named events** - Handlers are keyed by event name, not type
//! - **Identity-based registration** - The same handler instance can only be registered once per name
//! - **Ordered delivery** - Handlers run in registration order on the caller's thread
//! - **Re-entrant** - Handlers may register, remove or dispatch while being dispatched to
//!
//! ## Quick Start
//!
//! ```rust
//! use herald_events::*;
//! use std::sync::Arc;
//!
//! // Define an event
//! #[derive(Debug)]
//! struct UserCreatedEvent {
//!     metadata: EventMetadata,
//!     email: String,
//! }
//!
//! impl Event for UserCreatedEvent {
//!     fn name(&self) -> &str { &self.metadata.name }
//!     fn payload(&self) -> &dyn std::any::Any { &self.email }
//!     fn timestamp(&self) -> chrono::DateTime<chrono::Utc> { self.metadata.timestamp }
//!     fn as_any(&self) -> &dyn std::any::Any { self }
//! }
//!
//! // Define a handler
//! struct EmailHandler;
//!
//! impl EventHandler for EmailHandler {
//!     fn handle(&self, event: &dyn Event) {
//!         if let Some(email) = event.payload().downcast_ref::<String>() {
//!             println!("Sending welcome email to {}", email);
//!         }
//!     }
//! }
//!
//! let dispatcher = EventDispatcher::new();
//! let handler: Arc<dyn EventHandler> = Arc::new(EmailHandler);
//!
//! dispatcher.register("user_created", handler.clone()).unwrap();
//! assert!(dispatcher.has("user_created", &handler));
//!
//! dispatcher.dispatch(&UserCreatedEvent {
//!     metadata: EventMetadata::new("user_created"),
//!     email: "alice@example.com".to_string(),
//! });
//! ```
//!
//! ## Multiple Handlers
//!
//! ```rust,ignore
//! // Handlers run in the order they were registered
//! dispatcher.register("user_created", email_handler)?;
//! dispatcher.register("user_created", analytics_handler)?;
//! dispatcher.register("user_created", audit_handler)?;
//!
//! dispatcher.dispatch(&event);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use herald_events::EventDispatcherBuilder;
//!
//! let dispatcher = EventDispatcherBuilder::new()
//!     .enable_logging(false)   // No tracing output
//!     .build();
//! ```
//!
//! ## Error Handling
//!
//! Registration is the only fallible operation. Handler panics are not
//! caught and abort the remaining handlers of that dispatch.
//!
//! ```rust,ignore
//! match dispatcher.register("user_created", handler) {
//!     Ok(()) => {}
//!     Err(DispatchError::HandlerAlreadyRegistered { event_name }) => {
//!         eprintln!("already listening to {}", event_name);
//!     }
//! }
//! ```

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;

pub use dispatcher::{DispatcherConfig, EventDispatcher, EventDispatcherBuilder};
pub use error::{DispatchError, Result};
pub use event::{Event, EventMetadata, GenericEvent};
pub use handler::{
    EventHandler, FnHandler, TypedEventHandler, TypedHandler, handler_fn, same_handler,
};
