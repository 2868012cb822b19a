//! Dispatcher errors

use thiserror::Error;

/// Result alias for dispatcher operations.
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Errors returned by [`EventDispatcher`](crate::EventDispatcher).
///
/// Only registration can fail. Removal of an absent handler, clearing and
/// dispatching never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The same handler instance is already registered under this event name.
    #[error("handler already registered for event '{event_name}'")]
    HandlerAlreadyRegistered { event_name: String },
}
