//! Event handler traits and adapters

use crate::event::Event;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::warn;

/// Event handler trait
///
/// Handlers are registered with the dispatcher as `Arc<dyn EventHandler>`
/// and are identified by that allocation, not by their state.
pub trait EventHandler: Send + Sync {
    /// Handle the event
    fn handle(&self, event: &dyn Event);
}

/// Returns true when both references point at the same handler allocation.
///
/// Only the data pointer is compared. Vtable pointers for the same type are
/// not guaranteed to be unique, so comparing fat pointers could report two
/// clones of one `Arc` as different handlers.
pub fn same_handler(a: &Arc<dyn EventHandler>, b: &Arc<dyn EventHandler>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Closure-backed handler
///
/// ```rust
/// use herald_events::{handler_fn, EventDispatcher, GenericEvent};
///
/// let dispatcher = EventDispatcher::new();
/// dispatcher
///     .register("ping", handler_fn(|event| println!("got {}", event.name())))
///     .unwrap();
/// dispatcher.dispatch(&GenericEvent::new("ping", ()));
/// ```
pub struct FnHandler<F> {
    f: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&dyn Event) + Send + Sync + 'static,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventHandler for FnHandler<F>
where
    F: Fn(&dyn Event) + Send + Sync + 'static,
{
    fn handle(&self, event: &dyn Event) {
        (self.f)(event)
    }
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").finish_non_exhaustive()
    }
}

/// Wrap a closure into a shareable handler reference.
pub fn handler_fn<F>(f: F) -> Arc<dyn EventHandler>
where
    F: Fn(&dyn Event) + Send + Sync + 'static,
{
    Arc::new(FnHandler::new(f))
}

/// Handler for one concrete event type
pub trait TypedEventHandler<E: Event>: Send + Sync {
    /// Handle the event
    fn handle(&self, event: &E);
}

/// Wrapper for typed event handlers
///
/// Downcasts every dispatched event to `E`. Events of any other concrete
/// type are skipped.
pub struct TypedHandler<E: Event, H: TypedEventHandler<E>> {
    handler: H,
    _phantom: PhantomData<fn(&E)>,
}

impl<E: Event, H: TypedEventHandler<E>> TypedHandler<E, H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _phantom: PhantomData,
        }
    }

    /// Borrow the wrapped handler
    pub fn inner(&self) -> &H {
        &self.handler
    }
}

impl<E: Event, H: TypedEventHandler<E>> EventHandler for TypedHandler<E, H> {
    fn handle(&self, event: &dyn Event) {
        match event.as_any().downcast_ref::<E>() {
            Some(typed_event) => self.handler.handle(typed_event),
            None => warn!(
                event = event.name(),
                expected = std::any::type_name::<E>(),
                "Typed handler skipped event of another type"
            ),
        }
    }
}
