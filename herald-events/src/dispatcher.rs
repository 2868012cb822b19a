//! Event dispatcher implementation

use crate::error::{DispatchError, Result};
use crate::event::Event;
use crate::handler::{EventHandler, same_handler};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

type HandlerMap = HashMap<String, Vec<Arc<dyn EventHandler>>>;

/// Synchronous in-process event dispatcher
///
/// Maps event names to ordered handler lists. Clones share the same
/// registrations, so a handler may keep a clone and call back into the
/// dispatcher while an event is being dispatched.
#[derive(Clone)]
pub struct EventDispatcher {
    /// Handlers registered for each event name, in registration order
    handlers: Arc<Mutex<HandlerMap>>,

    /// Configuration
    config: Arc<DispatcherConfig>,
}

/// Event dispatcher configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Emit tracing events for registrations and dispatches
    pub enable_logging: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
        }
    }
}

impl EventDispatcher {
    /// Create new event dispatcher
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    /// Create event dispatcher with custom config
    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            handlers: Arc::new(Mutex::new(HashMap::new())),
            config: Arc::new(config),
        }
    }

    /// Start building a dispatcher
    pub fn builder() -> EventDispatcherBuilder {
        EventDispatcherBuilder::new()
    }

    /// Get the dispatcher configuration
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Register a handler for an event name
    ///
    /// The handler is appended after every handler already registered under
    /// `event_name`. Registering the same `Arc` twice under one name fails
    /// and leaves the existing registrations untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herald_events::{handler_fn, DispatchError, EventDispatcher};
    ///
    /// let dispatcher = EventDispatcher::new();
    /// let handler = handler_fn(|_| {});
    ///
    /// dispatcher.register("user_created", handler.clone()).unwrap();
    /// assert!(matches!(
    ///     dispatcher.register("user_created", handler),
    ///     Err(DispatchError::HandlerAlreadyRegistered { .. })
    /// ));
    /// ```
    pub fn register(
        &self,
        event_name: impl Into<String>,
        handler: Arc<dyn EventHandler>,
    ) -> Result<()> {
        let event_name = event_name.into();
        let mut handlers = self.handlers.lock();
        let list = handlers.entry(event_name.clone()).or_default();

        if list.iter().any(|h| same_handler(h, &handler)) {
            return Err(DispatchError::HandlerAlreadyRegistered { event_name });
        }

        list.push(handler);
        let count = list.len();
        drop(handlers);

        if self.config.enable_logging {
            debug!(event = %event_name, handlers = count, "Registered event handler");
        }

        Ok(())
    }

    /// Check whether this exact handler is registered for an event name
    pub fn has(&self, event_name: &str, handler: &Arc<dyn EventHandler>) -> bool {
        self.handlers
            .lock()
            .get(event_name)
            .is_some_and(|list| list.iter().any(|h| same_handler(h, handler)))
    }

    /// Remove a handler from an event name
    ///
    /// The remaining handlers keep their order. Removing a handler that is
    /// not registered, or from a name that was never used, is a no-op.
    pub fn remove(&self, event_name: &str, handler: &Arc<dyn EventHandler>) -> Result<()> {
        let mut handlers = self.handlers.lock();
        let Some(list) = handlers.get_mut(event_name) else {
            return Ok(());
        };

        if let Some(index) = list.iter().position(|h| same_handler(h, handler)) {
            list.remove(index);
            let remaining = list.len();
            drop(handlers);

            if self.config.enable_logging {
                debug!(
                    event = event_name,
                    handlers = remaining,
                    "Removed event handler"
                );
            }
        }

        Ok(())
    }

    /// Dispatch an event to every handler registered under its name
    ///
    /// Handlers run on the calling thread in registration order. The lock is
    /// released before the first handler runs, so handlers registered or
    /// removed while this call is in progress do not affect it. A panicking
    /// handler stops the dispatch and the panic reaches the caller.
    pub fn dispatch(&self, event: &dyn Event) {
        let snapshot = self.handlers(event.name());

        if snapshot.is_empty() {
            if self.config.enable_logging {
                trace!(event = event.name(), "No handlers registered for event");
            }
            return;
        }

        if self.config.enable_logging {
            trace!(
                event = event.name(),
                handlers = snapshot.len(),
                "Dispatching event"
            );
        }

        for handler in &snapshot {
            handler.handle(event);
        }
    }

    /// Clear all handlers
    pub fn clear(&self) {
        let mut handlers = self.handlers.lock();
        let cleared = handlers.len();
        handlers.clear();
        drop(handlers);

        if self.config.enable_logging {
            debug!(events = cleared, "Cleared all event handlers");
        }
    }

    /// Get handler count for an event name
    pub fn handler_count(&self, event_name: &str) -> usize {
        self.handlers.lock().get(event_name).map_or(0, Vec::len)
    }

    /// Snapshot of the handlers for an event name, in registration order
    pub fn handlers(&self, event_name: &str) -> Vec<Arc<dyn EventHandler>> {
        self.handlers
            .lock()
            .get(event_name)
            .cloned()
            .unwrap_or_default()
    }

    /// Registered event names, sorted
    ///
    /// Names whose handlers were all removed are still listed.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered event names
    pub fn len(&self) -> usize {
        self.handlers.lock().len()
    }

    /// True when no event name has ever been registered since the last clear
    pub fn is_empty(&self) -> bool {
        self.handlers.lock().is_empty()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.lock();
        let counts: std::collections::BTreeMap<&str, usize> = handlers
            .iter()
            .map(|(name, list)| (name.as_str(), list.len()))
            .collect();

        f.debug_struct("EventDispatcher")
            .field("handlers", &counts)
            .field("config", &self.config)
            .finish()
    }
}

/// Event dispatcher builder
#[derive(Debug, Default)]
pub struct EventDispatcherBuilder {
    config: DispatcherConfig,
}

impl EventDispatcherBuilder {
    /// Create new event dispatcher builder
    pub fn new() -> Self {
        Self {
            config: DispatcherConfig::default(),
        }
    }

    /// Enable/disable logging
    pub fn enable_logging(mut self, enabled: bool) -> Self {
        self.config.enable_logging = enabled;
        self
    }

    /// Build the event dispatcher
    pub fn build(self) -> EventDispatcher {
        EventDispatcher::with_config(self.config)
    }
}
