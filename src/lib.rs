// Herald - synchronous in-process event dispatching
//
// This library re-exports the dispatcher crate so applications only need a
// single dependency.

// Re-export core functionality
pub use herald_events::*;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        DispatchError, Event, EventDispatcher, EventHandler, EventMetadata, GenericEvent,
        handler_fn,
    };
}
