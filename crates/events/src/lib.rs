//! Domain events and their in-process, synchronous dispatch.
//!
//! - [`Event`]: a fact that happened, identified by a stable type name.
//! - [`EventHandler`]: reacts to events (side effects are opaque to the dispatcher).
//! - [`EventDispatcher`]: registry of handlers per event type, notified in registration order.
//! - [`SharedEventDispatcher`]: lock-guarded handle for multi-module / multi-thread use.

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;
pub mod shared;

pub use dispatcher::EventDispatcher;
pub use error::{DispatchError, HandlerError};
pub use event::Event;
pub use handler::{EventHandler, FnHandler, SharedHandler};
pub use shared::SharedEventDispatcher;
