//! Synchronous, in-process event dispatcher (observer pattern).
//!
//! The dispatcher owns a registry mapping an event type name to the ordered list
//! of handlers registered for it:
//!
//! ```text
//! "CustomerCreatedEvent" → [FirstLogHandler, SecondLogHandler]
//! "ProductCreatedEvent"  → [SendEmailHandler]
//! ```
//!
//! - Registration order is preserved and is the notification order.
//! - Duplicates are allowed: a handler registered twice runs twice.
//! - Unknown event types and unknown handlers are no-ops, never errors.
//! - `unregister` leaves an empty list behind; only `unregister_all` drops keys.
//!
//! The dispatcher is plain data with no locking. Mutation needs `&mut self`, so it
//! can't happen while a `notify` is running. Use
//! [`SharedEventDispatcher`](crate::SharedEventDispatcher) to share one across threads.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{DispatchError, Event, EventHandler, SharedHandler};

pub struct EventDispatcher<E> {
    event_handlers: HashMap<String, Vec<SharedHandler<E>>>,
}

impl<E> EventDispatcher<E>
where
    E: Event,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Live view of the registry (event type → handlers, in registration order).
    pub fn event_handlers(&self) -> &HashMap<String, Vec<SharedHandler<E>>> {
        &self.event_handlers
    }

    /// Handlers registered for `event_type`.
    ///
    /// `None` means the type was never registered (or `unregister_all` ran since);
    /// `Some(&[])` means every handler was unregistered.
    pub fn handlers_for(&self, event_type: &str) -> Option<&[SharedHandler<E>]> {
        self.event_handlers.get(event_type).map(Vec::as_slice)
    }

    /// Append `handler` to the list for `event_type`, creating the list if absent.
    pub fn register(&mut self, event_type: impl Into<String>, handler: SharedHandler<E>) {
        let event_type = event_type.into();
        tracing::debug!(event_type = %event_type, handler = handler.name(), "registering event handler");

        self.event_handlers
            .entry(event_type)
            .or_default()
            .push(handler);
    }

    /// Remove the first registration of `handler` (by identity) for `event_type`.
    ///
    /// Silent no-op when the type or the handler is unknown. The list itself is
    /// kept, even when it becomes empty.
    pub fn unregister<H>(&mut self, event_type: &str, handler: &Arc<H>)
    where
        H: EventHandler<E> + ?Sized,
    {
        let Some(handlers) = self.event_handlers.get_mut(event_type) else {
            return;
        };

        if let Some(index) = handlers
            .iter()
            .position(|registered| std::ptr::addr_eq(Arc::as_ptr(registered), Arc::as_ptr(handler)))
        {
            let removed = handlers.remove(index);
            tracing::debug!(event_type, handler = removed.name(), "unregistered event handler");
        }
    }

    /// Drop every registration for every event type.
    pub fn unregister_all(&mut self) {
        tracing::debug!(event_types = self.event_handlers.len(), "unregistering all event handlers");
        self.event_handlers.clear();
    }

    /// Invoke every handler registered for `event.event_type()`, in registration order.
    ///
    /// All handlers receive the same event. The first handler failure stops the
    /// notification and is returned to the caller.
    pub fn notify(&self, event: &E) -> Result<(), DispatchError> {
        match self.handlers_for(event.event_type()) {
            Some(handlers) => invoke_in_order(handlers, event),
            None => {
                tracing::trace!(event_type = event.event_type(), "no handlers registered");
                Ok(())
            }
        }
    }
}

/// Run `handlers` sequentially against `event`, failing fast.
pub(crate) fn invoke_in_order<E>(handlers: &[SharedHandler<E>], event: &E) -> Result<(), DispatchError>
where
    E: Event,
{
    let event_type = event.event_type();
    let event_id = event.event_id();

    for handler in handlers {
        tracing::trace!(event_type, %event_id, handler = handler.name(), "invoking handler");

        handler.handle(event).map_err(|source| {
            tracing::warn!(event_type, %event_id, handler = handler.name(), error = %source, "event handler failed");
            DispatchError::Handler {
                event_type,
                handler: handler.name().to_string(),
                source,
            }
        })?;
    }

    Ok(())
}

impl<E> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self {
            event_handlers: HashMap::new(),
        }
    }
}

impl<E> core::fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (event_type, handlers) in &self.event_handlers {
            let names: Vec<&str> = handlers.iter().map(|h| h.name()).collect();
            map.entry(event_type, &names);
        }
        map.finish()
    }
}
