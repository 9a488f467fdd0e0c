//! Lock-guarded dispatcher handle for multi-module / multi-thread use.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dispatcher::invoke_in_order;
use crate::{DispatchError, Event, EventDispatcher, EventHandler, SharedHandler};

/// Cloneable handle to one [`EventDispatcher`] behind a `RwLock`.
///
/// - Clones share the same registry.
/// - Lock poisoning surfaces as [`DispatchError::Poisoned`].
/// - `notify` copies the handler list and releases the lock before invoking
///   handlers, so a handler may (un)register on the same dispatcher. Such changes
///   apply from the next `notify`.
#[derive(Debug)]
pub struct SharedEventDispatcher<E> {
    inner: Arc<RwLock<EventDispatcher<E>>>,
}

impl<E> SharedEventDispatcher<E>
where
    E: Event,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &self,
        event_type: impl Into<String>,
        handler: SharedHandler<E>,
    ) -> Result<(), DispatchError> {
        self.write()?.register(event_type, handler);
        Ok(())
    }

    pub fn unregister<H>(&self, event_type: &str, handler: &Arc<H>) -> Result<(), DispatchError>
    where
        H: EventHandler<E> + ?Sized,
    {
        self.write()?.unregister(event_type, handler);
        Ok(())
    }

    pub fn unregister_all(&self) -> Result<(), DispatchError> {
        self.write()?.unregister_all();
        Ok(())
    }

    pub fn notify(&self, event: &E) -> Result<(), DispatchError> {
        let handlers: Vec<SharedHandler<E>> = match self.read()?.handlers_for(event.event_type()) {
            Some(handlers) => handlers.to_vec(),
            None => return Ok(()),
        };

        invoke_in_order(&handlers, event)
    }

    /// Inspect the current registry under the read lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&EventDispatcher<E>) -> R) -> Result<R, DispatchError> {
        let guard = self.read()?;
        Ok(f(&guard))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EventDispatcher<E>>, DispatchError> {
        self.inner.read().map_err(|_| DispatchError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, EventDispatcher<E>>, DispatchError> {
        self.inner.write().map_err(|_| DispatchError::Poisoned)
    }
}

impl<E> Clone for SharedEventDispatcher<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for SharedEventDispatcher<E> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(EventDispatcher::default())),
        }
    }
}

impl<E> From<EventDispatcher<E>> for SharedEventDispatcher<E> {
    fn from(dispatcher: EventDispatcher<E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dispatcher)),
        }
    }
}
