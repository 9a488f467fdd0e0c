use std::sync::Arc;

use crate::HandlerError;

/// Reacts to events of type `E`.
///
/// Handlers are registered on an [`EventDispatcher`](crate::EventDispatcher) under an
/// event type name and invoked synchronously, in registration order, on every
/// matching `notify`. What a handler does (logging, sending email, updating a
/// read model) is opaque to the dispatcher.
///
/// A handler that returns `Err` stops the notification: later handlers for
/// the same event are not invoked and the error reaches the caller of `notify`.
pub trait EventHandler<E>: Send + Sync {
    fn handle(&self, event: &E) -> Result<(), HandlerError>;

    /// Human-readable name used in logs and errors.
    fn name(&self) -> &str {
        core::any::type_name::<Self>()
    }
}

/// Handler reference as stored by the dispatcher.
///
/// Membership in a handler list is by identity: two `Arc`s are the same handler
/// only if they point at the same allocation.
pub type SharedHandler<E> = Arc<dyn EventHandler<E>>;

/// Adapts a closure into a named [`EventHandler`].
///
/// ```ignore
/// let audit = FnHandler::new("audit", |event: &CustomerEvent| {
///     tracing::info!(?event, "audited");
///     Ok(())
/// });
/// dispatcher.register("CustomerCreatedEvent", Arc::new(audit));
/// ```
pub struct FnHandler<F> {
    name: String,
    f: F,
}

impl<F> FnHandler<F> {
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> core::fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnHandler").field("name", &self.name).finish()
    }
}

impl<E, F> EventHandler<E> for FnHandler<F>
where
    F: Fn(&E) -> Result<(), HandlerError> + Send + Sync,
{
    fn handle(&self, event: &E) -> Result<(), HandlerError> {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl EventHandler<u32> for Noop {
        fn handle(&self, _event: &u32) -> Result<(), HandlerError> {
            Ok(())
        }
    }

    #[test]
    fn default_name_is_the_type_name() {
        assert!(EventHandler::<u32>::name(&Noop).ends_with("Noop"));
    }

    #[test]
    fn fn_handler_uses_given_name_and_closure() {
        let h = FnHandler::new("even-only", |n: &u32| {
            if n % 2 == 0 {
                Ok(())
            } else {
                Err(HandlerError::new(format!("{n} is odd")))
            }
        });

        assert_eq!(EventHandler::<u32>::name(&h), "even-only");
        assert!(h.handle(&2u32).is_ok());
        assert_eq!(h.handle(&3u32).unwrap_err().message(), "3 is odd");
    }
}
