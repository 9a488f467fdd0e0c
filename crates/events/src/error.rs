//! Dispatch error model.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure raised by an [`EventHandler`](crate::EventHandler) while handling an event.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error returned by `notify` and by the shared dispatcher.
///
/// Handler failures are not isolated: the first failing handler stops the
/// notification and its error is surfaced here.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("handler `{handler}` failed while handling `{event_type}`")]
    Handler {
        event_type: &'static str,
        handler: String,
        #[source]
        source: HandlerError,
    },

    /// The shared dispatcher's lock was poisoned by a panicking thread.
    #[error("event dispatcher lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn handler_error_keeps_its_source() {
        let io = std::io::Error::other("smtp unreachable");
        let err = HandlerError::with_source("could not send email", io);

        assert_eq!(err.to_string(), "could not send email");
        assert_eq!(err.source().unwrap().to_string(), "smtp unreachable");
        assert!(HandlerError::new("boom").source().is_none());
    }

    #[test]
    fn dispatch_error_names_handler_and_event_type() {
        let err = DispatchError::Handler {
            event_type: "ProductCreatedEvent",
            handler: "SendEmail".to_string(),
            source: HandlerError::new("boom"),
        };

        assert_eq!(
            err.to_string(),
            "handler `SendEmail` failed while handling `ProductCreatedEvent`"
        );
        assert_eq!(err.source().unwrap().to_string(), "boom");
    }
}
