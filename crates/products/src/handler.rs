//! Handlers reacting to product events.

use ddd_events::{EventHandler, HandlerError};

use crate::ProductEvent;

/// Notifies the catalog team by email when a product is created.
///
/// There is no mail transport yet: the message is rendered and logged.
#[derive(Debug, Clone)]
pub struct SendEmailWhenProductIsCreatedHandler {
    recipient: String,
}

impl SendEmailWhenProductIsCreatedHandler {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    fn message(&self) -> String {
        format!("Sending email to {}", self.recipient)
    }
}

impl Default for SendEmailWhenProductIsCreatedHandler {
    fn default() -> Self {
        Self::new("catalog@example.com")
    }
}

impl EventHandler<ProductEvent> for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &ProductEvent) -> Result<(), HandlerError> {
        let ProductEvent::Created(created) = event;

        let body = serde_json::to_string(created)
            .map_err(|e| HandlerError::with_source("could not render email body", e))?;

        tracing::info!(
            event_id = %created.event_id,
            to = %self.recipient,
            subject = %format!("New product: {}", created.name),
            body = %body,
            "{}",
            self.message()
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "SendEmailWhenProductIsCreatedHandler"
    }
}
