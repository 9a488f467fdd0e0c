use ddd_events::{EventHandler, HandlerError};

use crate::CustomerEvent;

const FIRST_MESSAGE: &str = "Esse é o primeiro console.log do evento: CustomerCreated";
const SECOND_MESSAGE: &str = "Esse é o segundo console.log do evento: CustomerCreated";

/// First of the two log lines written when a customer is created.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstCustomerCreatedLogHandler;

impl EventHandler<CustomerEvent> for FirstCustomerCreatedLogHandler {
    fn handle(&self, event: &CustomerEvent) -> Result<(), HandlerError> {
        if let CustomerEvent::Created(created) = event {
            tracing::info!(
                event_id = %created.event_id,
                customer_id = %created.customer_id,
                "{FIRST_MESSAGE}"
            );
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "FirstCustomerCreatedLogHandler"
    }
}

/// Second of the two log lines written when a customer is created.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecondCustomerCreatedLogHandler;

impl EventHandler<CustomerEvent> for SecondCustomerCreatedLogHandler {
    fn handle(&self, event: &CustomerEvent) -> Result<(), HandlerError> {
        if let CustomerEvent::Created(created) = event {
            tracing::info!(
                event_id = %created.event_id,
                customer_id = %created.customer_id,
                "{SECOND_MESSAGE}"
            );
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "SecondCustomerCreatedLogHandler"
    }
}
