use ddd_events::{EventHandler, HandlerError};

use crate::{CustomerAddressChanged, CustomerEvent};

fn message(changed: &CustomerAddressChanged) -> String {
    format!(
        "Endereço do cliente: {}, {} alterado para: {}",
        changed.customer_id, changed.name, changed.address
    )
}

/// Logs the new address of a customer, with the full event payload as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerAddressChangedLogHandler;

impl EventHandler<CustomerEvent> for CustomerAddressChangedLogHandler {
    fn handle(&self, event: &CustomerEvent) -> Result<(), HandlerError> {
        let CustomerEvent::AddressChanged(changed) = event else {
            return Ok(());
        };

        let payload = serde_json::to_string(changed)
            .map_err(|e| HandlerError::with_source("could not serialize event payload", e))?;

        tracing::info!(
            event_id = %changed.event_id,
            payload = %payload,
            "{}",
            message(changed)
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "CustomerAddressChangedLogHandler"
    }
}
