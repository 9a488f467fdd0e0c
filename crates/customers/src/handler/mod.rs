//! Handlers reacting to customer events.
//!
//! These are side-effect-only reactions (logging). They ignore variants they
//! were not written for, so registering one under the wrong event type is
//! harmless.

mod log_address_changed;
mod log_customer_created;

pub use log_address_changed::CustomerAddressChangedLogHandler;
pub use log_customer_created::{FirstCustomerCreatedLogHandler, SecondCustomerCreatedLogHandler};
