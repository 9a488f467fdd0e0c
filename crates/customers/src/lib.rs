//! Customers domain module.
//!
//! Business rules for customers (no IO, no storage), the events a customer
//! emits, and the handlers that react to them.

pub mod address;
pub mod customer;
pub mod event;
pub mod handler;

pub use address::Address;
pub use customer::{Customer, CustomerId};
pub use event::{
    CUSTOMER_ADDRESS_CHANGED, CUSTOMER_CREATED, CustomerAddressChanged, CustomerCreated,
    CustomerEvent,
};
pub use handler::{
    CustomerAddressChangedLogHandler, FirstCustomerCreatedLogHandler,
    SecondCustomerCreatedLogHandler,
};
