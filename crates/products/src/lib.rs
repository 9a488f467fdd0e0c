//! Products domain module.
//!
//! Business rules for the product catalog (no IO, no storage), the events a
//! product emits, and the handlers that react to them.

pub mod event;
pub mod handler;
pub mod product;

pub use event::{PRODUCT_CREATED, ProductCreated, ProductEvent};
pub use handler::SendEmailWhenProductIsCreatedHandler;
pub use product::{Product, ProductId};
