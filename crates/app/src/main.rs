//! Wires the domain handlers to their dispatchers and plays a short scenario:
//! a product is created, a customer is created and then moves.

use std::sync::Arc;

use anyhow::Context;

use ddd_customers::{
    Address, CUSTOMER_ADDRESS_CHANGED, CUSTOMER_CREATED, Customer, CustomerAddressChangedLogHandler,
    CustomerEvent, CustomerId, FirstCustomerCreatedLogHandler, SecondCustomerCreatedLogHandler,
};
use ddd_events::EventDispatcher;
use ddd_products::{
    PRODUCT_CREATED, Product, ProductEvent, ProductId, SendEmailWhenProductIsCreatedHandler,
};

fn product_dispatcher() -> EventDispatcher<ProductEvent> {
    let mut dispatcher = EventDispatcher::<ProductEvent>::new();
    dispatcher.register(
        PRODUCT_CREATED,
        Arc::new(SendEmailWhenProductIsCreatedHandler::default()),
    );
    dispatcher
}

fn customer_dispatcher() -> EventDispatcher<CustomerEvent> {
    let mut dispatcher = EventDispatcher::<CustomerEvent>::new();
    dispatcher.register(CUSTOMER_CREATED, Arc::new(FirstCustomerCreatedLogHandler));
    dispatcher.register(CUSTOMER_CREATED, Arc::new(SecondCustomerCreatedLogHandler));
    dispatcher.register(
        CUSTOMER_ADDRESS_CHANGED,
        Arc::new(CustomerAddressChangedLogHandler),
    );
    dispatcher
}

fn main() -> anyhow::Result<()> {
    ddd_observability::init().context("invalid logging configuration")?;

    let products = product_dispatcher();
    let customers = customer_dispatcher();
    tracing::debug!(?products, ?customers, "dispatchers ready");

    let (_product, created) = Product::new(
        "p1".parse::<ProductId>()?,
        "Product 1",
        "Product 1 description",
        10.0,
    )?;
    products.notify(&created.into())?;

    let (mut customer, created) = Customer::new("12345".parse::<CustomerId>()?, "Customer ABC")?;
    customers.notify(&created.into())?;

    let address = Address::new("Rua Tenente Ary Rauen", 123, "89300-000", "Mafra")?;
    let moved = customer.change_address(address);
    customers.notify(&moved.into())?;
    customer.activate()?;

    tracing::info!(active = customer.is_active(), "scenario finished");
    Ok(())
}
