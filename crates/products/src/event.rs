use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ddd_core::EventId;
use ddd_events::Event;

use crate::ProductId;

pub const PRODUCT_CREATED: &str = "ProductCreatedEvent";

/// Event: ProductCreated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub event_id: EventId,
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub occurred_at: DateTime<Utc>,
}

impl ProductCreated {
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            product_id,
            name: name.into(),
            description: description.into(),
            price,
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ProductEvent {
    #[serde(rename = "ProductCreatedEvent")]
    Created(ProductCreated),
}

impl Event for ProductEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProductEvent::Created(_) => PRODUCT_CREATED,
        }
    }

    fn event_id(&self) -> EventId {
        match self {
            ProductEvent::Created(e) => e.event_id,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProductEvent::Created(e) => e.occurred_at,
        }
    }
}

impl From<ProductCreated> for ProductEvent {
    fn from(event: ProductCreated) -> Self {
        Self::Created(event)
    }
}
