use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ddd_core::EventId;
use ddd_events::Event;

use crate::{Address, CustomerId};

pub const CUSTOMER_CREATED: &str = "CustomerCreatedEvent";
pub const CUSTOMER_ADDRESS_CHANGED: &str = "CustomerAddressChangedEvent";

/// Event: CustomerCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub event_id: EventId,
    pub customer_id: CustomerId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

impl CustomerCreated {
    pub fn new(customer_id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            event_id: EventId::new(),
            customer_id,
            name: name.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// Event: CustomerAddressChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddressChanged {
    pub event_id: EventId,
    pub customer_id: CustomerId,
    pub name: String,
    pub address: Address,
    pub occurred_at: DateTime<Utc>,
}

impl CustomerAddressChanged {
    pub fn new(customer_id: CustomerId, name: impl Into<String>, address: Address) -> Self {
        Self {
            event_id: EventId::new(),
            customer_id,
            name: name.into(),
            address,
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CustomerEvent {
    #[serde(rename = "CustomerCreatedEvent")]
    Created(CustomerCreated),
    #[serde(rename = "CustomerAddressChangedEvent")]
    AddressChanged(CustomerAddressChanged),
}

impl Event for CustomerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CustomerEvent::Created(_) => CUSTOMER_CREATED,
            CustomerEvent::AddressChanged(_) => CUSTOMER_ADDRESS_CHANGED,
        }
    }

    fn event_id(&self) -> EventId {
        match self {
            CustomerEvent::Created(e) => e.event_id,
            CustomerEvent::AddressChanged(e) => e.event_id,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CustomerEvent::Created(e) => e.occurred_at,
            CustomerEvent::AddressChanged(e) => e.occurred_at,
        }
    }
}

impl From<CustomerCreated> for CustomerEvent {
    fn from(event: CustomerCreated) -> Self {
        Self::Created(event)
    }
}

impl From<CustomerAddressChanged> for CustomerEvent {
    fn from(event: CustomerAddressChanged) -> Self {
        Self::AddressChanged(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_id(id: &str) -> CustomerId {
        id.parse().unwrap()
    }

    #[test]
    fn variant_decides_event_type() {
        let created: CustomerEvent = CustomerCreated::new(customer_id("12345"), "Customer Abc").into();
        let address = Address::new("Rua Tenente Ary Rauen", 123, "89300-000", "Mafra").unwrap();
        let moved: CustomerEvent =
            CustomerAddressChanged::new(customer_id("123"), "Customer ABC", address).into();

        assert_eq!(created.event_type(), "CustomerCreatedEvent");
        assert_eq!(moved.event_type(), "CustomerAddressChangedEvent");
        assert_eq!(created.version(), 1);
    }

    #[test]
    fn every_occurrence_gets_its_own_id() {
        let a = CustomerCreated::new(customer_id("12345"), "Customer ABC");
        let b = CustomerCreated::new(customer_id("333"), "Customer 333");
        assert_ne!(a.event_id, b.event_id);
    }

    #[test]
    fn serialized_form_is_tagged_with_the_event_type() {
        let event: CustomerEvent = CustomerCreated::new(customer_id("333"), "Customer 333").into();
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "CustomerCreatedEvent");
        assert_eq!(json["data"]["customer_id"], "333");
        assert_eq!(json["data"]["name"], "Customer 333");

        let back: CustomerEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
