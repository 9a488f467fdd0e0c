use serde::{Deserialize, Serialize};

use ddd_core::{DomainError, DomainResult, Entity, EntityId};

use crate::{Address, CustomerAddressChanged, CustomerCreated};

/// Customer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub EntityId);

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for CustomerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<EntityId>()?))
    }
}

/// Entity: Customer.
///
/// State-changing operations that other parts of the system care about return
/// the event describing the change; the caller decides when to notify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Customer {
    /// Create a new (inactive, address-less) customer.
    pub fn new(id: CustomerId, name: impl Into<String>) -> DomainResult<(Self, CustomerCreated)> {
        let name = name.into();
        ensure_name(&name)?;

        let event = CustomerCreated::new(id.clone(), name.clone());
        let customer = Self {
            id,
            name,
            address: None,
            active: false,
            reward_points: 0,
        };
        Ok((customer, event))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        ensure_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) -> CustomerAddressChanged {
        self.address = Some(address.clone());
        CustomerAddressChanged::new(self.id.clone(), self.name.clone(), address)
    }

    /// Activation requires an address on file.
    pub fn activate(&mut self) -> DomainResult<()> {
        if self.address.is_none() {
            return Err(DomainError::invariant(
                "address is mandatory to activate a customer",
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn ensure_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name is required"));
    }
    Ok(())
}
