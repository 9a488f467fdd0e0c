use serde::{Deserialize, Serialize};

use ddd_core::{DomainError, DomainResult, Entity, EntityId};

use crate::ProductCreated;

/// Product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<EntityId>()?))
    }
}

/// Entity: Product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: f64,
}

impl Product {
    /// Create a product and the `ProductCreated` event announcing it.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> DomainResult<(Self, ProductCreated)> {
        let product = Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
        };
        ensure_name(&product.name)?;
        ensure_price(product.price)?;

        let event = ProductCreated::new(
            product.id.clone(),
            product.name.clone(),
            product.description.clone(),
            product.price,
        );
        Ok((product, event))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        ensure_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> DomainResult<()> {
        ensure_price(price)?;
        self.price = price;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

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

fn ensure_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation("price must be a non-negative amount"));
    }
    Ok(())
}
