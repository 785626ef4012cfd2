use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

/// One of the two fixed stock-holding sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Warehouse,
    Shop,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Warehouse => "warehouse",
            Location::Shop => "shop",
        }
    }

    /// The opposite site.
    pub fn other(&self) -> Location {
        match self {
            Location::Warehouse => Location::Shop,
            Location::Shop => Location::Warehouse,
        }
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warehouse" => Ok(Location::Warehouse),
            "shop" => Ok(Location::Shop),
            other => Err(DomainError::invalid_input(format!(
                "unknown location '{other}' (expected warehouse or shop)"
            ))),
        }
    }
}

/// Display code of a product, e.g. `BOL-4821`.
///
/// Opaque after creation; users may overwrite it through an edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A uniquely-named inventory item with independent quantities per location.
///
/// Field names and layout match the persisted JSON array element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub code: ProductCode,
    pub warehouse: u64,
    pub shop: u64,
}

impl Product {
    pub fn quantity(&self, location: Location) -> u64 {
        match location {
            Location::Warehouse => self.warehouse,
            Location::Shop => self.shop,
        }
    }

    pub fn quantity_mut(&mut self, location: Location) -> &mut u64 {
        match location {
            Location::Warehouse => &mut self.warehouse,
            Location::Shop => &mut self.shop,
        }
    }

    /// Total units across both locations.
    pub fn total(&self) -> u64 {
        self.warehouse.saturating_add(self.shop)
    }

    /// Case-insensitive name comparison (the natural merge key).
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Parse a user-supplied quantity: must be a positive integer.
pub fn parse_quantity(raw: &str) -> DomainResult<u64> {
    let quantity = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| DomainError::invalid_input(format!("quantity '{raw}' is not a valid number")))?;
    if quantity == 0 {
        return Err(DomainError::invalid_input("quantity must be greater than zero"));
    }
    Ok(quantity)
}

/// Parse a user-supplied non-negative stock level (used by edits).
pub fn parse_stock_level(raw: &str) -> DomainResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| DomainError::invalid_input(format!("stock level '{raw}' must be a non-negative integer")))
}

/// Parse a signed adjustment.
pub fn parse_delta(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::invalid_input(format!("delta '{raw}' is not a valid integer")))
}
