use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Event, ProductId};

use crate::product::Location;

/// Event: ProductCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub product_id: ProductId,
    pub name: String,
    pub location: Location,
    pub quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockAdded (upsert merged into an existing product).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdded {
    pub product_id: ProductId,
    pub name: String,
    pub location: Location,
    pub quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityAdjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityAdjusted {
    pub product_id: ProductId,
    pub name: String,
    pub location: Location,
    pub delta: i64,
    pub new_quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockTransferred (always one unit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockTransferred {
    pub product_id: ProductId,
    pub name: String,
    pub from: Location,
    pub to: Location,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductEdited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEdited {
    pub product_id: ProductId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRemoved {
    pub product_id: ProductId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ProductCreated(ProductCreated),
    StockAdded(StockAdded),
    QuantityAdjusted(QuantityAdjusted),
    StockTransferred(StockTransferred),
    ProductEdited(ProductEdited),
    ProductRemoved(ProductRemoved),
}

impl InventoryEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            InventoryEvent::ProductCreated(e) => e.product_id,
            InventoryEvent::StockAdded(e) => e.product_id,
            InventoryEvent::QuantityAdjusted(e) => e.product_id,
            InventoryEvent::StockTransferred(e) => e.product_id,
            InventoryEvent::ProductEdited(e) => e.product_id,
            InventoryEvent::ProductRemoved(e) => e.product_id,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ProductCreated(_) => "inventory.product.created",
            InventoryEvent::StockAdded(_) => "inventory.product.stock_added",
            InventoryEvent::QuantityAdjusted(_) => "inventory.product.quantity_adjusted",
            InventoryEvent::StockTransferred(_) => "inventory.product.stock_transferred",
            InventoryEvent::ProductEdited(_) => "inventory.product.edited",
            InventoryEvent::ProductRemoved(_) => "inventory.product.removed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ProductCreated(e) => e.occurred_at,
            InventoryEvent::StockAdded(e) => e.occurred_at,
            InventoryEvent::QuantityAdjusted(e) => e.occurred_at,
            InventoryEvent::StockTransferred(e) => e.occurred_at,
            InventoryEvent::ProductEdited(e) => e.occurred_at,
            InventoryEvent::ProductRemoved(e) => e.occurred_at,
        }
    }

    fn message(&self) -> String {
        match self {
            InventoryEvent::ProductCreated(e) => format!("Added {} successfully!", e.name),
            InventoryEvent::StockAdded(e) => {
                format!("Updated {} quantity in {}!", e.name, e.location)
            }
            InventoryEvent::QuantityAdjusted(e) => {
                let action = if e.delta > 0 { "increased" } else { "decreased" };
                format!("{} {action} in {}!", e.name, e.location)
            }
            InventoryEvent::StockTransferred(e) => {
                format!("Transferred 1 {} from {} to {}!", e.name, e.from, e.to)
            }
            InventoryEvent::ProductEdited(e) => format!("Updated {} successfully!", e.name),
            InventoryEvent::ProductRemoved(e) => format!("Deleted {}!", e.name),
        }
    }
}
