use chrono::Utc;
use serde::Serialize;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::code::{CodeGenerator, RandomCodeGenerator};
use crate::event::{
    InventoryEvent, ProductCreated, ProductEdited, ProductRemoved, QuantityAdjusted, StockAdded,
    StockTransferred,
};
use crate::product::{Location, Product, ProductCode};
use crate::slot::ProductSlot;

/// Whether an upsert created a product or merged into an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertKind {
    Created,
    Updated,
}

/// Result of `InventoryStore::upsert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsertOutcome {
    pub kind: UpsertKind,
    pub product: Product,
    pub event: InventoryEvent,
}

/// Result of a mutation on a single product: the product as committed (or as
/// it was just before removal) plus the event describing the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mutation {
    pub product: Product,
    pub event: InventoryEvent,
}

/// Full replacement values for `InventoryStore::edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEdit {
    pub name: String,
    pub code: ProductCode,
    pub warehouse: u64,
    pub shop: u64,
}

impl ProductEdit {
    /// Start from a product's current values.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            code: product.code.clone(),
            warehouse: product.warehouse,
            shop: product.shop,
        }
    }
}

/// Owns the authoritative product list and performs every mutation.
///
/// Each operation reloads the full list from the slot. Each successful
/// mutation writes the full list back exactly once; rejected operations never
/// write.
#[derive(Debug)]
pub struct InventoryStore<S, G = RandomCodeGenerator> {
    slot: S,
    codes: G,
    products: Vec<Product>,
}

impl<S: ProductSlot> InventoryStore<S, RandomCodeGenerator> {
    pub fn new(slot: S) -> Self {
        Self::with_code_generator(slot, RandomCodeGenerator::new())
    }
}

impl<S: ProductSlot, G: CodeGenerator> InventoryStore<S, G> {
    pub fn with_code_generator(slot: S, codes: G) -> Self {
        Self {
            slot,
            codes,
            products: Vec::new(),
        }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Products as of the last load.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Create a product, or add `quantity` to the existing product with the
    /// same case-insensitive name.
    pub fn upsert(
        &mut self,
        name: &str,
        location: Location,
        quantity: u64,
    ) -> DomainResult<UpsertOutcome> {
        self.reload()?;

        let name = name.trim();
        if name.is_empty() {
            return Err(reject(DomainError::invalid_input("product name cannot be empty")));
        }
        if quantity == 0 {
            return Err(reject(DomainError::invalid_input(
                "quantity must be greater than zero",
            )));
        }

        let mut next = self.products.clone();
        let occurred_at = Utc::now();

        let (kind, product, event) = match next.iter().position(|p| p.has_name(name)) {
            Some(idx) => {
                let existing = &mut next[idx];
                let merged = existing.quantity(location).checked_add(quantity).ok_or_else(|| {
                    reject(DomainError::invalid_input(format!(
                        "adding {quantity} to {location} of {} overflows",
                        existing.name
                    )))
                })?;
                *existing.quantity_mut(location) = merged;
                let event = InventoryEvent::StockAdded(StockAdded {
                    product_id: existing.id,
                    name: name.to_string(),
                    location,
                    quantity,
                    occurred_at,
                });
                (UpsertKind::Updated, existing.clone(), event)
            }
            None => {
                let floor = next.iter().map(|p| p.id()).max();
                let id = ProductId::next(occurred_at, floor).ok_or_else(|| {
                    reject(DomainError::invalid_input("no product id left above the current maximum"))
                })?;
                let mut product = Product {
                    id,
                    name: name.to_string(),
                    code: self.codes.generate(name),
                    warehouse: 0,
                    shop: 0,
                };
                *product.quantity_mut(location) = quantity;
                let event = InventoryEvent::ProductCreated(ProductCreated {
                    product_id: product.id,
                    name: product.name.clone(),
                    location,
                    quantity,
                    occurred_at,
                });
                next.push(product.clone());
                (UpsertKind::Created, product, event)
            }
        };

        self.commit(next)?;
        tracing::info!(product_id = %product.id, kind = ?kind, %location, quantity, "upserted product");
        Ok(UpsertOutcome {
            kind,
            product,
            event,
        })
    }

    /// Apply a signed delta to one location. Rejects results below zero.
    pub fn adjust(
        &mut self,
        id: ProductId,
        location: Location,
        delta: i64,
    ) -> DomainResult<Mutation> {
        self.reload()?;
        let idx = self.position(id)?;

        let mut next = self.products.clone();
        let product = &mut next[idx];
        let current = product.quantity(location);
        let new_quantity = i128::from(current) + i128::from(delta);
        if new_quantity < 0 {
            return Err(reject(DomainError::negative_quantity(format!(
                "{location} of {} is {current}, cannot apply {delta}",
                product.name
            ))));
        }
        let new_quantity = u64::try_from(new_quantity).map_err(|_| {
            reject(DomainError::invalid_input(format!(
                "adjusting {location} of {} by {delta} overflows",
                product.name
            )))
        })?;
        *product.quantity_mut(location) = new_quantity;

        let product = product.clone();
        let event = InventoryEvent::QuantityAdjusted(QuantityAdjusted {
            product_id: id,
            name: product.name.clone(),
            location,
            delta,
            new_quantity,
            occurred_at: Utc::now(),
        });

        self.commit(next)?;
        tracing::info!(product_id = %id, %location, delta, new_quantity, "adjusted quantity");
        Ok(Mutation { product, event })
    }

    /// Move exactly one unit from `from` to `to`.
    pub fn transfer(
        &mut self,
        id: ProductId,
        from: Location,
        to: Location,
    ) -> DomainResult<Mutation> {
        self.reload()?;
        if from == to {
            return Err(reject(DomainError::invalid_input(format!(
                "cannot transfer from {from} to itself"
            ))));
        }
        let idx = self.position(id)?;

        let mut next = self.products.clone();
        let product = &mut next[idx];
        if product.quantity(from) == 0 {
            return Err(reject(DomainError::insufficient_stock(format!(
                "no {} available in {from}",
                product.name
            ))));
        }
        let target = product.quantity(to).checked_add(1).ok_or_else(|| {
            reject(DomainError::invalid_input(format!(
                "{to} of {} is at its maximum",
                product.name
            )))
        })?;
        *product.quantity_mut(from) -= 1;
        *product.quantity_mut(to) = target;

        let product = product.clone();
        let event = InventoryEvent::StockTransferred(StockTransferred {
            product_id: id,
            name: product.name.clone(),
            from,
            to,
            occurred_at: Utc::now(),
        });

        self.commit(next)?;
        tracing::info!(
            product_id = %id,
            %from,
            %to,
            warehouse = product.warehouse,
            shop = product.shop,
            "transferred one unit"
        );
        Ok(Mutation { product, event })
    }

    /// Overwrite name, code and both quantities.
    ///
    /// The new name must be non-blank and must not collide (case-insensitively)
    /// with another product. Renaming to a different casing of the product's
    /// own name is allowed.
    pub fn edit(&mut self, id: ProductId, edit: ProductEdit) -> DomainResult<Mutation> {
        self.reload()?;
        let idx = self.position(id)?;

        let name = edit.name.trim();
        if name.is_empty() {
            return Err(reject(DomainError::invalid_input("product name cannot be empty")));
        }
        if let Some(other) = self.products.iter().find(|p| p.id != id && p.has_name(name)) {
            return Err(reject(DomainError::invalid_input(format!(
                "a product named '{}' already exists (id {})",
                other.name, other.id
            ))));
        }

        let mut next = self.products.clone();
        let product = &mut next[idx];
        product.name = name.to_string();
        product.code = edit.code;
        product.warehouse = edit.warehouse;
        product.shop = edit.shop;

        let product = product.clone();
        let event = InventoryEvent::ProductEdited(ProductEdited {
            product_id: id,
            name: product.name.clone(),
            occurred_at: Utc::now(),
        });

        self.commit(next)?;
        tracing::info!(product_id = %id, name = %product.name, "edited product");
        Ok(Mutation { product, event })
    }

    /// Delete a product. Unknown ids are `NotFound`, including a second remove.
    pub fn remove(&mut self, id: ProductId) -> DomainResult<Mutation> {
        self.reload()?;
        let idx = self.position(id)?;

        let mut next = self.products.clone();
        let product = next.remove(idx);
        let event = InventoryEvent::ProductRemoved(ProductRemoved {
            product_id: id,
            name: product.name.clone(),
            occurred_at: Utc::now(),
        });

        self.commit(next)?;
        tracing::info!(product_id = %id, "removed product");
        Ok(Mutation { product, event })
    }

    /// Products whose name contains `term`, case-insensitively, in stored order.
    pub fn search(&mut self, term: &str) -> DomainResult<Vec<Product>> {
        self.reload()?;
        Ok(filter_by_name(&self.products, term).into_iter().cloned().collect())
    }

    pub fn get(&mut self, id: ProductId) -> DomainResult<Product> {
        self.reload()?;
        let idx = self.position(id)?;
        Ok(self.products[idx].clone())
    }

    fn reload(&mut self) -> DomainResult<()> {
        self.products = self.slot.load()?.unwrap_or_default();
        tracing::debug!(count = self.products.len(), "loaded products");
        Ok(())
    }

    fn commit(&mut self, next: Vec<Product>) -> DomainResult<()> {
        self.slot.save(&next)?;
        tracing::debug!(count = next.len(), "saved products");
        self.products = next;
        Ok(())
    }

    fn position(&self, id: ProductId) -> DomainResult<usize> {
        self.products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| reject(DomainError::not_found(format!("product {id}"))))
    }
}

/// Case-insensitive substring filter over names. An empty term matches all.
pub fn filter_by_name<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect()
}

fn reject(err: DomainError) -> DomainError {
    tracing::warn!(error = %err, "rejected inventory operation");
    err
}
