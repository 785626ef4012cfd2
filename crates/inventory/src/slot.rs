//! Persistence collaborator: a single slot holding the whole product list.

use stockroom_core::DomainResult;

use crate::product::Product;

/// A named slot holding the entire serialized product list.
///
/// `load` returns `None` when nothing has been saved yet. The store always
/// reads and writes the full list; implementations do not manage history,
/// versioning, or migration.
pub trait ProductSlot {
    fn load(&self) -> DomainResult<Option<Vec<Product>>>;
    fn save(&mut self, products: &[Product]) -> DomainResult<()>;
}

impl<S> ProductSlot for &mut S
where
    S: ProductSlot + ?Sized,
{
    fn load(&self) -> DomainResult<Option<Vec<Product>>> {
        (**self).load()
    }

    fn save(&mut self, products: &[Product]) -> DomainResult<()> {
        (**self).save(products)
    }
}

/// In-memory slot holding the serialized JSON text, like a browser
/// local-storage key. Intended for tests/dev.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlot {
    raw: Option<String>,
    saves: usize,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw JSON text.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            saves: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ProductSlot for InMemorySlot {
    fn load(&self) -> DomainResult<Option<Vec<Product>>> {
        match self.raw.as_deref() {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() || raw.trim() == "null" => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        }
    }

    fn save(&mut self, products: &[Product]) -> DomainResult<()> {
        self.raw = Some(serde_json::to_string(products)?);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductCode;
    use stockroom_core::{DomainError, ProductId};

    #[test]
    fn empty_slot_loads_none() {
        assert_eq!(InMemorySlot::new().load().unwrap(), None);
        assert_eq!(InMemorySlot::from_raw("null").load().unwrap(), None);
        assert_eq!(InMemorySlot::from_raw("  ").load().unwrap(), None);
    }

    #[test]
    fn save_then_load_returns_same_list() {
        let products = vec![Product {
            id: ProductId::from_raw(1),
            name: "Bolt".into(),
            code: ProductCode::new("BOL-1000"),
            warehouse: 1,
            shop: 2,
        }];
        let mut slot = InMemorySlot::new();
        slot.save(&products).unwrap();
        assert_eq!(slot.load().unwrap(), Some(products));
        assert_eq!(slot.save_count(), 1);
        assert!(slot.raw().unwrap().starts_with('['));
    }

    #[test]
    fn loads_legacy_json_written_by_other_clients() {
        let slot = InMemorySlot::from_raw(
            r#"[{"id":1700000000000,"name":"Nut","code":"NUT-5555","warehouse":4,"shop":0}]"#,
        );
        let products = slot.load().unwrap().unwrap();
        assert_eq!(products[0].name, "Nut");
        assert_eq!(products[0].id, ProductId::from_raw(1_700_000_000_000));
    }

    #[test]
    fn corrupt_json_is_a_storage_error() {
        let slot = InMemorySlot::from_raw("{oops");
        assert!(matches!(slot.load(), Err(DomainError::Storage(_))));
    }
}
