//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
///
/// Integer ids derived from the creation timestamp (milliseconds), so they
/// sort in creation order and match the persisted JSON shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Derive a fresh id from `now`, strictly greater than `floor` if given.
    ///
    /// Two products created within the same millisecond still get distinct ids.
    /// Returns `None` when `floor` is already `i64::MAX`.
    pub fn next(now: DateTime<Utc>, floor: Option<ProductId>) -> Option<Self> {
        let candidate = now.timestamp_millis();
        match floor {
            Some(ProductId(max)) if candidate <= max => max.checked_add(1).map(Self),
            _ => Some(Self(candidate)),
        }
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_input(format!("ProductId: {e}")))?;
        Ok(Self(raw))
    }
}
