//! Article entity.
//!
//! # Invariants
//! - `code` is the unique business key; uniqueness is owned by the store's
//!   unique index, not re-checked in application code.
//! - `category_id` must reference an existing category row.

use crate::model::category::CategoryId;

/// Store-assigned article identity.
pub type ArticleId = i64;

/// Persisted article record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// `None` until the store assigns an id on first save.
    pub id: Option<ArticleId>,
    /// Unique business code used for exact-match lookups.
    pub code: String,
    pub label: String,
    /// Unit price in cents; never negative once validated.
    pub unit_price_cents: i64,
    /// Foreign key to the owning category.
    pub category_id: CategoryId,
}

impl Article {
    /// Creates an unpersisted article in the given category.
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        unit_price_cents: i64,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id: None,
            code: code.into(),
            label: label.into(),
            unit_price_cents,
            category_id,
        }
    }
}
