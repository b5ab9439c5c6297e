//! Supplier order entity.

use crate::model::supplier::SupplierId;

/// Store-assigned order identity.
pub type SupplierOrderId = i64;

/// Persisted supplier order. Many orders may reference one supplier; the
/// back-reference is by id lookup only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierOrder {
    /// `None` until the store assigns an id on first save.
    pub id: Option<SupplierOrderId>,
    /// Unique business code.
    pub code: String,
    /// Foreign key to the supplier this order was placed with.
    pub supplier_id: SupplierId,
    /// Order timestamp in epoch milliseconds.
    pub ordered_at: i64,
}

impl SupplierOrder {
    /// Creates an unpersisted order for the given supplier.
    pub fn new(code: impl Into<String>, supplier_id: SupplierId, ordered_at: i64) -> Self {
        Self {
            id: None,
            code: code.into(),
            supplier_id,
            ordered_at,
        }
    }
}
