//! Supplier order wire shape and entity mapping.

use crate::model::supplier::SupplierId;
use crate::model::supplier_order::{SupplierOrder, SupplierOrderId};
use serde::{Deserialize, Serialize};

/// Wire-facing supplier order representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierOrderDto {
    /// Absent on create; filled with the store-assigned id on return.
    pub id: Option<SupplierOrderId>,
    pub code: String,
    pub supplier_id: SupplierId,
    /// Order timestamp in epoch milliseconds.
    pub ordered_at: i64,
}

impl SupplierOrderDto {
    /// Maps a persisted entity to its wire shape.
    pub fn from_entity(entity: &SupplierOrder) -> Self {
        Self {
            id: entity.id,
            code: entity.code.clone(),
            supplier_id: entity.supplier_id,
            ordered_at: entity.ordered_at,
        }
    }

    /// Maps this wire shape to the persisted entity form.
    pub fn to_entity(&self) -> SupplierOrder {
        SupplierOrder {
            id: self.id,
            code: self.code.clone(),
            supplier_id: self.supplier_id,
            ordered_at: self.ordered_at,
        }
    }
}
