//! Supplier wire shape and entity mapping.

use crate::model::supplier::{Supplier, SupplierId};
use serde::{Deserialize, Serialize};

/// Wire-facing supplier representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDto {
    /// Absent on create; filled with the store-assigned id on return.
    pub id: Option<SupplierId>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl SupplierDto {
    /// Maps a persisted entity to its wire shape.
    pub fn from_entity(entity: &Supplier) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            email: entity.email.clone(),
            phone: entity.phone.clone(),
            address: entity.address.clone(),
        }
    }

    /// Maps this wire shape to the persisted entity form.
    pub fn to_entity(&self) -> Supplier {
        Supplier {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }
}
