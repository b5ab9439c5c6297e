//! Category wire shape and entity mapping.

use crate::model::category::{Category, CategoryId};
use serde::{Deserialize, Serialize};

/// Wire-facing category representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    /// Absent on create; filled with the store-assigned id on return.
    pub id: Option<CategoryId>,
    pub code: String,
    pub label: String,
}

impl CategoryDto {
    /// Maps a persisted entity to its wire shape.
    pub fn from_entity(entity: &Category) -> Self {
        Self {
            id: entity.id,
            code: entity.code.clone(),
            label: entity.label.clone(),
        }
    }

    /// Maps this wire shape to the persisted entity form.
    pub fn to_entity(&self) -> Category {
        Category {
            id: self.id,
            code: self.code.clone(),
            label: self.label.clone(),
        }
    }
}
