//! Article wire shape and entity mapping.

use crate::model::article::{Article, ArticleId};
use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};

/// Wire-facing article representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    /// Absent on create; filled with the store-assigned id on return.
    pub id: Option<ArticleId>,
    /// Unique business code.
    pub code: String,
    pub label: String,
    pub unit_price_cents: i64,
    pub category_id: CategoryId,
}

impl ArticleDto {
    /// Maps a persisted entity to its wire shape.
    pub fn from_entity(entity: &Article) -> Self {
        Self {
            id: entity.id,
            code: entity.code.clone(),
            label: entity.label.clone(),
            unit_price_cents: entity.unit_price_cents,
            category_id: entity.category_id,
        }
    }

    /// Maps this wire shape to the persisted entity form.
    pub fn to_entity(&self) -> Article {
        Article {
            id: self.id,
            code: self.code.clone(),
            label: self.label.clone(),
            unit_price_cents: self.unit_price_cents,
            category_id: self.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ArticleDto;

    #[test]
    fn entity_mapping_roundtrip_preserves_business_fields() {
        let dto = ArticleDto {
            id: None,
            code: "ART-0042".to_string(),
            label: "M8 hex bolt".to_string(),
            unit_price_cents: 35,
            category_id: 2,
        };

        let roundtripped = ArticleDto::from_entity(&dto.to_entity());
        assert_eq!(roundtripped, dto);
    }
}
