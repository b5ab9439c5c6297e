//! Category entity.

/// Store-assigned category identity.
pub type CategoryId = i64;

/// Persisted category record. Articles reference it by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// `None` until the store assigns an id on first save.
    pub id: Option<CategoryId>,
    /// Unique business code.
    pub code: String,
    pub label: String,
}

impl Category {
    /// Creates an unpersisted category.
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: None,
            code: code.into(),
            label: label.into(),
        }
    }
}
