//! Supplier entity.
//!
//! # Invariants
//! - A supplier row referenced by any order must not be deleted; the guard
//!   lives in the service/repository layers and is mirrored by the schema
//!   foreign key.

/// Store-assigned supplier identity.
pub type SupplierId = i64;

/// Persisted supplier record with contact channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    /// `None` until the store assigns an id on first save.
    pub id: Option<SupplierId>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Supplier {
    /// Creates an unpersisted supplier with no contact details.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: None,
            phone: None,
            address: None,
        }
    }
}
