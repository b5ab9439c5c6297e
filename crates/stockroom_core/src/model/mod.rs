//! Persisted domain model for the inventory core.
//!
//! # Responsibility
//! - Define the entity shapes owned by the SQLite store.
//! - Keep persistence shapes separate from wire-facing DTOs (`crate::dto`).
//!
//! # Invariants
//! - Identities are store-assigned integers; `id = None` means "not yet
//!   persisted".
//! - Referential links (`Article -> Category`, `SupplierOrder -> Supplier`)
//!   are plain foreign-key ids, never embedded entities.

pub mod article;
pub mod category;
pub mod supplier;
pub mod supplier_order;
