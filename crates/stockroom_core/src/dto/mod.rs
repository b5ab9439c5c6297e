//! Wire-facing data transfer objects.
//!
//! # Responsibility
//! - Define the serde-serializable shapes exposed to callers of the service
//!   layer.
//! - Provide pure, explicit mapping in both directions (`from_entity` /
//!   `to_entity`); no shared base type, no hidden conversion.
//!
//! # Invariants
//! - `to_entity` followed by `from_entity` is the identity on all business
//!   fields.
//! - Mapping never touches the store and never fails.

pub mod article;
pub mod category;
pub mod supplier;
pub mod supplier_order;

pub use article::ArticleDto;
pub use category::CategoryDto;
pub use supplier::SupplierDto;
pub use supplier_order::SupplierOrderDto;
