//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, referential-integrity checks, and repository
//!   calls into use-case level APIs.
//! - Translate absence/conflict into the typed errors of [`error`].
//!
//! # Invariants
//! - Services never persist a candidate that failed validation.
//! - Service errors are terminal at this layer: raised to the caller,
//!   never retried or downgraded.

pub mod article_service;
pub mod category_service;
pub mod error;
pub mod supplier_order_service;
pub mod supplier_service;

pub use article_service::ArticleService;
pub use category_service::CategoryService;
pub use error::{ErrorCode, ServiceError, ServiceResult};
pub use supplier_order_service::SupplierOrderService;
pub use supplier_service::SupplierService;
