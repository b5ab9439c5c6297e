//! Core domain logic for the stockroom inventory backend.
//! This crate is the single source of truth for validation and
//! referential-integrity rules.

pub mod db;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validator;

pub use dto::{ArticleDto, CategoryDto, SupplierDto, SupplierOrderDto};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::category::{Category, CategoryId};
pub use model::supplier::{Supplier, SupplierId};
pub use model::supplier_order::{SupplierOrder, SupplierOrderId};
pub use repo::{
    ArticleRepository, CategoryRepository, RepoError, RepoResult, Repository,
    SqliteArticleRepository, SqliteCategoryRepository, SqliteSupplierOrderRepository,
    SqliteSupplierRepository, SupplierOrderRepository, SupplierRepository,
};
pub use service::{
    ArticleService, CategoryService, ErrorCode, ServiceError, ServiceResult, SupplierOrderService,
    SupplierService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
