//! Supplier use-case service.
//!
//! # Responsibility
//! - Validate supplier candidates before any store interaction.
//! - Guard deletion behind the order back-reference check.
//!
//! # Invariants
//! - A candidate with validation errors is logged and rejected without
//!   touching the store.
//! - A supplier referenced by at least one order is never deleted.

use crate::dto::SupplierDto;
use crate::model::supplier::SupplierId;
use crate::repo::{Repository, SupplierDeleteOutcome, SupplierRepository};
use crate::service::error::{require_id, ErrorCode, ServiceError, ServiceResult};
use crate::validator::validate_supplier;
use log::error;

/// Supplier service facade over a repository implementation.
pub struct SupplierService<R: SupplierRepository> {
    repo: R,
}

impl<R: SupplierRepository> SupplierService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and upserts one supplier.
    ///
    /// The returned DTO reflects the store-assigned identity.
    pub fn save(&self, candidate: &SupplierDto) -> ServiceResult<SupplierDto> {
        let errors = validate_supplier(candidate);
        if !errors.is_empty() {
            error!(
                "event=supplier_save module=service status=rejected error_code=supplier_not_valid errors={}",
                errors.len()
            );
            return Err(ServiceError::InvalidEntity {
                code: ErrorCode::SupplierNotValid,
                errors,
            });
        }

        let saved = self.repo.save(&candidate.to_entity())?;
        Ok(SupplierDto::from_entity(&saved))
    }

    /// Looks up one supplier by id.
    pub fn find_by_id(&self, id: Option<SupplierId>) -> ServiceResult<SupplierDto> {
        let id = require_id(id, "supplier")?;
        match self.repo.find_by_id(id)? {
            Some(entity) => Ok(SupplierDto::from_entity(&entity)),
            None => Err(ServiceError::NotFound {
                code: ErrorCode::SupplierNotFound,
                message: format!("no supplier with id {id} was found"),
            }),
        }
    }

    /// Returns all suppliers in insertion order.
    pub fn find_all(&self) -> ServiceResult<Vec<SupplierDto>> {
        let suppliers = self.repo.find_all()?;
        Ok(suppliers.iter().map(SupplierDto::from_entity).collect())
    }

    /// Deletes one supplier unless an order still references it.
    ///
    /// The reference check and the delete run atomically in the store;
    /// deleting an id with no row is a silent no-op.
    pub fn delete(&self, id: Option<SupplierId>) -> ServiceResult<()> {
        let id = require_id(id, "supplier")?;
        match self.repo.delete_if_unreferenced(id)? {
            SupplierDeleteOutcome::Deleted => Ok(()),
            SupplierDeleteOutcome::StillReferenced(count) => {
                error!(
                    "event=supplier_delete module=service status=rejected error_code=supplier_already_in_use supplier_id={id} references={count}"
                );
                Err(ServiceError::InvalidOperation {
                    code: ErrorCode::SupplierAlreadyInUse,
                    message: format!(
                        "supplier {id} cannot be deleted: {count} order(s) still reference it"
                    ),
                })
            }
        }
    }
}
