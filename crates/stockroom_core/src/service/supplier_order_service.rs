//! Supplier order use-case service.
//!
//! # Responsibility
//! - Validate order candidates and verify the referenced supplier exists
//!   before persisting.
//!
//! # Invariants
//! - An order is never saved against a supplier id with no supplier row.

use crate::dto::SupplierOrderDto;
use crate::model::supplier::SupplierId;
use crate::model::supplier_order::SupplierOrderId;
use crate::repo::{Repository, SupplierOrderRepository, SupplierRepository};
use crate::service::error::{require_id, ErrorCode, ServiceError, ServiceResult};
use crate::validator::validate_supplier_order;
use log::error;

/// Supplier order service facade over order and supplier repositories.
pub struct SupplierOrderService<O: SupplierOrderRepository, S: SupplierRepository> {
    orders: O,
    suppliers: S,
}

impl<O: SupplierOrderRepository, S: SupplierRepository> SupplierOrderService<O, S> {
    /// Creates a service using the provided repository implementations.
    pub fn new(orders: O, suppliers: S) -> Self {
        Self { orders, suppliers }
    }

    /// Validates and upserts one order.
    ///
    /// Fails with `SUPPLIER_NOT_FOUND` when the referenced supplier does
    /// not exist.
    pub fn save(&self, candidate: &SupplierOrderDto) -> ServiceResult<SupplierOrderDto> {
        let errors = validate_supplier_order(candidate);
        if !errors.is_empty() {
            error!(
                "event=supplier_order_save module=service status=rejected error_code=supplier_order_not_valid errors={}",
                errors.len()
            );
            return Err(ServiceError::InvalidEntity {
                code: ErrorCode::SupplierOrderNotValid,
                errors,
            });
        }

        if self.suppliers.find_by_id(candidate.supplier_id)?.is_none() {
            error!(
                "event=supplier_order_save module=service status=rejected error_code=supplier_not_found supplier_id={}",
                candidate.supplier_id
            );
            return Err(ServiceError::NotFound {
                code: ErrorCode::SupplierNotFound,
                message: format!(
                    "no supplier with id {} was found for this order",
                    candidate.supplier_id
                ),
            });
        }

        let saved = self.orders.save(&candidate.to_entity())?;
        Ok(SupplierOrderDto::from_entity(&saved))
    }

    /// Looks up one order by id.
    pub fn find_by_id(&self, id: Option<SupplierOrderId>) -> ServiceResult<SupplierOrderDto> {
        let id = require_id(id, "supplier order")?;
        match self.orders.find_by_id(id)? {
            Some(entity) => Ok(SupplierOrderDto::from_entity(&entity)),
            None => Err(ServiceError::NotFound {
                code: ErrorCode::SupplierOrderNotFound,
                message: format!("no supplier order with id {id} was found"),
            }),
        }
    }

    /// Returns all orders in insertion order.
    pub fn find_all(&self) -> ServiceResult<Vec<SupplierOrderDto>> {
        let orders = self.orders.find_all()?;
        Ok(orders.iter().map(SupplierOrderDto::from_entity).collect())
    }

    /// Returns all orders referencing one supplier, in insertion order.
    pub fn find_all_by_supplier_id(
        &self,
        supplier_id: SupplierId,
    ) -> ServiceResult<Vec<SupplierOrderDto>> {
        let orders = self.orders.find_all_by_supplier_id(supplier_id)?;
        Ok(orders.iter().map(SupplierOrderDto::from_entity).collect())
    }

    /// Deletes one order by id.
    pub fn delete(&self, id: Option<SupplierOrderId>) -> ServiceResult<()> {
        let id = require_id(id, "supplier order")?;
        self.orders.delete_by_id(id)?;
        Ok(())
    }
}
