//! Category use-case service.
//!
//! # Invariants
//! - A category referenced by at least one article is never deleted.

use crate::dto::CategoryDto;
use crate::model::category::CategoryId;
use crate::repo::{CategoryDeleteOutcome, CategoryRepository, Repository};
use crate::service::error::{require_id, ErrorCode, ServiceError, ServiceResult};
use crate::validator::validate_category;
use log::error;

/// Category service facade over a repository implementation.
pub struct CategoryService<R: CategoryRepository> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and upserts one category.
    pub fn save(&self, candidate: &CategoryDto) -> ServiceResult<CategoryDto> {
        let errors = validate_category(candidate);
        if !errors.is_empty() {
            error!(
                "event=category_save module=service status=rejected error_code=category_not_valid errors={}",
                errors.len()
            );
            return Err(ServiceError::InvalidEntity {
                code: ErrorCode::CategoryNotValid,
                errors,
            });
        }

        let saved = self.repo.save(&candidate.to_entity())?;
        Ok(CategoryDto::from_entity(&saved))
    }

    /// Looks up one category by id.
    pub fn find_by_id(&self, id: Option<CategoryId>) -> ServiceResult<CategoryDto> {
        let id = require_id(id, "category")?;
        match self.repo.find_by_id(id)? {
            Some(entity) => Ok(CategoryDto::from_entity(&entity)),
            None => Err(ServiceError::NotFound {
                code: ErrorCode::CategoryNotFound,
                message: format!("no category with id {id} was found"),
            }),
        }
    }

    /// Returns all categories in insertion order.
    pub fn find_all(&self) -> ServiceResult<Vec<CategoryDto>> {
        let categories = self.repo.find_all()?;
        Ok(categories.iter().map(CategoryDto::from_entity).collect())
    }

    /// Deletes one category unless an article still references it.
    pub fn delete(&self, id: Option<CategoryId>) -> ServiceResult<()> {
        let id = require_id(id, "category")?;
        match self.repo.delete_if_unreferenced(id)? {
            CategoryDeleteOutcome::Deleted => Ok(()),
            CategoryDeleteOutcome::StillReferenced(count) => {
                error!(
                    "event=category_delete module=service status=rejected error_code=category_already_in_use category_id={id} references={count}"
                );
                Err(ServiceError::InvalidOperation {
                    code: ErrorCode::CategoryAlreadyInUse,
                    message: format!(
                        "category {id} cannot be deleted: {count} article(s) still reference it"
                    ),
                })
            }
        }
    }
}
