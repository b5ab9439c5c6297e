//! Article use-case service.
//!
//! # Responsibility
//! - Validate article candidates before any store interaction.
//! - Provide the unique-code and by-category read accessors.

use crate::dto::ArticleDto;
use crate::model::article::ArticleId;
use crate::model::category::CategoryId;
use crate::repo::{ArticleRepository, Repository};
use crate::service::error::{require_id, ErrorCode, ServiceError, ServiceResult};
use crate::validator::validate_article;
use log::error;

/// Article service facade over a repository implementation.
pub struct ArticleService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and upserts one article.
    ///
    /// Code uniqueness is owned by the store's unique index; a duplicate
    /// surfaces as a store error.
    pub fn save(&self, candidate: &ArticleDto) -> ServiceResult<ArticleDto> {
        let errors = validate_article(candidate);
        if !errors.is_empty() {
            error!(
                "event=article_save module=service status=rejected error_code=article_not_valid errors={}",
                errors.len()
            );
            return Err(ServiceError::InvalidEntity {
                code: ErrorCode::ArticleNotValid,
                errors,
            });
        }

        let saved = self.repo.save(&candidate.to_entity())?;
        Ok(ArticleDto::from_entity(&saved))
    }

    /// Looks up one article by id.
    pub fn find_by_id(&self, id: Option<ArticleId>) -> ServiceResult<ArticleDto> {
        let id = require_id(id, "article")?;
        match self.repo.find_by_id(id)? {
            Some(entity) => Ok(ArticleDto::from_entity(&entity)),
            None => Err(ServiceError::NotFound {
                code: ErrorCode::ArticleNotFound,
                message: format!("no article with id {id} was found"),
            }),
        }
    }

    /// Exact match on the unique business code.
    pub fn find_by_code(&self, code: Option<&str>) -> ServiceResult<ArticleDto> {
        let code = match code.map(str::trim).filter(|value| !value.is_empty()) {
            Some(code) => code,
            None => {
                error!("event=article_find_by_code module=service status=rejected error_code=missing_id");
                return Err(ServiceError::InvalidArgument {
                    code: ErrorCode::MissingId,
                    message: "article code is required".to_string(),
                });
            }
        };

        match self.repo.find_by_code(code)? {
            Some(entity) => Ok(ArticleDto::from_entity(&entity)),
            None => Err(ServiceError::NotFound {
                code: ErrorCode::ArticleNotFound,
                message: format!("no article with code `{code}` was found"),
            }),
        }
    }

    /// Returns all articles in insertion order.
    pub fn find_all(&self) -> ServiceResult<Vec<ArticleDto>> {
        let articles = self.repo.find_all()?;
        Ok(articles.iter().map(ArticleDto::from_entity).collect())
    }

    /// Returns all articles of one category in insertion order.
    pub fn find_all_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> ServiceResult<Vec<ArticleDto>> {
        let articles = self.repo.find_all_by_category_id(category_id)?;
        Ok(articles.iter().map(ArticleDto::from_entity).collect())
    }

    /// Deletes one article by id. Ungated: nothing references articles in
    /// this model.
    pub fn delete(&self, id: Option<ArticleId>) -> ServiceResult<()> {
        let id = require_id(id, "article")?;
        self.repo.delete_by_id(id)?;
        Ok(())
    }
}
