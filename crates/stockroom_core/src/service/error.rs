//! Typed service-layer failures with machine-readable codes.
//!
//! # Invariants
//! - Every failure carries one [`ErrorCode`] so callers can branch without
//!   parsing messages.
//! - Messages are user-facing English text.

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Machine-readable code attached to every service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SupplierNotValid,
    SupplierNotFound,
    SupplierAlreadyInUse,
    ArticleNotValid,
    ArticleNotFound,
    CategoryNotValid,
    CategoryNotFound,
    CategoryAlreadyInUse,
    SupplierOrderNotValid,
    SupplierOrderNotFound,
    MissingId,
}

impl ErrorCode {
    /// Stable wire representation of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SupplierNotValid => "SUPPLIER_NOT_VALID",
            Self::SupplierNotFound => "SUPPLIER_NOT_FOUND",
            Self::SupplierAlreadyInUse => "SUPPLIER_ALREADY_IN_USE",
            Self::ArticleNotValid => "ARTICLE_NOT_VALID",
            Self::ArticleNotFound => "ARTICLE_NOT_FOUND",
            Self::CategoryNotValid => "CATEGORY_NOT_VALID",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::CategoryAlreadyInUse => "CATEGORY_ALREADY_IN_USE",
            Self::SupplierOrderNotValid => "SUPPLIER_ORDER_NOT_VALID",
            Self::SupplierOrderNotFound => "SUPPLIER_ORDER_NOT_FOUND",
            Self::MissingId => "MISSING_ID",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure taxonomy of the service layer.
#[derive(Debug)]
pub enum ServiceError {
    /// Candidate failed structural validation; never persisted.
    InvalidEntity {
        code: ErrorCode,
        errors: Vec<String>,
    },
    /// Lookup by id or business code found nothing.
    NotFound { code: ErrorCode, message: String },
    /// Requested mutation violates a referential-integrity rule.
    InvalidOperation { code: ErrorCode, message: String },
    /// Required id or business code was not supplied.
    InvalidArgument { code: ErrorCode, message: String },
    /// Store failure, propagated unmodified.
    Repo(RepoError),
}

impl ServiceError {
    /// Returns the machine-readable code, when the failure carries one.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::InvalidEntity { code, .. }
            | Self::NotFound { code, .. }
            | Self::InvalidOperation { code, .. }
            | Self::InvalidArgument { code, .. } => Some(*code),
            Self::Repo(_) => None,
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEntity { code, errors } => {
                write!(f, "[{code}] entity is not valid: {}", errors.join("; "))
            }
            Self::NotFound { code, message }
            | Self::InvalidOperation { code, message }
            | Self::InvalidArgument { code, message } => write!(f, "[{code}] {message}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Resolves an optional id, logging and raising `MISSING_ID` when absent.
///
/// Single policy for every operation that takes an id: absent ids are a
/// caller error, not a silent no-op.
pub(crate) fn require_id<I>(id: Option<I>, entity: &'static str) -> ServiceResult<I> {
    match id {
        Some(id) => Ok(id),
        None => {
            log::error!("event=require_id module=service status=rejected entity={entity} error_code=missing_id");
            Err(ServiceError::InvalidArgument {
                code: ErrorCode::MissingId,
                message: format!("{entity} id is required"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{require_id, ErrorCode, ServiceError};

    #[test]
    fn error_codes_have_stable_wire_names() {
        assert_eq!(ErrorCode::SupplierNotValid.as_str(), "SUPPLIER_NOT_VALID");
        assert_eq!(
            ErrorCode::SupplierAlreadyInUse.as_str(),
            "SUPPLIER_ALREADY_IN_USE"
        );
        assert_eq!(ErrorCode::MissingId.as_str(), "MISSING_ID");
    }

    #[test]
    fn require_id_passes_through_present_ids() {
        assert_eq!(require_id(Some(42_i64), "supplier").unwrap(), 42);
    }

    #[test]
    fn require_id_rejects_absent_ids() {
        let err = require_id::<i64>(None, "supplier").unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidArgument {
                code: ErrorCode::MissingId,
                ..
            }
        ));
    }
}
