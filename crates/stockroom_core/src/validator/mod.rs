//! Structural validation for wire-level candidates.
//!
//! # Responsibility
//! - Map a candidate DTO to a list of user-facing error messages.
//! - Stay pure: no side effects, no I/O, no process-wide state.
//!
//! # Invariants
//! - An empty result means the candidate is structurally valid.
//! - A non-empty result means the candidate must be rejected before any
//!   store interaction.

use crate::dto::{ArticleDto, CategoryDto, SupplierDto, SupplierOrderDto};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Validates a supplier candidate.
///
/// Rules: non-blank name, at least one contact channel (email or phone),
/// and a well-formed email address when one is given.
pub fn validate_supplier(candidate: &SupplierDto) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(&candidate.name) {
        errors.push("supplier name is required".to_string());
    }

    let email = candidate.email.as_deref().filter(|value| !is_blank(value));
    let phone = candidate.phone.as_deref().filter(|value| !is_blank(value));
    if email.is_none() && phone.is_none() {
        errors.push("at least one contact (email or phone) is required".to_string());
    }

    if let Some(email) = email {
        if !EMAIL_RE.is_match(email) {
            errors.push(format!("email address `{email}` is not valid"));
        }
    }

    errors
}

/// Validates an article candidate.
pub fn validate_article(candidate: &ArticleDto) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(&candidate.code) {
        errors.push("article code is required".to_string());
    }
    if is_blank(&candidate.label) {
        errors.push("article label is required".to_string());
    }
    if candidate.unit_price_cents < 0 {
        errors.push("unit price must not be negative".to_string());
    }
    if candidate.category_id <= 0 {
        errors.push("article category is required".to_string());
    }

    errors
}

/// Validates a category candidate.
pub fn validate_category(candidate: &CategoryDto) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(&candidate.code) {
        errors.push("category code is required".to_string());
    }
    if is_blank(&candidate.label) {
        errors.push("category label is required".to_string());
    }

    errors
}

/// Validates a supplier order candidate.
///
/// Existence of the referenced supplier is an integrity check done by the
/// service against the supplier store, not a structural rule.
pub fn validate_supplier_order(candidate: &SupplierOrderDto) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(&candidate.code) {
        errors.push("order code is required".to_string());
    }
    if candidate.supplier_id <= 0 {
        errors.push("order supplier is required".to_string());
    }
    if candidate.ordered_at <= 0 {
        errors.push("order date is required".to_string());
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
