//! Field validation rules for item input.
//!
//! Mutations validate their input before anything is written; the same rules
//! apply at every entry point (HTTP surface, manager, tests).

use crate::error::{DomainError, DomainResult};

/// Validate an item name: non-empty after trimming.
///
/// The name itself is never normalized; it is an opaque key, not a display
/// string.
pub fn item_name(raw: &str) -> DomainResult<()> {
    if raw.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}

/// Validate a quantity: must be non-negative.
pub fn quantity(value: i64) -> DomainResult<i64> {
    if value < 0 {
        return Err(DomainError::validation("quantity cannot be negative"));
    }
    Ok(value)
}

/// Validate a price: must be finite and non-negative.
pub fn price(value: f64) -> DomainResult<f64> {
    if !value.is_finite() {
        return Err(DomainError::validation("price must be a finite number"));
    }
    if value < 0.0 {
        return Err(DomainError::validation("price cannot be negative"));
    }
    Ok(value)
}
