//! # Error Types
//!
//! Domain-specific error types for crexy-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  crexy-core errors (this file)                                         │
//! │  ├── CoreError        - Unknown catalog references                     │
//! │  └── ValidationError  - Catalog invariant failures                     │
//! │                                                                         │
//! │  Storefront app errors (in app)                                        │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation layer     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Pricing, filtering and cart arithmetic are total. Removing a cart entry
//! that is not there, or filtering by a label no product carries, yields a
//! no-op or an empty result. Only references that arrive from outside the
//! core (a category id, a material id, a product id) can fail to resolve.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No category with this id exists in the catalog.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// No material with this id exists in the catalog.
    #[error("Material not found: {0}")]
    MaterialNotFound(String),

    /// No shop product with this id exists in the catalog.
    ///
    /// ## When This Occurs
    /// ```text
    /// Presentation layer sends { productId: 42 }
    ///      │
    ///      ▼
    /// Catalog lookup: no product 42
    ///      │
    ///      ▼
    /// ProductNotFound(42) ── cart untouched, screen unchanged
    /// ```
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog validation errors.
///
/// Raised while assembling a [`Catalog`](crate::catalog::Catalog); the
/// built-in catalog never produces one.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., two materials sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::MaterialNotFound("hemp".to_string());
        assert_eq!(err.to_string(), "Material not found: hemp");

        let err = CoreError::ProductNotFound(42);
        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "material id".to_string(),
        };
        assert_eq!(err.to_string(), "material id is required");

        let err = ValidationError::Duplicate {
            field: "category id".to_string(),
            value: "wallet".to_string(),
        };
        assert_eq!(err.to_string(), "category id 'wallet' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
