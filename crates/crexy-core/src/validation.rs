//! # Validation Module
//!
//! Checks the invariants every catalog record must satisfy.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Invariants                                 │
//! │                                                                         │
//! │  Catalog::new(materials, categories, products)                          │
//! │  ├── every id non-empty          validate_identifier                   │
//! │  ├── every id unique per kind    validate_unique                       │
//! │  └── every price >= 0            validate_price                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Pricing and cart math can then assume non-negative inputs              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Personalisation initials are NOT validated: any characters are
//! accepted and only the length is normalised (see
//! [`normalize_initials`](crate::pricing::normalize_initials)).

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a string identifier.
///
/// ## Example
/// ```rust
/// use crexy_core::validation::validate_identifier;
///
/// assert!(validate_identifier("material id", "apple").is_ok());
/// assert!(validate_identifier("material id", "  ").is_err());
/// ```
pub fn validate_identifier(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (e.g. a material with no surcharge)
///
/// ## Example
/// ```rust
/// use crexy_core::money::Money;
/// use crexy_core::validation::validate_price;
///
/// assert!(validate_price("base price", Money::from_major(45)).is_ok());
/// assert!(validate_price("base price", Money::zero()).is_ok());
/// assert!(validate_price("base price", Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates that no key appears twice.
///
/// Reports the first repeated key.
pub fn validate_unique<K, I>(field: &str, keys: I) -> ValidationResult<()>
where
    K: Eq + Hash + Display,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if seen.contains(&key) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: key.to_string(),
            });
        }
        seen.insert(key);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
