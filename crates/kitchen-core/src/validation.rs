//! # Validation Module
//!
//! Product input rules, applied before anything is written.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create(draft)                       change_price(id, draft)            │
//! │  ─────────────                       ───────────────────────            │
//! │  1. price present                    1. price present                   │
//! │  2. price >= 0                       2. price >= 0                      │
//! │  3. name present, not blank          3. product exists (service)        │
//! │  4. name not profane (service)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules 1-3 of creation and 1-2 of price change are pure and live here. The
//! profanity and existence checks need collaborators and run in the service.

use crate::error::ValidationError;
use crate::money::Money;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a candidate price: present and not negative. Zero is allowed.
///
/// ```rust
/// use kitchen_core::money::Money;
/// use kitchen_core::validation::validate_price;
///
/// assert!(validate_price(Some(Money::from_cents(1099))).is_ok());
/// assert!(validate_price(Some(Money::zero())).is_ok());
/// assert!(validate_price(Some(Money::from_cents(-1))).is_err());
/// assert!(validate_price(None).is_err());
/// ```
pub fn validate_price(price: Option<Money>) -> ValidationResult<Money> {
    let price = price.ok_or_else(|| ValidationError::Required {
        field: "price".to_string(),
    })?;

    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

/// Validates a product name: present and not blank.
///
/// Returns the name as given; whitespace is not trimmed away from stored
/// names.
pub fn validate_product_name(name: Option<&str>) -> ValidationResult<&str> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ValidationError::Required {
            field: "name".to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price() {
        assert_eq!(
            validate_price(Some(Money::from_cents(1600))),
            Ok(Money::from_cents(1600))
        );
        assert_eq!(validate_price(Some(Money::zero())), Ok(Money::zero()));

        assert_eq!(
            validate_price(None),
            Err(ValidationError::Required {
                field: "price".to_string()
            })
        );
        assert_eq!(
            validate_price(Some(Money::from_cents(-100))),
            Err(ValidationError::Negative {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name(Some("Fried Chicken")), Ok("Fried Chicken"));

        assert!(validate_product_name(None).is_err());
        assert!(validate_product_name(Some("")).is_err());
        assert!(validate_product_name(Some("   ")).is_err());
    }
}
