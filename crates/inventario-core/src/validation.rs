//! # Validation Module
//!
//! Turns raw console input into typed product fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt                                               │
//! │  └── Raw line, trailing newline stripped                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trim surrounding whitespace                                       │
//! │  ├── Digits-only integers, non-negative decimals                       │
//! │  └── Required vs optional text                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! │                                                                         │
//! │  The first failing field aborts the whole operation: nothing is        │
//! │  written unless every field passed.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inventario_core::validation::{parse_integer, parse_price};
//!
//! assert_eq!(parse_integer("cantidad", "5").unwrap(), 5);
//! assert!(parse_price("precio", "-1").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a non-negative integer field.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be one or more ASCII digits, nothing else (no sign, no decimals)
/// - Must fit in an `i64`
///
/// ## Example
/// ```rust
/// use inventario_core::validation::parse_integer;
///
/// assert_eq!(parse_integer("cantidad", " 12 ").unwrap(), 12);
/// assert!(parse_integer("cantidad", "-3").is_err());
/// assert!(parse_integer("cantidad", "abc").is_err());
/// ```
pub fn parse_integer(field: &str, input: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotAnInteger {
            field: field.to_string(),
        });
    }

    // Only overflow can fail here: the digits check already passed.
    input.parse::<i64>().map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX,
    })
}

/// Parses a non-negative decimal field (prices).
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must parse as a finite decimal number (`NaN` and `inf` are rejected)
/// - Must be `>= 0`
///
/// ## Example
/// ```rust
/// use inventario_core::validation::parse_price;
///
/// assert_eq!(parse_price("precio", "12.50").unwrap(), 12.5);
/// assert!(parse_price("precio", "0").is_ok());
/// assert!(parse_price("precio", "-0.01").is_err());
/// ```
pub fn parse_price(field: &str, input: &str) -> ValidationResult<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field: field.to_string(),
        })?;

    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    // Normalise -0.0 so it is stored and printed as 0.
    Ok(value.abs())
}

/// Like [`parse_integer`], but a blank answer means "no new value".
pub fn optional_integer(field: &str, input: &str) -> ValidationResult<Option<i64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_integer(field, input).map(Some)
}

/// Like [`parse_price`], but a blank answer means "no new value".
pub fn optional_price(field: &str, input: &str) -> ValidationResult<Option<f64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_price(field, input).map(Some)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field and returns it trimmed.
///
/// ## Example
/// ```rust
/// use inventario_core::validation::required_text;
///
/// assert_eq!(required_text("nombre", "  Widget ").unwrap(), "Widget");
/// assert!(required_text("nombre", "   ").is_err());
/// ```
pub fn required_text(field: &str, input: &str) -> ValidationResult<String> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(input.to_string())
}

/// Trims an optional text field. Empty input means "no value".
pub fn optional_text(input: &str) -> Option<String> {
    let input = input.trim();
    (!input.is_empty()).then(|| input.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
