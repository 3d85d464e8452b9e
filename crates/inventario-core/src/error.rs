//! # Error Types
//!
//! Domain-specific error types for inventario-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventario-core errors (this file)                                    │
//! │  └── ValidationError  - Operator input rejected before any SQL runs    │
//! │                                                                         │
//! │  inventario-db errors (separate crate)                                 │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── AppError         - What the menu loop reports to the operator     │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │        DbError ─────────┴──► AppError ──► printed, menu continues      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Messages
//! The `Display` text of every variant is shown verbatim on the console,
//! so it is written in the same language as the menu labels.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while parsing what the operator typed. The operation that asked
/// for the value aborts before touching the database.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or only whitespace.
    #[error("el campo {field} es obligatorio")]
    Required { field: String },

    /// Field must contain only decimal digits.
    #[error("el campo {field} debe ser un número entero")]
    NotAnInteger { field: String },

    /// Field must be a decimal number.
    #[error("el campo {field} debe ser un número")]
    NotANumber { field: String },

    /// Numeric value below zero.
    #[error("el campo {field} no puede ser negativo")]
    Negative { field: String },

    /// Digits only, but too large to store.
    #[error("el campo {field} debe estar entre {min} y {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Menu selection that is not one of the listed keys.
    #[error("opción inválida: '{input}'")]
    InvalidOption { input: String },

    /// A line that is not valid UTF-8 (e.g. typed on a Latin-1 terminal).
    #[error("el texto ingresado no es UTF-8 válido")]
    InvalidText,
}

impl ValidationError {
    /// Returns the name of the field that failed, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Required { field }
            | ValidationError::NotAnInteger { field }
            | ValidationError::NotANumber { field }
            | ValidationError::Negative { field }
            | ValidationError::OutOfRange { field, .. } => Some(field),
            ValidationError::InvalidOption { .. } | ValidationError::InvalidText => None,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
