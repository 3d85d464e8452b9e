//! # Console Error Type
//!
//! Unified error type for menu operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Menu Loop                          │
//! │                                                                         │
//! │  handler(console, db)                                                  │
//! │       │                                                                 │
//! │       ├── ValidationError ──► AppError::Validation ─┐                  │
//! │       ├── missing id ───────► AppError::NotFound ───┼─► print, continue│
//! │       ├── DbError ──────────► AppError::Storage ────┘                  │
//! │       │                                                                 │
//! │       ├── stdin closed ─────► AppError::InputClosed ──► leave loop     │
//! │       └── io::Error ────────► AppError::Io ───────────► exit status 1  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventario_core::ValidationError;
use inventario_db::DbError;
use thiserror::Error;

/// Errors raised by a menu operation.
#[derive(Debug, Error)]
pub enum AppError {
    /// The operator typed something unusable. Nothing was written.
    #[error("Dato inválido: {0}")]
    Validation(#[from] ValidationError),

    /// No product has this id.
    #[error("No existe un producto con ID {id}")]
    NotFound { id: i64 },

    /// The database rejected or failed the statement.
    #[error("Error de base de datos: {0}")]
    Storage(#[from] DbError),

    /// Reading from or writing to the terminal failed.
    #[error("Error de entrada/salida: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended (Ctrl-D or closed pipe) while a prompt was waiting.
    #[error("Entrada finalizada")]
    InputClosed,
}

impl AppError {
    /// Whether the menu loop can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::NotFound { .. } | AppError::Storage(_)
        )
    }
}

/// Result type for menu operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AppError::from(ValidationError::NotAnInteger {
            field: "cantidad".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Dato inválido: el campo cantidad debe ser un número entero"
        );

        let err = AppError::NotFound { id: 3 };
        assert_eq!(err.to_string(), "No existe un producto con ID 3");

        let err = AppError::from(DbError::QueryFailed("disk I/O error".to_string()));
        assert_eq!(
            err.to_string(),
            "Error de base de datos: falló la consulta: disk I/O error"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(AppError::NotFound { id: 1 }.is_recoverable());
        assert!(AppError::from(DbError::PoolExhausted).is_recoverable());
        assert!(!AppError::InputClosed.is_recoverable());
        assert!(!AppError::from(std::io::Error::other("broken pipe")).is_recoverable());
    }
}
