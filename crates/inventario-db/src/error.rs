//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError::Storage (console) ← Printed, operation aborted              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Database operation errors.
///
/// These errors wrap sqlx errors and keep the underlying SQLite message so
/// the operator can see what went wrong. The surrounding text is Spanish
/// because it is printed inside the console's own messages.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - An UPDATE matched zero rows
    #[error("{entity} no encontrado: {id}")]
    NotFound { entity: String, id: String },

    /// A table constraint rejected the statement.
    ///
    /// ## When This Occurs
    /// - NOT NULL column written with NULL
    /// - Any CHECK or UNIQUE constraint added to the schema later
    #[error("restricción violada: {0}")]
    ConstraintViolation(String),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Path points to a directory or a non-SQLite file
    #[error("no se pudo conectar: {0}")]
    ConnectionFailed(String),

    /// Schema migration failed.
    #[error("falló la migración: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("falló la consulta: {0}")]
    QueryFailed(String),

    /// Pool exhausted (the single connection is busy or timed out).
    #[error("no hay conexiones disponibles")]
    PoolExhausted,

    /// Internal database error.
    #[error("error interno de la base de datos: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → ConstraintViolation or QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::not_found("Registro", "desconocido"),

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports every constraint kind as "<KIND> constraint failed: ..."
                if msg.contains("constraint failed") {
                    DbError::ConstraintViolation(msg.to_string())
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("el pool está cerrado".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
