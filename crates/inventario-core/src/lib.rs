//! # inventario-core: Pure Domain Logic for Inventario
//!
//! Domain types and input validation for the inventory console. Nothing in
//! this crate touches the database or the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventario Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (menu loop)                         │   │
//! │  │    prompt ──► validate ──► repository call ──► print table      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ inventario-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌───────────┐                │   │
//! │  │   │   types   │  │ validation  │  │   error   │                │   │
//! │  │   │  Product  │  │ parse_*     │  │ Validation│                │   │
//! │  │   │  Patch    │  │ *_text      │  │  Error    │                │   │
//! │  │   └───────────┘  └─────────────┘  └───────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                inventario-db (Database Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, NewProduct, ProductPatch, ProductFilter
//! - [`validation`] - Parsing operator input into typed fields
//! - [`error`] - Validation error type
//!
//! ## Example Usage
//!
//! ```rust
//! use inventario_core::validation::{parse_integer, parse_price, required_text};
//! use inventario_core::NewProduct;
//!
//! let product = NewProduct {
//!     name: required_text("nombre", "Widget").unwrap(),
//!     description: None,
//!     quantity: parse_integer("cantidad", "5").unwrap(),
//!     price: parse_price("precio", "9.99").unwrap(),
//!     category: Some("Tools".to_string()),
//! };
//! assert_eq!(product.quantity, 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use types::*;
