//! # Domain Types
//!
//! The single inventory entity and the values used to create, change, and
//! find it.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   NewProduct    │   │     Product     │   │  ProductPatch   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  (no id yet)    │──►│  id (storage)   │◄──│  Option per     │       │
//! │  │  name           │   │  name           │   │  mutable field  │       │
//! │  │  quantity       │   │  quantity       │   │  None = keep    │       │
//! │  │  price          │   │  price          │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │        insert              stored row            update                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `id` is assigned by SQLite on insert and never changes
//! - `name` is never empty, `quantity >= 0`, `price >= 0.0`
//!
//! The validation helpers enforce these before a value reaches storage.

// =============================================================================
// Product
// =============================================================================

/// A stored inventory record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Row id assigned by storage (monotonic, never reused).
    pub id: i64,

    /// Display name. Required.
    pub name: String,

    /// Free-text description.
    pub description: Option<String>,

    /// Units in stock.
    pub quantity: i64,

    /// Unit price.
    pub price: f64,

    /// Free-text category used for grouping and search.
    pub category: Option<String>,
}

// =============================================================================
// New Product
// =============================================================================

/// A validated product that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
    pub category: Option<String>,
}

// =============================================================================
// Product Patch
// =============================================================================

/// New values for an existing product.
///
/// Every field is optional: `None` keeps whatever is currently stored.
/// The console fills this from blank/non-blank answers, so a blank answer
/// can never clear a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl ProductPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.category.is_none()
    }

    /// Merges the patch over `current`, keeping `current.id`.
    ///
    /// ## Example
    /// ```rust
    /// use inventario_core::{Product, ProductPatch};
    ///
    /// let current = Product {
    ///     id: 1,
    ///     name: "Widget".to_string(),
    ///     description: None,
    ///     quantity: 5,
    ///     price: 9.99,
    ///     category: Some("Tools".to_string()),
    /// };
    /// let patch = ProductPatch { price: Some(12.5), ..Default::default() };
    ///
    /// let updated = patch.apply(&current);
    /// assert_eq!(updated.quantity, 5);
    /// assert_eq!(updated.price, 12.5);
    /// ```
    pub fn apply(self, current: &Product) -> Product {
        Product {
            id: current.id,
            name: self.name.unwrap_or_else(|| current.name.clone()),
            description: self.description.or_else(|| current.description.clone()),
            quantity: self.quantity.unwrap_or(current.quantity),
            price: self.price.unwrap_or(current.price),
            category: self.category.or_else(|| current.category.clone()),
        }
    }
}

// =============================================================================
// Product Filter
// =============================================================================

/// Substring lookups supported by the repository.
///
/// Matching is case-sensitive and literal. An empty needle matches every
/// product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    /// `name` contains the needle.
    NameContains(String),
    /// `category` contains the needle (a missing category counts as "").
    CategoryContains(String),
}

impl ProductFilter {
    /// The substring being searched for.
    pub fn needle(&self) -> &str {
        match self {
            ProductFilter::NameContains(needle) | ProductFilter::CategoryContains(needle) => needle,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
