//! # Repository Module
//!
//! Database repository implementations for Inventario.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Console handler                                                       │
//! │       │                                                                 │
//! │       │  db.products().low_stock(5)                                    │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── insert / get_by_id / list_all                                     │
//! │  ├── search / low_stock                                                │
//! │  └── update / delete                                                   │
//! │       │                                                                 │
//! │       │  One SQL statement per call                                     │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD, search, and stock report

pub mod product;
