//! # Menu Operations
//!
//! One async function per menu entry. Every handler receives the console and
//! the storage handle explicitly; none of them keeps state between calls.
//!
//! ## Handler Shape
//! ```rust,ignore
//! pub async fn list<R: BufRead, W: Write>(
//!     console: &mut Console<R, W>,
//!     db: &Database,
//! ) -> AppResult<()>
//! ```
//!
//! Prompts come first, then validation; the first rejected field returns
//! `AppError::Validation` before any statement runs.
//!
//! ## Available Handlers
//! - [`product`] - register, list, search, update, delete
//! - [`report`] - low-stock report

pub mod product;
pub mod report;
