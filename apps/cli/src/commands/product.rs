//! # Product Operations
//!
//! Register, list, search, update, and delete.
//!
//! ## Update Flow
//! ```text
//! ID del producto a actualizar: 1
//!      │
//!      ▼
//! get_by_id(1) ── None ──► AppError::NotFound (no prompts, no write)
//!      │
//!      ▼ Some(current)
//! show current row
//!      │
//!      ▼
//! prompt each field ── blank ──► keep current value
//!      │             ── value ──► validate or abort
//!      ▼
//! ProductPatch::apply(&current) ──► UPDATE (one statement)
//! ```

use std::io::{BufRead, Write};
use std::slice;

use inventario_core::validation::{
    optional_integer, optional_price, optional_text, parse_integer, parse_price, required_text,
};
use inventario_core::{NewProduct, Product, ProductFilter, ProductPatch};
use inventario_db::{Database, DbError};
use tracing::info;

use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::menu::SearchMode;
use crate::render::product_table;

/// Prompts for a new product and stores it.
pub async fn register<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> AppResult<()> {
    let name = required_text("nombre", &console.prompt("Nombre del producto: ")?)?;
    let description = optional_text(&console.prompt("Descripción: ")?);
    let quantity = parse_integer("cantidad", &console.prompt("Cantidad: ")?)?;
    let price = parse_price("precio", &console.prompt("Precio: ")?)?;
    let category = optional_text(&console.prompt("Categoría: ")?);

    let product = NewProduct {
        name,
        description,
        quantity,
        price,
        category,
    };

    let id = db.products().insert(&product).await?;
    info!(id, name = %product.name, "Product registered");

    console.say(format_args!(
        "\nProducto registrado correctamente con ID {id}.\n"
    ))
}

/// Prints every product, ordered by id.
pub async fn list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> AppResult<()> {
    let products = db.products().list_all().await?;

    if products.is_empty() {
        return console.say("\nNo hay productos registrados.\n");
    }

    console.say("\n--- Lista de productos ---")?;
    console.say(product_table(&products))
}

/// Looks products up by id, name substring, or category substring.
pub async fn search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> AppResult<()> {
    for mode in SearchMode::ALL {
        console.say(format_args!("  {}. {}", mode.key(), mode.label()))?;
    }
    let mode = SearchMode::parse(&console.prompt("Tipo de búsqueda: ")?)?;

    let filter = match mode {
        SearchMode::ById => {
            let id = parse_integer("ID", &console.prompt("ID del producto a buscar: ")?)?;
            return match db.products().get_by_id(id).await? {
                Some(product) => console.say(format_args!(
                    "\n{}",
                    product_table(slice::from_ref(&product))
                )),
                None => console.say(format_args!(
                    "\nNo se encontró un producto con ID {id}.\n"
                )),
            };
        }
        SearchMode::ByName => {
            ProductFilter::NameContains(console.prompt("Texto a buscar en el nombre: ")?)
        }
        SearchMode::ByCategory => {
            ProductFilter::CategoryContains(console.prompt("Texto a buscar en la categoría: ")?)
        }
    };

    let products = db.products().search(&filter).await?;
    if products.is_empty() {
        return console.say("\nNo se encontraron productos que coincidan.\n");
    }

    console.say(format_args!("\n--- {} coincidencia(s) ---", products.len()))?;
    console.say(product_table(&products))
}

/// Changes an existing product. Blank answers keep the stored value.
pub async fn update<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> AppResult<()> {
    let id = parse_integer("ID", &console.prompt("ID del producto a actualizar: ")?)?;

    let current = db
        .products()
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound { id })?;

    console.say(format_args!("\n{}", product_table(slice::from_ref(&current))))?;
    console.say("Dejá un campo en blanco para conservar su valor actual.")?;

    let patch = ProductPatch {
        name: optional_text(&console.prompt("Nuevo nombre: ")?),
        description: optional_text(&console.prompt("Nueva descripción: ")?),
        quantity: optional_integer("cantidad", &console.prompt("Nueva cantidad: ")?)?,
        price: optional_price("precio", &console.prompt("Nuevo precio: ")?)?,
        category: optional_text(&console.prompt("Nueva categoría: ")?),
    };
    let unchanged = patch.is_empty();

    save_update(db, &patch.apply(&current)).await?;
    info!(id, unchanged, "Product updated");

    console.say("\nProducto actualizado correctamente.\n")
}

/// Writes the merged row back.
async fn save_update(db: &Database, product: &Product) -> AppResult<()> {
    match db.products().update(product).await {
        Ok(()) => Ok(()),
        // Deleted between the lookup and the write
        Err(DbError::NotFound { .. }) => Err(AppError::NotFound { id: product.id }),
        Err(err) => Err(err.into()),
    }
}

/// Permanently deletes a product.
///
/// An id with no product is reported, not treated as a failure.
pub async fn delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> AppResult<()> {
    let id = parse_integer("ID", &console.prompt("ID del producto a eliminar: ")?)?;

    if db.products().delete(id).await? {
        info!(id, "Product deleted");
        console.say("\nProducto eliminado correctamente.\n")
    } else {
        console.say(format_args!(
            "\nNo se encontró un producto con ID {id}. No se eliminó nada.\n"
        ))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
