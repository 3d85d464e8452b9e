//! Low-stock report.

use std::io::{BufRead, Write};

use inventario_core::validation::parse_integer;
use inventario_db::Database;
use tracing::info;

use crate::console::Console;
use crate::error::AppResult;
use crate::render::product_table;

/// Lists products whose quantity is at or below an operator-supplied limit.
pub async fn low_stock<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> AppResult<()> {
    let input = console.prompt("Mostrar productos con cantidad menor o igual a: ")?;
    let threshold = parse_integer("límite", &input)?;

    let products = db.products().low_stock(threshold).await?;
    info!(threshold, count = products.len(), "Low-stock report");

    if products.is_empty() {
        console.say(format_args!(
            "\nNo hay productos con cantidad igual o inferior a {threshold}.\n"
        ))?;
    } else {
        console.say("\n--- Productos con bajo stock ---")?;
        console.say(product_table(&products))?;
    }
    Ok(())
}
