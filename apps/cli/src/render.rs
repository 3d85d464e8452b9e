//! # Table Rendering
//!
//! Fixed-width text tables for product listings.
//!
//! ```text
//! ID | Nombre | Descripción | Cantidad | Precio | Categoría
//! ---+--------+-------------+----------+--------+----------
//!  1 | Widget |             |        5 |   9.99 | Tools
//! ```
//!
//! Widths are measured in terminal columns (`unicode-width`), so accented
//! labels line up.

use inventario_core::Product;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 6] = ["ID", "Nombre", "Descripción", "Cantidad", "Precio", "Categoría"];

/// Columns holding numbers are right-aligned.
const RIGHT_ALIGNED: [bool; 6] = [true, false, false, true, true, false];

/// Renders products as a table. Callers print their own message for an
/// empty slice.
pub fn product_table(products: &[Product]) -> String {
    let header: [String; 6] = HEADERS.map(str::to_string);
    let rows: Vec<[String; 6]> = products.iter().map(cells).collect();

    let mut widths = header.each_ref().map(|cell| cell.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths, false);

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&separator.join("-+-"));
    out.push('\n');

    for row in &rows {
        push_row(&mut out, row, &widths, true);
    }
    out
}

/// Formats a price with two decimals.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

fn cells(product: &Product) -> [String; 6] {
    [
        product.id.to_string(),
        product.name.clone(),
        product.description.clone().unwrap_or_default(),
        product.quantity.to_string(),
        format_price(product.price),
        product.category.clone().unwrap_or_default(),
    ]
}

fn push_row(out: &mut String, row: &[String; 6], widths: &[usize; 6], align_numbers: bool) {
    let padded: Vec<String> = row
        .iter()
        .zip(widths)
        .zip(RIGHT_ALIGNED)
        .map(|((cell, width), right)| pad(cell, *width, align_numbers && right))
        .collect();

    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

fn pad(cell: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right {
        format!("{fill}{cell}")
    } else {
        format!("{cell}{fill}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, quantity: i64, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            quantity,
            price,
            category: Some("Tools".to_string()),
        }
    }

    #[test]
    fn test_header_only_for_empty_slice() {
        let table = product_table(&[]);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "ID | Nombre | Descripción | Cantidad | Precio | Categoría"
        );
        assert!(lines[1].starts_with("---+-"));
    }

    #[test]
    fn test_rows_are_aligned() {
        let table = product_table(&[
            product(1, "Widget", 5, 9.99),
            product(12, "Tornillo largo", 150, 0.5),
        ]);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[2],
            " 1 | Widget         |             |        5 |   9.99 | Tools"
        );
        assert_eq!(
            lines[3],
            "12 | Tornillo largo |             |      150 |   0.50 | Tools"
        );

        // Every separator lines up in display columns
        let bars: Vec<Vec<usize>> = lines
            .iter()
            .filter(|l| !l.starts_with('-'))
            .map(|l| {
                let mut col = 0;
                let mut positions = Vec::new();
                for ch in l.chars() {
                    if ch == '|' {
                        positions.push(col);
                    }
                    col += ch.to_string().width();
                }
                positions
            })
            .collect();
        assert!(bars.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_accented_cells_use_display_width() {
        let mut p = product(1, "Pala", 1, 1.0);
        p.category = Some("Jardín".to_string());
        let table = product_table(&[p]);

        assert!(table.lines().nth(2).unwrap().ends_with("| Jardín"));
        assert_eq!("Categoría".width(), 9);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "12.50");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(9.999), "10.00");
    }
}
