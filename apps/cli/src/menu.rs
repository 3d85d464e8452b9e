//! # Menu Loop
//!
//! Shows the main menu, reads a selection, dispatches it, and repeats.
//!
//! ```text
//! ┌──────────────────────┐
//! │ awaiting selection   │◄─────────────────────────────┐
//! └──────────┬───────────┘                              │
//!            │ "1".."6"                                 │
//!            ▼                                          │
//! ┌──────────────────────┐   Ok / Validation /          │
//! │ executing operation  │── NotFound / Storage ────────┘
//! └──────────┬───────────┘
//!            │ "7", end of input
//!            ▼
//!          exit
//! ```
//!
//! Each operation is self-contained: nothing but the database file carries
//! over from one iteration to the next.

use std::io::{BufRead, Write};

use inventario_core::{ValidationError, ValidationResult};
use inventario_db::Database;
use tracing::{debug, error, info};

use crate::commands;
use crate::console::Console;
use crate::error::{AppError, AppResult};

// =============================================================================
// Menu Options
// =============================================================================

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Register,
    List,
    Search,
    Update,
    Delete,
    LowStock,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 7] = [
        MenuOption::Register,
        MenuOption::List,
        MenuOption::Search,
        MenuOption::Update,
        MenuOption::Delete,
        MenuOption::LowStock,
        MenuOption::Exit,
    ];

    /// Key the operator types to pick this entry.
    pub fn key(self) -> &'static str {
        match self {
            MenuOption::Register => "1",
            MenuOption::List => "2",
            MenuOption::Search => "3",
            MenuOption::Update => "4",
            MenuOption::Delete => "5",
            MenuOption::LowStock => "6",
            MenuOption::Exit => "7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Register => "Registrar producto",
            MenuOption::List => "Mostrar productos",
            MenuOption::Search => "Buscar producto",
            MenuOption::Update => "Actualizar producto",
            MenuOption::Delete => "Eliminar producto",
            MenuOption::LowStock => "Reporte bajo stock",
            MenuOption::Exit => "Salir",
        }
    }

    /// Parses a menu selection. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.key() == input)
            .ok_or_else(|| ValidationError::InvalidOption {
                input: input.to_string(),
            })
    }
}

/// Lookup modes offered by the search entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    ById,
    ByName,
    ByCategory,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::ById, SearchMode::ByName, SearchMode::ByCategory];

    pub fn key(self) -> &'static str {
        match self {
            SearchMode::ById => "1",
            SearchMode::ByName => "2",
            SearchMode::ByCategory => "3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchMode::ById => "Por ID",
            SearchMode::ByName => "Por nombre",
            SearchMode::ByCategory => "Por categoría",
        }
    }

    pub fn parse(input: &str) -> ValidationResult<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.key() == input)
            .ok_or_else(|| ValidationError::InvalidOption {
                input: input.to_string(),
            })
    }
}

// =============================================================================
// Loop
// =============================================================================

/// Runs the menu until the operator exits or input ends.
///
/// Recoverable errors are printed and the loop continues. Only a failing
/// terminal (`AppError::Io`) is returned.
pub async fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    db: &Database,
) -> AppResult<()> {
    loop {
        print_menu(console)?;

        let selection = match console.prompt("Elegí una opción: ") {
            Ok(selection) => selection,
            Err(AppError::InputClosed) => break,
            Err(err) if err.is_recoverable() => {
                report(console, &err)?;
                continue;
            }
            Err(err) => return Err(err),
        };

        let option = match MenuOption::parse(&selection) {
            Ok(option) => option,
            Err(err) => {
                report(console, &AppError::from(err))?;
                continue;
            }
        };

        if option == MenuOption::Exit {
            console.say("Saliendo del sistema...")?;
            break;
        }

        match dispatch(option, console, db).await {
            Ok(()) => {}
            Err(AppError::InputClosed) => break,
            Err(err) if err.is_recoverable() => report(console, &err)?,
            Err(err) => return Err(err),
        }
    }

    info!("Menu loop finished");
    Ok(())
}

async fn dispatch<R: BufRead, W: Write>(
    option: MenuOption,
    console: &mut Console<R, W>,
    db: &Database,
) -> AppResult<()> {
    match option {
        MenuOption::Register => commands::product::register(console, db).await,
        MenuOption::List => commands::product::list(console, db).await,
        MenuOption::Search => commands::product::search(console, db).await,
        MenuOption::Update => commands::product::update(console, db).await,
        MenuOption::Delete => commands::product::delete(console, db).await,
        MenuOption::LowStock => commands::report::low_stock(console, db).await,
        // Handled by the loop before dispatching
        MenuOption::Exit => Ok(()),
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<()> {
    console.say("----- Sistema de Inventario -----")?;
    for option in MenuOption::ALL {
        console.say(format_args!("{}. {}", option.key(), option.label()))?;
    }
    Ok(())
}

/// Prints a recoverable error and logs it.
///
/// Operator mistakes are logged at `debug` so the default filter keeps them
/// off the terminal; only storage failures reach `error`.
fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: &AppError) -> AppResult<()> {
    match err {
        AppError::Validation(inner) => {
            debug!(field = ?inner.field(), error = %inner, "Operation rejected by validation");
            console.say(format_args!("\n{err}. Operación cancelada.\n"))
        }
        AppError::NotFound { id } => {
            debug!(id, "Product not found");
            console.say(format_args!("\n{err}.\n"))
        }
        _ => {
            error!(error = %err, "Operation failed");
            console.say(format_args!("\n{err}\n"))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
