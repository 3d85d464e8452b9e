//! # inventario-cli: Interactive Inventory Console
//!
//! Text menu for registering, listing, searching, updating, deleting, and
//! reporting on products stored in a local SQLite file.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventario Console                               │
//! │                                                                         │
//! │  main.rs ─────► tracing setup, AppConfig::default(), run()              │
//! │                                                                         │
//! │  lib.rs ──────► open Database, wrap stdin/stdout, run_menu, close       │
//! │                                                                         │
//! │  menu.rs ─────► MenuOption / SearchMode, loop + dispatch                │
//! │                                                                         │
//! │  commands/ ───► register, list, search, update, delete, low_stock       │
//! │                                                                         │
//! │  render.rs ───► fixed-width product table                               │
//! │                                                                         │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                  inventario-db ──► inventario.db                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Open `inventario.db` in the working directory, creating it if needed
//! 3. Ensure the `products` table exists
//! 4. Run the menu until "Salir" or end of input
//! 5. Close the pool

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod render;

use std::io;

use inventario_db::{Database, DbConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::AppConfig;
pub use console::Console;
pub use error::{AppError, AppResult};

/// Opens the database and runs the menu on the process terminal.
///
/// ## Errors
/// * `AppError::Storage` - the database could not be opened or initialised
/// * `AppError::Io` - the terminal failed
pub async fn run(config: AppConfig) -> AppResult<()> {
    info!(path = %config.database_path.display(), "Starting inventory console");

    let db = Database::new(DbConfig::new(&config.database_path)).await?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    let result = menu::run_menu(&mut console, &db).await;

    db.close().await;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show repository statements
/// - `RUST_LOG=inventario_db=debug` - Only the database layer
/// - Default: `fallback_filter` (normally `warn`)
///
/// Output goes to stderr so it never mixes into the menu on stdout.
pub fn init_tracing(fallback_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
