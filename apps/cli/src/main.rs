//! # Inventario Entry Point
//!
//! ```bash
//! # Run from the directory that should hold inventario.db
//! inventario
//!
//! # With repository logging
//! RUST_LOG=inventario_db=debug inventario
//! ```

use std::process::ExitCode;

use inventario_cli::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = AppConfig::default();
    inventario_cli::init_tracing(&config.log_filter);

    match inventario_cli::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
