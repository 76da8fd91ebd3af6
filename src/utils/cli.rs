//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::server::app::serve;
use clap::Parser;
use std::path::Path;
use tracing;

/// Avengers API is a small CRUD server over a single SQLite table.
/// Run from the directory that should hold the database, or pass
/// a path to it.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the directory holding the SQLite database. Defaults to cwd.
    #[arg(short, long, default_value_t = String::from("."))]
    db_path: String,
    /// Avengers API cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

///
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Serve the Avengers HTTP API
    Serve {
        /// Port on which to serve the API.
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

///
fn init_tracing() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();
}

/// Main entrypoint to application
///
/// # Errors
/// Errors if the server cannot bind to the requested port.
pub fn run() -> std::io::Result<()> {
    init_tracing();
    tracing::debug!("Starting application");
    let cli = Cli::parse();
    let db_path = Path::new(&cli.db_path);
    if !db_path.is_dir() {
        tracing::error!(
            "error: `{}` is not a directory; pass --db-path pointing at the directory that should hold the database",
            &cli.db_path
        );
        std::process::exit(1);
    }

    match cli.subcommands {
        Subcommands::Serve { port } => serve(db_path, port),
    }
}
