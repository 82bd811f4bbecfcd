/// Main entry point for the Habit Grid MCP server
///
/// This file sets up logging, parses command line arguments, and starts the
/// tool server on stdin/stdout.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use habit_grid::{run_server, StorageLocation, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};

/// Get the default database path with robust fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        dirs::home_dir().map(|p| p.join(".habit_grid")),
        dirs::data_dir().map(|p| p.join("habit_grid")),
        dirs::config_dir().map(|p| p.join("habit_grid")),
        std::env::current_dir().ok().map(|p| p.join(".habit_grid")),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.join("habit-grid.db"));
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let temp_path = std::env::temp_dir().join("habit_grid");
    std::fs::create_dir_all(&temp_path)?;

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path.join("habit-grid.db"))
}

/// Command line arguments for the Habit Grid MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long, env = "HABIT_GRID_DATABASE")]
    database: Option<PathBuf>,

    /// Keep habits in memory only; nothing is saved (overrides --database)
    #[arg(long)]
    ephemeral: bool,

    /// Number of days shown in the calendar grid (at most 366)
    #[arg(
        long,
        default_value_t = DEFAULT_WINDOW_DAYS,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_WINDOW_DAYS))
    )]
    window_days: u32,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_grid={}", log_level))
        .with_writer(std::io::stderr) // stdout carries the protocol
        .init();

    info!("Starting Habit Grid MCP server");

    let location = if args.ephemeral {
        StorageLocation::Ephemeral
    } else {
        let db_path = match args.database {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                path
            }
            None => get_default_database_path()?,
        };
        info!("Using database at: {}", db_path.display());
        StorageLocation::Database(db_path)
    };

    run_server(location, args.window_days).await?;

    info!("Habit Grid MCP server shutdown complete");
    Ok(())
}
