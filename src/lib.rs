//! Women's Football Statistics CLI Library
//!
//! This library provides the building blocks of `bolacli`: a client for the
//! API-Football statistics service, a local favorites list kept in a JSON
//! file, a small flood report registry, and the interactive console session
//! that ties them together.
//!
//! # Modules
//!
//! - `cli` - Interactive menus and one-shot command implementations
//! - `config` - Configuration management and environment variables
//! - `football` - API-Football client implementation
//! - `management` - JSON file store and the registries built on it
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use bolacli::{config, management::FavoritesRegistry};
//!
//! #[tokio::main]
//! async fn main() -> bolacli::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     let registry = FavoritesRegistry::open(&config.favorites_path);
//!     println!("{} favorites", registry.list(None).await.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod football;
pub mod management;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for the binary's glue code
/// using a boxed dynamic error trait object. Library boundaries return their
/// own error enums instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching teams for season {}", season);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal startup errors such as a missing API key. Everything
/// else is reported with [`warning!`] and the session carries on.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues: failed lookups, corrupt data files, invalid
/// input and failed writes.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
