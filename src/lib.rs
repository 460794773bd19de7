//! Spotify Recommendation Backend Library
//!
//! This library implements a small web backend that signs a user into Spotify
//! through the OAuth2 authorization-code flow, keeps the resulting token in a
//! cookie-keyed server-side session, and proxies track search plus song
//! recommendations back to a browser frontend running on another origin.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the login, callback, welcome, logout,
//!   recommend and health endpoints
//! - `config` - Environment-driven configuration loaded once at startup
//! - `error` - Request error taxonomy and its HTTP response mapping
//! - `management` - Per-browser-session storage of tokens and identity
//! - `server` - Router assembly, CORS policy and the listener loop
//! - `spotify` - Spotify Web API client (OAuth endpoints and proxied calls)
//! - `types` - Data structures and Spotify wire formats
//! - `utils` - Small helpers (session id generation)
//!
//! # Example
//!
//! ```
//! use spotirec::{config, server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = config::Config::from_env().expect("configuration");
//!     server::start_api_server(config).await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Used for general status updates such as the listen address announced at
/// startup. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to confirm completed operations, e.g. a finished token exchange.
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Session established for {}", user_id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable startup failures (missing configuration, an
/// unbindable listen address). Request handlers never call this; they return
/// typed errors that become HTTP responses instead.
///
/// # Example
///
/// ```
/// error!("SPOTIFY_CLIENT_ID must be set");
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
/// Used for recoverable runtime issues, e.g. a failed identity fetch after a
/// successful token exchange. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// warning!("Identity fetch failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
