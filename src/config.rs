//! Configuration management for the recommendation backend.
//!
//! This module loads all runtime configuration from environment variables
//! (optionally seeded from a `.env` file in the working directory) into a
//! single immutable [`Config`] value constructed once at process start. The
//! rest of the crate receives the struct explicitly; nothing reads the
//! environment after startup.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use std::env;

use crate::error::ConfigError;

/// OAuth scope requested from Spotify; read-only profile access is all the
/// backend needs.
pub const DEFAULT_SCOPE: &str = "user-read-private user-read-email";

/// Spotify endpoints, overridable for tests and proxies.
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Deployment policy for the recommend endpoint. Configurable, but these
/// defaults are part of the endpoint's contract.
pub const DEFAULT_RECOMMENDATION_LIMIT: u32 = 5;
pub const DEFAULT_MARKET: &str = "US";

const DEFAULT_PORT: u16 = 5000;

/// Immutable application configuration, built once by [`Config::from_env`]
/// and passed explicitly to every component that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client id.
    pub client_id: String,
    /// Spotify application client secret; used as HTTP Basic credentials
    /// against the token endpoint, never sent to the browser.
    pub client_secret: String,
    /// Callback URL registered with Spotify; must match exactly.
    pub redirect_uri: String,
    /// Base URL of the frontend single-page app (no trailing slash).
    pub frontend_url: String,
    /// Space-separated OAuth scopes requested at login.
    pub scope: String,
    /// Spotify authorization endpoint.
    pub auth_url: String,
    /// Spotify token endpoint.
    pub token_url: String,
    /// Spotify Web API base URL.
    pub api_url: String,
    /// Secret for the session cookie key. When absent a random key is
    /// generated at startup and sessions do not survive a restart.
    pub session_secret: Option<String>,
    /// TCP port the server listens on.
    pub port: u16,
    /// Number of suggestions returned by the recommend endpoint.
    pub recommendation_limit: u32,
    /// Market passed to the recommendations call.
    pub market: String,
}

impl Config {
    /// Loads the configuration from the environment.
    ///
    /// A `.env` file in the working directory is read first when present;
    /// real environment variables take precedence. Required variables are
    /// `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`, `SPOTIFY_REDIRECT_URI`
    /// and `FRONTEND_URL`. Everything else falls back to a default:
    /// `SESSION_SECRET` (random per process), `PORT` (5000), `SPOTIFY_SCOPE`,
    /// `SPOTIFY_AUTH_URL`, `SPOTIFY_TOKEN_URL`, `SPOTIFY_API_URL`,
    /// `RECOMMENDATION_LIMIT` (5) and `RECOMMENDATION_MARKET` ("US").
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when a required variable is not
    /// set and [`ConfigError::Invalid`] when `PORT` or
    /// `RECOMMENDATION_LIMIT` fail to parse.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env().expect("incomplete environment");
    /// println!("listening on port {}", config.port);
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let recommendation_limit = match env::var("RECOMMENDATION_LIMIT") {
            Ok(raw) => raw.parse::<u32>().map_err(|e| ConfigError::Invalid {
                var: "RECOMMENDATION_LIMIT",
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_RECOMMENDATION_LIMIT,
        };

        Ok(Config {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_REDIRECT_URI")?,
            frontend_url: required("FRONTEND_URL")?,
            scope: or_default("SPOTIFY_SCOPE", DEFAULT_SCOPE),
            auth_url: or_default("SPOTIFY_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: or_default("SPOTIFY_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: or_default("SPOTIFY_API_URL", DEFAULT_API_URL),
            session_secret: env::var("SESSION_SECRET").ok(),
            port,
            recommendation_limit,
            market: or_default("RECOMMENDATION_MARKET", DEFAULT_MARKET),
        })
    }

    /// Origins allowed to make credentialed cross-origin requests: the
    /// configured frontend plus the local dev server.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec!["http://localhost:3000".to_string()];
        if !origins.contains(&self.frontend_url) {
            origins.push(self.frontend_url.clone());
        }
        origins
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
