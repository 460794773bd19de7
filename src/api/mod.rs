//! # API Module
//!
//! This module provides the HTTP endpoints of the recommendation backend:
//! the OAuth login/callback pair, the session-guarded welcome and recommend
//! endpoints, logout, and a health check.
//!
//! ## Overview
//!
//! The API module is the boundary where sessions, the OAuth client and the
//! Spotify proxy calls are sequenced. Handlers contain no protocol logic of
//! their own; they read the session cookie, delegate to
//! [`crate::management`] and [`crate::spotify`], and shape the documented
//! JSON responses.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - Redirects the browser to Spotify's consent screen.
//! - [`callback`] - Receives the authorization code, performs the token
//!   exchange, establishes the session and redirects to the frontend.
//! - [`logout`] - Clears the session; safe to call repeatedly.
//!
//! ### Session-guarded
//!
//! - [`welcome`] - Returns the signed-in user's identity, refreshing the
//!   access token first when needed.
//! - [`recommend`] - Resolves a song name to a seed track and returns the
//!   suggestion list.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version for monitoring
//!   systems and load balancers.
//!
//! ## Redirect Behavior
//!
//! Every redirect this API issues (to the consent screen, to the frontend,
//! and back to login for unauthenticated requests) uses status 302 so the
//! browser replays none of the original request against the new location.
//!
//! ## Security Considerations
//!
//! - The session id travels only inside an encrypted private cookie marked
//!   `SameSite=None; Secure; HttpOnly`
//! - Client credentials never leave the backend; the browser sees only the
//!   authorization URL and the session cookie
//! - Unauthenticated requests are redirected into the login flow instead of
//!   being answered with an error page
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use spotirec::api;
//!
//! let app = Router::new()
//!     .route("/", get(api::login))
//!     .route("/callback", get(api::callback))
//!     .route("/recommend", post(api::recommend));
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::management`] - Session storage and token write-back
//! - [`crate::spotify`] - Spotify API integration
//! - [`crate::error`] - Response mapping for every failure these handlers
//!   can produce

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

mod callback;
mod health;
mod login;
mod logout;
mod recommend;
mod welcome;

pub use callback::callback;
pub use health::health;
pub use login::login;
pub use logout::logout;
pub use recommend::recommend;
pub use welcome::welcome;

// axum's Redirect helper answers 303 to GET; the documented surface is 302
// everywhere, so redirects are built explicitly.
pub(crate) fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
