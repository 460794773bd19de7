//! # Spotify Integration Module
//!
//! This module is the only place in the crate that talks to Spotify. It
//! implements the OAuth 2.0 authorization-code flow against the accounts
//! service and the three Web API calls the backend proxies for the frontend,
//! handling HTTP communication, error mapping and retry behavior in one
//! spot so the request handlers stay thin.
//!
//! ## Architecture
//!
//! ```text
//! Request Handlers (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization-code flow, refresh)
//!     ├── User Profile (current user identity)
//!     └── Tracks (search, recommendations)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Accounts Service / Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization-code flow:
//! - **Authorization URL**: Builds the consent URL the login endpoint
//!   redirects to, with `show_dialog=true` so a shared browser never
//!   silently reuses the previous user's grant
//! - **Code Exchange**: Trades the one-time authorization code for an
//!   access/refresh token pair
//! - **Token Refresh**: Mints a new access token from the stored refresh
//!   token, preserving the refresh token when Spotify omits it
//!
//! This deployment holds a client secret, so token endpoint calls
//! authenticate with HTTP Basic credentials rather than PKCE.
//!
//! ### User Profile Module
//!
//! [`user`] - Fetches the authenticated user's identity (`/me`) for the
//! welcome endpoint.
//!
//! ### Tracks Module
//!
//! [`tracks`] - The two proxied catalog calls:
//! - **Search**: Top-result track search used to resolve a song name to a
//!   seed track id
//! - **Recommendations**: Track suggestions seeded by that id, reshaped to
//!   the minimal `{name, artist, url}` list the frontend renders
//!
//! ## Error Handling
//!
//! Every function returns `Result<_, ApiError>`; nothing panics on a bad
//! response. Authentication calls map failures to the exchange/refresh
//! variants so the handlers can distinguish "re-login" from "server error".
//! Proxy calls go through [`get_json`], which retries once after a short
//! delay when the failure looks transient - a connect/timeout error or a
//! 502/503/504 from Spotify - and otherwise carries the upstream status and
//! body back to the caller. Client errors (4xx) are never retried, and
//! neither are token endpoint POSTs, because an authorization code is
//! single-use.
//!
//! ## Configuration Integration
//!
//! All endpoint URLs, credentials and the recommendation limit/market policy
//! come from the immutable [`Config`](crate::config::Config); the base URLs
//! are overridable, which is also how the tests point these functions at a
//! local mock server.
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support (one shared instance with a
//!   bounded request timeout, constructed in `server.rs`)
//! - **serde_json** - response deserialization into the wire types
//! - **urlencoding** - query-string encoding for user-supplied values

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::error::ApiError;

pub mod auth;
pub mod tracks;
pub mod user;

const MAX_ATTEMPTS: u32 = 2;
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Issues a bearer-authenticated GET and deserializes the JSON response.
///
/// Transient failures (connect/timeout errors, 502/503/504) are retried once
/// after [`RETRY_DELAY`]; anything else is returned immediately with the
/// upstream status and body preserved for the error response.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    token: &str,
) -> Result<T, ApiError> {
    let mut attempts = 0;

    loop {
        attempts += 1;

        match client.get(url).bearer_auth(token).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    return Ok(response.json::<T>().await?);
                }

                if is_transient_status(status) && attempts < MAX_ATTEMPTS {
                    sleep(RETRY_DELAY).await;
                    continue; // retry
                }

                let details = response.text().await.unwrap_or_default();
                return Err(ApiError::Upstream {
                    status: status.as_u16(),
                    details,
                });
            }
            Err(err) => {
                if (err.is_timeout() || err.is_connect()) && attempts < MAX_ATTEMPTS {
                    sleep(RETRY_DELAY).await;
                    continue; // retry
                }
                return Err(ApiError::Network(err));
            }
        }
    }
}

fn is_transient_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT
    )
}
