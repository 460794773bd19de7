use reqwest::Client;

use crate::{
    config::Config,
    error::ApiError,
    types::{TokenRecord, TokenResponse},
};

/// Builds the Spotify authorization URL the login endpoint redirects to.
///
/// The URL carries the client id, the registered redirect URI, the requested
/// scope and `show_dialog=true`, which forces the consent screen even when
/// Spotify still has a session for the browser. Without that flag a second
/// user on a shared machine would be silently logged in as the first one.
///
/// # Arguments
///
/// * `config` - Application configuration providing the authorization
///   endpoint, client id, redirect URI and scope
///
/// # Returns
///
/// The complete authorization URL. Building it is side-effect-free; no
/// request is made until the browser follows the redirect.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config);
/// assert!(url.contains("show_dialog=true"));
/// ```
pub fn authorize_url(config: &Config) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&show_dialog=true",
        auth_url = config.auth_url,
        client_id = urlencoding::encode(&config.client_id),
        redirect_uri = urlencoding::encode(&config.redirect_uri),
        scope = urlencoding::encode(&config.scope),
    )
}

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Completes the authorization-code flow after the callback delivers the
/// one-time code. The token endpoint is authenticated with HTTP Basic
/// credentials (client id and secret), matching how Spotify expects
/// confidential clients to identify themselves.
///
/// # Arguments
///
/// * `client` - Shared HTTP client (carries the bounded request timeout)
/// * `config` - Application configuration with the token endpoint and
///   client credentials
/// * `code` - Authorization code received on the callback
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenRecord)` - Complete record with access token, refresh token,
///   absolute expiry and granted scopes
/// - `Err(ApiError::AuthExchange)` - Network failure, invalid code, or a
///   provider error body
///
/// # Error Handling
///
/// Every failure mode is folded into [`ApiError::AuthExchange`] so the
/// callback handler can report one well-formed 500 response; the exchange is
/// never retried because the code is single-use and expires quickly.
///
/// # Example
///
/// ```
/// let record = exchange_code(&client, &config, "AQA...code").await?;
/// println!("token expires at {}", record.expires_at);
/// ```
pub async fn exchange_code(
    client: &Client,
    config: &Config,
    code: &str,
) -> Result<TokenRecord, ApiError> {
    let response = client
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| ApiError::AuthExchange {
            details: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let details = response.text().await.unwrap_or_default();
        return Err(ApiError::AuthExchange {
            details: format!("token endpoint returned {}: {}", status, details),
        });
    }

    let token: TokenResponse = response.json().await.map_err(|e| ApiError::AuthExchange {
        details: e.to_string(),
    })?;

    Ok(TokenRecord::from_response(token, None))
}

/// Refreshes an expired access token using the session's refresh token.
///
/// Exchanges the refresh token for a new access token so the user keeps an
/// authenticated session without re-consenting. Spotify does not rotate
/// refresh tokens and usually omits the field from the response; the
/// record's existing refresh token is preserved in that case.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `config` - Application configuration with the token endpoint and
///   client credentials
/// * `record` - The expired record whose refresh token is exchanged
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenRecord)` - Fresh record replacing the old one wholesale
/// - `Err(ApiError::AuthRefresh)` - Invalid or revoked refresh token,
///   network failure, or a provider error body
///
/// # Error Handling
///
/// A refresh failure means the grant is gone, not that the server is broken:
/// the session layer reacts by clearing the session and sending the browser
/// back into a fresh login.
///
/// # Example
///
/// ```
/// let fresh = refresh_token(&client, &config, &record).await?;
/// assert_eq!(fresh.refresh_token, record.refresh_token);
/// ```
pub async fn refresh_token(
    client: &Client,
    config: &Config,
    record: &TokenRecord,
) -> Result<TokenRecord, ApiError> {
    let response = client
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", record.refresh_token.as_str()),
        ])
        .send()
        .await
        .map_err(|e| ApiError::AuthRefresh {
            details: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let details = response.text().await.unwrap_or_default();
        return Err(ApiError::AuthRefresh {
            details: format!("token endpoint returned {}: {}", status, details),
        });
    }

    let token: TokenResponse = response.json().await.map_err(|e| ApiError::AuthRefresh {
        details: e.to_string(),
    })?;

    Ok(TokenRecord::from_response(
        token,
        Some(&record.refresh_token),
    ))
}
