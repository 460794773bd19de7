use reqwest::Client;

use crate::{config::Config, error::ApiError, types::UserIdentity};

/// Fetches the authenticated user's profile from `/me`.
///
/// Used right after the token exchange (to capture the identity for the
/// session) and again on every welcome call, which always shows fresh data
/// rather than a possibly stale copy.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `config` - Application configuration providing the Web API base URL
/// * `token` - Valid access token for the current session
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(UserIdentity)` - Id plus optional display name and email; email is
///   only present when the `user-read-email` scope was granted
/// - `Err(ApiError)` - Upstream or network failure after retry
///
/// # Example
///
/// ```
/// let user = current_user(&client, &config, &token).await?;
/// println!("hello {}", user.display_name.unwrap_or(user.id));
/// ```
pub async fn current_user(
    client: &Client,
    config: &Config,
    token: &str,
) -> Result<UserIdentity, ApiError> {
    let api_url = format!("{uri}/me", uri = config.api_url);

    super::get_json(client, &api_url, token).await
}
