use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    error::ApiError,
    management::{SESSION_COOKIE, session_cookie},
    server::AppState,
    spotify,
    success,
    types::SessionData,
    utils, warning,
};

use super::redirect_found;

pub async fn callback(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Query(params): Query<HashMap<String, String>>,
) -> Result<(PrivateCookieJar, Response), ApiError> {
    let Some(code) = params.get("code") else {
        return Err(ApiError::MissingInput("Authorization code missing"));
    };

    let token = spotify::auth::exchange_code(&state.http, &state.config, code).await?;

    // Reuse the session id when the browser already carries one, so a
    // re-login replaces the old record instead of leaking it.
    let session_id = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .unwrap_or_else(utils::generate_session_id);

    // The identity is captured for later display only; a failure here must
    // not block the redirect, and the welcome endpoint fetches fresh anyway.
    let identity =
        match spotify::user::current_user(&state.http, &state.config, &token.access_token).await {
            Ok(identity) => Some(identity),
            Err(e) => {
                warning!("Identity fetch failed after token exchange: {}", e);
                None
            }
        };

    state
        .sessions
        .set(&session_id, SessionData { token, identity })
        .await;

    success!("Authentication successful!");

    let jar = jar.add(session_cookie(session_id));
    let target = format!("{frontend}/welcome", frontend = state.config.frontend_url);

    Ok((jar, redirect_found(&target)))
}
