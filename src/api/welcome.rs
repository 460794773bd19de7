use axum::{Json, extract::State};
use axum_extra::extract::PrivateCookieJar;
use serde_json::{Value, json};

use crate::{error::ApiError, management::SESSION_COOKIE, server::AppState, spotify};

pub async fn welcome(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<Json<Value>, ApiError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Err(ApiError::Unauthenticated);
    };

    let access_token = state
        .sessions
        .valid_access_token(&state.http, &state.config, cookie.value())
        .await?;

    let user = spotify::user::current_user(&state.http, &state.config, &access_token).await?;

    // Spotify reports no display name for some accounts; fall back to the id
    // rather than greeting nobody.
    let display_name = user.display_name.unwrap_or_else(|| user.id.clone());

    Ok(Json(json!({
        "message": format!("Welcome {}!", display_name),
        "email": user.email,
        "id": user.id,
    })))
}
