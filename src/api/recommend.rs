use axum::{Json, body::Bytes, extract::State};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    error::ApiError,
    management::SESSION_COOKIE,
    server::AppState,
    spotify,
    types::{RecommendRequest, SuggestionItem},
};

pub async fn recommend(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    body: Bytes,
) -> Result<Json<Vec<SuggestionItem>>, ApiError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Err(ApiError::Unauthenticated);
    };

    let access_token = state
        .sessions
        .valid_access_token(&state.http, &state.config, cookie.value())
        .await?;

    // The body is parsed only after the session check; any unreadable
    // payload is treated as a missing song.
    let Some(song) = serde_json::from_slice::<RecommendRequest>(&body)
        .ok()
        .and_then(|request| request.song)
    else {
        return Err(ApiError::MissingInput("Missing song in request"));
    };

    let seed =
        match spotify::tracks::search_track(&state.http, &state.config, &access_token, &song)
            .await?
        {
            Some(track_id) => track_id,
            None => return Err(ApiError::NotFound("Song not found")),
        };

    let suggestions =
        spotify::tracks::get_recommendations(&state.http, &state.config, &access_token, &seed)
            .await?;

    Ok(Json(suggestions))
}
