use axum::{Json, extract::State};
use axum_extra::extract::PrivateCookieJar;
use serde_json::{Value, json};

use crate::{
    management::{SESSION_COOKIE, session_cookie},
    server::AppState,
};

pub async fn logout(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> (PrivateCookieJar, Json<Value>) {
    // Logging out without a session is fine; the response is the same.
    let jar = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            state.sessions.clear(cookie.value()).await;
            jar.remove(session_cookie(String::new()))
        }
        None => jar,
    };

    (jar, Json(json!({ "message": "Logged out successfully" })))
}
