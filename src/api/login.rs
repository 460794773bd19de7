use axum::{extract::State, response::Response};

use crate::{server::AppState, spotify};

use super::redirect_found;

pub async fn login(State(state): State<AppState>) -> Response {
    let auth_url = spotify::auth::authorize_url(&state.config);
    redirect_found(&auth_url)
}
