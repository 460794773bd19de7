use std::{net::SocketAddr, str::FromStr, sync::Arc, time::Duration};

use axum::{
    Router,
    extract::FromRef,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use reqwest::Client;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{api, config::Config, error, info, management::SessionManager, warning};

// Bound on every outbound Spotify call so a stalled provider cannot hang a
// request indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Client,
    pub sessions: SessionManager,
    cookie_key: Key,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cookie_key = match &config.session_secret {
            Some(secret) => match Key::try_from(secret.as_bytes()) {
                Ok(key) => key,
                Err(_) => {
                    warning!(
                        "SESSION_SECRET is too short (64 bytes required); using a random key. Sessions will not survive a restart."
                    );
                    Key::generate()
                }
            },
            None => {
                warning!(
                    "SESSION_SECRET not set; using a random key. Sessions will not survive a restart."
                );
                Key::generate()
            }
        };

        let http = match Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(client) => client,
            Err(e) => error!("Failed to build HTTP client: {}", e),
        };

        AppState {
            config: Arc::new(config),
            http,
            sessions: SessionManager::new(),
            cookie_key,
        }
    }
}

// Lets the private cookie jar extractor find the encryption key in the state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(api::login))
        .route("/callback", get(api::callback))
        .route("/welcome", get(api::welcome))
        .route("/logout", get(api::logout))
        .route("/recommend", post(api::recommend))
        .route("/health", get(api::health))
        .layer(cors)
        .with_state(state)
}

// The frontend runs on another origin and sends the session cookie, so the
// allow-list is explicit and credentials are enabled; a wildcard origin
// would make the browser drop the cookie.
fn cors_layer(config: &Config) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = Vec::new();
    for origin in config.allowed_origins() {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => warning!("Ignoring invalid CORS origin: {}", origin),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

pub async fn start_api_server(config: Config) {
    let port = config.port;
    let state = AppState::new(config);
    state.sessions.spawn_idle_sweeper();
    let app = router(state);

    let addr = match SocketAddr::from_str(&format!("0.0.0.0:{}", port)) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
