use std::{collections::HashMap, sync::Arc, time::Duration};

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;
use reqwest::Client;
use tokio::{sync::Mutex, time::sleep};

use crate::{
    config::Config,
    error::ApiError,
    info, spotify,
    types::{SessionData, TokenRecord},
    warning,
};

pub const SESSION_COOKIE: &str = "spotirec_session";

// Sessions idle longer than this are dropped by the background sweep.
const SESSION_IDLE_TTL_SECS: i64 = 24 * 60 * 60;
const SWEEP_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Builds the session cookie. The frontend lives on another origin, so the
/// cookie must be cross-site-sendable: SameSite=None and Secure.
pub fn session_cookie(session_id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .same_site(SameSite::None)
        .secure(true)
        .http_only(true)
        .build()
}

struct SessionEntry {
    data: SessionData,
    last_seen: i64,
}

impl SessionEntry {
    fn new(data: SessionData) -> Self {
        SessionEntry {
            data,
            last_seen: Utc::now().timestamp(),
        }
    }

    fn touch(&mut self) {
        self.last_seen = Utc::now().timestamp();
    }
}

#[derive(Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        SessionManager {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn get(&self, session_id: &str) -> Option<SessionData> {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions.get_mut(session_id)?;
        entry.touch();
        Some(entry.data.clone())
    }

    pub async fn set(&self, session_id: &str, data: SessionData) {
        self.sessions
            .lock()
            .await
            .insert(session_id.to_string(), SessionEntry::new(data));
    }

    pub async fn set_token(&self, session_id: &str, token: TokenRecord) {
        if let Some(entry) = self.sessions.lock().await.get_mut(session_id) {
            entry.data.token = token;
            entry.touch();
        }
    }

    pub async fn clear(&self, session_id: &str) {
        self.sessions.lock().await.remove(session_id);
    }

    pub async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Drops every session idle for longer than `max_idle_secs` and returns
    /// how many were removed.
    pub async fn purge_idle(&self, max_idle_secs: i64) -> usize {
        let cutoff = Utc::now().timestamp() - max_idle_secs;
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_seen > cutoff);
        before - sessions.len()
    }

    /// Spawns the background task that reclaims abandoned sessions. A browser
    /// that discards its cookie without calling logout leaves the record
    /// behind, and only the sweep removes it.
    pub fn spawn_idle_sweeper(&self) {
        let sessions = self.clone();
        tokio::spawn(async move {
            loop {
                sleep(SWEEP_INTERVAL).await;
                let dropped = sessions.purge_idle(SESSION_IDLE_TTL_SECS).await;
                if dropped > 0 {
                    info!("Dropped {} idle sessions", dropped);
                }
            }
        });
    }

    /// Returns an access token that is safe to send upstream, refreshing and
    /// writing back the session's record when it has expired.
    ///
    /// A missing session yields [`ApiError::Unauthenticated`]. A failed
    /// refresh (revoked or invalid refresh token) clears the session and
    /// yields the same, so the caller redirects the browser into a fresh
    /// login rather than reporting a server error.
    pub async fn valid_access_token(
        &self,
        client: &Client,
        config: &Config,
        session_id: &str,
    ) -> Result<String, ApiError> {
        let Some(data) = self.get(session_id).await else {
            return Err(ApiError::Unauthenticated);
        };

        if !data.token.is_expired() {
            return Ok(data.token.access_token);
        }

        match spotify::auth::refresh_token(client, config, &data.token).await {
            Ok(new_token) => {
                let access_token = new_token.access_token.clone();
                self.set_token(session_id, new_token).await;
                Ok(access_token)
            }
            Err(e) => {
                warning!("Token refresh failed: {}", e);
                self.clear(session_id).await;
                Err(ApiError::Unauthenticated)
            }
        }
    }
}
