use chrono::Utc;
use serde::{Deserialize, Serialize};

// Tokens this close to expiry are treated as expired so an outbound call
// cannot race the real deadline.
pub const EXPIRY_LEEWAY_SECS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    pub scope: Vec<String>,
}

impl TokenRecord {
    /// Builds a record from a token endpoint response, converting the
    /// relative `expires_in` into an absolute instant. The refresh grant
    /// usually omits `refresh_token`; the previous one is carried over then.
    pub fn from_response(response: TokenResponse, previous_refresh: Option<&str>) -> Self {
        let refresh_token = response
            .refresh_token
            .or_else(|| previous_refresh.map(str::to_string))
            .unwrap_or_default();

        TokenRecord {
            access_token: response.access_token,
            refresh_token,
            expires_at: Utc::now().timestamp() + response.expires_in,
            scope: response
                .scope
                .unwrap_or_default()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at - EXPIRY_LEEWAY_SECS
    }
}

#[derive(Debug, Clone)]
pub struct SessionData {
    pub token: TokenRecord,
    pub identity: Option<UserIdentity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: i64,
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackList,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackList {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub song: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub name: String,
    pub artist: String,
    pub url: String,
}
