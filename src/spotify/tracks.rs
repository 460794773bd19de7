use reqwest::Client;

use crate::{
    config::Config,
    error::ApiError,
    types::{RecommendationsResponse, SearchResponse, SuggestionItem},
};

/// Resolves a song name to the id of the top search result.
///
/// Issues a single top-result track search (`limit=1`). A query that matches
/// nothing is not an error: the function returns `Ok(None)` and the caller
/// reports "not found" to the user.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `config` - Application configuration providing the Web API base URL
/// * `token` - Valid access token for the current session
/// * `query` - Song name as typed by the user; percent-encoded here
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Some(track_id))` - Id of the best-matching track
/// - `Ok(None)` - Spotify found no track for the query
/// - `Err(ApiError)` - Upstream or network failure after retry
///
/// # Example
///
/// ```
/// if let Some(id) = search_track(&client, &config, &token, "Yesterday").await? {
///     println!("seed track: {}", id);
/// }
/// ```
pub async fn search_track(
    client: &Client,
    config: &Config,
    token: &str,
    query: &str,
) -> Result<Option<String>, ApiError> {
    let api_url = format!(
        "{uri}/search?q={query}&type=track&limit=1",
        uri = config.api_url,
        query = urlencoding::encode(query),
    );

    let response: SearchResponse = super::get_json(client, &api_url, token).await?;

    Ok(response.tracks.items.into_iter().next().map(|track| track.id))
}

/// Fetches track recommendations seeded by one track id.
///
/// Calls Spotify's recommendations endpoint with the configured limit and
/// market (5 and "US" unless overridden) and reshapes each result into a
/// [`SuggestionItem`] of track name, first listed artist and the public web
/// link. The provider's relevance ordering is preserved; nothing is
/// reordered locally.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `config` - Application configuration providing the Web API base URL
///   and the recommendation limit/market policy
/// * `token` - Valid access token for the current session
/// * `seed` - Track id obtained from [`search_track`]
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<SuggestionItem>)` - Ordered suggestions, at most the configured
///   limit
/// - `Err(ApiError)` - Upstream or network failure after retry
///
/// # Example
///
/// ```
/// let suggestions = get_recommendations(&client, &config, &token, &seed).await?;
/// for s in &suggestions {
///     println!("{} - {} ({})", s.artist, s.name, s.url);
/// }
/// ```
pub async fn get_recommendations(
    client: &Client,
    config: &Config,
    token: &str,
    seed: &str,
) -> Result<Vec<SuggestionItem>, ApiError> {
    let api_url = format!(
        "{uri}/recommendations?seed_tracks={seed}&limit={limit}&market={market}",
        uri = config.api_url,
        seed = urlencoding::encode(seed),
        limit = config.recommendation_limit,
        market = config.market,
    );

    let response: RecommendationsResponse = super::get_json(client, &api_url, token).await?;

    let suggestions = response
        .tracks
        .into_iter()
        .map(|track| SuggestionItem {
            name: track.name,
            artist: track
                .artists
                .into_iter()
                .next()
                .map(|artist| artist.name)
                .unwrap_or_default(),
            url: track.external_urls.spotify,
        })
        .collect();

    Ok(suggestions)
}
