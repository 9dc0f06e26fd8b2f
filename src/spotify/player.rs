use reqwest::{Client, StatusCode};

use crate::{
    config,
    types::{CurrentlyPlayingResponse, NowPlaying, PollOutcome},
};

/// Samples the Spotify current-playback endpoint once.
///
/// Issues a single authenticated request to `/me/player/currently-playing`
/// and classifies the response into a [`PollOutcome`]. The classification is
/// deliberately total over HTTP statuses: the polling loop never needs to
/// branch on raw status codes.
///
/// # Arguments
///
/// * `token` - Bearer access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(PollOutcome::Playing(_))` - 200 with a playing item; carries the
///   track title, its artists in listing order, and the service-side id
/// - `Ok(PollOutcome::NothingPlaying)` - 204, or 200 without an item
///   (playback paused or stopped)
/// - `Ok(PollOutcome::Unauthorized)` - 401/403, typically an expired token
/// - `Ok(PollOutcome::ServiceError(_))` - any other status
/// - `Err(reqwest::Error)` - network failure or an undecodable success body
///
/// # Retry Logic
///
/// None. The poller's fixed schedule is the retry policy: a failed sample is
/// simply skipped and the next tick attempts again unconditionally.
pub async fn currently_playing(token: &str) -> Result<PollOutcome, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/player/currently-playing",
        uri = &config::spotify_apiurl()
    );

    let client = Client::new();
    let response = client.get(&api_url).bearer_auth(token).send().await?;

    match response.status() {
        StatusCode::NO_CONTENT => Ok(PollOutcome::NothingPlaying),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(PollOutcome::Unauthorized),
        StatusCode::OK => {
            let payload = response.json::<CurrentlyPlayingResponse>().await?;
            Ok(match payload.item {
                Some(item) => PollOutcome::Playing(NowPlaying {
                    track_id: item.id,
                    title: item.name,
                    artists: item.artists.into_iter().map(|a| a.name).collect(),
                }),
                None => PollOutcome::NothingPlaying,
            })
        }
        status => Ok(PollOutcome::ServiceError(status.as_u16())),
    }
}
