//! Configuration management for the Spotify Play Tally CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, callback server settings, and
//! the polling policy knobs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Default OAuth scope requested during authorization.
///
/// Reading the currently playing track requires both scopes; the value can be
/// overridden with `SPOTIFY_API_AUTH_SCOPE` if Spotify ever changes the split.
pub const DEFAULT_SCOPE: &str = "user-read-currently-playing user-read-playback-state";

/// Default polling cadence in seconds.
pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 5;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotally/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotally/.env`
/// - macOS: `~/Library/Application Support/spotally/.env`
/// - Windows: `%LOCALAPPDATA%/spotally/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an error
/// string if directory creation or file loading fails.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use spotally::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotally/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the server address for the local OAuth callback server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the local HTTP server should bind for
/// handling OAuth callbacks during the authentication flow.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8585"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_API_REDIRECT_URI` environment variable which specifies
/// the callback URL that Spotify should redirect to after user authorization.
/// This must match the redirect URI registered in the Spotify application
/// settings and point at the local callback server's `/callback` route.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
///
/// # Example
///
/// ```
/// let redirect_uri = spotify_redirect_uri(); // e.g., "http://127.0.0.1:8585/callback"
/// ```
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions.
///
/// Retrieves the `SPOTIFY_API_AUTH_SCOPE` environment variable which defines
/// the scope of permissions requested during OAuth authentication, falling
/// back to [`DEFAULT_SCOPE`] when unset. The scope determines what API
/// operations the application can perform on behalf of the user.
///
/// # Example
///
/// ```
/// let scope = spotify_scope(); // "user-read-currently-playing user-read-playback-state"
/// ```
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string())
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_API_AUTH_URL` environment variable which contains
/// the base URL for Spotify's OAuth authorization endpoint, falling back to
/// the production accounts endpoint when unset. This is where users are
/// redirected to grant permissions to the application.
///
/// # Example
///
/// ```
/// let auth_url = spotify_apiauth_url(); // "https://accounts.spotify.com/authorize"
/// ```
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints, falling back to the production
/// API when unset. This is used for all API operations after authentication.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the polling cadence for the tally session in seconds.
///
/// Retrieves the `POLL_INTERVAL_SECONDS` environment variable, falling back
/// to [`DEFAULT_POLL_INTERVAL_SECONDS`] when unset or unparsable. The cadence
/// is a policy knob, not an invariant; any positive number of seconds works,
/// shorter intervals just burn more API quota. A configured value of 0 is
/// treated as the default.
///
/// # Example
///
/// ```
/// let secs = poll_interval_seconds(); // 5 unless overridden
/// ```
pub fn poll_interval_seconds() -> u64 {
    env::var("POLL_INTERVAL_SECONDS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_POLL_INTERVAL_SECONDS)
}

/// Returns whether a tally session should stop on an unauthorized poll.
///
/// Retrieves the `POLL_STRICT` environment variable. When false (the default)
/// every non-success poll response is treated as a no-op tick and the session
/// keeps polling on its fixed schedule. When true, an unauthorized response
/// ends the session with an error instead of silently stalling the tally.
///
/// Accepted truthy values: `1`, `true`, `yes` (case-insensitive).
///
/// # Example
///
/// ```
/// let strict = poll_strict(); // false unless overridden
/// ```
pub fn poll_strict() -> bool {
    env::var("POLL_STRICT")
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
