use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{AuthFlow, Token},
    utils, warning,
};

/// Runs the OAuth 2.0 implicit-grant authorization flow with Spotify.
///
/// This function orchestrates the entire authorization process:
/// 1. Checking for a previously persisted token (which takes precedence
///    over starting a new flow unless `force` is set)
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser with
///    `response_type=token` and a random `state` value
/// 4. Waiting for the redirect fragment to be relayed back by the callback
///    handler
/// 5. Persisting the obtained token for future sessions
///
/// The implicit grant returns the access token directly in the redirect
/// fragment; there is no code exchange, no client secret, and no refresh
/// token. Once the token expires, the only recovery is running this flow
/// again.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe slot shared with the callback handler,
///   carrying the expected `state` value in and the captured token out
/// * `force` - Run a fresh authorization even when a cached token exists
///
/// # Error Handling
///
/// - An existing cached token short-circuits the flow; storage is not
///   touched again (resolution is idempotent)
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authorization timeouts or a missing/mismatched fragment terminate with
///   an error message
pub async fn auth(shared_state: Arc<Mutex<Option<AuthFlow>>>, force: bool) {
    // Returning-session fast path: a persisted token wins over a new flow.
    if !force {
        if let Ok(manager) = TokenManager::load().await {
            if manager.is_likely_expired() {
                warning!(
                    "Cached token has passed its advertised lifetime. Re-run with --force to re-authorize."
                );
            }
            success!("Already authorized, using the cached token.");
            return;
        }
    }

    let csrf_state = utils::generate_state();

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=token&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        scope = &config::spotify_scope().replace(' ', "%20"),
        state = csrf_state
    );

    // Store the expected state before the redirect can come back
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthFlow {
            csrf_state,
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authorization successful!");
        }
        None => {
            error!("Authorization failed or timed out.");
        }
    }
}

/// Waits for the callback handler to capture a token.
///
/// Polls the shared state once per second with a 120-second timeout. This
/// runs concurrently with the HTTP server that fills the slot after the
/// redirect fragment has been relayed and its `state` verified.
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthFlow>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(120);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(flow) = lock.as_ref() {
            if let Some(token) = &flow.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
