use chrono::DateTime;

use crate::{config, info, management::TokenManager, warning};

/// Displays information about the application state and configuration.
///
/// With `--token`, reports whether a token is cached, when it was obtained,
/// and whether its advertised lifetime has elapsed. Without flags, shows the
/// active polling policy (interval, strict mode, requested scope).
///
/// # Example Usage
///
/// ```bash
/// # Check the cached token
/// spotally info --token
///
/// # Show the polling policy
/// spotally info
/// ```
pub async fn info(token: bool) {
    if token {
        match TokenManager::load().await {
            Ok(manager) => {
                let t = manager.current_token();
                let obtained = DateTime::from_timestamp(t.obtained_at as i64, 0)
                    .map(|dt| dt.to_rfc3339())
                    .unwrap_or_else(|| t.obtained_at.to_string());

                info!("Token cached: yes");
                info!("Token type: {}", t.token_type);
                info!("Obtained at: {}", obtained);
                info!("Advertised lifetime: {}s", t.expires_in);
                if manager.is_likely_expired() {
                    warning!(
                        "Token has passed its advertised lifetime. Run spotally auth --force."
                    );
                }
            }
            Err(_) => {
                info!("Token cached: no");
                info!("Run spotally auth to authorize.");
            }
        }
        return;
    }

    info!("Poll interval: {}s", config::poll_interval_seconds());
    info!("Strict polling: {}", config::poll_strict());
    info!("Requested scope: {}", config::spotify_scope());
}
