use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::time::{MissedTickBehavior, interval};

use crate::{
    config, error, info,
    management::{PlaySession, TokenManager},
    spotify, success,
    types::PollOutcome,
    utils, warning,
};

/// Runs a play tally session until interrupted.
///
/// Samples the Spotify currently-playing endpoint on a fixed interval and
/// counts one observation per tick that reports a playing track. Every other
/// outcome (nothing playing, service error, failed request) is a no-op tick;
/// the schedule itself is the retry policy. The session ends on Ctrl-C, at
/// which point the leaderboard and a summary are printed.
///
/// # Arguments
///
/// * `interval_secs` - Polling cadence override; defaults to the configured
///   `POLL_INTERVAL_SECONDS`
/// * `limit` - Maximum number of leaderboard rows to print
/// * `live` - Re-render the leaderboard every time a play is counted
///
/// # Polling Discipline
///
/// One request is in flight at a time: the request is awaited inside the
/// loop body and missed ticks are delayed, so a slow response pushes the
/// next tick back instead of overlapping it. After the loop exits nothing
/// can touch the tally, which lives and dies with this function.
///
/// # Authorization
///
/// Refuses to start without a cached token. An unauthorized poll response
/// (typically an expired token) is reported once as a warning and otherwise
/// treated as a no-op; with `POLL_STRICT=true` it ends the session instead.
pub async fn track(interval_secs: Option<u64>, limit: Option<usize>, live: bool) {
    let token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run spotally auth\n Error: {}",
                e
            );
        }
    };

    if token_mgr.is_likely_expired() {
        warning!("Cached token has passed its advertised lifetime; polls may come back unauthorized.");
    }

    let period = interval_secs.unwrap_or_else(config::poll_interval_seconds).max(1);
    let strict = config::poll_strict();

    info!(
        "Polling every {}s. Press Ctrl-C to stop and print the leaderboard.",
        period
    );

    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for playback...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut session = PlaySession::new();
    let started = Instant::now();
    let mut warned_unauthorized = false;

    let mut ticker = interval(Duration::from_secs(period));
    // A slow in-flight request delays the next tick rather than stacking
    // a burst of catch-up ticks behind it.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = ticker.tick() => {
                let outcome =
                    match spotify::player::currently_playing(token_mgr.access_token()).await {
                        Ok(outcome) => outcome,
                        // Network failure: skip this tick, the next one retries.
                        Err(_) => continue,
                    };

                if outcome == PollOutcome::Unauthorized {
                    if strict {
                        pb.finish_and_clear();
                        error!(
                            "Spotify rejected the token. Run spotally auth --force to re-authorize."
                        );
                    }
                    if !warned_unauthorized {
                        warned_unauthorized = true;
                        pb.suspend(|| {
                            warning!(
                                "Spotify rejected the token; the tally will not move until you run spotally auth --force."
                            );
                        });
                    }
                }

                if let Some((identity, plays)) = session.apply(&outcome) {
                    pb.set_message(format!("♪ {} ({} plays)", identity, plays));
                    if live {
                        pb.suspend(|| print_leaderboard(&session, limit));
                    }
                }
            }
        }
    }

    pb.finish_and_clear();
    print_leaderboard(&session, limit);
    success!(
        "Session finished: {} ticks over {}, {} plays across {} tracks.",
        session.ticks(),
        utils::format_duration(started.elapsed().as_secs()),
        session.total_plays(),
        session.distinct_tracks()
    );
}

fn print_leaderboard(session: &PlaySession, limit: Option<usize>) {
    if session.is_empty() {
        info!("Nothing was counted this session.");
        return;
    }

    let rows = utils::build_track_rows(&session.leaderboard(), session.max_plays(), limit);
    let table = Table::new(rows);
    println!("{}", table);
}
