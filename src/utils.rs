use std::cmp::Ordering;

use rand::{Rng, distr::Alphanumeric};

use crate::types::{PlayCount, TrackTableRow};

const SHARE_BAR_WIDTH: u32 = 20;

pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFragment {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub state: Option<String>,
}

/// Parses the fragment Spotify appends after an implicit-grant redirect.
///
/// The input is the raw `key=value&key=value` string, with or without a
/// leading `#` or `?`. Returns `None` when no non-empty `access_token`
/// parameter is present; unknown parameters are ignored and a missing
/// `expires_in` falls back to Spotify's documented default of 3600 seconds.
pub fn parse_token_fragment(fragment: &str) -> Option<ParsedFragment> {
    let raw = fragment.trim_start_matches(['#', '?']);

    let mut access_token = None;
    let mut token_type = None;
    let mut expires_in = None;
    let mut state = None;

    for pair in raw.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" => access_token = Some(value.to_string()),
            "token_type" => token_type = Some(value.to_string()),
            "expires_in" => expires_in = value.parse::<u64>().ok(),
            "state" => state = Some(value.to_string()),
            _ => {}
        }
    }

    let access_token = access_token.filter(|t| !t.is_empty())?;

    Some(ParsedFragment {
        access_token,
        token_type: token_type.unwrap_or_else(|| "Bearer".to_string()),
        expires_in: expires_in.unwrap_or(3600),
        state,
    })
}

/// Derives the tally key for a track: title plus comma-joined artist names
/// in the order the API lists them. Two responses with the same title and
/// artists count as the same track even if their service-side ids differ.
pub fn track_identity(title: &str, artists: &[String]) -> String {
    format!("{} - {}", title, artists.join(", "))
}

pub fn sort_play_counts(counts: &mut Vec<PlayCount>) {
    counts.sort_by(|a, b| {
        match b.plays.cmp(&a.plays) {
            Ordering::Equal => a.identity.cmp(&b.identity), // secondary sort: identity ascending
            other => other,
        }
    });
}

pub fn build_track_rows(
    counts: &[PlayCount],
    max_plays: u32,
    limit: Option<usize>,
) -> Vec<TrackTableRow> {
    let max_plays = max_plays.max(1);
    let shown = limit.unwrap_or(counts.len());

    counts
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, count)| TrackTableRow {
            rank: i + 1,
            track: count.identity.clone(),
            plays: count.plays,
            share: share_bar(count.plays, max_plays),
        })
        .collect()
}

fn share_bar(plays: u32, max_plays: u32) -> String {
    let width = (plays * SHARE_BAR_WIDTH) / max_plays;
    "█".repeat(width.max(1) as usize)
}

pub fn format_duration(total_secs: u64) -> String {
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    if mins > 0 {
        format!("{}m {:02}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}
