use std::collections::HashMap;

use crate::{
    types::{PlayCount, PollOutcome},
    utils,
};

/// In-memory tally of how many times each track has been observed playing
/// during the current session. Created empty when a session starts, mutated
/// only through [`PlaySession::apply`], and dropped with the session; no
/// play history is persisted.
pub struct PlaySession {
    counts: HashMap<String, u32>,
    ticks: u64,
}

impl PlaySession {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            ticks: 0,
        }
    }

    /// Folds one poll outcome into the tally. Only a `Playing` outcome
    /// mutates the counts; every other outcome is a no-op tick. Returns the
    /// counted identity and its updated play count when something was counted.
    pub fn apply(&mut self, outcome: &PollOutcome) -> Option<(String, u32)> {
        self.ticks += 1;

        match outcome {
            PollOutcome::Playing(now_playing) => {
                let identity = now_playing.identity();
                let plays = self.record(identity.clone());
                Some((identity, plays))
            }
            PollOutcome::NothingPlaying
            | PollOutcome::Unauthorized
            | PollOutcome::ServiceError(_) => None,
        }
    }

    pub fn record(&mut self, identity: String) -> u32 {
        let plays = self.counts.entry(identity).or_insert(0);
        *plays += 1;
        *plays
    }

    pub fn plays(&self, identity: &str) -> Option<u32> {
        self.counts.get(identity).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn distinct_tracks(&self) -> usize {
        self.counts.len()
    }

    pub fn total_plays(&self) -> u64 {
        self.counts.values().map(|c| u64::from(*c)).sum()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Largest play count in the tally, or 1 when it is empty. Used as the
    /// normalization denominator for the share bars in the leaderboard.
    pub fn max_plays(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(1)
    }

    /// Snapshot of the tally ordered by play count descending, with ties
    /// broken by identity so repeated renders are stable.
    pub fn leaderboard(&self) -> Vec<PlayCount> {
        let mut counts: Vec<PlayCount> = self
            .counts
            .iter()
            .map(|(identity, plays)| PlayCount {
                identity: identity.clone(),
                plays: *plays,
            })
            .collect();

        utils::sort_play_counts(&mut counts);
        counts
    }
}
