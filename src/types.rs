use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct AuthFlow {
    pub csrf_state: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlayingResponse {
    pub item: Option<PlayingItem>,
    #[serde(default)]
    pub is_playing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayingItem {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<ItemArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    // Stable service-side id, carried along but not part of the identity key.
    pub track_id: Option<String>,
    pub title: String,
    pub artists: Vec<String>,
}

impl NowPlaying {
    pub fn identity(&self) -> String {
        crate::utils::track_identity(&self.title, &self.artists)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Playing(NowPlaying),
    NothingPlaying,
    Unauthorized,
    ServiceError(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCount {
    pub identity: String,
    pub plays: u32,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub rank: usize,
    pub track: String,
    pub plays: u32,
    pub share: String,
}
