//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the play
//! tally: authorization via the OAuth 2.0 implicit grant and sampling of the
//! current-playback endpoint. It abstracts away HTTP communication, the
//! redirect/callback mechanics, and response classification, providing a
//! clean Rust interface for the CLI layer.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 implicit grant)
//!     └── Player Operations (currently playing)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements the implicit grant: the access token is returned
//! directly in the redirect fragment rather than via a server-side code
//! exchange, so there is no client secret and no refresh token.
//!
//! 1. **State Generation**: a random `state` value guards the redirect
//! 2. **Authorization Request**: the user's browser is sent to Spotify with
//!    `response_type=token`
//! 3. **Local Callback**: a temporary HTTP server receives the redirect and
//!    relays the token fragment (see [`crate::api`])
//! 4. **Token Storage**: the token is persisted for future sessions
//!
//! Because the grant cannot be refreshed, an expired token simply starts
//! producing unauthorized poll responses; [`player`] surfaces that as an
//! explicit outcome instead of folding it into "nothing playing".
//!
//! ## Player Operations
//!
//! [`player`] wraps `GET /me/player/currently-playing` and classifies each
//! response into a [`crate::types::PollOutcome`]:
//!
//! - 200 with an `item` - a track to count
//! - 200 without an `item`, or 204 - nothing to record (paused, stopped,
//!   or nothing queued)
//! - 401/403 - unauthorized, most likely an expired token
//! - anything else - a service error, skipped by the poller
//!
//! ## Error Types
//!
//! Transport-level failures surface as `reqwest::Error`; everything the API
//! itself reports is modeled in `PollOutcome` so the polling loop can treat
//! status handling as data rather than control flow.

pub mod auth;
pub mod player;
