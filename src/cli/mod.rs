//! # CLI Module
//!
//! This module provides the command-line interface layer for Spotally, a play
//! tally for the Spotify API. It implements all user-facing CLI commands and
//! coordinates between the Spotify client, token persistence, and the
//! in-memory session tally.
//!
//! ## Command Categories
//!
//! ### Authorization
//!
//! - [`auth`] - Runs the Spotify OAuth implicit-grant flow. A previously
//!   cached token short-circuits the flow unless forced.
//! - [`logout`] - Deletes the cached token. Because the implicit grant has
//!   no refresh token, this is the one recovery path once a token expires.
//!
//! ### Tally Operations
//!
//! - [`track`] - Runs a polling session: samples the currently-playing
//!   endpoint on a fixed interval, counts each observation of a track, and
//!   prints the leaderboard when the session is torn down with Ctrl-C.
//!
//! ### Information Commands
//!
//! - [`info`] - Shows cached-token status and the active polling policy.
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Token Persistence, Session Tally)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each CLI command delegates to the management and Spotify modules while
//! handling user interaction, progress feedback, and error presentation.
//!
//! ## Session Semantics
//!
//! A tally session owns all of its mutable state: the [`crate::management::PlaySession`]
//! is created when `track` starts, is mutated only by the polling loop, and
//! is dropped when the loop ends. Nothing about a session is persisted, and
//! no tick can mutate the tally after teardown because the tally does not
//! outlive the loop.
//!
//! ## Error Handling Philosophy
//!
//! - **Missing token**: commands that need one direct the user to `auth`
//! - **Failed polls**: skipped silently; the fixed schedule is the retry
//!   policy, there is no backoff
//! - **Unauthorized polls**: reported once as a warning (or fatal in strict
//!   mode) so an expired token is distinguishable from silence
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! spotally auth                    # Authorize with Spotify
//! spotally track                   # Start a tally session
//! ```
//!
//! ### Regular Usage
//! ```bash
//! spotally track --interval 10     # Poll every 10 seconds
//! spotally track --limit 10 --live # Re-render the top 10 as plays land
//! spotally info --token            # Check the cached token
//! ```

mod auth;
mod info;
mod logout;
mod track;

pub use auth::auth;
pub use info::info;
pub use logout::logout;
pub use track::track;
