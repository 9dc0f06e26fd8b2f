//! # API Module
//!
//! This module provides HTTP API endpoints for the Spotally application's web
//! server functionality. It implements the endpoints needed to complete the
//! OAuth implicit-grant flow plus a health check.
//!
//! ## Overview
//!
//! The API module serves as the web interface layer for Spotally, a
//! command-line play tally for the Spotify API. The implicit grant returns
//! the access token in the *fragment* of the redirect URL, and fragments are
//! never transmitted to a server, so the flow needs two endpoints:
//!
//! - [`callback`] - The redirect target. Serves a minimal relay page whose
//!   script re-issues the fragment as the query string of `/token` using
//!   `location.replace`, which also clears the token-bearing URL from the
//!   visible address bar and browser history.
//! - [`token`] - Receives the relayed fragment verbatim, parses out the
//!   `access_token`, verifies the `state` value, and fills the shared
//!   authorization slot the CLI is waiting on.
//!
//! ### Monitoring
//!
//! - [`health`] - Provides a health check endpoint that returns application
//!   status and version information.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is implemented as an async function that integrates into
//! Axum's routing system; flow state is shared via an `Extension` layer.
//!
//! ## Security Considerations
//!
//! - A random `state` parameter ties the redirect to the authorization
//!   request that started it; a mismatched state discards the token
//! - The relay page never logs or stores the fragment; it exists in the
//!   browser only long enough to be forwarded
//! - Handles missing or malformed fragments gracefully with error responses
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotally::api::{callback, health, token};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/token", get(token))
//!     .route("/health", get(health));
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::spotify`] - Spotify API integration
//! - [`crate::types`] - Type definitions for authorization state

mod callback;
mod health;

pub use callback::callback;
pub use callback::token;
pub use health::health;
