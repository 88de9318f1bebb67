//! # API-Football Integration Module
//!
//! Read-only access to the API-Football statistics service
//! (`https://v3.football.api-sports.io` by default).
//!
//! ## Overview
//!
//! Every request is a `GET {base_url}/{resource}` with two fixed headers,
//! `x-rapidapi-host` and `x-rapidapi-key`, taken from the [`ApiConfig`] the
//! client was built with. The service wraps every answer in an envelope:
//!
//! ```text
//! { "errors": [] | { "field": "message" }, "response": [ ... ] }
//! ```
//!
//! [`client::normalize`] unwraps it. List resources (teams, players of a
//! team) come back as [`Normalized::Many`]; a player looked up by id comes
//! back as [`Normalized::One`].
//!
//! ## Error Handling
//!
//! Transport failures, 401, 404, 429, any other non-200 status, malformed
//! bodies and envelope-reported errors are all turned into a
//! [`LookupError`]. Callers print its classification and carry on; nothing
//! here is fatal and nothing is retried.
//!
//! ## API Coverage
//!
//! - `GET /teams?league&season` - [`FootballClient::teams`]
//! - `GET /players?team&season` - [`FootballClient::players`]
//! - `GET /players?id&season` - [`FootballClient::player`]
//!
//! [`ApiConfig`]: crate::config::ApiConfig

pub mod client;
mod players;
mod teams;

pub use client::FootballClient;
pub use client::LookupError;
pub use client::Normalized;
pub use client::Resource;
