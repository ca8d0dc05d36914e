//! Movie recommendation and review sentiment service.
//!
//! Recommendations come from exact cosine ranking over a precomputed,
//! immutable vector corpus. Review sentiment is scored with the rule-based
//! VADER lexicon analyzer. Movie metadata is fetched from TMDB.

pub mod api;
pub mod config;
pub mod corpus;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

pub use error::{AppError, AppResult};
