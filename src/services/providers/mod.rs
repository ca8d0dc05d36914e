/// Movie data provider abstraction
///
/// The core never talks HTTP itself. Details, posters and people come from a
/// `MovieProvider`, whose failures arrive as a typed `ProviderError` rather
/// than a raw transport error.
use crate::models::{ActorDetails, MovieDetails};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Outcome of a failed provider lookup
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider has no record for the identifier
    #[error("resource not found")]
    NotFound,

    /// Transport failure, timeout, error status or malformed payload
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Trait for movie metadata providers, keyed by integer identifier
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Fetch full movie details with credits and reviews
    async fn movie_details(&self, tmdb_id: u64) -> ProviderResult<MovieDetails>;

    /// Fetch only the poster URL for a movie; `Ok(None)` when it has no poster
    async fn poster_url(&self, tmdb_id: u64) -> ProviderResult<Option<String>>;

    /// Fetch a person with their movie credits
    async fn actor_details(&self, actor_id: u64) -> ProviderResult<ActorDetails>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
