use serde::Deserialize;

mod movie;
mod review;

pub use movie::{
    ActorDetails, CastMember, CrewMember, MovieCredit, MovieDetails, RankedTitle, Recommendation,
};
pub use review::{Review, ScoredReview, SentimentLabel, SentimentSummary};

// ============================================================================
// TMDB API Types
// ============================================================================

/// Raw response from GET /movie/{id}?append_to_response=credits,reviews
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub revenue: Option<u64>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<TmdbNamed>,
    #[serde(default)]
    pub production_companies: Vec<TmdbNamed>,
    #[serde(default)]
    pub credits: Option<TmdbCredits>,
    #[serde(default)]
    pub reviews: Option<TmdbPage<Review>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbNamed {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Raw response from GET /person/{id}?append_to_response=movie_credits
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPerson {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub movie_credits: Option<TmdbMovieCredits>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMovieCredits {
    #[serde(default)]
    pub cast: Vec<MovieCredit>,
}
