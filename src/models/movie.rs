use serde::{Deserialize, Serialize};

use super::Review;

/// One entry of a similarity ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTitle {
    /// Corpus row
    pub index: usize,
    pub title: String,
    pub tmdb_id: Option<u64>,
    pub score: f64,
}

/// A recommendation as presented to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub tmdb_id: Option<u64>,
    pub title: String,
    pub poster_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Movie details resolved from the provider, with credits and reviews
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MovieDetails {
    pub tmdb_id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub poster_url: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub runtime: Option<u32>,
    pub genres: Vec<String>,
    pub production_companies: Vec<String>,
    pub cast: Vec<CastMember>,
    pub director: Option<CrewMember>,
    pub writer: Option<CrewMember>,
    pub reviews: Vec<Review>,
}

/// A movie credit on a person's filmography
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieCredit {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

/// Person details resolved from the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActorDetails {
    pub name: Option<String>,
    pub biography: Option<String>,
    pub profile_url: Option<String>,
    pub movie_credits: Vec<MovieCredit>,
}
