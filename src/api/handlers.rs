use std::cmp::Ordering;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{CastMember, CrewMember, Recommendation, Review, ScoredReview, SentimentSummary},
    services::{
        enrichment::{self, PLACEHOLDER_POSTER},
        providers::ProviderError,
        sentiment::{self, REVIEW_LIMIT},
        similarity::{FETCH_COUNT, PRESENT_COUNT},
        SimilarityRanker,
    },
};

use super::AppState;

/// Photo shown for people without a profile image
pub const PLACEHOLDER_PHOTO: &str = "https://placehold.co/400x600/1f2937/9ca3af?text=No+Photo";

const AUTOCOMPLETE_LIMIT: usize = 10;
const DETAILS_CAST_LIMIT: usize = 8;
const DETAILS_REVIEW_LIMIT: usize = 10;
const FILMOGRAPHY_LIMIT: usize = 10;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SentimentQuery {
    pub tmdb_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub tmdb_id: u64,
    pub title: String,
    pub poster_url: String,
    pub overview: String,
    pub release_date: String,
    pub vote_average: f64,
    pub genres: Vec<String>,
    pub production_companies: Vec<String>,
    pub budget: u64,
    pub revenue: u64,
    pub runtime: u32,
    pub cast: Vec<CastMember>,
    pub reviews: Vec<Review>,
    pub director: Option<CrewMember>,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub title: String,
    pub reviews: Vec<ScoredReview>,
    pub summary: SentimentSummary,
}

#[derive(Debug, Serialize)]
pub struct FilmographyEntry {
    pub title: Option<String>,
    pub character: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub name: Option<String>,
    pub biography: Option<String>,
    pub profile_path: String,
    pub filmography: Vec<FilmographyEntry>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommend movies similar to a title in the corpus
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let title = params
        .title
        .filter(|title| !title.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("Title required.".to_string()))?;

    let ranked = SimilarityRanker::new(&state.corpus).recommend(&title, FETCH_COUNT);
    if ranked.is_empty() {
        tracing::info!(request_id = %request_id, title = %title, "Title not in corpus");
        return Err(AppError::NotFound(format!("Movie '{}' not found.", title)));
    }

    let recommendations = enrichment::enrich(state.provider.as_ref(), ranked, PRESENT_COUNT).await;

    tracing::info!(
        request_id = %request_id,
        title = %title,
        results = recommendations.len(),
        "Recommendations served"
    );

    Ok(Json(recommendations))
}

/// Corpus titles starting with the query
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteQuery>,
) -> Json<Vec<String>> {
    let query = params.query.unwrap_or_default();
    let titles = state
        .corpus
        .titles_with_prefix(&query, AUTOCOMPLETE_LIMIT)
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(titles)
}

/// Movie details from the provider
pub async fn movie_details(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    path: Result<Path<u64>, PathRejection>,
) -> AppResult<Json<DetailsResponse>> {
    let not_available = || AppError::NotFound("Could not fetch movie details".to_string());

    // Non-numeric ids never match a movie
    let Path(tmdb_id) = path.map_err(|_| not_available())?;

    let details = state.provider.movie_details(tmdb_id).await.map_err(|e| {
        tracing::warn!(request_id = %request_id, tmdb_id = tmdb_id, error = %e, "Details lookup failed");
        not_available()
    })?;

    Ok(Json(DetailsResponse {
        tmdb_id: details.tmdb_id,
        title: details.title,
        poster_url: details
            .poster_url
            .unwrap_or_else(|| PLACEHOLDER_POSTER.to_string()),
        overview: details
            .overview
            .unwrap_or_else(|| "No overview available.".to_string()),
        release_date: details.release_date.unwrap_or_default(),
        vote_average: details.vote_average.unwrap_or_default(),
        genres: details.genres,
        production_companies: details.production_companies,
        budget: details.budget.unwrap_or_default(),
        revenue: details.revenue.unwrap_or_default(),
        runtime: details.runtime.unwrap_or_default(),
        cast: details.cast.into_iter().take(DETAILS_CAST_LIMIT).collect(),
        reviews: details
            .reviews
            .into_iter()
            .take(DETAILS_REVIEW_LIMIT)
            .collect(),
        director: details.director,
    }))
}

/// Sentiment breakdown of a movie's reviews
pub async fn sentiment(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SentimentQuery>,
) -> AppResult<Json<SentimentResponse>> {
    let raw_id = params
        .tmdb_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("TMDB ID required.".to_string()))?;

    let not_available = || AppError::NotFound("Could not fetch reviews.".to_string());

    // A malformed id is treated like a provider miss
    let tmdb_id: u64 = raw_id.trim().parse().map_err(|_| not_available())?;

    let details = state.provider.movie_details(tmdb_id).await.map_err(|e| {
        tracing::warn!(request_id = %request_id, tmdb_id = tmdb_id, error = %e, "Review lookup failed");
        not_available()
    })?;

    let (reviews, summary) = sentiment::summarize(&details.reviews, REVIEW_LIMIT);

    tracing::info!(
        request_id = %request_id,
        tmdb_id = tmdb_id,
        total = summary.total,
        positive = summary.positive_percent,
        negative = summary.negative_percent,
        "Sentiment computed"
    );

    Ok(Json(SentimentResponse {
        title: details.title,
        reviews,
        summary,
    }))
}

/// Actor biography and most popular movie roles
pub async fn actor_details(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    path: Result<Path<u64>, PathRejection>,
) -> AppResult<Json<ActorResponse>> {
    let Path(actor_id) = path.map_err(|_| AppError::NotFound("Actor not found".to_string()))?;

    let actor = state
        .provider
        .actor_details(actor_id)
        .await
        .map_err(|e| match e {
            ProviderError::NotFound => AppError::NotFound("Actor not found".to_string()),
            e => {
                tracing::warn!(request_id = %request_id, actor_id = actor_id, error = %e, "Actor lookup failed");
                AppError::Provider(e)
            }
        })?;

    let mut credits = actor.movie_credits;
    credits.sort_by(|a, b| {
        b.popularity
            .unwrap_or_default()
            .partial_cmp(&a.popularity.unwrap_or_default())
            .unwrap_or(Ordering::Equal)
    });

    Ok(Json(ActorResponse {
        name: actor.name,
        biography: actor.biography,
        profile_path: actor
            .profile_url
            .unwrap_or_else(|| PLACEHOLDER_PHOTO.to_string()),
        filmography: credits
            .into_iter()
            .take(FILMOGRAPHY_LIMIT)
            .map(|credit| FilmographyEntry {
                title: credit.title,
                character: credit.character,
            })
            .collect(),
    }))
}
