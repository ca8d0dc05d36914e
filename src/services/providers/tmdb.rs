/// TMDB API provider
///
/// API Flow:
/// 1. Details: /movie/{id}?append_to_response=credits,reviews
/// 2. Poster only: /movie/{id}
/// 3. People: /person/{id}?append_to_response=movie_credits
///
/// A 404 status or a `"success": false` payload means the resource does not
/// exist. Every other failure is reported as `Unavailable`.
use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    models::{ActorDetails, CrewMember, MovieDetails, TmdbMovie, TmdbPerson},
    services::providers::{MovieProvider, ProviderError, ProviderResult},
};

const POSTER_SIZE: &str = "w500";
const PROFILE_SIZE: &str = "w400";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_url: String,
}

impl TmdbProvider {
    /// Creates a provider whose requests time out after `timeout`
    pub fn new(
        api_key: String,
        api_url: String,
        image_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            image_url: image_url.trim_end_matches('/').to_string(),
        })
    }

    fn image(&self, size: &str, path: &str) -> String {
        format!("{}/{}{}", self.image_url, size, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        append: Option<&str>,
    ) -> ProviderResult<T> {
        let url = format!("{}/{}", self.api_url, path);

        let mut request = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())]);
        if let Some(append) = append {
            request = request.query(&[("append_to_response", append)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Unavailable(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::debug!(response = %response_text, "Raw TMDB response");
            ProviderError::Unavailable(format!("Failed to parse TMDB response: {}", e))
        })
    }

    /// Converts a raw movie payload, rejecting error payloads and untitled records
    fn details_from(&self, movie: TmdbMovie, tmdb_id: u64) -> ProviderResult<MovieDetails> {
        if movie.success == Some(false) {
            return Err(ProviderError::NotFound);
        }
        let title = match movie.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(ProviderError::NotFound),
        };

        let credits = movie.credits.unwrap_or_default();
        let director = first_with_job(&credits.crew, &["Director"]);
        let writer = first_with_job(&credits.crew, &["Screenplay", "Writer"]);

        Ok(MovieDetails {
            tmdb_id: movie.id.unwrap_or(tmdb_id),
            title,
            overview: movie.overview,
            poster_url: movie
                .poster_path
                .as_deref()
                .map(|path| self.image(POSTER_SIZE, path)),
            release_date: movie.release_date,
            vote_average: movie.vote_average,
            budget: movie.budget,
            revenue: movie.revenue,
            runtime: movie.runtime,
            genres: movie.genres.into_iter().map(|g| g.name).collect(),
            production_companies: movie
                .production_companies
                .into_iter()
                .map(|c| c.name)
                .collect(),
            cast: credits.cast,
            director,
            writer,
            reviews: movie.reviews.map(|page| page.results).unwrap_or_default(),
        })
    }

    fn actor_from(&self, person: TmdbPerson) -> ProviderResult<ActorDetails> {
        if person.success == Some(false) {
            return Err(ProviderError::NotFound);
        }

        Ok(ActorDetails {
            name: person.name,
            biography: person.biography,
            profile_url: person
                .profile_path
                .as_deref()
                .map(|path| self.image(PROFILE_SIZE, path)),
            movie_credits: person
                .movie_credits
                .map(|credits| credits.cast)
                .unwrap_or_default(),
        })
    }
}

fn first_with_job(crew: &[CrewMember], jobs: &[&str]) -> Option<CrewMember> {
    crew.iter()
        .find(|member| {
            member
                .job
                .as_deref()
                .is_some_and(|job| jobs.contains(&job))
        })
        .cloned()
}

#[async_trait::async_trait]
impl MovieProvider for TmdbProvider {
    async fn movie_details(&self, tmdb_id: u64) -> ProviderResult<MovieDetails> {
        let movie: TmdbMovie = self
            .get_json(&format!("movie/{}", tmdb_id), Some("credits,reviews"))
            .await?;
        let details = self.details_from(movie, tmdb_id)?;

        tracing::info!(
            tmdb_id = tmdb_id,
            cast = details.cast.len(),
            reviews = details.reviews.len(),
            provider = "tmdb",
            "Movie details fetched"
        );

        Ok(details)
    }

    async fn poster_url(&self, tmdb_id: u64) -> ProviderResult<Option<String>> {
        let movie: TmdbMovie = self.get_json(&format!("movie/{}", tmdb_id), None).await?;
        if movie.success == Some(false) {
            return Err(ProviderError::NotFound);
        }

        Ok(movie
            .poster_path
            .as_deref()
            .map(|path| self.image(POSTER_SIZE, path)))
    }

    async fn actor_details(&self, actor_id: u64) -> ProviderResult<ActorDetails> {
        let person: TmdbPerson = self
            .get_json(&format!("person/{}", actor_id), Some("movie_credits"))
            .await?;
        let actor = self.actor_from(person)?;

        tracing::info!(
            actor_id = actor_id,
            credits = actor.movie_credits.len(),
            provider = "tmdb",
            "Actor details fetched"
        );

        Ok(actor)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider() -> TmdbProvider {
        TmdbProvider::new(
            "test_key".to_string(),
            "http://test.local/3/".to_string(),
            "http://images.test.local/t/p".to_string(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    fn movie(json: &str) -> TmdbMovie {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_details_from_maps_fields() {
        let provider = create_test_provider();
        let details = provider
            .details_from(
                movie(
                    r#"{
                        "id": 603,
                        "title": "The Matrix",
                        "poster_path": "/matrix.jpg",
                        "genres": [{"name": "Action"}, {"name": "Science Fiction"}],
                        "production_companies": [{"name": "Village Roadshow"}],
                        "credits": {
                            "cast": [{"id": 1, "name": "Keanu Reeves", "character": "Neo"}],
                            "crew": [
                                {"id": 2, "name": "Joel Silver", "job": "Producer"},
                                {"id": 3, "name": "Lana Wachowski", "job": "Writer"},
                                {"id": 4, "name": "Lilly Wachowski", "job": "Director"}
                            ]
                        },
                        "reviews": {"results": [{"author": "a", "content": "Great"}]}
                    }"#,
                ),
                603,
            )
            .unwrap();

        assert_eq!(details.title, "The Matrix");
        assert_eq!(
            details.poster_url.as_deref(),
            Some("http://images.test.local/t/p/w500/matrix.jpg")
        );
        assert_eq!(details.genres, vec!["Action", "Science Fiction"]);
        assert_eq!(details.production_companies, vec!["Village Roadshow"]);
        assert_eq!(details.director.unwrap().name, "Lilly Wachowski");
        assert_eq!(details.writer.unwrap().name, "Lana Wachowski");
        assert_eq!(details.reviews.len(), 1);
    }

    #[test]
    fn test_details_from_without_credits_or_poster() {
        let provider = create_test_provider();
        let details = provider
            .details_from(movie(r#"{"title": "Obscure"}"#), 42)
            .unwrap();
        assert_eq!(details.tmdb_id, 42);
        assert!(details.poster_url.is_none());
        assert!(details.cast.is_empty());
        assert!(details.director.is_none());
        assert!(details.reviews.is_empty());
    }

    #[test]
    fn test_details_from_rejects_error_payloads() {
        let provider = create_test_provider();
        assert_eq!(
            provider.details_from(movie(r#"{"success": false}"#), 1),
            Err(ProviderError::NotFound)
        );
        assert_eq!(
            provider.details_from(movie(r#"{"id": 1, "title": ""}"#), 1),
            Err(ProviderError::NotFound)
        );
    }

    #[test]
    fn test_actor_from_builds_profile_url() {
        let provider = create_test_provider();
        let person: TmdbPerson =
            serde_json::from_str(r#"{"name": "Carrie-Anne Moss", "profile_path": "/cam.jpg"}"#)
                .unwrap();
        let actor = provider.actor_from(person).unwrap();
        assert_eq!(
            actor.profile_url.as_deref(),
            Some("http://images.test.local/t/p/w400/cam.jpg")
        );
        assert!(actor.movie_credits.is_empty());
    }

    #[test]
    fn test_api_url_trailing_slash_is_trimmed() {
        let provider = create_test_provider();
        assert_eq!(provider.api_url, "http://test.local/3");
    }
}
