use futures::future::join_all;

use crate::{
    models::{RankedTitle, Recommendation},
    services::providers::{MovieProvider, ProviderError},
};

/// Poster shown when the provider has none or cannot be reached
pub const PLACEHOLDER_POSTER: &str = "https://placehold.co/500x750/1f2937/9ca3af?text=No+Poster";

/// Attaches posters to a ranked superset and presents the first `present`.
///
/// Poster lookups run concurrently. Ranked order is kept. An entry is dropped
/// only when the provider reports it does not exist; an unreachable provider
/// or a missing poster falls back to the placeholder.
pub async fn enrich(
    provider: &dyn MovieProvider,
    ranked: Vec<RankedTitle>,
    present: usize,
) -> Vec<Recommendation> {
    let lookups = ranked.into_iter().map(move |candidate| async move {
        let poster_url = match candidate.tmdb_id {
            Some(tmdb_id) => match provider.poster_url(tmdb_id).await {
                Ok(poster) => poster,
                Err(ProviderError::NotFound) => {
                    tracing::debug!(
                        tmdb_id = tmdb_id,
                        title = %candidate.title,
                        "Dropping recommendation unknown to provider"
                    );
                    return None;
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        tmdb_id = tmdb_id,
                        provider = provider.name(),
                        "Poster lookup failed, using placeholder"
                    );
                    None
                }
            },
            None => None,
        };

        Some(Recommendation {
            tmdb_id: candidate.tmdb_id,
            title: candidate.title,
            poster_url: poster_url.unwrap_or_else(|| PLACEHOLDER_POSTER.to_string()),
        })
    });

    join_all(lookups)
        .await
        .into_iter()
        .flatten()
        .take(present)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockMovieProvider;

    fn ranked(ids: &[Option<u64>]) -> Vec<RankedTitle> {
        ids.iter()
            .enumerate()
            .map(|(i, tmdb_id)| RankedTitle {
                index: i,
                title: format!("Movie {i}"),
                tmdb_id: *tmdb_id,
                score: 1.0 - i as f64 * 0.01,
            })
            .collect()
    }

    fn provider() -> MockMovieProvider {
        let mut provider = MockMovieProvider::new();
        provider.expect_name().return_const("mock");
        provider
    }

    #[test]
    fn test_enrich_attaches_posters_in_order() {
        let mut provider = provider();
        provider
            .expect_poster_url()
            .returning(|id| Ok(Some(format!("https://img/{id}.jpg"))));

        let result = tokio_test::block_on(enrich(&provider, ranked(&[Some(1), Some(2)]), 10));

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Movie 0");
        assert_eq!(result[0].poster_url, "https://img/1.jpg");
        assert_eq!(result[1].tmdb_id, Some(2));
    }

    #[test]
    fn test_enrich_falls_back_to_placeholder() {
        let mut provider = provider();
        provider.expect_poster_url().returning(|id| match id {
            1 => Ok(None),
            _ => Err(ProviderError::Unavailable("timeout".to_string())),
        });

        let result =
            tokio_test::block_on(enrich(&provider, ranked(&[Some(1), Some(2), None]), 10));

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|r| r.poster_url == PLACEHOLDER_POSTER));
        assert_eq!(result[2].tmdb_id, None);
    }

    #[test]
    fn test_enrich_drops_unknown_and_backfills_from_superset() {
        let mut provider = provider();
        provider.expect_poster_url().returning(|id| {
            if id % 2 == 0 {
                Err(ProviderError::NotFound)
            } else {
                Ok(Some(format!("https://img/{id}.jpg")))
            }
        });

        let ids: Vec<Option<u64>> = (1..=20).map(Some).collect();
        let result = tokio_test::block_on(enrich(&provider, ranked(&ids), 5));

        let presented: Vec<Option<u64>> = result.iter().map(|r| r.tmdb_id).collect();
        assert_eq!(
            presented,
            vec![Some(1), Some(3), Some(5), Some(7), Some(9)]
        );
    }

    #[test]
    fn test_enrich_without_ids_never_calls_provider() {
        let mut provider = provider();
        provider.expect_poster_url().never();

        let result = tokio_test::block_on(enrich(&provider, ranked(&[None, None]), 10));
        assert_eq!(result.len(), 2);
    }
}
