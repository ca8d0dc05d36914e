use crate::models::{Review, ScoredReview, SentimentLabel, SentimentSummary};

use super::analyzer::{classify, score};

/// Maximum number of reviews scored per request
pub const REVIEW_LIMIT: usize = 25;

const ANONYMOUS: &str = "Anonymous";

/// Scores the first `limit` reviews in input order and summarizes the labels.
pub fn summarize(reviews: &[Review], limit: usize) -> (Vec<ScoredReview>, SentimentSummary) {
    let scored: Vec<ScoredReview> = reviews.iter().take(limit).map(score_review).collect();
    let summary = summary_of(&scored);
    (scored, summary)
}

fn score_review(review: &Review) -> ScoredReview {
    let compound = score(review.content.as_deref().unwrap_or_default());

    ScoredReview {
        author: review
            .author
            .clone()
            .unwrap_or_else(|| ANONYMOUS.to_string()),
        content: review.content.clone(),
        label: classify(compound),
        score: round_to_hundredths(compound),
    }
}

fn summary_of(scored: &[ScoredReview]) -> SentimentSummary {
    let total = scored.len();
    let count = |label: SentimentLabel| scored.iter().filter(|r| r.label == label).count();

    SentimentSummary {
        total,
        positive_percent: percent(count(SentimentLabel::Positive), total),
        neutral_percent: percent(count(SentimentLabel::Neutral), total),
        negative_percent: percent(count(SentimentLabel::Negative), total),
    }
}

/// Rounds half to even, each label independently; the three need not sum to 100.
fn percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round_ties_even() as u32
}

/// Half to even on exact ties, like the percentages.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
