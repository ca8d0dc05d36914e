use serde::{Deserialize, Serialize};

/// A third-party review as supplied by the movie provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Review {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            content: Some(content.into()),
        }
    }
}

/// Discrete polarity of a compound sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// A review annotated with its sentiment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredReview {
    pub author: String,
    pub content: Option<String>,
    pub label: SentimentLabel,
    /// Compound score rounded to two decimals
    pub score: f64,
}

/// Label distribution over a batch of reviews.
///
/// Percentages are rounded independently and may not sum to exactly 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub positive_percent: u32,
    pub neutral_percent: u32,
    pub negative_percent: u32,
}
