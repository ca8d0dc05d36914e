//! Review sentiment: a VADER compound scorer and a batch aggregator.
//!
//! Everything here is pure and stateless, safe to call from any handler.

mod aggregator;
mod analyzer;

pub use aggregator::{summarize, REVIEW_LIMIT};
pub use analyzer::{classify, score, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
