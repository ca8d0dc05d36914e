pub mod enrichment;
pub mod providers;
pub mod sentiment;
pub mod similarity;

pub use similarity::SimilarityRanker;
