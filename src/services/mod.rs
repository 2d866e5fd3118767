pub mod ranking;
pub mod recommendations;

pub use ranking::{rank, ScoredRow, DEFAULT_LIMIT};
pub use recommendations::{MovieRecommender, Recommender};
