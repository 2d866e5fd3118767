pub mod movie;
pub mod response;

pub use movie::{MovieRecord, Recommendation};
pub use response::{RecommendQuery, RecommendResponse, NOT_FOUND_HINT, NOT_FOUND_MESSAGE};
