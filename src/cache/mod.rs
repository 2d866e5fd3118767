//! Optional Redis cache in front of the recommend endpoint.

pub mod store;

mod macros;

pub use store::{Cache, CacheKey, CacheWriterHandle};
