//! Content-based movie recommendations over HTTP.
//!
//! Startup loads four static artifacts into a read-only [`data::MovieContext`];
//! each request resolves a title and ranks every movie by cosine similarity of
//! their overview features.

pub mod api;
pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
