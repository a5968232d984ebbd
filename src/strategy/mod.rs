//! Move selection for the fugitive.

pub mod scoring;
pub mod shortest_path;

pub use scoring::{DistanceStrategy, Strategy};
pub use shortest_path::{distance_between, distances_from};
