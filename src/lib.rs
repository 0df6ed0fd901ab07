//! Roam Algo - Candidate reconciliation and ranking engine for the Roam travel planner
//!
//! This library provides the core place-selection algorithms used by the Roam
//! travel-planning backend: deduplication of provider candidates, a
//! preference-based filtering and ranking pipeline, and cluster quota
//! allocation for per-district collection scheduling.

pub mod clusters;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use clusters::ClusterCatalog;
pub use self::core::{dedup::deduplicate, distance::haversine_distance, RankResult, Ranker};
pub use models::{Budget, Cluster, DateRange, Place, ScoringWeights, TravelStyle, UserPreferences};
