// Core algorithm exports
pub mod dedup;
pub mod distance;
pub mod filters;
pub mod ranker;
pub mod scoring;
pub mod text;

pub use dedup::deduplicate;
pub use distance::{haversine_distance, DistanceBand};
pub use filters::{is_open_during_trip, matches_budget, matches_categories, matches_style};
pub use ranker::{RankResult, Ranker};
pub use scoring::place_score;
pub use text::{edit_distance, normalize_address};
