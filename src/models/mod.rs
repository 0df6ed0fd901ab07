// Model exports
pub mod domain;

pub use domain::{
    Budget, Cluster, DateRange, DateRangeError, Place, ScoringWeights, TravelStyle,
    UserPreferences,
};
