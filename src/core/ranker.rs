use tracing::info;

use crate::core::filters::{
    is_open_during_trip, matches_budget, matches_categories, matches_style,
};
use crate::core::scoring::place_score;
use crate::models::{Place, ScoringWeights, UserPreferences};

/// Result of one filtering and ranking pass
#[derive(Debug)]
pub struct RankResult {
    pub places: Vec<Place>,
    pub total_candidates: usize,
}

/// Filter & ranking pipeline over deduplicated candidates
///
/// # Pipeline Stages
/// 1. Budget filter
/// 2. Travel-style filter
/// 3. Preferred-category filter
/// 4. Operating-window filter
/// 5. Composite score, stable descending sort
/// 6. Trip-day capacity cap
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank candidates for itinerary assembly
    ///
    /// Every stage is pure; the same input always yields the same output.
    /// Score ties keep the candidates' original relative order.
    pub fn rank(&self, places: Vec<Place>, preferences: &UserPreferences) -> RankResult {
        let total_candidates = places.len();

        let mut scored: Vec<(Place, f64)> = places
            .into_iter()
            .filter(|place| matches_budget(place, preferences.budget))
            .filter(|place| matches_style(place, preferences.travel_style))
            .filter(|place| matches_categories(place, &preferences.preferred_categories))
            .filter(|place| is_open_during_trip(place, preferences.travel_dates.as_ref()))
            .map(|place| {
                let score = place_score(&place, &self.weights);
                (place, score)
            })
            .collect();

        // Stable sort: equal scores preserve collection order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        scored.truncate(max_places(preferences.trip_days));

        let places: Vec<Place> = scored.into_iter().map(|(place, _)| place).collect();

        info!(
            total_candidates,
            selected = places.len(),
            style = ?preferences.travel_style,
            budget = ?preferences.budget,
            "ranking pass complete"
        );

        RankResult {
            places,
            total_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Shortlist size per trip length
fn max_places(trip_days: u8) -> usize {
    match trip_days {
        1 => 8,
        2 => 15,
        3 => 20,
        _ => 30,
    }
}
