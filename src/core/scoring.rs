use crate::models::{Place, ScoringWeights};

/// Default rating assumed for places without one
const DEFAULT_RATING: f64 = 3.5;

/// Number of fields counted toward completeness
const COMPLETENESS_FIELDS: f64 = 8.0;

/// Popularity lookup, checked in order; the first matching keyword pair wins
const CATEGORY_POPULARITY: [(&str, &str, f64); 7] = [
    ("attraction", "landmark", 1.0),
    ("restaurant", "food", 0.9),
    ("cafe", "dessert", 0.8),
    ("culture", "museum", 0.8),
    ("shopping", "market", 0.7),
    ("nature", "park", 0.7),
    ("activity", "experience", 0.6),
];

/// Composite score for a place in [0, 1]
///
/// Scoring formula:
/// score = rating_weight * normalized_rating
///       + completeness_weight * completeness
///       + category_weight * category_popularity
///       + tags_weight * tag_diversity
pub fn place_score(place: &Place, weights: &ScoringWeights) -> f64 {
    weights.rating * normalized_rating(place.rating)
        + weights.completeness * completeness(place)
        + weights.category * category_popularity(place.category.as_deref())
        + weights.tags * tag_diversity(&place.tags)
}

/// Rating scaled to [0, 1]; missing ratings assume 3.5 of 5
#[inline]
pub fn normalized_rating(rating: Option<f64>) -> f64 {
    rating.unwrap_or(DEFAULT_RATING) / 5.0
}

/// Share of the eight informative fields that are filled in
pub fn completeness(place: &Place) -> f64 {
    let mut filled = 0u8;

    if !place.name.trim().is_empty() {
        filled += 1;
    }
    if place.address.as_deref().is_some_and(|a| !a.trim().is_empty()) {
        filled += 1;
    }
    if place.coords().is_some() {
        filled += 1;
    }
    if place.category.as_deref().is_some_and(|c| !c.trim().is_empty()) {
        filled += 1;
    }
    if place.rating.is_some() {
        filled += 1;
    }
    if place.description.as_deref().is_some_and(|d| !d.trim().is_empty()) {
        filled += 1;
    }
    if place
        .operating_hours
        .as_deref()
        .is_some_and(|h| !h.trim().is_empty())
    {
        filled += 1;
    }
    if !place.tags.is_empty() {
        filled += 1;
    }

    f64::from(filled) / COMPLETENESS_FIELDS
}

/// Rough popularity weight per category family, substring-matched
pub fn category_popularity(category: Option<&str>) -> f64 {
    let Some(category) = category else {
        return 0.5;
    };
    let category = category.to_lowercase();

    for (a, b, score) in CATEGORY_POPULARITY {
        if category.contains(a) || category.contains(b) {
            return score;
        }
    }

    0.5
}

/// More tags, better coverage of a place's character; saturates at five
#[inline]
pub fn tag_diversity(tags: &[String]) -> f64 {
    (tags.len() as f64 / 5.0).min(1.0)
}
