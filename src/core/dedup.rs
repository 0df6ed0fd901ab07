use tracing::{debug, info};

use crate::core::distance::place_distance;
use crate::core::text::{edit_distance, normalize_address};
use crate::models::Place;

/// Coordinate proximity treated as "same place" (100m)
const COORDINATE_PROXIMITY_KM: f64 = 0.1;

/// Maximum name edit distance treated as "same place"
const NAME_SIMILARITY_THRESHOLD: usize = 3;

/// Collapse a raw candidate stream into a unique, field-merged set
///
/// Output preserves the first-occurrence order of surviving entries.
/// Candidates with a blank name are dropped outright. Each incoming
/// candidate is compared against every accepted entry (O(n²) per pass);
/// callers with very large sets must pre-partition by region or category
/// before invoking this.
pub fn deduplicate(places: Vec<Place>) -> Vec<Place> {
    let total = places.len();
    let mut accepted: Vec<Place> = Vec::with_capacity(total);

    for candidate in places {
        if !candidate.has_name() {
            debug!(id = %candidate.id, "dropping candidate with blank name");
            continue;
        }

        // Index-based scan so the match can be merged in place
        let matched = accepted
            .iter()
            .position(|existing| is_same_place(&candidate, existing));

        match matched {
            Some(idx) => {
                debug!(
                    existing = %accepted[idx].name,
                    incoming = %candidate.name,
                    "merging duplicate place"
                );
                merge_into(&mut accepted[idx], candidate);
            }
            None => accepted.push(candidate),
        }
    }

    info!(total, unique = accepted.len(), "deduplication pass complete");
    accepted
}

/// Same-place test, rules in fixed priority order
///
/// 1. coordinates within 100m
/// 2. name edit distance <= 3 (case/space-insensitive)
/// 3. normalized addresses equal
///
/// The first satisfied rule wins. A rule whose inputs are missing on either
/// side is skipped, never treated as a match. Coordinate proximity
/// deliberately outranks disagreeing names and addresses.
fn is_same_place(a: &Place, b: &Place) -> bool {
    if let Some(distance) = place_distance(a, b) {
        if distance <= COORDINATE_PROXIMITY_KM {
            return true;
        }
    }

    if edit_distance(&a.name, &b.name) <= NAME_SIMILARITY_THRESHOLD {
        return true;
    }

    if let (Some(addr_a), Some(addr_b)) = (&a.address, &b.address) {
        if normalize_address(addr_a) == normalize_address(addr_b) {
            return true;
        }
    }

    false
}

/// Merge a duplicate candidate's fields into the accepted entry
///
/// The accepted entry keeps its id; on equal-quality fields the existing
/// value wins.
fn merge_into(existing: &mut Place, candidate: Place) {
    if char_len(&candidate.name) > char_len(&existing.name) {
        existing.name = candidate.name;
    }

    keep_longer(&mut existing.address, candidate.address);
    keep_longer(&mut existing.category, candidate.category);
    keep_longer(&mut existing.operating_hours, candidate.operating_hours);
    keep_longer(&mut existing.price_range, candidate.price_range);
    keep_longer(&mut existing.recommend_time, candidate.recommend_time);

    existing.description = merge_descriptions(existing.description.take(), candidate.description);
    existing.rating = merge_ratings(existing.rating, candidate.rating);
    merge_tags(&mut existing.tags, candidate.tags);
    existing.source = merge_sources(existing.source.take(), candidate.source);
    merge_coordinates(existing, candidate.latitude, candidate.longitude);

    // First-seen value wins for itinerary placement fields
    if existing.travel_style.is_none() {
        existing.travel_style = candidate.travel_style;
    }
    if existing.time_block.is_none() {
        existing.time_block = candidate.time_block;
    }
    if existing.day.is_none() {
        existing.day = candidate.day;
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Keep the longer non-null string; the existing value wins ties
fn keep_longer(existing: &mut Option<String>, candidate: Option<String>) {
    match (existing.as_deref(), candidate) {
        (None, c @ Some(_)) => *existing = c,
        (Some(e), Some(c)) if char_len(&c) > char_len(e) => *existing = Some(c),
        _ => {}
    }
}

/// Containment keeps the longer text, otherwise both are concatenated
fn merge_descriptions(a: Option<String>, b: Option<String>) -> Option<String> {
    match (a, b) {
        (Some(a), Some(b)) => {
            if a.contains(&b) || b.contains(&a) {
                Some(if char_len(&a) >= char_len(&b) { a } else { b })
            } else {
                Some(format!("{} {}", a, b))
            }
        }
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

/// Arithmetic mean rounded to one decimal place; a lone rating is kept as-is
fn merge_ratings(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(((a + b) / 2.0 * 10.0).round() / 10.0),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

/// Set union preserving first-seen order
fn merge_tags(existing: &mut Vec<String>, incoming: Vec<String>) {
    for tag in incoming {
        if !existing.contains(&tag) {
            existing.push(tag);
        }
    }
}

/// Concatenate distinct source labels, skipping an exact duplicate
fn merge_sources(a: Option<String>, b: Option<String>) -> Option<String> {
    match (a, b) {
        (Some(a), Some(b)) => {
            if a == b {
                Some(a)
            } else {
                Some(format!("{}, {}", a, b))
            }
        }
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

/// Keep whichever coordinate pair carries more fractional digits in its
/// display representation, as a precision proxy; the existing pair wins ties
fn merge_coordinates(existing: &mut Place, lat: Option<f64>, lon: Option<f64>) {
    let candidate = match (lat, lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return,
    };

    let replace = match existing.coords() {
        None => true,
        Some(current) => pair_precision(candidate) > pair_precision(current),
    };

    if replace {
        existing.latitude = Some(candidate.0);
        existing.longitude = Some(candidate.1);
    }
}

fn pair_precision((lat, lon): (f64, f64)) -> usize {
    fractional_digits(lat) + fractional_digits(lon)
}

fn fractional_digits(value: f64) -> usize {
    let repr = value.to_string();
    repr.split('.').nth(1).map_or(0, str::len)
}
