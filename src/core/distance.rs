use crate::models::Place;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two places, or None when either lacks coordinates
#[inline]
pub fn place_distance(a: &Place, b: &Place) -> Option<f64> {
    let (lat1, lon1) = a.coords()?;
    let (lat2, lon2) = b.coords()?;
    Some(haversine_distance(lat1, lon1, lat2, lon2))
}

/// Minimum distance from a place to any of the reference places
///
/// Returns 0.0 when the place has no coordinates or no reference is usable,
/// matching the optimistic defaults used elsewhere in the engine.
pub fn min_distance_km(place: &Place, references: &[Place]) -> f64 {
    references
        .iter()
        .filter_map(|r| place_distance(place, r))
        .fold(None::<f64>, |acc, d| Some(acc.map_or(d, |m| m.min(d))))
        .unwrap_or(0.0)
}

/// Average distance from a place to the reference places
pub fn average_distance_km(place: &Place, references: &[Place]) -> f64 {
    let distances: Vec<f64> = references
        .iter()
        .filter_map(|r| place_distance(place, r))
        .collect();

    if distances.is_empty() {
        return 0.0;
    }

    distances.iter().sum::<f64>() / distances.len() as f64
}

/// Total distance of a sequential route through the given places
///
/// Legs with missing coordinates contribute nothing.
pub fn total_route_km(places: &[Place]) -> f64 {
    places
        .windows(2)
        .filter_map(|pair| place_distance(&pair[0], &pair[1]))
        .sum()
}

/// Coarse banding of an inter-place distance, used by the itinerary layer
/// to decide between walking and transit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceBand {
    Walkable,
    Near,
    Far,
}

impl DistanceBand {
    pub fn of(distance_km: f64) -> Self {
        if distance_km <= 2.0 {
            Self::Walkable
        } else if distance_km <= 5.0 {
            Self::Near
        } else {
            Self::Far
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_at(id: &str, lat: f64, lon: f64) -> Place {
        Place {
            id: id.to_string(),
            name: format!("Place {}", id),
            address: None,
            latitude: Some(lat),
            longitude: Some(lon),
            category: None,
            rating: None,
            description: None,
            operating_hours: None,
            price_range: None,
            tags: vec![],
            source: None,
            travel_style: None,
            time_block: None,
            day: None,
            recommend_time: None,
        }
    }

    #[test]
    fn test_haversine_distance() {
        // Hongdae to Gangnam is approximately 12 km
        let distance = haversine_distance(37.5563, 126.9234, 37.5172, 127.0473);
        assert!((distance - 11.7).abs() < 1.0, "expected ~11.7km, got {}", distance);
    }

    #[test]
    fn test_haversine_zero_distance() {
        let distance = haversine_distance(37.5563, 126.9234, 37.5563, 126.9234);
        assert!(distance < 0.001);
    }

    #[test]
    fn test_place_distance_missing_coords() {
        let a = place_at("a", 37.55, 126.92);
        let mut b = place_at("b", 37.51, 127.04);
        b.latitude = None;

        assert!(place_distance(&a, &b).is_none());
    }

    #[test]
    fn test_min_and_average_distance() {
        let place = place_at("p", 37.5563, 126.9234);
        let refs = vec![
            place_at("r1", 37.5563, 126.9234), // same point
            place_at("r2", 37.5172, 127.0473), // ~12km
        ];

        assert!(min_distance_km(&place, &refs) < 0.001);

        let avg = average_distance_km(&place, &refs);
        assert!(avg > 4.0 && avg < 8.0);
    }

    #[test]
    fn test_distances_default_to_zero_without_references() {
        let place = place_at("p", 37.5563, 126.9234);
        assert_eq!(min_distance_km(&place, &[]), 0.0);
        assert_eq!(average_distance_km(&place, &[]), 0.0);
    }

    #[test]
    fn test_total_route() {
        let route = vec![
            place_at("a", 37.5563, 126.9234),
            place_at("b", 37.5735, 126.9788),
            place_at("c", 37.5172, 127.0473),
        ];

        let total = total_route_km(&route);
        let leg1 = place_distance(&route[0], &route[1]).unwrap();
        let leg2 = place_distance(&route[1], &route[2]).unwrap();
        assert!((total - (leg1 + leg2)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_bands() {
        assert_eq!(DistanceBand::of(0.5), DistanceBand::Walkable);
        assert_eq!(DistanceBand::of(2.0), DistanceBand::Walkable);
        assert_eq!(DistanceBand::of(3.5), DistanceBand::Near);
        assert_eq!(DistanceBand::of(12.0), DistanceBand::Far);
    }
}
