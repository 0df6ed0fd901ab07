// Integration tests for Roam Algo

use roam_algo::core::scoring::place_score;
use roam_algo::{
    deduplicate, Budget, ClusterCatalog, DateRange, Place, Ranker, ScoringWeights, TravelStyle,
    UserPreferences,
};

fn place(id: &str, name: &str) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        address: None,
        latitude: None,
        longitude: None,
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

fn preferences(style: TravelStyle, budget: Budget, trip_days: u8) -> UserPreferences {
    UserPreferences {
        travel_style: style,
        budget,
        preferred_categories: vec![],
        travel_dates: None,
        trip_days,
        party_size: 2,
    }
}

#[test]
fn test_dedup_is_idempotent() {
    let mut a = place("1", "Gyeongbokgung Palace");
    a.latitude = Some(37.5796);
    a.longitude = Some(126.977);
    a.rating = Some(4.6);

    let mut b = place("2", "Gwangjang Market");
    b.address = Some("88 Changgyeonggung-ro".to_string());

    let c = place("3", "Namsan Seoul Tower");

    let once = deduplicate(vec![a, b, c]);
    let twice = deduplicate(once.clone());

    assert_eq!(once.len(), twice.len());
    for (x, y) in once.iter().zip(twice.iter()) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.rating, y.rating);
        assert_eq!(x.address, y.address);
    }
}

#[test]
fn test_nearby_coordinates_merge_despite_different_everything() {
    let mut a = place("1", "Common Ground");
    a.latitude = Some(37.5407);
    a.longitude = Some(127.0659);
    a.address = Some("200 Achasan-ro".to_string());

    let mut b = place("2", "Container Mall Kondae");
    b.latitude = Some(37.54065);
    b.longitude = Some(127.06588);
    b.address = Some("Jayang-dong 17-1".to_string());

    let result = deduplicate(vec![a, b]);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_similar_names_merge_without_coordinates() {
    let a = place("1", "Bukchon Hanok Village");
    let b = place("2", "bukchon hanok villages ");

    let result = deduplicate(vec![a, b]);
    assert_eq!(result.len(), 1);
}

// Scenario: two provider records for Myeongdong Cathedral, 15m apart,
// ratings 4.5 and 4.7, must collapse into one entry rated 4.6.
#[test]
fn test_myeongdong_cathedral_scenario() {
    let mut a = place("kakao-1", "Myeongdong Cathedral");
    a.latitude = Some(37.6336);
    a.longitude = Some(126.9750);
    a.rating = Some(4.5);

    let mut b = place("tour-9", "myeongdong cathedral ");
    b.latitude = Some(37.6337);
    b.longitude = Some(126.9751);
    b.rating = Some(4.7);

    let result = deduplicate(vec![a, b]);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].rating, Some(4.6));
}

// Scenario: 20 candidates, half priced $$$, low-budget foodie day trip.
// Every $$$ candidate is excluded and the shortlist is capped at 8.
#[test]
fn test_low_budget_day_trip_scenario() {
    let candidates: Vec<Place> = (0..20)
        .map(|i| {
            let mut p = place(&format!("p{}", i), &format!("Restaurant {}", i));
            p.category = Some("restaurant".to_string());
            p.rating = Some(3.0 + (i % 5) as f64 * 0.4);
            p.price_range = Some(if i % 2 == 0 { "$$$" } else { "$" }.to_string());
            p
        })
        .collect();

    let ranker = Ranker::with_default_weights();
    let prefs = preferences(TravelStyle::Foodie, Budget::Low, 1);
    let result = ranker.rank(candidates, &prefs);

    assert!(result.places.len() <= 8);
    assert!(!result.places.is_empty());
    for p in &result.places {
        assert_ne!(p.price_range.as_deref(), Some("$$$"));
    }
}

#[test]
fn test_rank_order_matches_score_recomputation() {
    let weights = ScoringWeights::default();
    let candidates: Vec<Place> = (0..12)
        .map(|i| {
            let mut p = place(&format!("p{}", i), &format!("Spot {}", i));
            p.category = Some("restaurant".to_string());
            p.rating = Some(2.5 + (i % 7) as f64 * 0.35);
            if i % 3 == 0 {
                p.description = Some("well documented".to_string());
                p.tags = vec!["food".to_string(), "local".to_string()];
            }
            p
        })
        .collect();

    let ranker = Ranker::new(weights);
    let prefs = preferences(TravelStyle::Foodie, Budget::Unlimited, 5);
    let result = ranker.rank(candidates, &prefs);

    let scores: Vec<f64> = result
        .places
        .iter()
        .map(|p| place_score(p, &weights))
        .collect();

    for window in scores.windows(2) {
        assert!(
            window[0] >= window[1],
            "ranked output not in descending score order: {:?}",
            scores
        );
    }
}

#[test]
fn test_monday_closure_respected_end_to_end() {
    let mut closed_monday = place("1", "National Folk Museum");
    closed_monday.category = Some("museum".to_string());
    closed_monday.operating_hours = Some("09:00-18:00, closed monday".to_string());

    let mut open_daily = place("2", "City History Gallery");
    open_daily.category = Some("gallery".to_string());
    open_daily.operating_hours = Some("09:00-20:00".to_string());

    let mut prefs = preferences(TravelStyle::Cultural, Budget::Medium, 2);
    // 2025-03-03 is a Monday
    prefs.travel_dates = Some(DateRange::parse("2025-03-02", "2025-03-04").unwrap());

    let ranker = Ranker::with_default_weights();
    let result = ranker.rank(vec![closed_monday, open_daily], &prefs);

    assert_eq!(result.places.len(), 1);
    assert_eq!(result.places[0].id, "2");
}

// Scenario: scores {hongdae: 0.8, gangnam: 0.2}, 10 places -> {8, 2}.
#[test]
fn test_cluster_quota_scenario() {
    let catalog = ClusterCatalog::seoul();
    let scores = vec![("hongdae".to_string(), 0.8), ("gangnam".to_string(), 0.2)];

    let distribution = catalog.place_distribution(&scores, 10);
    assert_eq!(
        distribution,
        vec![("hongdae".to_string(), 8), ("gangnam".to_string(), 2)]
    );
}

// Scenario: six clusters all scoring zero, 12 places -> 2 each.
#[test]
fn test_cluster_zero_score_scenario() {
    let catalog = ClusterCatalog::seoul();
    let scores: Vec<(String, f64)> = catalog
        .all()
        .iter()
        .map(|c| (c.name.clone(), 0.0))
        .collect();

    let distribution = catalog.place_distribution(&scores, 12);
    assert_eq!(distribution.len(), 6);
    assert!(distribution.iter().all(|(_, quota)| *quota == 2));
}

#[test]
fn test_cluster_quotas_sum_within_tolerance() {
    let catalog = ClusterCatalog::seoul();
    let descriptors = [
        "tradition and history lover",
        "luxury shopping trip",
        "young active nightlife art",
        "completely unrelated words",
    ];

    for descriptor in descriptors {
        let scores = catalog.cluster_scores(descriptor);
        for total in [6usize, 10, 17, 30] {
            let distribution = catalog.place_distribution(&scores, total);
            let sum: usize = distribution.iter().map(|(_, q)| q).sum();
            assert!(
                sum.abs_diff(total) <= catalog.len() - 1,
                "descriptor {:?} total {} -> sum {}",
                descriptor,
                total,
                sum
            );
        }
    }
}

#[test]
fn test_full_pipeline_dedup_then_rank() {
    // Two provider views of the same market plus one distinct museum
    let mut kakao = place("k1", "Gwangjang Market");
    kakao.category = Some("market".to_string());
    kakao.rating = Some(4.4);
    kakao.price_range = Some("$".to_string());
    kakao.source = Some("KakaoMap".to_string());

    let mut tour = place("t1", "Gwangjang Markets");
    tour.category = Some("traditional market".to_string());
    tour.rating = Some(4.6);
    tour.tags = vec!["street food".to_string()];
    tour.source = Some("TourAPI".to_string());

    let mut museum = place("t2", "National Museum of Korea");
    museum.category = Some("museum".to_string());
    museum.rating = Some(4.8);

    let unique = deduplicate(vec![kakao, tour, museum]);
    assert_eq!(unique.len(), 2);

    let merged = &unique[0];
    assert_eq!(merged.rating, Some(4.5));
    assert_eq!(merged.source.as_deref(), Some("KakaoMap, TourAPI"));

    let ranker = Ranker::with_default_weights();
    let prefs = preferences(TravelStyle::Foodie, Budget::Low, 1);
    let result = ranker.rank(unique, &prefs);

    // The museum fails the foodie style filter, the merged market survives
    assert_eq!(result.places.len(), 1);
    assert_eq!(result.places[0].id, "k1");
}
