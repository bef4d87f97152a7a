// Unit tests for Lume Match

use std::collections::HashSet;

use lume_match::core::{
    compatibility::{compatibility_score, evaluate, Compatibility, Rejection},
    distance::haversine_distance,
    scoring::{age_penalty, distance_penalty, interest_overlap},
};
use lume_match::models::{MatchConfig, Member};

fn create_member(id: &str, age: u8, gender: &str, seeking: &str, lat: f64, lon: f64) -> Member {
    Member {
        user_id: id.to_string(),
        name: format!("User {}", id),
        age,
        gender: gender.to_string(),
        seeking: [seeking.to_string()].into_iter().collect(),
        min_age: 21,
        max_age: 40,
        latitude: lat,
        longitude: lon,
        interests: ["tennis".to_string(), "swimming".to_string()].into_iter().collect(),
    }
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(40.7128, -74.0060, 40.7128, -74.0060);
    assert_eq!(distance, 0.0);
}

#[test]
fn test_haversine_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let manhattan_lat = 40.7580;
    let manhattan_lon = -73.9855;
    let brooklyn_lat = 40.6782;
    let brooklyn_lon = -73.9442;

    let distance = haversine_distance(manhattan_lat, manhattan_lon, brooklyn_lat, brooklyn_lon);
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_haversine_symmetric_over_grid() {
    let points = [(-89.5, -179.0), (-33.9, 18.4), (0.0, 0.0), (35.7, 139.7), (64.1, -21.9), (89.9, 179.9)];

    for &(lat1, lon1) in &points {
        assert_eq!(haversine_distance(lat1, lon1, lat1, lon1), 0.0);
        for &(lat2, lon2) in &points {
            let there = haversine_distance(lat1, lon1, lat2, lon2);
            let back = haversine_distance(lat2, lon2, lat1, lon1);
            assert!((there - back).abs() < 1e-9);
        }
    }
}

#[test]
fn test_member_distance_matches_function() {
    let a = create_member("a", 30, "F", "M", 42.36, -71.06);
    let b = create_member("b", 30, "M", "F", 42.36, -71.07);

    assert_eq!(a.distance_to(&b), haversine_distance(42.36, -71.06, 42.36, -71.07));
    assert_eq!(a.point().x(), -71.06);
    assert_eq!(a.point().y(), 42.36);
}

#[test]
fn test_sub_scores_in_unit_range() {
    let a: HashSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let b: HashSet<String> = ["c", "d"].iter().map(|s| s.to_string()).collect();

    let overlap = interest_overlap(&a, &b);
    assert!((overlap - 0.25).abs() < 1e-12);

    for (x, y) in [(18u8, 18u8), (18, 30), (18, 43), (18, 99), (99, 18)] {
        let penalty = age_penalty(x, y);
        assert!((0.0..=1.0).contains(&penalty));
    }
    assert_eq!(age_penalty(40, 40), 0.0);
    assert_eq!(age_penalty(40, 65), 1.0);

    for km in [0.0, 10.0, 49.99, 50.0, 500.0] {
        let penalty = distance_penalty(km, 50.0);
        assert!((0.0..=1.0).contains(&penalty));
    }
}

#[test]
fn test_score_within_valid_range() {
    let config = MatchConfig::default();
    let members = [
        create_member("1", 21, "F", "M", 40.7128, -74.0060),
        create_member("2", 40, "M", "F", 40.90, -74.20),
        create_member("3", 30, "M", "F", 40.7128, -74.0060),
        create_member("4", 33, "F", "M", 41.00, -74.00),
    ];

    for u in &members {
        for v in &members {
            let score = compatibility_score(u, v, &config);
            assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }
}

#[test]
fn test_hard_filters_force_zero() {
    let config = MatchConfig::default();
    let u = create_member("u", 30, "F", "M", 40.7128, -74.0060);

    let wrong_gender = create_member("v", 30, "F", "F", 40.7128, -74.0060);
    assert_eq!(compatibility_score(&u, &wrong_gender, &config), 0.0);

    let mut not_seeking_back = create_member("v", 30, "M", "M", 40.7128, -74.0060);
    assert_eq!(compatibility_score(&u, &not_seeking_back, &config), 0.0);
    not_seeking_back.seeking.insert("F".to_string());
    assert!(compatibility_score(&u, &not_seeking_back, &config) > 0.0);

    let mut picky = create_member("v", 30, "M", "F", 40.7128, -74.0060);
    picky.min_age = 31;
    assert_eq!(
        evaluate(&u, &picky, &config),
        Compatibility::Ineligible(Rejection::AgeRange)
    );

    let far = create_member("v", 30, "M", "F", 41.5, -74.0);
    assert_eq!(compatibility_score(&u, &far, &config), 0.0);
}

#[test]
fn test_identical_members_score_one() {
    let config = MatchConfig::default();
    let u = create_member("u", 30, "F", "M", 40.7128, -74.0060);
    let v = create_member("v", 30, "M", "F", 40.7128, -74.0060);

    let score = compatibility_score(&u, &v, &config);
    assert!((score - 1.0).abs() < 1e-9);
}
