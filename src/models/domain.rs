use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::distance::haversine_distance;

/// Member profile with preference constraints and location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Member {
    #[validate(length(min = 1))]
    #[serde(rename = "userId", alias = "user_id")]
    pub user_id: String,
    pub name: String,
    #[validate(range(min = 1))]
    pub age: u8,
    pub gender: String,
    #[serde(default)]
    pub seeking: HashSet<String>,
    #[serde(rename = "minAge", alias = "min_age")]
    pub min_age: u8,
    #[serde(rename = "maxAge", alias = "max_age")]
    pub max_age: u8,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub interests: HashSet<String>,
}

impl Member {
    /// Great-circle distance to another member in kilometers
    pub fn distance_to(&self, other: &Member) -> f64 {
        haversine_distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Whether this member accepts a candidate of the given age
    #[inline]
    pub fn accepts_age(&self, age: u8) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }

    /// Whether this member is seeking the given gender label
    #[inline]
    pub fn seeks(&self, gender: &str) -> bool {
        self.seeking.contains(gender)
    }

    /// Position as a `geo` point (x = longitude, y = latitude)
    pub fn point(&self) -> geo::Point<f64> {
        geo::Point::new(self.longitude, self.latitude)
    }
}

/// A candidate in a member's ranked shortlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub score: f64,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub interests: f64,
    #[serde(rename = "ageGap", alias = "age_gap")]
    pub age_gap: f64,
    pub distance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interests: 0.60,
            age_gap: 0.25,
            distance: 0.15,
        }
    }
}

/// Immutable configuration for a matching run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub weights: ScoringWeights,
    /// Hard eligibility radius, also the distance normalization denominator
    #[serde(rename = "maxDistanceKm", alias = "max_distance_km")]
    pub max_distance_km: f64,
    #[serde(rename = "topN", alias = "top_n")]
    pub top_n: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_distance_km: 50.0,
            top_n: 5,
        }
    }
}
