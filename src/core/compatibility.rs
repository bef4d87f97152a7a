use crate::core::{
    filters::{matches_age_range, matches_gender, within_radius},
    scoring::{age_penalty, distance_penalty, interest_overlap},
};
use crate::models::{MatchConfig, Member};

/// Why a pair was rejected by a hard filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// One side is not seeking the other's gender
    Gender,
    /// One side's age is outside the other's accepted range
    AgeRange,
    /// The pair is farther apart than the hard radius
    Distance { distance_km: f64 },
}

/// Soft score components for an eligible pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub interest_overlap: f64,
    pub age_penalty: f64,
    pub distance_km: f64,
    pub distance_penalty: f64,
    /// Weighted total, clamped to 0-1
    pub score: f64,
}

/// Outcome of evaluating a pair
///
/// Keeps "filtered out" apart from "eligible with a zero soft score", which a
/// bare 0.0 cannot express.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Compatibility {
    Ineligible(Rejection),
    Eligible(ScoreBreakdown),
}

impl Compatibility {
    /// Collapse to a single score, 0.0 for ineligible pairs
    pub fn score(&self) -> f64 {
        match self {
            Compatibility::Ineligible(_) => 0.0,
            Compatibility::Eligible(breakdown) => breakdown.score,
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Compatibility::Eligible(_))
    }
}

/// Evaluate a pair of members
///
/// Hard filters run in order (gender, age range, distance) and the first
/// failure short-circuits; the distance is not computed when gender or age
/// already fail.
///
/// Scoring formula:
/// score = (
///     interest_overlap * w_interests +        # Jaccard of interest tags
///     (1 - age_penalty) * w_age_gap +         # Closer ages = higher
///     (1 - distance_penalty) * w_distance     # Closer = higher
/// )
pub fn evaluate(u: &Member, v: &Member, config: &MatchConfig) -> Compatibility {
    if !matches_gender(u, v) {
        return Compatibility::Ineligible(Rejection::Gender);
    }

    if !matches_age_range(u, v) {
        return Compatibility::Ineligible(Rejection::AgeRange);
    }

    let distance_km = u.distance_to(v);
    if !within_radius(distance_km, config.max_distance_km) {
        return Compatibility::Ineligible(Rejection::Distance { distance_km });
    }

    let overlap = interest_overlap(&u.interests, &v.interests);
    let age_pen = age_penalty(u.age, v.age);
    let distance_pen = distance_penalty(distance_km, config.max_distance_km);

    let weights = &config.weights;
    let total_score = overlap * weights.interests
        + (1.0 - age_pen) * weights.age_gap
        + (1.0 - distance_pen) * weights.distance;

    Compatibility::Eligible(ScoreBreakdown {
        interest_overlap: overlap,
        age_penalty: age_pen,
        distance_km,
        distance_penalty: distance_pen,
        score: total_score.clamp(0.0, 1.0),
    })
}

/// Calculate a compatibility score (0-1) for a pair, 0.0 when ineligible
#[inline]
pub fn compatibility_score(u: &Member, v: &Member, config: &MatchConfig) -> f64 {
    evaluate(u, v, config).score()
}
