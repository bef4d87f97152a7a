use std::collections::HashSet;

/// Age gap (years) at which the age penalty saturates
pub const AGE_GAP_SATURATION_YEARS: f64 = 25.0;

/// Jaccard similarity of two interest sets (0-1)
///
/// Two empty sets score 0, so members without interests gain nothing here.
pub fn interest_overlap(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;

    shared as f64 / union as f64
}

/// Age penalty (0-1)
/// 0 for identical ages, reaching 1 at 25 or more years apart
#[inline]
pub fn age_penalty(age_a: u8, age_b: u8) -> f64 {
    (age_a.abs_diff(age_b) as f64 / AGE_GAP_SATURATION_YEARS).min(1.0)
}

/// Distance penalty (0-1)
/// 0 at zero distance, reaching 1 at the hard radius
#[inline]
pub fn distance_penalty(distance_km: f64, max_distance_km: f64) -> f64 {
    (distance_km / max_distance_km).min(1.0)
}

/// Round a score to 4 decimal places
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}
