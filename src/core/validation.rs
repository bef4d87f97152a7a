use std::collections::HashSet;

use validator::Validate;

use crate::core::distance::is_valid_coordinate;
use crate::error::MatchError;
use crate::models::{MatchConfig, Member};

/// Validate a single member's fields
pub fn validate_member(member: &Member) -> Result<(), MatchError> {
    if !is_valid_coordinate(member.latitude, member.longitude) {
        return Err(MatchError::MalformedCoordinate {
            user_id: member.user_id.clone(),
            latitude: member.latitude,
            longitude: member.longitude,
        });
    }

    if member.min_age > member.max_age {
        return Err(MatchError::InvalidRange {
            user_id: member.user_id.clone(),
            min_age: member.min_age,
            max_age: member.max_age,
        });
    }

    member.validate().map_err(|e| MatchError::InvalidProfile {
        user_id: member.user_id.clone(),
        message: e.to_string(),
    })
}

/// Validate a whole batch, failing on the first offending member in input order
pub fn validate_members(members: &[Member]) -> Result<(), MatchError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(members.len());

    for member in members {
        validate_member(member)?;

        if !seen.insert(member.user_id.as_str()) {
            return Err(MatchError::DuplicateIdentifier(member.user_id.clone()));
        }
    }

    Ok(())
}

/// Validate tunables before a run
pub fn validate_config(config: &MatchConfig) -> Result<(), MatchError> {
    let weights = [
        ("interests", config.weights.interests),
        ("age_gap", config.weights.age_gap),
        ("distance", config.weights.distance),
    ];

    for (name, weight) in weights {
        if !weight.is_finite() || weight < 0.0 {
            return Err(MatchError::InvalidConfig(format!(
                "weight {} must be a non-negative number, got {}",
                name, weight
            )));
        }
    }

    if !config.max_distance_km.is_finite() || config.max_distance_km <= 0.0 {
        return Err(MatchError::InvalidConfig(format!(
            "max_distance_km must be positive, got {}",
            config.max_distance_km
        )));
    }

    if config.top_n == 0 {
        return Err(MatchError::InvalidConfig("top_n must be at least 1".to_string()));
    }

    Ok(())
}
