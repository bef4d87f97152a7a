// Core algorithm exports
pub mod compatibility;
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod validation;

pub use compatibility::{compatibility_score, evaluate, Compatibility, Rejection, ScoreBreakdown};
pub use distance::{haversine_distance, is_valid_coordinate};
pub use filters::{matches_age_range, matches_gender, within_radius};
pub use matcher::{MatchResult, Matcher};
pub use scoring::{age_penalty, distance_penalty, interest_overlap, round_score};
pub use validation::{validate_config, validate_member, validate_members};
