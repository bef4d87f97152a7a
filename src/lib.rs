//! Lume Match - batch compatibility scoring for Lume member profiles
//!
//! This library scores every ordered pair of members in a batch and returns a
//! ranked shortlist per member. Pairs are first run through hard eligibility
//! filters (mutual gender seeking, mutual age range, distance radius) and the
//! survivors are scored on interest overlap, age proximity and distance.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, compatibility_score, evaluate, haversine_distance};
pub use crate::error::MatchError;
pub use crate::models::{Member, ScoredCandidate, ScoringWeights, MatchConfig, MatchBatch, MatchesResponse};
