// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Member, ScoredCandidate, ScoringWeights, MatchConfig};
pub use requests::MatchBatch;
pub use responses::{MatchesResponse, MemberMatches, MatchEntry};
