use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::MatchResult;
use crate::models::domain::Member;

/// Ranked shortlist for the whole batch, in input order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub members: Vec<MemberMatches>,
    #[serde(rename = "totalMembers")]
    pub total_members: usize,
}

/// One member's shortlist with display names resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberMatches {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub matches: Vec<MatchEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub score: f64,
}

impl MatchesResponse {
    /// Attach display names to a ranking computed over `members`
    pub fn from_result(members: &[Member], result: &MatchResult) -> Self {
        let names: HashMap<&str, &str> = members
            .iter()
            .map(|m| (m.user_id.as_str(), m.name.as_str()))
            .collect();

        let members_out = members
            .iter()
            .map(|member| MemberMatches {
                user_id: member.user_id.clone(),
                name: member.name.clone(),
                matches: result
                    .get(&member.user_id)
                    .iter()
                    .map(|candidate| MatchEntry {
                        user_id: candidate.user_id.clone(),
                        name: names
                            .get(candidate.user_id.as_str())
                            .map(|name| name.to_string())
                            .unwrap_or_default(),
                        score: candidate.score,
                    })
                    .collect(),
            })
            .collect();

        Self {
            members: members_out,
            total_members: result.total_members,
        }
    }
}
