use std::collections::HashMap;

use crate::core::{
    compatibility::compatibility_score,
    scoring::round_score,
    validation::{validate_config, validate_members},
};
use crate::error::MatchError;
use crate::models::{MatchConfig, Member, ScoredCandidate};

/// Result of the matching process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult {
    /// Ranked shortlist per member identifier; every member has an entry
    pub matches: HashMap<String, Vec<ScoredCandidate>>,
    pub total_members: usize,
}

impl MatchResult {
    /// Shortlist for a member, empty when the identifier is unknown
    pub fn get(&self, user_id: &str) -> &[ScoredCandidate] {
        self.matches.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Batch matcher - scores every ordered pair and ranks per member
///
/// # Pipeline Stages
/// 1. Batch and configuration validation
/// 2. Hard filters (gender, age range, distance)
/// 3. Weighted soft scoring
/// 4. Ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Rank the batch using the configured top-N
    pub fn rank_all(&self, members: &[Member]) -> Result<MatchResult, MatchError> {
        self.rank(members, self.config.top_n)
    }

    /// Rank every member of the batch against every other member
    ///
    /// # Arguments
    /// * `members` - The full batch; identifiers must be unique
    /// * `top_n` - Maximum number of candidates kept per member
    ///
    /// # Returns
    /// MatchResult with an entry for every member, possibly empty
    pub fn rank(&self, members: &[Member], top_n: usize) -> Result<MatchResult, MatchError> {
        validate_config(&self.config)?;
        validate_members(members)?;

        let matches: HashMap<String, Vec<ScoredCandidate>> = members
            .iter()
            .enumerate()
            .map(|(index, member)| {
                let ranked = self.rank_at(index, members, top_n);
                tracing::debug!(
                    "Ranked {} candidates for {}",
                    ranked.len(),
                    member.user_id
                );
                (member.user_id.clone(), ranked)
            })
            .collect();

        tracing::info!(
            "Ranked {} members ({} ordered pairs)",
            members.len(),
            members.len() * members.len().saturating_sub(1)
        );

        Ok(MatchResult {
            matches,
            total_members: members.len(),
        })
    }

    /// Rank candidates for a single member against a batch
    ///
    /// Entries sharing the member's identifier are skipped. The batch is not
    /// validated here.
    pub fn rank_member(&self, member: &Member, members: &[Member], top_n: usize) -> Vec<ScoredCandidate> {
        let candidates = members
            .iter()
            .filter(|candidate| candidate.user_id != member.user_id);

        self.collect_ranked(member, candidates, top_n)
    }

    fn rank_at(&self, index: usize, members: &[Member], top_n: usize) -> Vec<ScoredCandidate> {
        let member = &members[index];
        let candidates = members
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .map(|(_, candidate)| candidate);

        self.collect_ranked(member, candidates, top_n)
    }

    fn collect_ranked<'a>(
        &self,
        member: &Member,
        candidates: impl Iterator<Item = &'a Member>,
        top_n: usize,
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .filter_map(|candidate| {
                let score = compatibility_score(member, candidate, &self.config);
                (score > 0.0).then(|| ScoredCandidate {
                    user_id: candidate.user_id.clone(),
                    score: round_score(score),
                })
            })
            .collect();

        // Stable sort: equal scores keep input order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored.truncate(top_n);
        scored
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_config()
    }
}
