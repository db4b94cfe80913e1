//! Challenge briefing records, written by the seed binary.

use serde::{Deserialize, Serialize};

/// One challenge document. The `id` is a fixed slug so that repeated seed
/// runs upsert the same row instead of accumulating duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub prompt: String,
    pub difficulty: String,
    pub is_active: bool,
}

impl Challenge {
    /// The static briefing set the seed binary writes.
    pub fn defaults() -> Vec<Challenge> {
        vec![Challenge {
            id: "challenge-1".to_string(),
            title: "Challenge 1".to_string(),
            prompt: "Decode the disguised signal embedded in the mission briefing. \
                     Submit the flag with the format FLAG{hash}."
                .to_string(),
            difficulty: "easy".to_string(),
            is_active: true,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_set_has_unique_ids() {
        let challenges = Challenge::defaults();
        assert!(!challenges.is_empty());
        let ids: HashSet<_> = challenges.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), challenges.len());
    }

    #[test]
    fn default_challenge_is_active() {
        let first = &Challenge::defaults()[0];
        assert_eq!(first.id, "challenge-1");
        assert!(first.is_active);
    }
}
