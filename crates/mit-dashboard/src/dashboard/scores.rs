//! Placeholder profile scores.
//!
//! No scoring model exists yet. Until one does, each candidate gets a stable mock bundle derived
//! from their name so the profile view renders consistently between requests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub const SKILL_RANKINGS: [&str; 4] = ["Top 10%", "Top 15%", "Top 20%", "Top 25%"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBundle {
    pub qbr_score: u8,
    pub assessment_score: u8,
    pub performance_score: u8,
    pub confidence_score: u8,
    pub skill_ranking: &'static str,
}

/// Seed taken from the first four bytes of the SHA-256 of `name`.
pub fn name_seed(name: &str) -> u64 {
    let digest = Sha256::digest(name.as_bytes());
    u64::from(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
}

/// Draws the bundle from a generator owned by this call, so no other randomness is disturbed.
pub fn mock_scores(name: &str) -> ScoreBundle {
    let mut rng = StdRng::seed_from_u64(name_seed(name));

    ScoreBundle {
        qbr_score: rng.gen_range(65..=90),
        assessment_score: rng.gen_range(70..=95),
        performance_score: rng.gen_range(75..=95),
        confidence_score: rng.gen_range(70..=90),
        skill_ranking: SKILL_RANKINGS[rng.gen_range(0..SKILL_RANKINGS.len())],
    }
}
