//! Score commitments: keccak-256 over the score encoded as a 32-byte
//! big-endian word, the same digest `soliditySha3(uint256)` produces.

use soroban_sdk::{Bytes, BytesN, Env};

pub fn commit(env: &Env, raw_score: u32) -> BytesN<32> {
    let mut word = [0u8; 32];
    word[28..].copy_from_slice(&raw_score.to_be_bytes());
    env.crypto().keccak256(&Bytes::from_array(env, &word)).into()
}

/// Audit check only; admission never depends on it.
pub fn open(env: &Env, commitment: &BytesN<32>, raw_score: u32) -> bool {
    commit(env, raw_score) == *commitment
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::BTreeSet;

    #[test]
    fn test_commit_zero_matches_known_digest() {
        let env = Env::default();
        let expected: [u8; 32] = [
            0x29, 0x0d, 0xec, 0xd9, 0x54, 0x8b, 0x62, 0xa8, 0xd6, 0x03, 0x45, 0xa9, 0x88, 0x38,
            0x6f, 0xc8, 0x4b, 0xa6, 0xbc, 0x95, 0x48, 0x40, 0x08, 0xf6, 0x36, 0x2f, 0x93, 0x16,
            0x0e, 0xf3, 0xe5, 0x63,
        ];
        assert_eq!(commit(&env, 0), BytesN::from_array(&env, &expected));
    }

    #[test]
    fn test_commit_is_deterministic() {
        let env = Env::default();
        assert_eq!(commit(&env, 80), commit(&env, 80));
        assert!(open(&env, &commit(&env, 80), 80));
        assert!(!open(&env, &commit(&env, 80), 81));
    }

    #[test]
    fn test_distinct_scores_do_not_collide() {
        let env = Env::default();
        let mut rng = rand::thread_rng();
        let mut scores = BTreeSet::new();
        while scores.len() < 256 {
            scores.insert(rng.gen::<u32>());
        }

        let mut digests = BTreeSet::new();
        for score in scores.iter() {
            digests.insert(commit(&env, *score).to_array());
        }
        assert_eq!(digests.len(), scores.len());
    }
}
