use anchor_lang::solana_program::hash::Hasher;

use crate::constants::{INTERNAL_PREFIX, LEAF_PREFIX};

/// `SHA256(0x00 || data)`
pub fn hash_leaf(data: &[u8]) -> [u8; 32] {
    let mut hasher = Hasher::default();
    hasher.hash(&[LEAF_PREFIX]);
    hasher.hash(data);
    hasher.result().to_bytes()
}

/// `SHA256(0x01 || left || right)`. Children are hashed in positional order, so the
/// same pair in the opposite orientation yields a different parent.
pub fn hash_internal(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Hasher::default();
    hasher.hash(&[INTERNAL_PREFIX]);
    hasher.hash(left);
    hasher.hash(right);
    hasher.result().to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_and_internal_domains_differ() {
        let left = [1u8; 32];
        let right = [2u8; 32];

        let mut concatenated = Vec::with_capacity(64);
        concatenated.extend_from_slice(&left);
        concatenated.extend_from_slice(&right);

        assert_ne!(hash_leaf(&concatenated), hash_internal(&left, &right));
    }

    #[test]
    fn test_internal_hash_is_ordered() {
        let a = [7u8; 32];
        let b = [9u8; 32];
        assert_ne!(hash_internal(&a, &b), hash_internal(&b, &a));
    }
}
