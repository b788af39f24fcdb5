use airdrop::hashing::{hash_internal, hash_leaf};
use rs_merkle::Hasher;

/// `rs_merkle` hasher for claim trees.
///
/// - **Leaf nodes**: `SHA256(0x00 || leaf_data)`, the same as `ClaimLeaf::to_hash()`
/// - **Internal nodes**: `SHA256(0x01 || left || right)`, children in positional order
/// - **Odd node**: promoted to the next layer unchanged
///
/// Positional ordering is what lets a proof carry an explicit side for every sibling and lets
/// the claim agent address bind to one exact proof.
#[derive(Clone, Debug)]
pub struct AirdropHasher;

impl Hasher for AirdropHasher {
    type Hash = [u8; 32];

    fn hash(data: &[u8]) -> Self::Hash {
        hash_leaf(data)
    }

    fn concat_and_hash(left: &Self::Hash, right: Option<&Self::Hash>) -> Self::Hash {
        match right {
            Some(right) => hash_internal(left, right),
            None => *left,
        }
    }
}
