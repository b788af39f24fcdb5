pub mod error;
pub mod hasher;
pub mod multi_proof;
pub mod tree;

pub use error::{MerkleError, MerkleResult};
pub use hasher::AirdropHasher;
pub use multi_proof::{verify_multi_proof, ClaimMultiProof};
pub use tree::ClaimTree;

// Re-export the on-chain proof types
pub use airdrop::{AirdropEntry, ClaimLeaf, MerkleProof, ProofNode, Side};
