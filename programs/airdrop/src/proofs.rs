use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::Hasher;

use crate::constants::{MAX_PROOF_DEPTH, PROOF_PREFIX};
use crate::entry::{AirdropEntry, ClaimLeaf};
use crate::hashing::hash_internal;

/// Position of a sibling relative to the node being folded.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// One step of an inclusion path.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProofNode {
    pub sibling: [u8; 32],
    pub side: Side,
}

impl ProofNode {
    pub fn left(sibling: [u8; 32]) -> Self {
        Self {
            sibling,
            side: Side::Left,
        }
    }

    pub fn right(sibling: [u8; 32]) -> Self {
        Self {
            sibling,
            side: Side::Right,
        }
    }

    /// Hash `node` together with this sibling into their parent.
    pub fn fold(&self, node: &[u8; 32]) -> [u8; 32] {
        match self.side {
            Side::Left => hash_internal(&self.sibling, node),
            Side::Right => hash_internal(node, &self.sibling),
        }
    }
}

/// Inclusion proof for a single entry: the leaf content plus the sibling path from the leaf
/// level up to (but excluding) the root.
///
/// Levels where the node had no sibling (it was promoted unchanged) contribute no step.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MerkleProof {
    pub index: u64,
    pub entry: AirdropEntry,
    pub path: Vec<ProofNode>,
}

impl MerkleProof {
    pub fn new(index: u64, entry: AirdropEntry, path: Vec<ProofNode>) -> Self {
        Self { index, entry, path }
    }

    pub fn leaf(&self) -> ClaimLeaf {
        ClaimLeaf::new(self.index, &self.entry)
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Fold the path starting from the leaf hash. `None` when the path is deeper than any
    /// tree over a u64 index space can be.
    pub fn compute_root(&self) -> Option<[u8; 32]> {
        if self.path.len() > MAX_PROOF_DEPTH {
            return None;
        }

        let root = self
            .path
            .iter()
            .fold(self.leaf().to_hash(), |node, step| step.fold(&node));

        Some(root)
    }

    /// True iff this proof commits `entry` at `index` under `root`.
    pub fn verify(&self, root: &[u8; 32], index: u64, entry: &AirdropEntry) -> bool {
        if self.index != index || self.entry != *entry {
            return false;
        }

        self.compute_root().is_some_and(|computed| computed == *root)
    }

    /// `SHA256(0x02 || borsh(proof))`.
    ///
    /// Claim agent addresses are derived from this digest, so every byte of the proof,
    /// including its leaf content, selects a distinct agent.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Hasher::default();
        hasher.hash(&[PROOF_PREFIX]);
        hasher.hash(&self.leaf().to_bytes());
        hasher.hash(&(self.path.len() as u32).to_le_bytes());
        for step in &self.path {
            hasher.hash(&step.sibling);
            hasher.hash(&[step.side as u8]);
        }
        hasher.result().to_bytes()
    }

    pub fn try_to_bytes(&self) -> std::io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.serialize(&mut bytes)?;
        Ok(bytes)
    }

    pub fn try_from_bytes(bytes: &[u8]) -> std::io::Result<Self> {
        Self::try_from_slice(bytes)
    }
}
