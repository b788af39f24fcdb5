use airdrop::{AirdropEntry, ClaimLeaf};

use crate::{AirdropHasher, ClaimTree, MerkleResult};

/// Compact proof that several entries are committed under one root.
///
/// Only used off-chain for auditing; claims always go through single-entry proofs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimMultiProof {
    /// Sorted, without duplicates.
    pub indices: Vec<u64>,
    pub entries: Vec<AirdropEntry>,
    pub proof_hashes: Vec<[u8; 32]>,
    pub total_leaves: usize,
}

impl ClaimTree {
    pub fn multi_proof(&self, indices: &[u64]) -> MerkleResult<ClaimMultiProof> {
        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();

        let entries = indices
            .iter()
            .map(|&index| self.entry(index).copied())
            .collect::<MerkleResult<Vec<_>>>()?;

        let positions: Vec<usize> = indices.iter().map(|&index| index as usize).collect();
        let proof = self.rs_tree().proof(&positions);

        Ok(ClaimMultiProof {
            indices,
            entries,
            proof_hashes: proof.proof_hashes().to_vec(),
            total_leaves: self.len(),
        })
    }
}

pub fn verify_multi_proof(root: &[u8; 32], proof: &ClaimMultiProof) -> bool {
    if proof.indices.is_empty() || proof.indices.len() != proof.entries.len() {
        return false;
    }

    let mut positions = Vec::with_capacity(proof.indices.len());
    for &index in &proof.indices {
        match usize::try_from(index) {
            Ok(position) if position < proof.total_leaves => positions.push(position),
            _ => return false,
        }
    }

    let leaf_hashes: Vec<[u8; 32]> = proof
        .indices
        .iter()
        .zip(&proof.entries)
        .map(|(&index, entry)| ClaimLeaf::new(index, entry).to_hash())
        .collect();

    rs_merkle::MerkleProof::<AirdropHasher>::new(proof.proof_hashes.clone()).verify(
        *root,
        &positions,
        &leaf_hashes,
        proof.total_leaves,
    )
}
