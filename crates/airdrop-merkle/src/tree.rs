use airdrop::{AirdropEntry, ClaimLeaf, MerkleProof, ProofNode, EMPTY_ROOT};
use rs_merkle::MerkleTree;
use tracing::debug;

use crate::{AirdropHasher, MerkleError, MerkleResult};

/// Commitment over a dense entry table, indexed `0..len`.
#[derive(Clone)]
pub struct ClaimTree {
    entries: Vec<AirdropEntry>,
    tree: MerkleTree<AirdropHasher>,
}

impl ClaimTree {
    /// Build a tree where each entry's index is its position.
    pub fn from_entries(entries: Vec<AirdropEntry>) -> Self {
        let leaf_hashes: Vec<[u8; 32]> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| ClaimLeaf::new(index as u64, entry).to_hash())
            .collect();

        let tree = MerkleTree::<AirdropHasher>::from_leaves(&leaf_hashes);

        debug!(
            "Built claim tree over {} entries (depth {})",
            entries.len(),
            tree.depth()
        );

        Self { entries, tree }
    }

    /// Build a tree from explicitly indexed entries. The indices must be exactly `0..len`, in
    /// any order.
    pub fn from_indexed(mut indexed: Vec<(u64, AirdropEntry)>) -> MerkleResult<Self> {
        indexed.sort_by_key(|(index, _)| *index);

        for (position, (index, _)) in indexed.iter().enumerate() {
            if position > 0 && indexed[position - 1].0 == *index {
                return Err(MerkleError::DuplicateIndex(*index));
            }
            if *index != position as u64 {
                return Err(MerkleError::MissingIndex(position as u64));
            }
        }

        Ok(Self::from_entries(
            indexed.into_iter().map(|(_, entry)| entry).collect(),
        ))
    }

    /// `EMPTY_ROOT` for an empty table.
    pub fn root(&self) -> [u8; 32] {
        self.tree.root().unwrap_or(EMPTY_ROOT)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AirdropEntry] {
        &self.entries
    }

    pub fn entry(&self, index: u64) -> MerkleResult<&AirdropEntry> {
        usize::try_from(index)
            .ok()
            .and_then(|position| self.entries.get(position))
            .ok_or(MerkleError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    pub fn leaf_hashes(&self) -> Vec<[u8; 32]> {
        self.tree.leaves().unwrap_or_default()
    }

    /// Sibling path from the leaf at `index` up to the root.
    ///
    /// `rs_merkle` yields the sibling hashes bottom-up and omits levels where the node is
    /// promoted without a sibling. Walking the layer widths alongside recovers which levels
    /// those are, and the position's low bit gives each sibling's side.
    pub fn proof_for(&self, index: u64) -> MerkleResult<MerkleProof> {
        let entry = *self.entry(index)?;

        let mut position = index as usize;
        let mut width = self.len();
        let mut siblings = self
            .tree
            .proof(&[position])
            .proof_hashes()
            .to_vec()
            .into_iter();

        let mut path = Vec::new();
        while width > 1 {
            if position ^ 1 < width {
                let sibling = siblings.next().ok_or(MerkleError::MalformedProof(index))?;
                path.push(if position % 2 == 0 {
                    ProofNode::right(sibling)
                } else {
                    ProofNode::left(sibling)
                });
            }
            position /= 2;
            width = width.div_ceil(2);
        }

        Ok(MerkleProof::new(index, entry, path))
    }

    /// Check `proof` against this tree's root and the entry it holds at `proof.index`.
    pub fn verify_proof(&self, proof: &MerkleProof) -> bool {
        match self.entry(proof.index) {
            Ok(entry) => proof.verify(&self.root(), proof.index, entry),
            Err(_) => false,
        }
    }

    pub(crate) fn rs_tree(&self) -> &MerkleTree<AirdropHasher> {
        &self.tree
    }
}
