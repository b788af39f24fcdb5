use anchor_lang::prelude::*;

use crate::hashing::hash_leaf;

/// One row of the entry table: who receives tokens and how many.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AirdropEntry {
    /// Owner of the token account credited when this entry is claimed.
    pub recipient: Pubkey,
    /// Amount of tokens, in the mint's smallest denomination.
    pub amount: u64,
}

impl AirdropEntry {
    pub fn new(recipient: Pubkey, amount: u64) -> Self {
        Self { recipient, amount }
    }
}

/// The data hashed to form a leaf of the commitment tree.
///
/// ## Serialization schema
///
/// The leaf hash is computed over the Borsh encoding of this struct, so the layout below is
/// part of every committed root and MUST NOT change once a root has been published:
///
/// ```text
/// index:     u64 LE   8 bytes, offset 0
/// recipient: Pubkey  32 bytes, offset 8
/// amount:    u64 LE   8 bytes, offset 40
/// ```
///
/// Binding the index into the leaf is what ties a proof to exactly one position of the table.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimLeaf {
    pub index: u64,
    pub recipient: Pubkey,
    pub amount: u64,
}

impl ClaimLeaf {
    pub const LEN: usize = 8 + 32 + 8;

    pub fn new(index: u64, entry: &AirdropEntry) -> Self {
        Self {
            index,
            recipient: entry.recipient,
            amount: entry.amount,
        }
    }

    pub fn entry(&self) -> AirdropEntry {
        AirdropEntry {
            recipient: self.recipient,
            amount: self.amount,
        }
    }

    /// The Borsh encoding of the leaf, laid out by hand.
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut bytes = [0u8; Self::LEN];
        bytes[..8].copy_from_slice(&self.index.to_le_bytes());
        bytes[8..40].copy_from_slice(self.recipient.as_ref());
        bytes[40..].copy_from_slice(&self.amount.to_le_bytes());
        bytes
    }

    /// `SHA256(0x00 || borsh(leaf))`
    pub fn to_hash(&self) -> [u8; 32] {
        hash_leaf(&self.to_bytes())
    }
}
