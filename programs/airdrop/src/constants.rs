use anchor_lang::prelude::*;

/// Seed prefixes for PDA derivation
#[constant]
pub const DISTRIBUTOR_V0_SEED_PREFIX: &[u8] = b"distributor";

#[constant]
pub const RESERVE_V0_SEED_PREFIX: &[u8] = b"reserve";

/// Claim agents are derived under the distributor's claim agent template, not this program.
#[constant]
pub const CLAIM_AGENT_V0_SEED_PREFIX: &[u8] = b"claim_agent";

/// Domain separation prefixes for the commitment hashes.
pub const LEAF_PREFIX: u8 = 0x00;
pub const INTERNAL_PREFIX: u8 = 0x01;
pub const PROOF_PREFIX: u8 = 0x02;

/// A u64 index space never needs more than 64 levels.
pub const MAX_PROOF_DEPTH: usize = 64;

/// Root committed for an empty entry table. Distributors refuse to initialize with it.
pub const EMPTY_ROOT: [u8; 32] = [0; 32];
