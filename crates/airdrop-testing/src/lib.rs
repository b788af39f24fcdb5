mod airdrop_snapshot;
mod fixture_stage;
mod test_fixture;

pub use airdrop_snapshot::{AccountChange, AirdropSnapshot};
pub use fixture_stage::FixtureStage;
pub use test_fixture::{random_entries, TestFixture};

use litesvm::{types::TransactionResult, LiteSVM};
use sha2::{Digest, Sha256};
use solana_instruction::error::InstructionError;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signer::Signer as _;
use solana_transaction_error::TransactionError;

/// Standard test constants
pub const DEFAULT_ENTRY_COUNT: usize = 1_000;
pub const DEFAULT_RNG_SEED: u64 = 42;
pub const INITIAL_TIME: i64 = 1_000;
pub const WINDOW_START: i64 = 1_100;
pub const MAX_ENTRY_AMOUNT: u64 = 1_000_000;
pub const MINT_DECIMALS: u8 = 6;
pub const TEST_PAYER_LAMPORTS: u64 = 100_000_000_000; // 100 SOL

/// Stable keypair for a name, so tests can refer to the same account across runs.
pub fn deterministic_keypair(seed: &str) -> Keypair {
    let secret: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
    solana_keypair::keypair_from_seed(&secret).expect("32-byte seed is a valid ed25519 secret")
}

pub fn deterministic_pubkey(seed: &str) -> Pubkey {
    deterministic_keypair(seed).pubkey()
}

/// Load both programs from the `.so` files `build.rs` produces.
pub fn load_airdrop_programs(svm: &mut LiteSVM) {
    let deploy_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy");

    svm.add_program_from_file(airdrop::ID, format!("{deploy_dir}/airdrop.so"))
        .expect("Failed to load airdrop program");
    svm.add_program_from_file(claim_agent::ID, format!("{deploy_dir}/claim_agent.so"))
        .expect("Failed to load claim agent program");
}

/// Panics unless `result` failed with the Anchor error `code` (offset already applied) named
/// `name`. Both programs number their errors from the same offset, so the name is matched
/// against the program logs as well.
pub fn demand_airdrop_error(result: TransactionResult, code: u32, name: &str) {
    match result {
        Ok(meta) => panic!(
            "Expected {} ({}), but the transaction succeeded: {:#?}",
            name, code, meta.logs
        ),
        Err(failed_meta) => {
            match failed_meta.err {
                TransactionError::InstructionError(_, InstructionError::Custom(actual)) => {
                    assert_eq!(actual, code, "Expected {} error", name);
                }
                other => panic!("Expected {} ({}), got {:?}", name, code, other),
            }

            let marker = format!("Error Code: {}.", name);
            assert!(
                failed_meta.meta.logs.iter().any(|log| log.contains(&marker)),
                "Logs do not mention {}: {:#?}",
                name,
                failed_meta.meta.logs
            );
        }
    }
}
