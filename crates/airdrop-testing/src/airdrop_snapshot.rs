use std::collections::HashMap;

use claim_agent::ClaimAgentState;
use solana_pubkey::Pubkey;

use crate::TestFixture;

/// Airdrop state captured for before/after comparisons:
/// - reserve and administrator balances
/// - distributor counters
/// - optional recipient balances and claim agent states for specific indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropSnapshot {
    pub reserve_balance: u64,
    pub admin_balance: u64,
    pub total_claimed: Option<u64>,
    pub claim_count: Option<u64>,
    pub tracked_recipients: HashMap<Pubkey, u64>,
    pub tracked_agents: HashMap<u64, ClaimAgentState>,
}

impl AirdropSnapshot {
    pub fn capture_all(test: &TestFixture) -> Self {
        let distributor = test.fetch_distributor_account();

        Self {
            reserve_balance: test.reserve_balance(),
            admin_balance: test.balance_of(&test.admin_address()),
            total_claimed: distributor.as_ref().map(|d| d.total_claimed),
            claim_count: distributor.as_ref().map(|d| d.claim_count),
            tracked_recipients: HashMap::new(),
            tracked_agents: HashMap::new(),
        }
    }

    /// Also capture the recipient balance and agent state for each index.
    pub fn capture_with_indices(test: &TestFixture, indices: &[u64]) -> Self {
        let mut snapshot = Self::capture_all(test);

        for &index in indices {
            let recipient = test.entry(index).recipient;
            snapshot
                .tracked_recipients
                .insert(recipient, test.balance_of(&recipient));
            snapshot
                .tracked_agents
                .insert(index, test.claim_agent_state(index));
        }

        snapshot
    }

    /// Assert the balance deltas from `self` to `other`. Tracked accounts not listed must be
    /// unchanged.
    pub fn assert_only_changed(&self, other: &Self, expected_changes: &[AccountChange]) {
        let mut expected_reserve = 0i128;
        let mut expected_admin = 0i128;
        let mut expected_recipients: HashMap<Pubkey, i128> = HashMap::new();

        for change in expected_changes {
            match change {
                AccountChange::Reserve { delta } => expected_reserve += *delta as i128,
                AccountChange::Admin { delta } => expected_admin += *delta as i128,
                AccountChange::Recipient { pubkey, delta } => {
                    *expected_recipients.entry(*pubkey).or_default() += *delta as i128;
                }
            }
        }

        assert_eq!(
            other.reserve_balance as i128 - self.reserve_balance as i128,
            expected_reserve,
            "Reserve balance delta mismatch"
        );
        assert_eq!(
            other.admin_balance as i128 - self.admin_balance as i128,
            expected_admin,
            "Admin balance delta mismatch"
        );

        for (pubkey, before) in &self.tracked_recipients {
            let after = other.tracked_recipients.get(pubkey).copied().unwrap_or(0);
            let expected = expected_recipients.get(pubkey).copied().unwrap_or(0);
            assert_eq!(
                after as i128 - *before as i128,
                expected,
                "Recipient {} delta mismatch",
                pubkey
            );
        }
    }
}

/// Expected balance changes for surgical verification
#[derive(Debug, Clone)]
pub enum AccountChange {
    Reserve { delta: i64 },
    Admin { delta: i64 },
    Recipient { pubkey: Pubkey, delta: i64 },
}
