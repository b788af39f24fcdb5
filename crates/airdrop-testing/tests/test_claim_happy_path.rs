use airdrop_testing::{AccountChange, AirdropSnapshot, FixtureStage, TestFixture};
use claim_agent::ClaimAgentState;
use solana_signer::Signer as _;

/// Claim index 1 well after the window opens.
///
/// **What this test validates:**
/// - The recipient receives exactly the committed amount
/// - The reserve pays exactly that amount and nothing else moves
/// - The claim agent ends in `Claimed` stamped with the claim time
/// - Distributor counters record the claim
#[test]
fn test_claim_happy_path() {
    let mut test = TestFixture::new();
    test.enable_send_transaction_logging();
    test.jump_to(FixtureStage::WindowOpen);
    test.warp_to(2_000);

    let entry = test.entry(1);
    let before = AirdropSnapshot::capture_with_indices(&test, &[1]);

    let result = test.try_claim(1).expect("Claim should succeed");
    assert!(result
        .logs
        .iter()
        .any(|log| log.contains("Merkle proof verified successfully.")));

    let after = AirdropSnapshot::capture_with_indices(&test, &[1]);
    before.assert_only_changed(
        &after,
        &[
            AccountChange::Reserve {
                delta: -(entry.amount as i64),
            },
            AccountChange::Recipient {
                pubkey: entry.recipient,
                delta: entry.amount as i64,
            },
        ],
    );

    assert_eq!(
        test.claim_agent_state(1),
        ClaimAgentState::Claimed { claimed_at: 2_000 }
    );
    assert_eq!(after.total_claimed, Some(entry.amount));
    assert_eq!(after.claim_count, Some(1));

    // Neighbouring entries are untouched
    assert!(!test.is_claimed(0));
    assert!(!test.is_claimed(2));
}

/// The payout goes to the committed recipient no matter who submits and pays the fees.
#[test]
fn test_claim_submitted_by_third_party_pays_recipient() {
    let mut test = TestFixture::with_entry_count(10);
    test.jump_to(FixtureStage::WindowOpen);

    let entry = test.entry(4);
    let relayer = test.outsider("relayer");

    test.try_claim_as(&relayer, 4)
        .expect("Relayed claim should succeed");

    assert_eq!(test.balance_of(&entry.recipient), entry.amount);
    assert_eq!(test.balance_of(&relayer.pubkey()), 0);
    assert!(test.is_claimed(4));
}
