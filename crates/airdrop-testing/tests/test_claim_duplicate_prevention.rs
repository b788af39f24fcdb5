use airdrop_testing::{demand_airdrop_error, AirdropSnapshot, FixtureStage, TestFixture};
use claim_agent::ClaimAgentError;

/// Test duplicate claim prevention via the claim agent's terminal state
///
/// **Test flow:**
/// 1. Claim index 1 successfully
/// 2. Claim again through the same agent → AlreadyClaimed at the agent
/// 3. Verify no balance or counter changed
#[test]
fn test_claim_duplicate_prevention() {
    let mut test = TestFixture::new();
    test.jump_to(FixtureStage::WindowOpen);
    test.warp_to(2_000);

    // 1. First claim
    test.try_claim(1).expect("First claim should succeed");
    assert!(test.is_claimed(1));

    let state_after_first_claim = AirdropSnapshot::capture_with_indices(&test, &[1]);

    // 2. Same claim again, in full and as a bare submit
    demand_airdrop_error(
        test.try_claim(1),
        ClaimAgentError::AlreadyClaimed.into(),
        "AlreadyClaimed",
    );
    let submit = test.submit_claim_ix(1);
    demand_airdrop_error(
        test.send_instructions(&[submit]),
        ClaimAgentError::AlreadyClaimed.into(),
        "AlreadyClaimed",
    );

    // 3. Nothing moved
    let state_after_duplicate_attempts = AirdropSnapshot::capture_with_indices(&test, &[1]);
    assert_eq!(
        state_after_first_claim, state_after_duplicate_attempts,
        "No state should change when duplicate claim is blocked"
    );
}

/// A duplicate claim never reaches the distributor.
#[test]
fn test_duplicate_claim_stops_at_agent() {
    let mut test = TestFixture::with_entry_count(5);
    test.jump_to(FixtureStage::WindowOpen);
    test.try_claim(2).expect("First claim should succeed");

    let submit = test.submit_claim_ix(2);
    let failed_meta = test
        .send_instructions(&[submit])
        .expect_err("Duplicate claim should fail");

    let airdrop_invoked = format!("Program {} invoke", airdrop::ID);
    assert!(
        !failed_meta
            .meta
            .logs
            .iter()
            .any(|log| log.starts_with(&airdrop_invoked)),
        "Distributor should not be invoked: {:#?}",
        failed_meta.meta.logs
    );
}
