use airdrop::AirdropError;
use airdrop_testing::{
    demand_airdrop_error, AirdropSnapshot, FixtureStage, TestFixture, INITIAL_TIME, WINDOW_START,
};
use claim_agent::ClaimAgentState;

/// Test claim before the window opens → NotYetOpen
///
/// **Test flow:**
/// 1. Deploy and fund the distributor, leave the clock at INITIAL_TIME
/// 2. Deploy the claim agent for index 1
/// 3. Claim → the distributor rejects it and the whole transaction rolls back
/// 4. Verify nothing moved and the agent is still claimable
/// 5. Open the window and retry → succeeds
#[test]
fn test_claim_before_window() {
    let mut test = TestFixture::new();

    // 1. Deployed and funded, window still closed
    test.jump_to(FixtureStage::ReserveFunded);
    assert_eq!(test.now(), INITIAL_TIME);

    // 2. Agent exists before we snapshot
    test.try_deploy_claim_agent(1)
        .expect("Agent deploy should succeed");
    let state_before = AirdropSnapshot::capture_with_indices(&test, &[1]);

    // 3. Claim too early
    demand_airdrop_error(
        test.try_claim(1),
        AirdropError::NotYetOpen.into(),
        "NotYetOpen",
    );

    // 4. No side effects
    let state_after = AirdropSnapshot::capture_with_indices(&test, &[1]);
    assert_eq!(state_before, state_after);
    assert_eq!(test.claim_agent_state(1), ClaimAgentState::Pending);

    // 5. Exactly at the boundary the claim goes through
    test.warp_to(WINDOW_START);
    test.try_claim(1)
        .expect("Claim at window start should succeed");
    assert!(test.is_claimed(1));
}

/// One second before the window opens is still too early.
#[test]
fn test_claim_one_second_before_window() {
    let mut test = TestFixture::with_entry_count(8);
    test.jump_to(FixtureStage::ReserveFunded);
    test.warp_to(WINDOW_START - 1);

    demand_airdrop_error(
        test.try_claim(3),
        AirdropError::NotYetOpen.into(),
        "NotYetOpen",
    );
    assert!(!test.is_claimed(3));
    assert_eq!(test.reserve_balance(), test.compiled.total_amount);
}
