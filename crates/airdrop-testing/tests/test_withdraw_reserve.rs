use airdrop::AirdropError;
use airdrop_testing::{
    demand_airdrop_error, AccountChange, AirdropSnapshot, FixtureStage, TestFixture, WINDOW_START,
};
use solana_signer::Signer as _;

/// Administrator may withdraw from the reserve strictly before the window opens.
///
/// **Test flow:**
/// 1. Fund the reserve, clock before the window
/// 2. Withdraw part of the reserve → succeeds, admin balance grows by the amount
/// 3. Stranger withdraws → Unauthorized
/// 4. Zero amount → InvalidAmount
/// 5. More than the reserve holds → LedgerTransferFailed
#[test]
fn test_withdraw_reserve_before_window() {
    let mut test = TestFixture::with_entry_count(16);
    test.jump_to(FixtureStage::ReserveFunded);
    let total = test.compiled.total_amount;

    // 2. Partial withdrawal
    let before = AirdropSnapshot::capture_all(&test);
    test.try_withdraw_reserve(100)
        .expect("Withdrawal should succeed");
    let after = AirdropSnapshot::capture_all(&test);
    before.assert_only_changed(
        &after,
        &[
            AccountChange::Reserve { delta: -100 },
            AccountChange::Admin { delta: 100 },
        ],
    );

    // 3. Not the administrator, even paying into the administrator's own account
    let stranger = test.outsider("stranger");
    let admin_token_account = test.token_account_of(&test.admin_address());
    demand_airdrop_error(
        test.try_withdraw_reserve_as(&stranger, &admin_token_account, 1),
        AirdropError::Unauthorized.into(),
        "Unauthorized",
    );

    // 4. Nothing to move
    demand_airdrop_error(
        test.try_withdraw_reserve(0),
        AirdropError::InvalidAmount.into(),
        "InvalidAmount",
    );

    // 5. More than is left
    demand_airdrop_error(
        test.try_withdraw_reserve(total),
        AirdropError::LedgerTransferFailed.into(),
        "LedgerTransferFailed",
    );

    assert_eq!(AirdropSnapshot::capture_all(&test), after);
}

/// The administrator cannot route a withdrawal into somebody else's token account.
#[test]
fn test_withdraw_reserve_to_foreign_account() {
    let mut test = TestFixture::with_entry_count(4);
    test.jump_to(FixtureStage::ReserveFunded);

    let stranger = test.outsider("stranger");
    let stranger_token_account = test.token_account_of(&stranger.pubkey());
    let create = test.create_token_account_ix(&stranger.pubkey(), &stranger.pubkey());
    test.send_instructions_as(&stranger, &[create])
        .expect("Token account creation should succeed");

    let admin = test.admin.insecure_clone();
    demand_airdrop_error(
        test.try_withdraw_reserve_as(&admin, &stranger_token_account, 1),
        AirdropError::Unauthorized.into(),
        "Unauthorized",
    );
    assert_eq!(test.reserve_balance(), test.compiled.total_amount);
}

/// Once the window is open, the reserve belongs to the claimants.
#[test]
fn test_withdraw_reserve_after_window_opens() {
    let mut test = TestFixture::new();
    test.jump_to(FixtureStage::ReserveFunded);

    test.warp_to(WINDOW_START);
    let before = AirdropSnapshot::capture_all(&test);
    demand_airdrop_error(
        test.try_withdraw_reserve(1),
        AirdropError::WindowAlreadyOpen.into(),
        "WindowAlreadyOpen",
    );

    test.warp_to(WINDOW_START + 1_000);
    demand_airdrop_error(
        test.try_withdraw_reserve(1),
        AirdropError::WindowAlreadyOpen.into(),
        "WindowAlreadyOpen",
    );

    assert_eq!(AirdropSnapshot::capture_all(&test), before);
}

/// Withdrawing everything before the window leaves nothing to claim.
#[test]
fn test_withdraw_entire_reserve_then_claim_fails() {
    let mut test = TestFixture::with_entry_count(4);
    test.jump_to(FixtureStage::ReserveFunded);
    let total = test.compiled.total_amount;

    test.try_withdraw_reserve(total)
        .expect("Full withdrawal should succeed");
    assert_eq!(test.reserve_balance(), 0);
    assert_eq!(test.balance_of(&test.admin_address()), total);

    test.warp_to(WINDOW_START);
    demand_airdrop_error(
        test.try_claim(0),
        AirdropError::LedgerTransferFailed.into(),
        "LedgerTransferFailed",
    );
    assert!(!test.is_claimed(0));
}
