use airdrop::AirdropEntry;
use anchor_lang::error::ErrorCode as AnchorError;
use airdrop_testing::{demand_airdrop_error, deterministic_pubkey, FixtureStage, TestFixture};
use claim_agent::ClaimAgentState;
use solana_instruction::error::InstructionError;
use solana_transaction_error::TransactionError;

/// Redeploying a claim agent is a no-op, before and after it has claimed.
#[test]
fn test_claim_agent_deploy_is_idempotent() {
    let mut test = TestFixture::with_entry_count(12);
    test.jump_to(FixtureStage::WindowOpen);

    test.try_deploy_claim_agent(5)
        .expect("First deploy should succeed");
    let deployed = test.fetch_claim_agent_account(5).unwrap();
    assert_eq!(deployed.index, 5);
    assert_eq!(deployed.distributor, test.distributor_address());
    assert_eq!(deployed.proof_digest, test.claim_bundle(5).proof_digest);
    assert_eq!(deployed.state, ClaimAgentState::Pending);

    let result = test
        .try_deploy_claim_agent(5)
        .expect("Redeploy should succeed");
    assert!(result
        .logs
        .iter()
        .any(|log| log.contains("Claim agent for index 5 already deployed")));
    assert_eq!(test.fetch_claim_agent_account(5).unwrap().state, deployed.state);

    test.try_claim(5).expect("Claim should succeed");
    test.try_deploy_claim_agent(5)
        .expect("Redeploy after claim should succeed");
    assert!(test.is_claimed(5));
}

/// Submitting to an agent that was never deployed → AccountNotInitialized
#[test]
fn test_submit_claim_without_agent() {
    let mut test = TestFixture::with_entry_count(3);
    test.jump_to(FixtureStage::WindowOpen);
    let recipient = test.entry(0).recipient;

    let ixs = vec![
        test.create_token_account_ix(&test.admin_address(), &recipient),
        test.submit_claim_ix(0),
    ];
    demand_airdrop_error(
        test.send_instructions(&ixs),
        AnchorError::AccountNotInitialized as u32,
        "AccountNotInitialized",
    );
    assert_eq!(test.claim_agent_state(0), ClaimAgentState::Uninitialized);
    assert_eq!(test.reserve_balance(), test.compiled.total_amount);
}

/// An agent can only be created at the address its distributor, index and digest derive.
#[test]
fn test_deploy_claim_agent_at_wrong_address() {
    let mut test = TestFixture::with_entry_count(4);
    test.jump_to(FixtureStage::DistributorDeployed);

    let wrong = deterministic_pubkey("not-an-agent");
    let mut ix = test.deploy_claim_agent_ix(&test.admin_address(), 0);
    ix.accounts[2].pubkey = wrong;

    demand_airdrop_error(
        test.send_instructions(&[ix]),
        AnchorError::ConstraintSeeds as u32,
        "ConstraintSeeds",
    );
    assert!(!test.account_exists(&wrong));
}

/// Anyone may deploy an agent for any digest; it only ever claims what its digest commits.
#[test]
fn test_deploy_claim_agent_for_arbitrary_digest() {
    let mut test = TestFixture::with_entry_count(4);
    test.jump_to(FixtureStage::WindowOpen);

    let mut junk = test.claim_bundle(1).proof;
    junk.entry = AirdropEntry::new(deterministic_pubkey("someone"), 1);
    let (junk_agent, _) = test.address_finder().find_claim_agent_address(
        &test.distributor_address(),
        1,
        &junk.digest(),
    );

    let (ix, _, _) = airdrop_sdk::build_deploy_claim_agent_v0_ix(
        test.address_finder(),
        &test.admin_address(),
        &test.distributor_address(),
        1,
        junk.digest(),
    )
    .unwrap();
    test.send_instructions(&[ix])
        .expect("Deploying any agent should succeed");

    assert!(test.account_exists(&junk_agent));
    assert_eq!(test.claim_agent_state(1), ClaimAgentState::Uninitialized);
}

/// Redeploying the distributor with the same params fails and changes nothing.
#[test]
fn test_distributor_redeploy_fails() {
    let mut test = TestFixture::with_entry_count(3);
    test.jump_to(FixtureStage::WindowOpen);
    test.try_claim(0).expect("Claim should succeed");
    let state = test.fetch_distributor_account().unwrap();

    let result = test.try_initialize_distributor();

    match result {
        Ok(_) => panic!("Redeploying the distributor should fail"),
        Err(failed_meta) => assert!(matches!(
            failed_meta.err,
            TransactionError::InstructionError(_, InstructionError::Custom(0))
        )),
    }
    let after = test.fetch_distributor_account().unwrap();
    assert_eq!(after.claim_count, state.claim_count);
    assert_eq!(after.total_claimed, state.total_claimed);
    assert_eq!(after.claim_count, 1);
}
