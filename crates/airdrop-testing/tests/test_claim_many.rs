use airdrop_testing::{AirdropSnapshot, FixtureStage, TestFixture};

/// Claim a spread of indices one after another; each pays exactly its own amount.
#[test]
fn test_claim_many_sequentially() {
    let mut test = TestFixture::new();
    test.jump_to(FixtureStage::WindowOpen);

    let indices: Vec<u64> = (0..1_000).step_by(20).collect();
    let before = AirdropSnapshot::capture_with_indices(&test, &indices);

    for &index in &indices {
        let entry = test.entry(index);
        let balance_before = test.balance_of(&entry.recipient);

        test.try_claim(index)
            .unwrap_or_else(|e| panic!("Claim for index {index} failed: {:?}", e.err));

        assert_eq!(
            test.balance_of(&entry.recipient),
            balance_before + entry.amount,
            "index {index} paid the wrong amount"
        );
    }

    let after = AirdropSnapshot::capture_with_indices(&test, &indices);
    let paid: u64 = indices.iter().map(|&index| test.entry(index).amount).sum();

    assert_eq!(before.reserve_balance - after.reserve_balance, paid);
    assert_eq!(after.total_claimed, Some(paid));
    assert_eq!(after.claim_count, Some(indices.len() as u64));
    assert!(indices.iter().all(|&index| test.is_claimed(index)));
    assert!(!test.is_claimed(1));
}

/// Claiming every entry drains the reserve to exactly zero.
#[test]
fn test_claim_all_entries_drains_reserve() {
    let mut test = TestFixture::with_entry_count(37);
    test.jump_to(FixtureStage::WindowOpen);

    for index in 0..37 {
        test.try_claim(index).expect("Claim should succeed");
    }

    assert_eq!(test.reserve_balance(), 0);
    assert_eq!(
        test.fetch_distributor_account().unwrap().total_claimed,
        test.compiled.total_amount
    );
}
