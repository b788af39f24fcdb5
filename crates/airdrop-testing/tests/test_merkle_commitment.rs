use airdrop::AirdropEntry;
use airdrop_merkle::{verify_multi_proof, ClaimTree};
use airdrop_testing::{random_entries, DEFAULT_RNG_SEED};

/// Every committed entry verifies against the root with its own proof.
#[test]
fn test_every_entry_verifies() {
    let entries = random_entries(1_000, DEFAULT_RNG_SEED);
    let tree = ClaimTree::from_entries(entries.clone());
    let root = tree.root();

    for (index, entry) in entries.iter().enumerate() {
        let proof = tree.proof_for(index as u64).unwrap();
        assert!(proof.verify(&root, index as u64, entry), "index {index}");
        assert!(proof.len() <= 10);
    }
}

/// Any entry other than the committed one fails with the committed proof.
#[test]
fn test_altered_entries_fail() {
    let entries = random_entries(1_000, DEFAULT_RNG_SEED);
    let tree = ClaimTree::from_entries(entries.clone());
    let root = tree.root();

    for index in (0..1_000u64).step_by(97) {
        let entry = entries[index as usize];
        let proof = tree.proof_for(index).unwrap();

        let other_amount = AirdropEntry::new(entry.recipient, entry.amount + 1);
        let other_recipient = AirdropEntry::new(entries[(index as usize + 1) % 1_000].recipient, entry.amount);

        assert!(!proof.verify(&root, index, &other_amount));
        assert!(!proof.verify(&root, index, &other_recipient));
        assert!(!proof.verify(&root, (index + 1) % 1_000, &entry));
    }
}

/// Identical tables commit to identical roots; a single change moves the root.
#[test]
fn test_root_is_pure_function_of_table() {
    let entries = random_entries(250, 7);
    let a = ClaimTree::from_entries(entries.clone());
    let b = ClaimTree::from_entries(entries.clone());
    assert_eq!(a.root(), b.root());

    let mut changed = entries;
    changed[123].amount += 1;
    assert_ne!(ClaimTree::from_entries(changed).root(), a.root());
}

#[test]
fn test_multi_proof_over_large_table() {
    let tree = ClaimTree::from_entries(random_entries(1_000, DEFAULT_RNG_SEED));
    let proof = tree.multi_proof(&[1, 2, 500, 999]).unwrap();
    assert!(verify_multi_proof(&tree.root(), &proof));
}
