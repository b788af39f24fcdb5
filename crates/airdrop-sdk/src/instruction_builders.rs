use airdrop::{AirdropEntry, MerkleProof};
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{prelude::*, InstructionData as _};
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;

use crate::{AddressFinder, ClaimBundle, DistributorParams};

pub fn build_initialize_distributor_v0_ix(
    address_finder: &AddressFinder,
    params: &DistributorParams,
) -> Result<(
    Instruction,
    airdrop::accounts::InitializeDistributorV0,
    airdrop::instruction::InitializeDistributorV0,
)> {
    let (distributor, _) = address_finder.find_distributor_address(params);
    let (reserve, _) = address_finder.find_reserve_address(&distributor);

    let ix_accounts = airdrop::accounts::InitializeDistributorV0 {
        admin: params.administrator,
        distributor,
        mint: params.mint,
        reserve,
        token_program: anchor_spl::token::ID,
        system_program: anchor_lang::system_program::ID,
    };

    let ix_data = airdrop::instruction::InitializeDistributorV0 {
        merkle_root: params.merkle_root,
        claim_agent_template: params.claim_agent_template,
        window_start: params.window_start,
    };

    let ix = Instruction {
        program_id: address_finder.airdrop_program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_withdraw_reserve_v0_ix(
    address_finder: &AddressFinder,
    admin: &Pubkey,
    distributor: &Pubkey,
    destination_token_account: &Pubkey,
    amount: u64,
) -> Result<(
    Instruction,
    airdrop::accounts::WithdrawReserveV0,
    airdrop::instruction::WithdrawReserveV0,
)> {
    let (reserve, _) = address_finder.find_reserve_address(distributor);

    let ix_accounts = airdrop::accounts::WithdrawReserveV0 {
        admin: *admin,
        distributor: *distributor,
        reserve,
        destination_token_account: *destination_token_account,
        token_program: anchor_spl::token::ID,
    };

    let ix_data = airdrop::instruction::WithdrawReserveV0 { amount };

    let ix = Instruction {
        program_id: address_finder.airdrop_program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

/// Moves `amount` from `source_token_account` (owned by `authority`) into the distributor's
/// reserve. A plain SPL transfer; the distributor does not need to be involved.
pub fn build_fund_reserve_ix(
    address_finder: &AddressFinder,
    authority: &Pubkey,
    source_token_account: &Pubkey,
    distributor: &Pubkey,
    amount: u64,
) -> Result<Instruction> {
    let (reserve, _) = address_finder.find_reserve_address(distributor);
    let ix = spl_token::instruction::transfer(
        &spl_token::ID,
        source_token_account,
        &reserve,
        authority,
        &[],
        amount,
    )?;
    Ok(ix)
}

pub fn build_deploy_claim_agent_v0_ix(
    address_finder: &AddressFinder,
    payer: &Pubkey,
    distributor: &Pubkey,
    index: u64,
    proof_digest: [u8; 32],
) -> Result<(
    Instruction,
    claim_agent::accounts::DeployClaimAgentV0,
    claim_agent::instruction::DeployClaimAgentV0,
)> {
    let (claim_agent, _) =
        address_finder.find_claim_agent_address(distributor, index, &proof_digest);

    let ix_accounts = claim_agent::accounts::DeployClaimAgentV0 {
        payer: *payer,
        distributor: *distributor,
        claim_agent,
        system_program: anchor_lang::system_program::ID,
    };

    let ix_data = claim_agent::instruction::DeployClaimAgentV0 {
        index,
        proof_digest,
    };

    let ix = Instruction {
        program_id: address_finder.claim_agent_template,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_submit_claim_v0_ix(
    address_finder: &AddressFinder,
    claim_agent: &Pubkey,
    distributor: &Pubkey,
    recipient_token_account: &Pubkey,
    entry: AirdropEntry,
    proof: MerkleProof,
) -> Result<(
    Instruction,
    claim_agent::accounts::SubmitClaimV0,
    claim_agent::instruction::SubmitClaimV0,
)> {
    let (reserve, _) = address_finder.find_reserve_address(distributor);

    let ix_accounts = claim_agent::accounts::SubmitClaimV0 {
        claim_agent: *claim_agent,
        distributor: *distributor,
        reserve,
        recipient_token_account: *recipient_token_account,
        airdrop_program: address_finder.airdrop_program_id,
        token_program: anchor_spl::token::ID,
    };

    let ix_data = claim_agent::instruction::SubmitClaimV0 { entry, proof };

    let ix = Instruction {
        program_id: address_finder.claim_agent_template,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

/// Deploy the agent, make sure the recipient's token account exists, then submit. Every step
/// is idempotent up to the submit, so the set can be resent until the claim lands.
pub fn build_claim_ixs(
    address_finder: &AddressFinder,
    payer: &Pubkey,
    bundle: &ClaimBundle,
) -> Result<Vec<Instruction>> {
    let (deploy_ix, _, _) = build_deploy_claim_agent_v0_ix(
        address_finder,
        payer,
        &bundle.distributor,
        bundle.index,
        bundle.proof_digest,
    )?;

    let create_ata_ix = create_associated_token_account_idempotent(
        payer,
        &bundle.entry.recipient,
        &bundle.mint,
        &spl_token::ID,
    );

    let recipient_token_account =
        address_finder.find_recipient_token_account(&bundle.entry.recipient, &bundle.mint);
    let (submit_ix, _, _) = build_submit_claim_v0_ix(
        address_finder,
        &bundle.claim_agent_address,
        &bundle.distributor,
        &recipient_token_account,
        bundle.entry,
        bundle.proof.clone(),
    )?;

    Ok(vec![deploy_ix, create_ata_ix, submit_ix])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile_airdrop, AirdropSettings};
    use airdrop_csvs::EntryCsvRow;

    #[test]
    fn test_claim_ixs_target_bundle_accounts() {
        let rows: Vec<EntryCsvRow> = (0..4)
            .map(|index| EntryCsvRow {
                index,
                recipient: Pubkey::new_unique(),
                amount: 100,
            })
            .collect();
        let settings = AirdropSettings {
            administrator: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            window_start: 0,
        };
        let finder = AddressFinder::default();
        let compiled = compile_airdrop(&finder, settings, &rows).unwrap();
        let bundle = compiled.claim_bundle(2).unwrap();
        let payer = Pubkey::new_unique();

        let ixs = build_claim_ixs(&finder, &payer, &bundle).unwrap();

        assert_eq!(ixs.len(), 3);
        assert_eq!(ixs[0].program_id, claim_agent::ID);
        assert_eq!(ixs[1].program_id, spl_associated_token_account::ID);
        assert_eq!(ixs[2].program_id, claim_agent::ID);

        let submit_accounts: Vec<Pubkey> = ixs[2].accounts.iter().map(|meta| meta.pubkey).collect();
        assert_eq!(submit_accounts[0], bundle.claim_agent_address);
        assert_eq!(submit_accounts[1], compiled.distributor);
        assert_eq!(submit_accounts[2], compiled.reserve);
        assert_eq!(
            submit_accounts[3],
            finder.find_recipient_token_account(&bundle.entry.recipient, &settings.mint)
        );
        assert_eq!(submit_accounts[4], airdrop::ID);
    }

    #[test]
    fn test_initialize_distributor_ix_accounts() {
        let params = DistributorParams {
            merkle_root: [4; 32],
            claim_agent_template: claim_agent::ID,
            window_start: 1_100,
            administrator: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
        };
        let finder = AddressFinder::default();

        let (ix, accounts, data) = build_initialize_distributor_v0_ix(&finder, &params).unwrap();

        assert_eq!(ix.program_id, airdrop::ID);
        assert_eq!(accounts.distributor, finder.find_distributor_address(&params).0);
        assert_eq!(
            accounts.reserve,
            finder.find_reserve_address(&accounts.distributor).0
        );
        assert!(ix.accounts[0].is_signer);
        assert_eq!(data.window_start, 1_100);
    }
}
