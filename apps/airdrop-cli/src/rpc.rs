use std::path::Path;

use anchor_lang::AccountDeserialize;
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::error::{CliError, CliResult};

pub fn connect(rpc_url: String) -> RpcClient {
    RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed())
}

pub fn load_keypair(path: &Path) -> CliResult<Keypair> {
    read_keypair_file(path)
        .map_err(|e| CliError::Keypair(format!("{}: {}", path.display(), e)))
}

/// Sign with `signer` as fee payer and wait for confirmation.
pub fn send_instructions(
    rpc_client: &RpcClient,
    signer: &Keypair,
    instructions: &[Instruction],
) -> CliResult<Signature> {
    let recent_blockhash = rpc_client.get_latest_blockhash()?;
    let message = Message::new(instructions, Some(&signer.pubkey()));
    let mut transaction = Transaction::new_unsigned(message);
    transaction.sign(&[signer], recent_blockhash);

    let config = RpcSendTransactionConfig {
        skip_preflight: false,
        preflight_commitment: Some(CommitmentLevel::Confirmed),
        encoding: None,
        max_retries: Some(5),
        min_context_slot: None,
    };

    let signature = rpc_client.send_and_confirm_transaction_with_spinner_and_config(
        &transaction,
        CommitmentConfig::confirmed(),
        config,
    )?;
    println!("   Transaction signature: {}", signature);
    Ok(signature)
}

/// Fetch and decode an Anchor account; `None` when the address holds nothing.
pub fn fetch_anchor_account<T: AccountDeserialize>(
    rpc_client: &RpcClient,
    address: &Pubkey,
) -> CliResult<Option<T>> {
    let Some(account) = rpc_client
        .get_account_with_commitment(address, CommitmentConfig::confirmed())?
        .value
    else {
        return Ok(None);
    };
    T::try_deserialize(&mut account.data.as_slice())
        .map(Some)
        .map_err(|e| CliError::AccountDecode(format!("{address}: {e}")))
}

pub fn fetch_token_balance(rpc_client: &RpcClient, token_account: &Pubkey) -> CliResult<u64> {
    let balance = rpc_client.get_token_account_balance(token_account)?;
    balance
        .amount
        .parse()
        .map_err(|e| CliError::AccountDecode(format!("{token_account}: {e}")))
}
