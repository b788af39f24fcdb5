use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    #[msg("The claim window has not opened yet.")]
    NotYetOpen,
    #[msg("Caller is not the claim agent derived for this index and proof.")]
    UnauthorizedCaller,
    #[msg("Invalid Merkle proof provided.")]
    InvalidProof,
    #[msg("The claim window is open; the reserve is locked.")]
    WindowAlreadyOpen,
    #[msg("The reserve cannot cover this transfer.")]
    LedgerTransferFailed,
    #[msg("Only the administrator can perform this action.")]
    Unauthorized,
    #[msg("Merkle root commits an empty entry table.")]
    EmptyMerkleRoot,
    #[msg("Claim agent template must be a program other than the distributor.")]
    InvalidClaimAgentTemplate,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Token account does not belong to the entry's recipient.")]
    RecipientMismatch,
    #[msg("Token account mint does not match the distributor's mint.")]
    MintMismatch,
    #[msg("A calculation resulted in a numeric overflow.")]
    NumericOverflow,
}
