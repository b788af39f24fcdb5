use anchor_lang::prelude::*;

#[error_code]
pub enum ClaimAgentError {
    #[msg("This entry has already been claimed.")]
    AlreadyClaimed,
    #[msg("Confirmation does not match this claim agent.")]
    UnexpectedConfirmation,
    #[msg("Claim agent has not been deployed.")]
    NotDeployed,
}
