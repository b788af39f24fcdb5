use airdrop::ClaimConfirmation;
use anchor_lang::prelude::*;

use crate::error::ClaimAgentError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ClaimAgentState {
    /// Freshly allocated; zeroed account data decodes to this.
    Uninitialized,
    Pending,
    Claimed { claimed_at: i64 },
}

#[account] // seed [CLAIM_AGENT_V0_SEED_PREFIX, distributor, index, proof_digest]
#[derive(InitSpace)]
pub struct ClaimAgentV0 {
    pub distributor: Pubkey,
    pub index: u64,
    pub proof_digest: [u8; 32],
    pub state: ClaimAgentState,
    pub bump: u8,
}

impl ClaimAgentV0 {
    pub fn is_claimed(&self) -> bool {
        matches!(self.state, ClaimAgentState::Claimed { .. })
    }

    /// Lock the agent once the distributor has paid. Any confirmation that is not for this
    /// agent's own entry is rejected and leaves the state untouched.
    pub fn receive_confirmation(&mut self, confirmation: &ClaimConfirmation) -> Result<()> {
        require_keys_eq!(
            confirmation.distributor,
            self.distributor,
            ClaimAgentError::UnexpectedConfirmation
        );
        require_eq!(
            confirmation.index,
            self.index,
            ClaimAgentError::UnexpectedConfirmation
        );

        match self.state {
            ClaimAgentState::Pending => {
                self.state = ClaimAgentState::Claimed {
                    claimed_at: confirmation.claimed_at,
                };
                Ok(())
            }
            ClaimAgentState::Claimed { .. } => err!(ClaimAgentError::AlreadyClaimed),
            ClaimAgentState::Uninitialized => err!(ClaimAgentError::NotDeployed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_agent() -> ClaimAgentV0 {
        ClaimAgentV0 {
            distributor: Pubkey::new_unique(),
            index: 7,
            proof_digest: [3; 32],
            state: ClaimAgentState::Pending,
            bump: 255,
        }
    }

    fn confirmation_for(agent: &ClaimAgentV0) -> ClaimConfirmation {
        ClaimConfirmation {
            distributor: agent.distributor,
            index: agent.index,
            recipient: Pubkey::new_unique(),
            amount: 500,
            claimed_at: 1_234,
        }
    }

    #[test]
    fn test_confirmation_locks_pending_agent() {
        let mut agent = pending_agent();
        let confirmation = confirmation_for(&agent);

        agent.receive_confirmation(&confirmation).unwrap();

        assert!(agent.is_claimed());
        assert_eq!(agent.state, ClaimAgentState::Claimed { claimed_at: 1_234 });
    }

    #[test]
    fn test_second_confirmation_rejected() {
        let mut agent = pending_agent();
        let confirmation = confirmation_for(&agent);
        agent.receive_confirmation(&confirmation).unwrap();

        let result = agent.receive_confirmation(&confirmation);

        assert_eq!(result.unwrap_err(), ClaimAgentError::AlreadyClaimed.into());
        assert_eq!(agent.state, ClaimAgentState::Claimed { claimed_at: 1_234 });
    }

    #[test]
    fn test_foreign_confirmation_leaves_agent_pending() {
        let mut agent = pending_agent();

        let mut other_distributor = confirmation_for(&agent);
        other_distributor.distributor = Pubkey::new_unique();
        assert_eq!(
            agent.receive_confirmation(&other_distributor).unwrap_err(),
            ClaimAgentError::UnexpectedConfirmation.into()
        );

        let mut other_index = confirmation_for(&agent);
        other_index.index += 1;
        assert_eq!(
            agent.receive_confirmation(&other_index).unwrap_err(),
            ClaimAgentError::UnexpectedConfirmation.into()
        );

        assert_eq!(agent.state, ClaimAgentState::Pending);
    }

    #[test]
    fn test_uninitialized_agent_cannot_be_confirmed() {
        let mut agent = pending_agent();
        agent.state = ClaimAgentState::Uninitialized;
        let confirmation = confirmation_for(&agent);

        assert_eq!(
            agent.receive_confirmation(&confirmation).unwrap_err(),
            ClaimAgentError::NotDeployed.into()
        );
    }

    #[test]
    fn test_zeroed_state_decodes_uninitialized() {
        let state = ClaimAgentState::try_from_slice(&[0u8]).unwrap();
        assert_eq!(state, ClaimAgentState::Uninitialized);
    }
}
