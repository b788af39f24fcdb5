use airdrop::EMPTY_ROOT;
use solana_pubkey::Pubkey;

use crate::{SdkError, SdkResult};

/// Everything that goes into `initialize_distributor_v0`. Apart from the mint, every field is
/// also a seed of the distributor address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributorParams {
    pub merkle_root: [u8; 32],
    pub claim_agent_template: Pubkey,
    pub window_start: i64,
    pub administrator: Pubkey,
    pub mint: Pubkey,
}

impl DistributorParams {
    /// Rejects what `initialize_distributor_v0` would reject, before anything is sent.
    pub fn validate(&self) -> SdkResult<()> {
        if self.merkle_root == EMPTY_ROOT {
            return Err(SdkError::InvalidParams("merkle root is empty".into()));
        }
        if self.claim_agent_template == Pubkey::default() || self.claim_agent_template == airdrop::ID
        {
            return Err(SdkError::InvalidParams(format!(
                "claim agent template {} cannot be used",
                self.claim_agent_template
            )));
        }
        if self.administrator == Pubkey::default() {
            return Err(SdkError::InvalidParams("administrator is unset".into()));
        }
        if self.mint == Pubkey::default() {
            return Err(SdkError::InvalidParams("mint is unset".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DistributorParams {
        DistributorParams {
            merkle_root: [9; 32],
            claim_agent_template: claim_agent::ID,
            window_start: 1_100,
            administrator: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
        }
    }

    #[test]
    fn test_valid_params() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn test_invalid_params() {
        let cases = [
            DistributorParams {
                merkle_root: EMPTY_ROOT,
                ..params()
            },
            DistributorParams {
                claim_agent_template: Pubkey::default(),
                ..params()
            },
            DistributorParams {
                claim_agent_template: airdrop::ID,
                ..params()
            },
            DistributorParams {
                administrator: Pubkey::default(),
                ..params()
            },
            DistributorParams {
                mint: Pubkey::default(),
                ..params()
            },
        ];

        for case in cases {
            assert!(
                matches!(case.validate(), Err(SdkError::InvalidParams(_))),
                "{:?} should be rejected",
                case
            );
        }
    }
}
