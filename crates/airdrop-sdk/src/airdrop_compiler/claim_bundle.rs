use std::fs;
use std::path::Path;

use airdrop::{AirdropEntry, MerkleProof};
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

use crate::serde_helpers::{hex32, hex_bytes, pubkey_base58};
use crate::{AddressFinder, SdkError, SdkResult};

/// What a claimant needs to claim one entry: the entry, its proof, and the claim agent address
/// that proof selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimBundle {
    pub index: u64,
    pub entry: AirdropEntry,
    pub proof: MerkleProof,
    pub proof_digest: [u8; 32],
    pub claim_agent_address: Pubkey,
    pub distributor: Pubkey,
    pub mint: Pubkey,
}

impl ClaimBundle {
    /// True when the proof commits this bundle's entry under `root` and the recorded agent
    /// address is the one derived from the proof.
    pub fn verify(&self, address_finder: &AddressFinder, root: &[u8; 32]) -> bool {
        let digest = self.proof.digest();
        let (expected_agent, _) =
            address_finder.find_claim_agent_address(&self.distributor, self.index, &digest);

        digest == self.proof_digest
            && expected_agent == self.claim_agent_address
            && self.proof.verify(root, self.index, &self.entry)
    }

    pub fn to_json(&self) -> SdkResult<String> {
        Ok(serde_json::to_string_pretty(&ClaimBundleFile::try_from(
            self,
        )?)?)
    }

    pub fn from_json(json: &str) -> SdkResult<Self> {
        let file: ClaimBundleFile = serde_json::from_str(json)?;
        file.try_into()
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> SdkResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> SdkResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

#[derive(Serialize, Deserialize)]
struct ClaimBundleFile {
    index: u64,
    #[serde(with = "pubkey_base58")]
    recipient: Pubkey,
    amount: u64,
    /// Borsh encoding of the proof
    #[serde(with = "hex_bytes")]
    proof: Vec<u8>,
    #[serde(with = "hex32")]
    proof_digest: [u8; 32],
    #[serde(with = "pubkey_base58")]
    claim_agent_address: Pubkey,
    #[serde(with = "pubkey_base58")]
    distributor: Pubkey,
    #[serde(with = "pubkey_base58")]
    mint: Pubkey,
}

impl TryFrom<&ClaimBundle> for ClaimBundleFile {
    type Error = SdkError;

    fn try_from(bundle: &ClaimBundle) -> SdkResult<Self> {
        Ok(Self {
            index: bundle.index,
            recipient: bundle.entry.recipient,
            amount: bundle.entry.amount,
            proof: bundle.proof.try_to_bytes()?,
            proof_digest: bundle.proof_digest,
            claim_agent_address: bundle.claim_agent_address,
            distributor: bundle.distributor,
            mint: bundle.mint,
        })
    }
}

impl TryFrom<ClaimBundleFile> for ClaimBundle {
    type Error = SdkError;

    fn try_from(file: ClaimBundleFile) -> SdkResult<Self> {
        let proof = MerkleProof::try_from_bytes(&file.proof)?;
        let entry = AirdropEntry::new(file.recipient, file.amount);

        if proof.index != file.index || proof.entry != entry {
            return Err(SdkError::InvalidBundle(format!(
                "proof does not commit the bundled entry at index {}",
                file.index
            )));
        }

        Ok(Self {
            index: file.index,
            entry,
            proof,
            proof_digest: file.proof_digest,
            claim_agent_address: file.claim_agent_address,
            distributor: file.distributor,
            mint: file.mint,
        })
    }
}
