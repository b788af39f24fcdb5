use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use airdrop::AirdropEntry;
use airdrop_merkle::ClaimTree;
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

use crate::serde_helpers::{hex32, pubkey_base58};
use crate::{AddressFinder, ClaimBundle, DistributorParams, SdkError, SdkResult};

/// An entry table committed into a tree, with every address needed to deploy and claim it.
#[derive(Clone)]
pub struct CompiledAirdrop {
    pub address_finder: AddressFinder,
    pub params: DistributorParams,
    pub distributor: Pubkey,
    pub reserve: Pubkey,
    pub total_amount: u64,
    tree: ClaimTree,
}

impl CompiledAirdrop {
    pub(crate) fn new(
        address_finder: AddressFinder,
        params: DistributorParams,
        tree: ClaimTree,
    ) -> SdkResult<Self> {
        let total_amount = tree
            .entries()
            .iter()
            .try_fold(0u64, |total, entry| total.checked_add(entry.amount))
            .ok_or(SdkError::AmountOverflow)?;

        let (distributor, _) = address_finder.find_distributor_address(&params);
        let (reserve, _) = address_finder.find_reserve_address(&distributor);

        Ok(Self {
            address_finder,
            params,
            distributor,
            reserve,
            total_amount,
            tree,
        })
    }

    pub fn merkle_root(&self) -> [u8; 32] {
        self.params.merkle_root
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn entries(&self) -> &[AirdropEntry] {
        self.tree.entries()
    }

    pub fn entry(&self, index: u64) -> SdkResult<&AirdropEntry> {
        Ok(self.tree.entry(index)?)
    }

    pub fn tree(&self) -> &ClaimTree {
        &self.tree
    }

    /// All entries paying `recipient`, with their indices.
    pub fn entries_for(&self, recipient: &Pubkey) -> Vec<(u64, AirdropEntry)> {
        self.entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.recipient == *recipient)
            .map(|(index, entry)| (index as u64, *entry))
            .collect()
    }

    /// Everything a client needs to claim `index`.
    pub fn claim_bundle(&self, index: u64) -> SdkResult<ClaimBundle> {
        let proof = self.tree.proof_for(index)?;
        let proof_digest = proof.digest();
        let (claim_agent_address, _) =
            self.address_finder
                .find_claim_agent_address(&self.distributor, index, &proof_digest);

        Ok(ClaimBundle {
            index,
            entry: proof.entry,
            proof,
            proof_digest,
            claim_agent_address,
            distributor: self.distributor,
            mint: self.params.mint,
        })
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> SdkResult<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &CompiledAirdropFile::from(self))?;
        Ok(())
    }

    /// Load a compiled airdrop, rebuilding the tree and checking that the recorded root and
    /// addresses still derive from the recorded entries.
    pub fn load_json<P: AsRef<Path>>(path: P) -> SdkResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let file: CompiledAirdropFile = serde_json::from_reader(reader)?;
        file.into_compiled()
    }
}

#[derive(Serialize, Deserialize)]
struct CompiledAirdropFile {
    #[serde(with = "pubkey_base58")]
    program_id: Pubkey,
    #[serde(with = "pubkey_base58")]
    mint: Pubkey,
    #[serde(with = "pubkey_base58")]
    claim_agent_template: Pubkey,
    #[serde(with = "pubkey_base58")]
    administrator: Pubkey,
    window_start: i64,
    #[serde(with = "hex32")]
    merkle_root: [u8; 32],
    #[serde(with = "pubkey_base58")]
    distributor: Pubkey,
    #[serde(with = "pubkey_base58")]
    reserve: Pubkey,
    total_amount: u64,
    entries: Vec<EntryRecord>,
}

#[derive(Serialize, Deserialize)]
struct EntryRecord {
    index: u64,
    #[serde(with = "pubkey_base58")]
    recipient: Pubkey,
    amount: u64,
}

impl From<&CompiledAirdrop> for CompiledAirdropFile {
    fn from(compiled: &CompiledAirdrop) -> Self {
        Self {
            program_id: compiled.address_finder.airdrop_program_id,
            mint: compiled.params.mint,
            claim_agent_template: compiled.params.claim_agent_template,
            administrator: compiled.params.administrator,
            window_start: compiled.params.window_start,
            merkle_root: compiled.params.merkle_root,
            distributor: compiled.distributor,
            reserve: compiled.reserve,
            total_amount: compiled.total_amount,
            entries: compiled
                .entries()
                .iter()
                .enumerate()
                .map(|(index, entry)| EntryRecord {
                    index: index as u64,
                    recipient: entry.recipient,
                    amount: entry.amount,
                })
                .collect(),
        }
    }
}

impl CompiledAirdropFile {
    fn into_compiled(self) -> SdkResult<CompiledAirdrop> {
        let indexed = self
            .entries
            .into_iter()
            .map(|record| {
                (
                    record.index,
                    AirdropEntry::new(record.recipient, record.amount),
                )
            })
            .collect();
        let tree = ClaimTree::from_indexed(indexed)?;

        if tree.root() != self.merkle_root {
            return Err(SdkError::RootMismatch {
                recorded: hex::encode(self.merkle_root),
                rebuilt: hex::encode(tree.root()),
            });
        }

        let address_finder = AddressFinder::new(self.program_id, self.claim_agent_template);
        let params = DistributorParams {
            merkle_root: self.merkle_root,
            claim_agent_template: self.claim_agent_template,
            window_start: self.window_start,
            administrator: self.administrator,
            mint: self.mint,
        };
        let compiled = CompiledAirdrop::new(address_finder, params, tree)?;

        if compiled.distributor != self.distributor {
            return Err(SdkError::AddressMismatch {
                what: "distributor",
                recorded: self.distributor.to_string(),
                derived: compiled.distributor.to_string(),
            });
        }
        if compiled.reserve != self.reserve {
            return Err(SdkError::AddressMismatch {
                what: "reserve",
                recorded: self.reserve.to_string(),
                derived: compiled.reserve.to_string(),
            });
        }

        Ok(compiled)
    }
}
