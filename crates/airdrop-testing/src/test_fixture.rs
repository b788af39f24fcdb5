use {
    crate::{
        deterministic_keypair, deterministic_pubkey, load_airdrop_programs, FixtureStage,
        DEFAULT_ENTRY_COUNT, DEFAULT_RNG_SEED, INITIAL_TIME, MAX_ENTRY_AMOUNT, MINT_DECIMALS,
        TEST_PAYER_LAMPORTS, WINDOW_START,
    },
    airdrop::{AirdropEntry, DistributorV0},
    airdrop_csvs::EntryCsvRow,
    airdrop_sdk::{
        build_claim_ixs, build_deploy_claim_agent_v0_ix, build_fund_reserve_ix,
        build_initialize_distributor_v0_ix, build_submit_claim_v0_ix,
        build_withdraw_reserve_v0_ix, compile_airdrop, AddressFinder, AirdropSettings,
        ClaimBundle, CompiledAirdrop,
    },
    anchor_lang::AccountDeserialize as _,
    claim_agent::{ClaimAgentState, ClaimAgentV0},
    litesvm::{
        types::{FailedTransactionMetadata, TransactionResult},
        LiteSVM,
    },
    litesvm_token::{CreateMint, MintTo},
    rand::{rngs::StdRng, Rng as _, SeedableRng as _},
    solana_account::Account,
    solana_instruction::Instruction,
    solana_keypair::Keypair,
    solana_message::Message,
    solana_pubkey::Pubkey,
    solana_signer::Signer as _,
    solana_sysvar::clock::Clock,
    solana_transaction::Transaction,
    spl_associated_token_account::instruction::create_associated_token_account_idempotent,
    spl_token::solana_program::program_pack::Pack as _,
};

/// A compiled airdrop plus a LiteSVM instance with both programs loaded and a funded mint.
///
/// The default table has 1000 entries with random amounts; the window opens at `WINDOW_START`
/// and the clock starts at `INITIAL_TIME`. The administrator pays fees unless a test sends as
/// someone else, and holds the full airdrop total in its token account until the reserve is
/// funded.
pub struct TestFixture {
    pub compiled: CompiledAirdrop,
    pub admin: Keypair,
    pub mint: Pubkey,
    pub stage: FixtureStage,

    log_send_transaction_results: bool,
    svm: LiteSVM,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self::with_entries(random_entries(DEFAULT_ENTRY_COUNT, DEFAULT_RNG_SEED))
    }

    pub fn with_entry_count(count: usize) -> Self {
        Self::with_entries(random_entries(count, DEFAULT_RNG_SEED))
    }

    pub fn with_entries(entries: Vec<AirdropEntry>) -> Self {
        Self::try_with_entries(entries).unwrap_or_else(|e| panic!("Failed to set up fixture: {e:?}"))
    }

    fn try_with_entries(entries: Vec<AirdropEntry>) -> Result<Self, FailedTransactionMetadata> {
        let mut svm = LiteSVM::new();
        load_airdrop_programs(&mut svm);

        let admin = deterministic_keypair("administrator");
        svm.airdrop(&admin.pubkey(), TEST_PAYER_LAMPORTS)?;

        let mint = CreateMint::new(&mut svm, &admin)
            .authority(&admin.pubkey())
            .decimals(MINT_DECIMALS)
            .send()?;

        let rows: Vec<EntryCsvRow> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryCsvRow {
                index: index as u64,
                recipient: entry.recipient,
                amount: entry.amount,
            })
            .collect();
        let settings = AirdropSettings {
            administrator: admin.pubkey(),
            mint,
            window_start: WINDOW_START,
        };
        let compiled = compile_airdrop(&AddressFinder::default(), settings, &rows)
            .expect("Failed to compile test airdrop");

        let mut test = Self {
            compiled,
            admin,
            mint,
            stage: FixtureStage::Compiled,
            log_send_transaction_results: false,
            svm,
        };
        test.warp_to(INITIAL_TIME);

        let admin_address = test.admin_address();
        let admin_token_account = test.token_account_of(&admin_address);
        test.send_instructions(&[create_associated_token_account_idempotent(
            &admin_address,
            &admin_address,
            &mint,
            &spl_token::ID,
        )])?;
        let total = test.compiled.total_amount;
        test.mint_to(&admin_token_account, total)?;

        Ok(test)
    }

    pub fn enable_send_transaction_logging(&mut self) {
        self.log_send_transaction_results = true;
    }

    pub fn disable_send_transaction_logging(&mut self) {
        self.log_send_transaction_results = false;
    }

    pub fn address_finder(&self) -> &AddressFinder {
        &self.compiled.address_finder
    }

    pub fn admin_address(&self) -> Pubkey {
        self.admin.pubkey()
    }

    pub fn distributor_address(&self) -> Pubkey {
        self.compiled.distributor
    }

    pub fn reserve_address(&self) -> Pubkey {
        self.compiled.reserve
    }

    /// The associated token account `owner` is paid into.
    pub fn token_account_of(&self, owner: &Pubkey) -> Pubkey {
        self.address_finder()
            .find_recipient_token_account(owner, &self.mint)
    }

    pub fn entry(&self, index: u64) -> AirdropEntry {
        *self
            .compiled
            .entry(index)
            .unwrap_or_else(|e| panic!("No entry {index}: {e}"))
    }

    pub fn claim_bundle(&self, index: u64) -> ClaimBundle {
        self.compiled
            .claim_bundle(index)
            .unwrap_or_else(|e| panic!("No claim bundle for {index}: {e}"))
    }

    pub fn claim_agent_address(&self, index: u64) -> Pubkey {
        self.claim_bundle(index).claim_agent_address
    }

    /// A funded keypair that is neither the administrator nor any recipient.
    pub fn outsider(&mut self, name: &str) -> Keypair {
        let keypair = deterministic_keypair(name);
        self.airdrop(&keypair.pubkey(), TEST_PAYER_LAMPORTS);
        keypair
    }

    pub fn airdrop(&mut self, to: &Pubkey, lamports: u64) {
        self.svm
            .airdrop(to, lamports)
            .unwrap_or_else(|e| panic!("Failed to airdrop {lamports} to {to}: {e:?}"));
    }

    // ============================================================================================
    // Clock
    // ============================================================================================

    pub fn now(&self) -> i64 {
        self.svm.get_sysvar::<Clock>().unix_timestamp
    }

    pub fn warp_to(&mut self, unix_timestamp: i64) {
        let mut clock = self.svm.get_sysvar::<Clock>();
        clock.unix_timestamp = unix_timestamp;
        self.svm.set_sysvar::<Clock>(&clock);
    }

    pub fn advance_time_by(&mut self, seconds: i64) {
        self.warp_to(self.now() + seconds);
    }

    // ============================================================================================
    // Stages
    // ============================================================================================

    pub fn jump_to(&mut self, target_stage: FixtureStage) {
        let stages_to_step: Vec<FixtureStage> = FixtureStage::all()
            .iter()
            .copied()
            .filter(|s| *s > self.stage && *s <= target_stage)
            .collect();

        for stage in stages_to_step {
            self.step_to(stage);
        }
    }

    fn step_to(&mut self, stage: FixtureStage) {
        match stage {
            FixtureStage::Compiled => Ok(()),
            FixtureStage::DistributorDeployed => self.try_initialize_distributor().map(|_| ()),
            FixtureStage::ReserveFunded => {
                let total = self.compiled.total_amount;
                self.try_fund_reserve(total).map(|_| ())
            }
            FixtureStage::WindowOpen => {
                self.warp_to(WINDOW_START);
                Ok(())
            }
        }
        .unwrap_or_else(|e| panic!("Failed to advance to {:?}: {:?}", stage, e));

        self.stage = stage;
    }

    pub fn try_initialize_distributor(&mut self) -> TransactionResult {
        let (ix, _, _) =
            build_initialize_distributor_v0_ix(self.address_finder(), &self.compiled.params)
                .expect("Failed to build initialize distributor v0 ix");
        self.send_instructions(&[ix])
    }

    /// Transfer from the administrator's token account into the reserve.
    pub fn try_fund_reserve(&mut self, amount: u64) -> TransactionResult {
        let admin_address = self.admin_address();
        let ix = build_fund_reserve_ix(
            self.address_finder(),
            &admin_address,
            &self.token_account_of(&admin_address),
            &self.distributor_address(),
            amount,
        )
        .expect("Failed to build fund reserve ix");
        self.send_instructions(&[ix])
    }

    pub fn mint_to(&mut self, to: &Pubkey, amount: u64) -> Result<(), FailedTransactionMetadata> {
        MintTo::new(&mut self.svm, &self.admin, &self.mint, to, amount)
            .owner(&self.admin)
            .send()?;
        self.svm.expire_blockhash();
        Ok(())
    }

    // ============================================================================================
    // Claims
    // ============================================================================================

    pub fn deploy_claim_agent_ix(&self, payer: &Pubkey, index: u64) -> Instruction {
        let bundle = self.claim_bundle(index);
        let (ix, _, _) = build_deploy_claim_agent_v0_ix(
            self.address_finder(),
            payer,
            &bundle.distributor,
            index,
            bundle.proof_digest,
        )
        .expect("Failed to build deploy claim agent v0 ix");
        ix
    }

    pub fn try_deploy_claim_agent(&mut self, index: u64) -> TransactionResult {
        let ix = self.deploy_claim_agent_ix(&self.admin_address(), index);
        self.send_instructions(&[ix])
    }

    /// Submit the honest bundle for `index` to its agent. Assumes the agent and the
    /// recipient's token account already exist.
    pub fn submit_claim_ix(&self, index: u64) -> Instruction {
        let bundle = self.claim_bundle(index);
        self.submit_to_agent_ix(&bundle.claim_agent_address, bundle.entry, bundle.proof)
    }

    /// Submit an arbitrary entry and proof to an arbitrary agent.
    pub fn submit_to_agent_ix(
        &self,
        claim_agent: &Pubkey,
        entry: AirdropEntry,
        proof: airdrop::MerkleProof,
    ) -> Instruction {
        let (ix, _, _) = build_submit_claim_v0_ix(
            self.address_finder(),
            claim_agent,
            &self.distributor_address(),
            &self.token_account_of(&entry.recipient),
            entry,
            proof,
        )
        .expect("Failed to build submit claim v0 ix");
        ix
    }

    pub fn create_token_account_ix(&self, payer: &Pubkey, owner: &Pubkey) -> Instruction {
        create_associated_token_account_idempotent(payer, owner, &self.mint, &spl_token::ID)
    }

    /// Everything needed to claim `index`, paid for by `payer`.
    pub fn claim_ixs(&self, payer: &Pubkey, index: u64) -> Vec<Instruction> {
        build_claim_ixs(self.address_finder(), payer, &self.claim_bundle(index))
            .expect("Failed to build claim ixs")
    }

    /// Deploy the agent for `index` (idempotent), create the recipient's token account
    /// (idempotent) and submit, all in one transaction paid by the administrator.
    pub fn try_claim(&mut self, index: u64) -> TransactionResult {
        let ixs = self.claim_ixs(&self.admin_address(), index);
        self.send_instructions(&ixs)
    }

    pub fn try_claim_as(&mut self, payer: &Keypair, index: u64) -> TransactionResult {
        let ixs = self.claim_ixs(&payer.pubkey(), index);
        self.send_instructions_as(payer, &ixs)
    }

    pub fn try_withdraw_reserve(&mut self, amount: u64) -> TransactionResult {
        let admin = self.admin.insecure_clone();
        let destination = self.token_account_of(&admin.pubkey());
        self.try_withdraw_reserve_as(&admin, &destination, amount)
    }

    pub fn try_withdraw_reserve_as(
        &mut self,
        signer: &Keypair,
        destination_token_account: &Pubkey,
        amount: u64,
    ) -> TransactionResult {
        let (ix, _, _) = build_withdraw_reserve_v0_ix(
            self.address_finder(),
            &signer.pubkey(),
            &self.distributor_address(),
            destination_token_account,
            amount,
        )
        .expect("Failed to build withdraw reserve v0 ix");
        self.send_instructions_as(signer, &[ix])
    }

    // ============================================================================================
    // Queries
    // ============================================================================================

    pub fn fetch_account(&self, address: &Pubkey) -> Option<Account> {
        self.svm.get_account(address)
    }

    pub fn account_exists(&self, address: &Pubkey) -> bool {
        self.fetch_account(address).is_some()
    }

    /// Token balance held at `token_account`; 0 if it does not exist.
    pub fn token_balance(&self, token_account: &Pubkey) -> u64 {
        self.fetch_account(token_account)
            .and_then(|account| spl_token::state::Account::unpack(&account.data).ok())
            .map(|account| account.amount)
            .unwrap_or(0)
    }

    /// Token balance of `owner`'s associated token account.
    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.token_balance(&self.token_account_of(owner))
    }

    pub fn reserve_balance(&self) -> u64 {
        self.token_balance(&self.reserve_address())
    }

    pub fn fetch_distributor_account(&self) -> Option<DistributorV0> {
        self.fetch_account(&self.distributor_address())
            .and_then(|a| DistributorV0::try_deserialize(&mut &a.data[..]).ok())
    }

    pub fn fetch_claim_agent_account(&self, index: u64) -> Option<ClaimAgentV0> {
        self.fetch_account(&self.claim_agent_address(index))
            .and_then(|a| ClaimAgentV0::try_deserialize(&mut &a.data[..]).ok())
    }

    /// `Uninitialized` when the agent has never been deployed.
    pub fn claim_agent_state(&self, index: u64) -> ClaimAgentState {
        self.fetch_claim_agent_account(index)
            .map(|agent| agent.state)
            .unwrap_or(ClaimAgentState::Uninitialized)
    }

    pub fn is_claimed(&self, index: u64) -> bool {
        matches!(
            self.claim_agent_state(index),
            ClaimAgentState::Claimed { .. }
        )
    }

    // ============================================================================================
    // Sending
    // ============================================================================================

    pub fn send_instructions(&mut self, instructions: &[Instruction]) -> TransactionResult {
        let fee_payer = self.admin.insecure_clone();
        self.send_instructions_as(&fee_payer, instructions)
    }

    pub fn send_instructions_as(
        &mut self,
        fee_payer: &Keypair,
        instructions: &[Instruction],
    ) -> TransactionResult {
        let tx = Transaction::new(
            &[fee_payer],
            Message::new(instructions, Some(&fee_payer.pubkey())),
            self.svm.latest_blockhash(),
        );

        self.send_transaction(tx)
    }

    /// Send a transaction and optionally print logs based on the logging setting. The
    /// blockhash is expired afterwards so an identical retry is a new transaction.
    pub fn send_transaction(&mut self, tx: Transaction) -> TransactionResult {
        let result = self.svm.send_transaction(tx);
        self.svm.expire_blockhash();

        if self.log_send_transaction_results {
            match &result {
                Ok(meta) => {
                    println!("=== Transaction Logs (Success) ===");
                    for (i, log) in meta.logs.iter().enumerate() {
                        println!("{}: {}", i, log);
                    }
                    println!("=== End Logs ===\n");
                }
                Err(failed_meta) => {
                    println!("=== Transaction Logs (Failed) ===");
                    for (i, log) in failed_meta.meta.logs.iter().enumerate() {
                        println!("{}: {}", i, log);
                    }
                    println!("Error: {:?}", failed_meta.err);
                    println!("=== End Logs ===\n");
                }
            }
        }

        result
    }
}

/// `count` entries with distinct deterministic recipients and seeded random amounts.
pub fn random_entries(count: usize, seed: u64) -> Vec<AirdropEntry> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            AirdropEntry::new(
                deterministic_pubkey(&format!("recipient_{i}")),
                rng.gen_range(1..=MAX_ENTRY_AMOUNT),
            )
        })
        .collect()
}
