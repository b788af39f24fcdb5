use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod rpc;

use error::CliResult;

#[derive(Parser)]
#[command(name = "airdrop")]
#[command(about = "Merkle airdrop tooling - compile entry tables, issue proofs, deploy and claim")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a deterministic entry table for testing
    GenerateFixtures {
        /// Number of entries to generate
        #[arg(short, long)]
        count: u64,

        /// Seed for deterministic generation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output CSV path
        #[arg(short, long, default_value = "entries.csv")]
        output: PathBuf,

        /// Minimum amount per entry
        #[arg(long, default_value = "1")]
        min_amount: u64,

        /// Maximum amount per entry
        #[arg(long, default_value = "1000000")]
        max_amount: u64,
    },

    /// Commit an entry table and write the compiled airdrop
    CompileAirdrop {
        /// Airdrop configuration file (YAML)
        #[arg(short, long)]
        config: PathBuf,

        /// Entries CSV
        #[arg(short, long, default_value = "entries.csv")]
        entries: PathBuf,

        /// Output directory for compiled_airdrop.json and commitment.csv
        #[arg(short, long, default_value = "output")]
        output_dir: PathBuf,
    },

    /// Write the claim bundle (entry, proof, agent address) for one index
    GenerateProof {
        /// Compiled airdrop JSON
        #[arg(short, long)]
        compiled: PathBuf,

        /// Entry index
        #[arg(short, long)]
        index: u64,

        /// Output path; printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a claim bundle against a merkle root
    VerifyProof {
        /// Claim bundle JSON
        #[arg(short, long)]
        bundle: PathBuf,

        /// Merkle root (hex)
        #[arg(short, long)]
        merkle_root: String,

        /// Claim agent template the bundle's agent address was derived with (base58)
        #[arg(long)]
        claim_agent_template: Option<String>,
    },

    /// List the entries owed to a recipient
    CheckEligibility {
        /// Compiled airdrop JSON
        #[arg(short, long)]
        compiled: PathBuf,

        /// Recipient pubkey (base58)
        #[arg(short, long)]
        recipient: String,
    },

    /// Create the distributor and reserve on chain (administrator only)
    DeployDistributor {
        /// Compiled airdrop JSON
        #[arg(short, long)]
        compiled: PathBuf,

        /// Administrator keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(long, default_value = "http://127.0.0.1:8899")]
        rpc_url: String,
    },

    /// Transfer tokens into the distributor's reserve
    FundReserve {
        /// Compiled airdrop JSON
        #[arg(short, long)]
        compiled: PathBuf,

        /// Funder keypair file; tokens come from its associated token account
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(long, default_value = "http://127.0.0.1:8899")]
        rpc_url: String,

        /// Amount to transfer; defaults to the airdrop total
        #[arg(short, long)]
        amount: Option<u64>,
    },

    /// Deploy the claim agent for an index and submit its claim
    Claim {
        /// Compiled airdrop JSON
        #[arg(short, long)]
        compiled: PathBuf,

        /// Entry index to claim
        #[arg(short, long)]
        index: u64,

        /// Fee payer keypair file (any account may pay)
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(long, default_value = "http://127.0.0.1:8899")]
        rpc_url: String,

        /// Build the instructions without sending them
        #[arg(long)]
        dry_run: bool,
    },

    /// Withdraw tokens from the reserve before the window opens (administrator only)
    WithdrawReserve {
        /// Compiled airdrop JSON
        #[arg(short, long)]
        compiled: PathBuf,

        /// Administrator keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Solana RPC URL
        #[arg(long, default_value = "http://127.0.0.1:8899")]
        rpc_url: String,

        /// Amount to withdraw
        #[arg(short, long)]
        amount: u64,

        /// Destination token account; the administrator's associated token account when omitted
        #[arg(long)]
        destination: Option<String>,
    },

    /// Show distributor totals and, optionally, one index's claim agent
    ClaimStatus {
        /// Compiled airdrop JSON
        #[arg(short, long)]
        compiled: PathBuf,

        /// Entry index to inspect
        #[arg(short, long)]
        index: Option<u64>,

        /// Solana RPC URL
        #[arg(long, default_value = "http://127.0.0.1:8899")]
        rpc_url: String,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenerateFixtures {
            count,
            seed,
            output,
            min_amount,
            max_amount,
        } => commands::generate_fixtures::execute(count, seed, output, min_amount, max_amount),

        Commands::CompileAirdrop {
            config,
            entries,
            output_dir,
        } => commands::compile_airdrop::execute(config, entries, output_dir),

        Commands::GenerateProof {
            compiled,
            index,
            output,
        } => commands::generate_proof::execute(compiled, index, output),

        Commands::VerifyProof {
            bundle,
            merkle_root,
            claim_agent_template,
        } => commands::verify_proof::execute(bundle, merkle_root, claim_agent_template),

        Commands::CheckEligibility {
            compiled,
            recipient,
        } => commands::check_eligibility::execute(compiled, recipient),

        Commands::DeployDistributor {
            compiled,
            keypair,
            rpc_url,
        } => commands::deploy_distributor::execute(compiled, keypair, rpc_url),

        Commands::FundReserve {
            compiled,
            keypair,
            rpc_url,
            amount,
        } => commands::fund_reserve::execute(compiled, keypair, rpc_url, amount),

        Commands::Claim {
            compiled,
            index,
            keypair,
            rpc_url,
            dry_run,
        } => commands::claim::execute(compiled, index, keypair, rpc_url, dry_run),

        Commands::WithdrawReserve {
            compiled,
            keypair,
            rpc_url,
            amount,
            destination,
        } => commands::withdraw_reserve::execute(compiled, keypair, rpc_url, amount, destination),

        Commands::ClaimStatus {
            compiled,
            index,
            rpc_url,
        } => commands::claim_status::execute(compiled, index, rpc_url),
    }
}
