pub mod check_eligibility;
pub mod claim;
pub mod claim_status;
pub mod compile_airdrop;
pub mod deploy_distributor;
pub mod fund_reserve;
pub mod generate_fixtures;
pub mod generate_proof;
pub mod verify_proof;
pub mod withdraw_reserve;
