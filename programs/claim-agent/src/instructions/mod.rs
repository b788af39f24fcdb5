pub mod deploy_claim_agent_v0;
pub mod submit_claim_v0;

pub use deploy_claim_agent_v0::*;
pub use submit_claim_v0::*;
