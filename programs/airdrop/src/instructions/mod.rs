pub mod claim_v0;
pub mod initialize_distributor_v0;
pub mod withdraw_reserve_v0;

pub use claim_v0::*;
pub use initialize_distributor_v0::*;
pub use withdraw_reserve_v0::*;
