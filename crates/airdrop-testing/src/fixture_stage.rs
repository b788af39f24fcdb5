#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum FixtureStage {
    /// Entry table compiled, nothing deployed
    #[default]
    Compiled,

    /// Distributor deployed, reserve empty
    DistributorDeployed,

    /// Reserve funded with the full airdrop total
    ReserveFunded,

    /// Clock moved to the window start; claims are accepted
    WindowOpen,
}

impl FixtureStage {
    pub fn all() -> &'static [FixtureStage] {
        &[
            FixtureStage::Compiled,
            FixtureStage::DistributorDeployed,
            FixtureStage::ReserveFunded,
            FixtureStage::WindowOpen,
        ]
    }
}
