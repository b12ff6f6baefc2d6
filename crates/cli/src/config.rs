use fibsol_core::SessionLimits;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_RUN_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    pub seed: u64,
    pub limits: SessionLimits,
    pub json: bool,
}

impl CliConfig {
    /// Falls back to a clock-derived seed so every launch deals differently.
    pub fn resolve(seed: Option<u64>, max_games: Option<u32>, json: bool) -> Self {
        Self {
            seed: seed.unwrap_or_else(clock_seed),
            limits: SessionLimits { max_games },
            json,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(DEFAULT_RUN_SEED)
}
