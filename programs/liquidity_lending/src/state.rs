use anchor_lang::prelude::*;

/// Seed of the singleton configuration PDA
pub const CONFIG_SEED: &[u8] = b"config";

/// Program configuration, written once by `initialize`
#[account]
pub struct LendingConfig {
    /// Signer that initialized and paid for the config
    pub authority: Pubkey,
    /// Cluster unix timestamp at initialization
    pub created_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl LendingConfig {
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        8 + // created_at
        1; // bump
}
