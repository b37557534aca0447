//! Address derivation for the liquidity lending program

use liquidity_lending::CONFIG_SEED;
use solana_sdk::pubkey::Pubkey;

/// Find the configuration PDA created by `initialize`
pub fn find_config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], &liquidity_lending::ID)
}
