//! Kamino market accounts passed to each routed instruction.
//!
//! The owner is always the signing payer, and the instructions sysvar and
//! Kamino program id are filled in by the builders in [`crate::instructions`].

use solana_sdk::pubkey::Pubkey;

/// SPL Token program, the token program of most Kamino reserves
pub const TOKEN_PROGRAM_ID: Pubkey = anchor_spl::token::ID;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositReserveLiquidityAccounts {
    pub reserve: Pubkey,
    pub lending_market: Pubkey,
    pub lending_market_authority: Pubkey,
    pub reserve_liquidity_mint: Pubkey,
    pub reserve_liquidity_supply: Pubkey,
    pub reserve_collateral_mint: Pubkey,
    pub user_source_liquidity: Pubkey,
    pub user_destination_collateral: Pubkey,
    pub collateral_token_program: Pubkey,
    pub liquidity_token_program: Pubkey,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorrowObligationLiquidityAccounts {
    pub obligation: Pubkey,
    pub lending_market: Pubkey,
    pub lending_market_authority: Pubkey,
    pub borrow_reserve: Pubkey,
    pub borrow_reserve_liquidity_mint: Pubkey,
    pub reserve_source_liquidity: Pubkey,
    pub borrow_reserve_liquidity_fee_receiver: Pubkey,
    pub user_destination_liquidity: Pubkey,
    /// Referrer's token state, if the borrow is referred
    pub referrer_token_state: Option<Pubkey>,
    pub token_program: Pubkey,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepayObligationLiquidityAccounts {
    pub obligation: Pubkey,
    pub lending_market: Pubkey,
    pub repay_reserve: Pubkey,
    pub reserve_liquidity_mint: Pubkey,
    pub reserve_destination_liquidity: Pubkey,
    pub user_source_liquidity: Pubkey,
    pub token_program: Pubkey,
}
