//! Liquidity Lending - thin router from user transactions into Kamino Lending
//!
//! `initialize` records a singleton configuration PDA. The `kamino_*` instructions
//! forward a liquidity amount and a fixed account list to the Kamino Lending program:
//! - Deposit reserve liquidity
//! - Borrow obligation liquidity
//! - Repay obligation liquidity

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("56PWFoBr3NtHRAgaAvJaERidrh87e7W4SxjqLzg7ePxZ");

pub mod error;
pub mod events;
pub mod instructions;
pub mod kamino;
pub mod state;

pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod liquidity_lending {
    use super::*;

    /// Create the configuration PDA. Fails if it already exists.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize_handler(ctx)
    }

    /// Deposit liquidity into a Kamino reserve in exchange for collateral
    pub fn kamino_deposit_reserve_liquidity(
        ctx: Context<KaminoDepositReserveLiquidity>,
        liquidity_amount: u64,
    ) -> Result<()> {
        deposit_handler(ctx, liquidity_amount)
    }

    /// Borrow liquidity against a Kamino obligation
    pub fn kamino_borrow_obligation_liquidity(
        ctx: Context<KaminoBorrowObligationLiquidity>,
        liquidity_amount: u64,
    ) -> Result<()> {
        borrow_handler(ctx, liquidity_amount)
    }

    /// Repay borrowed liquidity on a Kamino obligation
    pub fn kamino_repay_obligation_liquidity(
        ctx: Context<KaminoRepayObligationLiquidity>,
        liquidity_amount: u64,
    ) -> Result<()> {
        repay_handler(ctx, liquidity_amount)
    }
}
