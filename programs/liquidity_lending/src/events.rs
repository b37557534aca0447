use anchor_lang::prelude::*;

/// Emitted once, when the configuration PDA is created
#[event]
pub struct Initialized {
    pub authority: Pubkey,
    pub config: Pubkey,
}

/// Emitted after a successful Kamino `deposit_reserve_liquidity` CPI
#[event]
pub struct LiquidityDeposited {
    pub owner: Pubkey,
    pub reserve: Pubkey,
    pub liquidity_amount: u64,
}

/// Emitted after a successful Kamino `borrow_obligation_liquidity` CPI
#[event]
pub struct LiquidityBorrowed {
    pub owner: Pubkey,
    pub obligation: Pubkey,
    pub borrow_reserve: Pubkey,
    pub liquidity_amount: u64,
}

/// Emitted after a successful Kamino `repay_obligation_liquidity` CPI
#[event]
pub struct LiquidityRepaid {
    pub owner: Pubkey,
    pub obligation: Pubkey,
    pub repay_reserve: Pubkey,
    pub liquidity_amount: u64,
}
