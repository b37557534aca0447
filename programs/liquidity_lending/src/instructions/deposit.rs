use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar;

use crate::error::LendingError;
use crate::events::LiquidityDeposited;
use crate::kamino::{self, DepositReserveLiquidity};

#[derive(Accounts)]
pub struct KaminoDepositReserveLiquidity<'info> {
    pub owner: Signer<'info>,

    /// CHECK: Kamino reserve, validated by Kamino during CPI
    #[account(mut)]
    pub reserve: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    pub lending_market: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    pub lending_market_authority: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    pub reserve_liquidity_mint: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    #[account(mut)]
    pub reserve_liquidity_supply: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    #[account(mut)]
    pub reserve_collateral_mint: UncheckedAccount<'info>,

    /// CHECK: user token account debited by Kamino
    #[account(mut)]
    pub user_source_liquidity: UncheckedAccount<'info>,

    /// CHECK: user token account credited with collateral by Kamino
    #[account(mut)]
    pub user_destination_collateral: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    pub collateral_token_program: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    pub liquidity_token_program: UncheckedAccount<'info>,

    /// CHECK: address constraint
    #[account(address = sysvar::instructions::ID @ LendingError::InvalidInstructionSysvar)]
    pub instruction_sysvar_account: UncheckedAccount<'info>,

    /// CHECK: address constraint
    #[account(address = kamino::ID @ LendingError::InvalidKaminoProgram)]
    pub kamino_lending_program: UncheckedAccount<'info>,
}

pub fn deposit_handler(
    ctx: Context<KaminoDepositReserveLiquidity>,
    liquidity_amount: u64,
) -> Result<()> {
    require!(liquidity_amount > 0, LendingError::AmountCannotBeZero);

    let accounts = &ctx.accounts;
    let cpi_accounts = [
        accounts.owner.to_account_info(),
        accounts.reserve.to_account_info(),
        accounts.lending_market.to_account_info(),
        accounts.lending_market_authority.to_account_info(),
        accounts.reserve_liquidity_mint.to_account_info(),
        accounts.reserve_liquidity_supply.to_account_info(),
        accounts.reserve_collateral_mint.to_account_info(),
        accounts.user_source_liquidity.to_account_info(),
        accounts.user_destination_collateral.to_account_info(),
        accounts.collateral_token_program.to_account_info(),
        accounts.liquidity_token_program.to_account_info(),
        accounts.instruction_sysvar_account.to_account_info(),
    ];

    kamino::invoke(
        &accounts.kamino_lending_program.to_account_info(),
        &cpi_accounts,
        &DepositReserveLiquidity { liquidity_amount },
    )?;

    msg!("Deposited {} into reserve {}", liquidity_amount, accounts.reserve.key());

    emit!(LiquidityDeposited {
        owner: accounts.owner.key(),
        reserve: accounts.reserve.key(),
        liquidity_amount,
    });

    Ok(())
}
