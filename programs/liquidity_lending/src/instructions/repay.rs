use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar;

use crate::error::LendingError;
use crate::events::LiquidityRepaid;
use crate::kamino::{self, RepayObligationLiquidity};

#[derive(Accounts)]
pub struct KaminoRepayObligationLiquidity<'info> {
    pub owner: Signer<'info>,

    /// CHECK: Kamino obligation, validated by Kamino during CPI
    #[account(mut)]
    pub obligation: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    pub lending_market: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    #[account(mut)]
    pub repay_reserve: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    pub reserve_liquidity_mint: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    #[account(mut)]
    pub reserve_destination_liquidity: UncheckedAccount<'info>,

    /// CHECK: user token account debited by Kamino
    #[account(mut)]
    pub user_source_liquidity: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    pub token_program: UncheckedAccount<'info>,

    /// CHECK: address constraint
    #[account(address = sysvar::instructions::ID @ LendingError::InvalidInstructionSysvar)]
    pub instruction_sysvar_account: UncheckedAccount<'info>,

    /// CHECK: address constraint
    #[account(address = kamino::ID @ LendingError::InvalidKaminoProgram)]
    pub kamino_lending_program: UncheckedAccount<'info>,
}

pub fn repay_handler(
    ctx: Context<KaminoRepayObligationLiquidity>,
    liquidity_amount: u64,
) -> Result<()> {
    require!(liquidity_amount > 0, LendingError::AmountCannotBeZero);

    let accounts = &ctx.accounts;
    let cpi_accounts = [
        accounts.owner.to_account_info(),
        accounts.obligation.to_account_info(),
        accounts.lending_market.to_account_info(),
        accounts.repay_reserve.to_account_info(),
        accounts.reserve_liquidity_mint.to_account_info(),
        accounts.reserve_destination_liquidity.to_account_info(),
        accounts.user_source_liquidity.to_account_info(),
        accounts.token_program.to_account_info(),
        accounts.instruction_sysvar_account.to_account_info(),
    ];

    kamino::invoke(
        &accounts.kamino_lending_program.to_account_info(),
        &cpi_accounts,
        &RepayObligationLiquidity { liquidity_amount },
    )?;

    msg!(
        "Repaid {} to reserve {} for obligation {}",
        liquidity_amount,
        accounts.repay_reserve.key(),
        accounts.obligation.key()
    );

    emit!(LiquidityRepaid {
        owner: accounts.owner.key(),
        obligation: accounts.obligation.key(),
        repay_reserve: accounts.repay_reserve.key(),
        liquidity_amount,
    });

    Ok(())
}
