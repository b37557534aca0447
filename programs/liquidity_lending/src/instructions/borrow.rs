use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar;

use crate::error::LendingError;
use crate::events::LiquidityBorrowed;
use crate::kamino::{self, BorrowObligationLiquidity};

#[derive(Accounts)]
pub struct KaminoBorrowObligationLiquidity<'info> {
    pub owner: Signer<'info>,

    /// CHECK: Kamino obligation, validated by Kamino during CPI
    #[account(mut)]
    pub obligation: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    pub lending_market: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    pub lending_market_authority: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    #[account(mut)]
    pub borrow_reserve: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    pub borrow_reserve_liquidity_mint: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    #[account(mut)]
    pub reserve_source_liquidity: UncheckedAccount<'info>,

    /// CHECK: validated by Kamino during CPI
    #[account(mut)]
    pub borrow_reserve_liquidity_fee_receiver: UncheckedAccount<'info>,

    /// CHECK: user token account credited by Kamino
    #[account(mut)]
    pub user_destination_liquidity: UncheckedAccount<'info>,

    /// CHECK: optional, validated by Kamino during CPI
    #[account(mut)]
    pub referrer_token_state: Option<UncheckedAccount<'info>>,

    /// CHECK: validated by Kamino during CPI
    pub token_program: UncheckedAccount<'info>,

    /// CHECK: address constraint
    #[account(address = sysvar::instructions::ID @ LendingError::InvalidInstructionSysvar)]
    pub instruction_sysvar_account: UncheckedAccount<'info>,

    /// CHECK: address constraint
    #[account(address = kamino::ID @ LendingError::InvalidKaminoProgram)]
    pub kamino_lending_program: UncheckedAccount<'info>,
}

pub fn borrow_handler(
    ctx: Context<KaminoBorrowObligationLiquidity>,
    liquidity_amount: u64,
) -> Result<()> {
    require!(liquidity_amount > 0, LendingError::AmountCannotBeZero);

    let accounts = &ctx.accounts;
    let kamino_program = accounts.kamino_lending_program.to_account_info();

    // Kamino is an Anchor program too: an omitted optional account is passed as its program id
    let referrer_token_state = accounts
        .referrer_token_state
        .as_ref()
        .map_or_else(|| kamino_program.clone(), |acc| acc.to_account_info());

    let cpi_accounts = [
        accounts.owner.to_account_info(),
        accounts.obligation.to_account_info(),
        accounts.lending_market.to_account_info(),
        accounts.lending_market_authority.to_account_info(),
        accounts.borrow_reserve.to_account_info(),
        accounts.borrow_reserve_liquidity_mint.to_account_info(),
        accounts.reserve_source_liquidity.to_account_info(),
        accounts.borrow_reserve_liquidity_fee_receiver.to_account_info(),
        accounts.user_destination_liquidity.to_account_info(),
        referrer_token_state,
        accounts.token_program.to_account_info(),
        accounts.instruction_sysvar_account.to_account_info(),
    ];

    kamino::invoke(
        &kamino_program,
        &cpi_accounts,
        &BorrowObligationLiquidity { liquidity_amount },
    )?;

    msg!(
        "Borrowed {} from reserve {} against obligation {}",
        liquidity_amount,
        accounts.borrow_reserve.key(),
        accounts.obligation.key()
    );

    emit!(LiquidityBorrowed {
        owner: accounts.owner.key(),
        obligation: accounts.obligation.key(),
        borrow_reserve: accounts.borrow_reserve.key(),
        liquidity_amount,
    });

    Ok(())
}
