use anchor_lang::prelude::*;

use crate::events::Initialized;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = LendingConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, LendingConfig>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.authority = ctx.accounts.authority.key();
    config.created_at = Clock::get()?.unix_timestamp;
    config.bump = ctx.bumps.config;

    msg!("Greetings from: {:?}", ctx.program_id);

    emit!(Initialized {
        authority: config.authority,
        config: config.key(),
    });

    Ok(())
}
