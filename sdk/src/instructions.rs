//! Instruction builders. Nothing here touches the network.

use anchor_lang::{system_program, InstructionData, ToAccountMetas};
use liquidity_lending::kamino;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, sysvar};

use crate::accounts::{
    BorrowObligationLiquidityAccounts, DepositReserveLiquidityAccounts,
    RepayObligationLiquidityAccounts,
};
use crate::pda::find_config_address;
use crate::{Result, SdkError};

/// `initialize`, paid for and signed by `authority`
pub fn initialize(authority: Pubkey) -> Instruction {
    Instruction {
        program_id: liquidity_lending::ID,
        accounts: liquidity_lending::accounts::Initialize {
            authority,
            config: find_config_address().0,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: liquidity_lending::instruction::Initialize {}.data(),
    }
}

pub fn deposit_reserve_liquidity(
    owner: Pubkey,
    accounts: &DepositReserveLiquidityAccounts,
    liquidity_amount: u64,
) -> Result<Instruction> {
    ensure_nonzero("deposit_reserve_liquidity", liquidity_amount)?;

    Ok(Instruction {
        program_id: liquidity_lending::ID,
        accounts: liquidity_lending::accounts::KaminoDepositReserveLiquidity {
            owner,
            reserve: accounts.reserve,
            lending_market: accounts.lending_market,
            lending_market_authority: accounts.lending_market_authority,
            reserve_liquidity_mint: accounts.reserve_liquidity_mint,
            reserve_liquidity_supply: accounts.reserve_liquidity_supply,
            reserve_collateral_mint: accounts.reserve_collateral_mint,
            user_source_liquidity: accounts.user_source_liquidity,
            user_destination_collateral: accounts.user_destination_collateral,
            collateral_token_program: accounts.collateral_token_program,
            liquidity_token_program: accounts.liquidity_token_program,
            instruction_sysvar_account: sysvar::instructions::ID,
            kamino_lending_program: kamino::ID,
        }
        .to_account_metas(None),
        data: liquidity_lending::instruction::KaminoDepositReserveLiquidity { liquidity_amount }
            .data(),
    })
}

/// A `None` referrer is encoded as the program id, read-only
pub fn borrow_obligation_liquidity(
    owner: Pubkey,
    accounts: &BorrowObligationLiquidityAccounts,
    liquidity_amount: u64,
) -> Result<Instruction> {
    ensure_nonzero("borrow_obligation_liquidity", liquidity_amount)?;

    Ok(Instruction {
        program_id: liquidity_lending::ID,
        accounts: liquidity_lending::accounts::KaminoBorrowObligationLiquidity {
            owner,
            obligation: accounts.obligation,
            lending_market: accounts.lending_market,
            lending_market_authority: accounts.lending_market_authority,
            borrow_reserve: accounts.borrow_reserve,
            borrow_reserve_liquidity_mint: accounts.borrow_reserve_liquidity_mint,
            reserve_source_liquidity: accounts.reserve_source_liquidity,
            borrow_reserve_liquidity_fee_receiver: accounts.borrow_reserve_liquidity_fee_receiver,
            user_destination_liquidity: accounts.user_destination_liquidity,
            referrer_token_state: accounts.referrer_token_state,
            token_program: accounts.token_program,
            instruction_sysvar_account: sysvar::instructions::ID,
            kamino_lending_program: kamino::ID,
        }
        .to_account_metas(None),
        data: liquidity_lending::instruction::KaminoBorrowObligationLiquidity { liquidity_amount }
            .data(),
    })
}

pub fn repay_obligation_liquidity(
    owner: Pubkey,
    accounts: &RepayObligationLiquidityAccounts,
    liquidity_amount: u64,
) -> Result<Instruction> {
    ensure_nonzero("repay_obligation_liquidity", liquidity_amount)?;

    Ok(Instruction {
        program_id: liquidity_lending::ID,
        accounts: liquidity_lending::accounts::KaminoRepayObligationLiquidity {
            owner,
            obligation: accounts.obligation,
            lending_market: accounts.lending_market,
            repay_reserve: accounts.repay_reserve,
            reserve_liquidity_mint: accounts.reserve_liquidity_mint,
            reserve_destination_liquidity: accounts.reserve_destination_liquidity,
            user_source_liquidity: accounts.user_source_liquidity,
            token_program: accounts.token_program,
            instruction_sysvar_account: sysvar::instructions::ID,
            kamino_lending_program: kamino::ID,
        }
        .to_account_metas(None),
        data: liquidity_lending::instruction::KaminoRepayObligationLiquidity { liquidity_amount }
            .data(),
    })
}

fn ensure_nonzero(instruction: &'static str, liquidity_amount: u64) -> Result<()> {
    if liquidity_amount == 0 {
        return Err(SdkError::InvalidAmount { instruction });
    }
    Ok(())
}
