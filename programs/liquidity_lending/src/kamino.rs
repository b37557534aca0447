//! Kamino Lending CPI plumbing
//!
//! Kamino is an Anchor program, so every instruction it accepts starts with the
//! 8-byte global sighash of the instruction name followed by the Borsh-encoded args.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::invoke as invoke_unsigned,
};
use anchor_lang::{Discriminator, InstructionData};

declare_id!("KLend2g3cP87fffoy8q1mQqGKjrxjC8boSyAYavgmjD");

/// Args of Kamino's `deposit_reserve_liquidity`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositReserveLiquidity {
    pub liquidity_amount: u64,
}

/// Args of Kamino's `borrow_obligation_liquidity`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorrowObligationLiquidity {
    pub liquidity_amount: u64,
}

/// Args of Kamino's `repay_obligation_liquidity`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepayObligationLiquidity {
    pub liquidity_amount: u64,
}

// sha256("global:deposit_reserve_liquidity")[..8]
impl Discriminator for DepositReserveLiquidity {
    const DISCRIMINATOR: &'static [u8] = &[169, 201, 30, 126, 6, 205, 102, 68];
}

// sha256("global:borrow_obligation_liquidity")[..8]
impl Discriminator for BorrowObligationLiquidity {
    const DISCRIMINATOR: &'static [u8] = &[121, 127, 18, 204, 73, 245, 225, 65];
}

// sha256("global:repay_obligation_liquidity")[..8]
impl Discriminator for RepayObligationLiquidity {
    const DISCRIMINATOR: &'static [u8] = &[145, 178, 13, 225, 76, 240, 147, 72];
}

impl InstructionData for DepositReserveLiquidity {}
impl InstructionData for BorrowObligationLiquidity {}
impl InstructionData for RepayObligationLiquidity {}

/// Invoke the Kamino program with `accounts` forwarded in order.
///
/// Signer and writable flags are copied from the incoming account infos, so the
/// caller's signature is passed through and nothing is signed by this program.
pub fn invoke<'info>(
    kamino_program: &AccountInfo<'info>,
    accounts: &[AccountInfo<'info>],
    args: &impl InstructionData,
) -> Result<()> {
    let ix = Instruction {
        program_id: *kamino_program.key,
        accounts: account_metas(accounts),
        data: args.data(),
    };

    let mut account_infos = accounts.to_vec();
    account_infos.push(kamino_program.clone());

    invoke_unsigned(&ix, &account_infos)?;
    Ok(())
}

fn account_metas(accounts: &[AccountInfo]) -> Vec<AccountMeta> {
    accounts
        .iter()
        .map(|acc| AccountMeta {
            pubkey: *acc.key,
            is_signer: acc.is_signer,
            is_writable: acc.is_writable,
        })
        .collect()
}
