use anchor_lang::prelude::*;

#[error_code]
pub enum LendingError {
    #[msg("Liquidity amount must be greater than zero")]
    AmountCannotBeZero,

    #[msg("Account is not the Kamino Lending program")]
    InvalidKaminoProgram,

    #[msg("Account is not the instructions sysvar")]
    InvalidInstructionSysvar,
}
