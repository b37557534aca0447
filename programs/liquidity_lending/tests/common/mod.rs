#![allow(dead_code)]

use anchor_lang::solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError,
};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use liquidity_lending::kamino::{
    self, BorrowObligationLiquidity, DepositReserveLiquidity, RepayObligationLiquidity,
};
use solana_program_test::*;
use solana_sdk::{
    instruction::Instruction,
    clock::Clock,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, system_program, sysvar,
    transaction::{Transaction, TransactionError},
};

// Anchor's entry wants `&'info [AccountInfo<'info>]`, the test runtime hands out shorter borrows
fn process_instruction<'a, 'b, 'c, 'd>(
    program_id: &'a Pubkey,
    accounts: &'b [AccountInfo<'c>],
    data: &'d [u8],
) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    liquidity_lending::entry(program_id, accounts, data)
}

// Writable positions in each Kamino account list
const DEPOSIT_WRITABLE: &[usize] = &[1, 5, 6, 7, 8];
const BORROW_WRITABLE: &[usize] = &[1, 4, 6, 7, 8, 9];
const REPAY_WRITABLE: &[usize] = &[1, 3, 5, 6];

/// Stand-in for Kamino Lending. Accepts the three routed instructions only when the
/// discriminator, amount, account count, signer and writable flags all line up.
fn process_mock_kamino(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    if data.len() != 16 {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (discriminator, amount) = data.split_at(8);

    let (name, writable) = match discriminator {
        d if d == DepositReserveLiquidity::DISCRIMINATOR => ("deposit", DEPOSIT_WRITABLE),
        d if d == BorrowObligationLiquidity::DISCRIMINATOR => ("borrow", BORROW_WRITABLE),
        d if d == RepayObligationLiquidity::DISCRIMINATOR => ("repay", REPAY_WRITABLE),
        _ => return Err(ProgramError::InvalidInstructionData),
    };
    let expected_len = if name == "repay" { 9 } else { 12 };
    if accounts.len() != expected_len {
        return Err(ProgramError::NotEnoughAccountKeys);
    }

    let amount = u64::from_le_bytes(
        amount
            .try_into()
            .map_err(|_| ProgramError::InvalidInstructionData)?,
    );
    if amount == 0 {
        return Err(ProgramError::InvalidArgument);
    }

    if !accounts[0].is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }
    if accounts[expected_len - 1].key != &sysvar::instructions::ID {
        return Err(ProgramError::InvalidArgument);
    }

    // Owner writability follows the transaction fee payer, so only check the rest
    for (index, account) in accounts.iter().enumerate().skip(1) {
        let omitted_referrer = name == "borrow" && index == 9 && account.key == program_id;
        let should_write = writable.contains(&index) && !omitted_referrer;
        if account.is_writable != should_write {
            msg!("kamino mock: bad writable flag at {}", index);
            return Err(ProgramError::InvalidAccountData);
        }
    }

    msg!("kamino mock: {} {}", name, amount);
    for (index, account) in accounts.iter().enumerate() {
        msg!("kamino mock account {}: {}", index, account.key);
    }
    Ok(())
}

/// Kamino market accounts. None of them need to exist for the mock.
pub struct KaminoMarket {
    pub reserve: Pubkey,
    pub lending_market: Pubkey,
    pub lending_market_authority: Pubkey,
    pub reserve_liquidity_mint: Pubkey,
    pub reserve_liquidity_supply: Pubkey,
    pub reserve_collateral_mint: Pubkey,
    pub obligation: Pubkey,
    pub fee_receiver: Pubkey,
    pub user_liquidity: Pubkey,
    pub user_collateral: Pubkey,
    pub token_program: Pubkey,
}

impl KaminoMarket {
    pub fn new() -> Self {
        Self {
            reserve: Pubkey::new_unique(),
            lending_market: Pubkey::new_unique(),
            lending_market_authority: Pubkey::new_unique(),
            reserve_liquidity_mint: Pubkey::new_unique(),
            reserve_liquidity_supply: Pubkey::new_unique(),
            reserve_collateral_mint: Pubkey::new_unique(),
            obligation: Pubkey::new_unique(),
            fee_receiver: Pubkey::new_unique(),
            user_liquidity: Pubkey::new_unique(),
            user_collateral: Pubkey::new_unique(),
            token_program: Pubkey::new_unique(),
        }
    }

    /// Accounts Kamino should receive for `deposit_reserve_liquidity`, in order
    pub fn deposit_keys(&self, owner: Pubkey) -> Vec<Pubkey> {
        vec![
            owner,
            self.reserve,
            self.lending_market,
            self.lending_market_authority,
            self.reserve_liquidity_mint,
            self.reserve_liquidity_supply,
            self.reserve_collateral_mint,
            self.user_liquidity,
            self.user_collateral,
            self.token_program,
            self.token_program,
            sysvar::instructions::ID,
        ]
    }

    /// An omitted referrer reaches Kamino as its own program id
    pub fn borrow_keys(
        &self,
        owner: Pubkey,
        referrer_token_state: Option<Pubkey>,
    ) -> Vec<Pubkey> {
        vec![
            owner,
            self.obligation,
            self.lending_market,
            self.lending_market_authority,
            self.reserve,
            self.reserve_liquidity_mint,
            self.reserve_liquidity_supply,
            self.fee_receiver,
            self.user_liquidity,
            referrer_token_state.unwrap_or(kamino::ID),
            self.token_program,
            sysvar::instructions::ID,
        ]
    }

    pub fn repay_keys(&self, owner: Pubkey) -> Vec<Pubkey> {
        vec![
            owner,
            self.obligation,
            self.lending_market,
            self.reserve,
            self.reserve_liquidity_mint,
            self.reserve_liquidity_supply,
            self.user_liquidity,
            self.token_program,
            sysvar::instructions::ID,
        ]
    }
}

/// Log lines the mock Kamino program writes for one accepted call
pub fn kamino_logs(name: &str, amount: u64, keys: &[Pubkey]) -> Vec<String> {
    let mut logs = vec![format!("Program log: kamino mock: {name} {amount}")];
    logs.extend(
        keys.iter()
            .enumerate()
            .map(|(index, key)| format!("Program log: kamino mock account {index}: {key}")),
    );
    logs
}

/// Panics unless every `expected` line shows up in `logs`, in order
pub fn assert_logs_in_order(logs: &[String], expected: &[String]) {
    let mut remaining = logs.iter();
    for line in expected {
        assert!(
            remaining.any(|log| log == line),
            "missing log line {line:?} in {logs:#?}"
        );
    }
}

pub struct TestContext {
    pub context: ProgramTestContext,
}

impl TestContext {
    pub async fn new() -> Self {
        let mut program_test = ProgramTest::new(
            "liquidity_lending",
            liquidity_lending::ID,
            processor!(process_instruction),
        );
        program_test.add_program("kamino_lending", kamino::ID, processor!(process_mock_kamino));

        Self {
            context: program_test.start_with_context().await,
        }
    }

    pub fn payer(&self) -> Pubkey {
        self.context.payer.pubkey()
    }

    pub fn config_address() -> Pubkey {
        Pubkey::find_program_address(&[liquidity_lending::CONFIG_SEED], &liquidity_lending::ID).0
    }

    /// Sign with the context payer plus `signers`
    async fn sign(&mut self, instructions: &[Instruction], signers: &[&Keypair]) -> Transaction {
        let blockhash = self.context.banks_client.get_latest_blockhash().await.unwrap();
        let mut all_signers = vec![&self.context.payer];
        all_signers.extend_from_slice(signers);

        Transaction::new_signed_with_payer(
            instructions,
            Some(&self.context.payer.pubkey()),
            all_signers.as_slice(),
            blockhash,
        )
    }

    pub async fn send(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        let tx = self.sign(instructions, signers).await;
        self.context.banks_client.process_transaction(tx).await
    }

    /// Like `send`, returning the transaction's log messages on success
    pub async fn send_with_logs(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<Vec<String>, TransactionError> {
        let tx = self.sign(instructions, signers).await;
        let outcome = self
            .context
            .banks_client
            .process_transaction_with_metadata(tx)
            .await
            .unwrap();

        outcome.result?;
        Ok(outcome
            .metadata
            .map(|metadata| metadata.log_messages)
            .unwrap_or_default())
    }

    pub async fn clock(&mut self) -> Clock {
        self.context.banks_client.get_sysvar::<Clock>().await.unwrap()
    }

    /// Move to a fresh blockhash so an identical transaction gets a new signature
    pub async fn refresh_blockhash(&mut self) {
        self.context.get_new_latest_blockhash().await.unwrap();
    }

    pub async fn fund(&mut self, to: &Pubkey, lamports: u64) {
        let ix = system_instruction::transfer(&self.payer(), to, lamports);
        self.send(&[ix], &[]).await.unwrap();
    }

    pub async fn get_account_data(&mut self, address: &Pubkey) -> Option<Vec<u8>> {
        self.context
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .map(|account| account.data)
    }

    pub fn initialize_ix(authority: Pubkey) -> Instruction {
        Instruction {
            program_id: liquidity_lending::ID,
            accounts: liquidity_lending::accounts::Initialize {
                authority,
                config: Self::config_address(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: liquidity_lending::instruction::Initialize {}.data(),
        }
    }

    pub fn deposit_ix(&self, market: &KaminoMarket, liquidity_amount: u64) -> Instruction {
        Instruction {
            program_id: liquidity_lending::ID,
            accounts: liquidity_lending::accounts::KaminoDepositReserveLiquidity {
                owner: self.payer(),
                reserve: market.reserve,
                lending_market: market.lending_market,
                lending_market_authority: market.lending_market_authority,
                reserve_liquidity_mint: market.reserve_liquidity_mint,
                reserve_liquidity_supply: market.reserve_liquidity_supply,
                reserve_collateral_mint: market.reserve_collateral_mint,
                user_source_liquidity: market.user_liquidity,
                user_destination_collateral: market.user_collateral,
                collateral_token_program: market.token_program,
                liquidity_token_program: market.token_program,
                instruction_sysvar_account: sysvar::instructions::ID,
                kamino_lending_program: kamino::ID,
            }
            .to_account_metas(None),
            data: liquidity_lending::instruction::KaminoDepositReserveLiquidity { liquidity_amount }
                .data(),
        }
    }

    pub fn borrow_ix(
        &self,
        market: &KaminoMarket,
        referrer_token_state: Option<Pubkey>,
        liquidity_amount: u64,
    ) -> Instruction {
        Instruction {
            program_id: liquidity_lending::ID,
            accounts: liquidity_lending::accounts::KaminoBorrowObligationLiquidity {
                owner: self.payer(),
                obligation: market.obligation,
                lending_market: market.lending_market,
                lending_market_authority: market.lending_market_authority,
                borrow_reserve: market.reserve,
                borrow_reserve_liquidity_mint: market.reserve_liquidity_mint,
                reserve_source_liquidity: market.reserve_liquidity_supply,
                borrow_reserve_liquidity_fee_receiver: market.fee_receiver,
                user_destination_liquidity: market.user_liquidity,
                referrer_token_state,
                token_program: market.token_program,
                instruction_sysvar_account: sysvar::instructions::ID,
                kamino_lending_program: kamino::ID,
            }
            .to_account_metas(None),
            data: liquidity_lending::instruction::KaminoBorrowObligationLiquidity {
                liquidity_amount,
            }
            .data(),
        }
    }

    pub fn repay_ix(&self, market: &KaminoMarket, liquidity_amount: u64) -> Instruction {
        Instruction {
            program_id: liquidity_lending::ID,
            accounts: liquidity_lending::accounts::KaminoRepayObligationLiquidity {
                owner: self.payer(),
                obligation: market.obligation,
                lending_market: market.lending_market,
                repay_reserve: market.reserve,
                reserve_liquidity_mint: market.reserve_liquidity_mint,
                reserve_destination_liquidity: market.reserve_liquidity_supply,
                user_source_liquidity: market.user_liquidity,
                token_program: market.token_program,
                instruction_sysvar_account: sysvar::instructions::ID,
                kamino_lending_program: kamino::ID,
            }
            .to_account_metas(None),
            data: liquidity_lending::instruction::KaminoRepayObligationLiquidity {
                liquidity_amount,
            }
            .data(),
        }
    }
}

/// Custom error code Anchor reports for a program error variant
pub fn anchor_error_code(error: liquidity_lending::LendingError) -> u32 {
    error as u32 + anchor_lang::error::ERROR_CODE_OFFSET
}

pub fn transaction_error(result: Result<(), BanksClientError>) -> TransactionError {
    result.expect_err("transaction should fail").unwrap()
}
