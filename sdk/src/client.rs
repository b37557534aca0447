use std::sync::Arc;

use anchor_client::{Client, ClientError, Cluster, Program};
use liquidity_lending::LendingConfig;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tracing::{debug, info};

use crate::accounts::{
    BorrowObligationLiquidityAccounts, DepositReserveLiquidityAccounts,
    RepayObligationLiquidityAccounts,
};
use crate::config::ProviderConfig;
use crate::{instructions, pda, Result, SdkError};

/// Client for the liquidity lending program
pub struct LendingClient {
    pub payer: Arc<Keypair>,
    pub program: Program<Arc<Keypair>>,
}

impl LendingClient {
    /// Create a client from a resolved provider configuration
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let payer = Arc::new(config.load_keypair()?);
        Self::with_payer(config.cluster()?, payer, config.commitment()?)
    }

    pub fn with_payer(
        cluster: Cluster,
        payer: Arc<Keypair>,
        commitment: CommitmentConfig,
    ) -> Result<Self> {
        debug!(cluster = %cluster.url(), payer = %payer.pubkey(), "Connecting");

        let client = Client::new_with_options(cluster, payer.clone(), commitment);
        let program = client.program(liquidity_lending::ID)?;

        Ok(Self { payer, program })
    }

    /// Get the payer's public key
    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn program_id(&self) -> Pubkey {
        self.program.id()
    }

    pub fn config_address(&self) -> Pubkey {
        pda::find_config_address().0
    }

    /// Payer balance in lamports
    pub async fn payer_balance(&self) -> Result<u64> {
        Ok(self.program.rpc().get_balance(&self.payer()).await?)
    }

    /// Create the program configuration, signed and paid for by the payer
    pub async fn initialize(&self) -> Result<Signature> {
        self.send("initialize", instructions::initialize(self.payer()))
            .await
    }

    pub async fn deposit_reserve_liquidity(
        &self,
        accounts: &DepositReserveLiquidityAccounts,
        liquidity_amount: u64,
    ) -> Result<Signature> {
        let ix = instructions::deposit_reserve_liquidity(self.payer(), accounts, liquidity_amount)?;
        self.send("kamino_deposit_reserve_liquidity", ix).await
    }

    pub async fn borrow_obligation_liquidity(
        &self,
        accounts: &BorrowObligationLiquidityAccounts,
        liquidity_amount: u64,
    ) -> Result<Signature> {
        let ix =
            instructions::borrow_obligation_liquidity(self.payer(), accounts, liquidity_amount)?;
        self.send("kamino_borrow_obligation_liquidity", ix).await
    }

    pub async fn repay_obligation_liquidity(
        &self,
        accounts: &RepayObligationLiquidityAccounts,
        liquidity_amount: u64,
    ) -> Result<Signature> {
        let ix =
            instructions::repay_obligation_liquidity(self.payer(), accounts, liquidity_amount)?;
        self.send("kamino_repay_obligation_liquidity", ix).await
    }

    /// Fetch the configuration account
    pub async fn fetch_config(&self) -> Result<LendingConfig> {
        let address = self.config_address();
        match self.program.account::<LendingConfig>(address).await {
            Ok(config) => Ok(config),
            Err(ClientError::AccountNotFound) => Err(SdkError::AccountNotFound(address.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn send(&self, name: &str, ix: Instruction) -> Result<Signature> {
        debug!(instruction = name, program = %self.program_id(), "Sending transaction");

        let signature = self.program.request().instruction(ix).send().await?;

        info!(instruction = name, %signature, "Transaction confirmed");
        Ok(signature)
    }
}
