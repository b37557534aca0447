//! Liquidity lending CLI
//!
//! Submits the program's instructions to a cluster using the Anchor provider
//! conventions (`ANCHOR_PROVIDER_URL`, `ANCHOR_WALLET`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use liquidity_lending_sdk::{
    pda, BorrowObligationLiquidityAccounts, DepositReserveLiquidityAccounts, LendingClient,
    ProviderConfig, Pubkey, RepayObligationLiquidityAccounts, TOKEN_PROGRAM_ID,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "liquidity-lending")]
#[command(author, version, about = "Route liquidity into Kamino Lending", long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Cluster moniker or RPC URL
    #[arg(short = 'u', long, env = "ANCHOR_PROVIDER_URL", global = true)]
    url: Option<String>,

    /// Path to the payer keypair
    #[arg(short, long, env = "ANCHOR_WALLET", global = true)]
    wallet: Option<String>,

    /// Commitment level
    #[arg(long, global = true)]
    commitment: Option<String>,

    /// Log level, ignored when RUST_LOG is set
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the program configuration account
    Initialize,
    /// Deposit liquidity into a Kamino reserve
    Deposit(DepositArgs),
    /// Borrow liquidity against a Kamino obligation
    Borrow(BorrowArgs),
    /// Repay borrowed liquidity
    Repay(RepayArgs),
    /// Print the on-chain configuration
    ShowConfig,
    /// Print the configuration PDA and bump
    ConfigAddress,
}

#[derive(Args)]
struct DepositArgs {
    #[arg(long)]
    amount: u64,
    #[arg(long)]
    reserve: Pubkey,
    #[arg(long)]
    lending_market: Pubkey,
    #[arg(long)]
    lending_market_authority: Pubkey,
    #[arg(long)]
    reserve_liquidity_mint: Pubkey,
    #[arg(long)]
    reserve_liquidity_supply: Pubkey,
    #[arg(long)]
    reserve_collateral_mint: Pubkey,
    #[arg(long)]
    user_source_liquidity: Pubkey,
    #[arg(long)]
    user_destination_collateral: Pubkey,
    #[arg(long, default_value_t = TOKEN_PROGRAM_ID)]
    collateral_token_program: Pubkey,
    #[arg(long, default_value_t = TOKEN_PROGRAM_ID)]
    liquidity_token_program: Pubkey,
}

impl From<&DepositArgs> for DepositReserveLiquidityAccounts {
    fn from(args: &DepositArgs) -> Self {
        Self {
            reserve: args.reserve,
            lending_market: args.lending_market,
            lending_market_authority: args.lending_market_authority,
            reserve_liquidity_mint: args.reserve_liquidity_mint,
            reserve_liquidity_supply: args.reserve_liquidity_supply,
            reserve_collateral_mint: args.reserve_collateral_mint,
            user_source_liquidity: args.user_source_liquidity,
            user_destination_collateral: args.user_destination_collateral,
            collateral_token_program: args.collateral_token_program,
            liquidity_token_program: args.liquidity_token_program,
        }
    }
}

#[derive(Args)]
struct BorrowArgs {
    #[arg(long)]
    amount: u64,
    #[arg(long)]
    obligation: Pubkey,
    #[arg(long)]
    lending_market: Pubkey,
    #[arg(long)]
    lending_market_authority: Pubkey,
    #[arg(long)]
    borrow_reserve: Pubkey,
    #[arg(long)]
    borrow_reserve_liquidity_mint: Pubkey,
    #[arg(long)]
    reserve_source_liquidity: Pubkey,
    #[arg(long)]
    borrow_reserve_liquidity_fee_receiver: Pubkey,
    #[arg(long)]
    user_destination_liquidity: Pubkey,
    #[arg(long)]
    referrer_token_state: Option<Pubkey>,
    #[arg(long, default_value_t = TOKEN_PROGRAM_ID)]
    token_program: Pubkey,
}

impl From<&BorrowArgs> for BorrowObligationLiquidityAccounts {
    fn from(args: &BorrowArgs) -> Self {
        Self {
            obligation: args.obligation,
            lending_market: args.lending_market,
            lending_market_authority: args.lending_market_authority,
            borrow_reserve: args.borrow_reserve,
            borrow_reserve_liquidity_mint: args.borrow_reserve_liquidity_mint,
            reserve_source_liquidity: args.reserve_source_liquidity,
            borrow_reserve_liquidity_fee_receiver: args.borrow_reserve_liquidity_fee_receiver,
            user_destination_liquidity: args.user_destination_liquidity,
            referrer_token_state: args.referrer_token_state,
            token_program: args.token_program,
        }
    }
}

#[derive(Args)]
struct RepayArgs {
    #[arg(long)]
    amount: u64,
    #[arg(long)]
    obligation: Pubkey,
    #[arg(long)]
    lending_market: Pubkey,
    #[arg(long)]
    repay_reserve: Pubkey,
    #[arg(long)]
    reserve_liquidity_mint: Pubkey,
    #[arg(long)]
    reserve_destination_liquidity: Pubkey,
    #[arg(long)]
    user_source_liquidity: Pubkey,
    #[arg(long, default_value_t = TOKEN_PROGRAM_ID)]
    token_program: Pubkey,
}

impl From<&RepayArgs> for RepayObligationLiquidityAccounts {
    fn from(args: &RepayArgs) -> Self {
        Self {
            obligation: args.obligation,
            lending_market: args.lending_market,
            repay_reserve: args.repay_reserve,
            reserve_liquidity_mint: args.reserve_liquidity_mint,
            reserve_destination_liquidity: args.reserve_destination_liquidity,
            user_source_liquidity: args.user_source_liquidity,
            token_program: args.token_program,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let signature = match &cli.command {
        Commands::Initialize => connect(&cli).await?.initialize().await?,
        Commands::Deposit(args) => {
            let client = connect(&cli).await?;
            client.deposit_reserve_liquidity(&args.into(), args.amount).await?
        }
        Commands::Borrow(args) => {
            let client = connect(&cli).await?;
            client.borrow_obligation_liquidity(&args.into(), args.amount).await?
        }
        Commands::Repay(args) => {
            let client = connect(&cli).await?;
            client.repay_obligation_liquidity(&args.into(), args.amount).await?
        }
        Commands::ShowConfig => {
            let client = connect(&cli).await?;
            let lending_config = client.fetch_config().await?;
            println!("Config:     {}", client.config_address());
            println!("Authority:  {}", lending_config.authority);
            println!("Created at: {}", lending_config.created_at);
            println!("Bump:       {}", lending_config.bump);
            return Ok(());
        }
        Commands::ConfigAddress => {
            let (address, bump) = pda::find_config_address();
            println!("{address} (bump {bump})");
            return Ok(());
        }
    };

    println!("Your transaction signature {signature}");
    Ok(())
}

async fn connect(cli: &Cli) -> Result<LendingClient> {
    let config = provider_config(cli)?;
    let client = LendingClient::new(&config).context("Failed to create client")?;

    let lamports = client.payer_balance().await?;
    info!(
        payer = %client.payer(),
        lamports,
        program = %client.program_id(),
        "Using provider"
    );
    Ok(client)
}

/// File and environment first, then explicit flags
fn provider_config(cli: &Cli) -> Result<ProviderConfig> {
    let mut config = ProviderConfig::load_unvalidated(cli.config.as_deref())
        .context("Failed to load configuration")?;
    config.apply_flags(
        cli.url.as_deref(),
        cli.wallet.as_deref(),
        cli.commitment.as_deref(),
    );

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
