//! Liquidity lending SDK
//!
//! Resolves a provider (cluster, wallet, commitment), builds the program's
//! instructions and submits them through `anchor-client`.

pub mod accounts;
pub mod client;
pub mod config;
pub mod error;
pub mod instructions;
pub mod pda;

pub use accounts::*;
pub use client::LendingClient;
pub use config::ProviderConfig;
pub use error::SdkError;

// Re-export commonly used types
pub use anchor_client::Cluster;
pub use liquidity_lending::{LendingConfig, ID as PROGRAM_ID};
pub use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};

pub type Result<T> = std::result::Result<T, error::SdkError>;
