//! Provider configuration
//!
//! Values are resolved in this order, later sources winning: built-in
//! defaults, an optional TOML file, then the `ANCHOR_*` environment variables.
//! The CLI applies its own flags on top.

use std::{fs, path::Path, path::PathBuf, str::FromStr};

use anchor_client::Cluster;
use serde::Deserialize;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    signature::{read_keypair_file, Keypair},
};

use crate::{Result, SdkError};

pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_ENV: &str = "ANCHOR_WALLET";
pub const COMMITMENT_ENV: &str = "ANCHOR_COMMITMENT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Cluster moniker (`localnet`, `devnet`, ...) or RPC URL
    #[serde(default = "default_cluster")]
    pub cluster: String,

    /// Path to the payer keypair file, `~` is expanded
    #[serde(default = "default_wallet")]
    pub wallet: String,

    /// `processed`, `confirmed` or `finalized`
    #[serde(default = "default_commitment")]
    pub commitment: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            cluster: default_cluster(),
            wallet: default_wallet(),
            commitment: default_commitment(),
        }
    }
}

impl ProviderConfig {
    /// Load configuration from an optional file and the process environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = Self::load_unvalidated(config_path)?;
        config.validate()?;
        Ok(config)
    }

    /// `load` without the final `validate`, for callers that layer more overrides on top
    pub fn load_unvalidated(config_path: Option<&Path>) -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }

        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());

        tracing::debug!(
            cluster = %config.cluster,
            wallet = %config.wallet,
            commitment = %config.commitment,
            "Resolved provider configuration"
        );
        Ok(config)
    }

    /// Parse a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Overwrite fields from `lookup`, keyed by environment variable name
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(cluster) = lookup(PROVIDER_URL_ENV) {
            self.cluster = cluster;
        }
        if let Some(wallet) = lookup(WALLET_ENV) {
            self.wallet = wallet;
        }
        if let Some(commitment) = lookup(COMMITMENT_ENV) {
            self.commitment = commitment;
        }
    }

    /// Replace fields with explicitly given values, e.g. command line flags
    pub fn apply_flags(
        &mut self,
        cluster: Option<&str>,
        wallet: Option<&str>,
        commitment: Option<&str>,
    ) {
        if let Some(cluster) = cluster {
            cluster.clone_into(&mut self.cluster);
        }
        if let Some(wallet) = wallet {
            wallet.clone_into(&mut self.wallet);
        }
        if let Some(commitment) = commitment {
            commitment.clone_into(&mut self.commitment);
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.cluster()?;
        self.commitment()?;
        self.wallet_path()?;
        Ok(())
    }

    pub fn cluster(&self) -> Result<Cluster> {
        Cluster::from_str(&self.cluster).map_err(|e| {
            SdkError::InvalidConfiguration(format!("cluster `{}`: {e}", self.cluster))
        })
    }

    pub fn commitment(&self) -> Result<CommitmentConfig> {
        match self.commitment.to_lowercase().as_str() {
            "processed" => Ok(CommitmentConfig::processed()),
            "confirmed" => Ok(CommitmentConfig::confirmed()),
            "finalized" => Ok(CommitmentConfig::finalized()),
            other => Err(SdkError::InvalidConfiguration(format!(
                "commitment `{other}` is not one of processed, confirmed, finalized"
            ))),
        }
    }

    pub fn wallet_path(&self) -> Result<PathBuf> {
        let expanded = shellexpand::full(&self.wallet).map_err(|e| {
            SdkError::InvalidConfiguration(format!("wallet `{}`: {e}", self.wallet))
        })?;
        Ok(PathBuf::from(expanded.as_ref()))
    }

    /// Load the payer keypair from the wallet path
    pub fn load_keypair(&self) -> Result<Keypair> {
        let path = self.wallet_path()?;
        read_keypair_file(&path).map_err(|e| SdkError::Keypair(format!("{}: {e}", path.display())))
    }
}

// Default values
fn default_cluster() -> String {
    "localnet".to_string()
}

fn default_wallet() -> String {
    "~/.config/solana/id.json".to_string()
}

fn default_commitment() -> String {
    "confirmed".to_string()
}
