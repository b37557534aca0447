use anchor_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Anchor client error: {0}")]
    AnchorClient(Box<ClientError>),

    #[error("RPC error: {0}")]
    Rpc(Box<solana_client::client_error::ClientError>),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to load keypair: {0}")]
    Keypair(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid amount for {instruction}: liquidity amount must be greater than zero")]
    InvalidAmount { instruction: &'static str },

    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

impl From<ClientError> for SdkError {
    fn from(err: ClientError) -> Self {
        Self::AnchorClient(Box::new(err))
    }
}

impl From<solana_client::client_error::ClientError> for SdkError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        Self::Rpc(Box::new(err))
    }
}
