use std::path::PathBuf;
use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::read_keypair_file;

use crate::core::provider::Provider;
use crate::error::{Result, VyperSdkError};

pub const PROVIDER_URL_VAR: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_VAR: &str = "ANCHOR_WALLET";

fn not_set(var: &str) -> VyperSdkError {
    VyperSdkError::InvalidArgument(format!("{var} is not set"))
}

/// Where to connect and which keypair file signs, read the same way an
/// Anchor workspace provider is: `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET`.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub url: String,
    pub wallet_path: PathBuf,
    pub commitment: CommitmentConfig,
}

impl ProviderConfig {
    /// Read the configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(
            std::env::var(PROVIDER_URL_VAR).ok(),
            std::env::var(WALLET_VAR).ok(),
        )
    }

    pub fn from_vars(url: Option<String>, wallet_path: Option<String>) -> Result<Self> {
        let url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| not_set(PROVIDER_URL_VAR))?;
        let wallet_path = wallet_path
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| not_set(WALLET_VAR))?;

        Ok(Self {
            url,
            wallet_path: PathBuf::from(wallet_path),
            commitment: CommitmentConfig::confirmed(),
        })
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    /// Load the wallet keypair and open a nonblocking RPC connection.
    pub fn connect(&self) -> Result<Provider<RpcClient>> {
        let wallet = read_keypair_file(&self.wallet_path).map_err(|e| {
            VyperSdkError::InvalidArgument(format!(
                "failed to read wallet {}: {e}",
                self.wallet_path.display()
            ))
        })?;
        let rpc = RpcClient::new_with_commitment(self.url.clone(), self.commitment);
        Ok(Provider::new(rpc, Arc::new(wallet)))
    }
}
