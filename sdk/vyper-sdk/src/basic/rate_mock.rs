use std::sync::Arc;

use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use tracing::info;
use vyper_plugin_state::RateState;

use crate::advanced::instructions;
use crate::basic::plugin::PluginStateClient;
use crate::core::connection::SolConnection;
use crate::core::constants::RATE_MOCK_PROGRAM_ID;
use crate::core::provider::Provider;
use crate::error::Result;

/// Client for the rate mock plugin.
pub type RateMockPlugin<C> = PluginStateClient<C, RateState>;

impl<C: SolConnection> PluginStateClient<C, RateState> {
    pub fn create(provider: Arc<Provider<C>>, program_id: Pubkey) -> Self {
        Self::new(provider, program_id)
    }

    /// Client for the devnet deployment.
    pub fn devnet(provider: Arc<Provider<C>>) -> Self {
        Self::new(provider, RATE_MOCK_PROGRAM_ID)
    }

    pub async fn fetch_rate_state(&self, state_account: Option<Pubkey>) -> Result<RateState> {
        self.fetch_state(state_account).await
    }

    /// Build `set_fair_value` for the assigned state account, authorized by
    /// the provider wallet. Nothing is sent.
    pub fn set_fair_value_ix(&self, fair_value: f64) -> Result<Instruction> {
        instructions::rate_mock_set_fair_value(
            &self.program_id(),
            &self.require_state_account()?,
            &self.provider().wallet_pubkey(),
            fair_value,
        )
    }

    /// Set the fair value in its own transaction and wait for confirmation.
    pub async fn set_fair_value(&self, fair_value: f64) -> Result<Signature> {
        let ix = self.set_fair_value_ix(fair_value)?;
        let signature = self.provider().send_and_confirm(&[ix], &[]).await?;
        info!("set fair value {} ({})", fair_value, signature);
        Ok(signature)
    }

    /// Build `initialize` for a new rate state account with the provider
    /// wallet as authority and payer.
    pub fn initialize_ix(&self, rate_state: &Pubkey) -> Result<Instruction> {
        let wallet = self.provider().wallet_pubkey();
        instructions::rate_mock_initialize(&self.program_id(), rate_state, &wallet, &wallet)
    }

    /// Create a rate state account at `rate_state`'s address.
    ///
    /// The client is not retargeted; assign the new account explicitly.
    pub async fn initialize(&self, rate_state: &Keypair) -> Result<Signature> {
        let ix = self.initialize_ix(&rate_state.pubkey())?;
        self.provider().send_and_confirm(&[ix], &[rate_state]).await
    }
}
