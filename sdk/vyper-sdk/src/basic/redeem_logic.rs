use std::sync::Arc;

use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use vyper_plugin_state::{RedeemLogicConfig, RedeemLogicInstruction};

use crate::advanced::instructions;
use crate::basic::plugin::PluginStateClient;
use crate::core::connection::SolConnection;
use crate::core::constants::REDEEM_LOGIC_SETTLED_FORWARD_PROGRAM_ID;
use crate::core::provider::Provider;
use crate::error::Result;

/// Client for the settled forward redeem logic plugin.
pub type RedeemLogicSettledForwardPlugin<C> = PluginStateClient<C, RedeemLogicConfig>;

/// Contract terms written by `initialize`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettledForwardTerms {
    pub strike: f64,
    pub notional: u64,
    pub is_linear: bool,
    pub is_standard: bool,
}

impl From<SettledForwardTerms> for RedeemLogicInstruction {
    fn from(terms: SettledForwardTerms) -> Self {
        RedeemLogicInstruction::Initialize {
            strike: terms.strike,
            notional: terms.notional,
            is_linear: terms.is_linear,
            is_standard: terms.is_standard,
        }
    }
}

impl<C: SolConnection> PluginStateClient<C, RedeemLogicConfig> {
    pub fn devnet(provider: Arc<Provider<C>>) -> Self {
        Self::new(provider, REDEEM_LOGIC_SETTLED_FORWARD_PROGRAM_ID)
    }

    pub async fn fetch_config(&self, config: Option<Pubkey>) -> Result<RedeemLogicConfig> {
        self.fetch_state(config).await
    }

    pub fn initialize_ix(
        &self,
        config: &Pubkey,
        terms: SettledForwardTerms,
    ) -> Result<Instruction> {
        instructions::redeem_logic_initialize(
            &self.program_id(),
            config,
            &self.provider().wallet_pubkey(),
            terms.into(),
        )
    }

    pub async fn initialize(
        &self,
        config: &Keypair,
        terms: SettledForwardTerms,
    ) -> Result<Signature> {
        let ix = self.initialize_ix(&config.pubkey(), terms)?;
        self.provider().send_and_confirm(&[ix], &[config]).await
    }
}
