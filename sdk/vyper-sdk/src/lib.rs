pub mod advanced;
pub mod basic;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::basic::plugin::PluginStateClient;
pub use crate::basic::rate_mock::RateMockPlugin;
pub use crate::basic::redeem_logic::{RedeemLogicSettledForwardPlugin, SettledForwardTerms};
pub use crate::core::config::ProviderConfig;
pub use crate::core::connection::{ConnectionError, SolConnection};
pub use crate::core::provider::Provider;
pub use crate::error::{ErrorKind, Result, VyperSdkError};
pub use crate::utils::{find_associated_token_address, from_bps, to_bps};

pub mod state {
    pub use vyper_plugin_state::{
        PluginAccount, RateMockInstruction, RateState, RedeemLogicConfig, RedeemLogicInstruction,
        StateError,
    };
}
