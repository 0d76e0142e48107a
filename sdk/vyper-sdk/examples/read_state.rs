//! Print a plugin's state account as JSON.
//!
//! ```text
//! ANCHOR_PROVIDER_URL=https://api.devnet.solana.com ANCHOR_WALLET=~/.config/solana/id.json \
//!     cargo run -p vyper-sdk --example read_state -- rate-mock
//! ```

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use solana_sdk::pubkey::Pubkey;
use tracing_subscriber::EnvFilter;
use vyper_sdk::utils::program_short_details;
use vyper_sdk::{ProviderConfig, RateMockPlugin, RedeemLogicSettledForwardPlugin};

#[derive(Clone, Copy, ValueEnum)]
enum Plugin {
    RateMock,
    RedeemLogic,
}

#[derive(Parser)]
struct Args {
    plugin: Plugin,

    /// State account to read. Discovered from the program when omitted.
    #[arg(long)]
    account: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let provider = Arc::new(ProviderConfig::from_env()?.connect()?);
    let account = args.account.as_deref().map(Pubkey::from_str).transpose()?;

    match args.plugin {
        Plugin::RateMock => {
            let mut plugin = RateMockPlugin::devnet(provider);
            if account.is_none() {
                plugin.resolve_state_account().await?;
            }
            println!("{}", program_short_details("rate_mock", &plugin.program_id()));
            let state = plugin.fetch_rate_state(account).await?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        },
        Plugin::RedeemLogic => {
            let mut plugin = RedeemLogicSettledForwardPlugin::devnet(provider);
            if account.is_none() {
                plugin.resolve_state_account().await?;
            }
            println!(
                "{}",
                program_short_details("redeem_logic_settled_forward", &plugin.program_id())
            );
            let config = plugin.fetch_config(account).await?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        },
    }
    Ok(())
}
