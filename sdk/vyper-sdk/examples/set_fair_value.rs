//! Push a new fair value to a rate mock state account.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use solana_sdk::pubkey::Pubkey;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vyper_sdk::{ProviderConfig, RateMockPlugin};

#[derive(Parser)]
struct Args {
    fair_value: f64,

    #[arg(long)]
    account: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let provider = Arc::new(ProviderConfig::from_env()?.connect()?);
    let mut plugin = RateMockPlugin::devnet(provider);

    match args.account.as_deref() {
        Some(account) => plugin.set_state_account(Pubkey::from_str(account)?),
        None => {
            plugin.resolve_state_account().await?;
        },
    }

    let before = plugin.fetch_rate_state(None).await?;
    plugin.set_fair_value(args.fair_value).await?;
    let after = plugin.fetch_rate_state(None).await?;

    info!(
        "fair value {:?} -> {:?}, refreshed slot {} -> {}",
        before.fair_value_f64(0),
        after.fair_value_f64(0),
        before.refreshed_slot,
        after.refreshed_slot
    );
    Ok(())
}
