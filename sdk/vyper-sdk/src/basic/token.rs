//! Mint and token account provisioning for test setups.
//!
//! Every sequence is paid for and authorized by the provider wallet.

use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use tracing::info;

use crate::advanced::instructions;
use crate::core::connection::SolConnection;
use crate::core::provider::Provider;
use crate::error::Result;

async fn rent_exempt<C: SolConnection>(provider: &Provider<C>, data_len: usize) -> Result<u64> {
    Ok(provider
        .connection()
        .get_minimum_balance_for_rent_exemption(data_len)
        .await?)
}

/// Create a mint with the wallet as mint and freeze authority.
pub async fn create_mint<C: SolConnection>(provider: &Provider<C>, decimals: u8) -> Result<Pubkey> {
    let mint = Keypair::new();
    let wallet = provider.wallet_pubkey();
    let lamports = rent_exempt(provider, spl_token::state::Mint::LEN).await?;

    let ixs = instructions::create_mint(&wallet, &mint.pubkey(), &wallet, decimals, lamports)?;
    provider.send_and_confirm(&ixs, &[&mint]).await?;

    info!("created mint {}", mint.pubkey());
    Ok(mint.pubkey())
}

/// Create a fresh user, its associated token account for `mint`, and mint
/// `quantity` into it. Returns the user keypair and its token account.
pub async fn create_user_and_token_account<C: SolConnection>(
    provider: &Provider<C>,
    mint: &Pubkey,
    quantity: u64,
) -> Result<(Keypair, Pubkey)> {
    let user = Keypair::new();
    let wallet = provider.wallet_pubkey();

    let (ata, ixs) =
        instructions::create_ata_and_mint_to(&wallet, &user.pubkey(), mint, &wallet, quantity)?;
    provider.send_and_confirm(&ixs, &[]).await?;

    Ok((user, ata))
}

/// Create a mint holding `quantity` tokens in a vault, then move them to
/// the wallet's associated token account. Returns the mint and that account.
pub async fn create_deposit_configuration<C: SolConnection>(
    provider: &Provider<C>,
    quantity: u64,
    decimals: u8,
) -> Result<(Pubkey, Pubkey)> {
    let wallet = provider.wallet_pubkey();
    let mint = create_mint(provider, decimals).await?;

    let vault = Keypair::new();
    let lamports = rent_exempt(provider, spl_token::state::Account::LEN).await?;
    let mut ixs =
        instructions::create_token_account(&wallet, &vault.pubkey(), &mint, &wallet, lamports)?;
    ixs.push(instructions::mint_to(&mint, &vault.pubkey(), &wallet, quantity)?);
    provider.send_and_confirm(&ixs, &[&vault]).await?;

    let (ata, ixs) = instructions::create_ata_and_transfer(
        &wallet,
        &wallet,
        &mint,
        &vault.pubkey(),
        &wallet,
        quantity,
    )?;
    provider.send_and_confirm(&ixs, &[]).await?;

    Ok((mint, ata))
}
