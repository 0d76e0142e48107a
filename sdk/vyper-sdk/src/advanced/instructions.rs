//! Pure instruction builders. No network access; identical inputs give
//! identical instructions.

use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;
use solana_sdk::system_program;
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account;
use vyper_plugin_state::{RateMockInstruction, RedeemLogicInstruction, StateError};

use crate::error::{Result, VyperSdkError};

fn pack_error(e: StateError) -> VyperSdkError {
    match e {
        StateError::InvalidInput(msg) => VyperSdkError::InvalidArgument(msg),
        other => VyperSdkError::Decode(other),
    }
}

fn token_error(e: impl std::fmt::Display) -> VyperSdkError {
    VyperSdkError::InvalidArgument(format!("token instruction: {e}"))
}

//=============================================================================
// Rate Mock
//=============================================================================

pub fn rate_mock_initialize(
    program_id: &Pubkey,
    rate_state: &Pubkey,
    authority: &Pubkey,
    payer: &Pubkey,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(*rate_state, true),
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: RateMockInstruction::Initialize.pack().map_err(pack_error)?,
    })
}

pub fn rate_mock_set_fair_value(
    program_id: &Pubkey,
    rate_state: &Pubkey,
    authority: &Pubkey,
    fair_value: f64,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(*rate_state, false),
        AccountMeta::new_readonly(*authority, true),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: RateMockInstruction::SetFairValue { fair_value }
            .pack()
            .map_err(pack_error)?,
    })
}

//=============================================================================
// Redeem Logic (settled forward)
//=============================================================================

pub fn redeem_logic_initialize(
    program_id: &Pubkey,
    config: &Pubkey,
    payer: &Pubkey,
    args: RedeemLogicInstruction,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(*config, true),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: args.pack().map_err(pack_error)?,
    })
}

//=============================================================================
// SPL Token provisioning
//=============================================================================

/// Create a rent-exempt mint account and initialize it with `authority` as
/// both mint and freeze authority.
pub fn create_mint(
    payer: &Pubkey,
    mint: &Pubkey,
    authority: &Pubkey,
    decimals: u8,
    lamports: u64,
) -> Result<Vec<Instruction>> {
    Ok(vec![
        system_instruction::create_account(
            payer,
            mint,
            lamports,
            spl_token::state::Mint::LEN as u64,
            &spl_token::id(),
        ),
        spl_token::instruction::initialize_mint(
            &spl_token::id(),
            mint,
            authority,
            Some(authority),
            decimals,
        )
        .map_err(token_error)?,
    ])
}

/// Create a rent-exempt, non-associated token account for `owner`.
pub fn create_token_account(
    payer: &Pubkey,
    account: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    lamports: u64,
) -> Result<Vec<Instruction>> {
    Ok(vec![
        system_instruction::create_account(
            payer,
            account,
            lamports,
            spl_token::state::Account::LEN as u64,
            &spl_token::id(),
        ),
        spl_token::instruction::initialize_account(&spl_token::id(), account, mint, owner)
            .map_err(token_error)?,
    ])
}

pub fn mint_to(
    mint: &Pubkey,
    destination: &Pubkey,
    mint_authority: &Pubkey,
    amount: u64,
) -> Result<Instruction> {
    spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        destination,
        mint_authority,
        &[],
        amount,
    )
    .map_err(token_error)
}

/// Create `owner`'s associated token account (funded by `payer`) and mint
/// `amount` into it. Returns the ATA with the instructions.
pub fn create_ata_and_mint_to(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    amount: u64,
) -> Result<(Pubkey, Vec<Instruction>)> {
    let ata = get_associated_token_address(owner, mint);
    let instructions = vec![
        create_associated_token_account(payer, owner, mint, &spl_token::id()),
        mint_to(mint, &ata, mint_authority, amount)?,
    ];
    Ok((ata, instructions))
}

/// Create `owner`'s associated token account and move `amount` into it from
/// `source`, a token account controlled by `source_authority`.
pub fn create_ata_and_transfer(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
    source: &Pubkey,
    source_authority: &Pubkey,
    amount: u64,
) -> Result<(Pubkey, Vec<Instruction>)> {
    let ata = get_associated_token_address(owner, mint);
    let instructions = vec![
        create_associated_token_account(payer, owner, mint, &spl_token::id()),
        spl_token::instruction::transfer(
            &spl_token::id(),
            source,
            &ata,
            source_authority,
            &[],
            amount,
        )
        .map_err(token_error)?,
    ];
    Ok((ata, instructions))
}
