#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use solana_sdk::account::Account;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::transaction::Transaction;
use tokio::sync::Mutex;
use vyper_plugin_state::{
    decimal_from_f64, PluginAccount, RateMockInstruction, RateState, RedeemLogicConfig,
    RedeemLogicInstruction,
};
use vyper_sdk::core::connection::{ConnectionError, SolConnection};
use vyper_sdk::core::constants::{RATE_MOCK_PROGRAM_ID, REDEEM_LOGIC_SETTLED_FORWARD_PROGRAM_ID};
use vyper_sdk::Provider;

pub const GENESIS_SLOT: u64 = 100;

#[derive(Default)]
struct Ledger {
    accounts: HashMap<Pubkey, Account>,
    slot: u64,
    submitted: Vec<Transaction>,
    prefix_queries: Vec<Vec<u8>>,
}

/// In-memory cluster that executes the rate mock and redeem logic programs.
///
/// Transactions are atomic: every instruction applies or none does. System,
/// token and associated token instructions are accepted without effect.
pub struct MockConnection {
    ledger: Mutex<Ledger>,
    offline: AtomicBool,
}

impl MockConnection {
    pub fn new() -> Self {
        Self {
            ledger: Mutex::new(Ledger {
                slot: GENESIS_SLOT,
                ..Ledger::default()
            }),
            offline: AtomicBool::new(false),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub async fn set_account(&self, pubkey: Pubkey, owner: Pubkey, data: Vec<u8>) {
        self.ledger
            .lock()
            .await
            .accounts
            .insert(pubkey, new_account(owner, data));
    }

    pub async fn submitted(&self) -> Vec<Transaction> {
        self.ledger.lock().await.submitted.clone()
    }

    /// Prefixes passed to `get_program_accounts_with_prefix`, in call order.
    pub async fn prefix_queries(&self) -> Vec<Vec<u8>> {
        self.ledger.lock().await.prefix_queries.clone()
    }

    pub async fn slot(&self) -> u64 {
        self.ledger.lock().await.slot
    }

    fn check_online(&self) -> Result<(), ConnectionError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ConnectionError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

fn new_account(owner: Pubkey, data: Vec<u8>) -> Account {
    Account {
        lamports: 1_000_000,
        data,
        owner,
        executable: false,
        rent_epoch: 0,
    }
}

fn process_rate_mock(
    accounts: &mut HashMap<Pubkey, Account>,
    keys: &[(Pubkey, bool)],
    data: &[u8],
    slot: u64,
) -> Result<(), String> {
    match RateMockInstruction::unpack(data).map_err(|e| e.to_string())? {
        RateMockInstruction::Initialize => {
            let [(state, state_signed), (authority, authority_signed), ..] = keys else {
                return Err("not enough account keys".to_string());
            };
            if !state_signed || !authority_signed {
                return Err("missing required signature".to_string());
            }
            if accounts.contains_key(state) {
                return Err(format!("account {state} already in use"));
            }
            let data = RateState::new(authority.to_bytes())
                .encode()
                .map_err(|e| e.to_string())?;
            accounts.insert(*state, new_account(RATE_MOCK_PROGRAM_ID, data));
        },
        RateMockInstruction::SetFairValue { fair_value } => {
            let [(state, _), (authority, authority_signed), ..] = keys else {
                return Err("not enough account keys".to_string());
            };
            let account = accounts
                .get_mut(state)
                .ok_or_else(|| format!("account {state} not found"))?;
            if account.owner != RATE_MOCK_PROGRAM_ID {
                return Err("AccountOwnedByWrongProgram".to_string());
            }
            let mut rate = RateState::decode(&account.data).map_err(|e| e.to_string())?;
            if !authority_signed || rate.authority != authority.to_bytes() {
                return Err("ConstraintHasOne: authority".to_string());
            }
            rate.fair_value[0] = decimal_from_f64(fair_value).map_err(|e| e.to_string())?;
            rate.refreshed_slot = slot;
            account.data = rate.encode().map_err(|e| e.to_string())?;
        },
    }
    Ok(())
}

fn process_redeem_logic(
    accounts: &mut HashMap<Pubkey, Account>,
    keys: &[(Pubkey, bool)],
    data: &[u8],
) -> Result<(), String> {
    let ix = RedeemLogicInstruction::unpack(data).map_err(|e| e.to_string())?;
    let [(config, config_signed), ..] = keys else {
        return Err("not enough account keys".to_string());
    };
    if !config_signed {
        return Err("missing required signature".to_string());
    }
    if accounts.contains_key(config) {
        return Err(format!("account {config} already in use"));
    }
    let data = RedeemLogicConfig::from_initialize(&ix)
        .and_then(|config| config.encode())
        .map_err(|e| e.to_string())?;
    accounts.insert(
        *config,
        new_account(REDEEM_LOGIC_SETTLED_FORWARD_PROGRAM_ID, data),
    );
    Ok(())
}

fn process_transaction(ledger: &mut Ledger, tx: &Transaction) -> Result<(), String> {
    tx.verify().map_err(|e| e.to_string())?;

    let slot = ledger.slot + 1;
    let mut accounts = ledger.accounts.clone();
    let message = &tx.message;

    for ix in &message.instructions {
        let program_id = message.account_keys[ix.program_id_index as usize];
        let keys: Vec<(Pubkey, bool)> = ix
            .accounts
            .iter()
            .map(|&i| (message.account_keys[i as usize], message.is_signer(i as usize)))
            .collect();

        if program_id == RATE_MOCK_PROGRAM_ID {
            process_rate_mock(&mut accounts, &keys, &ix.data, slot)?;
        } else if program_id == REDEEM_LOGIC_SETTLED_FORWARD_PROGRAM_ID {
            process_redeem_logic(&mut accounts, &keys, &ix.data)?;
        }
    }

    ledger.accounts = accounts;
    ledger.slot = slot;
    ledger.submitted.push(tx.clone());
    Ok(())
}

#[async_trait]
impl SolConnection for MockConnection {
    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, ConnectionError> {
        self.check_online()?;
        Ok(self.ledger.lock().await.accounts.get(pubkey).cloned())
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> Result<Vec<(Pubkey, Account)>, ConnectionError> {
        self.check_online()?;
        let ledger = self.ledger.lock().await;
        let mut owned: Vec<(Pubkey, Account)> = ledger
            .accounts
            .iter()
            .filter(|(_, account)| account.owner == *program_id)
            .map(|(pubkey, account)| (*pubkey, account.clone()))
            .collect();
        owned.sort_by_key(|(pubkey, _)| *pubkey);
        Ok(owned)
    }

    async fn get_program_accounts_with_prefix(
        &self,
        program_id: &Pubkey,
        prefix: &[u8],
    ) -> Result<Vec<(Pubkey, Account)>, ConnectionError> {
        let owned = self.get_program_accounts(program_id).await?;
        self.ledger.lock().await.prefix_queries.push(prefix.to_vec());
        Ok(owned
            .into_iter()
            .filter(|(_, account)| account.data.starts_with(prefix))
            .collect())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ConnectionError> {
        self.check_online()?;
        Ok(Hash::new_from_array([7u8; 32]))
    }

    async fn send_and_confirm_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, ConnectionError> {
        self.check_online()?;
        let mut ledger = self.ledger.lock().await;
        process_transaction(&mut ledger, tx).map_err(ConnectionError::Rejected)?;
        Ok(tx.signatures[0])
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ConnectionError> {
        self.check_online()?;
        Ok(890_880 + 6_960 * data_len as u64)
    }

    async fn get_slot(&self) -> Result<u64, ConnectionError> {
        self.check_online()?;
        Ok(self.slot().await)
    }
}

pub struct TestContext {
    pub provider: Arc<Provider<MockConnection>>,
    pub wallet: Arc<Keypair>,
}

impl TestContext {
    pub fn connection(&self) -> &MockConnection {
        self.provider.connection()
    }

    /// Place a rate state account owned by the rate mock program.
    pub async fn seed_rate_state(&self, authority: &Pubkey) -> Pubkey {
        let address = Pubkey::new_unique();
        let data = RateState::new(authority.to_bytes()).encode().unwrap();
        self.connection()
            .set_account(address, RATE_MOCK_PROGRAM_ID, data)
            .await;
        address
    }
}

pub fn setup_test_context() -> TestContext {
    let wallet = Arc::new(Keypair::new());
    let provider = Arc::new(Provider::new(MockConnection::new(), wallet.clone()));
    TestContext { provider, wallet }
}
