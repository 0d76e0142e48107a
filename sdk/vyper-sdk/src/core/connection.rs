use async_trait::async_trait;
use solana_account_decoder::UiAccountEncoding;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, MemcmpEncodedBytes, RpcFilterType};
use solana_client::rpc_request::{RpcError, RpcResponseErrorData};
use solana_sdk::account::Account;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use thiserror::Error;

/// Failure reported by a [`SolConnection`].
///
/// `Transport` covers anything that kept the request from being answered;
/// `Rejected` means the cluster (or preflight) answered and refused.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Rejected(String),
}

/// The network RPC boundary. Implementations must not retry.
#[async_trait]
pub trait SolConnection: Send + Sync {
    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, ConnectionError>;

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> Result<Vec<(Pubkey, Account)>, ConnectionError>;

    /// Accounts owned by `program_id` whose data starts with `prefix`.
    ///
    /// The default filters [`Self::get_program_accounts`] locally;
    /// RPC-backed connections push the filter to the node.
    async fn get_program_accounts_with_prefix(
        &self,
        program_id: &Pubkey,
        prefix: &[u8],
    ) -> Result<Vec<(Pubkey, Account)>, ConnectionError> {
        let accounts = self.get_program_accounts(program_id).await?;
        Ok(accounts
            .into_iter()
            .filter(|(_, account)| account.data.starts_with(prefix))
            .collect())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ConnectionError>;

    /// Submit a signed transaction and wait until the cluster reports it
    /// confirmed at the connection's commitment.
    async fn send_and_confirm_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, ConnectionError>;

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ConnectionError>;

    async fn get_slot(&self) -> Result<u64, ConnectionError>;
}

fn transport(e: ClientError) -> ConnectionError {
    ConnectionError::Transport(e.to_string())
}

/// Only a refused transaction is `Rejected`: a failed preflight simulation,
/// a transaction error from the cluster, or a local signing failure.
/// Anything else on the send path, node errors included, is `Transport`.
fn classify_send_error(e: ClientError) -> ConnectionError {
    let rejected = matches!(
        e.kind(),
        ClientErrorKind::TransactionError(_)
            | ClientErrorKind::SigningError(_)
            | ClientErrorKind::RpcError(RpcError::RpcResponseError {
                data: RpcResponseErrorData::SendTransactionPreflightFailure(_),
                ..
            })
    );
    if rejected {
        ConnectionError::Rejected(e.to_string())
    } else {
        ConnectionError::Transport(e.to_string())
    }
}

#[async_trait]
impl SolConnection for RpcClient {
    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, ConnectionError> {
        RpcClient::get_account_with_commitment(self, pubkey, self.commitment())
            .await
            .map(|response| response.value)
            .map_err(transport)
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> Result<Vec<(Pubkey, Account)>, ConnectionError> {
        RpcClient::get_program_accounts(self, program_id)
            .await
            .map_err(transport)
    }

    async fn get_program_accounts_with_prefix(
        &self,
        program_id: &Pubkey,
        prefix: &[u8],
    ) -> Result<Vec<(Pubkey, Account)>, ConnectionError> {
        let config = RpcProgramAccountsConfig {
            filters: Some(vec![RpcFilterType::Memcmp(Memcmp::new(
                0,
                MemcmpEncodedBytes::Bytes(prefix.to_vec()),
            ))]),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(self.commitment()),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };
        RpcClient::get_program_accounts_with_config(self, program_id, config)
            .await
            .map_err(transport)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ConnectionError> {
        RpcClient::get_latest_blockhash(self).await.map_err(transport)
    }

    async fn send_and_confirm_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, ConnectionError> {
        RpcClient::send_and_confirm_transaction(self, tx)
            .await
            .map_err(classify_send_error)
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ConnectionError> {
        RpcClient::get_minimum_balance_for_rent_exemption(self, data_len)
            .await
            .map_err(transport)
    }

    async fn get_slot(&self) -> Result<u64, ConnectionError> {
        RpcClient::get_slot(self).await.map_err(transport)
    }
}
