use std::marker::PhantomData;
use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;
use tracing::debug;
use vyper_plugin_state::PluginAccount;

use crate::core::connection::SolConnection;
use crate::core::provider::Provider;
use crate::error::{Result, VyperSdkError};

/// Typed access to one state account of a deployed plugin program.
///
/// The state account may be unknown at construction. Reads always go to the
/// network and decode the current bytes; nothing is cached between calls.
pub struct PluginStateClient<C, A> {
    provider: Arc<Provider<C>>,
    program_id: Pubkey,
    state_account: Option<Pubkey>,
    _account: PhantomData<fn() -> A>,
}

impl<C, A> Clone for PluginStateClient<C, A> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            program_id: self.program_id,
            state_account: self.state_account,
            _account: PhantomData,
        }
    }
}

impl<C: SolConnection, A: PluginAccount> PluginStateClient<C, A> {
    pub fn new(provider: Arc<Provider<C>>, program_id: Pubkey) -> Self {
        Self {
            provider,
            program_id,
            state_account: None,
            _account: PhantomData,
        }
    }

    pub fn provider(&self) -> &Provider<C> {
        &self.provider
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn state_account(&self) -> Option<Pubkey> {
        self.state_account
    }

    /// A copy of this client targeting `state_account`.
    pub fn with_state_account(&self, state_account: Pubkey) -> Self {
        Self {
            state_account: Some(state_account),
            ..self.clone()
        }
    }

    pub fn set_state_account(&mut self, state_account: Pubkey) {
        self.state_account = Some(state_account);
    }

    /// The assigned state account, or `StateAccountNotFound`.
    pub fn require_state_account(&self) -> Result<Pubkey> {
        self.state_account
            .ok_or(VyperSdkError::StateAccountNotFound(self.program_id))
    }

    /// List every account owned by the program that carries `A`'s discriminator.
    pub async fn discover_state_accounts(&self) -> Result<Vec<Pubkey>> {
        let accounts = self
            .provider
            .connection()
            .get_program_accounts_with_prefix(&self.program_id, &A::discriminator())
            .await
            .map_err(|e| VyperSdkError::Network(e.to_string()))?;

        let found: Vec<Pubkey> = accounts.into_iter().map(|(pubkey, _)| pubkey).collect();

        debug!(
            "found {} {} account(s) for {}",
            found.len(),
            A::NAME,
            self.program_id
        );
        Ok(found)
    }

    /// Return the assigned state account, discovering it if none is set.
    ///
    /// Discovery assigns the account only when it is the single candidate.
    /// With several candidates the caller must choose one from
    /// [`Self::discover_state_accounts`] and assign it.
    pub async fn resolve_state_account(&mut self) -> Result<Pubkey> {
        if let Some(state_account) = self.state_account {
            return Ok(state_account);
        }

        let candidates = self.discover_state_accounts().await?;
        match candidates.as_slice() {
            [] => Err(VyperSdkError::StateAccountNotFound(self.program_id)),
            [only] => {
                self.state_account = Some(*only);
                Ok(*only)
            },
            _ => Err(VyperSdkError::AmbiguousStateAccount {
                program_id: self.program_id,
                count: candidates.len(),
            }),
        }
    }

    /// Fetch and decode `state_account`, or the assigned account when `None`.
    pub async fn fetch_state(&self, state_account: Option<Pubkey>) -> Result<A> {
        let address = match state_account {
            Some(address) => address,
            None => self.require_state_account()?,
        };

        let account = self
            .provider
            .connection()
            .get_account(&address)
            .await
            .map_err(|e| VyperSdkError::Network(e.to_string()))?
            .ok_or(VyperSdkError::AccountNotFound(address))?;

        if account.owner != self.program_id {
            return Err(VyperSdkError::WrongOwner {
                account: address,
                owner: account.owner,
                program_id: self.program_id,
            });
        }

        debug!("decoding {} from {}", A::NAME, address);
        Ok(A::decode(&account.data)?)
    }
}
