use std::sync::Arc;

use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Signature, Signer};
use solana_sdk::transaction::Transaction;
use tracing::{debug, info, warn};

use crate::core::connection::SolConnection;
use crate::error::{Result, VyperSdkError};

/// A connection paired with the caller's wallet.
///
/// The wallet pays fees and signs every transaction sent through
/// [`Provider::send_and_confirm`]. The SDK never creates or persists it.
pub struct Provider<C> {
    connection: C,
    wallet: Arc<dyn Signer + Send + Sync>,
}

impl<C: SolConnection> Provider<C> {
    pub fn new(connection: C, wallet: Arc<dyn Signer + Send + Sync>) -> Self {
        Self { connection, wallet }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn wallet(&self) -> &dyn Signer {
        self.wallet.as_ref()
    }

    pub fn wallet_pubkey(&self) -> Pubkey {
        self.wallet.pubkey()
    }

    /// Build a transaction from `instructions`, sign it with the wallet and
    /// `extra_signers`, submit it and wait for confirmation.
    ///
    /// Nothing is retried. A failed blockhash fetch is a network error;
    /// signing and cluster rejections are submission errors.
    pub async fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        extra_signers: &[&dyn Signer],
    ) -> Result<Signature> {
        let payer = self.wallet_pubkey();
        let blockhash = self
            .connection
            .get_latest_blockhash()
            .await
            .map_err(|e| VyperSdkError::Network(e.to_string()))?;

        let mut signers: Vec<&dyn Signer> = Vec::with_capacity(extra_signers.len() + 1);
        signers.push(self.wallet());
        signers.extend_from_slice(extra_signers);

        let mut tx = Transaction::new_unsigned(Message::new(instructions, Some(&payer)));
        tx.try_sign(&signers, blockhash)
            .map_err(|e| VyperSdkError::Submission(format!("failed to sign: {e}")))?;

        debug!(
            "sending {} instruction(s) signed by {}",
            instructions.len(),
            payer
        );
        match self.connection.send_and_confirm_transaction(&tx).await {
            Ok(signature) => {
                info!("confirmed {}", signature);
                Ok(signature)
            },
            Err(error) => {
                warn!("transaction from {} failed: {}", payer, error);
                Err(error.into())
            },
        }
    }
}
