use solana_sdk::pubkey::Pubkey;
use thiserror::Error;
use vyper_plugin_state::StateError;

use crate::core::connection::ConnectionError;

/// SDK-specific error types for Vyper plugin operations
#[derive(Debug, Error)]
pub enum VyperSdkError {
    /// Account not found on-chain
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// No state account assigned and none discoverable for the program
    #[error("No state account found for program {0}")]
    StateAccountNotFound(Pubkey),

    /// Discovery returned several candidates; the caller has to pick one
    #[error("{count} state accounts owned by program {program_id}, assign one explicitly")]
    AmbiguousStateAccount { program_id: Pubkey, count: usize },

    /// Account data does not match the expected layout
    #[error("Decode error: {0}")]
    Decode(#[from] StateError),

    /// Account exists but belongs to another program
    #[error("Account {account} is owned by {owner}, expected {program_id}")]
    WrongOwner {
        account: Pubkey,
        owner: Pubkey,
        program_id: Pubkey,
    },

    /// Transport or RPC failure
    #[error("Network error: {0}")]
    Network(String),

    /// Transaction rejected locally or by the cluster
    #[error("Submission error: {0}")]
    Submission(String),

    /// Caller-supplied value out of range or missing
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Coarse classification for callers that report or branch on failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Decode,
    Network,
    Submission,
    InvalidArgument,
}

impl VyperSdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AccountNotFound(_)
            | Self::StateAccountNotFound(_)
            | Self::AmbiguousStateAccount { .. } => ErrorKind::NotFound,
            Self::Decode(_) | Self::WrongOwner { .. } => ErrorKind::Decode,
            Self::Network(_) => ErrorKind::Network,
            Self::Submission(_) => ErrorKind::Submission,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl From<ConnectionError> for VyperSdkError {
    fn from(e: ConnectionError) -> Self {
        match e {
            ConnectionError::Transport(msg) => Self::Network(msg),
            ConnectionError::Rejected(msg) => Self::Submission(msg),
        }
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, VyperSdkError>;
