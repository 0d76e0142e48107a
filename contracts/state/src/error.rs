//! Plugin State Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Account data too small for {account}: expected {expected} bytes, got {actual}")]
    AccountTooSmall {
        account: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Discriminator mismatch: data is not a {0} account")]
    DiscriminatorMismatch(&'static str),

    #[error("Failed to deserialize {account}: {reason}")]
    Deserialize {
        account: &'static str,
        reason: String,
    },

    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("Unknown instruction discriminator {0:?}")]
    UnknownInstruction([u8; 8]),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}
