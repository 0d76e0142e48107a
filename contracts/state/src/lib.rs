//! Vyper Plugin State
//!
//! Client-side definitions of the on-chain layouts used by Vyper plugin
//! programs: Anchor-style discriminators, account bodies and instruction
//! encodings. Mirrors the programs' interface description so the SDK can
//! decode accounts and build instructions without the on-chain crates.

pub mod decimal;
pub mod discriminator;
pub mod error;
pub mod rate_mock;
pub mod redeem_logic;

use borsh::{BorshDeserialize, BorshSerialize};

pub use decimal::{decimal_from_f64, decode_decimal, encode_decimal, DECIMAL_LEN};
pub use discriminator::{
    account_discriminator, instruction_discriminator, Discriminator, DISCRIMINATOR_LEN,
};
pub use error::StateError;
pub use rate_mock::{RateMockInstruction, RateState};
pub use redeem_logic::{RedeemLogicConfig, RedeemLogicInstruction};

/// An account layout owned by a plugin program.
///
/// The on-chain representation is `[discriminator (8)][borsh body]`, where the
/// discriminator is derived from [`PluginAccount::NAME`].
pub trait PluginAccount: BorshSerialize + BorshDeserialize + Sized {
    /// Account name as it appears in the interface description.
    const NAME: &'static str;

    /// Full account size, discriminator included.
    const LEN: usize;

    fn discriminator() -> Discriminator {
        account_discriminator(Self::NAME)
    }

    /// Returns true if `data` starts with this account's discriminator.
    fn matches(data: &[u8]) -> bool {
        data.len() >= DISCRIMINATOR_LEN && data[..DISCRIMINATOR_LEN] == Self::discriminator()
    }

    /// Decode raw account bytes.
    ///
    /// Trailing bytes past the body are ignored. Any other mismatch is an
    /// error; a partially decoded value is never returned.
    fn decode(data: &[u8]) -> Result<Self, StateError> {
        if data.len() < Self::LEN {
            return Err(StateError::AccountTooSmall {
                account: Self::NAME,
                expected: Self::LEN,
                actual: data.len(),
            });
        }

        let (discriminator, mut body) = data.split_at(DISCRIMINATOR_LEN);
        if discriminator != Self::discriminator() {
            return Err(StateError::DiscriminatorMismatch(Self::NAME));
        }

        Self::deserialize(&mut body).map_err(|e| StateError::Deserialize {
            account: Self::NAME,
            reason: e.to_string(),
        })
    }

    /// Encode into the on-chain byte layout.
    fn encode(&self) -> Result<Vec<u8>, StateError> {
        let mut data = Vec::with_capacity(Self::LEN);
        data.extend_from_slice(&Self::discriminator());
        self.serialize(&mut data)
            .map_err(|e| StateError::Serialize(e.to_string()))?;
        Ok(data)
    }
}
