//! Rate mock plugin layouts.
//!
//! The rate mock program keeps a single settable fair value per state
//! account, used in place of an oracle-backed rate plugin on test clusters.

use borsh::{BorshDeserialize, BorshSerialize};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::decimal::{read_decimal_array, write_decimal_array, DECIMAL_LEN};
use crate::discriminator::{instruction_discriminator, DISCRIMINATOR_LEN};
use crate::error::StateError;
use crate::PluginAccount;

/// Number of fair value slots in a rate state account.
pub const FAIR_VALUE_SLOTS: usize = 10;

/// Rate state account
///
/// Layout: `[discriminator (8)][fair_value (10 * 16)][refreshed_slot (8)][authority (32)]`
#[derive(Debug, Clone, PartialEq, Serialize, BorshSerialize, BorshDeserialize)]
pub struct RateState {
    #[borsh(
        serialize_with = "write_decimal_array",
        deserialize_with = "read_decimal_array"
    )]
    pub fair_value: [Decimal; FAIR_VALUE_SLOTS],

    /// Slot of the last `set_fair_value`
    pub refreshed_slot: u64,

    /// Key allowed to update the fair value
    pub authority: [u8; 32],
}

impl PluginAccount for RateState {
    const NAME: &'static str = "RateState";
    const LEN: usize = DISCRIMINATOR_LEN + FAIR_VALUE_SLOTS * DECIMAL_LEN + 8 + 32;
}

impl RateState {
    pub fn new(authority: [u8; 32]) -> Self {
        Self {
            fair_value: [Decimal::ZERO; FAIR_VALUE_SLOTS],
            refreshed_slot: 0,
            authority,
        }
    }

    /// Fair value in slot `index` as a float, if it fits.
    pub fn fair_value_f64(&self, index: usize) -> Option<f64> {
        self.fair_value.get(index).and_then(|v| v.to_f64())
    }
}

pub const INITIALIZE: &str = "initialize";
pub const SET_FAIR_VALUE: &str = "set_fair_value";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateMockInstruction {
    /// Accounts: `[rate_state (w, s), authority (s), payer (w, s), system_program]`
    Initialize,

    /// Accounts: `[rate_state (w), authority (s)]`
    SetFairValue { fair_value: f64 },
}

impl RateMockInstruction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize => INITIALIZE,
            Self::SetFairValue { .. } => SET_FAIR_VALUE,
        }
    }

    pub fn pack(&self) -> Result<Vec<u8>, StateError> {
        let mut data = instruction_discriminator(self.name()).to_vec();
        match self {
            Self::Initialize => {},
            Self::SetFairValue { fair_value } => {
                if !fair_value.is_finite() {
                    return Err(StateError::InvalidInput(format!(
                        "fair value {fair_value} is not finite"
                    )));
                }
                BorshSerialize::serialize(fair_value, &mut data)
                    .map_err(|e| StateError::Serialize(e.to_string()))?;
            },
        }
        Ok(data)
    }

    pub fn unpack(data: &[u8]) -> Result<Self, StateError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(StateError::InvalidInput(
                "instruction data shorter than discriminator".to_string(),
            ));
        }

        let (tag, mut args) = data.split_at(DISCRIMINATOR_LEN);
        if tag == instruction_discriminator(INITIALIZE) {
            Ok(Self::Initialize)
        } else if tag == instruction_discriminator(SET_FAIR_VALUE) {
            let fair_value = f64::deserialize(&mut args).map_err(|e| StateError::Deserialize {
                account: SET_FAIR_VALUE,
                reason: e.to_string(),
            })?;
            Ok(Self::SetFairValue { fair_value })
        } else {
            let mut unknown = [0u8; DISCRIMINATOR_LEN];
            unknown.copy_from_slice(tag);
            Err(StateError::UnknownInstruction(unknown))
        }
    }
}
