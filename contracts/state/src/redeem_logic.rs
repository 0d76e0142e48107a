//! Settled forward redeem logic plugin layouts.

use borsh::{BorshDeserialize, BorshSerialize};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::decimal::{decimal_from_f64, read_decimal, write_decimal, DECIMAL_LEN};
use crate::discriminator::{instruction_discriminator, DISCRIMINATOR_LEN};
use crate::error::StateError;
use crate::PluginAccount;

/// Redeem logic config account
#[derive(Debug, Clone, PartialEq, Serialize, BorshSerialize, BorshDeserialize)]
pub struct RedeemLogicConfig {
    /// Contract notional, in base asset units
    pub notional: u64,

    /// true if linear, false if inverse
    pub is_linear: bool,

    /// true if the settlement quote is standard, false if inverted
    pub is_standard: bool,

    #[borsh(serialize_with = "write_decimal", deserialize_with = "read_decimal")]
    pub strike: Decimal,
}

impl PluginAccount for RedeemLogicConfig {
    const NAME: &'static str = "RedeemLogicConfig";
    const LEN: usize = DISCRIMINATOR_LEN + 8 + 1 + 1 + DECIMAL_LEN;
}

pub const INITIALIZE: &str = "initialize";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RedeemLogicInstruction {
    /// Accounts: `[redeem_logic_config (w, s), payer (w, s), system_program]`
    Initialize {
        strike: f64,
        notional: u64,
        is_linear: bool,
        is_standard: bool,
    },
}

#[derive(BorshSerialize, BorshDeserialize)]
struct InitializeArgs {
    strike: f64,
    notional: u64,
    is_linear: bool,
    is_standard: bool,
}

impl RedeemLogicInstruction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize { .. } => INITIALIZE,
        }
    }

    pub fn pack(&self) -> Result<Vec<u8>, StateError> {
        let mut data = instruction_discriminator(self.name()).to_vec();
        match *self {
            Self::Initialize {
                strike,
                notional,
                is_linear,
                is_standard,
            } => {
                // The program rejects negative strikes; catch it before submission.
                if !strike.is_finite() || strike < 0.0 {
                    return Err(StateError::InvalidInput(format!(
                        "strike must be a non-negative number, got {strike}"
                    )));
                }
                InitializeArgs {
                    strike,
                    notional,
                    is_linear,
                    is_standard,
                }
                .serialize(&mut data)
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
        if tag != instruction_discriminator(INITIALIZE) {
            let mut unknown = [0u8; DISCRIMINATOR_LEN];
            unknown.copy_from_slice(tag);
            return Err(StateError::UnknownInstruction(unknown));
        }

        let InitializeArgs {
            strike,
            notional,
            is_linear,
            is_standard,
        } = InitializeArgs::deserialize(&mut args).map_err(|e| StateError::Deserialize {
            account: INITIALIZE,
            reason: e.to_string(),
        })?;

        Ok(Self::Initialize {
            strike,
            notional,
            is_linear,
            is_standard,
        })
    }
}

impl RedeemLogicConfig {
    /// The config the program writes for an `Initialize` instruction.
    pub fn from_initialize(ix: &RedeemLogicInstruction) -> Result<Self, StateError> {
        let RedeemLogicInstruction::Initialize {
            strike,
            notional,
            is_linear,
            is_standard,
        } = *ix;

        Ok(Self {
            notional,
            is_linear,
            is_standard,
            strike: decimal_from_f64(strike)?,
        })
    }
}
