use solana_sdk::pubkey::Pubkey;

use crate::error::{Result, VyperSdkError};

//=============================================================================
// Basis Points
//=============================================================================

pub const BPS_DENOMINATOR: f64 = 10_000.0;

/// Convert a fraction in `[0, 1]` to basis points.
pub fn to_bps(value: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&value) {
        return Err(VyperSdkError::InvalidArgument(format!(
            "input needs to be between 0 and 1, got {value}"
        )));
    }
    Ok(value * BPS_DENOMINATOR)
}

/// Convert basis points in `[0, 10000]` to a fraction.
pub fn from_bps(value: f64) -> Result<f64> {
    if !(0.0..=BPS_DENOMINATOR).contains(&value) {
        return Err(VyperSdkError::InvalidArgument(format!(
            "input needs to be between 0 and 10000, got {value}"
        )));
    }
    Ok(value / BPS_DENOMINATOR)
}

//=============================================================================
// Addresses
//=============================================================================

pub fn find_associated_token_address(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(wallet, mint)
}

/// `"<name>: <program id>"`
pub fn program_short_details(name: &str, program_id: &Pubkey) -> String {
    format!("{name}: {program_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bps() {
        assert_eq!(to_bps(0.0).unwrap(), 0.0);
        assert_eq!(to_bps(0.25).unwrap(), 2500.0);
        assert_eq!(to_bps(1.0).unwrap(), 10_000.0);
        assert!(to_bps(1.01).is_err());
        assert!(to_bps(-0.01).is_err());
        assert!(to_bps(f64::NAN).is_err());
    }

    #[test]
    fn test_from_bps() {
        assert_eq!(from_bps(0.0).unwrap(), 0.0);
        assert_eq!(from_bps(2500.0).unwrap(), 0.25);
        assert_eq!(from_bps(10_000.0).unwrap(), 1.0);
        assert!(from_bps(10_001.0).is_err());
        assert!(from_bps(-1.0).is_err());
    }

    #[test]
    fn test_associated_token_address() {
        let wallet = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let (expected, _) = Pubkey::find_program_address(
            &[wallet.as_ref(), spl_token::id().as_ref(), mint.as_ref()],
            &spl_associated_token_account::id(),
        );
        assert_eq!(find_associated_token_address(&wallet, &mint), expected);
        assert_ne!(find_associated_token_address(&mint, &wallet), expected);
    }

    #[test]
    fn test_program_short_details() {
        let id = Pubkey::new_unique();
        assert_eq!(program_short_details("rate_mock", &id), format!("rate_mock: {id}"));
    }
}
