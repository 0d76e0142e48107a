use sha2::{Digest, Sha256};

pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

fn hashed(namespace: &str, name: &str) -> Discriminator {
    let digest = Sha256::digest(format!("{namespace}:{name}").as_bytes());
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    discriminator
}

/// `sha256("account:<Name>")[..8]`
pub fn account_discriminator(name: &str) -> Discriminator {
    hashed("account", name)
}

/// `sha256("global:<snake_case_name>")[..8]`
pub fn instruction_discriminator(name: &str) -> Discriminator {
    hashed("global", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_discriminator() {
        assert_eq!(
            hex::encode(instruction_discriminator("initialize")),
            "afaf6d1f0d989bed"
        );
    }

    #[test]
    fn test_namespaces_differ() {
        assert_ne!(
            account_discriminator("RateState"),
            instruction_discriminator("RateState")
        );
        assert_ne!(
            account_discriminator("RateState"),
            account_discriminator("RedeemLogicConfig")
        );
    }
}
