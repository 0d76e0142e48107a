use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

// Devnet deployments
pub const RATE_MOCK_PROGRAM_ID: Pubkey = pubkey!("FB7HErqohbgaVV21BRiiMTuiBpeUYT8Yw7Z6EdEL7FAG");
pub const REDEEM_LOGIC_SETTLED_FORWARD_PROGRAM_ID: Pubkey =
    pubkey!("6vBg1GMtKj7EYDLWWt6tkHoDWLAAksNPbKWiXMic99qU");
