pub mod plugin;
pub mod rate_mock;
pub mod redeem_logic;
pub mod token;
