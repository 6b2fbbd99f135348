//! Setup Configuration
//!
//! Where wallets and the node config live, plus the node offset override.

pub mod setup;
pub mod wallet;

pub use setup::{SetupConfig, DEFAULT_NODE_CONFIG, OFFSET_ENV_VAR};
pub use wallet::WalletRole;
