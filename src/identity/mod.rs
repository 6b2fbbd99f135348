//! Wallet Identity Module
//!
//! Provisions the Ed25519 keypair files the node tooling reads:
//! importing an operator's base58 private key or generating a fresh keypair.

pub mod keypair;
pub mod prompt;
pub mod provision;

pub use keypair::{derive_public_key, to_base58, Keypair, KEYPAIR_LEN};
pub use prompt::{AssumeYes, OverwritePrompt, StdioPrompt};
pub use provision::{
    decode_private_key, generate_wallet, import_private_key, inspect_wallet, GenerateOutcome,
    GeneratedWallet, ImportedWallet, WalletReport,
};
