//! Operator helpers for validator node setup.
//!
//! Two independent one-shot tools share this crate:
//! - [`identity`]: wallet keypair files (import a base58 key or generate one)
//! - [`offset`]: the numeric node offset stored in the node config

pub mod config;
pub mod error;
pub mod guidance;
pub mod identity;
pub mod offset;

pub use config::{SetupConfig, WalletRole};
pub use error::{Result, SetupError};
