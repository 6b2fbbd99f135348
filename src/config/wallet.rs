//! Wallet File Layout
//!
//! Fixed file names for the keypair files consumed by the node tooling.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletRole {
    /// Operator wallet (primary output of both wallet commands)
    User,
    /// Node identity keypair
    Node,
    /// Callback identity keypair
    Callback,
    /// Disposable keypair
    Burner,
}

impl WalletRole {
    /// Roles that receive a copy of an imported private key, primary first
    pub const IMPORT_TARGETS: [WalletRole; 4] = [
        WalletRole::User,
        WalletRole::Node,
        WalletRole::Callback,
        WalletRole::Burner,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            WalletRole::User => "user-wallet.json",
            WalletRole::Node => "node-keypair.json",
            WalletRole::Callback => "callback-kp.json",
            WalletRole::Burner => "burner-wallet.json",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WalletRole::User => "user",
            WalletRole::Node => "node",
            WalletRole::Callback => "callback",
            WalletRole::Burner => "burner",
        }
    }
}

impl fmt::Display for WalletRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
