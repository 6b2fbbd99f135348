//! Operator guidance printed after each command.
//!
//! Informational only; nothing here is parsed by other tools.

use std::path::Path;

use crate::config::{WalletRole, OFFSET_ENV_VAR};

const DEVNET_RPC: &str = "https://api.devnet.solana.com";
const FAUCET_URL: &str = "https://faucet.solana.com/";

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// After importing a private key
pub fn import_summary(primary: &Path, written: &[(WalletRole, std::path::PathBuf)]) -> String {
    let mut out = format!("Wallet file '{}' created successfully!\n", file_name(primary));
    for (role, path) in written.iter().skip(1) {
        out.push_str(&format!("  {} keypair: {}\n", role, file_name(path)));
    }
    out.push_str(&format!(
        "Please verify your public key using: solana address --keypair {}\n",
        file_name(primary)
    ));
    out.push_str("or: node-setup inspect-wallet\n");
    out
}

/// After generating a new wallet
pub fn wallet_created(path: &Path, public_key: &str) -> String {
    format!(
        "New wallet file '{}' created successfully!\n\
         Public key: {}\n\
         Please fund this wallet with Devnet SOL before running your node.\n\
         You can use the Solana faucet: {}\n",
        file_name(path),
        public_key,
        FAUCET_URL
    )
}

pub fn wallet_cancelled() -> &'static str {
    "Wallet generation cancelled."
}

/// After `generate-offset` when NODE_OFFSET is set
pub fn override_in_use(raw: &str) -> String {
    format!(
        "Using node offset from {} environment variable: {}\nSkipping offset generation.\n",
        OFFSET_ENV_VAR, raw
    )
}

pub fn offset_already_configured(offset: u64) -> String {
    format!(
        "Node offset already configured: {}\n\
         Skipping offset generation to preserve existing configuration.\n",
        offset
    )
}

/// After a fresh offset was written: export hints plus funding and
/// registration commands.
pub fn offset_generated(offset: u64, config_name: &str) -> String {
    let node_kp = WalletRole::Node.file_name();
    let callback_kp = WalletRole::Callback.file_name();
    let var = OFFSET_ENV_VAR;

    format!(
        "[✓] Node offset generated and configured successfully!\n\
         Your node offset: {offset}\n\
         \n\
         To keep your offset private, you can:\n\
         1. Set it as an environment variable:\n\
         \x20  export {var}={offset}\n\
         2. Add it to your .bashrc or .zshrc to persist across sessions:\n\
         \x20  echo 'export {var}={offset}' >> ~/.bashrc\n\
         \n\
         The start script will automatically use the {var} environment variable\n\
         if it's set, otherwise it will use the value in {config_name}.\n\
         \n\
         Next steps:\n\
         1. Fund your node accounts with Devnet SOL:\n\
         \x20  solana airdrop 2 $(solana address --keypair {node_kp}) -u devnet\n\
         \x20  solana airdrop 2 $(solana address --keypair {callback_kp}) -u devnet\n\
         \n\
         2. Initialize your node accounts:\n\
         \x20  arcium init-arx-accs \\\n\
         \x20  --keypair-path {node_kp} \\\n\
         \x20  --callback-keypair-path {callback_kp} \\\n\
         \x20  --peer-keypair-path identity.pem \\\n\
         \x20  --node-offset {offset} \\\n\
         \x20  --ip-address <your_public_ip> \\\n\
         \x20  --rpc-url {DEVNET_RPC}\n"
    )
}

/// `show-offset` output
pub fn offset_status(value: u64, source: crate::offset::OffsetSource, config_name: &str) -> String {
    use crate::offset::OffsetSource;
    match source {
        OffsetSource::Environment => format!(
            "Current node offset (from {} environment variable): {}\n",
            OFFSET_ENV_VAR, value
        ),
        OffsetSource::ConfigFile => {
            format!("Current node offset (from {}): {}\n", config_name, value)
        }
        OffsetSource::Unconfigured => format!(
            "No node offset configured.\n\
             Run `node-setup generate-offset` to generate one,\n\
             or set the {} environment variable.\n",
            OFFSET_ENV_VAR
        ),
    }
}
