//! Wallet provisioning: import an existing private key or generate a new one.

use rand::{CryptoRng, RngCore};
use std::path::{Path, PathBuf};

use super::keypair::{to_base58, Keypair};
use super::prompt::OverwritePrompt;
use crate::config::{SetupConfig, WalletRole};
use crate::error::{Result, SetupError};

/// Result of importing a private key
#[derive(Debug)]
pub struct ImportedWallet {
    pub keypair: Keypair,
    /// Files written, primary wallet first
    pub written: Vec<(WalletRole, PathBuf)>,
}

impl ImportedWallet {
    pub fn primary_path(&self) -> &Path {
        &self.written[0].1
    }
}

/// Result of generating a new wallet
#[derive(Debug)]
pub struct GeneratedWallet {
    pub keypair: Keypair,
    pub path: PathBuf,
    /// Base58 public key
    pub public_key: String,
}

#[derive(Debug)]
pub enum GenerateOutcome {
    Written(GeneratedWallet),
    /// Operator declined to overwrite; nothing was touched
    Cancelled(PathBuf),
}

/// What `inspect_wallet` found in a keypair file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletReport {
    pub path: PathBuf,
    pub len: usize,
    /// Base58 public key derived from the first 32 bytes
    pub derived_public_key: String,
    /// Base58 of bytes 32..64 as stored, if present
    pub stored_public_key: Option<String>,
    pub consistent: bool,
}

/// Decode a base58 private key into a keypair without touching the disk.
pub fn decode_private_key(encoded: &str) -> Result<Keypair> {
    let bytes = bs58::decode(encoded).into_vec()?;
    Ok(Keypair::from_imported(bytes))
}

/// Import a base58 private key and write it to every import target.
///
/// Decoding happens before any write, so a malformed key leaves the disk
/// untouched. A failure part-way through the writes is not rolled back.
pub fn import_private_key(encoded: &str, config: &SetupConfig) -> Result<ImportedWallet> {
    let keypair = decode_private_key(encoded)?;

    let mut written = Vec::with_capacity(WalletRole::IMPORT_TARGETS.len());
    for role in WalletRole::IMPORT_TARGETS {
        let path = config.wallet_path(role);
        keypair.write_to(&path)?;
        tracing::info!(role = %role, path = %path.display(), "wrote imported keypair");
        written.push((role, path));
    }

    Ok(ImportedWallet { keypair, written })
}

/// Generate a new Ed25519 wallet at `path`, asking before overwriting.
pub fn generate_wallet<R, P>(path: &Path, rng: &mut R, prompt: &mut P) -> Result<GenerateOutcome>
where
    R: RngCore + CryptoRng,
    P: OverwritePrompt + ?Sized,
{
    if path.exists() && !prompt.confirm_overwrite(path)? {
        tracing::info!(path = %path.display(), "overwrite declined");
        return Ok(GenerateOutcome::Cancelled(path.to_path_buf()));
    }

    let keypair = Keypair::generate(rng);
    keypair.write_to(path)?;

    let public_key = keypair.public_key_base58().unwrap_or_default();
    tracing::info!(path = %path.display(), public_key = %public_key, "generated new wallet");

    Ok(GenerateOutcome::Written(GeneratedWallet {
        keypair,
        path: path.to_path_buf(),
        public_key,
    }))
}

/// Read a keypair file and report its derived public key.
pub fn inspect_wallet(path: &Path) -> Result<WalletReport> {
    let keypair = Keypair::read_from(path)?;
    let derived = keypair
        .derived_public_key()
        .ok_or_else(|| SetupError::KeypairTooShort {
            path: path.to_path_buf(),
            len: keypair.len(),
        })?;

    Ok(WalletReport {
        path: path.to_path_buf(),
        len: keypair.len(),
        derived_public_key: to_base58(&derived),
        stored_public_key: keypair.public_key_base58(),
        consistent: keypair.is_consistent(),
    })
}
