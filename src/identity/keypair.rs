//! Keypair bytes as persisted in wallet files
//!
//! On-disk format: a JSON array of integers in [0, 255], normally exactly
//! 64 entries laid out as `[32 seed][32 public key]`.

use ed25519_dalek::SigningKey;
use rand::{CryptoRng, RngCore};
use std::fs;
use std::path::Path;

use crate::error::{Result, SetupError};

/// Persisted keypair length: 32-byte seed followed by 32-byte public key
pub const KEYPAIR_LEN: usize = 64;

/// Ed25519 seed / public key length
pub const HALF_LEN: usize = 32;

#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print the seed
        f.debug_struct("Keypair")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl Keypair {
    /// Build a keypair from imported private key bytes.
    ///
    /// Inputs shorter than 64 bytes are right-padded with zeros, so the public
    /// half of a 32-byte seed comes out as all zeros rather than a derived key.
    /// Longer inputs are kept as-is.
    pub fn from_imported(mut bytes: Vec<u8>) -> Self {
        if bytes.len() < KEYPAIR_LEN {
            bytes.resize(KEYPAIR_LEN, 0);
        } else if bytes.len() > KEYPAIR_LEN {
            tracing::warn!(
                len = bytes.len(),
                "imported key is longer than {} bytes; keeping it unmodified",
                KEYPAIR_LEN
            );
        }
        Self { bytes }
    }

    /// Generate a fresh Ed25519 keypair: `seed || derive(seed)`.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let signing_key = SigningKey::generate(rng);
        Self {
            bytes: signing_key.to_keypair_bytes().to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// First 32 bytes (private seed), if present
    pub fn seed(&self) -> Option<[u8; HALF_LEN]> {
        self.bytes.get(..HALF_LEN)?.try_into().ok()
    }

    /// Bytes 32..64 as stored, without checking they match the seed
    pub fn public_half(&self) -> Option<[u8; HALF_LEN]> {
        self.bytes.get(HALF_LEN..KEYPAIR_LEN)?.try_into().ok()
    }

    /// Public key derived from the seed
    pub fn derived_public_key(&self) -> Option<[u8; HALF_LEN]> {
        self.seed().map(|seed| derive_public_key(&seed))
    }

    /// True when the stored public half is the Ed25519 derivation of the seed.
    pub fn is_consistent(&self) -> bool {
        match (self.derived_public_key(), self.public_half()) {
            (Some(derived), Some(stored)) => derived == stored,
            _ => false,
        }
    }

    /// Base58 of the stored public half
    pub fn public_key_base58(&self) -> Option<String> {
        self.public_half().map(|pk| to_base58(&pk))
    }

    /// Parse the JSON integer-array form. No length check; short arrays are
    /// caught where a seed is needed.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let bytes: Vec<u8> = serde_json::from_str(raw)?;
        Ok(Self { bytes })
    }

    pub fn to_json(&self) -> String {
        // Vec<u8> serializes as an array of numbers; this cannot fail
        serde_json::to_string(&self.bytes).unwrap_or_default()
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()).map_err(|e| SetupError::io(path, e))?;
        tracing::debug!(path = %path.display(), len = self.bytes.len(), "wrote keypair file");
        Ok(())
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| SetupError::io(path, e))?;
        Self::from_json(&raw).map_err(|source| SetupError::KeypairFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Derive the Ed25519 public key for a 32-byte seed
pub fn derive_public_key(seed: &[u8; HALF_LEN]) -> [u8; HALF_LEN] {
    SigningKey::from_bytes(seed).verifying_key().to_bytes()
}

/// Base58 text form used by Solana tooling for public keys
pub fn to_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_short_input_is_zero_padded() {
        let kp = Keypair::from_imported(vec![7u8; 32]);
        assert_eq!(kp.len(), KEYPAIR_LEN);
        assert_eq!(&kp.as_bytes()[..32], &[7u8; 32]);
        assert_eq!(kp.public_half(), Some([0u8; 32]));
    }

    #[test]
    fn test_long_input_is_kept() {
        let input: Vec<u8> = (0..70).collect();
        let kp = Keypair::from_imported(input.clone());
        assert_eq!(kp.as_bytes(), input.as_slice());
    }

    #[test]
    fn test_generated_keypair_is_consistent() {
        let mut rng = StdRng::seed_from_u64(7);
        let kp = Keypair::generate(&mut rng);
        assert_eq!(kp.len(), KEYPAIR_LEN);
        assert!(kp.is_consistent());

        let seed = kp.seed().unwrap();
        assert_eq!(kp.public_half().unwrap(), derive_public_key(&seed));
    }

    #[test]
    fn test_padded_import_is_not_consistent() {
        let mut rng = StdRng::seed_from_u64(1);
        let generated = Keypair::generate(&mut rng);
        let seed_only = Keypair::from_imported(generated.as_bytes()[..32].to_vec());
        assert!(!seed_only.is_consistent());
        assert_eq!(seed_only.derived_public_key(), generated.public_half());
    }

    #[test]
    fn test_json_is_integer_array() {
        let kp = Keypair::from_imported(vec![255, 0, 1]);
        let json = kp.to_json();
        assert!(json.starts_with("[255,0,1,0,"));
        let parsed: Vec<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 64);
    }

    #[test]
    fn test_from_json_parses_file_form() {
        let kp = Keypair::from_json("[1, 2, 3]").unwrap();
        assert_eq!(kp.as_bytes(), &[1u8, 2, 3]);
        assert!(Keypair::from_json("[256]").is_err());
        assert!(Keypair::from_json("\"abc\"").is_err());
    }

    #[test]
    fn test_public_key_base58_matches_stored_half() {
        let mut rng = StdRng::seed_from_u64(9);
        let kp = Keypair::generate(&mut rng);
        let encoded = kp.public_key_base58().unwrap();
        assert_eq!(
            bs58::decode(&encoded).into_vec().unwrap(),
            kp.public_half().unwrap().to_vec()
        );
        // 32 zero bytes encode as 32 leading '1's
        assert_eq!(
            Keypair::from_imported(Vec::new()).public_key_base58().unwrap(),
            "1".repeat(32)
        );
        assert!(Keypair::from_json("[1]").unwrap().public_key_base58().is_none());
    }

    #[test]
    fn test_read_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"secret_key":"00"}"#).unwrap();
        assert!(matches!(
            Keypair::read_from(&path),
            Err(SetupError::KeypairFormat { .. })
        ));
    }

    #[test]
    fn test_debug_hides_bytes() {
        let kp = Keypair::from_imported(vec![42; 64]);
        assert!(!format!("{:?}", kp).contains("42"));
    }
}
