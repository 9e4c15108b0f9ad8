//! Wallet derivation and key handling.
//!
//! # Security
//! - Private keys are never logged by this module
//! - Failure paths identify accounts by masked key prefix, never the full key

use alloy::hex;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::blockchain::types::{ChainError, ChainResult};

/// A derived account identity: signer plus the addresses computed from it.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Derive a wallet from a raw private key string.
    ///
    /// Keys exported from MetaMask lack the `0x` prefix; they are normalized
    /// before parsing so the same credential always derives the same identity.
    pub fn from_raw_key(raw: &str) -> ChainResult<Self> {
        let normalized = normalize_private_key(raw);
        let key_hex = normalized.strip_prefix("0x").unwrap_or(&normalized);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| ChainError::Wallet(format!("Invalid private key format: {}", e)))?;

        Ok(Self { signer })
    }

    /// Generate a wallet with a fresh random private key.
    pub fn generate() -> Self {
        Self {
            signer: PrivateKeySigner::random(),
        }
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the underlying signer.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    /// Hex-encoded private key, `0x`-prefixed. Only for persistence to the
    /// account file; never log this value.
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.signer.to_bytes()))
    }

    /// Uncompressed SEC1 public key, `0x`-prefixed (65 bytes, `04` tag).
    pub fn public_key_hex(&self) -> String {
        let point = self
            .signer
            .credential()
            .verifying_key()
            .to_encoded_point(false);
        format!("0x{}", hex::encode(point.as_bytes()))
    }
}

/// Normalize a raw credential to its canonical `0x`-prefixed form.
pub fn normalize_private_key(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("0x") {
        trimmed.to_string()
    } else {
        format!("0x{}", trimmed)
    }
}

/// Short, log-safe form of a credential: prefix only, rest elided.
pub fn masked_key(raw: &str) -> String {
    let normalized = normalize_private_key(raw);
    let prefix: String = normalized.chars().take(6).collect();
    format!("{}..", prefix)
}
