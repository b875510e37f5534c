//! RSA key import
//!
//! The endpoint's long-term keys arrive as PEM files; this module parses
//! them into the key handles the envelope and signature operations consume.
//! Key generation and storage live outside this layer.

use crate::CryptoError;
use pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Parse an RSA private key from PKCS#8 PEM
pub fn private_key_from_pem(pem: &str) -> Result<RsaPrivateKey, CryptoError> {
    RsaPrivateKey::from_pkcs8_pem(pem).map_err(|e| CryptoError::KeyImport(e.to_string()))
}

/// Parse an RSA public key from SPKI PEM
pub fn public_key_from_pem(pem: &str) -> Result<RsaPublicKey, CryptoError> {
    RsaPublicKey::from_public_key_pem(pem).map_err(|e| CryptoError::KeyImport(e.to_string()))
}
