//! Cryptographic primitives for Chantry
//!
//! This crate composes the cipher, public-key, digest and certificate-path
//! operations the endpoint needs: authenticated symmetric encryption, digital
//! envelopes, signatures, certificate verification and secure random bytes.
//! Every operation is stateless; callers keep ownership of all buffers.

pub mod aead;
pub mod cert;
pub mod envelope;
pub mod keys;
pub mod random;
pub mod signature;

pub use aead::{
    create_cipher, AeadCipher, CipherAlgorithm, SealedMessage, AES_GCM_NONCE_SIZE,
    CHACHA_NONCE_SIZE, TAG_SIZE,
};
pub use cert::{verify_certificate, CertStatus};
pub use envelope::{open, seal, Envelope, EnvelopeCipher};
pub use keys::{private_key_from_pem, public_key_from_pem};
pub use random::{generate_key, generate_nonce, random_bytes};
pub use signature::{sign, verify, DigestAlgorithm};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("Invalid nonce length: expected {expected}, got {got}")]
    InvalidNonceLength { expected: usize, got: usize },

    #[error("Invalid tag length: expected {expected}, got {got}")]
    InvalidTagLength { expected: usize, got: usize },

    #[error("Encryption failed")]
    EncryptionFailed,

    /// The ciphertext was processed but its authentication tag did not match.
    /// Kept distinct from every other failure so callers can tell a forgery
    /// from a broken setup.
    #[error("Authentication tag mismatch")]
    TagMismatch,

    #[error("Envelope operation failed: {0}")]
    EnvelopeFailed(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Key import failed: {0}")]
    KeyImport(String),

    /// CA certificate or CRL could not be loaded or parsed. Operational
    /// failure, never a statement about the certificate under test.
    #[error("Trust material unavailable: {0}")]
    TrustMaterial(String),

    #[error("Random source failure")]
    RandomFailed,
}
