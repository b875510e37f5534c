//! Digital signatures
//!
//! RSA PKCS#1 v1.5 signatures over a caller-selected digest. Verification is
//! three-way: a valid signature, an evaluated-and-rejected signature, or a
//! provider failure — the middle case is `Ok(false)`, never an error.

use crate::CryptoError;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Digest algorithms usable for signing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl DigestAlgorithm {
    /// Digest output size in bytes
    pub fn output_size(&self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }

    fn hash(&self, message: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Sha256 => Sha256::digest(message).to_vec(),
            DigestAlgorithm::Sha384 => Sha384::digest(message).to_vec(),
            DigestAlgorithm::Sha512 => Sha512::digest(message).to_vec(),
        }
    }

    fn scheme(&self) -> Pkcs1v15Sign {
        match self {
            DigestAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
            DigestAlgorithm::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
            DigestAlgorithm::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
        }
    }
}

/// Sign a message with the given digest and private key.
///
/// Returns the signature bytes; the length is the RSA modulus size.
pub fn sign(
    digest: DigestAlgorithm,
    private_key: &RsaPrivateKey,
    message: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let mut rng = rand::thread_rng();
    let hashed = digest.hash(message);
    private_key
        .sign_with_rng(&mut rng, digest.scheme(), &hashed)
        .map_err(|e| CryptoError::SigningFailed(e.to_string()))
}

/// Verify a signature over a message.
///
/// `Ok(true)` means the signature is valid for this message and key.
/// `Ok(false)` means the evaluation completed and rejected it (wrong message,
/// wrong key, or a corrupted signature).
pub fn verify(
    digest: DigestAlgorithm,
    public_key: &RsaPublicKey,
    message: &[u8],
    signature: &[u8],
) -> Result<bool, CryptoError> {
    let hashed = digest.hash(message);
    Ok(public_key
        .verify(digest.scheme(), &hashed, signature)
        .is_ok())
}
