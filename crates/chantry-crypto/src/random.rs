//! Secure random byte generation
//!
//! Thin wrapper over the system CSPRNG. Callers get an owned buffer or an
//! error; there is no sentinel value to misread as data.

use crate::{CipherAlgorithm, CryptoError};
use ring::rand::{SecureRandom, SystemRandom};

/// Produce `len` cryptographically secure random bytes.
///
/// A zero-length request succeeds with an empty buffer.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, CryptoError> {
    let mut buf = vec![0u8; len];
    let rng = SystemRandom::new();
    rng.fill(&mut buf).map_err(|_| CryptoError::RandomFailed)?;
    Ok(buf)
}

/// Generate a random key sized for the given cipher algorithm
pub fn generate_key(algorithm: CipherAlgorithm) -> Result<Vec<u8>, CryptoError> {
    random_bytes(algorithm.key_size())
}

/// Generate a random nonce sized for the given cipher algorithm.
///
/// Suitable for one-shot use; callers running a counter-based nonce schedule
/// should not mix it with random nonces under the same key.
pub fn generate_nonce(algorithm: CipherAlgorithm) -> Result<Vec<u8>, CryptoError> {
    random_bytes(algorithm.nonce_size())
}
