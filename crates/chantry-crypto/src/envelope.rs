//! Digital envelope encryption
//!
//! Hybrid scheme: a fresh symmetric session key encrypts the payload in CBC
//! mode, and the session key itself is sealed under the recipient's RSA
//! public key. The envelope carries no integrity check of its own; callers
//! that need tamper evidence layer a signature on top. That asymmetry with
//! the AEAD path is intentional.

use crate::{random::random_bytes, CryptoError};
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// CBC block size, which is also the IV size
pub const ENVELOPE_IV_SIZE: usize = 16;

/// Block ciphers supported for the envelope body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeCipher {
    /// AES-128-CBC with PKCS#7 padding
    Aes128Cbc,
    /// AES-256-CBC with PKCS#7 padding
    Aes256Cbc,
}

impl EnvelopeCipher {
    /// Session key size in bytes for this cipher
    pub fn key_size(&self) -> usize {
        match self {
            EnvelopeCipher::Aes128Cbc => 16,
            EnvelopeCipher::Aes256Cbc => 32,
        }
    }
}

/// A sealed envelope: everything the recipient needs besides their private key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Session key encrypted under the recipient's public key
    pub encrypted_key: Vec<u8>,
    /// IV used for the CBC body
    pub iv: [u8; ENVELOPE_IV_SIZE],
    /// CBC-encrypted, PKCS#7-padded payload
    pub ciphertext: Vec<u8>,
}

/// Seal a plaintext for the holder of `recipient`'s private key.
///
/// Generates the session key and IV internally; the caller supplies nothing
/// but the payload. The session key is sealed with RSA PKCS#1 v1.5.
pub fn seal(
    cipher: EnvelopeCipher,
    recipient: &RsaPublicKey,
    plaintext: &[u8],
) -> Result<Envelope, CryptoError> {
    let session_key = random_bytes(cipher.key_size())?;
    let iv_bytes = random_bytes(ENVELOPE_IV_SIZE)?;
    let mut iv = [0u8; ENVELOPE_IV_SIZE];
    iv.copy_from_slice(&iv_bytes);

    let mut rng = rand::thread_rng();
    let encrypted_key = recipient
        .encrypt(&mut rng, Pkcs1v15Encrypt, &session_key)
        .map_err(|e| CryptoError::EnvelopeFailed(format!("session key sealing failed: {e}")))?;

    let ciphertext = match cipher {
        EnvelopeCipher::Aes128Cbc => Aes128CbcEnc::new_from_slices(&session_key, &iv)
            .map_err(|_| CryptoError::InvalidKeyLength {
                expected: cipher.key_size(),
                got: session_key.len(),
            })?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        EnvelopeCipher::Aes256Cbc => Aes256CbcEnc::new_from_slices(&session_key, &iv)
            .map_err(|_| CryptoError::InvalidKeyLength {
                expected: cipher.key_size(),
                got: session_key.len(),
            })?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
    };

    Ok(Envelope {
        encrypted_key,
        iv,
        ciphertext,
    })
}

/// Open an envelope with the matching private key.
///
/// Any failure (key unsealing, bad padding, wrong key size after unsealing)
/// surfaces as a single envelope error; CBC carries no authenticator, so
/// there is no tamper verdict to report separately.
pub fn open(
    cipher: EnvelopeCipher,
    private_key: &RsaPrivateKey,
    envelope: &Envelope,
) -> Result<Vec<u8>, CryptoError> {
    let session_key = private_key
        .decrypt(Pkcs1v15Encrypt, &envelope.encrypted_key)
        .map_err(|e| CryptoError::EnvelopeFailed(format!("session key unsealing failed: {e}")))?;

    if session_key.len() != cipher.key_size() {
        return Err(CryptoError::EnvelopeFailed(format!(
            "unsealed session key has length {}, expected {}",
            session_key.len(),
            cipher.key_size()
        )));
    }

    let plaintext = match cipher {
        EnvelopeCipher::Aes128Cbc => Aes128CbcDec::new_from_slices(&session_key, &envelope.iv)
            .map_err(|_| CryptoError::InvalidKeyLength {
                expected: cipher.key_size(),
                got: session_key.len(),
            })?
            .decrypt_padded_vec_mut::<Pkcs7>(&envelope.ciphertext)
            .map_err(|_| CryptoError::EnvelopeFailed("padding check failed".to_string()))?,
        EnvelopeCipher::Aes256Cbc => Aes256CbcDec::new_from_slices(&session_key, &envelope.iv)
            .map_err(|_| CryptoError::InvalidKeyLength {
                expected: cipher.key_size(),
                got: session_key.len(),
            })?
            .decrypt_padded_vec_mut::<Pkcs7>(&envelope.ciphertext)
            .map_err(|_| CryptoError::EnvelopeFailed("padding check failed".to_string()))?,
    };

    Ok(plaintext)
}
