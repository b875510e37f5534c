//! Authenticated symmetric encryption
//!
//! AEAD ciphers with detached authentication tags. The tag travels separately
//! from the ciphertext so the wire layer can place it wherever its framing
//! wants; decryption refuses to hand back plaintext unless the tag verifies.

use crate::CryptoError;
use aes_gcm::{
    aead::{AeadInPlace, KeyInit},
    Aes128Gcm, Aes256Gcm, Key, Nonce, Tag,
};
use chacha20poly1305::ChaCha20Poly1305;

/// Size of the authentication tag in bytes (128-bit tags for all ciphers)
pub const TAG_SIZE: usize = 16;

/// Size of the nonce for AES-GCM
pub const AES_GCM_NONCE_SIZE: usize = 12;

/// Size of the nonce for ChaCha20-Poly1305
pub const CHACHA_NONCE_SIZE: usize = 12;

/// Supported cipher algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherAlgorithm {
    /// AES-128-GCM
    Aes128Gcm,
    /// AES-256-GCM
    Aes256Gcm,
    /// ChaCha20-Poly1305
    ChaCha20Poly1305,
}

impl CipherAlgorithm {
    /// Get the key size in bytes for this algorithm
    pub fn key_size(&self) -> usize {
        match self {
            CipherAlgorithm::Aes128Gcm => 16,
            CipherAlgorithm::Aes256Gcm => 32,
            CipherAlgorithm::ChaCha20Poly1305 => 32,
        }
    }

    /// Get the nonce size in bytes for this algorithm
    pub fn nonce_size(&self) -> usize {
        match self {
            CipherAlgorithm::Aes128Gcm | CipherAlgorithm::Aes256Gcm => AES_GCM_NONCE_SIZE,
            CipherAlgorithm::ChaCha20Poly1305 => CHACHA_NONCE_SIZE,
        }
    }
}

/// Ciphertext plus its detached authentication tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    /// Encrypted payload, same length as the plaintext
    pub ciphertext: Vec<u8>,
    /// Tag authenticating ciphertext and AAD
    pub tag: [u8; TAG_SIZE],
}

/// Trait for AEAD cipher operations with detached tags
pub trait AeadCipher: Send + Sync {
    /// Encrypt a message, binding the associated data into the tag.
    /// An empty `aad` slice means no associated data.
    fn encrypt(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8])
        -> Result<SealedMessage, CryptoError>;

    /// Decrypt a message and verify its tag. Returns plaintext only when the
    /// tag matches; a mismatch is `CryptoError::TagMismatch` and no plaintext
    /// is ever released in that case.
    fn decrypt(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>, CryptoError>;

    /// Get the algorithm used by this cipher
    fn algorithm(&self) -> CipherAlgorithm;
}

fn check_nonce(nonce: &[u8], expected: usize) -> Result<(), CryptoError> {
    if nonce.len() != expected {
        return Err(CryptoError::InvalidNonceLength {
            expected,
            got: nonce.len(),
        });
    }
    Ok(())
}

fn check_tag(tag: &[u8]) -> Result<(), CryptoError> {
    if tag.len() != TAG_SIZE {
        return Err(CryptoError::InvalidTagLength {
            expected: TAG_SIZE,
            got: tag.len(),
        });
    }
    Ok(())
}

/// AES-128-GCM cipher implementation
pub struct Aes128GcmCipher {
    cipher: Aes128Gcm,
}

impl Aes128GcmCipher {
    /// Create a new AES-128-GCM cipher
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != 16 {
            return Err(CryptoError::InvalidKeyLength {
                expected: 16,
                got: key.len(),
            });
        }

        let key = Key::<Aes128Gcm>::from_slice(key);
        let cipher = Aes128Gcm::new(key);

        Ok(Self { cipher })
    }
}

impl AeadCipher for Aes128GcmCipher {
    fn encrypt(
        &self,
        nonce: &[u8],
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<SealedMessage, CryptoError> {
        check_nonce(nonce, AES_GCM_NONCE_SIZE)?;

        let nonce = Nonce::from_slice(nonce);
        let mut buffer = plaintext.to_vec();
        let tag = self
            .cipher
            .encrypt_in_place_detached(nonce, aad, &mut buffer)
            .map_err(|_| CryptoError::EncryptionFailed)?;

        Ok(SealedMessage {
            ciphertext: buffer,
            tag: tag.into(),
        })
    }

    fn decrypt(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        check_nonce(nonce, AES_GCM_NONCE_SIZE)?;
        check_tag(tag)?;

        let nonce = Nonce::from_slice(nonce);
        let mut buffer = ciphertext.to_vec();
        self.cipher
            .decrypt_in_place_detached(nonce, aad, &mut buffer, Tag::from_slice(tag))
            .map_err(|_| CryptoError::TagMismatch)?;

        Ok(buffer)
    }

    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Aes128Gcm
    }
}

/// AES-256-GCM cipher implementation
pub struct Aes256GcmCipher {
    cipher: Aes256Gcm,
}

impl Aes256GcmCipher {
    /// Create a new AES-256-GCM cipher
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != 32 {
            return Err(CryptoError::InvalidKeyLength {
                expected: 32,
                got: key.len(),
            });
        }

        let key = Key::<Aes256Gcm>::from_slice(key);
        let cipher = Aes256Gcm::new(key);

        Ok(Self { cipher })
    }
}

impl AeadCipher for Aes256GcmCipher {
    fn encrypt(
        &self,
        nonce: &[u8],
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<SealedMessage, CryptoError> {
        check_nonce(nonce, AES_GCM_NONCE_SIZE)?;

        let nonce = Nonce::from_slice(nonce);
        let mut buffer = plaintext.to_vec();
        let tag = self
            .cipher
            .encrypt_in_place_detached(nonce, aad, &mut buffer)
            .map_err(|_| CryptoError::EncryptionFailed)?;

        Ok(SealedMessage {
            ciphertext: buffer,
            tag: tag.into(),
        })
    }

    fn decrypt(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        check_nonce(nonce, AES_GCM_NONCE_SIZE)?;
        check_tag(tag)?;

        let nonce = Nonce::from_slice(nonce);
        let mut buffer = ciphertext.to_vec();
        self.cipher
            .decrypt_in_place_detached(nonce, aad, &mut buffer, Tag::from_slice(tag))
            .map_err(|_| CryptoError::TagMismatch)?;

        Ok(buffer)
    }

    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Aes256Gcm
    }
}

/// ChaCha20-Poly1305 cipher implementation
pub struct ChaCha20Poly1305Cipher {
    cipher: ChaCha20Poly1305,
}

impl ChaCha20Poly1305Cipher {
    /// Create a new ChaCha20-Poly1305 cipher
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != 32 {
            return Err(CryptoError::InvalidKeyLength {
                expected: 32,
                got: key.len(),
            });
        }

        let key = Key::<ChaCha20Poly1305>::from_slice(key);
        let cipher = ChaCha20Poly1305::new(key);

        Ok(Self { cipher })
    }
}

impl AeadCipher for ChaCha20Poly1305Cipher {
    fn encrypt(
        &self,
        nonce: &[u8],
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<SealedMessage, CryptoError> {
        check_nonce(nonce, CHACHA_NONCE_SIZE)?;

        let nonce = chacha20poly1305::Nonce::from_slice(nonce);
        let mut buffer = plaintext.to_vec();
        let tag = self
            .cipher
            .encrypt_in_place_detached(nonce, aad, &mut buffer)
            .map_err(|_| CryptoError::EncryptionFailed)?;

        Ok(SealedMessage {
            ciphertext: buffer,
            tag: tag.into(),
        })
    }

    fn decrypt(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        check_nonce(nonce, CHACHA_NONCE_SIZE)?;
        check_tag(tag)?;

        let nonce = chacha20poly1305::Nonce::from_slice(nonce);
        let mut buffer = ciphertext.to_vec();
        self.cipher
            .decrypt_in_place_detached(nonce, aad, &mut buffer, Tag::from_slice(tag))
            .map_err(|_| CryptoError::TagMismatch)?;

        Ok(buffer)
    }

    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::ChaCha20Poly1305
    }
}

/// Create a cipher instance from an algorithm and key
pub fn create_cipher(
    algorithm: CipherAlgorithm,
    key: &[u8],
) -> Result<Box<dyn AeadCipher>, CryptoError> {
    match algorithm {
        CipherAlgorithm::Aes128Gcm => Ok(Box::new(Aes128GcmCipher::new(key)?)),
        CipherAlgorithm::Aes256Gcm => Ok(Box::new(Aes256GcmCipher::new(key)?)),
        CipherAlgorithm::ChaCha20Poly1305 => Ok(Box::new(ChaCha20Poly1305Cipher::new(key)?)),
    }
}
