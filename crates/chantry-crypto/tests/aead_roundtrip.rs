use chantry_crypto::{
    create_cipher, generate_key, generate_nonce, CipherAlgorithm, CryptoError, TAG_SIZE,
};

const ALL_ALGORITHMS: [CipherAlgorithm; 3] = [
    CipherAlgorithm::Aes128Gcm,
    CipherAlgorithm::Aes256Gcm,
    CipherAlgorithm::ChaCha20Poly1305,
];

#[test]
fn roundtrip_all_algorithms() {
    let plaintext = b"hello chantry crypto!";
    let aad = b"message header";

    for algorithm in ALL_ALGORITHMS {
        let key = generate_key(algorithm).expect("key");
        let nonce = generate_nonce(algorithm).expect("nonce");
        let cipher = create_cipher(algorithm, &key).expect("cipher");

        let sealed = cipher.encrypt(&nonce, plaintext, aad).expect("encrypt");
        assert_eq!(
            sealed.ciphertext.len(),
            plaintext.len(),
            "stream-mode AEAD must not expand the payload"
        );
        assert_ne!(sealed.ciphertext.as_slice(), plaintext.as_slice());

        let recovered = cipher
            .decrypt(&nonce, &sealed.ciphertext, aad, &sealed.tag)
            .expect("decrypt");
        assert_eq!(recovered.as_slice(), plaintext.as_slice());
    }
}

#[test]
fn roundtrip_empty_plaintext_and_empty_aad() {
    let key = generate_key(CipherAlgorithm::Aes256Gcm).expect("key");
    let nonce = generate_nonce(CipherAlgorithm::Aes256Gcm).expect("nonce");
    let cipher = create_cipher(CipherAlgorithm::Aes256Gcm, &key).expect("cipher");

    let sealed = cipher.encrypt(&nonce, b"", b"").expect("encrypt");
    assert!(sealed.ciphertext.is_empty());
    assert_eq!(sealed.tag.len(), TAG_SIZE);

    let recovered = cipher
        .decrypt(&nonce, &sealed.ciphertext, b"", &sealed.tag)
        .expect("decrypt");
    assert!(recovered.is_empty());
}

#[test]
fn tampered_ciphertext_is_tag_mismatch() {
    for algorithm in ALL_ALGORITHMS {
        let key = generate_key(algorithm).expect("key");
        let nonce = generate_nonce(algorithm).expect("nonce");
        let cipher = create_cipher(algorithm, &key).expect("cipher");

        let sealed = cipher
            .encrypt(&nonce, b"payload under test", b"aad")
            .expect("encrypt");

        let mut corrupted = sealed.ciphertext.clone();
        corrupted[3] ^= 0x01; // single bit
        let result = cipher.decrypt(&nonce, &corrupted, b"aad", &sealed.tag);
        assert!(
            matches!(result, Err(CryptoError::TagMismatch)),
            "{algorithm:?}: flipped ciphertext bit must be a tag mismatch"
        );
    }
}

#[test]
fn tampered_aad_is_tag_mismatch() {
    let key = generate_key(CipherAlgorithm::ChaCha20Poly1305).expect("key");
    let nonce = generate_nonce(CipherAlgorithm::ChaCha20Poly1305).expect("nonce");
    let cipher = create_cipher(CipherAlgorithm::ChaCha20Poly1305, &key).expect("cipher");

    let sealed = cipher.encrypt(&nonce, b"payload", b"right aad").expect("encrypt");
    let result = cipher.decrypt(&nonce, &sealed.ciphertext, b"wrong aad", &sealed.tag);
    assert!(matches!(result, Err(CryptoError::TagMismatch)));
}

#[test]
fn tampered_tag_is_tag_mismatch() {
    let key = generate_key(CipherAlgorithm::Aes128Gcm).expect("key");
    let nonce = generate_nonce(CipherAlgorithm::Aes128Gcm).expect("nonce");
    let cipher = create_cipher(CipherAlgorithm::Aes128Gcm, &key).expect("cipher");

    let sealed = cipher.encrypt(&nonce, b"payload", b"").expect("encrypt");
    let mut tag = sealed.tag;
    tag[0] ^= 0x80;
    let result = cipher.decrypt(&nonce, &sealed.ciphertext, b"", &tag);
    assert!(matches!(result, Err(CryptoError::TagMismatch)));
}

#[test]
fn wrong_key_is_tag_mismatch() {
    let key_a = generate_key(CipherAlgorithm::Aes256Gcm).expect("key");
    let key_b = generate_key(CipherAlgorithm::Aes256Gcm).expect("key");
    let nonce = generate_nonce(CipherAlgorithm::Aes256Gcm).expect("nonce");

    let sealed = create_cipher(CipherAlgorithm::Aes256Gcm, &key_a)
        .expect("cipher")
        .encrypt(&nonce, b"payload", b"")
        .expect("encrypt");

    let result = create_cipher(CipherAlgorithm::Aes256Gcm, &key_b)
        .expect("cipher")
        .decrypt(&nonce, &sealed.ciphertext, b"", &sealed.tag);
    assert!(matches!(result, Err(CryptoError::TagMismatch)));
}

#[test]
fn setup_errors_are_not_tag_mismatch() {
    // Key length errors surface at construction
    let result = create_cipher(CipherAlgorithm::Aes256Gcm, &[0u8; 7]);
    assert!(matches!(
        result,
        Err(CryptoError::InvalidKeyLength {
            expected: 32,
            got: 7
        })
    ));

    let key = [0x42u8; 32];
    let cipher = create_cipher(CipherAlgorithm::Aes256Gcm, &key).expect("cipher");

    // Nonce length errors surface before any processing
    let result = cipher.encrypt(&[0u8; 8], b"payload", b"");
    assert!(matches!(
        result,
        Err(CryptoError::InvalidNonceLength {
            expected: 12,
            got: 8
        })
    ));

    // A truncated tag is a contract violation, not a forgery verdict
    let nonce = [0u8; 12];
    let sealed = cipher.encrypt(&nonce, b"payload", b"").expect("encrypt");
    let result = cipher.decrypt(&nonce, &sealed.ciphertext, b"", &sealed.tag[..8]);
    assert!(matches!(
        result,
        Err(CryptoError::InvalidTagLength {
            expected: TAG_SIZE,
            got: 8
        })
    ));
}

#[test]
fn deterministic_vectors_roundtrip() {
    // Fixed key and nonce so a regression in either direction shows up
    let key = [0x42u8; 32];
    let nonce = [0x07u8; 12];
    let cipher = create_cipher(CipherAlgorithm::Aes256Gcm, &key).expect("cipher");

    let sealed_a = cipher.encrypt(&nonce, b"same input", b"aad").expect("encrypt");
    let sealed_b = cipher.encrypt(&nonce, b"same input", b"aad").expect("encrypt");
    assert_eq!(sealed_a, sealed_b, "AEAD encryption is deterministic in key+nonce");

    let recovered = cipher
        .decrypt(&nonce, &sealed_a.ciphertext, b"aad", &sealed_a.tag)
        .expect("decrypt");
    assert_eq!(recovered, b"same input");
}
