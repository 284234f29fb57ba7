//! AES-256-GCM authenticated encryption.
//!
//! `seal` consumes a `Nonce`, and the only way to make a fresh `Nonce` is
//! `Nonce::generate`, so a nonce value can never seal twice.  `open`
//! takes the raw nonce bytes read back from storage.
//!
//! Layout of the sealed output:
//!   [ ciphertext | 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key};
use rand::RngCore;

use super::kdf::DerivedKey;
use super::params::{NONCE_LEN, TAG_LEN};
use crate::errors::{Result, VaultError};

/// A single-use 96-bit GCM nonce.
///
/// Deliberately neither `Clone` nor `Copy`.
#[derive(Debug)]
pub struct Nonce([u8; NONCE_LEN]);

impl Nonce {
    /// Draw a fresh random nonce.
    pub fn generate() -> Self {
        let mut bytes = [0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// The nonce bytes, to be stored next to the ciphertext.
    pub fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

/// Encrypt and authenticate `plaintext` under `key`.
///
/// Returns the ciphertext with the 16-byte tag appended.
pub fn seal(key: &DerivedKey, nonce: Nonce, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    cipher
        .encrypt(aes_gcm::Nonce::from_slice(&nonce.0), plaintext)
        .map_err(|_| VaultError::InvalidInput("plaintext too large to encrypt".into()))
}

/// Verify and decrypt data produced by `seal`.
///
/// Any tag mismatch (wrong key, wrong nonce, flipped bit) and any
/// input too short to carry a tag yields `AuthenticationFailure`.
pub fn open(key: &DerivedKey, nonce: &[u8; NONCE_LEN], ciphertext_with_tag: &[u8]) -> Result<Vec<u8>> {
    if ciphertext_with_tag.len() < TAG_LEN {
        return Err(VaultError::AuthenticationFailure);
    }

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    cipher
        .decrypt(aes_gcm::Nonce::from_slice(nonce), ciphertext_with_tag)
        .map_err(|_| VaultError::AuthenticationFailure)
}
