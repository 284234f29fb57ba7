//! On-disk vault blob layout.
//!
//! A vault file holds base64 text of this binary layout:
//!
//! ```text
//! [salt: 16 bytes][nonce: 12 bytes][ciphertext + GCM tag: variable]
//! ```
//!
//! There is no magic, version byte or length prefix: the two leading
//! fields are fixed-width and the ciphertext runs to the end.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::crypto::params::{NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::errors::{Result, VaultError};

/// Fixed-size prefix: 16 (salt) + 12 (nonce).
const PREFIX_LEN: usize = SALT_LEN + NONCE_LEN;

/// Smallest well-formed blob: prefix plus a bare tag (empty plaintext).
const MIN_BLOB_LEN: usize = PREFIX_LEN + TAG_LEN;

/// The three parts of an encrypted vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultBlob {
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
}

impl VaultBlob {
    /// Concatenate `salt || nonce || ciphertext`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(PREFIX_LEN + self.ciphertext.len());
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.nonce);
        buf.extend_from_slice(&self.ciphertext);
        buf
    }

    /// Split raw bytes back into salt, nonce and ciphertext.
    ///
    /// Anything too short to hold a tag is treated as corruption and
    /// reported the same way a failed tag check is.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < MIN_BLOB_LEN {
            return Err(VaultError::AuthenticationFailure);
        }

        let (salt, rest) = data.split_at(SALT_LEN);
        let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

        Ok(Self {
            salt: salt
                .try_into()
                .map_err(|_| VaultError::AuthenticationFailure)?,
            nonce: nonce
                .try_into()
                .map_err(|_| VaultError::AuthenticationFailure)?,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Encode as standard base64 text, ready to write to a text file.
    pub fn to_text(&self) -> String {
        BASE64.encode(self.to_bytes())
    }

    /// Parse base64 text (surrounding whitespace ignored).
    pub fn from_text(text: &str) -> Result<Self> {
        let data = BASE64
            .decode(text.trim())
            .map_err(|_| VaultError::AuthenticationFailure)?;
        Self::from_bytes(&data)
    }
}
