//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is fixed (see `params::PBKDF2_ITERATIONS`) and is
//! the only thing standing between an attacker holding the vault file and
//! an offline guess of the passphrase.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::params::{KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};

/// A 32-byte symmetric key that zeroes its memory when dropped.
///
/// Never persisted.  Build one with `derive` every time the vault is
/// opened or written and let it fall out of scope afterwards.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build a cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey(<redacted>)")
    }
}

/// Derive a 32-byte key from a passphrase and a 16-byte salt.
///
/// The same passphrase + salt will always produce the same key.
pub fn derive(passphrase: &str, salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut key = DerivedKey::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key.bytes);
    key
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: [u8; SALT_LEN] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];

    #[test]
    fn derive_is_deterministic_for_fixed_salt() {
        let a = derive("pw", &SALT);
        let b = derive("pw", &SALT);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn generated_salts_differ() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn debug_does_not_print_key() {
        let key = DerivedKey::new([0xAB; KEY_LEN]);
        let shown = format!("{key:?}");
        assert!(!shown.contains("171"));
        assert!(shown.contains("redacted"));
    }
}
