//! Encrypting and decrypting a whole entry collection.
//!
//! `encode` turns an `EntryCollection` into vault text; `decode` turns
//! vault text back into the collection.  The plaintext between the two
//! is a JSON object of `{ name: { "name": ..., "secret": ... } }`.

use zeroize::Zeroizing;

use super::entry::EntryCollection;
use super::format::VaultBlob;
use crate::crypto::{self, Nonce};
use crate::errors::{Result, VaultError};

/// Encrypt `collection` under `passphrase` and return base64 vault text.
///
/// A fresh salt and nonce are drawn on every call, so encoding the same
/// collection twice yields two different texts.
///
/// A collection that `decode` would reject (empty name, or a key that
/// differs from its entry's name) is refused with `InvalidInput` before
/// anything is encrypted.
pub fn encode(collection: &EntryCollection, passphrase: &str) -> Result<String> {
    check_collection(collection).map_err(VaultError::InvalidInput)?;

    let plaintext = Zeroizing::new(
        serde_json::to_vec(collection)
            .map_err(|e| VaultError::InvalidInput(format!("cannot serialize entries: {e}")))?,
    );

    let salt = crypto::generate_salt();
    let nonce = Nonce::generate();
    let nonce_bytes = *nonce.as_bytes();

    let key = crypto::derive(passphrase, &salt);
    let ciphertext = crypto::seal(&key, nonce, &plaintext)?;

    let blob = VaultBlob {
        salt,
        nonce: nonce_bytes,
        ciphertext,
    };
    Ok(blob.to_text())
}

/// Decrypt vault text produced by `encode`.
///
/// Empty (or all-whitespace) text is an empty vault and never touches
/// the cipher.  A wrong passphrase and a tampered file both surface as
/// `AuthenticationFailure`.
pub fn decode(blob_text: &str, passphrase: &str) -> Result<EntryCollection> {
    if blob_text.trim().is_empty() {
        return Ok(EntryCollection::new());
    }

    let blob = VaultBlob::from_text(blob_text)?;
    let key = crypto::derive(passphrase, &blob.salt);
    let plaintext = Zeroizing::new(crypto::open(&key, &blob.nonce, &blob.ciphertext)?);

    let collection: EntryCollection = serde_json::from_slice(&plaintext)
        .map_err(|e| VaultError::DecodeError(format!("entries JSON: {e}")))?;

    check_collection(&collection).map_err(VaultError::DecodeError)?;

    Ok(collection)
}

/// Every key must be a non-empty name equal to its entry's own name.
fn check_collection(collection: &EntryCollection) -> std::result::Result<(), String> {
    for (name, entry) in collection {
        if name.is_empty() || entry.name().is_empty() {
            return Err("entry with an empty name".into());
        }
        if name != entry.name() {
            return Err(format!(
                "entry stored under '{name}' is named '{}'",
                entry.name()
            ));
        }
    }
    Ok(())
}
