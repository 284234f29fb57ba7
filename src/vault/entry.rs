//! Entry and EntryCollection types stored inside a vault.
//!
//! An entry is a named credential.  The collection maps each entry name
//! to its entry and is the unit that gets encrypted; a `BTreeMap` keeps
//! the serialized form in a stable order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{Result, VaultError};

/// The plaintext contents of a vault: entry name -> entry.
pub type EntryCollection = BTreeMap<String, Entry>;

/// A single named credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Entry {
    /// The entry name (e.g. "Gmail"); unique within a vault.
    name: String,

    /// The credential value.  Opaque to the vault.
    secret: String,
}

impl Entry {
    /// Build an entry, rejecting an empty name.
    pub fn new(name: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_entry_name(&name)?;
        Ok(Self {
            name,
            secret: secret.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Entry names must be non-empty; anything else in UTF-8 is allowed.
pub(crate) fn validate_entry_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(VaultError::InvalidInput(
            "entry name cannot be empty".into(),
        ));
    }
    Ok(())
}
