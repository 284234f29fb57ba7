//! File-backed vault operations.
//!
//! `VaultStore` is the only part of the crate that touches the
//! filesystem.  It holds nothing but the vault path: every operation
//! takes the passphrase, reads and decrypts the whole file, and (for
//! writes) re-encrypts and replaces the whole file.
//!
//! Read-modify-write operations are not isolated against other writers
//! of the same file.  Hosts that mutate one vault from several threads
//! or processes must serialize those calls themselves.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::codec;
use super::entry::{validate_entry_name, Entry, EntryCollection};
use crate::config::Settings;
use crate::errors::{Result, VaultError};

/// Handle to one vault file on disk.
#[derive(Debug, Clone)]
pub struct VaultStore {
    /// Path to the encrypted vault file.
    path: PathBuf,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Use the vault file at `path`.  Nothing is read or created yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the vault file described by `settings` under the home directory.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(settings.default_vault_path()?))
    }

    /// Use `~/.vaultdir/passwords.enc`.
    pub fn open_default() -> Result<Self> {
        Self::from_settings(&Settings::default())
    }

    // ------------------------------------------------------------------
    // Whole-vault operations
    // ------------------------------------------------------------------

    /// Decrypt and return every entry in the vault.
    ///
    /// A missing or empty file is an empty vault, not an error.  A wrong
    /// passphrase is an error, never an empty vault.
    pub fn load_all(&self, passphrase: &str) -> Result<EntryCollection> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "vault file missing; treating as empty");
                return Ok(EntryCollection::new());
            }
            Err(e) => return Err(e.into()),
        };

        // Non-UTF-8 content is corruption like any other.
        let text = String::from_utf8(data).map_err(|_| {
            warn!(path = %self.path.display(), "vault failed authentication");
            VaultError::AuthenticationFailure
        })?;

        if text.trim().is_empty() {
            debug!(path = %self.path.display(), "vault file empty; treating as empty");
            return Ok(EntryCollection::new());
        }

        let entries = codec::decode(&text, passphrase).map_err(|e| {
            if matches!(e, VaultError::AuthenticationFailure) {
                warn!(path = %self.path.display(), "vault failed authentication");
            }
            e
        })?;

        debug!(path = %self.path.display(), count = entries.len(), "vault loaded");
        Ok(entries)
    }

    /// Encrypt `entries` and replace the vault file with the result.
    ///
    /// Entries whose key is empty or differs from the entry's own name are
    /// refused with `InvalidInput` and nothing is written.
    ///
    /// The parent directory is created if needed.  The new contents are
    /// written to a temp file, synced, then renamed over the vault so a
    /// reader sees either the old file or the new one.
    pub fn save_all(&self, passphrase: &str, entries: &EntryCollection) -> Result<()> {
        let text = codec::encode(entries, passphrase)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        write_atomic(&self.path, text.as_bytes())?;

        debug!(path = %self.path.display(), count = entries.len(), "vault written");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Insert `entry`, replacing any entry with the same name.
    ///
    /// Re-encrypts the entire vault with a fresh salt and nonce.
    pub fn upsert(&self, passphrase: &str, entry: Entry) -> Result<()> {
        validate_entry_name(entry.name())?;
        let mut entries = self.load_all(passphrase)?;
        entries.insert(entry.name().to_string(), entry);
        self.save_all(passphrase, &entries)
    }

    /// Look up one entry.  `Ok(None)` means the vault opened and has no
    /// entry by that name.
    pub fn get(&self, passphrase: &str, name: &str) -> Result<Option<Entry>> {
        validate_entry_name(name)?;
        let mut entries = self.load_all(passphrase)?;
        Ok(entries.remove(name))
    }

    /// Alias for `upsert`.
    pub fn save_entry(&self, passphrase: &str, entry: Entry) -> Result<()> {
        self.upsert(passphrase, entry)
    }

    /// Alias for `get`.
    pub fn retrieve_entry(&self, passphrase: &str, name: &str) -> Result<Option<Entry>> {
        self.get(passphrase, name)
    }

    /// Remove one entry.  Returns `false`, and leaves the file untouched,
    /// if there was no entry by that name.
    pub fn remove(&self, passphrase: &str, name: &str) -> Result<bool> {
        validate_entry_name(name)?;
        let mut entries = self.load_all(passphrase)?;
        if entries.remove(name).is_none() {
            return Ok(false);
        }
        self.save_all(passphrase, &entries)?;
        Ok(true)
    }

    /// Entry names, sorted.
    pub fn names(&self, passphrase: &str) -> Result<Vec<String>> {
        Ok(self.load_all(passphrase)?.into_keys().collect())
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Returns `true` if the vault file is present.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove the vault file.  Succeeds if it is already gone.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "vault deleted");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write `contents` to a sibling temp file, sync it, then rename it over
/// `path`.  The temp file is owner-only on Unix; a leftover temp file
/// from an interrupted write is removed first so its permissions are
/// never inherited.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    match fs::remove_file(&tmp_path) {
        Ok(()) => debug!(path = %tmp_path.display(), "removed stale temp file"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let result = (|| -> io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&tmp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result.map_err(VaultError::from)
}
