//! Vault module — encrypted entry storage.
//!
//! This module provides:
//! - `Entry` and `EntryCollection` types (`entry`)
//! - The `salt || nonce || ciphertext` blob layout (`format`)
//! - Whole-collection encryption and decryption (`codec`)
//! - File-backed `VaultStore` for loading, saving and looking up entries (`store`)

pub mod codec;
pub mod entry;
pub mod format;
pub mod store;

// Re-export the most commonly used items.
pub use codec::{decode, encode};
pub use entry::{Entry, EntryCollection};
pub use format::VaultBlob;
pub use store::VaultStore;
