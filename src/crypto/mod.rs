//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - The fixed sizes and costs the vault format depends on (`params`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - AES-256-GCM sealing and opening (`encryption`)

pub mod encryption;
pub mod kdf;
pub mod params;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, derive, ...};
pub use encryption::{open, seal, Nonce};
pub use kdf::{derive, generate_salt, DerivedKey};
