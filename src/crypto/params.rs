//! Fixed cryptographic parameters.
//!
//! Every size and cost used by the vault lives here so a review only has
//! to read one file.  Changing any of these changes the on-disk format.

/// Length of the PBKDF2 salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the AES-256-GCM nonce in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Length of the GCM authentication tag appended to the ciphertext.
pub const TAG_LEN: usize = 16;

/// PBKDF2-HMAC-SHA256 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 100_000;
