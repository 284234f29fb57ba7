use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Caller errors ---
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // --- Crypto errors ---
    /// Wrong passphrase and corrupted storage are deliberately the same error.
    #[error("Decryption failed — wrong passphrase or corrupted vault")]
    AuthenticationFailure,

    // --- Format errors ---
    #[error("Vault contents could not be decoded: {0}")]
    DecodeError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, VaultError>;
