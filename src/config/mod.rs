//! Vault location settings.

pub mod settings;

pub use settings::Settings;
