//! Error types for VFPool.
//!
//! All errors use `thiserror` for ergonomic error handling and proper error chains.
//!
//! The filtering path itself never produces errors: malformed selector
//! entries degrade to diagnostics there. These variants surface from the
//! strict configuration pre-flight (`SelectorConfig::validate`) and from
//! outer tooling.

use thiserror::Error;

/// Result type alias for VFPool operations.
pub type Result<T> = std::result::Result<T, VfPoolError>;

/// Main error type for VFPool.
#[derive(Error, Debug)]
pub enum VfPoolError {
    #[error("Invalid PCI address: {address} (expected: 0000:01:00.0)")]
    InvalidPciAddress { address: String },

    #[error("Invalid selector entry {entry:?}: {reason}")]
    InvalidSelectorEntry { entry: String, reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
