//! Key-value store errors.
//!
//! Store failures are non-fatal throughout the engine: the in-memory state
//! stays authoritative for the session, so callers log and continue.

/// Errors that can occur reading or writing a key-value record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {key}: {message}")]
    ReadFailed { key: String, message: String },

    #[error("Failed to write {key}: {message}")]
    WriteFailed { key: String, message: String },

    #[error("Malformed record for {key}: {message}")]
    MalformedRecord { key: String, message: String },
}
