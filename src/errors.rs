//! Error types for transaction/packet conversion

use thiserror::Error;

/// Error type for all codec operations
///
/// Both variants carry the underlying `bincode` error verbatim as the error
/// source. The codec never retries or recovers; callers decide what a failed
/// conversion means for them.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Transaction could not be encoded to its wire representation
    ///
    /// This typically indicates malformed internal state, such as a
    /// transaction whose message exceeds representable bounds.
    #[error("transaction serialization failed: {0}")]
    Serialization(#[source] bincode::Error),

    /// Packet bytes could not be decoded into a transaction
    ///
    /// This indicates truncated, malformed, or layout-violating bytes in
    /// `Packet::data`.
    #[error("packet deserialization failed: {0}")]
    Deserialization(#[source] bincode::Error),
}

impl ConvertError {
    /// Get the error category for log fields and metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Serialization(_) => "serialize",
            Self::Deserialization(_) => "deserialize",
        }
    }
}
