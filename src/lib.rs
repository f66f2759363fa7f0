//! Conversion layer between Solana transactions and relayer wire packets
//!
//! This crate is a small, stateless adapter: it serializes
//! `VersionedTransaction` values into the relayer's protobuf `Packet`
//! envelope, decodes packets back into transactions, and renders transaction
//! batches as base58/base64 text.
//!
//! ## Modules
//!
//! - **proto**: hand-rolled `prost` messages mirroring the relayer's packet
//!   schema
//! - **errors**: the two-kind error taxonomy for conversion failures
//! - **convert**: the conversion operations, single and batched
//!
//! Batch operations preserve input order and fail fast: the first element
//! error aborts the batch and no partial result is returned.

pub mod convert;
pub mod errors;
pub mod proto;

pub use convert::{
    packet_to_transaction, packets_to_transactions, transaction_to_packet,
    transactions_to_base58, transactions_to_base64, transactions_to_packets,
    transactions_to_strings,
};
pub use errors::ConvertError;
pub use proto::{Meta, Packet, PacketFlags};

// Re-export commonly used types
pub use solana_sdk::transaction::VersionedTransaction;
