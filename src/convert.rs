//! Conversion between Solana transactions and relayer wire packets
//!
//! Every operation here is a single-shot pure transform: serialize a
//! transaction into a [`Packet`], decode a packet back, or render a batch as
//! base58/base64 text. Batch variants are sequential, order-preserving, and
//! fail fast - the first element error aborts the batch and no partial result
//! is returned.
//!
//! The transaction wire encoding is the SDK's `bincode` layout; this module
//! treats transactions as opaque beyond serialize/deserialize.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use solana_sdk::transaction::VersionedTransaction;

use crate::errors::ConvertError;
use crate::proto::{Meta, Packet};

/// Convert a transaction to a wire packet.
///
/// The serialized bytes land in `Packet::data` and `meta.size` records their
/// length. The remaining metadata fields belong to the transport layer and
/// stay at proto defaults (`addr: ""`, `port: 0`, `flags: None`,
/// `sender_stake: 0`).
pub fn transaction_to_packet(transaction: &VersionedTransaction) -> Result<Packet, ConvertError> {
    let data = bincode::serialize(transaction).map_err(ConvertError::Serialization)?;
    let size = data.len() as u64;

    Ok(Packet {
        data,
        meta: Some(Meta {
            size,
            addr: String::new(),
            port: 0,
            flags: None,
            sender_stake: 0,
        }),
    })
}

/// Convert an ordered batch of transactions to packets.
///
/// Fail-fast: the first serialization error aborts the batch and no partial
/// result is returned.
pub fn transactions_to_packets(
    transactions: &[VersionedTransaction],
) -> Result<Vec<Packet>, ConvertError> {
    tracing::trace!(
        count = transactions.len(),
        "converting transaction batch to packets"
    );

    let mut packets = Vec::with_capacity(transactions.len());
    for transaction in transactions {
        packets.push(transaction_to_packet(transaction)?);
    }

    Ok(packets)
}

/// Decode a wire packet back into a transaction.
///
/// Only `Packet::data` is consulted; transport metadata is ignored.
pub fn packet_to_transaction(packet: &Packet) -> Result<VersionedTransaction, ConvertError> {
    bincode::deserialize(&packet.data).map_err(ConvertError::Deserialization)
}

/// Decode an ordered batch of packets to transactions.
///
/// Fail-fast: the first deserialization error aborts the batch and no partial
/// result is returned.
pub fn packets_to_transactions(
    packets: &[Packet],
) -> Result<Vec<VersionedTransaction>, ConvertError> {
    tracing::trace!(
        count = packets.len(),
        "converting packet batch to transactions"
    );

    let mut transactions = Vec::with_capacity(packets.len());
    for packet in packets {
        transactions.push(packet_to_transaction(packet)?);
    }

    Ok(transactions)
}

/// Encode each transaction's wire bytes as base58 text (Bitcoin alphabet).
///
/// Order-preserving and fail-fast on the first serialization error.
pub fn transactions_to_base58(
    transactions: &[VersionedTransaction],
) -> Result<Vec<String>, ConvertError> {
    tracing::trace!(
        count = transactions.len(),
        "encoding transaction batch as base58"
    );

    let mut encoded = Vec::with_capacity(transactions.len());
    for transaction in transactions {
        let bytes = bincode::serialize(transaction).map_err(ConvertError::Serialization)?;
        encoded.push(bs58::encode(bytes).into_string());
    }

    Ok(encoded)
}

/// Encode each transaction's wire bytes as standard padded base64 text.
///
/// Order-preserving and fail-fast on the first serialization error.
pub fn transactions_to_base64(
    transactions: &[VersionedTransaction],
) -> Result<Vec<String>, ConvertError> {
    tracing::trace!(
        count = transactions.len(),
        "encoding transaction batch as base64"
    );

    let mut encoded = Vec::with_capacity(transactions.len());
    for transaction in transactions {
        let bytes = bincode::serialize(transaction).map_err(ConvertError::Serialization)?;
        encoded.push(BASE64_STANDARD.encode(bytes));
    }

    Ok(encoded)
}

/// Render each transaction through its debug representation.
///
/// Infallible: one entry per input, in input order.
pub fn transactions_to_strings(transactions: &[VersionedTransaction]) -> Vec<String> {
    tracing::trace!(
        count = transactions.len(),
        "rendering transaction batch as strings"
    );

    transactions
        .iter()
        .map(|transaction| format!("{:?}", transaction))
        .collect()
}
