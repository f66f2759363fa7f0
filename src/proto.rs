//! Protobuf packet schema shared with the relayer
//!
//! Hand-rolled `prost` messages mirroring the relayer's `packet.proto`. The
//! schema is owned by the relayer side; this crate only produces and consumes
//! it, so field tags and scalar types must stay in sync with the upstream
//! definition.

/// Wire envelope carrying one serialized transaction.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Packet {
    /// Serialized transaction bytes.
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
    /// Transport metadata for this packet.
    #[prost(message, optional, tag = "2")]
    pub meta: Option<Meta>,
}

/// Transport metadata attached to a packet.
///
/// Only `size` is populated by this crate; the remaining fields are owned by
/// the transport layer and stay at proto defaults.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Meta {
    /// Length of `Packet::data` in bytes.
    #[prost(uint64, tag = "1")]
    pub size: u64,
    /// Source address, empty when unknown.
    #[prost(string, tag = "2")]
    pub addr: String,
    /// Source port, zero when unknown.
    #[prost(uint32, tag = "3")]
    pub port: u32,
    /// Per-packet flag bits, absent when unset.
    #[prost(message, optional, tag = "4")]
    pub flags: Option<PacketFlags>,
    /// Stake of the sending node in lamports.
    #[prost(uint64, tag = "5")]
    pub sender_stake: u64,
}

/// Per-packet flag bits.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PacketFlags {
    #[prost(bool, tag = "1")]
    pub discard: bool,
    #[prost(bool, tag = "2")]
    pub forwarded: bool,
    #[prost(bool, tag = "3")]
    pub repair: bool,
    #[prost(bool, tag = "4")]
    pub simple_vote_tx: bool,
    #[prost(bool, tag = "5")]
    pub tracer_packet: bool,
    #[prost(bool, tag = "6")]
    pub from_staked_node: bool,
}
