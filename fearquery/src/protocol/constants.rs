//! Shared wire-level constants for the query protocol.
//!
//! These values mirror the behaviour of the original GameSpy-derived
//! implementation and should be treated as part of the wire-level contract.
//! The request payloads are fixed byte sequences; nothing is computed at
//! build time.

// === Framing ===

/// Magic prefix identifying the query protocol family.
pub const QUERY_MAGIC: [u8; 2] = [0xFE, 0xFD];

/// Type byte identifying a status query.
pub const QUERY_TYPE: u8 = 0x00;

// === Request payloads ===

/// Details ("full status") request: magic, type byte, four-byte session
/// token, two challenge placeholder bytes.
pub const DETAILS_REQUEST: [u8; 10] = [
    0xFE, 0xFD, 0x00, 0x43, 0x4F, 0x52, 0x59, 0xFF, 0x00, 0x00,
];

/// Player-list request: same structure as [`DETAILS_REQUEST`] with a
/// different session token and trailing bytes.
pub const PLAYERS_REQUEST: [u8; 10] = [
    0xFE, 0xFD, 0x00, 0x43, 0x4F, 0x52, 0x58, 0x00, 0xFF, 0xFF,
];

// === Reply preambles ===

/// Opening bytes of a details reply: type byte plus the ASCII token `CORY`.
pub const DETAILS_PREAMBLE: [u8; 5] = [0x00, 0x43, 0x4F, 0x52, 0x59];

/// Opening bytes of a player-list reply: type byte plus the ASCII token `CORX`.
pub const PLAYERS_PREAMBLE: [u8; 5] = [0x00, 0x43, 0x4F, 0x52, 0x58];

// === Buffers ===

/// Receive buffer size. Replies fit a single datagram; no fragment handling.
pub const MAX_DATAGRAM_SIZE: usize = 4096;

const _: () = {
    assert!(
        DETAILS_REQUEST[0] == QUERY_MAGIC[0] && DETAILS_REQUEST[1] == QUERY_MAGIC[1],
        "details request must start with the query magic"
    );
    assert!(
        PLAYERS_REQUEST[0] == QUERY_MAGIC[0] && PLAYERS_REQUEST[1] == QUERY_MAGIC[1],
        "players request must start with the query magic"
    );
    assert!(DETAILS_REQUEST[2] == QUERY_TYPE && PLAYERS_REQUEST[2] == QUERY_TYPE);
};
