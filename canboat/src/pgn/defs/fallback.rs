//! Catch-all entries for PRNs without a definition of their own

use crate::pgn::builder::*;
use crate::pgn::{Transport, INCOMPLETE};

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "0xE800-0xEEFF: Standardized single-frame addressed",
        0xe800,
        Transport::Single,
        &[binary("Data", 64)],
    )
    .complete(INCOMPLETE)
    .fallback()
    .explanation("Standardized PGNs in PDU1 (addressed) format. Unknown PGNs in this range are decoded as raw data."),
    PgnSpec::new(
        "0xEF00: Manufacturer Proprietary single-frame addressed",
        0xef00,
        Transport::Single,
        &[manufacturer(), reserved(2), industry(), binary("Data", 48)],
    )
    .complete(INCOMPLETE)
    .fallback()
    .explanation("Manufacturer proprietary PGNs in PDU1 (addressed) single-frame format."),
    PgnSpec::new(
        "0xF000-0xFEFF: Standardized single-frame non-addressed",
        0xf000,
        Transport::Single,
        &[manufacturer(), reserved(2), industry(), binary("Data", 48)],
    )
    .complete(INCOMPLETE)
    .fallback()
    .explanation("Standardized PGNs in PDU2 (non-addressed) single-frame format."),
    PgnSpec::new(
        "0xFF00-0xFFFF: Manufacturer Proprietary single-frame non-addressed",
        0xff00,
        Transport::Single,
        &[manufacturer(), reserved(2), industry(), binary("Data", 48)],
    )
    .complete(INCOMPLETE)
    .fallback()
    .explanation("Manufacturer proprietary PGNs in PDU2 (non-addressed) single-frame format."),
    PgnSpec::new(
        "0x1ED00 - 0x1EE00: Standardized fast-packet addressed",
        0x1ed00,
        Transport::Fast,
        &[binary_rest("Data")],
    )
    .complete(INCOMPLETE)
    .fallback()
    .explanation("Standardized PGNs in PDU1 (addressed) fast-packet format."),
    PgnSpec::new(
        "0x1EF00-0x1EFFF: Manufacturer Proprietary fast-packet addressed",
        0x1ef00,
        Transport::Fast,
        &[manufacturer(), reserved(2), industry(), binary_rest("Data")],
    )
    .complete(INCOMPLETE)
    .fallback()
    .explanation("Manufacturer proprietary PGNs in PDU1 (addressed) fast-packet format."),
    PgnSpec::new(
        "0x1F000-0x1FEFF: Standardized mixed single/fast packet non-addressed",
        0x1f000,
        Transport::Mixed,
        &[manufacturer(), reserved(2), industry(), binary_rest("Data")],
    )
    .complete(INCOMPLETE)
    .fallback()
    .explanation("Standardized PGNs in PDU2 (non-addressed) format, sent as single frame or fast-packet."),
    PgnSpec::new(
        "0x1FF00-0x1FFFF: Manufacturer Specific fast-packet non-addressed",
        0x1ff00,
        Transport::Fast,
        &[manufacturer(), reserved(2), industry(), binary_rest("Data")],
    )
    .complete(INCOMPLETE)
    .fallback()
    .explanation("Manufacturer proprietary PGNs in PDU2 (non-addressed) fast-packet format."),
];
