//! ISO 11783 network management and transport protocol

use crate::lookup::*;
use crate::pgn::builder::*;
use crate::pgn::{Transport, INTERVAL_NEVER};

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "ISO Acknowledgement",
        59392,
        Transport::Single,
        &[
            lookup("Control", 8, &ISO_CONTROL),
            uint8("Group Function"),
            reserved(24),
            pgn_field("PGN"),
        ],
    )
    .priority(6)
    .interval(INTERVAL_NEVER)
    .explanation("This message is provided by ISO 11783 for a handshake mechanism between transmitting and receiving devices."),
    PgnSpec::new("ISO Request", 59904, Transport::Single, &[pgn_field("PGN")])
        .priority(6)
        .interval(INTERVAL_NEVER)
        .explanation("As defined by ISO, this message has a data length of 3 bytes with no padding added to complete the single frame."),
    PgnSpec::new(
        "ISO Transport Protocol, Data Transfer",
        60160,
        Transport::Single,
        &[uint8("SID"), binary("Data", 56)],
    )
    .priority(7)
    .interval(INTERVAL_NEVER)
    .url("https://embeddedflakes.com/j1939-transport-protocol/")
    .explanation(
        "ISO 11783 defines this PGN as part of the Transport Protocol method used for transmitting messages that have 9 or \
         more data bytes. This PGN represents a single packet of a multipacket message.",
    ),
    PgnSpec::new(
        "ISO Transport Protocol, Connection Management - Request To Send",
        60416,
        Transport::Single,
        &[
            match_lookup("Group Function Code", 8, 16, &ISO_COMMAND).desc("RTS"),
            uint16("Message size").unit("bytes"),
            uint8("Packets").desc("Amount of 7 byte packets in message"),
            uint8("Packets reply").desc("Max packets per CTS"),
            pgn_field("PGN"),
        ],
    )
    .priority(7)
    .interval(INTERVAL_NEVER)
    .explanation("Opens a connection mode session with a single destination for a message of more than 8 bytes."),
    PgnSpec::new(
        "ISO Transport Protocol, Connection Management - Clear To Send",
        60416,
        Transport::Single,
        &[
            match_lookup("Group Function Code", 8, 17, &ISO_COMMAND).desc("CTS"),
            uint8("Max packets").desc("Number of frames that can be sent before another CTS (0x02)"),
            uint8("Next SID").desc("Sequence number of the next frame to send"),
            reserved(16),
            pgn_field("PGN"),
        ],
    )
    .priority(7)
    .interval(INTERVAL_NEVER),
    PgnSpec::new(
        "ISO Transport Protocol, Connection Management - End Of Message",
        60416,
        Transport::Single,
        &[
            match_lookup("Group Function Code", 8, 19, &ISO_COMMAND).desc("EOM"),
            uint16("Total message size").unit("bytes"),
            uint8("Total number of frames received"),
            reserved(8),
            pgn_field("PGN"),
        ],
    )
    .priority(7)
    .interval(INTERVAL_NEVER),
    PgnSpec::new(
        "ISO Transport Protocol, Connection Management - Broadcast Announce",
        60416,
        Transport::Single,
        &[
            match_lookup("Group Function Code", 8, 32, &ISO_COMMAND).desc("BAM"),
            uint16("Message size").unit("bytes"),
            uint8("Packets").desc("Frames in message"),
            reserved(8),
            pgn_field("PGN"),
        ],
    )
    .priority(7)
    .interval(INTERVAL_NEVER)
    .explanation("Announces a broadcast multipacket message; the data follows on PGN 60160 without flow control."),
    PgnSpec::new(
        "ISO Transport Protocol, Connection Management - Abort",
        60416,
        Transport::Single,
        &[
            match_lookup("Group Function Code", 8, 255, &ISO_COMMAND).desc("Abort"),
            uint8("Reason"),
            reserved(24),
            pgn_field("PGN"),
        ],
    )
    .priority(7)
    .interval(INTERVAL_NEVER),
    PgnSpec::new(
        "ISO Address Claim",
        60928,
        Transport::Single,
        &[
            simple("Unique Number", 21).desc("ISO Identity Number"),
            manufacturer(),
            simple("Device Instance Lower", 3).desc("ISO ECU Instance"),
            simple("Device Instance Upper", 5).desc("ISO Function Instance"),
            triplet("Device Function", 8, &DEVICE_FUNCTION, 7).desc("ISO Function"),
            spare(1),
            lookup("Device Class", 7, &DEVICE_CLASS),
            simple("System Instance", 4).desc("ISO Device Class Instance"),
            lookup("Industry Group", 3, &INDUSTRY_CODE),
            simple("Arbitrary address capable", 1)
                .desc("Field indicates whether the device is capable of claiming another source address."),
        ],
    )
    .priority(6)
    .interval(INTERVAL_NEVER)
    .explanation(
        "This network management message is used to claim network address, reply to devices requesting the claimed \
         address, and to respond with device information (NAME) requested by the ISO Request or Complex Request Group \
         Function.",
    ),
    PgnSpec::new(
        "ISO Commanded Address",
        65240,
        Transport::IsoTp,
        &[
            simple("Unique Number", 21).desc("ISO Identity Number"),
            manufacturer(),
            simple("Device Instance Lower", 3).desc("ISO ECU Instance"),
            simple("Device Instance Upper", 5).desc("ISO Function Instance"),
            triplet("Device Function", 8, &DEVICE_FUNCTION, 7).desc("ISO Function"),
            reserved(1),
            lookup("Device Class", 7, &DEVICE_CLASS),
            simple("System Instance", 4).desc("ISO Device Class Instance"),
            lookup("Industry Code", 3, &INDUSTRY_CODE),
            reserved(1),
            uint8("New Source Address"),
        ],
    )
    .interval(INTERVAL_NEVER)
    .explanation(
        "This message is sent to a device to command it to use a new source address. It is 9 bytes long and therefore \
         travels with the ISO transport protocol.",
    ),
];
