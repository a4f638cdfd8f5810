//! NMEA 2000 network group functions and device information

use crate::lookup::*;
use crate::pgn::builder::*;
use crate::pgn::{Transport, INTERVAL_NEVER};

const PROPRIETARY_DESCRIPTION: &str = "Only in PGN when Commanded PGN is proprietary";

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "NMEA - Request group function",
        126208,
        Transport::Fast,
        &[
            match_lookup("Function Code", 8, 0, &GROUP_FUNCTION).desc("Request"),
            pgn_field("PGN").desc("Requested PGN"),
            typed("Transmission interval", "TIME_UFIX32_MS"),
            typed("Transmission interval offset", "TIME_UFIX16_CS"),
            uint8("Number of Parameters").desc("How many parameter pairs will follow"),
            field_index("Parameter").desc("Parameter index"),
            variable("Value").desc("Parameter value"),
        ],
    )
    .priority(3)
    .interval(INTERVAL_NEVER)
    .repeating(5, 2, 6)
    .explanation(
        "This is the Request variation of this group function PGN. The receiver shall respond by sending the requested \
         PGN, at the desired transmission interval.",
    ),
    PgnSpec::new(
        "NMEA - Command group function",
        126208,
        Transport::Fast,
        &[
            match_lookup("Function Code", 8, 1, &GROUP_FUNCTION).desc("Command"),
            pgn_field("PGN").desc("Commanded PGN"),
            lookup("Priority", 4, &PRIORITY).desc("Priority of the commanded PGN (0x8 = leave priority unchanged)"),
            reserved(4),
            uint8("Number of Parameters").desc("How many parameter pairs will follow"),
            field_index("Parameter").desc("Parameter index"),
            variable("Value").desc("Parameter value"),
        ],
    )
    .priority(3)
    .interval(INTERVAL_NEVER)
    .repeating(5, 2, 6)
    .explanation(
        "This is the Command variation of this group function PGN. This instructs the receiver to modify its internal \
         state for the passed arguments. The receiver shall reply with an Acknowledge reply.",
    ),
    PgnSpec::new(
        "NMEA - Acknowledge group function",
        126208,
        Transport::Fast,
        &[
            match_lookup("Function Code", 8, 2, &GROUP_FUNCTION).desc("Acknowledge"),
            pgn_field("PGN").desc("Commanded PGN"),
            lookup("PGN error code", 4, &PGN_ERROR_CODE),
            lookup("Transmission interval/Priority error code", 4, &TRANSMISSION_INTERVAL),
            uint8("Number of Parameters"),
            lookup("Parameter", 4, &PARAMETER_FIELD),
        ],
    )
    .priority(3)
    .interval(INTERVAL_NEVER)
    .repeating(5, 1, 6)
    .explanation(
        "This is the Acknowledge variation of this group function PGN. When a device receives a Command it will result \
         in one of these replies, with an error code per parameter.",
    ),
    PgnSpec::new(
        "NMEA - Read Fields group function",
        126208,
        Transport::Fast,
        &[
            match_lookup("Function Code", 8, 3, &GROUP_FUNCTION).desc("Read Fields"),
            pgn_field("PGN").desc("Commanded PGN"),
            manufacturer().proprietary().desc(PROPRIETARY_DESCRIPTION),
            reserved(2).proprietary().desc(PROPRIETARY_DESCRIPTION),
            industry().proprietary().desc(PROPRIETARY_DESCRIPTION),
            uint8("Unique ID"),
            uint8("Number of Selection Pairs"),
            uint8("Number of Parameters"),
            field_index("Selection Parameter"),
            variable("Selection Value"),
            field_index("Parameter"),
        ],
    )
    .priority(3)
    .interval(INTERVAL_NEVER)
    .repeating(7, 2, 9)
    .repeating(8, 1, 11)
    .explanation(
        "This is the Read Fields variation of this group function PGN. The receiver shall respond by sending a Read \
         Reply variation of this PGN, containing the desired values.",
    ),
    PgnSpec::new(
        "PGN List (Transmit and Receive)",
        126464,
        Transport::Fast,
        &[
            lookup("Function Code", 8, &PGN_LIST_FUNCTION),
            pgn_field("PGN"),
        ],
    )
    .priority(3)
    .interval(INTERVAL_NEVER)
    .repeating_to_end(1, 2),
    PgnSpec::new(
        "System Time",
        126992,
        Transport::Single,
        &[
            sid(),
            lookup("Source", 4, &SYSTEM_TIME),
            reserved(4),
            date("Date"),
            time("Time"),
        ],
    )
    .priority(3)
    .interval(1000)
    .explanation(
        "The purpose of this PGN is twofold: to provide a regular transmission of UTC time and date, and to provide \
         synchronism for measurement data.",
    ),
    PgnSpec::new(
        "Heartbeat",
        126993,
        Transport::Single,
        &[
            typed("Data transmit offset", "TIME_UFIX16_MS")
                .desc("Offset in transmit time from time of request command: 0x0 = transmit immediately, 0xFFFF = Do not change offset."),
            uint8("Sequence Counter"),
            lookup("Controller 1 State", 2, &CONTROLLER_STATE),
            lookup("Controller 2 State", 2, &CONTROLLER_STATE),
            lookup("Equipment Status", 2, &EQUIPMENT_STATUS),
            reserved(34),
        ],
    )
    .priority(7)
    .interval(60000)
    .explanation("Reception of this PGN confirms that a device is still present on the network."),
    PgnSpec::new(
        "Product Information",
        126996,
        Transport::Fast,
        &[
            typed("NMEA 2000 Version", "VERSION"),
            uint16("Product Code"),
            string_fix("Model ID", 32),
            string_fix("Software Version Code", 32),
            string_fix("Model Version", 32),
            string_fix("Model Serial Code", 32),
            lookup("Certification Level", 8, &CERTIFICATION_LEVEL),
            uint8("Load Equivalency"),
        ],
    )
    .priority(6)
    .interval(INTERVAL_NEVER)
    .explanation(
        "Provides product information onto the network that could be important for determining quality of data \
         coming from this product.",
    ),
    PgnSpec::new(
        "Configuration Information",
        126998,
        Transport::Fast,
        &[
            string_lau("Installation Description #1"),
            string_lau("Installation Description #2"),
            string_lau("Manufacturer Information"),
        ],
    )
    .priority(6)
    .interval(INTERVAL_NEVER)
    .explanation("Free-form alphanumeric fields describing the installation (e.g., starboard engine room location) of the device and installation notes."),
];
