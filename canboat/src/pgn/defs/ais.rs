//! AIS position reports and static data

use crate::lookup::*;
use crate::pgn::builder::*;
use crate::pgn::Transport;

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "AIS Class A Position Report",
        129038,
        Transport::Fast,
        &[
            lookup("Message ID", 6, &AIS_MESSAGE_ID),
            lookup("Repeat Indicator", 2, &REPEAT_INDICATOR),
            mmsi("User ID"),
            longitude_i32("Longitude"),
            latitude_i32("Latitude"),
            lookup("Position Accuracy", 1, &POSITION_ACCURACY),
            lookup("RAIM", 1, &RAIM_FLAG),
            lookup("Time Stamp", 6, &TIME_STAMP).desc("0-59 = UTC second when the report was generated"),
            angle_u16("COG"),
            typed("SOG", "SPEED_UFIX16_CM"),
            binary("Communication State", 19)
                .desc("Information used by the TDMA slot allocation algorithm and synchronization information"),
            lookup("AIS Transceiver information", 5, &AIS_TRANSCEIVER),
            angle_u16("Heading").desc("True heading"),
            typed("Rate of Turn", "ROTATION_FIX16"),
            lookup("Nav Status", 4, &NAV_STATUS),
            lookup("Special Maneuver Indicator", 2, &AIS_SPECIAL_MANEUVER),
            reserved(2),
            spare(3),
            reserved(5),
            uint8("Sequence ID"),
        ],
    )
    .priority(4),
    PgnSpec::new(
        "AIS Class B Position Report",
        129039,
        Transport::Fast,
        &[
            lookup("Message ID", 6, &AIS_MESSAGE_ID),
            lookup("Repeat Indicator", 2, &REPEAT_INDICATOR),
            mmsi("User ID"),
            longitude_i32("Longitude"),
            latitude_i32("Latitude"),
            lookup("Position Accuracy", 1, &POSITION_ACCURACY),
            lookup("RAIM", 1, &RAIM_FLAG),
            lookup("Time Stamp", 6, &TIME_STAMP),
            angle_u16("COG"),
            typed("SOG", "SPEED_UFIX16_CM"),
            binary("Communication State", 19),
            lookup("AIS Transceiver information", 5, &AIS_TRANSCEIVER),
            angle_u16("Heading").desc("True heading"),
            reserved(8).desc("Regional Application"),
            simple("Regional Application B", 2),
            lookup("Unit type", 1, &AIS_TYPE),
            lookup("Integrated Display", 1, &YES_NO).desc("Whether the unit can show messages 12 and 14"),
            lookup("DSC", 1, &YES_NO),
            lookup("Band", 1, &AIS_BAND),
            lookup("Can handle Msg 22", 1, &YES_NO).desc("Whether device supports message 22"),
            lookup("AIS mode", 1, &AIS_MODE),
            lookup("AIS communication state", 1, &AIS_COMMUNICATION_STATE),
            reserved(15),
        ],
    )
    .priority(4),
    PgnSpec::new(
        "AIS Class A Static and Voyage Related Data",
        129794,
        Transport::Fast,
        &[
            lookup("Message ID", 6, &AIS_MESSAGE_ID),
            lookup("Repeat Indicator", 2, &REPEAT_INDICATOR),
            mmsi("User ID"),
            uint32("IMO number"),
            string_fix("Callsign", 7),
            string_fix("Name", 20),
            lookup("Type of ship", 8, &SHIP_TYPE),
            typed("Length", "LENGTH_UFIX16_DM"),
            typed("Beam", "LENGTH_UFIX16_DM"),
            typed("Position reference from Starboard", "LENGTH_UFIX16_DM"),
            typed("Position reference from Bow", "LENGTH_UFIX16_DM"),
            date("ETA Date"),
            time("ETA Time"),
            typed("Draft", "LENGTH_UFIX16_CM"),
            string_fix("Destination", 20),
            lookup("AIS version indicator", 2, &AIS_VERSION),
            lookup("GNSS type", 4, &POSITION_FIX_DEVICE),
            lookup("DTE", 1, &AVAILABLE),
            reserved(1),
            lookup("AIS Transceiver information", 5, &AIS_TRANSCEIVER),
            reserved(3),
        ],
    )
    .priority(6)
    .explanation("This PGN contains the information of AIS message 5."),
    PgnSpec::new(
        "AIS Class B static data (msg 24 Part A)",
        129809,
        Transport::Fast,
        &[
            lookup("Message ID", 6, &AIS_MESSAGE_ID),
            lookup("Repeat Indicator", 2, &REPEAT_INDICATOR),
            mmsi("User ID"),
            string_fix("Name", 20),
            lookup("AIS Transceiver information", 5, &AIS_TRANSCEIVER),
            reserved(3),
            uint8("Sequence ID"),
        ],
    )
    .priority(6),
    PgnSpec::new(
        "AIS Class B static data (msg 24 Part B)",
        129810,
        Transport::Fast,
        &[
            lookup("Message ID", 6, &AIS_MESSAGE_ID),
            lookup("Repeat Indicator", 2, &REPEAT_INDICATOR),
            mmsi("User ID"),
            lookup("Type of ship", 8, &SHIP_TYPE),
            string_fix("Vendor ID", 7),
            string_fix("Callsign", 7),
            typed("Length", "LENGTH_UFIX16_DM"),
            typed("Beam", "LENGTH_UFIX16_DM"),
            typed("Position reference from Starboard", "LENGTH_UFIX16_DM"),
            typed("Position reference from Bow", "LENGTH_UFIX16_DM"),
            mmsi("Mothership User ID"),
            reserved(2),
            spare(6),
            lookup("AIS Transceiver information", 5, &AIS_TRANSCEIVER),
            reserved(3),
            uint8("Sequence ID"),
        ],
    )
    .priority(6),
    PgnSpec::new(
        "AIS Class B Extended Position Report",
        129040,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            mmsi("User ID"),
            latitude_i32("Longitude"),
            longitude_i32("Latitude"),
            lookup("Position Accuracy", 1, &POSITION_ACCURACY),
            lookup("AIS RAIM flag", 1, &RAIM_FLAG),
            lookup("Time Stamp", 6, &TIME_STAMP).desc("0-59 = UTC second when the report was generated"),
            typed("COG", "ANGLE_UFIX16"),
            typed("SOG", "SPEED_UFIX16_CM"),
            simple("Regional Application", 8),
            simple("Regional Application", 4),
            reserved(4),
            simple("Type of ship", 8),
            typed("True Heading", "ANGLE_UFIX16"),
            reserved(4),
            lookup("GNSS type", 4, &POSITION_FIX_DEVICE),
            typed("Length", "LENGTH_UFIX16_DM"),
            typed("Beam", "LENGTH_UFIX16_DM"),
            typed("Position reference from Starboard", "LENGTH_UFIX16_DM"),
            typed("Position reference from Bow", "LENGTH_UFIX16_DM"),
            string_fix("Name", 20).desc("0=unavailable"),
            lookup("DTE", 1, &AVAILABLE),
            lookup("AIS mode", 1, &AIS_MODE),
            reserved(4),
            simple("AIS Transceiver information", 5),
        ],
    ),
    PgnSpec::new(
        "AIS DGNSS Broadcast Binary Message",
        129792,
        Transport::Fast,
        &[
            simple("Message ID", 8),
            simple("Repeat Indicator", 8),
            simple("Source ID", 8),
            simple("NMEA 2000 Reserved", 8),
            simple("AIS Tranceiver Information", 8),
            simple("Spare", 8),
            simple("Longitude", 8),
            simple("Latitude", 8),
            simple("NMEA 2000 Reserved", 8),
            simple("Spare", 8),
            simple("Number of Bits in Binary Data Field", 8),
            binary("Binary Data", 64),
        ],
    ),
    PgnSpec::new(
        "AIS UTC and Date Report",
        129793,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            mmsi("User ID"),
            longitude_i32("Longitude"),
            latitude_i32("Latitude"),
            lookup("Position Accuracy", 1, &POSITION_ACCURACY),
            lookup("RAIM", 1, &RAIM_FLAG),
            reserved(6),
            time("Position Time").desc("Seconds since midnight"),
            binary("Communication State", 19).desc("Information used by the TDMA slot allocation algorithm and synchronization information"),
            simple("AIS Transceiver information", 5),
            date("Position Date").desc("Days since January 1, 1970"),
            reserved(4),
            lookup("GNSS type", 4, &POSITION_FIX_DEVICE),
            binary("Spare", 8),
        ],
    ),
    PgnSpec::new(
        "AIS Addressed Binary Message",
        129795,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            mmsi("Source ID"),
            reserved(1),
            simple("AIS Transceiver information", 5),
            simple("Sequence Number", 2),
            mmsi("Destination ID"),
            reserved(6),
            simple("Retransmit flag", 1),
            reserved(1),
            simple("Number of Bits in Binary Data Field", 16),
            binary("Binary Data", 64),
        ],
    ),
    PgnSpec::new(
        "AIS Acknowledge",
        129796,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            mmsi("Source ID"),
            reserved(1),
            simple("AIS Transceiver information", 5),
            reserved(2),
            simple("Destination ID #1", 32),
            binary("Sequence Number for ID 1", 2).desc("reserved"),
            reserved(6),
            binary("Sequence Number for ID n", 2).desc("reserved"),
        ],
    ),
    PgnSpec::new(
        "AIS Binary Broadcast Message",
        129797,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            simple("Source ID", 32),
            reserved(1),
            simple("AIS Transceiver information", 5),
            reserved(2),
            simple("Number of Bits in Binary Data Field", 16),
            binary_rest("Binary Data"),
        ],
    ),
    PgnSpec::new(
        "AIS SAR Aircraft Position Report",
        129798,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat indicator", 2),
            mmsi("User ID"),
            longitude_i32("Longitude"),
            latitude_i32("Latitude"),
            lookup("Position Accuracy", 1, &POSITION_ACCURACY),
            lookup("RAIM", 1, &RAIM_FLAG),
            lookup("Time Stamp", 6, &TIME_STAMP).desc("0-59 = UTC second when the report was generated"),
            typed("COG", "ANGLE_UFIX16"),
            typed("SOG", "SPEED_UFIX16_DM"),
            binary("Communication State", 19).desc("Information used by the TDMA slot allocation algorithm and synchronization information"),
            simple("AIS Transceiver information", 5),
            typed("Altitude", "DISTANCE_FIX64"),
            simple("Reserved for Regional Applications", 8),
            lookup("DTE", 1, &AVAILABLE),
            reserved(7),
        ],
    ),
    PgnSpec::new(
        "Radio Frequency/Mode/Power",
        129799,
        Transport::Fast,
        &[
            typed("Rx Frequency", "RADIO_FREQUENCY_UFIX32"),
            typed("Tx Frequency", "RADIO_FREQUENCY_UFIX32"),
            simple("Radio Channel", 8),
            simple("Tx Power", 8),
            simple("Mode", 8),
            simple("Channel Bandwidth", 8),
        ],
    ),
    PgnSpec::new(
        "AIS UTC/Date Inquiry",
        129800,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            simple("Source ID", 30),
            reserved(2),
            simple("AIS Transceiver information", 5),
            reserved(3),
            simple("Destination ID", 30),
            reserved(2),
        ],
    ),
    PgnSpec::new(
        "AIS Addressed Safety Related Message",
        129801,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            mmsi("Source ID"),
            reserved(1),
            simple("AIS Transceiver information", 5),
            simple("Sequence Number", 2),
            mmsi("Destination ID"),
            reserved(6),
            simple("Retransmit flag", 1),
            reserved(1),
            string_fix("Safety Related Text", 212),
        ],
    ),
    PgnSpec::new(
        "AIS Safety Related Broadcast Message",
        129802,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            simple("Source ID", 30),
            reserved(2),
            simple("AIS Transceiver information", 5),
            reserved(3),
            string_fix("Safety Related Text", 36),
        ],
    ),
    PgnSpec::new(
        "AIS Interrogation",
        129803,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            simple("Source ID", 30),
            reserved(2),
            simple("AIS Transceiver information", 5),
            reserved(3),
            simple("Destination ID", 30),
            reserved(2),
            simple("Message ID A", 8),
            simple("Slot Offset A", 14),
            reserved(2),
            simple("Message ID B", 8),
            simple("Slot Offset B", 14),
            reserved(2),
        ],
    )
    .repeating_to_end(8, 7),
    PgnSpec::new(
        "AIS Assignment Mode Command",
        129804,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            mmsi("Source ID"),
            reserved(1),
            simple("AIS Transceiver information", 5),
            reserved(2),
            mmsi("Destination ID"),
            simple("Offset", 16),
            simple("Increment", 16),
        ],
    )
    .repeating_to_end(3, 7),
    PgnSpec::new(
        "AIS Data Link Management Message",
        129805,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            simple("Source ID", 30),
            reserved(2),
            simple("AIS Transceiver information", 5),
            reserved(3),
            simple("Offset", 10),
            simple("Number of Slots", 8),
            simple("Timeout", 8),
            simple("Increment", 8),
        ],
    )
    .repeating_to_end(4, 7),
    PgnSpec::new(
        "AIS Channel Management",
        129806,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            simple("Source ID", 30),
            reserved(2),
            simple("AIS Transceiver information", 5),
            reserved(3),
            simple("Channel A", 7),
            simple("Channel B", 7),
            reserved(2),
            simple("Power", 8).desc("reserved"),
            simple("Tx/Rx Mode", 8),
            longitude_i32("North East Longitude Corner 1"),
            latitude_i32("North East Latitude Corner 1"),
            longitude_i32("South West Longitude Corner 1"),
            latitude_i32("South West Latitude Corner 2"),
            reserved(6),
            simple("Addressed or Broadcast Message Indicator", 2),
            simple("Channel A Bandwidth", 7),
            simple("Channel B Bandwidth", 7),
            reserved(2),
            simple("Transitional Zone Size", 8),
        ],
    ),
    PgnSpec::new(
        "AIS Class B Group Assignment",
        129807,
        Transport::Fast,
        &[
            simple("Message ID", 6),
            simple("Repeat Indicator", 2),
            simple("Source ID", 30),
            reserved(2),
            simple("Tx/Rx Mode", 2),
            reserved(6),
            longitude_i32("North East Longitude Corner 1"),
            latitude_i32("North East Latitude Corner 1"),
            longitude_i32("South West Longitude Corner 1"),
            latitude_i32("South West Latitude Corner 2"),
            simple("Station Type", 8),
            reserved(2),
            simple("Ship and Cargo Filter", 6),
            reserved(2),
            simple("Reporting Interval", 16),
            simple("Quiet Time", 16),
        ],
    ),
    PgnSpec::new(
        "DSC Call Information",
        129808,
        Transport::Fast,
        &[
            simple("DSC Format Symbol", 8),
            simple("DSC Category Symbol", 8),
            simple("DSC Message Address", 8),
            simple("Nature of Distress or 1st Telecommand", 8),
            simple("Subsequent Communication Mode or 2nd Telecommand", 8),
            simple("Proposed Rx Frequency/Channel", 8),
            simple("Proposed Tx Frequency/Channel", 8),
            simple("Telephone Number", 8),
            latitude_i32("Latitude of Vessel Reported"),
            longitude_i32("Longitude of Vessel Reported"),
            time("Time of Position").desc("Seconds since midnight"),
            mmsi("User ID of Ship In Distress"),
            simple("DSC EOS Symbol", 8),
            simple("Expansion Enabled", 8),
            simple("Calling Rx Frequency/Channel", 8),
            simple("Calling Tx Frequency/Channel", 8),
            time("Time of Receipt").desc("Seconds since midnight"),
            date("Date of Receipt").desc("Days since January 1, 1970"),
            simple("DSC Equipment Assigned Message ID", 8),
            simple("DSC Expansion Field Symbol", 8),
            simple("DSC Expansion Field Data", 8),
        ],
    )
    .repeating_to_end(2, 20),
];
