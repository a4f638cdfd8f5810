//! Manufacturer proprietary PGNs, selected by their manufacturer code

use crate::lookup::*;
use crate::pgn::builder::*;
use crate::pgn::Transport;

const AIRMAR: u64 = 135;
const LOWRANCE: u64 = 140;
const NAVICO: u64 = 275;
const FURUNO: u64 = 1855;
const SIMRAD: u64 = 1857;
const BANDG: u64 = 381;

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "Furuno: Heave",
        65280,
        Transport::Single,
        &[
            manufacturer().matches(FURUNO),
            reserved(2),
            marine_industry(),
            typed("Heave", "DISTANCE_FIX32_MM"),
            reserved(8),
        ],
    ),
    PgnSpec::new(
        "Airmar: Boot State Acknowledgment",
        65285,
        Transport::Single,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            lookup("Boot State", 4, &AIRMAR_BOOT_STATE),
            reserved(44),
        ],
    )
    .url("http://www.airmartechnology.com/uploads/installguide/DST200UserlManual.pdf"),
    PgnSpec::new(
        "Lowrance: Temperature",
        65285,
        Transport::Single,
        &[
            manufacturer().matches(LOWRANCE),
            reserved(2),
            marine_industry(),
            lookup("Temperature Source", 8, &TEMPERATURE_SOURCE),
            typed("Actual Temperature", "TEMPERATURE"),
            reserved(24),
        ],
    ),
    PgnSpec::new(
        "Airmar: Depth Quality Factor",
        65408,
        Transport::Single,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            sid(),
            lookup("Depth Quality Factor", 4, &AIRMAR_DEPTH_QUALITY_FACTOR),
            reserved(36),
        ],
    )
    .url("http://www.airmartechnology.com/uploads/installguide/DST200UserlManual.pdf"),
    PgnSpec::new(
        "Airmar: Attitude Offset",
        126720,
        Transport::Fast,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            match_field("Proprietary ID", 8, 32).desc("Attitude Offsets"),
            angle_i16("Azimuth offset").desc("Positive: sensor rotated to port, negative: sensor rotated to starboard"),
            angle_i16("Pitch offset").desc("Positive: sensor tilted to bow, negative: sensor tilted to stern"),
            angle_i16("Roll offset").desc("Positive: sensor tilted to port, negative: sensor tilted to starboard"),
        ],
    )
    .url("http://www.airmartechnology.com/uploads/installguide/PB200UserManual.pdf")
    .explanation("Airmar proprietary fast-packet command to set the mounting offsets of an attitude sensor."),
    PgnSpec::new(
        "Airmar: Simulate Mode",
        126720,
        Transport::Fast,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            match_field("Proprietary ID", 8, 35).desc("Simulate Mode"),
            lookup("Simulate Mode", 2, &OFF_ON),
            reserved(22),
        ],
    )
    .url("http://www.airmartechnology.com/uploads/installguide/PB200UserManual.pdf"),
    PgnSpec::new(
        "B&G: key-value data",
        130824,
        Transport::Fast,
        &[
            manufacturer().matches(BANDG),
            reserved(2),
            marine_industry(),
            simple("Key", 12),
            parameter_length("Length", 4).desc("Length of value in bytes"),
            variable("Value"),
        ],
    )
    .repeating_to_end(3, 4)
    .explanation("Settings and readings of B&G displays and sensors as a list of key, length and value triples."),
    PgnSpec::new(
        "Airmar: Boot State Request",
        65286,
        Transport::Single,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Airmar: Access Level",
        65287,
        Transport::Single,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            lookup("Format Code", 3, &AIRMAR_FORMAT_CODE),
            lookup("Access Level", 3, &AIRMAR_ACCESS_LEVEL),
            reserved(2),
            simple("Access Seed/Key", 32).desc("When transmitted, it provides a seed for an unlock operation. It is used to provide the key during PGN 126208."),
        ],
    ),
    PgnSpec::new(
        "Simnet: Configure Temperature Sensor",
        65287,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
        ],
    ),
    PgnSpec::new(
        "Simnet: Trim Tab Sensor Calibration",
        65289,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
        ],
    ),
    PgnSpec::new(
        "Simnet: Paddle Wheel Speed Configuration",
        65290,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
        ],
    ),
    PgnSpec::new(
        "Simnet: Clear Fluid Level Warnings",
        65292,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
        ],
    ),
    PgnSpec::new(
        "Simnet: LGC-2000 Configuration",
        65293,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
        ],
    ),
    PgnSpec::new(
        "Simnet: Reprogram Status",
        65325,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
        ],
    ),
    PgnSpec::new(
        "Simnet: Autopilot Mode",
        65341,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
        ],
    ),
    PgnSpec::new(
        "Airmar: Device Information",
        65410,
        Transport::Single,
        &[
            manufacturer(),
            reserved(2),
            industry(),
            sid(),
            typed("Internal Device Temperature", "TEMPERATURE"),
            typed("Supply Voltage", "VOLTAGE_UFIX16_10MV"),
            reserved(8),
        ],
    ),
    PgnSpec::new(
        "Simnet: Autopilot Mode",
        65480,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Maretron: Slave Response",
        126270,
        Transport::Single,
        &[
            manufacturer(),
            reserved(2),
            industry(),
            simple("Product code", 16).desc("0x1b2=SSC200"),
            simple("Software code", 16),
            simple("Command", 8).desc("0x50=Deviation calibration result"),
            simple("Status", 8),
        ],
    ),
    PgnSpec::new(
        "Navico: Product Information",
        130817,
        Transport::Fast,
        &[
            manufacturer(),
            reserved(2),
            industry(),
            simple("Product Code", 16),
            string_fix("Model", 32),
            simple("A", 8),
            simple("B", 8),
            simple("C", 8),
            string_fix("Firmware version", 10),
            string_fix("Firmware date", 32),
            string_fix("Firmware time", 32),
        ],
    ),
    PgnSpec::new(
        "Simnet: Reprogram Data",
        130818,
        Transport::Fast,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
            simple("Version", 16),
            simple("Sequence", 16),
            binary_rest("Data"),
        ],
    ),
    PgnSpec::new(
        "Simnet: Request Reprogram",
        130819,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Simnet: Reprogram Status",
        130820,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
            reserved(8),
            simple("Status", 8),
            reserved(24),
        ],
    ),
    PgnSpec::new(
        "Furuno: Unknown",
        130820,
        Transport::Single,
        &[
            manufacturer().matches(FURUNO),
            reserved(2),
            industry(),
            simple("A", 8),
            simple("B", 8),
            simple("C", 8),
            simple("D", 8),
            simple("E", 8),
        ],
    ),
    PgnSpec::new(
        "Furuno: Unknown",
        130821,
        Transport::Fast,
        &[
            manufacturer().matches(FURUNO),
            reserved(2),
            industry(),
            sid(),
            simple("A", 8),
            simple("B", 8),
            simple("C", 8),
            simple("D", 8),
            simple("E", 8),
            simple("F", 8),
            simple("G", 8),
            simple("H", 8),
            simple("I", 8),
        ],
    ),
    PgnSpec::new(
        "Lowrance: unknown",
        130827,
        Transport::Fast,
        &[
            manufacturer().matches(LOWRANCE),
            reserved(2),
            industry(),
            simple("A", 8),
            simple("B", 8),
            simple("C", 8),
            simple("D", 8),
            simple("E", 16),
            simple("F", 16),
        ],
    ),
    PgnSpec::new(
        "Simnet: Set Serial Number",
        130828,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Suzuki: Engine and Storage Device Config",
        130831,
        Transport::Single,
        &[
            manufacturer(),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Simnet: Fuel Used - High Resolution",
        130832,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Simnet: Engine and Tank Configuration",
        130834,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Simnet: Set Engine and Tank Configuration",
        130835,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Simnet: Fluid Level Sensor Configuration",
        130836,
        Transport::Fast,
        &[
            manufacturer(),
            reserved(2),
            industry(),
            simple("C", 8),
            simple("Device", 8),
            simple("Instance", 8),
            simple("F", 4),
            lookup("Tank type", 4, &SIMNET_TANK_TYPE),
            number("Capacity", 32, 0.1),
            simple("G", 8),
            simple_signed("H", 16),
            simple_signed("I", 8),
        ],
    ),
    PgnSpec::new(
        "Simnet: Fuel Flow Turbine Configuration",
        130837,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Simnet: Fluid Level Warning",
        130838,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Simnet: Pressure Sensor Configuration",
        130839,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Simnet: Data User Group Configuration",
        130840,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Simnet: AIS Class B static data (msg 24 Part A)",
        130842,
        Transport::Fast,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
            match_field("Message ID", 6, 0).desc("Msg 24 Part A"),
            simple("Repeat indicator", 2),
            simple("D", 8),
            simple("E", 8),
            mmsi("User ID"),
            string_fix("Name", 20),
        ],
    ),
    PgnSpec::new(
        "Simnet: AIS Class B static data (msg 24 Part B)",
        130842,
        Transport::Fast,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
            match_field("Message ID", 6, 1).desc("Msg 24 Part B"),
            simple("Repeat indicator", 2),
            simple("D", 8),
            simple("E", 8),
            mmsi("User ID"),
            simple("Type of ship", 8),
            string_fix("Vendor ID", 7),
            string_fix("Callsign", 7).desc("0=unavailable"),
            typed("Length", "LENGTH_UFIX16_DM"),
            typed("Beam", "LENGTH_UFIX16_DM"),
            typed("Position reference from Starboard", "LENGTH_UFIX16_DM"),
            typed("Position reference from Bow", "LENGTH_UFIX16_DM"),
            mmsi("Mothership User ID").desc("Id of mother ship sent by daughter vessels"),
            simple("", 2),
            simple("Spare", 6).desc("0=unavailable"),
        ],
    ),
    PgnSpec::new(
        "Simnet: Sonar Status, Frequency and DSP Voltage",
        130843,
        Transport::Single,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
        ],
    ),
    PgnSpec::new(
        "Simnet: Parameter Handle",
        130845,
        Transport::Fast,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
            simple("Message ID", 6),
            simple("Repeat indicator", 2),
            simple("D", 8),
            simple("Group", 8),
            simple("F", 8),
            simple("G", 8),
            simple("H", 8),
            simple("I", 8),
            simple("J", 8),
            lookup("Backlight", 8, &SIMNET_BACKLIGHT),
            simple("L", 16),
        ],
    ),
    PgnSpec::new(
        "Simnet: Event Command: AP command",
        130850,
        Transport::Fast,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
            match_field("Proprietary ID", 8, 2).desc("AP command"),
            simple("B", 16),
            simple("Controlling Device", 8),
            simple("Event", 16),
            simple("Direction", 8),
            typed("Angle", "ANGLE_UFIX16"),
            simple("G", 8),
        ],
    ),
    PgnSpec::new(
        "Simnet: Event Reply: AP command",
        130851,
        Transport::Fast,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
            match_field("Proprietary ID", 8, 2).desc("AP command"),
            simple("B", 16),
            simple("Controlling Device", 8),
            simple("Event", 16),
            simple("Direction", 8),
            typed("Angle", "ANGLE_UFIX16"),
            simple("G", 8),
        ],
    ),
    PgnSpec::new(
        "Simnet: Alarm Message",
        130856,
        Transport::Fast,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
            simple("Message ID", 16),
            simple("B", 8),
            simple("C", 8),
            string_fix("Text", 217),
        ],
    ),
    PgnSpec::new(
        "Airmar: Additional Weather Data",
        130880,
        Transport::Fast,
        &[
            manufacturer(),
            reserved(2),
            industry(),
            simple("C", 8),
            typed("Apparent Windchill Temperature", "TEMPERATURE"),
            typed("True Windchill Temperature", "TEMPERATURE"),
            typed("Dewpoint", "TEMPERATURE"),
        ],
    ),
    PgnSpec::new(
        "Airmar: Heater Control",
        130881,
        Transport::Fast,
        &[
            manufacturer(),
            reserved(2),
            industry(),
            simple("C", 8),
            typed("Plate Temperature", "TEMPERATURE"),
            typed("Air Temperature", "TEMPERATURE"),
            typed("Dewpoint", "TEMPERATURE"),
        ],
    ),
    PgnSpec::new(
        "Airmar: POST",
        130944,
        Transport::Single,
        &[
            manufacturer(),
            reserved(2),
            industry(),
            lookup("Control", 4, &AIRMAR_CONTROL),
            reserved(7),
            simple("Number of ID/test result pairs to follow", 8),
            lookup("Test ID", 8, &AIRMAR_TEST_ID).desc("See Airmar docs for table of IDs and failure codes; these lookup values are for DST200"),
            lookup("Test result", 8, &AIRMAR_TEST_RESULT).desc("Values other than 0 are failure codes"),
        ],
    ),
    PgnSpec::new(
        "Airmar: Calibrate Compass",
        126720,
        Transport::Fast,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            match_field("Proprietary ID", 8, 33).desc("Calibrate Compass"),
            lookup("Calibrate Function", 8, &AIRMAR_CALIBRATE_FUNCTION),
            lookup("Calibration Status", 8, &AIRMAR_CALIBRATION_STATUS),
            simple("Verify Score", 8).desc("TBD"),
            number_signed("X-axis gain value", 16, 0.01).desc("default 100, range 50 to 500"),
            number_signed("Y-axis gain value", 16, 0.01).desc("default 100, range 50 to 500"),
            number_signed("Z-axis gain value", 16, 0.01).desc("default 100, range 50 to 500"),
            number_signed("X-axis linear offset", 16, 0.01).unit("Tesla").desc("default 0, range -320.00 to 320.00"),
            number_signed("Y-axis linear offset", 16, 0.01).unit("Tesla").desc("default 0, range -320.00 to 320.00"),
            number_signed("Z-axis linear offset", 16, 0.01).unit("Tesla").desc("default 0, range -320.00 to 320.00"),
            number_signed("X-axis angular offset", 16, 0.1).unit("deg").desc("default 0, range 0 to 3600"),
            number_signed("Pitch and Roll damping", 16, 0.05).unit("s").desc("default 30, range 0 to 200"),
            number_signed("Compass/Rate gyro damping", 16, 0.05).unit("s").desc("default -30, range -2400 to 2400, negative indicates rate gyro is to be used in compass calculations"),
        ],
    ),
    PgnSpec::new(
        "Airmar: True Wind Options",
        126720,
        Transport::Fast,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            match_field("Proprietary ID", 8, 34).desc("True Wind Options"),
            lookup("COG substition for HDG", 2, &AIRMAR_COG_SUBSTITUTION).desc("Allow use of COG when HDG not available?"),
            lookup("Calibration Status", 8, &AIRMAR_CALIBRATION_STATUS),
            simple("Verify Score", 8).desc("TBD"),
            number_signed("X-axis gain value", 16, 0.01).desc("default 100, range 50 to 500"),
            number_signed("Y-axis gain value", 16, 0.01).desc("default 100, range 50 to 500"),
            number_signed("Z-axis gain value", 16, 0.01).desc("default 100, range 50 to 500"),
            number_signed("X-axis linear offset", 16, 0.01).unit("Tesla").desc("default 0, range -320.00 to 320.00"),
            number_signed("Y-axis linear offset", 16, 0.01).unit("Tesla").desc("default 0, range -320.00 to 320.00"),
            number_signed("Z-axis linear offset", 16, 0.01).unit("Tesla").desc("default 0, range -320.00 to 320.00"),
            number_signed("X-axis angular offset", 16, 0.1).unit("deg").desc("default 0, range 0 to 3600"),
            number_signed("Pitch and Roll damping", 16, 0.05).unit("s").desc("default 30, range 0 to 200"),
            number_signed("Compass/Rate gyro damping", 16, 0.05).unit("s").desc("default -30, range -2400 to 2400, negative indicates rate gyro is to be used in compass calculations"),
        ],
    ),
    PgnSpec::new(
        "Airmar: Calibrate Depth",
        126720,
        Transport::Fast,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            match_field("Proprietary ID", 8, 40).desc("Calibrate Depth"),
            typed("Speed of Sound Mode", "SPEED_UFIX16_DM").desc("actual allowed range is 1350.0 to 1650.0 m/s"),
            reserved(8),
        ],
    ),
    PgnSpec::new(
        "Airmar: Calibrate Speed",
        126720,
        Transport::Fast,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            match_field("Proprietary ID", 8, 41).desc("Calibrate Speed"),
            simple("Number of pairs of data points", 8).desc("actual range is 0 to 25. 254=restore default speed curve"),
            number("Input frequency", 16, 0.1).unit("Hz"),
            typed("Output speed", "SPEED_UFIX16_CM"),
        ],
    )
    .repeating_to_end(2, 6),
    PgnSpec::new(
        "Airmar: Calibrate Temperature",
        126720,
        Transport::Fast,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            match_field("Proprietary ID", 8, 42).desc("Calibrate Temperature"),
            lookup("Temperature instance", 2, &AIRMAR_TEMPERATURE_INSTANCE),
            reserved(6),
            number("Temperature offset", 16, 0.1).unit("Hz"),
            number_signed("Temperature offset", 16, 0.001).unit("K").desc("actual range is -9.999 to +9.999 K"),
        ],
    )
    .repeating_to_end(2, 7),
    PgnSpec::new(
        "Airmar: Speed Filter",
        126720,
        Transport::Fast,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            match_field("Proprietary ID", 8, 43).desc("Speed Filter"),
            lookup("Filter type", 4, &AIRMAR_FILTER_TYPE),
            reserved(4),
            number("Sample interval", 16, 0.01).unit("s"),
            number("Filter duration", 16, 0.01).unit("s"),
        ],
    )
    .repeating_to_end(2, 7),
    PgnSpec::new(
        "Airmar: NMEA 2000 options",
        126720,
        Transport::Fast,
        &[
            manufacturer().matches(AIRMAR),
            reserved(2),
            marine_industry(),
            match_field("Proprietary ID", 8, 46).desc("NMEA 2000 options"),
            lookup("Transmission Interval", 2, &AIRMAR_TRANSMISSION_INTERVAL),
            reserved(22),
        ],
    )
    .repeating_to_end(2, 5),
    PgnSpec::new(
        "SonicHub: Init #2",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 1).desc("Init #2"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            simple("A", 16),
            simple("B", 16),
        ],
    ),
    PgnSpec::new(
        "SonicHub: AM Radio",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 4).desc("AM Radio"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            lookup("Item", 8, &SONICHUB_TUNING),
            number("Frequency", 32, 0.001).unit("kHz"),
            simple("Noise level", 2).desc("Signal level"),
            string_lz("Text"),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Zone info",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 5).desc("Zone info"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            simple("Zone", 8),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Source",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 6).desc("Source"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            lookup("Source", 8, &SONICHUB_SOURCE),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Source List",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 8).desc("Source list"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            simple("Source ID", 8),
            simple("A", 8),
            string_lz("Text"),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Control",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 9).desc("Control"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            lookup("Item", 8, &SONICHUB_MUTE),
        ],
    ),
    PgnSpec::new(
        "SonicHub: FM Radio",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 12).desc("FM Radio"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            lookup("Item", 8, &SONICHUB_TUNING),
            number("Frequency", 32, 0.001).unit("kHz"),
            simple("Noise level", 2).desc("Signal level"),
            string_lz("Text"),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Playlist",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 13).desc("Playlist"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            lookup("Item", 8, &SONICHUB_PLAYLIST),
            simple("A", 8),
            simple("Current Track", 32),
            simple("Tracks", 32),
            typed("Length", "TIME_UFIX32_MS"),
            typed("Position in track", "TIME_UFIX32_MS"),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Track",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 14).desc("Track"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            simple("Item", 32),
            string_lz("Text"),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Artist",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 15).desc("Artist"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            simple("Item", 32),
            string_lz("Text"),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Album",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 16).desc("Album"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            simple("Item", 32),
            string_lz("Text"),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Menu Item",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 19).desc("Menu Item"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            simple("Item", 32),
            simple("C", 8),
            simple("D", 8),
            simple("E", 8),
            string_lz("Text"),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Zones",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 20).desc("Zones"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            simple("Zones", 8),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Max Volume",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 23).desc("Max Volume"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            lookup("Zone", 8, &SONICHUB_ZONE),
            simple("Level", 8),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Volume",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 24).desc("Volume"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            lookup("Zone", 8, &SONICHUB_ZONE),
            simple("Level", 8),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Init #1",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 25).desc("Init #1"),
            lookup("Control", 8, &SONICHUB_CONTROL),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Position",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 48).desc("Position"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            typed("Position", "TIME_UFIX32_MS"),
        ],
    ),
    PgnSpec::new(
        "SonicHub: Init #3",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(NAVICO),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 50).desc("Init #3"),
            lookup("Control", 8, &SONICHUB_CONTROL),
            simple("A", 8),
            simple("B", 8),
        ],
    ),
    PgnSpec::new(
        "Simrad: Text Message",
        130816,
        Transport::Fast,
        &[
            manufacturer().matches(SIMRAD),
            reserved(2),
            industry(),
            reserved(8),
            match_field("Proprietary ID", 8, 50),
            simple("A", 8),
            simple("B", 8),
            simple("C", 8),
            sid(),
            simple("Prio", 8),
            string_fix("Text", 32),
        ],
    ),
];
