//! Wind, temperature, humidity and pressure

use crate::lookup::*;
use crate::pgn::builder::*;
use crate::pgn::Transport;

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "Wind Data",
        130306,
        Transport::Single,
        &[
            sid(),
            typed("Wind Speed", "SPEED_UFIX16_CM"),
            angle_u16("Wind Angle"),
            lookup("Reference", 3, &WIND_REFERENCE),
            reserved(21),
        ],
    )
    .priority(2)
    .interval(100),
    PgnSpec::new(
        "Environmental Parameters (obsolete)",
        130310,
        Transport::Single,
        &[
            sid(),
            typed("Water Temperature", "TEMPERATURE"),
            typed("Outside Ambient Air Temperature", "TEMPERATURE"),
            typed("Atmospheric Pressure", "PRESSURE_UFIX16_HPA"),
            reserved(8),
        ],
    )
    .priority(5)
    .interval(500)
    .explanation("This PGN was obsoleted by PGN 130311, 130312 and 130313."),
    PgnSpec::new(
        "Environmental Parameters",
        130311,
        Transport::Single,
        &[
            sid(),
            lookup("Temperature Source", 6, &TEMPERATURE_SOURCE),
            lookup("Humidity Source", 2, &HUMIDITY_SOURCE),
            typed("Temperature", "TEMPERATURE"),
            typed("Humidity", "PERCENTAGE_FIX16"),
            typed("Atmospheric Pressure", "PRESSURE_UFIX16_HPA"),
        ],
    )
    .priority(5)
    .interval(500),
    PgnSpec::new(
        "Temperature",
        130312,
        Transport::Single,
        &[
            sid(),
            uint8("Instance"),
            lookup("Source", 8, &TEMPERATURE_SOURCE),
            typed("Actual Temperature", "TEMPERATURE"),
            typed("Set Temperature", "TEMPERATURE"),
            reserved(8),
        ],
    )
    .priority(5)
    .interval(2000),
    PgnSpec::new(
        "Humidity",
        130313,
        Transport::Single,
        &[
            sid(),
            uint8("Instance"),
            lookup("Source", 8, &HUMIDITY_SOURCE),
            typed("Actual Humidity", "PERCENTAGE_FIX16"),
            typed("Set Humidity", "PERCENTAGE_FIX16"),
            reserved(8),
        ],
    )
    .priority(5)
    .interval(2000),
    PgnSpec::new(
        "Actual Pressure",
        130314,
        Transport::Single,
        &[
            sid(),
            uint8("Instance"),
            lookup("Source", 8, &PRESSURE_SOURCE),
            typed("Pressure", "PRESSURE_FIX32_DPA"),
            reserved(8),
        ],
    )
    .priority(5)
    .interval(2000),
    PgnSpec::new(
        "Temperature Extended Range",
        130316,
        Transport::Single,
        &[
            sid(),
            uint8("Instance"),
            lookup("Source", 8, &TEMPERATURE_SOURCE),
            typed("Temperature", "TEMPERATURE_UFIX24"),
            typed("Set Temperature", "TEMPERATURE_HIGH"),
        ],
    )
    .priority(5),
    PgnSpec::new(
        "Set Pressure",
        130315,
        Transport::Single,
        &[
            simple("Pressure Instance", 4),
            simple("Pressure Source", 4),
            simple("Pressure", 16),
        ],
    ),
    PgnSpec::new(
        "Tide Station Data",
        130320,
        Transport::Fast,
        &[
            lookup("Mode", 4, &RESIDUAL_MODE),
            lookup("Tide Tendency", 2, &TIDE_TENDENCY),
            reserved(2),
            date("Measurement Date").desc("Days since January 1, 1970"),
            time("Measurement Time").desc("Seconds since midnight"),
            latitude_i32("Station Latitude"),
            longitude_i32("Station Longitude"),
            typed("Tide Level", "DISTANCE_FIX16_MM").desc("Relative to MLLW"),
            typed("Tide Level standard deviation", "LENGTH_UFIX16_CM"),
            string_var("Station ID"),
            string_var("Station Name"),
        ],
    ),
    PgnSpec::new(
        "Salinity Station Data",
        130321,
        Transport::Fast,
        &[
            lookup("Mode", 4, &RESIDUAL_MODE),
            reserved(4),
            date("Measurement Date").desc("Days since January 1, 1970"),
            time("Measurement Time").desc("Seconds since midnight"),
            latitude_i32("Station Latitude"),
            longitude_i32("Station Longitude"),
            float("Salinity").unit("ppt"),
            typed("Water Temperature", "TEMPERATURE"),
            string_var("Station ID"),
            string_var("Station Name"),
        ],
    ),
    PgnSpec::new(
        "Current Station Data",
        130322,
        Transport::Fast,
        &[
            simple("Mode", 4),
            reserved(4),
            date("Measurement Date").desc("Days since January 1, 1970"),
            time("Measurement Time").desc("Seconds since midnight"),
            latitude_i32("Station Latitude"),
            longitude_i32("Station Longitude"),
            typed("Measurement Depth", "LENGTH_UFIX32_CM").desc("Depth below transducer"),
            typed("Current speed", "SPEED_UFIX16_CM"),
            typed("Current flow direction", "ANGLE_UFIX16"),
            typed("Water Temperature", "TEMPERATURE"),
            string_var("Station ID"),
            string_var("Station Name"),
        ],
    ),
    PgnSpec::new(
        "Meteorological Station Data",
        130323,
        Transport::Fast,
        &[
            simple("Mode", 4),
            reserved(4),
            date("Measurement Date").desc("Days since January 1, 1970"),
            time("Measurement Time").desc("Seconds since midnight"),
            latitude_i32("Station Latitude"),
            longitude_i32("Station Longitude"),
            typed("Wind Speed", "SPEED_UFIX16_CM"),
            typed("Wind Direction", "ANGLE_UFIX16"),
            lookup("Wind Reference", 3, &WIND_REFERENCE),
            reserved(5),
            typed("Wind Gusts", "SPEED_UFIX16_CM"),
            typed("Atmospheric Pressure", "PRESSURE_UFIX16_HPA"),
            typed("Ambient Temperature", "TEMPERATURE"),
            string_var("Station ID"),
            string_var("Station Name"),
        ],
    ),
    PgnSpec::new(
        "Moored Buoy Station Data",
        130324,
        Transport::Fast,
        &[
            simple("Mode", 4),
            reserved(4),
            date("Measurement Date").desc("Days since January 1, 1970"),
            time("Measurement Time").desc("Seconds since midnight"),
            latitude_i32("Station Latitude"),
            longitude_i32("Station Longitude"),
            typed("Wind Speed", "SPEED_UFIX16_CM"),
            typed("Wind Direction", "ANGLE_UFIX16"),
            lookup("Wind Reference", 3, &WIND_REFERENCE),
            reserved(5),
            typed("Wind Gusts", "SPEED_UFIX16_CM"),
            simple("Wave Height", 16),
            simple("Dominant Wave Period", 16),
            typed("Atmospheric Pressure", "PRESSURE_UFIX16_HPA"),
            simple("Pressure Tendency Rate", 16),
            typed("Air Temperature", "TEMPERATURE"),
            typed("Water Temperature", "TEMPERATURE"),
            string_fix("Station ID", 8),
        ],
    ),
];
