//! Speed, depth, position and GNSS

use crate::lookup::*;
use crate::pgn::builder::*;
use crate::pgn::Transport;

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "Speed",
        128259,
        Transport::Single,
        &[
            sid(),
            typed("Speed Water Referenced", "SPEED_UFIX16_CM"),
            typed("Speed Ground Referenced", "SPEED_UFIX16_CM"),
            lookup("Speed Water Referenced Type", 8, &WATER_REFERENCE),
            simple("Speed Direction", 4),
            reserved(12),
        ],
    )
    .priority(2)
    .interval(1000),
    PgnSpec::new(
        "Water Depth",
        128267,
        Transport::Single,
        &[
            sid(),
            typed("Depth", "LENGTH_UFIX32_CM").desc("Depth below transducer"),
            typed("Offset", "DISTANCE_FIX16_MM").desc("Distance between transducer and surface (positive) or keel (negative)"),
            typed("Range", "LENGTH_UFIX8_DAM").desc("Max measurement range"),
        ],
    )
    .priority(3)
    .interval(1000),
    PgnSpec::new(
        "Distance Log",
        128275,
        Transport::Fast,
        &[
            date("Date").desc("Timestamp of last reset in Days since January 1, 1970"),
            time("Time").desc("Timestamp of last reset Seconds since midnight"),
            typed("Log", "LENGTH_UFIX32_M").desc("Total cumulative distance"),
            typed("Trip Log", "LENGTH_UFIX32_M").desc("Distance since last reset"),
        ],
    )
    .priority(6)
    .interval(1000),
    PgnSpec::new(
        "Position, Rapid Update",
        129025,
        Transport::Single,
        &[latitude_i32("Latitude"), longitude_i32("Longitude")],
    )
    .priority(2)
    .interval(100),
    PgnSpec::new(
        "COG & SOG, Rapid Update",
        129026,
        Transport::Single,
        &[
            sid(),
            lookup("COG Reference", 2, &DIRECTION_REFERENCE),
            reserved(6),
            angle_u16("COG"),
            typed("SOG", "SPEED_UFIX16_CM"),
            reserved(16),
        ],
    )
    .priority(2)
    .interval(250),
    PgnSpec::new(
        "GNSS Position Data",
        129029,
        Transport::Fast,
        &[
            sid(),
            date("Date"),
            time("Time"),
            latitude_i64("Latitude"),
            longitude_i64("Longitude"),
            typed("Altitude", "DISTANCE_FIX64").desc("Altitude referenced to WGS-84"),
            lookup("GNSS type", 4, &GNS),
            lookup("Method", 4, &GNS_METHOD),
            lookup("Integrity", 2, &GNS_INTEGRITY),
            reserved(6),
            simple("Number of SVs", 8).desc("Number of satellites used in solution"),
            typed("HDOP", "DILUTION_OF_PRECISION_FIX16").desc("Horizontal dilution of precision"),
            typed("PDOP", "DILUTION_OF_PRECISION_FIX16").desc("Positional dilution of precision"),
            typed("Geoidal Separation", "DISTANCE_FIX32_CM").desc("Geoidal Separation"),
            simple("Reference Stations", 8).desc("Number of reference stations"),
            lookup("Reference Station Type", 4, &GNS),
            simple("Reference Station ID", 12),
            typed("Age of DGNSS Corrections", "TIME_UFIX16_CS"),
        ],
    )
    .priority(3)
    .interval(1000)
    .repeating(15, 3, 16)
    .explanation(
        "This PGN conveys a comprehensive set of Global Navigation Satellite System (GNSS) parameters, including \
         position information.",
    ),
    PgnSpec::new(
        "Time & Date",
        129033,
        Transport::Single,
        &[date("Date"), time("Time"), typed("Local Offset", "TIME_FIX16_MIN")],
    )
    .priority(3)
    .interval(1000),
    PgnSpec::new(
        "Cross Track Error",
        129283,
        Transport::Single,
        &[
            sid(),
            lookup("XTE mode", 4, &RESIDUAL_MODE),
            reserved(2),
            lookup("Navigation Terminated", 2, &YES_NO),
            typed("XTE", "DISTANCE_FIX32_CM"),
            reserved(16),
        ],
    )
    .priority(3)
    .interval(1000),
    PgnSpec::new(
        "Navigation Data",
        129284,
        Transport::Fast,
        &[
            sid(),
            typed("Distance to Waypoint", "LENGTH_UFIX32_CM"),
            lookup("Course/Bearing reference", 2, &DIRECTION_REFERENCE),
            lookup("Perpendicular Crossed", 2, &YES_NO),
            lookup("Arrival Circle Entered", 2, &YES_NO),
            lookup("Calculation Type", 2, &BEARING_MODE),
            time("ETA Time"),
            date("ETA Date"),
            angle_u16("Bearing, Origin to Destination Waypoint"),
            angle_u16("Bearing, Position to Destination Waypoint"),
            uint32("Origin Waypoint Number"),
            uint32("Destination Waypoint Number"),
            latitude_i32("Destination Latitude"),
            longitude_i32("Destination Longitude"),
            typed("Waypoint Closing Velocity", "SPEED_FIX16_CM"),
        ],
    )
    .priority(3)
    .interval(1000),
    PgnSpec::new(
        "GNSS DOPs",
        129539,
        Transport::Single,
        &[
            sid(),
            lookup("Desired Mode", 3, &GNSS_MODE),
            lookup("Actual Mode", 3, &GNSS_MODE),
            reserved(2),
            typed("HDOP", "DILUTION_OF_PRECISION_FIX16").desc("Horizontal dilution of precision"),
            typed("VDOP", "DILUTION_OF_PRECISION_FIX16").desc("Vertical dilution of precision"),
            typed("TDOP", "DILUTION_OF_PRECISION_FIX16").desc("Time dilution of precision"),
        ],
    )
    .priority(6)
    .interval(1000),
    PgnSpec::new(
        "GNSS Sats in View",
        129540,
        Transport::Fast,
        &[
            sid(),
            lookup("Range Residual Mode", 2, &RANGE_RESIDUAL_MODE),
            reserved(6),
            uint8("Sats in View"),
            uint8("PRN"),
            angle_i16("Elevation"),
            angle_u16("Azimuth"),
            typed("SNR", "SIGNALTONOISERATIO_UFIX16"),
            int32("Range residuals"),
            lookup("Status", 4, &SATELLITE_STATUS),
            reserved(4),
        ],
    )
    .priority(6)
    .interval(1000)
    .repeating(4, 7, 5),
    PgnSpec::new(
        "Tracked Target Data",
        128520,
        Transport::Fast,
        &[
            sid(),
            simple("Target ID #", 8).desc("Number of route, waypoint, event, mark, etc."),
            lookup("Track Status", 2, &TRACK_STATUS),
            lookup("Reported Target", 1, &YES_NO),
            lookup("Target Acquisition", 1, &TARGET_ACQUISITION),
            lookup("Bearing Reference", 2, &DIRECTION_REFERENCE),
            reserved(2),
            typed("Bearing", "ANGLE_UFIX16"),
            typed("Distance", "LENGTH_UFIX32_MM"),
            typed("Course", "ANGLE_UFIX16"),
            typed("Speed", "SPEED_UFIX16_CM"),
            typed("CPA", "LENGTH_UFIX32_CM"),
            typed("TCPA", "TIME_UFIX32_MS").desc("negative = time elapsed since event, positive = time to go"),
            time("UTC of Fix").desc("Seconds since midnight"),
            string_fix("Name", 198),
        ],
    ),
    PgnSpec::new(
        "Position Delta, Rapid Update",
        129027,
        Transport::Single,
        &[
            sid(),
            simple("Time Delta", 16),
            simple_signed("Latitude Delta", 16),
            simple_signed("Longitude Delta", 16),
        ],
    ),
    PgnSpec::new(
        "Altitude Delta, Rapid Update",
        129028,
        Transport::Fast,
        &[
            sid(),
            simple_signed("Time Delta", 16),
            simple("GNSS Quality", 2),
            simple("Direction", 2),
            reserved(4),
            number("Course Over Ground", 32, 0.0001).unit("rad"),
            simple_signed("Altitude Delta", 16),
        ],
    ),
    PgnSpec::new(
        "Datum",
        129044,
        Transport::Fast,
        &[
            string_fix("Local Datum", 4).desc("defined in IHO Publication S-60, Appendices B and C. First three chars are datum ID as per IHO tables. Fourth char is local datum subdivision code."),
            latitude_i32("Delta Latitude"),
            longitude_i32("Delta Longitude"),
            number_signed("Delta Altitude", 32, 1e-06).unit("m"),
            string_fix("Reference Datum", 4).desc("defined in IHO Publication S-60, Appendices B and C. First three chars are datum ID as per IHO tables. Fourth char is local datum subdivision code."),
        ],
    ),
    PgnSpec::new(
        "User Datum",
        129045,
        Transport::Fast,
        &[
            typed("Delta X", "DISTANCE_FIX32_CM").desc("Delta shift in X axis from WGS 84"),
            typed("Delta Y", "DISTANCE_FIX32_CM").desc("Delta shift in Y axis from WGS 84"),
            typed("Delta Z", "DISTANCE_FIX32_CM").desc("Delta shift in Z axis from WGS 84"),
            float("Rotation in X"),
            float("Rotation in Y"),
            float("Rotation in Z"),
            float("Scale").unit("ppm"),
            typed("Ellipsoid Semi-major Axis", "DISTANCE_FIX32_CM").desc("Semi-major axis (a) of the User Datum ellipsoid"),
            float("Ellipsoid Flattening Inverse"),
            string_fix("Datum Name", 4).desc("4 character code from IHO Publication S-60,Appendices B and C. First three chars are datum ID as per IHO tables. Fourth char is local datum subdivision code."),
        ],
    ),
    PgnSpec::new(
        "Navigation - Route/WP Information",
        129285,
        Transport::Fast,
        &[
            simple("Start RPS#", 16),
            simple("nItems", 16),
            simple("Database ID", 16),
            simple("Route ID", 16),
            simple("Navigation direction in route", 2),
            simple("Supplementary Route/WP data available", 2),
            reserved(4),
            string_var("Route Name"),
            reserved(8),
            simple("WP ID", 16),
            string_var("WP Name"),
            latitude_i32("WP Latitude"),
            longitude_i32("WP Longitude"),
        ],
    )
    .repeating_to_end(4, 10),
    PgnSpec::new(
        "Set & Drift, Rapid Update",
        129291,
        Transport::Single,
        &[
            sid(),
            lookup("Set Reference", 2, &DIRECTION_REFERENCE),
            reserved(6),
            typed("Set", "ANGLE_UFIX16"),
            typed("Drift", "SPEED_UFIX16_CM"),
        ],
    ),
    PgnSpec::new(
        "Navigation - Route / Time to+from Mark",
        129301,
        Transport::Fast,
        &[
            sid(),
            typed("Time to mark", "TIME_FIX32_MS").desc("negative = elapsed since event, positive = time to go"),
            lookup("Mark Type", 4, &MARK_TYPE),
            reserved(4),
            simple("Mark ID", 32),
        ],
    ),
    PgnSpec::new(
        "Bearing and Distance between two Marks",
        129302,
        Transport::Fast,
        &[
            sid(),
            simple("Bearing Reference", 4),
            simple("Calculation Type", 2),
            reserved(2),
            typed("Bearing, Origin to Destination", "ANGLE_UFIX16"),
            typed("Distance", "LENGTH_UFIX32_CM"),
            simple("Origin Mark Type", 4),
            simple("Destination Mark Type", 4),
            simple("Origin Mark ID", 32),
            simple("Destination Mark ID", 32),
        ],
    ),
    PgnSpec::new(
        "Direction Data",
        130577,
        Transport::Fast,
        &[
            lookup("Data Mode", 4, &RESIDUAL_MODE),
            lookup("COG Reference", 2, &DIRECTION_REFERENCE),
            reserved(2),
            sid(),
            typed("COG", "ANGLE_UFIX16"),
            typed("SOG", "SPEED_UFIX16_CM"),
            typed("Heading", "ANGLE_UFIX16"),
            typed("Speed through Water", "SPEED_UFIX16_CM"),
            typed("Set", "ANGLE_UFIX16"),
            typed("Drift", "SPEED_UFIX16_CM"),
        ],
    ),
    PgnSpec::new(
        "Vessel Speed Components",
        130578,
        Transport::Fast,
        &[
            typed("Longitudinal Speed, Water-referenced", "SPEED_FIX16_MM"),
            typed("Transverse Speed, Water-referenced", "SPEED_FIX16_MM"),
            typed("Longitudinal Speed, Ground-referenced", "SPEED_FIX16_MM"),
            typed("Transverse Speed, Ground-referenced", "SPEED_FIX16_MM"),
            typed("Stern Speed, Water-referenced", "SPEED_FIX16_MM"),
            typed("Stern Speed, Ground-referenced", "SPEED_FIX16_MM"),
        ],
    ),
];
