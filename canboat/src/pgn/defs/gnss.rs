//! GNSS receiver control, almanacs and differential corrections

use crate::lookup::*;
use crate::pgn::builder::*;
use crate::pgn::Transport;

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "GNSS Control Status",
        129538,
        Transport::Fast,
        &[
            simple("SV Elevation Mask", 16).desc("Will not use SV below this elevation"),
            number("PDOP Mask", 16, 0.01).desc("Will not report position above this PDOP"),
            number("PDOP Switch", 16, 0.01).desc("Will report 2D position above this PDOP"),
            number("SNR Mask", 16, 0.01).desc("Will not use SV below this SNR"),
            lookup("GNSS Mode (desired)", 3, &GNSS_MODE_DESIRED),
            lookup("DGNSS Mode (desired)", 3, &DGNSS_MODE_DESIRED),
            simple("Position/Velocity Filter", 2),
            simple("Max Correction Age", 16),
            typed("Antenna Altitude for 2D Mode", "LENGTH_UFIX16_CM"),
            lookup("Use Antenna Altitude for 2D Mode", 2, &USE_ANTENNA_ALTITUDE_FOR_2D_MODE),
        ],
    ),
    PgnSpec::new(
        "GPS Almanac Data",
        129541,
        Transport::Fast,
        &[
            simple("PRN", 8),
            simple("GPS Week number", 8),
            simple("SV Health Bits", 8),
            simple("Eccentricity", 8),
            simple("Almanac Reference Time", 8),
            simple("Inclination Angle", 8),
            simple("Right of Right Ascension", 8),
            simple("Root of Semi-major Axis", 8),
            simple("Argument of Perigee", 8),
            simple("Longitude of Ascension Node", 8),
            simple("Mean Anomaly", 8),
            simple("Clock Parameter 1", 8),
            simple("Clock Parameter 2", 8),
        ],
    ),
    PgnSpec::new(
        "GNSS Pseudorange Noise Statistics",
        129542,
        Transport::Fast,
        &[
            sid(),
            simple("RMS of Position Uncertainty", 16),
            simple("STD of Major axis", 8),
            simple("STD of Minor axis", 8),
            simple("Orientation of Major axis", 8),
            simple("STD of Lat Error", 8),
            simple("STD of Lon Error", 8),
            simple("STD of Alt Error", 8),
        ],
    ),
    PgnSpec::new(
        "GNSS RAIM Output",
        129545,
        Transport::Fast,
        &[
            sid(),
            simple("Integrity flag", 4),
            reserved(4),
            simple("Latitude expected error", 8),
            simple("Longitude expected error", 8),
            simple("Altitude expected error", 8),
            simple("SV ID of most likely failed sat", 8),
            simple("Probability of missed detection", 8),
            simple("Estimate of pseudorange bias", 8),
            simple("Std Deviation of bias", 8),
        ],
    ),
    PgnSpec::new(
        "GNSS RAIM Settings",
        129546,
        Transport::Single,
        &[
            simple("Radial Position Error Maximum Threshold", 8),
            simple("Probability of False Alarm", 8),
            simple("Probability of Missed Detection", 8),
            simple("Pseudorange Residual Filtering Time Constant", 8),
        ],
    ),
    PgnSpec::new(
        "GNSS Pseudorange Error Statistics",
        129547,
        Transport::Fast,
        &[
            sid(),
            simple("RMS Std Dev of Range Inputs", 16),
            simple("Std Dev of Major error ellipse", 8),
            simple("Std Dev of Minor error ellipse", 8),
            simple("Orientation of error ellipse", 8),
            simple("Std Dev Lat Error", 8),
            simple("Std Dev Lon Error", 8),
            simple("Std Dev Alt Error", 8),
        ],
    ),
    PgnSpec::new(
        "DGNSS Corrections",
        129549,
        Transport::Fast,
        &[
            sid(),
            simple("Reference Station ID", 16),
            simple("Reference Station Type", 16),
            simple("Time of corrections", 8),
            simple("Station Health", 8),
            simple("Reserved Bits", 8),
            simple("Satellite ID", 8),
            simple("PRC", 8),
            simple("RRC", 8),
            simple("UDRE", 8),
            simple("IOD", 8),
        ],
    ),
    PgnSpec::new(
        "GNSS Differential Correction Receiver Interface",
        129550,
        Transport::Single,
        &[
            simple("Channel", 8),
            simple("Frequency", 8),
            simple("Serial Interface Bit Rate", 8),
            simple("Serial Interface Detection Mode", 8),
            simple("Differential Source", 8),
            simple("Differential Operation Mode", 8),
        ],
    ),
    PgnSpec::new(
        "GNSS Differential Correction Receiver Signal",
        129551,
        Transport::Fast,
        &[
            sid(),
            simple("Channel", 8),
            simple("Signal Strength", 8),
            simple("Signal SNR", 8),
            simple("Frequency", 8),
            simple("Station Type", 8),
            simple("Station ID", 8),
            simple("Differential Signal Bit Rate", 8),
            simple("Differential Signal Detection Mode", 8),
            simple("Used as Correction Source", 8),
            reserved(8),
            simple("Differential Source", 8),
            simple("Time since Last Sat Differential Sync", 8),
            simple("Satellite Service ID No.", 8),
        ],
    ),
    PgnSpec::new(
        "GLONASS Almanac Data",
        129556,
        Transport::Fast,
        &[
            simple("PRN", 8),
            simple("NA", 8),
            simple("CnA", 8),
            simple("HnA", 8),
            simple("(epsilon)nA", 8),
            simple("(deltaTnA)DOT", 8),
            simple("(omega)nA", 8),
            simple("(delta)TnA", 8),
            simple("tnA", 8),
            simple("(lambda)nA", 8),
            simple("(delta)inA", 8),
            simple("tcA", 8),
            simple("tnA", 8),
        ],
    ),
];
