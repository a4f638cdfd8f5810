//! Engine, transmission and fluid levels

use crate::lookup::*;
use crate::pgn::builder::*;
use crate::pgn::Transport;

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "Engine Parameters, Rapid Update",
        127488,
        Transport::Single,
        &[
            lookup("Instance", 8, &ENGINE_INSTANCE),
            typed("Speed", "ROTATION_UFIX16_RPM"),
            typed("Boost Pressure", "PRESSURE_UFIX16_HPA"),
            simple_signed("Tilt/Trim", 8),
            reserved(16),
        ],
    )
    .priority(2)
    .interval(100),
    PgnSpec::new(
        "Engine Parameters, Dynamic",
        127489,
        Transport::Fast,
        &[
            lookup("Instance", 8, &ENGINE_INSTANCE),
            typed("Oil pressure", "PRESSURE_UFIX16_HPA"),
            typed("Oil temperature", "TEMPERATURE_HIGH"),
            typed("Temperature", "TEMPERATURE"),
            typed("Alternator Potential", "VOLTAGE_FIX16_10MV"),
            typed("Fuel Rate", "VOLUMETRIC_FLOW"),
            typed("Total Engine hours", "TIME_UFIX32_S"),
            typed("Coolant Pressure", "PRESSURE_UFIX16_HPA"),
            typed("Fuel Pressure", "PRESSURE_UFIX16_KPA"),
            reserved(8),
            bit_lookup("Discrete Status 1", 16, &ENGINE_STATUS_1),
            bit_lookup("Discrete Status 2", 16, &ENGINE_STATUS_2),
            typed("Engine Load", "PERCENTAGE_INT8"),
            typed("Engine Torque", "PERCENTAGE_INT8"),
        ],
    )
    .priority(2)
    .interval(500),
    PgnSpec::new(
        "Transmission Parameters, Dynamic",
        127493,
        Transport::Single,
        &[
            lookup("Instance", 8, &ENGINE_INSTANCE),
            lookup("Transmission Gear", 2, &GEAR_STATUS),
            reserved(6),
            typed("Oil pressure", "PRESSURE_UFIX16_HPA"),
            typed("Oil temperature", "TEMPERATURE"),
            bit_lookup("Discrete Status 1", 8, &TRANSMISSION_STATUS),
            reserved(8),
        ],
    )
    .priority(2)
    .interval(100),
    PgnSpec::new(
        "Trip Parameters, Engine",
        127497,
        Transport::Fast,
        &[
            lookup("Instance", 8, &ENGINE_INSTANCE),
            typed("Trip Fuel Used", "VOLUME_UFIX16_L"),
            typed("Fuel Rate, Average", "VOLUMETRIC_FLOW"),
            typed("Fuel Rate, Economy", "VOLUMETRIC_FLOW"),
            typed("Instantaneous Fuel Economy", "VOLUMETRIC_FLOW"),
        ],
    )
    .priority(2)
    .interval(1000),
    PgnSpec::new(
        "Fluid Level",
        127505,
        Transport::Single,
        &[
            simple("Instance", 4),
            lookup("Type", 4, &TANK_TYPE),
            typed("Level", "PERCENTAGE_FIX16"),
            typed("Capacity", "VOLUME_UFIX32_DL"),
            reserved(8),
        ],
    )
    .priority(6)
    .interval(2500),
    PgnSpec::new(
        "Trip Parameters, Vessel",
        127496,
        Transport::Fast,
        &[
            typed("Time to Empty", "TIME_UFIX32_MS"),
            typed("Distance to Empty", "LENGTH_UFIX32_CM"),
            typed("Estimated Fuel Remaining", "VOLUME_UFIX16_L"),
            typed("Trip Run Time", "TIME_UFIX32_MS"),
        ],
    ),
    PgnSpec::new(
        "Engine Parameters, Static",
        127498,
        Transport::Single,
        &[
            lookup("Engine Instance", 8, &ENGINE_INSTANCE),
            simple("Rated Engine Speed", 16),
            simple("VIN", 8),
            simple("Software ID", 16),
        ],
    ),
];
