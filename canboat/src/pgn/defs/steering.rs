//! Heading, attitude and steering

use crate::lookup::*;
use crate::pgn::builder::*;
use crate::pgn::Transport;

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "Heading/Track control",
        127237,
        Transport::Fast,
        &[
            lookup("Rudder Limit Exceeded", 2, &YES_NO),
            lookup("Off-Heading Limit Exceeded", 2, &YES_NO),
            lookup("Off-Track Limit Exceeded", 2, &YES_NO),
            lookup("Override", 2, &YES_NO),
            lookup("Steering Mode", 3, &STEERING_MODE),
            lookup("Turn Mode", 3, &TURN_MODE),
            lookup("Heading Reference", 2, &DIRECTION_REFERENCE),
            reserved(5),
            lookup("Commanded Rudder Direction", 3, &DIRECTION_RUDDER),
            angle_i16("Commanded Rudder Angle"),
            angle_u16("Heading-To-Steer (Course)"),
            angle_u16("Track"),
            angle_u16("Rudder Limit"),
            angle_u16("Off-Heading Limit"),
            angle_i16("Radius of Turn Order"),
            typed("Rate of Turn Order", "ROTATION_FIX16"),
            typed("Off-Track Limit", "DISTANCE_FIX16_M"),
            angle_u16("Vessel Heading"),
        ],
    )
    .priority(2)
    .interval(250),
    PgnSpec::new(
        "Rudder",
        127245,
        Transport::Single,
        &[
            instance(),
            lookup("Direction Order", 3, &DIRECTION_RUDDER),
            reserved(5),
            angle_i16("Angle Order"),
            angle_i16("Position"),
            reserved(16),
        ],
    )
    .priority(2)
    .interval(100),
    PgnSpec::new(
        "Vessel Heading",
        127250,
        Transport::Single,
        &[
            sid(),
            angle_u16("Heading"),
            angle_i16("Deviation"),
            angle_i16("Variation"),
            lookup("Reference", 2, &DIRECTION_REFERENCE),
            reserved(6),
        ],
    )
    .priority(2)
    .interval(100),
    PgnSpec::new(
        "Rate of Turn",
        127251,
        Transport::Single,
        &[sid(), typed("Rate", "ROTATION_FIX32"), reserved(24)],
    )
    .priority(2)
    .interval(100),
    PgnSpec::new(
        "Attitude",
        127257,
        Transport::Single,
        &[
            sid(),
            angle_i16("Yaw"),
            angle_i16("Pitch"),
            angle_i16("Roll"),
            reserved(8),
        ],
    )
    .priority(3)
    .interval(1000),
    PgnSpec::new(
        "Magnetic Variation",
        127258,
        Transport::Single,
        &[
            sid(),
            lookup("Source", 4, &MAGNETIC_VARIATION),
            reserved(4),
            date("Age of service"),
            angle_i16("Variation"),
            reserved(16),
        ],
    )
    .priority(7)
    .interval(1000),
    PgnSpec::new(
        "Small Craft Status",
        130576,
        Transport::Single,
        &[
            simple_signed("Port trim tab", 8),
            simple_signed("Starboard trim tab", 8),
        ],
    ),
];
