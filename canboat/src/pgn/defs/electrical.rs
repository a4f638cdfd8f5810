//! Batteries, chargers, inverters and switch banks

use crate::lookup::*;
use crate::pgn::builder::*;
use crate::pgn::Transport;

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "Binary Switch Bank Status",
        127501,
        Transport::Single,
        &[
            instance(),
            lookup("Indicator1", 2, &OFF_ON),
            lookup("Indicator2", 2, &OFF_ON),
            lookup("Indicator3", 2, &OFF_ON),
            lookup("Indicator4", 2, &OFF_ON),
            lookup("Indicator5", 2, &OFF_ON),
            lookup("Indicator6", 2, &OFF_ON),
            lookup("Indicator7", 2, &OFF_ON),
            lookup("Indicator8", 2, &OFF_ON),
            lookup("Indicator9", 2, &OFF_ON),
            lookup("Indicator10", 2, &OFF_ON),
            lookup("Indicator11", 2, &OFF_ON),
            lookup("Indicator12", 2, &OFF_ON),
            lookup("Indicator13", 2, &OFF_ON),
            lookup("Indicator14", 2, &OFF_ON),
            lookup("Indicator15", 2, &OFF_ON),
            lookup("Indicator16", 2, &OFF_ON),
            lookup("Indicator17", 2, &OFF_ON),
            lookup("Indicator18", 2, &OFF_ON),
            lookup("Indicator19", 2, &OFF_ON),
            lookup("Indicator20", 2, &OFF_ON),
            lookup("Indicator21", 2, &OFF_ON),
            lookup("Indicator22", 2, &OFF_ON),
            lookup("Indicator23", 2, &OFF_ON),
            lookup("Indicator24", 2, &OFF_ON),
            lookup("Indicator25", 2, &OFF_ON),
            lookup("Indicator26", 2, &OFF_ON),
            lookup("Indicator27", 2, &OFF_ON),
            lookup("Indicator28", 2, &OFF_ON),
        ],
    )
    .priority(3)
    .interval(15000),
    PgnSpec::new(
        "Switch Bank Control",
        127502,
        Transport::Single,
        &[
            instance(),
            lookup("Switch1", 2, &OFF_ON),
            lookup("Switch2", 2, &OFF_ON),
            lookup("Switch3", 2, &OFF_ON),
            lookup("Switch4", 2, &OFF_ON),
            lookup("Switch5", 2, &OFF_ON),
            lookup("Switch6", 2, &OFF_ON),
            lookup("Switch7", 2, &OFF_ON),
            lookup("Switch8", 2, &OFF_ON),
            lookup("Switch9", 2, &OFF_ON),
            lookup("Switch10", 2, &OFF_ON),
            lookup("Switch11", 2, &OFF_ON),
            lookup("Switch12", 2, &OFF_ON),
            lookup("Switch13", 2, &OFF_ON),
            lookup("Switch14", 2, &OFF_ON),
            lookup("Switch15", 2, &OFF_ON),
            lookup("Switch16", 2, &OFF_ON),
            lookup("Switch17", 2, &OFF_ON),
            lookup("Switch18", 2, &OFF_ON),
            lookup("Switch19", 2, &OFF_ON),
            lookup("Switch20", 2, &OFF_ON),
            lookup("Switch21", 2, &OFF_ON),
            lookup("Switch22", 2, &OFF_ON),
            lookup("Switch23", 2, &OFF_ON),
            lookup("Switch24", 2, &OFF_ON),
            lookup("Switch25", 2, &OFF_ON),
            lookup("Switch26", 2, &OFF_ON),
            lookup("Switch27", 2, &OFF_ON),
            lookup("Switch28", 2, &OFF_ON),
        ],
    )
    .priority(3),
    PgnSpec::new(
        "DC Detailed Status",
        127506,
        Transport::Fast,
        &[
            sid(),
            uint8("Instance"),
            lookup("DC Type", 8, &DC_SOURCE),
            typed("State of Charge", "PERCENTAGE_UINT8"),
            typed("State of Health", "PERCENTAGE_UINT8"),
            typed("Time Remaining", "TIME_UFIX16_MIN").desc("Time remaining at current rate of discharge"),
            typed("Ripple Voltage", "VOLTAGE_UFIX16_10MV"),
            typed("Remaining capacity", "ELECTRIC_CHARGE_UFIX16_AH"),
        ],
    )
    .priority(6)
    .interval(1500),
    PgnSpec::new(
        "Charger Status",
        127507,
        Transport::Fast,
        &[
            uint8("Instance"),
            uint8("Battery Instance"),
            lookup("Operating State", 4, &CHARGER_STATE),
            lookup("Charge Mode", 4, &CHARGER_MODE),
            lookup("Enabled", 2, &OFF_ON),
            lookup("Equalization Pending", 2, &OFF_ON),
            reserved(4),
            typed("Equalization Time Remaining", "TIME_UFIX16_S"),
        ],
    )
    .priority(6)
    .interval(1500),
    PgnSpec::new(
        "Battery Status",
        127508,
        Transport::Single,
        &[
            instance(),
            typed("Voltage", "VOLTAGE_FIX16_10MV"),
            typed("Current", "CURRENT_FIX16_DA"),
            typed("Temperature", "TEMPERATURE"),
            sid(),
        ],
    )
    .priority(6)
    .interval(1500),
    PgnSpec::new(
        "Inverter Status",
        127509,
        Transport::Fast,
        &[
            instance(),
            uint8("AC Instance"),
            uint8("DC Instance"),
            lookup("Operating State", 4, &INVERTER_STATE),
            lookup("Inverter Enable", 2, &OFF_ON),
            reserved(2),
        ],
    )
    .priority(6)
    .interval(1500)
    .explanation(
        "The payload is 4 bytes, yet devices send it as a fast-packet. Whether it is reassembled as such is a \
         reassembly setting.",
    ),
    PgnSpec::new(
        "Battery Configuration Status",
        127513,
        Transport::Fast,
        &[
            instance(),
            lookup("Battery Type", 4, &BATTERY_TYPE),
            lookup("Supports Equalization", 2, &YES_NO),
            reserved(2),
            lookup("Nominal Voltage", 4, &BATTERY_VOLTAGE),
            lookup("Chemistry", 4, &BATTERY_CHEMISTRY),
            typed("Capacity", "ELECTRIC_CHARGE_UFIX16_AH"),
            typed("Temperature Coefficient", "PERCENTAGE_INT8"),
            typed("Peukert Exponent", "PEUKERT_EXPONENT"),
            typed("Charge Efficiency Factor", "PERCENTAGE_INT8"),
        ],
    )
    .priority(6)
    .interval(2500),
    PgnSpec::new(
        "AC Input Status",
        127503,
        Transport::Fast,
        &[
            simple("AC Instance", 8),
            simple("Number of Lines", 8),
            lookup("Line", 2, &AC_LINE),
            lookup("Acceptability", 2, &ACCEPTABILITY),
            reserved(4),
            typed("Voltage", "VOLTAGE_UFIX16_10MV"),
            typed("Current", "CURRENT_UFIX16_DA"),
            number("Frequency", 16, 0.01).unit("Hz"),
            typed("Breaker Size", "CURRENT_UFIX16_DA"),
            typed("Real Power", "POWER_UINT32"),
            typed("Reactive Power", "POWER_UINT32_VAR"),
            typed("Power Factor", "POWER_FACTOR_UFIX8"),
        ],
    )
    .repeating_to_end(10, 3),
    PgnSpec::new(
        "AC Output Status",
        127504,
        Transport::Fast,
        &[
            simple("AC Instance", 8),
            simple("Number of Lines", 8),
            lookup("Line", 2, &AC_LINE),
            lookup("Waveform", 3, &WAVEFORM),
            reserved(3),
            typed("Voltage", "VOLTAGE_UFIX16_10MV"),
            typed("Current", "CURRENT_UFIX16_DA"),
            number("Frequency", 16, 0.01).unit("Hz"),
            typed("Breaker Size", "CURRENT_UFIX16_DA"),
            typed("Real Power", "POWER_UINT32"),
            typed("Reactive Power", "POWER_UINT32_VAR"),
            typed("Power Factor", "POWER_FACTOR_UFIX8"),
        ],
    )
    .repeating_to_end(10, 3),
    PgnSpec::new(
        "Charger Configuration Status",
        127510,
        Transport::Fast,
        &[
            simple("Charger Instance", 8),
            simple("Battery Instance", 8),
            simple("Charger Enable/Disable", 2),
            reserved(6),
            typed("Charge Current Limit", "CURRENT_UFIX16_DA"),
            simple("Charging Algorithm", 8),
            simple("Charger Mode", 8),
            typed("Estimated Temperature", "TEMPERATURE").desc("When no sensor present"),
            simple("Equalize One Time Enable/Disable", 4),
            simple("Over Charge Enable/Disable", 4),
            simple("Equalize Time", 16),
        ],
    ),
    PgnSpec::new(
        "Inverter Configuration Status",
        127511,
        Transport::Single,
        &[
            simple("Inverter Instance", 8),
            simple("AC Instance", 8),
            simple("DC Instance", 8),
            simple("Inverter Enable/Disable", 2),
            simple("Inverter Mode", 8),
            simple("Load Sense Enable/Disable", 8),
            simple("Load Sense Power Threshold", 8),
            simple("Load Sense Interval", 8),
        ],
    ),
    PgnSpec::new(
        "AGS Configuration Status",
        127512,
        Transport::Single,
        &[
            simple("AGS Instance", 8),
            simple("Generator Instance", 8),
            simple("AGS Mode", 8),
        ],
    ),
    PgnSpec::new(
        "AGS Status",
        127514,
        Transport::Single,
        &[
            simple("AGS Instance", 8),
            simple("Generator Instance", 8),
            simple("AGS Operating State", 8),
            simple("Generator State", 8),
            simple("Generator On Reason", 8),
            simple("Generator Off Reason", 8),
        ],
    ),
];
