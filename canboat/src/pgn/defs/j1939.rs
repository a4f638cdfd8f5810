//! SAE J1939 engine and generator set messages seen on mixed NMEA 2000 / J1939 networks

use crate::lookup::*;
use crate::pgn::builder::*;
use crate::pgn::Transport;

const fn percent_offset(name: &'static str) -> FieldSpec {
    simple(name, 8).offset(-125).unit("%")
}

const fn line_line(name: &'static str) -> FieldSpec {
    typed(name, "VOLTAGE_UFIX16_V")
}

const fn frequency(name: &'static str) -> FieldSpec {
    typed(name, "FREQUENCY_UFIX16").resolution(1.0 / 128.0)
}

const fn temperature_fine(name: &'static str) -> FieldSpec {
    typed(name, "TEMPERATURE").resolution(0.03125)
}

const BUS_BASIC_AC: &[FieldSpec] = &[
    line_line("Line-Line AC RMS Voltage"),
    line_line("Line-Neutral AC RMS Voltage"),
    frequency("AC Frequency"),
    reserved(16),
];

const BASIC_AC: &[FieldSpec] = &[
    line_line("Line-Line AC RMS Voltage"),
    line_line("Line-Neutral AC RMS Voltage"),
    frequency("AC Frequency"),
    typed("AC RMS Current", "CURRENT_UFIX16_A"),
];

const AC_POWER: &[FieldSpec] = &[
    typed("Real Power", "POWER_FIX32_OFFSET"),
    typed("Apparent Power", "POWER_FIX32_VA_OFFSET"),
];

const AC_REACTIVE_POWER: &[FieldSpec] = &[
    typed("Reactive Power", "POWER_FIX32_VAR_OFFSET"),
    typed("Power Factor", "POWER_FACTOR_UFIX16"),
    lookup("Power Factor Lagging", 2, &POWER_FACTOR),
    reserved(14),
];

const AC_ENERGY: &[FieldSpec] = &[
    typed("Total Energy Export", "ENERGY_UINT32"),
    typed("Total Energy Import", "ENERGY_UINT32"),
];

const fn ac(description: &'static str, pgn: u32, fields: &'static [FieldSpec]) -> PgnSpec {
    PgnSpec::new(description, pgn, Transport::Single, fields).priority(3).interval(100)
}

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "Electronic Engine Controller 2",
        61443,
        Transport::Single,
        &[
            simple("Accelerator Pedal 1 Low Idle Switch", 2),
            simple("Accelerator Pedal Kickdown Switch", 2),
            simple("Road Speed Limit Status", 2),
            simple("Accelerator Pedal 2 Low Idle Switch", 2),
            typed("Accelerator Pedal Position 1", "PERCENTAGE_UINT8_HIGHRES"),
            typed("Engine Percent Load At Current Speed", "PERCENTAGE_UINT8"),
            typed("Remote Accelerator Pedal Position", "PERCENTAGE_UINT8_HIGHRES"),
            typed("Accelerator Pedal Position 2", "PERCENTAGE_UINT8_HIGHRES"),
            simple("Vehicle Acceleration Rate Limit Status", 2),
            reserved(6),
            typed("Actual Maximum Available Engine Percent Torque", "PERCENTAGE_UINT8_HIGHRES"),
            reserved(8),
        ],
    )
    .priority(3)
    .interval(50),
    PgnSpec::new(
        "Electronic Engine Controller 1",
        61444,
        Transport::Single,
        &[
            simple("Engine Torque Mode", 4),
            simple("Actual Engine Percent Torque High Resolution", 4).resolution(0.125).unit("%"),
            percent_offset("Driver's Demand Engine Percent Torque"),
            percent_offset("Actual Engine Percent Torque"),
            typed("Engine Speed", "ROTATION_UFIX16_RPM_HIGHRES"),
            uint8("Source Address of Controlling Device"),
            simple("Engine Starter Mode", 4),
            reserved(4),
            percent_offset("Engine Demand Percent Torque"),
        ],
    )
    .priority(3)
    .interval(20),
    ac("Bus #1 Phase C Basic AC Quantities", 65001, BUS_BASIC_AC),
    ac("Bus #1 Phase B Basic AC Quantities", 65002, BUS_BASIC_AC),
    ac("Bus #1 Phase A Basic AC Quantities", 65003, BUS_BASIC_AC),
    ac("Bus #1 Average Basic AC Quantities", 65004, BUS_BASIC_AC),
    ac("Utility Total AC Energy", 65005, AC_ENERGY),
    ac("Utility Phase C AC Reactive Power", 65006, AC_REACTIVE_POWER),
    ac("Utility Phase C AC Power", 65007, AC_POWER),
    ac("Utility Phase C Basic AC Quantities", 65008, BASIC_AC),
    ac("Utility Phase B AC Reactive Power", 65009, AC_REACTIVE_POWER),
    ac("Utility Phase B AC Power", 65010, AC_POWER),
    ac("Utility Phase B Basic AC Quantities", 65011, BASIC_AC),
    ac("Utility Phase A AC Reactive Power", 65012, AC_REACTIVE_POWER),
    ac("Utility Phase A AC Power", 65013, AC_POWER),
    ac("Utility Phase A Basic AC Quantities", 65014, BASIC_AC),
    ac("Utility Total AC Reactive Power", 65015, AC_REACTIVE_POWER),
    ac("Utility Total AC Power", 65016, AC_POWER),
    ac("Utility Average Basic AC Quantities", 65017, BASIC_AC),
    ac("Generator Total AC Energy", 65018, AC_ENERGY),
    ac("Generator Phase C AC Reactive Power", 65019, AC_REACTIVE_POWER),
    ac("Generator Phase C AC Power", 65020, AC_POWER),
    ac("Generator Phase C Basic AC Quantities", 65021, BASIC_AC),
    ac("Generator Phase B AC Reactive Power", 65022, AC_REACTIVE_POWER),
    ac("Generator Phase B AC Power", 65023, AC_POWER),
    ac("Generator Phase B Basic AC Quantities", 65024, BASIC_AC),
    ac("Generator Phase A AC Reactive Power", 65025, AC_REACTIVE_POWER),
    ac("Generator Phase A AC Power", 65026, AC_POWER),
    ac("Generator Phase A Basic AC Quantities", 65027, BASIC_AC),
    ac("Generator Total AC Reactive Power", 65028, AC_REACTIVE_POWER),
    ac("Generator Total AC Power", 65029, AC_POWER),
    ac("Generator Average Basic AC Quantities", 65030, BASIC_AC),
    PgnSpec::new(
        "Active Diagnostic Trouble Codes",
        65226,
        Transport::IsoTp,
        &[
            simple("Protect Lamp Status", 2),
            simple("Amber Warning Lamp Status", 2),
            simple("Red Stop Lamp Status", 2),
            simple("Malfunction Indicator Lamp Status", 2),
            simple("Flash Protect Lamp", 2),
            simple("Flash Amber Warning Lamp", 2),
            simple("Flash Red Stop Lamp", 2),
            simple("Flash Malfunction Indicator Lamp", 2),
            simple("SPN", 19).desc("Suspect Parameter Number"),
            simple("FMI", 5).desc("Failure Mode Identifier"),
            simple("Occurrence Count", 7),
            simple("SPN Conversion Method", 1),
        ],
    )
    .priority(6)
    .interval(1000)
    .repeating_to_end(4, 9)
    .explanation("J1939 DM1: one lamp status header followed by a trouble code per active fault."),
    PgnSpec::new(
        "Engine Temperature 1",
        65262,
        Transport::Single,
        &[
            typed("Engine Coolant Temperature", "TEMPERATURE_UINT8_OFFSET"),
            typed("Engine Fuel 1 Temperature 1", "TEMPERATURE_UINT8_OFFSET"),
            temperature_fine("Engine Oil Temperature 1"),
            temperature_fine("Engine Turbocharger 1 Oil Temperature"),
            typed("Engine Intercooler Temperature", "TEMPERATURE_UINT8_OFFSET"),
            typed("Engine Charge Air Cooler Thermostat Opening", "PERCENTAGE_UINT8_HIGHRES"),
        ],
    )
    .priority(6)
    .interval(1000),
    PgnSpec::new(
        "Fuel Economy (Liquid)",
        65266,
        Transport::Single,
        &[
            typed("Engine Fuel Rate", "VOLUMETRIC_FLOW").resolution(0.05),
            simple("Engine Instantaneous Fuel Economy", 16).resolution(1.0 / 512.0).unit("km/L"),
            simple("Engine Average Fuel Economy", 16).resolution(1.0 / 512.0).unit("km/L"),
            typed("Engine Throttle Valve 1 Position 1", "PERCENTAGE_UINT8_HIGHRES"),
            typed("Engine Throttle Valve 2 Position", "PERCENTAGE_UINT8_HIGHRES"),
        ],
    )
    .priority(6)
    .interval(100),
    PgnSpec::new(
        "Ambient Conditions",
        65269,
        Transport::Single,
        &[
            typed("Barometric Pressure", "PRESSURE_UINT8_KPA"),
            temperature_fine("Cab Interior Temperature"),
            temperature_fine("Ambient Air Temperature"),
            typed("Engine Intake 1 Air Temperature", "TEMPERATURE_UINT8_OFFSET"),
            temperature_fine("Road Surface Temperature"),
        ],
    )
    .priority(6)
    .interval(1000),
    PgnSpec::new(
        "Inlet/Exhaust Conditions 1",
        65270,
        Transport::Single,
        &[
            typed("Engine Diesel Particulate Filter Inlet Pressure", "PRESSURE_UINT8_KPA"),
            typed("Engine Intake Manifold #1 Pressure", "PRESSURE_UINT8_2KPA"),
            typed("Engine Intake Manifold 1 Temperature", "TEMPERATURE_UINT8_OFFSET"),
            typed("Engine Air Inlet Pressure", "PRESSURE_UINT8_2KPA"),
            typed("Engine Air Filter 1 Differential Pressure", "PRESSURE_UINT8_KPA").resolution(50.0),
            temperature_fine("Engine Exhaust Temperature"),
            typed("Engine Coolant Filter Differential Pressure", "PRESSURE_UINT8_KPA"),
        ],
    )
    .priority(6)
    .interval(500),
    PgnSpec::new(
        "Vehicle Electrical Power 1",
        65271,
        Transport::Single,
        &[
            simple("Net Battery Current", 8).offset(-125).unit("A"),
            typed("Alternator Current", "CURRENT_UFIX8_A"),
            typed("Charging System Potential", "VOLTAGE_UFIX16_50MV"),
            typed("Battery Potential / Power Input 1", "VOLTAGE_UFIX16_50MV"),
            typed("Keyswitch Battery Potential", "VOLTAGE_UFIX16_50MV"),
        ],
    )
    .priority(6)
    .interval(1000),
];
