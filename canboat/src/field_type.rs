//! Field type registry
//!
//! Every PGN field refers to one of the field types below. Types form single-parent
//! chains (`UINT16` -> `UNSIGNED_INTEGER` -> `NUMBER`); [`flatten`] resolves each
//! chain once into a self-contained [`FieldType`] record so that decoding never
//! has to walk the chain.

use tracing::warn;

use crate::error::N2kError;
use crate::physical::{find_physical_quantity, PhysicalQuantity};

/// Rendering strategy selected by a field type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterKind {
    Number,
    Float,
    Decimal,
    Lookup,
    BitLookup,
    LatLon,
    Date,
    Time,
    Mmsi,
    StringFix,
    StringVar,
    StringLz,
    StringLau,
    Binary,
    Reserved,
    Spare,
    Variable,
}

impl PrinterKind {
    /// Printers that produce numeric values and honour resolution and offset
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PrinterKind::Number
                | PrinterKind::Lookup
                | PrinterKind::BitLookup
                | PrinterKind::LatLon
                | PrinterKind::Date
                | PrinterKind::Time
                | PrinterKind::Mmsi
        )
    }
}

/// Width of a field type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSize {
    Bits(u32),
    /// The length is only known while decoding (length prefixed strings, trailing blobs)
    Variable,
    /// Abstract type: the field declaring it supplies the width
    PerField,
}

/// Static description of a field type, possibly incomplete until its base chain is resolved
#[derive(Debug, Clone, Copy)]
pub struct FieldTypeDef {
    pub name: &'static str,
    pub description: &'static str,
    pub base: Option<&'static str>,
    pub size: Option<FieldSize>,
    pub signed: Option<bool>,
    pub resolution: Option<f64>,
    pub offset: Option<i64>,
    pub unit: Option<&'static str>,
    pub physical: Option<&'static str>,
    pub printer: Option<PrinterKind>,
}

impl FieldTypeDef {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            base: None,
            size: None,
            signed: None,
            resolution: None,
            offset: None,
            unit: None,
            physical: None,
            printer: None,
        }
    }

    pub const fn base(mut self, base: &'static str) -> Self {
        self.base = Some(base);
        self
    }

    pub const fn bits(mut self, bits: u32) -> Self {
        self.size = Some(FieldSize::Bits(bits));
        self
    }

    pub const fn variable(mut self) -> Self {
        self.size = Some(FieldSize::Variable);
        self
    }

    pub const fn per_field(mut self) -> Self {
        self.size = Some(FieldSize::PerField);
        self
    }

    pub const fn signed(mut self) -> Self {
        self.signed = Some(true);
        self
    }

    pub const fn unsigned(mut self) -> Self {
        self.signed = Some(false);
        self
    }

    pub const fn resolution(mut self, resolution: f64) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub const fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub const fn unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    pub const fn physical(mut self, physical: &'static str) -> Self {
        self.physical = Some(physical);
        self
    }

    pub const fn printer(mut self, printer: PrinterKind) -> Self {
        self.printer = Some(printer);
        self
    }
}

/// A field type with its base chain flattened
#[derive(Debug, Clone)]
pub struct FieldType {
    pub name: &'static str,
    pub description: &'static str,
    pub size: FieldSize,
    pub signed: bool,
    pub resolution: f64,
    /// Excess-K offset in raw units
    pub offset: i64,
    pub unit: Option<&'static str>,
    pub physical: Option<&'static PhysicalQuantity>,
    pub printer: PrinterKind,
    /// Numeric range, only for fixed-width numeric types
    pub range: Option<(f64, f64)>,
}

/// Smallest and largest value a number field can carry, leaving room for the
/// "not present" and "error" sentinels at the top of the raw range
pub fn numeric_range(bits: u32, signed: bool, resolution: f64, offset: i64) -> (f64, f64) {
    let n = bits.min(64) as i32;
    let offset = offset as f64;
    if signed {
        let half = 2f64.powi(n - 1);
        ((-half + offset) * resolution, (half - 2.0 + offset) * resolution)
    } else {
        let full = 2f64.powi(n);
        let top = match bits {
            0 | 1 => full - 1.0,
            2 | 3 => full - 2.0,
            _ => full - 3.0,
        };
        (offset * resolution, (top + offset) * resolution)
    }
}

struct Resolved {
    size: Option<FieldSize>,
    signed: Option<bool>,
    resolution: Option<f64>,
    offset: Option<i64>,
    unit: Option<&'static str>,
    physical: Option<&'static str>,
    printer: Option<PrinterKind>,
}

fn resolve_chain(defs: &[FieldTypeDef], def: &FieldTypeDef) -> Result<Resolved, N2kError> {
    let mut resolved = Resolved {
        size: def.size,
        signed: def.signed,
        resolution: def.resolution,
        offset: def.offset,
        unit: def.unit,
        physical: def.physical,
        printer: def.printer,
    };

    let mut seen = vec![def.name];
    let mut next = def.base;
    while let Some(base_name) = next {
        if seen.contains(&base_name) {
            return Err(N2kError::Registry(format!(
                "field type {} has a circular base chain through {}",
                def.name, base_name
            )));
        }
        seen.push(base_name);

        let base = defs
            .iter()
            .find(|d| d.name == base_name)
            .ok_or_else(|| N2kError::Registry(format!("field type {} has unknown base {}", def.name, base_name)))?;

        resolved.size = resolved.size.or(base.size);
        resolved.signed = resolved.signed.or(base.signed);
        resolved.resolution = resolved.resolution.or(base.resolution);
        resolved.offset = resolved.offset.or(base.offset);
        resolved.unit = resolved.unit.or(base.unit);
        resolved.physical = resolved.physical.or(base.physical);
        resolved.printer = resolved.printer.or(base.printer);
        next = base.base;
    }
    Ok(resolved)
}

/// Resolve every base chain of `defs` into self-contained records
///
/// Duplicate names are reported and only their first occurrence is kept.
pub fn flatten(defs: &[FieldTypeDef]) -> Result<Vec<FieldType>, N2kError> {
    let mut out: Vec<FieldType> = Vec::with_capacity(defs.len());

    for def in defs {
        if out.iter().any(|ft| ft.name == def.name) {
            warn!("Duplicate field type {} ignored", def.name);
            continue;
        }

        let r = resolve_chain(defs, def)?;
        let printer = r
            .printer
            .ok_or_else(|| N2kError::Registry(format!("field type {} has no printer", def.name)))?;
        let size = r.size.unwrap_or(FieldSize::PerField);
        let signed = r.signed.unwrap_or(false);
        let resolution = r.resolution.unwrap_or(1.0);
        let offset = r.offset.unwrap_or(0);

        if resolution <= 0.0 {
            return Err(N2kError::Registry(format!(
                "field type {} has non-positive resolution {}",
                def.name, resolution
            )));
        }

        let physical = match r.physical {
            Some(name) => Some(find_physical_quantity(name).ok_or_else(|| {
                N2kError::Registry(format!("field type {} refers to unknown quantity {}", def.name, name))
            })?),
            None => None,
        };
        if let (Some(pq), Some(unit)) = (physical, r.unit) {
            if pq.abbreviation != unit {
                return Err(N2kError::Registry(format!(
                    "field type {} unit {} conflicts with {} ({})",
                    def.name, unit, pq.name, pq.abbreviation
                )));
            }
        }

        let range = match size {
            FieldSize::Bits(bits) if printer.is_numeric() => Some(numeric_range(bits, signed, resolution, offset)),
            _ => None,
        };

        out.push(FieldType {
            name: def.name,
            description: def.description,
            size,
            signed,
            resolution,
            offset,
            unit: r.unit,
            physical,
            printer,
            range,
        });
    }
    Ok(out)
}

use PrinterKind as P;

const fn ft(name: &'static str, description: &'static str) -> FieldTypeDef {
    FieldTypeDef::new(name, description)
}

/// The historic list carried `LENGTH_UFIX8_DAM`, `LENGTH_UFIX32_CM` and
/// `POWER_FIX32_OFFSET` twice; each appears once here.
pub static FIELD_TYPES: &[FieldTypeDef] = &[
    // Numbers
    ft("NUMBER", "Number").per_field().printer(P::Number),
    ft("INTEGER", "Integral number").signed().resolution(1.0).base("NUMBER"),
    ft("UNSIGNED_INTEGER", "Unsigned integral number").unsigned().resolution(1.0).base("NUMBER"),
    ft("INT8", "8 bit signed integer").bits(8).signed().base("INTEGER"),
    ft("UINT8", "8 bit unsigned integer").bits(8).unsigned().base("UNSIGNED_INTEGER"),
    ft("INT16", "16 bit signed integer").bits(16).signed().base("INTEGER"),
    ft("UINT16", "16 bit unsigned integer").bits(16).unsigned().base("UNSIGNED_INTEGER"),
    ft("UINT24", "24 bit unsigned integer").bits(24).unsigned().base("UNSIGNED_INTEGER"),
    ft("INT32", "32 bit signed integer").bits(32).signed().base("INTEGER"),
    ft("UINT32", "32 bit unsigned integer").bits(32).unsigned().base("UNSIGNED_INTEGER"),
    ft("INT64", "64 bit signed integer").bits(64).signed().base("INTEGER"),
    ft("UINT64", "64 bit unsigned integer").bits(64).unsigned().base("UNSIGNED_INTEGER"),
    ft("UNSIGNED_FIXED_POINT_NUMBER", "An unsigned numeric value where the LSB does not encode the integer value 1")
        .unsigned()
        .base("NUMBER"),
    ft("SIGNED_FIXED_POINT_NUMBER", "A signed numeric value where the LSB does not encode the integer value 1")
        .signed()
        .base("NUMBER"),
    ft("FIX8", "8 bit signed fixed point number").bits(8).base("SIGNED_FIXED_POINT_NUMBER"),
    ft("UFIX8", "8 bit unsigned fixed point number").bits(8).base("UNSIGNED_FIXED_POINT_NUMBER"),
    ft("FIX16", "16 bit signed fixed point number").bits(16).base("SIGNED_FIXED_POINT_NUMBER"),
    ft("UFIX16", "16 bit unsigned fixed point number").bits(16).base("UNSIGNED_FIXED_POINT_NUMBER"),
    ft("FIX24", "24 bit signed fixed point number").bits(24).base("SIGNED_FIXED_POINT_NUMBER"),
    ft("UFIX24", "24 bit unsigned fixed point number").bits(24).base("UNSIGNED_FIXED_POINT_NUMBER"),
    ft("FIX32", "32 bit signed fixed point number").bits(32).base("SIGNED_FIXED_POINT_NUMBER"),
    ft("UFIX32", "32 bit unsigned fixed point number").bits(32).base("UNSIGNED_FIXED_POINT_NUMBER"),
    ft("FIX64", "64 bit signed fixed point number").bits(64).base("SIGNED_FIXED_POINT_NUMBER"),
    ft("UFIX64", "64 bit unsigned fixed point number").bits(64).base("UNSIGNED_FIXED_POINT_NUMBER"),
    ft("FLOAT", "32 bit IEEE-754 floating point number").bits(32).signed().printer(P::Float),
    ft("DECIMAL", "An unsigned numeric value represented with 2 decimal digits per byte")
        .per_field()
        .unsigned()
        .printer(P::Decimal),
    ft("LOOKUP", "Number value where each value encodes for a distinct meaning")
        .printer(P::Lookup)
        .base("UNSIGNED_INTEGER"),
    ft("BITLOOKUP", "Number value where each bit value encodes for a distinct meaning")
        .printer(P::BitLookup)
        .base("UNSIGNED_INTEGER"),
    ft("MANUFACTURER", "Manufacturer").bits(11).base("LOOKUP"),
    ft("INDUSTRY", "Industry").bits(3).base("LOOKUP"),
    ft("VERSION", "Version").resolution(0.001).base("UFIX16"),
    // Specific typed numbers
    ft("DILUTION_OF_PRECISION_FIX16", "Dilution of precision").resolution(0.01).base("FIX16"),
    ft("DILUTION_OF_PRECISION_UFIX16", "Dilution of precision").resolution(0.01).base("UFIX16"),
    ft("SIGNALTONOISERATIO_FIX16", "Signal-to-noise ratio")
        .resolution(0.01)
        .unit("dB")
        .physical("SIGNAL_TO_NOISE_RATIO")
        .base("FIX16"),
    ft("SIGNALTONOISERATIO_UFIX16", "Signal-to-noise ratio")
        .resolution(0.01)
        .unit("dB")
        .physical("SIGNAL_TO_NOISE_RATIO")
        .base("UFIX16"),
    ft("ANGLE_FIX16", "Angular rotation").resolution(0.0001).unit("rad").physical("ANGLE").base("FIX16"),
    ft("ANGLE_FIX16_DDEG", "Angular rotation").resolution(0.1).unit("deg").base("FIX16"),
    ft("ANGLE_UFIX16", "Angular rotation").resolution(0.0001).unit("rad").physical("ANGLE").base("UFIX16"),
    ft("GEO_FIX32", "Geographical latitude or longitude")
        .resolution(1.0e-7)
        .unit("deg")
        .printer(P::LatLon)
        .base("FIX32"),
    ft("GEO_FIX64", "Geographical latitude or longitude, high precision")
        .resolution(1.0e-16)
        .unit("deg")
        .printer(P::LatLon)
        .base("FIX64"),
    ft("LENGTH_UFIX8_DAM", "Length, byte, unsigned decameters").resolution(10.0).unit("m").physical("LENGTH").base("UFIX8"),
    ft("LENGTH_UFIX16_CM", "Length, unsigned centimeters").resolution(0.01).unit("m").physical("LENGTH").base("UFIX16"),
    ft("LENGTH_UFIX16_DM", "Length, unsigned decimeters").resolution(0.1).unit("m").physical("LENGTH").base("UFIX16"),
    ft("LENGTH_UFIX32_MM", "Length, high range, unsigned millimeters").resolution(0.001).unit("m").physical("LENGTH").base("UFIX32"),
    ft("LENGTH_UFIX32_CM", "Length, high range, unsigned centimeters").resolution(0.01).unit("m").physical("LENGTH").base("UFIX32"),
    ft("LENGTH_UFIX32_M", "Length, high range, meters").resolution(1.0).unit("m").physical("LENGTH").base("UFIX32"),
    ft("TEMPERATURE", "Temperature").resolution(0.01).unit("K").physical("TEMPERATURE").base("UFIX16"),
    ft("TEMPERATURE_HIGH", "Temperature, high range").resolution(0.1).base("TEMPERATURE"),
    ft("TEMPERATURE_UFIX24", "Temperature, high precision").bits(24).resolution(0.001).base("TEMPERATURE"),
    ft("TEMPERATURE_UINT8_OFFSET", "Temperature, 8 bit with a 233 K offset")
        .bits(8)
        .resolution(1.0)
        .offset(233)
        .base("TEMPERATURE"),
    ft("TEMPERATURE_DELTA_FIX16", "Temperature difference").resolution(0.001).unit("K").physical("TEMPERATURE").base("FIX16"),
    ft("VOLUMETRIC_FLOW", "Volumetric flow").resolution(0.1).unit("L/h").physical("VOLUMETRIC_FLOW").base("FIX16"),
    ft("CONCENTRATION_UINT16_PPM", "Concentration of one substance in another")
        .resolution(1.0)
        .unit("ppm")
        .physical("CONCENTRATION")
        .base("UINT16"),
    ft("VOLUME_UFIX16_L", "Volume").resolution(1.0).unit("L").physical("VOLUME").base("UFIX16"),
    ft("VOLUME_UFIX32_DL", "Volume").resolution(0.1).unit("L").physical("VOLUME").base("UFIX32"),
    // Time
    ft("TIME", "Time").resolution(0.0001).unit("s").physical("TIME").printer(P::Time).base("UFIX32"),
    ft("SHORT_TIME", "Time, low range").resolution(0.0001).unit("s").physical("DURATION").printer(P::Time).base("UFIX16"),
    ft("TIME_UFIX8_5MS", "Time delta, 8 bits with 5 millisecond precision")
        .resolution(0.005)
        .unit("s")
        .physical("DURATION")
        .printer(P::Time)
        .base("UFIX8"),
    ft("TIME_UFIX8_P12S", "Time delta, 8 bits with 2^12 second precision")
        .resolution(4096.0)
        .unit("s")
        .physical("DURATION")
        .printer(P::Time)
        .base("UFIX8"),
    ft("TIME_UFIX16_S", "Time delta, 16 bits with second precision")
        .resolution(1.0)
        .unit("s")
        .physical("DURATION")
        .printer(P::Time)
        .base("UFIX16"),
    ft("TIME_UFIX16_MS", "Time delta, 16 bits with millisecond precision")
        .resolution(0.001)
        .unit("s")
        .physical("DURATION")
        .printer(P::Time)
        .base("UFIX16"),
    ft("TIME_UFIX16_CS", "Time delta, 16 bits with centisecond precision")
        .resolution(0.01)
        .unit("s")
        .physical("DURATION")
        .printer(P::Time)
        .base("UFIX16"),
    ft("TIME_UFIX16_MIN", "Time delta, 16 bits with minute precision")
        .resolution(60.0)
        .unit("s")
        .physical("DURATION")
        .printer(P::Time)
        .base("UFIX16"),
    ft("TIME_UFIX24_MS", "Time delta, 24 bits with millisecond precision")
        .resolution(0.001)
        .unit("s")
        .physical("DURATION")
        .printer(P::Time)
        .base("UFIX24"),
    ft("TIME_UFIX32_S", "Time delta, 32 bits with second precision")
        .resolution(1.0)
        .unit("s")
        .physical("DURATION")
        .printer(P::Time)
        .base("UFIX32"),
    ft("TIME_UFIX32_MS", "Time delta, 32 bits with millisecond precision")
        .resolution(0.001)
        .unit("s")
        .physical("DURATION")
        .printer(P::Time)
        .base("UFIX32"),
    ft("TIME_FIX32_MS", "Time delta").resolution(0.001).unit("s").physical("DURATION").printer(P::Time).base("FIX32"),
    ft("TIME_FIX16_5CS", "Time delta, 5 centisecond resolution")
        .resolution(0.05)
        .unit("s")
        .physical("DURATION")
        .printer(P::Time)
        .base("FIX16"),
    ft("TIME_FIX16_MIN", "Time delta, minute resolution")
        .resolution(60.0)
        .unit("s")
        .physical("DURATION")
        .printer(P::Time)
        .base("FIX16"),
    ft("DATE", "Date").unit("d").physical("DATE").printer(P::Date).base("UINT16"),
    // Electrical
    ft("VOLTAGE_UFIX16_V", "Voltage").resolution(1.0).unit("V").physical("POTENTIAL_DIFFERENCE").base("UFIX16"),
    ft("VOLTAGE_UFIX16_10MV", "Voltage").resolution(0.01).unit("V").physical("POTENTIAL_DIFFERENCE").base("UFIX16"),
    ft("VOLTAGE_UFIX16_50MV", "Voltage").resolution(0.05).unit("V").physical("POTENTIAL_DIFFERENCE").base("UFIX16"),
    ft("VOLTAGE_UFIX16_100MV", "Voltage").resolution(0.1).unit("V").physical("POTENTIAL_DIFFERENCE").base("UFIX16"),
    ft("VOLTAGE_UFIX8_200MV", "Voltage").resolution(0.2).unit("V").physical("POTENTIAL_DIFFERENCE").base("UFIX8"),
    ft("VOLTAGE_FIX16_10MV", "Voltage, signed").resolution(0.01).unit("V").physical("POTENTIAL_DIFFERENCE").base("FIX16"),
    ft("CURRENT", "Electrical current")
        .unsigned()
        .unit("A")
        .physical("ELECTRICAL_CURRENT")
        .base("UNSIGNED_FIXED_POINT_NUMBER"),
    ft("CURRENT_SIGNED", "Electrical current, signed")
        .unit("A")
        .physical("ELECTRICAL_CURRENT")
        .base("SIGNED_FIXED_POINT_NUMBER"),
    ft("CURRENT_UFIX8_A", "Electrical current").resolution(1.0).unit("A").physical("ELECTRICAL_CURRENT").base("UFIX8"),
    ft("CURRENT_UFIX16_A", "Electrical current").resolution(1.0).unit("A").physical("ELECTRICAL_CURRENT").base("UFIX16"),
    ft("CURRENT_UFIX16_DA", "Electrical current").resolution(0.1).unit("A").physical("ELECTRICAL_CURRENT").base("UFIX16"),
    ft("CURRENT_FIX16_DA", "Electrical current").resolution(0.1).unit("A").physical("ELECTRICAL_CURRENT").base("FIX16"),
    ft("CURRENT_FIX24_CA", "Electrical current").resolution(0.01).unit("A").physical("ELECTRICAL_CURRENT").base("FIX24"),
    ft("ELECTRIC_CHARGE_UFIX16_AH", "Electrical charge")
        .resolution(3600.0)
        .unit("C")
        .physical("ELECTRICAL_CHARGE")
        .base("UFIX16"),
    ft("PEUKERT_EXPONENT", "Peukert exponent").resolution(0.002).offset(500).base("UFIX8"),
    ft("ENERGY_UINT32", "Electrical energy consumption").unit("kWh").physical("ELECTRICAL_ENERGY").base("UINT32"),
    ft("POWER_FIX32_OFFSET", "Electrical power, excess-K encoded")
        .unsigned()
        .offset(-2_000_000_000)
        .unit("W")
        .physical("ELECTRICAL_POWER")
        .base("UINT32"),
    ft("POWER_FIX32_VA_OFFSET", "Electrical apparent power, excess-K encoded")
        .unsigned()
        .offset(-2_000_000_000)
        .unit("VA")
        .physical("ELECTRICAL_APPARENT_POWER")
        .base("UINT32"),
    ft("POWER_FIX32_VAR_OFFSET", "Electrical reactive power, excess-K encoded")
        .unsigned()
        .offset(-2_000_000_000)
        .unit("VAR")
        .physical("ELECTRICAL_REACTIVE_POWER")
        .base("UINT32"),
    ft("POWER_UINT16", "Electrical power, either DC or AC Real power, in Watts")
        .unit("W")
        .physical("ELECTRICAL_POWER")
        .base("UINT16"),
    ft("POWER_UINT16_VAR", "Electrical power, AC reactive")
        .unit("VAR")
        .physical("ELECTRICAL_REACTIVE_POWER")
        .base("UINT16"),
    ft("POWER_INT32", "Electrical power, either DC or AC Real power, in Watts")
        .unit("W")
        .physical("ELECTRICAL_POWER")
        .base("INT32"),
    ft("POWER_UINT32", "Electrical power, DC or AC Real power, in Watts")
        .unit("W")
        .physical("ELECTRICAL_POWER")
        .base("UINT32"),
    ft("POWER_UINT32_VA", "Electrical power, AC apparent power in VA")
        .unit("VA")
        .physical("ELECTRICAL_APPARENT_POWER")
        .base("UINT32"),
    ft("POWER_UINT32_VAR", "Electrical power, AC reactive power in VAR")
        .unit("VAR")
        .physical("ELECTRICAL_REACTIVE_POWER")
        .base("UINT32"),
    ft("POWER_FACTOR_UFIX16", "Power Factor")
        .resolution(1.0 / 16384.0)
        .unit("Cos Phi")
        .physical("POWER_FACTOR")
        .base("UFIX16"),
    ft("POWER_FACTOR_UFIX8", "Power Factor").resolution(0.01).unit("Cos Phi").physical("POWER_FACTOR").base("UFIX8"),
    // Ratios
    ft("PERCENTAGE_UINT8", "Percentage, unsigned").unit("%").base("UINT8"),
    ft("PERCENTAGE_UINT8_HIGHRES", "Percentage, unsigned, 0.4 % steps").resolution(0.4).unit("%").base("UFIX8"),
    ft("PERCENTAGE_INT8", "Percentage").unit("%").base("INT8"),
    ft("PERCENTAGE_FIX16", "Percentage, high resolution").resolution(100.0 / 25000.0).unit("%").base("FIX16"),
    ft("PERCENTAGE_UINT16", "Percentage, unsigned high range").unit("%").base("UINT16"),
    ft("GAIN_FIX16", "Gain").resolution(0.01).base("FIX16"),
    // Rotation
    ft("ROTATION_FIX16", "Rotational speed")
        .resolution(1e-3 / 32.0)
        .unit("rad/s")
        .physical("ANGULAR_VELOCITY")
        .base("FIX16"),
    ft("ROTATION_FIX32", "Rotational speed, high resolution")
        .resolution(1e-6 / 32.0)
        .unit("rad/s")
        .physical("ANGULAR_VELOCITY")
        .base("FIX32"),
    ft("ROTATION_UFIX16_RPM", "Rotational speed, RPM")
        .resolution(0.25)
        .unit("rpm")
        .physical("ROTATIONAL_SPEED")
        .base("UFIX16"),
    ft("ROTATION_UFIX16_RPM_HIGHRES", "Rotational speed, RPM, high resolution")
        .resolution(0.125)
        .unit("rpm")
        .physical("ROTATIONAL_SPEED")
        .base("UFIX16"),
    // Pressure
    ft("PRESSURE_UFIX16_HPA", "Pressure, 16 bit unsigned in hectopascal precision")
        .resolution(100.0)
        .unit("Pa")
        .physical("PRESSURE")
        .base("UFIX16"),
    ft("PRESSURE_UFIX16_KPA", "Pressure, 16 bit unsigned in kilopascal precision")
        .resolution(1000.0)
        .unit("Pa")
        .physical("PRESSURE")
        .base("UFIX16"),
    ft("PRESSURE_UINT8_KPA", "Pressure, 8 bit unsigned in 500 pascal steps")
        .resolution(500.0)
        .unit("Pa")
        .physical("PRESSURE")
        .base("UFIX8"),
    ft("PRESSURE_UINT8_2KPA", "Pressure, 8 bit unsigned in 2 kilopascal steps")
        .resolution(2000.0)
        .unit("Pa")
        .physical("PRESSURE")
        .base("UFIX8"),
    ft("PRESSURE_RATE_FIX16_PA", "Pressure change rate, 16 bit signed in pascal precision")
        .resolution(1.0)
        .unit("Pa/hr")
        .physical("PRESSURE_RATE")
        .base("FIX16"),
    ft("PRESSURE_FIX16_KPA", "Pressure, 16 bit signed in kilopascal precision")
        .resolution(1000.0)
        .unit("Pa")
        .physical("PRESSURE")
        .base("FIX16"),
    ft("PRESSURE_UFIX32_DPA", "Pressure, 32 bit unsigned in decipascal precision")
        .resolution(0.1)
        .unit("Pa")
        .physical("PRESSURE")
        .base("UFIX32"),
    ft("PRESSURE_FIX32_DPA", "Pressure, 32 bit signed in decipascal precision")
        .resolution(0.1)
        .unit("Pa")
        .physical("PRESSURE")
        .base("FIX32"),
    // Frequency
    ft("RADIO_FREQUENCY_UFIX32", "Radio frequency").resolution(10.0).unit("Hz").physical("FREQUENCY").base("UFIX32"),
    ft("FREQUENCY_UFIX16", "Frequency").unit("Hz").physical("FREQUENCY").base("UFIX16"),
    // Speed and distance
    ft("SPEED_FIX16_MM", "Speed, with millimeter precision").resolution(0.001).unit("m/s").physical("SPEED").base("FIX16"),
    ft("SPEED_FIX16_CM", "Speed, with centimeter precision").resolution(0.01).unit("m/s").physical("SPEED").base("FIX16"),
    ft("SPEED_UFIX16_CM", "Speed, unsigned, with centimeter precision").resolution(0.01).unit("m/s").physical("SPEED").base("UFIX16"),
    ft("SPEED_UFIX16_DM", "Speed, unsigned, with decimeter precision").resolution(0.1).unit("m/s").physical("SPEED").base("UFIX16"),
    ft("DISTANCE_FIX16_M", "Distance, with meter precision").resolution(1.0).unit("m").physical("DISTANCE").base("FIX16"),
    ft("DISTANCE_FIX16_CM", "Distance, with centimeter precision").resolution(0.01).unit("m").physical("DISTANCE").base("FIX16"),
    ft("DISTANCE_FIX16_MM", "Distance, with millimeter precision").resolution(0.001).unit("m").physical("DISTANCE").base("FIX16"),
    ft("DISTANCE_FIX32_MM", "Distance, high range, with millimeter precision")
        .resolution(0.001)
        .unit("m")
        .physical("DISTANCE")
        .base("FIX32"),
    ft("DISTANCE_FIX32_CM", "Distance, high range, with centimeter precision")
        .resolution(0.01)
        .unit("m")
        .physical("DISTANCE")
        .base("FIX32"),
    ft("DISTANCE_FIX64", "Distance").resolution(1e-6).unit("m").physical("DISTANCE").base("FIX64"),
    ft("MAGNETIC_FIELD_FIX16", "Magnetic field").resolution(0.01).unit("T").physical("MAGNETIC_FIELD").base("FIX16"),
    ft("ELAPSED", "Elapsed time").unsigned().unit("s").physical("DURATION").base("UNSIGNED_FIXED_POINT_NUMBER"),
    ft("INSTANCE", "Instance").base("UINT8"),
    ft("FIELD_INDEX", "Index of a field in the commanded or requested PGN, starting at 1").base("UINT8"),
    ft("PARAMETER_LENGTH", "Length in bytes of the key-value parameter that follows").base("UINT8"),
    ft("PGN", "PRN number").resolution(1.0).base("UINT24"),
    ft("SIGNED_ALMANAC_PARAMETER", "Almanac parameter, signed").base("SIGNED_FIXED_POINT_NUMBER"),
    ft("UNSIGNED_ALMANAC_PARAMETER", "Almanac parameter, unsigned").base("UNSIGNED_FIXED_POINT_NUMBER"),
    // Strings
    ft("STRING_FIX", "A fixed length string containing single byte codepoints")
        .per_field()
        .printer(P::StringFix),
    ft("STRING_VAR", "A varying length string containing single byte codepoints")
        .variable()
        .printer(P::StringVar),
    ft("STRING_LZ", "A varying length string containing single byte codepoints with a length byte and terminating zero")
        .variable()
        .printer(P::StringLz),
    ft("STRING_LAU", "A varying length string containing double or single byte codepoints with a length and control byte")
        .variable()
        .printer(P::StringLau),
    // Others
    ft("BINARY", "Binary field").per_field().printer(P::Binary),
    ft("RESERVED", "Reserved field").printer(P::Reserved).base("BINARY"),
    ft("SPARE", "Spare field").printer(P::Spare).base("BINARY"),
    ft("MMSI", "MMSI").printer(P::Mmsi).base("UINT32"),
    ft("VARIABLE", "Variable").variable().printer(P::Variable),
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn find<'a>(types: &'a [FieldType], name: &str) -> &'a FieldType {
        types.iter().find(|t| t.name == name).unwrap()
    }

    #[test]
    fn test_flatten_all() {
        let types = flatten(FIELD_TYPES).unwrap();
        assert_eq!(types.len(), FIELD_TYPES.len());
    }

    #[test]
    fn test_invariant_range_and_resolution() {
        for t in flatten(FIELD_TYPES).unwrap() {
            assert!(t.resolution > 0.0, "{}", t.name);
            if let Some((min, max)) = t.range {
                assert!(min <= max, "{} {} {}", t.name, min, max);
            }
        }
    }

    #[test]
    fn test_inheritance() {
        let types = flatten(FIELD_TYPES).unwrap();
        let t = find(&types, "TEMPERATURE_HIGH");
        assert_eq!(t.size, FieldSize::Bits(16));
        assert!(!t.signed);
        assert_relative_eq!(t.resolution, 0.1);
        assert_eq!(t.unit, Some("K"));
        assert_eq!(t.printer, PrinterKind::Number);

        let t = find(&types, "MANUFACTURER");
        assert_eq!(t.size, FieldSize::Bits(11));
        assert_eq!(t.printer, PrinterKind::Lookup);

        let t = find(&types, "GEO_FIX32");
        assert!(t.signed);
        assert_eq!(t.printer, PrinterKind::LatLon);

        let t = find(&types, "CURRENT_FIX24_CA");
        assert_eq!(t.size, FieldSize::Bits(24));

        assert_eq!(find(&types, "BINARY").size, FieldSize::PerField);
        assert_eq!(find(&types, "STRING_LAU").size, FieldSize::Variable);
    }

    #[test]
    fn test_range_formulas() {
        let types = flatten(FIELD_TYPES).unwrap();
        let (min, max) = find(&types, "UINT8").range.unwrap();
        assert_relative_eq!(min, 0.0);
        assert_relative_eq!(max, 253.0);

        let (min, max) = find(&types, "INT16").range.unwrap();
        assert_relative_eq!(min, -32768.0);
        assert_relative_eq!(max, 32766.0);

        let (min, max) = find(&types, "PEUKERT_EXPONENT").range.unwrap();
        assert_relative_eq!(min, 1.0);
        assert_relative_eq!(max, 1.506, epsilon = 1e-9);

        let (min, max) = numeric_range(2, false, 1.0, 0);
        assert_relative_eq!(min, 0.0);
        assert_relative_eq!(max, 2.0);
        let (_, max) = numeric_range(1, false, 1.0, 0);
        assert_relative_eq!(max, 1.0);
    }

    #[test]
    fn test_cycle_detected() {
        let defs = [
            ft("A", "a").base("B"),
            ft("B", "b").base("A").printer(P::Number),
        ];
        assert!(matches!(flatten(&defs), Err(N2kError::Registry(_))));
    }

    #[test]
    fn test_unknown_base() {
        let defs = [ft("A", "a").base("NOPE").printer(P::Number)];
        assert!(matches!(flatten(&defs), Err(N2kError::Registry(_))));
    }

    #[test]
    fn test_physical_conflict_detected() {
        let defs = [ft("A", "a").bits(8).unit("m").physical("TEMPERATURE").printer(P::Number)];
        assert!(matches!(flatten(&defs), Err(N2kError::Registry(_))));
    }

    #[test]
    fn test_duplicate_kept_once() {
        let defs = [
            ft("A", "first").bits(8).printer(P::Number),
            ft("A", "second").bits(16).printer(P::Number),
        ];
        let types = flatten(&defs).unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].description, "first");
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in FIELD_TYPES.iter().enumerate() {
            assert!(FIELD_TYPES[i + 1..].iter().all(|b| b.name != a.name), "{}", a.name);
        }
    }
}
