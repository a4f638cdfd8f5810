//! Encoding of fixed layout PGNs and NMEA group function commands
//!
//! Values are written with the field's resolution and offset, reserved bits
//! as ones and spare bits as zeros. Missing values get the "not present"
//! sentinel of their field.

use chrono::NaiveDate;

use crate::bits::{mask, not_present_raw, write_bits};
use crate::decoder::Value;
use crate::error::N2kError;
use crate::field_type::PrinterKind;
use crate::pgn::{registry, Field, PgnDef};

pub use crate::fast_packet::fast_packet_frames;

/// PGN 126208, NMEA request, command and acknowledge group function
pub const PGN_GROUP_FUNCTION: u32 = 126208;

const FUNCTION_REQUEST: u8 = 0;
const FUNCTION_COMMAND: u8 = 1;

/// Priority value that leaves the priority of the commanded PGN unchanged
pub const PRIORITY_UNCHANGED: u8 = 0x8;

/// Encode physical values, one per field in order
///
/// `None` encodes the "not present" sentinel. Reserved and spare fields take
/// their fixed pattern whatever is passed for them.
pub fn encode_fields(def: &PgnDef, values: &[Option<f64>]) -> Result<Vec<u8>, N2kError> {
    let values: Vec<Value> = def
        .fields
        .iter()
        .zip(values.iter().copied().chain(std::iter::repeat(None)))
        .map(|(field, value)| match value {
            None => Ok(Value::NotPresent),
            Some(v) => Ok(Value::Number {
                raw: checked_raw(field, v)?,
                value: v,
            }),
        })
        .collect::<Result<_, N2kError>>()?;
    encode_values(def, &values)
}

/// Encode decoded values back into a payload
///
/// Only PGNs whose fields all have a fixed width and that have no repeating
/// groups can be encoded this way.
pub fn encode_values(def: &PgnDef, values: &[Value]) -> Result<Vec<u8>, N2kError> {
    if !def.is_fixed_layout() {
        return Err(N2kError::Unsupported(format!(
            "PGN {} '{}' has variable or repeating fields",
            def.pgn, def.description
        )));
    }

    let (total_bits, _) = def.fixed_bits();
    let mut buffer = vec![0xffu8; total_bits.div_ceil(8)];
    let mut bit = 0;
    for (i, field) in def.fields.iter().enumerate() {
        let bits = field.bits.unwrap_or(0);
        let value = values.get(i).unwrap_or(&Value::NotPresent);
        write_field(&mut buffer, bit, bits, field, value)?;
        bit += bits;
    }
    Ok(buffer)
}

fn write_field(buffer: &mut Vec<u8>, bit: usize, bits: usize, field: &Field, value: &Value) -> Result<(), N2kError> {
    match (field.printer, value) {
        (PrinterKind::Reserved | PrinterKind::Spare | PrinterKind::Binary, Value::Binary { bytes, .. }) => {
            write_bytes(buffer, bit, bits, bytes);
            Ok(())
        }
        (PrinterKind::Reserved, _) => {
            write_bits(buffer, bit, bits, mask(bits));
            Ok(())
        }
        (PrinterKind::Spare, _) => {
            write_bits(buffer, bit, bits, 0);
            Ok(())
        }
        (PrinterKind::StringFix, Value::Text(text)) => {
            let mut bytes: Vec<u8> = text.chars().map(|c| u32::from(c).min(0xff) as u8).collect();
            bytes.resize(bits / 8, 0xff);
            write_bytes(buffer, bit, bits, &bytes);
            Ok(())
        }
        (PrinterKind::Decimal, Value::Decimal(digits)) => {
            write_bytes(buffer, bit, bits, &bcd_bytes(digits, bits / 8));
            Ok(())
        }
        _ => {
            let raw = raw_value(field, bits, value)?;
            write_bits(buffer, bit, bits, raw & mask(bits));
            Ok(())
        }
    }
}

fn raw_value(field: &Field, bits: usize, value: &Value) -> Result<u64, N2kError> {
    let raw = match value {
        Value::NotPresent | Value::Text(_) | Value::Decimal(_) => not_present_raw(bits, field.signed),
        Value::Error if bits >= 4 => not_present_raw(bits, field.signed) - 1,
        Value::Number { raw, .. }
        | Value::Time { raw, .. }
        | Value::LatLon { raw, .. }
        | Value::OutOfRange { raw, .. } => *raw as u64,
        Value::Lookup { raw, .. } | Value::BitLookup { raw, .. } => *raw,
        Value::Float(v) => u64::from((*v as f32).to_bits()),
        Value::Mmsi(mmsi) => u64::from(*mmsi),
        Value::Pgn { pgn, .. } => u64::from(*pgn),
        Value::Date(date) => days_since_epoch(*date)?,
        Value::Binary { bytes, .. } => bytes
            .iter()
            .take(8)
            .enumerate()
            .fold(0u64, |acc, (i, b)| acc | u64::from(*b) << (8 * i)),
        Value::Error | Value::KeyValue { .. } => {
            return Err(N2kError::Unsupported(format!("cannot encode {:?} in field {}", value, field.name)));
        }
    };
    Ok(raw)
}

fn days_since_epoch(date: NaiveDate) -> Result<u64, N2kError> {
    let days = NaiveDate::from_ymd_opt(1970, 1, 1)
        .map(|epoch| (date - epoch).num_days())
        .unwrap_or(-1);
    if !(0..0xfffd).contains(&days) {
        return Err(N2kError::FieldOutOfRange {
            field: "Date".to_string(),
            value: days as f64,
        });
    }
    Ok(days as u64)
}

/// Raw integer for a physical value, checked against the field range
fn checked_raw(field: &Field, value: f64) -> Result<i64, N2kError> {
    if let Some((min, max)) = field.range {
        let slack = field.resolution / 2.0;
        if value < min - slack || value > max + slack {
            return Err(N2kError::FieldOutOfRange {
                field: field.name.to_string(),
                value,
            });
        }
    }
    Ok(field.to_raw(value))
}

fn write_bytes(buffer: &mut Vec<u8>, bit: usize, bits: usize, bytes: &[u8]) {
    for (i, byte) in bytes.iter().enumerate() {
        let offset = i * 8;
        if offset >= bits {
            break;
        }
        write_bits(buffer, bit + offset, (bits - offset).min(8), u64::from(*byte));
    }
}

fn bcd_bytes(digits: &str, len: usize) -> Vec<u8> {
    let digits: Vec<u8> = digits.bytes().filter(u8::is_ascii_digit).map(|d| d - b'0').collect();
    let mut bytes: Vec<u8> = digits.chunks(2).map(|pair| pair[0] << 4 | pair.get(1).copied().unwrap_or(0xf)).collect();
    bytes.resize(len, 0xff);
    bytes
}

/// One field of the commanded or requested PGN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// 1-based field index in the target PGN
    pub field: u8,
    pub raw: u64,
    /// Width of the value on the wire
    pub bytes: usize,
}

impl Parameter {
    pub fn raw(field: u8, raw: u64, bytes: usize) -> Self {
        Self { field, raw, bytes }
    }

    /// Parameter from a physical value, converted with the resolution and
    /// offset of field `index` of `pgn`
    pub fn for_field(pgn: u32, index: u8, value: f64) -> Result<Self, N2kError> {
        let field = registry()?
            .get_field(pgn, usize::from(index))
            .ok_or_else(|| N2kError::Unsupported(format!("PGN {} has no field {}", pgn, index)))?;
        let bits = field
            .bits
            .ok_or_else(|| N2kError::Unsupported(format!("PGN {} field {} has no fixed size", pgn, field.name)))?;
        let raw = checked_raw(field, value)?;
        Ok(Self {
            field: index,
            raw: (raw as u64) & mask(bits),
            bytes: bits.div_ceil(8),
        })
    }
}

/// Builder for PGN 126208 request and command payloads
#[derive(Debug, Clone, Copy)]
pub struct GroupFunction;

impl GroupFunction {
    /// Command the receiver to set fields of `pgn`
    ///
    /// `priority` of `None` leaves the priority of the commanded PGN unchanged.
    pub fn command(pgn: u32, priority: Option<u8>, parameters: &[Parameter]) -> Result<Vec<u8>, N2kError> {
        let priority = priority.unwrap_or(PRIORITY_UNCHANGED);
        if priority > PRIORITY_UNCHANGED {
            return Err(N2kError::FieldOutOfRange {
                field: "Priority".to_string(),
                value: f64::from(priority),
            });
        }
        let mut payload = header(FUNCTION_COMMAND, pgn);
        // reserved high nibble
        payload.push(0xf0 | priority);
        append_parameters(&mut payload, parameters)?;
        Ok(payload)
    }

    /// Request `pgn`, optionally at another interval (ms) and offset (10 ms units)
    pub fn request(
        pgn: u32,
        interval: Option<u32>,
        offset: Option<u16>,
        parameters: &[Parameter],
    ) -> Result<Vec<u8>, N2kError> {
        let mut payload = header(FUNCTION_REQUEST, pgn);
        payload.extend_from_slice(&interval.unwrap_or(u32::MAX).to_le_bytes());
        payload.extend_from_slice(&offset.unwrap_or(u16::MAX).to_le_bytes());
        append_parameters(&mut payload, parameters)?;
        Ok(payload)
    }
}

fn header(function: u8, pgn: u32) -> Vec<u8> {
    let pgn = pgn.to_le_bytes();
    vec![function, pgn[0], pgn[1], pgn[2]]
}

fn append_parameters(payload: &mut Vec<u8>, parameters: &[Parameter]) -> Result<(), N2kError> {
    let count = u8::try_from(parameters.len())
        .map_err(|_| N2kError::Unsupported(format!("{} parameters in one group function", parameters.len())))?;
    payload.push(count);
    for parameter in parameters {
        if parameter.bytes == 0 || parameter.bytes > 8 {
            return Err(N2kError::Unsupported(format!(
                "parameter {} of {} bytes",
                parameter.field, parameter.bytes
            )));
        }
        payload.push(parameter.field);
        payload.extend_from_slice(&parameter.raw.to_le_bytes()[..parameter.bytes]);
    }
    if payload.len() > crate::raw_frame::FAST_PACKET_MAX {
        return Err(N2kError::Unsupported(format!(
            "group function of {} bytes does not fit a fast-packet",
            payload.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{decode, decode_payload};
    use crate::raw_frame::RawFrame;
    use approx::assert_relative_eq;

    #[test]
    fn test_encode_vessel_heading() {
        let def = registry().unwrap().search_pgn(127250).unwrap();
        let payload = encode_fields(def, &[Some(0.0), Some(0.7514), None, None, Some(0.0)]).unwrap();
        assert_eq!(payload, vec![0x00, 0x5A, 0x1D, 0xFF, 0x7F, 0xFF, 0x7F, 0xFC]);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let def = registry().unwrap().search_pgn(127250).unwrap();
        assert!(matches!(
            encode_fields(def, &[Some(0.0), Some(7.0)]),
            Err(N2kError::FieldOutOfRange { .. })
        ));
    }

    #[test]
    fn test_variable_layout_rejected() {
        let def = registry().unwrap().search_pgn(126998).unwrap();
        assert!(matches!(encode_values(def, &[]), Err(N2kError::Unsupported(_))));
    }

    #[test]
    fn test_decode_encode_roundtrip_fixed_pgns() {
        let registry = registry().unwrap();
        let mut checked = 0;
        for def in registry.pgns().iter().filter(|p| p.is_fixed_layout() && !p.fallback) {
            let (bits, _) = def.fixed_bits();
            let payload: Vec<u8> = (0..bits.div_ceil(8)).map(|i| ((i * 13 + 5) % 64) as u8).collect();
            let decoded = decode_payload(registry, def, &payload);
            let values: Vec<Value> = decoded.iter().map(|f| f.value.clone()).collect();
            let encoded = encode_values(def, &values).unwrap();
            let again = decode_payload(registry, def, &encoded);
            assert_eq!(decoded, again, "PGN {} {}", def.pgn, def.description);
            checked += 1;
        }
        assert!(checked >= 10);
    }

    #[test]
    fn test_command_rate_of_turn() {
        let parameter = Parameter::for_field(127251, 2, 0.1).unwrap();
        assert_eq!(parameter, Parameter::raw(2, 3_200_000, 4));

        let payload = GroupFunction::command(127251, None, &[parameter]).unwrap();
        assert_eq!(payload, vec![0x01, 0x13, 0xF1, 0x01, 0xF8, 0x01, 0x02, 0x00, 0xD4, 0x30, 0x00]);

        let msg = decode(RawFrame::new("", 3, PGN_GROUP_FUNCTION, 0, 1, payload)).unwrap();
        assert_eq!(msg.pgn.description, "NMEA - Command group function");
        assert!(matches!(msg.value("PGN"), Some(Value::Pgn { pgn: 127251, .. })));
        assert_eq!(msg.value("Number of Parameters"), Some(&Value::Number { raw: 1, value: 1.0 }));
        assert_eq!(msg.value("Parameter"), Some(&Value::Number { raw: 2, value: 2.0 }));
        match msg.value("Value") {
            Some(Value::KeyValue { field, value }) => {
                assert_eq!(field.name, "Rate");
                assert_relative_eq!(value.as_f64().unwrap(), 0.1, epsilon = 1e-9);
            }
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_request_with_interval() {
        let payload = GroupFunction::request(129026, Some(1000), None, &[]).unwrap();
        assert_eq!(payload, vec![0x00, 0x02, 0xF8, 0x01, 0xE8, 0x03, 0x00, 0x00, 0xFF, 0xFF, 0x00]);
        let msg = decode(RawFrame::new("", 3, PGN_GROUP_FUNCTION, 0, 1, payload)).unwrap();
        assert_eq!(msg.pgn.description, "NMEA - Request group function");
        match msg.value("Transmission interval") {
            Some(Value::Time { seconds, .. }) => assert_relative_eq!(*seconds, 1.0),
            other => panic!("unexpected interval {:?}", other),
        }
        assert_eq!(msg.value("Transmission interval offset"), Some(&Value::NotPresent));
    }

    #[test]
    fn test_priority_checked() {
        assert!(GroupFunction::command(127251, Some(9), &[]).is_err());
        let payload = GroupFunction::command(127251, Some(2), &[]).unwrap();
        assert_eq!(payload[4], 0xF2);
    }

    #[test]
    fn test_bcd_bytes() {
        assert_eq!(bcd_bytes("1234", 3), vec![0x12, 0x34, 0xFF]);
        assert_eq!(bcd_bytes("123", 2), vec![0x12, 0x3F]);
    }
}
