//! Field extraction: turns a resolved payload into typed values
//!
//! Fields are visited in PGN order with a running bit offset, so fields after a
//! variable length string or blob land where the payload puts them. Repeating
//! groups are expanded in place. Decoding stops at the end of the payload;
//! whatever was decoded until then is kept.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::bits::{classify, read_unsigned, sign_extend, Sentinel};
use crate::error::N2kError;
use crate::field_type::PrinterKind;
use crate::pgn::{is_proprietary, registry, Field, PgnDef, Registry, RepeatCount, NOT_SEEN};
use crate::raw_frame::RawFrame;

/// Largest time of day accepted, allowing for leap seconds
pub const MAX_TIME_OF_DAY: f64 = 86402.0;

pub const MMSI_MIN: u32 = 2_000_000;
pub const MMSI_MAX: u32 = 999_999_999;

/// A decoded field value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number { raw: i64, value: f64 },
    Float(f64),
    /// Digits of a BCD field
    Decimal(String),
    Lookup { raw: u64, label: Option<&'static str> },
    BitLookup { raw: u64, labels: Vec<String> },
    Date(NaiveDate),
    /// Seconds, since midnight for a time of day or a duration otherwise
    Time { raw: i64, seconds: f64 },
    /// Signed degrees
    LatLon { raw: i64, degrees: f64 },
    Mmsi(u32),
    Pgn { pgn: u32, description: Option<&'static str> },
    Text(String),
    Binary { bytes: Vec<u8>, bits: usize },
    /// Parameter of a group function, typed by the field it refers to
    KeyValue { field: &'static Field, value: Box<Value> },
    NotPresent,
    Error,
    /// Present but outside the valid range of the field
    OutOfRange { raw: i64, value: f64 },
}

impl Value {
    /// Numeric value for fields that have one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number { value, .. } => Some(*value),
            Value::Float(v) | Value::LatLon { degrees: v, .. } => Some(*v),
            Value::Time { seconds, .. } => Some(*seconds),
            Value::Lookup { raw, .. } | Value::BitLookup { raw, .. } => Some(*raw as f64),
            Value::Mmsi(v) => Some(f64::from(*v)),
            Value::Pgn { pgn, .. } => Some(f64::from(*pgn)),
            Value::KeyValue { value, .. } => value.as_f64(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::NotPresent | Value::Error | Value::OutOfRange { .. })
    }
}

/// One decoded field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    pub field: &'static Field,
    /// Group number (0 or 1) and 1-based repetition for fields of a repeating group
    pub group: Option<(usize, usize)>,
    pub value: Value,
}

/// A decoded message
#[derive(Debug, Clone)]
pub struct Message {
    pub frame: RawFrame,
    pub pgn: &'static PgnDef,
    pub fields: Vec<FieldValue>,
    /// Non fatal findings: fallback definitions, PGNs never seen in real data
    pub warnings: Vec<N2kError>,
}

impl Message {
    /// First occurrence of a field by display name
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.field.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.field(name).map(|f| &f.value)
    }

    pub fn is_fallback(&self) -> bool {
        self.pgn.fallback
    }
}

/// Resolve and decode a complete (reassembled) frame
pub fn decode(frame: RawFrame) -> Result<Message, N2kError> {
    let registry = registry()?;
    let def = registry.find_pgn(frame.pgn, &frame.data)?;

    let mut warnings = Vec::new();
    if def.fallback {
        warnings.push(N2kError::UnknownPgn(frame.pgn));
    }
    if def.complete & NOT_SEEN != 0 {
        debug!("PGN {} {} has not been verified against real data", def.pgn, def.description);
        warnings.push(N2kError::Unsupported(format!(
            "PGN {} '{}' is not verified against real data",
            def.pgn, def.description
        )));
    }

    let fields = decode_payload(registry, def, &frame.data);
    Ok(Message {
        frame,
        pgn: def,
        fields,
        warnings,
    })
}

/// Decode `payload` against a known definition
pub fn decode_payload(registry: &'static Registry, def: &'static PgnDef, payload: &[u8]) -> Vec<FieldValue> {
    let mut cursor = Cursor {
        registry,
        def,
        data: payload,
        bit: 0,
        previous: None,
        ref_pgn: None,
        length: None,
        in_parameter: false,
        raws: vec![None; def.field_count() + 1],
        out: Vec::with_capacity(def.field_count()),
    };
    cursor.run();
    cursor.out
}

struct Cursor<'a> {
    registry: &'static Registry,
    def: &'static PgnDef,
    data: &'a [u8],
    bit: usize,
    // last integer read, a key-value pair's field index precedes its value
    previous: Option<i64>,
    // value of the last PGN field, gives context to key-value and proprietary fields
    ref_pgn: Option<u32>,
    // byte count announced for the next key-value parameter
    length: Option<usize>,
    // set while a key-value parameter is decoded as a field of `ref_pgn`
    in_parameter: bool,
    // present raw values of the non repeating fields by order
    raws: Vec<Option<u64>>,
    out: Vec<FieldValue>,
}

impl Cursor<'_> {
    fn total_bits(&self) -> usize {
        self.data.len() * 8
    }

    fn exhausted(&self) -> bool {
        self.bit >= self.total_bits()
    }

    fn run(&mut self) {
        let def = self.def;
        let mut order = 1;
        while order <= def.field_count() {
            if let Some((index, group)) = def
                .repeating
                .iter()
                .enumerate()
                .find_map(|(i, g)| g.filter(|g| g.start == order).map(|g| (i, g)))
            {
                let repetitions = match group.count {
                    RepeatCount::Field(count_order) => self
                        .raws
                        .get(count_order)
                        .copied()
                        .flatten()
                        .map_or(0, |c| c as usize),
                    RepeatCount::Remainder => usize::MAX,
                };
                'repeat: for repetition in 1..=repetitions {
                    if self.exhausted() {
                        break;
                    }
                    let start_bit = self.bit;
                    for member in group.start..group.start + group.field_count {
                        let Some(field) = def.field(member) else {
                            break 'repeat;
                        };
                        if !self.field(field, Some((index, repetition))) {
                            return;
                        }
                    }
                    if self.bit == start_bit {
                        break;
                    }
                }
                order = group.start + group.field_count;
                continue;
            }

            let Some(field) = def.field(order) else {
                break;
            };
            if !self.field(field, None) {
                return;
            }
            order += 1;
        }
    }

    /// Decode one field; `false` once the payload is exhausted
    fn field(&mut self, field: &'static Field, group: Option<(usize, usize)>) -> bool {
        if field.proprietary && !self.proprietary_context() {
            return true;
        }
        if self.exhausted() {
            return false;
        }
        let Some((value, bits)) = self.extract(field) else {
            return false;
        };

        if group.is_none() {
            if let (Some(raw), Some(slot)) = (raw_of(&value), self.raws.get_mut(field.order)) {
                *slot = Some(raw);
            }
        }
        if let Value::Pgn { pgn, .. } = value {
            self.ref_pgn = Some(pgn);
        }
        if field.type_name == "PARAMETER_LENGTH" {
            self.length = raw_of(&value).map(|bytes| bytes as usize).filter(|&bytes| bytes > 0);
        }

        self.bit += bits;
        self.out.push(FieldValue { field, group, value });
        true
    }

    fn proprietary_context(&self) -> bool {
        is_proprietary(self.ref_pgn.unwrap_or(self.def.pgn))
    }

    fn remaining_bits(&self) -> usize {
        self.total_bits().saturating_sub(self.bit)
    }

    /// Bytes starting at the current offset, capped at the end of the payload
    fn byte_slice(&self, max: usize) -> &[u8] {
        let start = self.bit.div_ceil(8).min(self.data.len());
        let end = start.saturating_add(max).min(self.data.len());
        &self.data[start..end]
    }

    // bits needed to get back to a byte boundary, strings always start on one
    fn align(&self) -> usize {
        self.bit.next_multiple_of(8) - self.bit
    }

    fn extract(&mut self, field: &'static Field) -> Option<(Value, usize)> {
        match field.printer {
            PrinterKind::StringFix => {
                let bytes = field.bits.unwrap_or(0) / 8;
                let slice = self.byte_slice(bytes);
                Some((text_value(clean_string(slice)), self.align() + slice.len() * 8))
            }
            PrinterKind::StringLz => {
                let slice = self.byte_slice(usize::MAX);
                let (&len, rest) = slice.split_first()?;
                let content = &rest[..usize::from(len).min(rest.len())];
                // length byte, content, terminating zero
                let consumed = (usize::from(len) + 2).min(slice.len());
                Some((text_value(clean_string(content)), self.align() + consumed * 8))
            }
            PrinterKind::StringLau => {
                let slice = self.byte_slice(usize::MAX);
                let align = self.align();
                if slice.len() < 2 || slice[0] < 2 {
                    debug!("PGN {} field {}: invalid STRING_LAU length", self.def.pgn, field.name);
                    return Some((Value::Error, align + slice.len() * 8));
                }
                let len = usize::from(slice[0]).min(slice.len());
                let content = &slice[2..len];
                let value = match slice[1] {
                    0 => {
                        let units: Vec<u16> = content
                            .chunks_exact(2)
                            .map(|c| u16::from_le_bytes([c[0], c[1]]))
                            .collect();
                        let text = String::from_utf16_lossy(&units);
                        text_value(trim_text(&text).to_string())
                    }
                    1 => text_value(clean_string(content)),
                    control => {
                        debug!("PGN {} field {}: unhandled string control {}", self.def.pgn, field.name, control);
                        Value::Error
                    }
                };
                Some((value, align + len * 8))
            }
            PrinterKind::StringVar => {
                let slice = self.byte_slice(usize::MAX);
                let (&len, rest) = slice.split_first()?;
                let len = usize::from(len).max(1).min(slice.len());
                let mut content = &rest[..len - 1];
                if content.first() == Some(&0x01) {
                    content = &content[1..];
                }
                Some((text_value(clean_string(content)), self.align() + len * 8))
            }
            PrinterKind::Binary | PrinterKind::Reserved | PrinterKind::Spare => {
                let bits = field.bits.unwrap_or(usize::MAX).min(self.remaining_bits());
                let bytes = read_bytes(self.data, self.bit, bits);
                Some((Value::Binary { bytes, bits }, bits))
            }
            PrinterKind::Variable => Some(self.key_value(field)),
            _ => self.number(field),
        }
    }

    fn key_value(&mut self, field: &'static Field) -> (Value, usize) {
        let remaining = self.remaining_bits();
        let window = self.length.take().map(|bytes| (bytes * 8).min(remaining));
        let target = match (self.ref_pgn, self.previous) {
            (Some(pgn), Some(index)) if index > 0 => self
                .registry
                .get_field(pgn, index as usize)
                .filter(|f| f.printer != PrinterKind::Variable),
            _ => None,
        };

        let Some(target) = target else {
            debug!(
                "PGN {} field {}: no definition for field {:?} of PGN {:?}",
                self.def.pgn, field.name, self.previous, self.ref_pgn
            );
            let bits = window.unwrap_or_else(|| 8.min(remaining));
            return (
                Value::Binary {
                    bytes: read_bytes(self.data, self.bit, bits),
                    bits,
                },
                bits,
            );
        };

        // an announced length bounds the parameter, whatever the width of its field
        let data = self.data;
        if let Some(bits) = window {
            self.data = &data[..(self.bit + bits).div_ceil(8).min(data.len())];
        }
        self.in_parameter = true;
        let extracted = self.extract(target);
        self.in_parameter = false;
        self.data = data;

        match extracted {
            Some((value, bits)) => {
                // parameters always occupy whole bytes
                let bits = window.unwrap_or_else(|| bits.next_multiple_of(8).min(remaining));
                (
                    Value::KeyValue {
                        field: target,
                        value: Box::new(value),
                    },
                    bits,
                )
            }
            None => (Value::Error, window.unwrap_or(remaining)),
        }
    }

    fn number(&mut self, field: &'static Field) -> Option<(Value, usize)> {
        let bits = field.bits?;
        let raw_u = read_unsigned(self.data, self.bit, bits)?;
        let raw = if field.signed { sign_extend(raw_u, bits) } else { raw_u as i64 };
        self.previous = Some(raw);
        let sentinel = classify(raw_u, bits, field.signed);

        let value = match field.printer {
            PrinterKind::Lookup => {
                let label = match (field.lookup, field.lookup_order) {
                    (Some(table), Some(order)) => self
                        .primary_key(order)
                        .and_then(|primary| table.triplet_label(primary, raw_u)),
                    (Some(table), None) => table.label(raw_u),
                    _ => None,
                };
                match (label, sentinel) {
                    (Some(label), _) => Value::Lookup {
                        raw: raw_u,
                        label: Some(label),
                    },
                    (None, Sentinel::NotPresent) => Value::NotPresent,
                    (None, Sentinel::Error) => Value::Error,
                    (None, Sentinel::Present) => Value::Lookup { raw: raw_u, label: None },
                }
            }
            PrinterKind::BitLookup => Value::BitLookup {
                raw: raw_u,
                labels: field.lookup.map(|t| t.bit_labels(raw_u)).unwrap_or_default(),
            },
            PrinterKind::Float => Value::Float(f64::from(f32::from_bits(raw_u as u32))),
            PrinterKind::Decimal => Value::Decimal(bcd_digits(&read_bytes(self.data, self.bit, bits))),
            _ => match sentinel {
                Sentinel::NotPresent => Value::NotPresent,
                Sentinel::Error => Value::Error,
                Sentinel::Present => self.present_number(field, raw, raw_u),
            },
        };
        Some((value, bits))
    }

    fn present_number(&self, field: &'static Field, raw: i64, raw_u: u64) -> Value {
        match field.printer {
            PrinterKind::Date => {
                // 0xfffd is reserved as well
                if raw_u >= 0xfffd {
                    return Value::Error;
                }
                NaiveDate::from_ymd_opt(1970, 1, 1)
                    .and_then(|epoch| epoch.checked_add_days(Days::new(raw_u)))
                    .map_or(Value::Error, Value::Date)
            }
            PrinterKind::Time => {
                let seconds = field.to_value(raw);
                if field.type_name == "TIME" && seconds > MAX_TIME_OF_DAY {
                    Value::OutOfRange { raw, value: seconds }
                } else {
                    Value::Time { raw, seconds }
                }
            }
            PrinterKind::LatLon => Value::LatLon {
                raw,
                degrees: field.to_value(raw),
            },
            PrinterKind::Mmsi => {
                let mmsi = raw_u as u32;
                if (MMSI_MIN..=MMSI_MAX).contains(&mmsi) {
                    Value::Mmsi(mmsi)
                } else {
                    Value::OutOfRange {
                        raw,
                        value: f64::from(mmsi),
                    }
                }
            }
            _ if field.type_name == "PGN" => {
                let pgn = raw_u as u32;
                let description = if is_proprietary(pgn) {
                    None
                } else {
                    self.registry.search_pgn(pgn).map(|p| p.description)
                };
                Value::Pgn { pgn, description }
            }
            _ => {
                let value = field.to_value(raw);
                match field.range {
                    Some((min, max)) if value < min - field.resolution / 2.0 || value > max + field.resolution / 2.0 => {
                        Value::OutOfRange { raw, value }
                    }
                    _ => Value::Number { raw, value },
                }
            }
        }
    }

    /// Raw value of the field holding the primary key of a triplet lookup
    fn primary_key(&self, order: usize) -> Option<u64> {
        if self.in_parameter {
            // the key is an earlier parameter of the same referenced PGN
            return self.out.iter().rev().find_map(|f| match &f.value {
                Value::KeyValue { field, value } if field.order == order => raw_of(value),
                _ => None,
            });
        }
        let key_field = self.def.field(order)?;
        match (key_field.bit_offset, key_field.bits) {
            (Some(offset), Some(bits)) => read_unsigned(self.data, offset, bits),
            _ => self.raws.get(order).copied().flatten(),
        }
    }
}

fn raw_of(value: &Value) -> Option<u64> {
    match value {
        Value::Number { raw, .. } => Some(*raw as u64),
        Value::Lookup { raw, .. } | Value::BitLookup { raw, .. } => Some(*raw),
        _ => None,
    }
}

fn text_value(text: String) -> Value {
    if text.is_empty() {
        Value::NotPresent
    } else {
        Value::Text(text)
    }
}

/// Text of a single byte string: cut at the first NUL, trailing padding removed
fn clean_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|b| *b == 0 || *b == 0xff).unwrap_or(bytes.len());
    let text: String = bytes[..end].iter().map(|b| char::from(*b)).collect();
    trim_text(&text).to_string()
}

fn trim_text(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == '@' || c == '\u{0}' || c == '\u{ff}' || c.is_whitespace())
}

/// `bits` bits from `start_bit` as bytes, the last one holding the leftover low bits
fn read_bytes(data: &[u8], start_bit: usize, bits: usize) -> Vec<u8> {
    (0..bits)
        .step_by(8)
        .map(|offset| read_unsigned(data, start_bit + offset, (bits - offset).min(8)).unwrap_or(0) as u8)
        .collect()
}

fn bcd_digits(bytes: &[u8]) -> String {
    let mut digits = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let (high, low) = (byte >> 4, byte & 0x0f);
        if high > 9 || low > 9 {
            break;
        }
        digits.push(char::from(b'0' + high));
        digits.push(char::from(b'0' + low));
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame(pgn: u32, data: &[u8]) -> RawFrame {
        RawFrame::new("2023-01-01T00:00:00.000Z", 2, pgn, 1, 255, data.to_vec())
    }

    #[test]
    fn test_vessel_heading() {
        let msg = decode(frame(127250, &[0x00, 0x5A, 0x1D, 0xFF, 0x7F, 0xFF, 0x7F, 0x00])).unwrap();
        assert_eq!(msg.pgn.description, "Vessel Heading");
        assert_eq!(msg.value("SID"), Some(&Value::Number { raw: 0, value: 0.0 }));
        match msg.value("Heading") {
            Some(Value::Number { raw, value }) => {
                assert_eq!(*raw, 7514);
                assert_relative_eq!(*value, 0.7514, epsilon = 1e-9);
            }
            other => panic!("unexpected heading {:?}", other),
        }
        assert_eq!(msg.value("Deviation"), Some(&Value::NotPresent));
        assert_eq!(msg.value("Variation"), Some(&Value::NotPresent));
        assert_eq!(
            msg.value("Reference"),
            Some(&Value::Lookup {
                raw: 0,
                label: Some("True")
            })
        );
        assert!(msg.warnings.is_empty());
    }

    #[test]
    fn test_address_claim_layout() {
        let frame = RawFrame::from_can_id("", 0x18EEFF00, &[0x05, 0xA0, 0x64, 0x60, 0xFF, 0x05, 0xFF, 0xE0]).unwrap();
        assert_eq!((frame.priority, frame.pgn, frame.source, frame.destination), (6, 60928, 0, 255));
        let msg = decode(frame).unwrap();
        assert_eq!(msg.value("Unique Number"), Some(&Value::Number { raw: 303109, value: 303109.0 }));
        assert!(matches!(msg.value("Manufacturer Code"), Some(Value::Lookup { raw: 771, .. })));
        // all ones in the 3 and 5 bit instance fields means "not present"
        assert_eq!(msg.value("Device Instance Lower"), Some(&Value::NotPresent));
        assert_eq!(msg.value("Device Instance Upper"), Some(&Value::NotPresent));
        assert_eq!(msg.value("Device Function"), Some(&Value::Lookup { raw: 5, label: None }));
        assert_eq!(msg.value("Device Class"), Some(&Value::NotPresent));
        assert_eq!(msg.value("System Instance"), Some(&Value::Number { raw: 0, value: 0.0 }));
        assert_eq!(msg.value("Industry Group"), Some(&Value::Lookup { raw: 6, label: None }));
        assert_eq!(msg.value("Arbitrary address capable"), Some(&Value::Number { raw: 1, value: 1.0 }));
    }

    #[test]
    fn test_triplet_label_uses_later_field() {
        // Device Function 145 with Device Class 60 (Navigation)
        let payload = [0x00, 0x00, 0x00, 0x00, 0x00, 145, 60 << 1, 0xC0];
        let msg = decode(frame(60928, &payload)).unwrap();
        assert_eq!(
            msg.value("Device Function"),
            Some(&Value::Lookup {
                raw: 145,
                label: Some("Ownship Position (GNSS)")
            })
        );
        assert_eq!(msg.value("Industry Group"), Some(&Value::Lookup { raw: 4, label: Some("Marine") }));
    }

    #[test]
    fn test_unknown_pgn_fallback() {
        let msg = decode(frame(0xFA00, &[0x87, 0x98, 1, 2, 3, 4, 5, 6])).unwrap();
        assert!(msg.is_fallback());
        assert_eq!(msg.warnings, vec![N2kError::UnknownPgn(0xFA00)]);
        let names: Vec<_> = msg.fields.iter().map(|f| f.field.name).collect();
        assert_eq!(names, vec!["Manufacturer Code", "Reserved", "Industry Code", "Data"]);
        assert_eq!(
            msg.value("Data"),
            Some(&Value::Binary {
                bytes: vec![1, 2, 3, 4, 5, 6],
                bits: 48
            })
        );
    }

    #[test]
    fn test_set_and_drift() {
        let msg = decode(frame(129291, &[0x07, 0xFD, 0x5C, 0x3D, 0x96, 0x00, 0xFF, 0xFF])).unwrap();
        assert_eq!(msg.pgn.description, "Set & Drift, Rapid Update");
        assert_eq!(msg.value("SID"), Some(&Value::Number { raw: 7, value: 7.0 }));
        assert_eq!(msg.value("Set Reference"), Some(&Value::Lookup { raw: 1, label: Some("Magnetic") }));
        match msg.value("Set") {
            Some(Value::Number { raw, value }) => {
                assert_eq!(*raw, 15708);
                assert_relative_eq!(*value, 1.5708, epsilon = 1e-9);
            }
            other => panic!("unexpected set {:?}", other),
        }
        match msg.value("Drift") {
            Some(Value::Number { value, .. }) => assert_relative_eq!(*value, 1.5, epsilon = 1e-9),
            other => panic!("unexpected drift {:?}", other),
        }
    }

    #[test]
    fn test_sonichub_volume() {
        // Navico (275), marine industry, proprietary ID 24
        let msg = decode(frame(130816, &[0x13, 0x99, 0xFF, 24, 0x00, 0x01, 0x14])).unwrap();
        assert_eq!(msg.pgn.description, "SonicHub: Volume");
        assert_eq!(msg.value("Control"), Some(&Value::Lookup { raw: 0, label: Some("Set") }));
        assert_eq!(msg.value("Zone"), Some(&Value::Lookup { raw: 1, label: Some("Zone 2") }));
        assert_eq!(msg.value("Level"), Some(&Value::Number { raw: 20, value: 20.0 }));
    }

    #[test]
    fn test_system_time() {
        let payload = [0x01, 0xF0, 0x9E, 0x4B, 0x00, 0x51, 0x25, 0x02, 0xFF, 0xFF];
        let msg = decode(frame(126992, &payload)).unwrap();
        assert_eq!(msg.value("Source"), Some(&Value::Lookup { raw: 0, label: Some("GPS") }));
        assert_eq!(
            msg.value("Date"),
            Some(&Value::Date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()))
        );
        match msg.value("Time") {
            Some(Value::Time { seconds, .. }) => assert_relative_eq!(*seconds, 3600.0, epsilon = 1e-6),
            other => panic!("unexpected time {:?}", other),
        }
    }

    #[test]
    fn test_time_out_of_range() {
        // 86403 s
        let raw = 864_030_000u32.to_le_bytes();
        let payload = [0x01, 0xF0, 0x9E, 0x4B, raw[0], raw[1], raw[2], raw[3]];
        let msg = decode(frame(126992, &payload)).unwrap();
        assert!(matches!(msg.value("Time"), Some(Value::OutOfRange { .. })));
    }

    #[test]
    fn test_truncated_payload_keeps_prefix() {
        let mut payload = vec![0x64, 0x08, 0x10, 0x27];
        payload.extend_from_slice(b"Model X@@@@@@@@@@@@@@@@@@@@@@@@");
        payload.truncate(28);
        let msg = decode(frame(126996, &payload)).unwrap();
        match msg.value("NMEA 2000 Version") {
            Some(Value::Number { value, .. }) => assert_relative_eq!(*value, 2.148, epsilon = 1e-9),
            other => panic!("unexpected version {:?}", other),
        }
        assert_eq!(msg.value("Product Code"), Some(&Value::Number { raw: 10000, value: 10000.0 }));
        assert_eq!(msg.value("Model ID"), Some(&Value::Text("Model X".to_string())));
        assert!(msg.value("Software Version Code").is_none());
    }

    #[test]
    fn test_string_lau() {
        let mut payload = vec![7, 1];
        payload.extend_from_slice(b"Mast ");
        payload.extend_from_slice(&[8, 0, b'B', 0, b'o', 0, b'w', 0]);
        payload.extend_from_slice(&[2, 1]);
        let msg = decode(frame(126998, &payload)).unwrap();
        assert_eq!(msg.value("Installation Description #1"), Some(&Value::Text("Mast".to_string())));
        assert_eq!(msg.value("Installation Description #2"), Some(&Value::Text("Bow".to_string())));
        assert_eq!(msg.value("Manufacturer Information"), Some(&Value::NotPresent));
    }

    #[test]
    fn test_repeat_until_end() {
        // Transmit PGN list: 127250, 129029
        let mut payload = vec![0];
        payload.extend_from_slice(&127250u32.to_le_bytes()[..3]);
        payload.extend_from_slice(&129029u32.to_le_bytes()[..3]);
        let msg = decode(frame(126464, &payload)).unwrap();
        let pgns: Vec<_> = msg
            .fields
            .iter()
            .filter_map(|f| match (&f.value, f.group) {
                (Value::Pgn { pgn, description }, Some((0, rep))) => Some((rep, *pgn, *description)),
                _ => None,
            })
            .collect();
        assert_eq!(
            pgns,
            vec![
                (1, 127250, Some("Vessel Heading")),
                (2, 129029, Some("GNSS Position Data"))
            ]
        );
    }

    #[test]
    fn test_group_function_key_value() {
        // Command 127251, priority unchanged, 1 parameter: field 2 = 3200000
        let mut payload = vec![0x01, 0x13, 0xF1, 0x01, 0xF8, 0x01, 0x02];
        payload.extend_from_slice(&3_200_000i32.to_le_bytes());
        let msg = decode(frame(126208, &payload)).unwrap();
        assert_eq!(msg.pgn.description, "NMEA - Command group function");
        assert!(matches!(msg.value("PGN"), Some(Value::Pgn { pgn: 127251, .. })));
        let value = msg.fields.iter().find(|f| f.field.name == "Value").unwrap();
        assert_eq!(value.group, Some((0, 1)));
        match &value.value {
            Value::KeyValue { field, value } => {
                assert_eq!(field.name, "Rate");
                match value.as_ref() {
                    Value::Number { value, .. } => assert_relative_eq!(*value, 0.1, epsilon = 1e-9),
                    other => panic!("unexpected value {:?}", other),
                }
            }
            other => panic!("unexpected parameter {:?}", other),
        }
    }

    fn parameters(msg: &Message) -> Vec<(&'static str, &Value)> {
        msg.fields
            .iter()
            .filter_map(|f| match &f.value {
                Value::KeyValue { field, value } => Some((field.name, value.as_ref())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_string_parameters_take_their_own_length() {
        // Command 126998 with two STRING_LAU parameters of different lengths
        let payload = [
            0x01, 0x16, 0xF0, 0x01, 0xF8, 0x02, 0x01, 0x04, 0x01, b'A', b'B', 0x02, 0x03, 0x01, b'C',
        ];
        let msg = decode(frame(126208, &payload)).unwrap();
        assert_eq!(
            parameters(&msg),
            vec![
                ("Installation Description #1", &Value::Text("AB".to_string())),
                ("Installation Description #2", &Value::Text("C".to_string())),
            ]
        );
    }

    #[test]
    fn test_parameter_triplet_key_comes_from_commanded_pgn() {
        // Command 65240: Device Class 25 then Device Function 130
        let payload = [0x01, 0xD8, 0xFE, 0x00, 0xF8, 0x02, 0x07, 25, 0x05, 130];
        let msg = decode(frame(126208, &payload)).unwrap();
        let params = parameters(&msg);
        assert_eq!(params.len(), 2);
        assert_eq!(params[1].0, "Device Function");
        assert_eq!(
            params[1].1,
            &Value::Lookup {
                raw: 130,
                label: Some("PC Gateway")
            }
        );
    }

    #[test]
    fn test_announced_length_bounds_value() {
        // B&G key-value data: key 0x123 with 3 bytes, key 0x010 with 1 byte
        let payload = [0x7D, 0x99, 0x23, 0x31, 0xAA, 0xBB, 0xCC, 0x10, 0x10, 0x55];
        let msg = decode(frame(130824, &payload)).unwrap();
        assert_eq!(msg.pgn.description, "B&G: key-value data");
        let values: Vec<(Option<(usize, usize)>, &Value)> = msg
            .fields
            .iter()
            .filter(|f| f.field.name == "Value")
            .map(|f| (f.group, &f.value))
            .collect();
        assert_eq!(
            values,
            vec![
                (
                    Some((0, 1)),
                    &Value::Binary {
                        bytes: vec![0xAA, 0xBB, 0xCC],
                        bits: 24
                    }
                ),
                (
                    Some((0, 2)),
                    &Value::Binary {
                        bytes: vec![0x55],
                        bits: 8
                    }
                ),
            ]
        );
        let keys: Vec<&Value> = msg.fields.iter().filter(|f| f.field.name == "Key").map(|f| &f.value).collect();
        assert_eq!(keys, vec![&Value::Number { raw: 0x123, value: 291.0 }, &Value::Number { raw: 0x10, value: 16.0 }]);
    }

    #[test]
    fn test_proprietary_fields_follow_commanded_pgn() {
        // Read fields of 127251: no manufacturer block
        let standard = [0x03, 0x13, 0xF1, 0x01, 0x09, 0x00, 0x00];
        let msg = decode(frame(126208, &standard)).unwrap();
        assert_eq!(msg.pgn.description, "NMEA - Read Fields group function");
        assert!(msg.value("Manufacturer Code").is_none());
        assert_eq!(msg.value("Unique ID"), Some(&Value::Number { raw: 9, value: 9.0 }));

        // Read fields of proprietary 65285 from Airmar: manufacturer block present
        let proprietary = [0x03, 0x05, 0xFF, 0x00, 0x87, 0x98, 0x09, 0x00, 0x00];
        let msg = decode(frame(126208, &proprietary)).unwrap();
        assert!(matches!(msg.value("Manufacturer Code"), Some(Value::Lookup { raw: 135, .. })));
        assert_eq!(msg.value("Unique ID"), Some(&Value::Number { raw: 9, value: 9.0 }));
    }

    #[test]
    fn test_clean_string() {
        assert_eq!(clean_string(b"ABC  @@\xff\xff"), "ABC");
        assert_eq!(clean_string(b"AB\0junk"), "AB");
        assert_eq!(clean_string(b"@@@@"), "");
    }

    #[test]
    fn test_bcd_digits() {
        assert_eq!(bcd_digits(&[0x12, 0x34, 0xFF]), "1234");
    }
}
