//! Text and JSON output of decoded messages and of the PGN catalogue
//!
//! All formatting choices travel in a [`RenderConfig`]; nothing here keeps
//! state between calls.

use std::f64::consts::PI;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as Json};

use crate::decoder::{FieldValue, Message, Value};
use crate::field_type::FieldSize;
use crate::lookup::LookupKind;
use crate::pgn::{camel_case, Field, PgnDef, RepeatCount, Registry};
use crate::raw_frame::RawFrame;

const RADIAN_TO_DEGREE: f64 = 180.0 / PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON object per message
    Json,
    /// `timestamp prio src dst pgn description: name = value; ...`
    #[default]
    Human,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameStyle {
    #[default]
    Plain,
    Camel,
    UpperCamel,
}

/// Latitude and longitude notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoFormat {
    /// Decimal degrees
    #[default]
    Dd,
    /// Degrees and decimal minutes
    Dm,
    /// Degrees, minutes and decimal seconds
    Dms,
}

impl std::str::FromStr for GeoFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dd" => Ok(GeoFormat::Dd),
            "dm" => Ok(GeoFormat::Dm),
            "dms" => Ok(GeoFormat::Dms),
            other => Err(format!("unknown geo format '{}'", other)),
        }
    }
}

/// Output options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Lookup values as `{"value": N, "name": "LABEL"}`
    pub name_value: bool,
    /// Emit fields without data as `null` instead of leaving them out
    pub show_empty: bool,
    /// Keep SI units instead of converting to degrees, bar, Celsius and Ah
    pub si: bool,
    pub name_style: NameStyle,
    pub geo: GeoFormat,
    /// Diagnostic output, reserved and spare fields included
    pub show_bytes: bool,
    /// Dump the payload before each message
    pub show_data: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            name_value: false,
            show_empty: false,
            si: false,
            name_style: NameStyle::Plain,
            geo: GeoFormat::Dd,
            show_bytes: false,
            show_data: false,
        }
    }
}

impl RenderConfig {
    pub fn json() -> Self {
        Self {
            format: OutputFormat::Json,
            ..Self::default()
        }
    }
}

/// Render a message in the configured format, without trailing newline
pub fn render(message: &Message, config: &RenderConfig) -> String {
    match config.format {
        OutputFormat::Json => to_json(message, config).to_string(),
        OutputFormat::Human => to_text(message, config),
    }
}

/// Two lines showing the payload as hex and as printable characters
pub fn render_data(message: &Message) -> String {
    let frame = &message.frame;
    let header = format!(
        "{} {} {:>3} {:>3} {:>6} {}: ",
        frame.timestamp, frame.priority, frame.source, frame.destination, frame.pgn, message.pgn.description
    );
    let mut hex = header.clone();
    let mut ascii = header;
    for byte in &frame.data {
        let _ = write!(hex, " {:02x}", byte);
        let c = if byte.is_ascii_alphanumeric() { char::from(*byte) } else { '.' };
        let _ = write!(ascii, "  {}", c);
    }
    format!("{}\n{}", hex, ascii)
}

/// One line per frame as it came in, before reassembly
pub fn render_raw(frame: &RawFrame) -> String {
    let mut line = format!(
        "{} {} {:03} {:03} {:>6} :",
        frame.timestamp, frame.priority, frame.source, frame.destination, frame.pgn
    );
    for byte in &frame.data {
        let _ = write!(line, " {:02x}", byte);
    }
    line
}

/// The JSON object of a message
pub fn to_json(message: &Message, config: &RenderConfig) -> Json {
    let frame = &message.frame;
    let mut fields = Map::new();
    // (group, list of repetitions)
    let mut lists: Vec<(usize, Vec<Map<String, Json>>)> = Vec::new();

    for fv in &message.fields {
        let Some(value) = json_field(fv, config) else {
            continue;
        };
        let name = field_name(fv.field, config.name_style);
        match fv.group {
            None => {
                fields.insert(name, value);
            }
            Some((group, repetition)) => {
                let position = match lists.iter().position(|(g, _)| *g == group) {
                    Some(p) => p,
                    None => {
                        lists.push((group, Vec::new()));
                        lists.len() - 1
                    }
                };
                let entries = &mut lists[position].1;
                while entries.len() < repetition {
                    entries.push(Map::new());
                }
                entries[repetition - 1].insert(name, value);
            }
        }
    }
    for (group, entries) in lists {
        let key = if group == 0 { "list".to_string() } else { format!("list{}", group + 1) };
        let entries: Vec<Json> = entries.into_iter().filter(|e| !e.is_empty()).map(Json::Object).collect();
        fields.insert(key, Json::Array(entries));
    }

    json!({
        "timestamp": frame.timestamp,
        "prio": frame.priority,
        "src": frame.source,
        "dst": frame.destination,
        "pgn": frame.pgn,
        "description": message.pgn.description,
        "fields": fields,
    })
}

/// The human readable line of a message
pub fn to_text(message: &Message, config: &RenderConfig) -> String {
    let frame = &message.frame;
    let mut out = format!(
        "{} {} {:>3} {:>3} {:>6} {}:",
        frame.timestamp, frame.priority, frame.source, frame.destination, frame.pgn, message.pgn.description
    );
    let mut first = true;
    for fv in &message.fields {
        let Some(text) = text_field(fv, config) else {
            continue;
        };
        let mut name = field_name(fv.field, config.name_style);
        if let Some((_, repetition)) = fv.group {
            if repetition > 1 {
                let _ = write!(name, "{}{}", if config.name_style == NameStyle::Plain { " " } else { "_" }, repetition);
            }
        }
        let _ = write!(out, "{} {} = {}", if first { " " } else { ";" }, name, text);
        first = false;
    }
    out
}

fn field_name(field: &Field, style: NameStyle) -> String {
    match style {
        NameStyle::Plain => field.name.to_string(),
        NameStyle::Camel => field.camel_name.clone(),
        NameStyle::UpperCamel => camel_case(field.name, true),
    }
}

/// A number scaled for display
struct Scaled {
    value: f64,
    precision: usize,
    unit: Option<&'static str>,
    integer: bool,
}

/// Decimals implied by a resolution: 0.01 gives 2
/// Number of decimals needed to show multiples of `resolution` exactly
fn decimals(resolution: f64) -> usize {
    (0..16)
        .find(|&n| {
            let scaled = resolution * 10f64.powi(n as i32);
            scaled.round() >= 1.0 && (scaled - scaled.round()).abs() < 1e-9 * scaled
        })
        .unwrap_or(16)
}

fn scale(field: &Field, value: f64, si: bool) -> Scaled {
    let precision = |resolution: f64| field.precision.map_or_else(|| decimals(resolution), usize::from);
    let plain = Scaled {
        value,
        precision: precision(field.resolution),
        unit: field.unit,
        integer: field.resolution == 1.0,
    };
    if si {
        return plain;
    }
    match field.unit {
        Some("C") => Scaled {
            value: value / 3600.0,
            precision: precision(field.resolution / 3600.0),
            unit: Some("Ah"),
            integer: false,
        },
        Some("Pa") => Scaled {
            value: value / 100_000.0,
            precision: 3,
            unit: Some("bar"),
            integer: false,
        },
        Some("K") => Scaled {
            value: value - 273.15,
            precision: 2,
            unit: Some("C"),
            integer: false,
        },
        Some("rad") => Scaled {
            value: value * RADIAN_TO_DEGREE,
            precision: 1,
            unit: Some("deg"),
            integer: false,
        },
        Some("rad/s") => Scaled {
            value: value * RADIAN_TO_DEGREE,
            precision: precision(field.resolution * RADIAN_TO_DEGREE),
            unit: Some("deg/s"),
            integer: false,
        },
        _ => plain,
    }
}

fn json_number(value: f64, precision: usize) -> Json {
    let rounded: f64 = format!("{:.*}", precision, value).parse().unwrap_or(value);
    if precision == 0 && rounded.abs() < 9.0e15 {
        return json!(rounded as i64);
    }
    serde_json::Number::from_f64(rounded).map_or(Json::Null, Json::Number)
}

fn name_value(value: Json, name: Option<Json>) -> Json {
    json!({ "value": value, "name": name.unwrap_or(Json::Null) })
}

fn hidden(fv: &FieldValue, config: &RenderConfig) -> bool {
    fv.field.is_reserved() && !config.show_bytes
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" ")
}

fn json_field(fv: &FieldValue, config: &RenderConfig) -> Option<Json> {
    if hidden(fv, config) {
        return None;
    }
    json_value(fv.field, &fv.value, config)
}

fn json_value(field: &'static Field, value: &Value, config: &RenderConfig) -> Option<Json> {
    let nv = config.name_value;
    let rendered = match value {
        Value::NotPresent | Value::Error | Value::OutOfRange { .. } => {
            return config.show_empty.then_some(Json::Null);
        }
        Value::Number { raw, value } => {
            let scaled = scale(field, *value, config.si);
            if scaled.integer {
                json!(raw + field.offset)
            } else {
                json_number(scaled.value, scaled.precision)
            }
        }
        Value::Float(v) => serde_json::Number::from_f64(*v).map_or(Json::Null, Json::Number),
        Value::Decimal(digits) => json!(digits),
        Value::Lookup { raw, label } => match (label, nv) {
            (Some(label), true) => name_value(json!(raw), Some(json!(label))),
            (Some(label), false) => json!(label),
            (None, true) => {
                if config.show_empty {
                    name_value(json!(raw), None)
                } else {
                    json!({ "value": raw })
                }
            }
            (None, false) => json!(raw),
        },
        Value::BitLookup { raw, labels } => {
            if *raw == 0 {
                return config.show_empty.then_some(Json::Null);
            }
            if nv {
                let bits = (0..64).filter(|bit| raw & (1u64 << bit) != 0);
                Json::Array(
                    bits.zip(labels)
                        .map(|(bit, label)| name_value(json!(1u64 << bit), Some(json!(label))))
                        .collect(),
                )
            } else {
                json!(labels)
            }
        }
        Value::Date(date) => {
            let text = date.format("%Y-%m-%d").to_string();
            if nv {
                let days = (*date - chrono::NaiveDate::default()).num_days();
                name_value(json!(days), Some(json!(text)))
            } else {
                json!(text)
            }
        }
        Value::Time { raw, .. } => {
            let text = format_time(*raw, field.resolution);
            if nv { name_value(json!(raw), Some(json!(text))) } else { json!(text) }
        }
        Value::LatLon { raw, degrees } => match config.geo {
            GeoFormat::Dd => json_number(*degrees, latlon_digits(field)),
            geo => {
                let text = format_geo(field, *degrees, geo, true);
                if nv { name_value(json!(raw), Some(json!(text))) } else { json!(text) }
            }
        },
        Value::Mmsi(mmsi) => json!(format!("{:09}", mmsi)),
        Value::Pgn { pgn, description } => {
            if nv {
                if description.is_some() || config.show_empty {
                    name_value(json!(pgn), description.map(|d| json!(d)))
                } else {
                    json!({ "value": pgn })
                }
            } else {
                json!(pgn)
            }
        }
        Value::Text(text) => json!(text),
        Value::Binary { bytes, .. } => json!(hex(bytes)),
        Value::KeyValue { field, value } => return json_value(field, value, config),
    };
    Some(rendered)
}

fn text_field(fv: &FieldValue, config: &RenderConfig) -> Option<String> {
    if hidden(fv, config) {
        return None;
    }
    Some(text_value(fv.field, &fv.value, config))
}

fn text_value(field: &'static Field, value: &Value, config: &RenderConfig) -> String {
    match value {
        Value::NotPresent => "Unknown".to_string(),
        Value::Error | Value::OutOfRange { .. } => "ERROR".to_string(),
        Value::Number { raw, value } => {
            let scaled = scale(field, *value, config.si);
            let mut text = if scaled.integer {
                (raw + field.offset).to_string()
            } else if scaled.unit == Some("m") && scaled.value >= 1000.0 {
                return format!("{:.*} km", scaled.precision + 3, scaled.value / 1000.0);
            } else {
                format!("{:.*}", scaled.precision, scaled.value)
            };
            if let Some(unit) = scaled.unit {
                let _ = write!(text, " {}", unit);
            }
            text
        }
        Value::Float(v) => match field.unit {
            Some(unit) => format!("{} {}", v, unit),
            None => v.to_string(),
        },
        Value::Decimal(digits) => digits.clone(),
        Value::Lookup { raw, label } => label.map_or_else(|| raw.to_string(), str::to_string),
        Value::BitLookup { raw, labels } => {
            if *raw == 0 {
                "None".to_string()
            } else {
                labels.join(",")
            }
        }
        Value::Date(date) => date.format("%Y-%m-%d").to_string(),
        Value::Time { raw, .. } => format_time(*raw, field.resolution),
        Value::LatLon { degrees, .. } => match config.geo {
            GeoFormat::Dd => format!("{:10.*}", latlon_digits(field), degrees),
            geo => format_geo(field, *degrees, geo, false),
        },
        Value::Mmsi(mmsi) => format!("{:09}", mmsi),
        Value::Pgn { pgn, description } => match description {
            Some(d) => format!("{} ({})", pgn, d),
            None => pgn.to_string(),
        },
        Value::Text(text) => text.clone(),
        Value::Binary { bytes, .. } => hex(bytes),
        Value::KeyValue { field, value } => text_value(field, value, config),
    }
}

fn latlon_digits(field: &Field) -> usize {
    if field.bits == Some(64) { 16 } else { 7 }
}

/// `HH:MM:SS` with as many fraction digits as the resolution carries
pub fn format_time(raw: i64, resolution: f64) -> String {
    let sign = if raw < 0 { "-" } else { "" };
    let digits = decimals(resolution);
    let per_second = 10u128.pow(digits as u32);
    // one raw step in units of 10^-digits seconds
    let step = (resolution * per_second as f64).round() as u128;
    let value = u128::from(raw.unsigned_abs()) * step;
    let total = value / per_second;
    let fraction = value % per_second;
    let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);
    if digits > 0 {
        format!("{}{:02}:{:02}:{:02}.{:0digits$}", sign, hours, minutes, seconds, fraction, digits = digits)
    } else {
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
    }
}

fn format_geo(field: &Field, degrees: f64, geo: GeoFormat, json: bool) -> String {
    let hemisphere = match (field.name.contains("ongit"), degrees >= 0.0) {
        (true, true) => 'E',
        (true, false) => 'W',
        (false, true) => 'N',
        (false, false) => 'S',
    };
    let dd = degrees.abs();
    let mut whole = dd.floor();
    let remainder = dd - whole;
    match geo {
        GeoFormat::Dm => {
            let minutes = remainder * 60.0;
            if json {
                format!("{:02}&deg; {:6.3} {}", whole as u32, minutes, hemisphere)
            } else {
                format!("{:02}d {:6.3} {}", whole as u32, minutes, hemisphere)
            }
        }
        _ => {
            let mut minutes = (remainder * 60.0).floor();
            let mut seconds = remainder * 3600.0 - 60.0 * minutes;
            if seconds >= 59.9995 {
                minutes += 1.0;
                seconds = 0.0;
            }
            if minutes >= 60.0 {
                whole += 1.0;
                minutes = 0.0;
                seconds = 0.0;
            }
            if json {
                format!("{:02}&deg;{:02}&rsquo;{:06.3}&rdquo;{}", whole as u32, minutes as u32, seconds, hemisphere)
            } else {
                format!("{:02}d {:02}' {:06.3}\"{}", whole as u32, minutes as u32, seconds, hemisphere)
            }
        }
    }
}

/// Text description of every PGN in the catalogue
pub fn explain(registry: &Registry, style: NameStyle) -> String {
    let mut out = String::new();
    for def in registry.pgns() {
        explain_pgn(&mut out, def, style);
    }
    out
}

fn explain_pgn(out: &mut String, def: &PgnDef, style: NameStyle) {
    let (bits, variable) = def.fixed_bits();
    let length = if variable { "variable".to_string() } else { bits.div_ceil(8).to_string() };
    let _ = writeln!(
        out,
        "PGN: {} / {:08o} / {:05X} - {} - {}\n",
        def.pgn, def.pgn, def.pgn, length, def.description
    );
    for group in def.repeating.iter().flatten() {
        let _ = match group.count {
            RepeatCount::Field(order) => writeln!(
                out,
                "     Fields {} to {} repeat, the count is in field {}.\n",
                group.start,
                group.start + group.field_count - 1,
                order
            ),
            RepeatCount::Remainder => writeln!(
                out,
                "     The last {} fields repeat until the data is exhausted.\n",
                group.field_count
            ),
        };
    }
    if let Some(explanation) = def.explanation {
        let _ = writeln!(out, "     {}\n", explanation);
    }
    for field in &def.fields {
        let _ = writeln!(out, "  Field #{}: {}", field.order, field_name(field, style));
        match field.bits {
            Some(bits) => {
                let _ = writeln!(out, "                  Bits: {}", bits);
            }
            None => {
                let _ = writeln!(out, "                  Bits: variable");
            }
        }
        if let Some(value) = field.match_value {
            let _ = writeln!(out, "                  Match: {}", value);
        }
        if let Some(unit) = field.unit {
            let _ = writeln!(out, "                  Unit: {}", unit);
        }
        if field.printer.is_numeric() && field.resolution != 1.0 {
            let _ = writeln!(out, "                  Resolution: {}", field.resolution);
        }
        let _ = writeln!(out, "                  Signed: {}", field.signed);
        if field.offset != 0 {
            let _ = writeln!(out, "                  Offset: {}", field.offset);
        }
        if let Some((min, max)) = field.range {
            let _ = writeln!(out, "                  Range: {}..{}", min, max);
        }
        if field.proprietary {
            let _ = writeln!(out, "                  Only present when the PGN is proprietary");
        }
        if let Some(table) = field.lookup {
            match table.kind {
                LookupKind::Pair(entries) => {
                    let _ = writeln!(out, "                  Enumeration: {}", table.name);
                    for (value, label) in entries {
                        let _ = writeln!(out, "                  Lookup: {}={}", value, label);
                    }
                }
                LookupKind::Bit(entries) => {
                    let _ = writeln!(out, "                  BitEnumeration: {}", table.name);
                    for (bit, label) in entries {
                        let _ = writeln!(out, "                  Bit: {}={}", bit, label);
                    }
                }
                LookupKind::Triplet(_) => {
                    let _ = writeln!(out, "                  IndirectEnumeration: {}", table.name);
                }
            }
        }
        if let Some(description) = field.description {
            let _ = writeln!(out, "                  Description: {}", description);
        }
    }
    out.push_str("\n\n");
}

/// The catalogue as JSON: field types and PGNs with their fields
pub fn explain_json(registry: &Registry) -> Json {
    let field_types: Vec<Json> = registry
        .field_types()
        .iter()
        .map(|t| {
            let mut o = Map::new();
            o.insert("Name".into(), json!(t.name));
            o.insert("Description".into(), json!(t.description));
            match t.size {
                FieldSize::Bits(bits) => {
                    o.insert("Bits".into(), json!(bits));
                }
                FieldSize::Variable => {
                    o.insert("BitLengthVariable".into(), json!(true));
                }
                FieldSize::PerField => {}
            }
            o.insert("Signed".into(), json!(t.signed));
            o.insert("Resolution".into(), json!(t.resolution));
            if t.offset != 0 {
                o.insert("Offset".into(), json!(t.offset));
            }
            if let Some(unit) = t.unit {
                o.insert("Unit".into(), json!(unit));
            }
            if let Some(pq) = t.physical {
                o.insert("PhysicalQuantity".into(), json!(pq.name));
            }
            if let Some((min, max)) = t.range {
                o.insert("RangeMin".into(), json!(min));
                o.insert("RangeMax".into(), json!(max));
            }
            Json::Object(o)
        })
        .collect();

    let pgns: Vec<Json> = registry.pgns().iter().map(explain_pgn_json).collect();
    json!({ "FieldTypes": field_types, "PGNs": pgns })
}

fn explain_pgn_json(def: &PgnDef) -> Json {
    let (bits, variable) = def.fixed_bits();
    let mut o = Map::new();
    o.insert("PGN".into(), json!(def.pgn));
    o.insert("Id".into(), json!(def.camel_description));
    o.insert("Description".into(), json!(def.description));
    if let Some(explanation) = def.explanation {
        o.insert("Explanation".into(), json!(explanation));
    }
    if let Some(url) = def.url {
        o.insert("URL".into(), json!(url));
    }
    o.insert("Type".into(), json!(def.transport.as_str()));
    o.insert("Complete".into(), json!(def.complete == 0));
    o.insert("Fallback".into(), json!(def.fallback));
    if let Some(priority) = def.priority {
        o.insert("Priority".into(), json!(priority));
    }
    o.insert("FieldCount".into(), json!(def.field_count()));
    if !variable {
        o.insert("Length".into(), json!(bits.div_ceil(8)));
    }
    for (i, group) in def.repeating.iter().enumerate() {
        let Some(group) = group else { continue };
        let n = i + 1;
        o.insert(format!("RepeatingFieldSet{}Size", n), json!(group.field_count));
        o.insert(format!("RepeatingFieldSet{}StartField", n), json!(group.start));
        if let RepeatCount::Field(order) = group.count {
            o.insert(format!("RepeatingFieldSet{}CountField", n), json!(order));
        }
    }
    let fields: Vec<Json> = def
        .fields
        .iter()
        .map(|f| {
            let mut fo = Map::new();
            fo.insert("Order".into(), json!(f.order));
            fo.insert("Id".into(), json!(f.camel_name));
            fo.insert("Name".into(), json!(f.name));
            if let Some(description) = f.description {
                fo.insert("Description".into(), json!(description));
            }
            match f.bits {
                Some(bits) => {
                    fo.insert("BitLength".into(), json!(bits));
                }
                None => {
                    fo.insert("BitLengthVariable".into(), json!(true));
                }
            }
            if let Some(offset) = f.bit_offset {
                fo.insert("BitOffset".into(), json!(offset));
                fo.insert("BitStart".into(), json!(offset % 8));
            }
            if let Some(value) = f.match_value {
                fo.insert("Match".into(), json!(value));
            }
            if let Some(unit) = f.unit {
                fo.insert("Unit".into(), json!(unit));
            }
            fo.insert("Resolution".into(), json!(f.resolution));
            fo.insert("Signed".into(), json!(f.signed));
            if f.offset != 0 {
                fo.insert("Offset".into(), json!(f.offset));
            }
            if let Some((min, max)) = f.range {
                fo.insert("RangeMin".into(), json!(min));
                fo.insert("RangeMax".into(), json!(max));
            }
            fo.insert("FieldType".into(), json!(f.type_name));
            if f.proprietary {
                fo.insert("Condition".into(), json!("PGNIsProprietary"));
            }
            if let Some(table) = f.lookup {
                let key = match table.kind {
                    LookupKind::Pair(_) => "LookupEnumeration",
                    LookupKind::Triplet(_) => "LookupIndirectEnumeration",
                    LookupKind::Bit(_) => "LookupBitEnumeration",
                };
                fo.insert(key.into(), json!(table.name));
            }
            Json::Object(fo)
        })
        .collect();
    o.insert("Fields".into(), Json::Array(fields));
    Json::Object(o)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;
    use crate::pgn::registry;
    use approx::assert_relative_eq;

    fn heading() -> Message {
        let frame = RawFrame::from_can_id(
            "2023-01-01T00:00:00.000Z",
            0x09F1120A,
            &[0x00, 0x5A, 0x1D, 0xFF, 0x7F, 0xFF, 0x7F, 0x00],
        )
        .unwrap();
        decode(frame).unwrap()
    }

    #[test]
    fn test_vessel_heading_json_si() {
        let config = RenderConfig {
            si: true,
            ..RenderConfig::json()
        };
        let json: Json = serde_json::from_str(&render(&heading(), &config)).unwrap();
        assert_eq!(json["pgn"], 127250);
        assert_eq!(json["src"], 10);
        assert_eq!(json["dst"], 255);
        assert_eq!(json["prio"], 2);
        assert_eq!(json["description"], "Vessel Heading");
        let fields = &json["fields"];
        assert_eq!(fields["SID"], 0);
        assert_relative_eq!(fields["Heading"].as_f64().unwrap(), 0.7514);
        assert_eq!(fields["Reference"], "True");
        assert!(fields.get("Deviation").is_none());
        assert!(fields.get("Reserved").is_none());
    }

    #[test]
    fn test_empty_fields_as_null() {
        let config = RenderConfig {
            show_empty: true,
            ..RenderConfig::json()
        };
        let json = to_json(&heading(), &config);
        assert!(json["fields"]["Deviation"].is_null());
        assert!(json["fields"]["Variation"].is_null());
        // heading converted to degrees
        assert_relative_eq!(json["fields"]["Heading"].as_f64().unwrap(), 43.1);
    }

    #[test]
    fn test_name_value_lookup() {
        let config = RenderConfig {
            name_value: true,
            ..RenderConfig::json()
        };
        let json = to_json(&heading(), &config);
        assert_eq!(json["fields"]["Reference"], json!({"value": 0, "name": "True"}));
    }

    #[test]
    fn test_camel_names() {
        let config = RenderConfig {
            name_style: NameStyle::UpperCamel,
            si: true,
            ..RenderConfig::json()
        };
        let json = to_json(&heading(), &config);
        assert!(json["fields"].get("Heading").is_some());
        assert!(json["fields"].get("Sid").is_some() || json["fields"].get("SID").is_some());
    }

    #[test]
    fn test_human_line() {
        let text = render(&heading(), &RenderConfig::default());
        assert_eq!(
            text,
            "2023-01-01T00:00:00.000Z 2  10 255 127250 Vessel Heading:  SID = 0; Heading = 43.1 deg; \
             Deviation = Unknown; Variation = Unknown; Reference = True"
        );
    }

    #[test]
    fn test_system_time_rendering() {
        let frame = RawFrame::new(
            "t",
            3,
            126992,
            4,
            255,
            vec![0x01, 0xF0, 0x9E, 0x4B, 0x00, 0x51, 0x25, 0x02],
        );
        let json = to_json(&decode(frame).unwrap(), &RenderConfig::json());
        assert_eq!(json["fields"]["Date"], "2023-01-01");
        assert_eq!(json["fields"]["Time"], "01:00:00.0000");
        assert_eq!(json["fields"]["Source"], "GPS");
    }

    #[test]
    fn test_repeating_fields_in_list() {
        let data = vec![0x00, 0x10, 0xF1, 0x01, 0x14, 0xF1, 0x01];
        let frame = RawFrame::new("t", 3, 126464, 1, 255, data);
        let json = to_json(&decode(frame).unwrap(), &RenderConfig::json());
        let list = json["fields"]["list"].as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["PGN"], 127248);
        assert_eq!(list[1]["PGN"], 127252);

        let text = to_text(&decode(RawFrame::new("t", 3, 126464, 1, 255, vec![0x00, 0x10, 0xF1, 0x01, 0x14, 0xF1, 0x01])).unwrap(), &RenderConfig::default());
        assert!(text.contains("PGN 2 = 127252"));
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(36_000_000, 0.0001), "01:00:00.0000");
        assert_eq!(format_time(45_296_500, 0.001), "12:34:56.500");
        assert_eq!(format_time(-90, 1.0), "-00:01:30");
        assert_eq!(format_time(2, 60.0), "00:02:00");
        assert_eq!(format_time(39, 0.05), "00:00:01.95");
        assert_eq!(format_time(199, 0.005), "00:00:00.995");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(decimals(1.0), 0);
        assert_eq!(decimals(0.1), 1);
        assert_eq!(decimals(0.0001), 4);
        assert_eq!(decimals(1e-7), 7);
        assert_eq!(decimals(0.05), 2);
        assert_eq!(decimals(0.25), 2);
        assert_eq!(decimals(60.0), 0);
        assert_eq!(decimals(1e-16), 16);
    }

    #[test]
    fn test_geo_formats() {
        let registry = registry().unwrap();
        let def = registry.search_pgn(129025).unwrap();
        let lat = def.field_by_name("Latitude").unwrap();
        let lon = def.field_by_name("Longitude").unwrap();
        assert_eq!(format_geo(lat, 52.5, GeoFormat::Dm, false), "52d 30.000 N");
        assert_eq!(format_geo(lon, -4.25, GeoFormat::Dms, false), "04d 15' 00.000\"W");
        assert_eq!(format_geo(lat, -0.5, GeoFormat::Dm, true), "00&deg; 30.000 S");
    }

    #[test]
    fn test_position_rapid_update_dd() {
        let lat: i32 = 525_000_000;
        let lon: i32 = -42_500_000;
        let mut data = lat.to_le_bytes().to_vec();
        data.extend_from_slice(&lon.to_le_bytes());
        let msg = decode(RawFrame::new("t", 2, 129025, 1, 255, data)).unwrap();
        let json = to_json(&msg, &RenderConfig::json());
        assert_relative_eq!(json["fields"]["Latitude"].as_f64().unwrap(), 52.5);
        assert_relative_eq!(json["fields"]["Longitude"].as_f64().unwrap(), -4.25);
        let text = to_text(&msg, &RenderConfig::default());
        assert!(text.contains("Latitude = 52.5000000"));
    }

    #[test]
    fn test_binary_hex_lowercase() {
        let msg = decode(RawFrame::new("t", 6, 0xFA00, 3, 255, vec![0x87, 0x98, 0xAB, 0xCD, 3, 4, 5, 6])).unwrap();
        let json = to_json(&msg, &RenderConfig::json());
        assert_eq!(json["fields"]["Data"], "ab cd 03 04 05 06");
    }

    #[test]
    fn test_render_data() {
        let dump = render_data(&heading());
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" 00 5a 1d ff 7f ff 7f 00"));
        assert!(lines[1].contains("  Z"));
    }

    #[test]
    fn test_render_raw() {
        let frame = RawFrame::new("2023-01-01T00:00:00.000Z", 2, 127250, 10, 255, vec![0x00, 0x5a, 0xff]);
        assert_eq!(render_raw(&frame), "2023-01-01T00:00:00.000Z 2 010 255 127250 : 00 5a ff");
    }

    #[test]
    fn test_explain_covers_catalogue() {
        let registry = registry().unwrap();
        let text = explain(registry, NameStyle::Plain);
        assert!(text.contains("PGN: 127250 / 00370422 / 1F112 - 8 - Vessel Heading"));
        let json = explain_json(registry);
        let pgns = json["PGNs"].as_array().unwrap();
        assert_eq!(pgns.len(), registry.pgns().len());
        let heading = pgns.iter().find(|p| p["PGN"] == 127250).unwrap();
        assert_eq!(heading["Fields"][1]["Name"], "Heading");
        assert_eq!(heading["Length"], 8);
    }

    #[test]
    fn test_config_serde() {
        let config: RenderConfig = serde_json::from_str(r#"{"format":"json","geo":"dms","name_style":"upper-camel"}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.geo, GeoFormat::Dms);
        assert_eq!(config.name_style, NameStyle::UpperCamel);
        assert!(!config.si);
    }
}
