//! PGN registry and resolver
//!
//! The catalogue in [`defs`] is written with the const helpers of [`builder`].
//! At first use it is resolved against the flattened field types into
//! [`PgnDef`] records sorted by PRN, with camel case names and the bit offsets
//! of every field in the fixed prefix of the payload.

pub mod builder;
mod defs;

use std::sync::OnceLock;

use tracing::debug;

use crate::bits::read_unsigned;
use crate::error::N2kError;
use crate::field_type::{flatten, numeric_range, FieldSize, FieldType, PrinterKind, FIELD_TYPES};
use crate::lookup::LookupTable;
use crate::physical::PhysicalQuantity;

use builder::{FieldSpec, PgnSpec};

pub const COMPLETE: u16 = 0;
pub const FIELDS_UNKNOWN: u16 = 1;
pub const FIELD_LENGTHS_UNKNOWN: u16 = 2;
pub const RESOLUTION_UNKNOWN: u16 = 4;
pub const LOOKUPS_UNKNOWN: u16 = 8;
pub const NOT_SEEN: u16 = 16;
pub const INTERVAL_UNKNOWN: u16 = 32;
pub const MISSING_COMPANY_FIELDS: u16 = 64;
pub const INCOMPLETE: u16 = FIELDS_UNKNOWN | FIELD_LENGTHS_UNKNOWN | RESOLUTION_UNKNOWN;
pub const INCOMPLETE_LOOKUP: u16 = INCOMPLETE | LOOKUPS_UNKNOWN;
pub const PDF_ONLY: u16 = FIELD_LENGTHS_UNKNOWN | RESOLUTION_UNKNOWN | LOOKUPS_UNKNOWN | NOT_SEEN;

/// Maximum number of fields in one PGN
pub const MAX_FIELDS: usize = 33;

/// Interval value meaning "never sent periodically"
pub const INTERVAL_NEVER: u16 = u16::MAX;

/// How a PGN travels over the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Single,
    Fast,
    IsoTp,
    /// Single frame when the payload fits in 8 bytes, fast-packet otherwise
    Mixed,
}

impl Transport {
    pub fn as_str(self) -> &'static str {
        match self {
            Transport::Single => "Single",
            Transport::Fast => "Fast",
            Transport::IsoTp => "ISO",
            Transport::Mixed => "Mixed",
        }
    }

    /// Largest payload in bytes
    pub fn max_payload(self) -> usize {
        match self {
            Transport::Single => 8,
            Transport::Fast | Transport::Mixed => 223,
            Transport::IsoTp => 1785,
        }
    }
}

/// Where the repetition count of a group comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    /// Value of the field with this 1-based order
    Field(usize),
    /// Repeat while payload remains
    Remainder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatingGroup {
    pub count: RepeatCount,
    pub field_count: usize,
    /// 1-based order of the first field of the group
    pub start: usize,
}

impl RepeatingGroup {
    pub fn contains(&self, order: usize) -> bool {
        order >= self.start && order < self.start + self.field_count
    }
}

/// A field of a PGN with everything needed to decode it
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub camel_name: String,
    /// 1-based position in the PGN
    pub order: usize,
    pub type_name: &'static str,
    pub printer: PrinterKind,
    /// `None` for fields whose width is found while decoding
    pub bits: Option<usize>,
    pub signed: bool,
    pub resolution: f64,
    /// Excess-K offset in raw units
    pub offset: i64,
    pub unit: Option<&'static str>,
    pub physical: Option<&'static PhysicalQuantity>,
    pub description: Option<&'static str>,
    pub precision: Option<u8>,
    pub proprietary: bool,
    pub match_value: Option<u64>,
    pub lookup: Option<&'static LookupTable>,
    /// Order of the field holding the primary key of a triplet lookup
    pub lookup_order: Option<usize>,
    /// Bit offset in the payload, known for the fixed prefix only
    pub bit_offset: Option<usize>,
    pub range: Option<(f64, f64)>,
}

impl Field {
    /// Convert a raw integer to a physical value
    pub fn to_value(&self, raw: i64) -> f64 {
        (raw as f64 + self.offset as f64) * self.resolution
    }

    /// Convert a physical value back to the nearest raw integer
    pub fn to_raw(&self, value: f64) -> i64 {
        (value / self.resolution).round() as i64 - self.offset
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self.printer, PrinterKind::Reserved | PrinterKind::Spare)
    }
}

// fields are only ever compared within the same catalogue
impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.name == other.name && self.type_name == other.type_name
    }
}

/// A resolved PGN definition
#[derive(Debug, Clone)]
pub struct PgnDef {
    pub description: &'static str,
    pub camel_description: String,
    pub pgn: u32,
    pub complete: u16,
    pub transport: Transport,
    pub fields: Vec<Field>,
    pub fallback: bool,
    pub has_match_fields: bool,
    pub explanation: Option<&'static str>,
    pub url: Option<&'static str>,
    pub priority: Option<u8>,
    /// Milliseconds, 0 when unknown, [`INTERVAL_NEVER`] when not periodic
    pub interval: u16,
    pub repeating: [Option<RepeatingGroup>; 2],
}

impl PgnDef {
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field by 1-based order
    pub fn field(&self, order: usize) -> Option<&Field> {
        order.checked_sub(1).and_then(|i| self.fields.get(i))
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Sum of the fixed field sizes, and whether a variable field exists
    pub fn fixed_bits(&self) -> (usize, bool) {
        let mut total = 0;
        let mut variable = false;
        for field in &self.fields {
            match field.bits {
                Some(bits) => total += bits,
                None => variable = true,
            }
        }
        (total, variable)
    }

    /// Every field is fixed width and no group repeats
    pub fn is_fixed_layout(&self) -> bool {
        self.repeating.iter().all(Option::is_none) && self.fields.iter().all(|f| f.bits.is_some() && !f.proprietary)
    }

    fn match_fields_equal(&self, payload: &[u8]) -> bool {
        self.fields.iter().filter(|f| f.match_value.is_some()).all(|f| {
            match (f.bit_offset, f.bits, f.match_value) {
                (Some(offset), Some(bits), Some(expected)) => read_unsigned(payload, offset, bits) == Some(expected),
                _ => false,
            }
        })
    }
}

/// A PRN range with the transport used for PGNs not in the catalogue
#[derive(Debug, Clone, Copy)]
pub struct PgnRange {
    pub start: u32,
    pub end: u32,
    pub step: u32,
    pub who: &'static str,
    pub transport: Transport,
}

pub static PGN_RANGES: &[PgnRange] = &[
    PgnRange { start: 0xe800, end: 0xeeff, step: 256, who: "ISO 11783", transport: Transport::Single },
    PgnRange { start: 0xef00, end: 0xefff, step: 256, who: "NMEA", transport: Transport::Single },
    PgnRange { start: 0xf000, end: 0xfeff, step: 1, who: "NMEA", transport: Transport::Single },
    PgnRange { start: 0xff00, end: 0xffff, step: 1, who: "Manufacturer", transport: Transport::Single },
    PgnRange { start: 0x1ed00, end: 0x1eeff, step: 256, who: "NMEA", transport: Transport::Fast },
    PgnRange { start: 0x1ef00, end: 0x1efff, step: 256, who: "Manufacturer", transport: Transport::Fast },
    PgnRange { start: 0x1f000, end: 0x1feff, step: 1, who: "NMEA", transport: Transport::Mixed },
    PgnRange { start: 0x1ff00, end: 0x1ffff, step: 1, who: "Manufacturer", transport: Transport::Fast },
];

pub fn find_range(prn: u32) -> Option<&'static PgnRange> {
    PGN_RANGES.iter().find(|r| prn >= r.start && prn <= r.end)
}

/// PRNs whose payload starts with a manufacturer code
pub fn is_proprietary(prn: u32) -> bool {
    prn == 0xef00 || (0xff00..=0xffff).contains(&prn) || prn == 0x1ef00 || (0x1ff00..=0x1ffff).contains(&prn)
}

/// Lower camel case identifier for a display name: "Wind Speed" -> "windSpeed"
pub fn camel_case(name: &str, upper: bool) -> String {
    let mut out = String::with_capacity(name.len());
    let mut capitalize = upper;
    for c in name.chars() {
        if c.is_ascii_alphabetic() {
            if capitalize {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c.to_ascii_lowercase());
            }
            capitalize = false;
        } else {
            if c.is_ascii_digit() {
                out.push(c);
            }
            capitalize = upper || !out.is_empty();
        }
    }
    out
}

/// The flattened field types and the resolved PGN catalogue
#[derive(Debug)]
pub struct Registry {
    field_types: Vec<FieldType>,
    pgns: Vec<PgnDef>,
}

static REGISTRY: OnceLock<Result<Registry, N2kError>> = OnceLock::new();

/// The process wide registry, built on first use
pub fn registry() -> Result<&'static Registry, N2kError> {
    REGISTRY.get_or_init(Registry::build).as_ref().map_err(Clone::clone)
}

impl Registry {
    pub fn build() -> Result<Self, N2kError> {
        let field_types = flatten(FIELD_TYPES)?;
        let mut pgns = defs::catalogue()
            .map(|spec| resolve_pgn(spec, &field_types))
            .collect::<Result<Vec<_>, _>>()?;
        pgns.sort_by_key(|p| p.pgn);
        debug!("PGN registry ready: {} definitions, {} field types", pgns.len(), field_types.len());
        Ok(Self { field_types, pgns })
    }

    pub fn pgns(&self) -> &[PgnDef] {
        &self.pgns
    }

    pub fn field_types(&self) -> &[FieldType] {
        &self.field_types
    }

    pub fn field_type(&self, name: &str) -> Option<&FieldType> {
        self.field_types.iter().find(|t| t.name == name)
    }

    /// All definitions sharing this PRN, in catalogue order
    pub fn variants(&self, prn: u32) -> &[PgnDef] {
        let start = self.pgns.partition_point(|p| p.pgn < prn);
        let end = self.pgns.partition_point(|p| p.pgn <= prn);
        &self.pgns[start..end]
    }

    /// First definition for a PRN, if any; a catch-all entry only when nothing else exists
    pub fn search_pgn(&self, prn: u32) -> Option<&PgnDef> {
        let variants = self.variants(prn);
        variants.iter().find(|p| !p.fallback).or(variants.first())
    }

    /// Field `index` (1-based) of the first definition of `prn`
    pub fn get_field(&self, prn: u32, index: usize) -> Option<&Field> {
        self.search_pgn(prn).and_then(|p| p.field(index))
    }

    /// Definition describing `payload` sent on `prn`
    ///
    /// Variants are told apart by their match fields; a PRN without a matching
    /// variant gets the fallback definition of its range.
    pub fn find_pgn(&self, prn: u32, payload: &[u8]) -> Result<&PgnDef, N2kError> {
        let candidates = self.variants(prn);

        if let Some(def) = candidates
            .iter()
            .find(|p| p.has_match_fields && p.match_fields_equal(payload))
        {
            return Ok(def);
        }
        if let Some(def) = candidates.iter().find(|p| !p.has_match_fields && !p.fallback) {
            return Ok(def);
        }
        self.fallback_for(prn)
    }

    /// Catch-all definition of the range containing `prn`
    pub fn fallback_for(&self, prn: u32) -> Result<&PgnDef, N2kError> {
        let range = find_range(prn).ok_or(N2kError::UnknownPgn(prn))?;
        let def = self
            .variants(range.start)
            .iter()
            .find(|p| p.fallback)
            .ok_or(N2kError::UnknownPgn(prn))?;
        debug!("PGN {} resolved to fallback {}", prn, def.description);
        Ok(def)
    }

    /// Transport class of a PRN, from its first definition or its range
    pub fn transport(&self, prn: u32) -> Option<Transport> {
        self.search_pgn(prn)
            .map(|p| p.transport)
            .or_else(|| find_range(prn).map(|r| r.transport))
    }
}

fn resolve_field(spec: &FieldSpec, order: usize, pgn: u32, types: &[FieldType]) -> Result<Field, N2kError> {
    let ft = types.iter().find(|t| t.name == spec.field_type).ok_or_else(|| {
        N2kError::Registry(format!("PGN {} field {} has unknown type {}", pgn, spec.name, spec.field_type))
    })?;

    let bits = match (ft.size, spec.size) {
        (FieldSize::Bits(t), Some(FieldSize::Bits(s))) if t != s => {
            return Err(N2kError::Registry(format!(
                "PGN {} field {} declares {} bits but type {} has {}",
                pgn, spec.name, s, ft.name, t
            )));
        }
        (_, Some(FieldSize::Variable)) | (FieldSize::Variable, None) => None,
        (_, Some(FieldSize::Bits(s))) => Some(s as usize),
        (FieldSize::Bits(t), _) => Some(t as usize),
        _ => {
            return Err(N2kError::Registry(format!(
                "PGN {} field {} of type {} needs an explicit size",
                pgn, spec.name, ft.name
            )));
        }
    };

    let resolution = spec.resolution.unwrap_or(ft.resolution);
    let offset = spec.offset.unwrap_or(ft.offset);
    let range = match bits {
        Some(n) if ft.printer.is_numeric() => Some(numeric_range(n as u32, ft.signed, resolution, offset)),
        _ => None,
    };

    Ok(Field {
        name: spec.name,
        camel_name: camel_case(spec.name, false),
        order,
        type_name: ft.name,
        printer: ft.printer,
        bits,
        signed: ft.signed,
        resolution,
        offset,
        unit: spec.unit.or(ft.unit),
        physical: ft.physical,
        description: spec.description,
        precision: spec.precision,
        proprietary: spec.proprietary,
        match_value: spec.match_value,
        lookup: spec.lookup,
        lookup_order: spec.lookup_order.map(usize::from),
        bit_offset: None,
        range,
    })
}

fn resolve_pgn(spec: &PgnSpec, types: &[FieldType]) -> Result<PgnDef, N2kError> {
    if spec.fields.len() > MAX_FIELDS {
        return Err(N2kError::Registry(format!(
            "PGN {} has {} fields, more than {}",
            spec.pgn,
            spec.fields.len(),
            MAX_FIELDS
        )));
    }

    let repeating = spec.repeating.map(|g| {
        g.map(|g| RepeatingGroup {
            count: match g.count_field {
                Some(order) => RepeatCount::Field(usize::from(order)),
                None => RepeatCount::Remainder,
            },
            field_count: usize::from(g.field_count),
            start: usize::from(g.start),
        })
    });

    let mut fields = Vec::with_capacity(spec.fields.len());
    let mut offset = Some(0usize);
    let mut seen_names: Vec<String> = Vec::new();
    for (i, field_spec) in spec.fields.iter().enumerate() {
        let order = i + 1;
        let mut field = resolve_field(field_spec, order, spec.pgn, types)?;

        if field_spec.proprietary || repeating.iter().flatten().any(|g| g.contains(order)) {
            offset = None;
        }
        field.bit_offset = offset;
        offset = match (offset, field.bits) {
            (Some(o), Some(b)) => Some(o + b),
            _ => None,
        };

        if seen_names.contains(&field.camel_name) {
            field.camel_name = format!("{}{}", field.camel_name, order);
        }
        seen_names.push(field.camel_name.clone());
        fields.push(field);
    }

    for group in repeating.iter().flatten() {
        if group.start == 0 || group.start + group.field_count - 1 > fields.len() {
            return Err(N2kError::Registry(format!(
                "PGN {} repeating group runs past its {} fields",
                spec.pgn,
                fields.len()
            )));
        }
    }

    let has_match_fields = fields.iter().any(|f| f.match_value.is_some());
    Ok(PgnDef {
        description: spec.description,
        camel_description: camel_case(spec.description, false),
        pgn: spec.pgn,
        complete: spec.complete,
        transport: spec.transport,
        fields,
        fallback: spec.fallback,
        has_match_fields,
        explanation: spec.explanation,
        url: spec.url,
        priority: spec.priority,
        interval: spec.interval,
        repeating,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg() -> &'static Registry {
        registry().unwrap()
    }

    #[test]
    fn test_registry_ready_and_sorted() {
        let r = reg();
        assert!(r.pgns().len() > 100);
        assert!(r.pgns().windows(2).all(|w| w[0].pgn <= w[1].pgn));
    }

    #[test]
    fn test_fixed_size_fits_transport() {
        for p in reg().pgns() {
            let (bits, variable) = p.fixed_bits();
            let bytes = bits.div_ceil(8);
            assert!(
                variable || p.repeating.iter().any(Option::is_some) || bytes <= p.transport.max_payload(),
                "PGN {} {} has {} bytes for transport {}",
                p.pgn,
                p.description,
                bytes,
                p.transport.as_str()
            );
        }
    }

    #[test]
    fn test_match_fields_disjoint() {
        for p in reg().pgns() {
            if p.has_match_fields {
                assert!(p.fields.iter().any(|f| f.match_value.is_some()));
            }
        }
        for (i, a) in reg().pgns().iter().enumerate() {
            for b in reg().pgns()[i + 1..].iter().take_while(|b| b.pgn == a.pgn) {
                if !(a.has_match_fields && b.has_match_fields) {
                    continue;
                }
                // Two variants conflict when every match field they share has the same value
                let clash = a.fields.iter().filter(|f| f.match_value.is_some()).all(|fa| {
                    b.fields
                        .iter()
                        .find(|fb| fb.match_value.is_some() && fb.bit_offset == fa.bit_offset && fb.bits == fa.bits)
                        .is_none_or(|fb| fb.match_value == fa.match_value)
                });
                assert!(!clash, "PGN {}: {} and {} overlap", a.pgn, a.description, b.description);
            }
        }
    }

    #[test]
    fn test_match_fields_in_fixed_prefix() {
        for p in reg().pgns() {
            for f in p.fields.iter().filter(|f| f.match_value.is_some()) {
                assert!(f.bit_offset.is_some(), "PGN {} match field {} has no offset", p.pgn, f.name);
            }
        }
    }

    #[test]
    fn test_fallback_entries() {
        let r = reg();
        for range in PGN_RANGES {
            let def = r.fallback_for(range.start).unwrap();
            assert!(def.fallback);
            assert_eq!(def.pgn, range.start);
        }
        assert!(matches!(r.fallback_for(0x1234), Err(N2kError::UnknownPgn(0x1234))));
    }

    #[test]
    fn test_unknown_pgn_gets_fallback() {
        let payload = [0x00u8; 8];
        let def = reg().find_pgn(0xfa00, &payload).unwrap();
        assert_eq!(def.description, "0xF000-0xFEFF: Standardized single-frame non-addressed");
        assert!(def.fallback);
        let names: Vec<_> = def.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Manufacturer Code", "Reserved", "Industry Code", "Data"]);
    }

    #[test]
    fn test_match_field_selects_variant() {
        let r = reg();
        // 126208 Command: function code 1
        let command = [0x01u8, 0x13, 0xf1, 0x01, 0x08, 0x00];
        assert_eq!(r.find_pgn(126208, &command).unwrap().description, "NMEA - Command group function");
        let ack = [0x02u8, 0x13, 0xf1, 0x01, 0x00, 0x00];
        assert_eq!(r.find_pgn(126208, &ack).unwrap().description, "NMEA - Acknowledge group function");
    }

    #[test]
    fn test_proprietary_variant_or_fallback() {
        let r = reg();
        // Airmar (135), marine industry (4 << 5)
        let airmar = [0x87u8, 0x98, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(r.find_pgn(65285, &airmar).unwrap().description, "Airmar: Boot State Acknowledgment");
        // Unknown manufacturer: all variants carry match fields, so the range fallback applies
        let other = [0x01u8, 0x98, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00];
        let def = r.find_pgn(65285, &other).unwrap();
        assert!(def.fallback);
        assert_eq!(def.pgn, 0xff00);
    }

    #[test]
    fn test_catalogue_families() {
        let r = reg();
        let mut prns: Vec<u32> = r.pgns().iter().filter(|p| !p.fallback).map(|p| p.pgn).collect();
        prns.dedup();
        assert!(prns.len() >= 190, "only {} PRNs", prns.len());
        // routes, AIS, GNSS, station data, J1939 generator, proprietary
        for prn in [129285, 130064, 130074, 129040, 129808, 129538, 129556, 130320, 130578, 65001, 130842, 130880] {
            let def = r.search_pgn(prn).unwrap();
            assert!(!def.fallback, "{} resolves to a fallback", prn);
        }
    }

    #[test]
    fn test_manufacturer_splits_shared_proprietary_id() {
        let r = reg();
        // both carry proprietary ID 50, Navico (275) and Simrad (1857)
        let navico = [0x13u8, 0x99, 0xff, 50, 0x00];
        assert_eq!(r.find_pgn(130816, &navico).unwrap().description, "SonicHub: Init #3");
        let simrad = [0x41u8, 0x9f, 0xff, 50, 0x00];
        assert_eq!(r.find_pgn(130816, &simrad).unwrap().description, "Simrad: Text Message");
        let furuno = [0x3fu8, 0x9f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(r.find_pgn(130820, &furuno).unwrap().description, "Furuno: Unknown");
        assert_eq!(r.transport(130816), Some(Transport::Fast));
    }

    #[test]
    fn test_bit_offsets() {
        let p = reg().search_pgn(127250).unwrap();
        let offsets: Vec<_> = p.fields.iter().map(|f| f.bit_offset).collect();
        assert_eq!(offsets, vec![Some(0), Some(8), Some(24), Some(40), Some(56), Some(58)]);
        assert_eq!(p.transport, Transport::Single);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("Wind Speed", false), "windSpeed");
        assert_eq!(camel_case("SID", false), "sid");
        assert_eq!(camel_case("Vessel Heading", true), "VesselHeading");
        assert_eq!(camel_case("Indicator1", false), "indicator1");
        assert_eq!(camel_case("ISO Address Claim", false), "isoAddressClaim");
    }

    #[test]
    fn test_duplicate_camel_names_numbered() {
        let p = reg().search_pgn(127250).unwrap();
        assert_eq!(p.fields[5].camel_name, "reserved");
        let p = reg().search_pgn(60928).unwrap();
        let names: Vec<_> = p.fields.iter().map(|f| f.camel_name.as_str()).collect();
        for (i, n) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(n));
        }
    }

    #[test]
    fn test_get_field() {
        let r = reg();
        let f = r.get_field(127251, 2).unwrap();
        assert_eq!(f.name, "Rate");
        assert_eq!(f.bits, Some(32));
        assert!(r.get_field(127251, 0).is_none());
        assert!(r.get_field(127251, 40).is_none());
    }

    #[test]
    fn test_transport_of_unknown_prn() {
        let r = reg();
        assert_eq!(r.transport(0x1f0ff), Some(Transport::Mixed));
        assert_eq!(r.transport(0x1ff55), Some(Transport::Fast));
        assert_eq!(r.transport(129029), Some(Transport::Fast));
        assert!(is_proprietary(0x1ef00));
        assert!(!is_proprietary(0x1f000));
    }
}
