//! Compile time building blocks for the PGN catalogue
//!
//! Each helper returns a [`FieldSpec`] describing one field in terms of a
//! field type name plus the few properties a PGN may override. The registry
//! resolves these against the flattened field types at start-up.

use crate::field_type::FieldSize;
use crate::lookup::{LookupTable, INDUSTRY_CODE, MANUFACTURER_CODE};

use super::Transport;

/// One field of a PGN as written in the catalogue
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: &'static str,
    pub size: Option<FieldSize>,
    pub resolution: Option<f64>,
    pub offset: Option<i64>,
    pub unit: Option<&'static str>,
    pub description: Option<&'static str>,
    pub precision: Option<u8>,
    pub proprietary: bool,
    pub match_value: Option<u64>,
    pub lookup: Option<&'static LookupTable>,
    /// For triplet lookups: order of the field holding the primary key
    pub lookup_order: Option<u8>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, field_type: &'static str) -> Self {
        Self {
            name,
            field_type,
            size: None,
            resolution: None,
            offset: None,
            unit: None,
            description: None,
            precision: None,
            proprietary: false,
            match_value: None,
            lookup: None,
            lookup_order: None,
        }
    }

    pub const fn bits(mut self, bits: u32) -> Self {
        self.size = Some(FieldSize::Bits(bits));
        self
    }

    pub const fn bytes(self, bytes: u32) -> Self {
        self.bits(bytes * 8)
    }

    pub const fn variable(mut self) -> Self {
        self.size = Some(FieldSize::Variable);
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

    pub const fn desc(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub const fn precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub const fn proprietary(mut self) -> Self {
        self.proprietary = true;
        self
    }

    pub const fn matches(mut self, value: u64) -> Self {
        self.match_value = Some(value);
        self
    }

    pub const fn lookup(mut self, table: &'static LookupTable) -> Self {
        self.lookup = Some(table);
        self
    }
}

pub const fn typed(name: &'static str, field_type: &'static str) -> FieldSpec {
    FieldSpec::new(name, field_type)
}

pub const fn simple(name: &'static str, bits: u32) -> FieldSpec {
    FieldSpec::new(name, "UNSIGNED_INTEGER").bits(bits)
}

pub const fn simple_signed(name: &'static str, bits: u32) -> FieldSpec {
    FieldSpec::new(name, "INTEGER").bits(bits)
}

pub const fn uint8(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "UINT8")
}

pub const fn uint16(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "UINT16")
}

pub const fn uint32(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "UINT32")
}

pub const fn int32(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "INT32")
}

pub const fn sid() -> FieldSpec {
    uint8("SID")
}

pub const fn instance() -> FieldSpec {
    FieldSpec::new("Instance", "INSTANCE")
}

pub const fn lookup(name: &'static str, bits: u32, table: &'static LookupTable) -> FieldSpec {
    FieldSpec::new(name, "LOOKUP").bits(bits).lookup(table)
}

pub const fn bit_lookup(name: &'static str, bits: u32, table: &'static LookupTable) -> FieldSpec {
    FieldSpec::new(name, "BITLOOKUP").bits(bits).lookup(table)
}

/// Lookup whose label depends on the value of the field at `order`
pub const fn triplet(name: &'static str, bits: u32, table: &'static LookupTable, order: u8) -> FieldSpec {
    let mut spec = lookup(name, bits, table);
    spec.lookup_order = Some(order);
    spec
}

pub const fn match_lookup(name: &'static str, bits: u32, value: u64, table: &'static LookupTable) -> FieldSpec {
    lookup(name, bits, table).matches(value)
}

pub const fn match_field(name: &'static str, bits: u32, value: u64) -> FieldSpec {
    simple(name, bits).matches(value)
}

pub const fn reserved(bits: u32) -> FieldSpec {
    FieldSpec::new("Reserved", "RESERVED").bits(bits)
}

pub const fn spare(bits: u32) -> FieldSpec {
    FieldSpec::new("Spare", "SPARE").bits(bits)
}

pub const fn binary(name: &'static str, bits: u32) -> FieldSpec {
    FieldSpec::new(name, "BINARY").bits(bits)
}

/// Binary blob running to the end of the payload
pub const fn binary_rest(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "BINARY").variable()
}

pub const fn manufacturer() -> FieldSpec {
    FieldSpec::new("Manufacturer Code", "MANUFACTURER").lookup(&MANUFACTURER_CODE)
}

pub const fn industry() -> FieldSpec {
    FieldSpec::new("Industry Code", "INDUSTRY").lookup(&INDUSTRY_CODE)
}

pub const fn marine_industry() -> FieldSpec {
    industry().matches(4).desc("Marine Industry")
}

pub const fn latitude_i32(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "GEO_FIX32")
}

pub const fn longitude_i32(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "GEO_FIX32")
}

pub const fn latitude_i64(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "GEO_FIX64")
}

pub const fn longitude_i64(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "GEO_FIX64")
}

pub const fn angle_u16(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "ANGLE_UFIX16")
}

pub const fn angle_i16(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "ANGLE_FIX16")
}

pub const fn date(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "DATE")
}

pub const fn time(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "TIME")
}

pub const fn mmsi(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "MMSI")
}

pub const fn string_fix(name: &'static str, bytes: u32) -> FieldSpec {
    FieldSpec::new(name, "STRING_FIX").bytes(bytes)
}

pub const fn string_lau(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "STRING_LAU")
}

pub const fn string_lz(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "STRING_LZ")
}

pub const fn string_var(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "STRING_VAR")
}

/// Fixed point number with the given resolution
pub const fn number(name: &'static str, bits: u32, resolution: f64) -> FieldSpec {
    FieldSpec::new(name, "UNSIGNED_FIXED_POINT_NUMBER").bits(bits).resolution(resolution)
}

pub const fn number_signed(name: &'static str, bits: u32, resolution: f64) -> FieldSpec {
    FieldSpec::new(name, "SIGNED_FIXED_POINT_NUMBER").bits(bits).resolution(resolution)
}

pub const fn decimal(name: &'static str, bits: u32) -> FieldSpec {
    FieldSpec::new(name, "DECIMAL").bits(bits)
}

pub const fn float(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "FLOAT")
}

pub const fn pgn_field(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "PGN")
}

pub const fn field_index(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "FIELD_INDEX")
}

/// Byte count of the key-value parameter that follows it
pub const fn parameter_length(name: &'static str, bits: u32) -> FieldSpec {
    FieldSpec::new(name, "PARAMETER_LENGTH").bits(bits)
}

/// Value whose layout is that of a field of another PGN
pub const fn variable(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, "VARIABLE")
}

/// Repeating group as written in the catalogue; orders are 1-based
#[derive(Debug, Clone, Copy)]
pub struct RepeatSpec {
    /// Order of the field holding the repetition count, `None` to repeat until the payload ends
    pub count_field: Option<u8>,
    pub field_count: u8,
    pub start: u8,
}

/// One PGN as written in the catalogue
#[derive(Debug, Clone, Copy)]
pub struct PgnSpec {
    pub description: &'static str,
    pub pgn: u32,
    pub complete: u16,
    pub transport: Transport,
    pub fields: &'static [FieldSpec],
    pub fallback: bool,
    pub explanation: Option<&'static str>,
    pub url: Option<&'static str>,
    pub interval: u16,
    pub priority: Option<u8>,
    pub repeating: [Option<RepeatSpec>; 2],
}

impl PgnSpec {
    pub const fn new(
        description: &'static str,
        pgn: u32,
        transport: Transport,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self {
            description,
            pgn,
            complete: 0,
            transport,
            fields,
            fallback: false,
            explanation: None,
            url: None,
            interval: 0,
            priority: None,
            repeating: [None, None],
        }
    }

    pub const fn complete(mut self, flags: u16) -> Self {
        self.complete = flags;
        self
    }

    pub const fn fallback(mut self) -> Self {
        self.fallback = true;
        self
    }

    pub const fn explanation(mut self, explanation: &'static str) -> Self {
        self.explanation = Some(explanation);
        self
    }

    pub const fn url(mut self, url: &'static str) -> Self {
        self.url = Some(url);
        self
    }

    pub const fn interval(mut self, interval: u16) -> Self {
        self.interval = interval;
        self
    }

    pub const fn priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Add a repeating group counted by the field at `count_field`
    pub const fn repeating(self, count_field: u8, field_count: u8, start: u8) -> Self {
        self.add_group(RepeatSpec {
            count_field: Some(count_field),
            field_count,
            start,
        })
    }

    /// Add a repeating group that runs until the payload is exhausted
    pub const fn repeating_to_end(self, field_count: u8, start: u8) -> Self {
        self.add_group(RepeatSpec {
            count_field: None,
            field_count,
            start,
        })
    }

    const fn add_group(mut self, group: RepeatSpec) -> Self {
        if self.repeating[0].is_none() {
            self.repeating[0] = Some(group);
        } else {
            self.repeating[1] = Some(group);
        }
        self
    }
}
