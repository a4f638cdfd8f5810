//! Enumeration tables used by lookup fields
//!
//! Three shapes exist: plain value to label pairs, triplets where the label
//! depends on a second field of the same message, and bit tables where each set
//! bit contributes a label.

mod tables;

pub use tables::*;

/// Shape and contents of a lookup table
#[derive(Debug)]
pub enum LookupKind {
    Pair(&'static [(u32, &'static str)]),
    /// `(primary value, value, label)`; the primary value is read from another field
    Triplet(&'static [(u32, u32, &'static str)]),
    /// `(bit index, label)`
    Bit(&'static [(u32, &'static str)]),
}

#[derive(Debug)]
pub struct LookupTable {
    pub name: &'static str,
    pub kind: LookupKind,
}

impl LookupTable {
    pub const fn pair(name: &'static str, entries: &'static [(u32, &'static str)]) -> Self {
        Self {
            name,
            kind: LookupKind::Pair(entries),
        }
    }

    pub const fn triplet(name: &'static str, entries: &'static [(u32, u32, &'static str)]) -> Self {
        Self {
            name,
            kind: LookupKind::Triplet(entries),
        }
    }

    pub const fn bits(name: &'static str, entries: &'static [(u32, &'static str)]) -> Self {
        Self {
            name,
            kind: LookupKind::Bit(entries),
        }
    }

    /// Label for `value` in a pair table
    pub fn label(&self, value: u64) -> Option<&'static str> {
        match self.kind {
            LookupKind::Pair(entries) => entries
                .iter()
                .find(|(k, _)| u64::from(*k) == value)
                .map(|(_, label)| *label),
            _ => None,
        }
    }

    /// Label for `(primary, value)` in a triplet table
    pub fn triplet_label(&self, primary: u64, value: u64) -> Option<&'static str> {
        match self.kind {
            LookupKind::Triplet(entries) => entries
                .iter()
                .find(|(k1, k2, _)| u64::from(*k1) == primary && u64::from(*k2) == value)
                .map(|(_, _, label)| *label),
            _ => None,
        }
    }

    /// Labels of every set bit of `value`, in bit order
    ///
    /// Bits without a label are reported by their index.
    pub fn bit_labels(&self, value: u64) -> Vec<String> {
        let LookupKind::Bit(entries) = self.kind else {
            return Vec::new();
        };
        (0..64u32)
            .filter(|bit| value & (1u64 << bit) != 0)
            .map(|bit| match entries.iter().find(|(b, _)| *b == bit) {
                Some((_, label)) => (*label).to_string(),
                None => format!("Unknown bit {}", bit),
            })
            .collect()
    }

    /// Number of entries, used by explain output
    pub fn len(&self) -> usize {
        match self.kind {
            LookupKind::Pair(e) | LookupKind::Bit(e) => e.len(),
            LookupKind::Triplet(e) => e.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Find a lookup table by name
pub fn find_lookup(name: &str) -> Option<&'static LookupTable> {
    LOOKUP_TABLES.iter().copied().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_label() {
        assert_eq!(INDUSTRY_CODE.label(4), Some("Marine"));
        assert_eq!(INDUSTRY_CODE.label(7), None);
        assert_eq!(DIRECTION_REFERENCE.label(0), Some("True"));
    }

    #[test]
    fn test_triplet_label() {
        assert_eq!(DEVICE_FUNCTION.triplet_label(60, 145), Some("Ownship Position (GNSS)"));
        assert_eq!(DEVICE_FUNCTION.triplet_label(60, 9999), None);
        assert_eq!(DEVICE_FUNCTION.label(60), None);
    }

    #[test]
    fn test_bit_labels() {
        let labels = ENGINE_STATUS_1.bit_labels(0b101);
        assert_eq!(labels, vec!["Check Engine".to_string(), "Low Oil Pressure".to_string()]);
        assert!(INDUSTRY_CODE.bit_labels(3).is_empty());
    }

    #[test]
    fn test_pair_keys_unique() {
        for table in LOOKUP_TABLES {
            match table.kind {
                LookupKind::Pair(entries) | LookupKind::Bit(entries) => {
                    for (i, (k, _)) in entries.iter().enumerate() {
                        assert!(entries[i + 1..].iter().all(|(k2, _)| k2 != k), "{} {}", table.name, k);
                    }
                }
                LookupKind::Triplet(entries) => {
                    for (i, (a, b, _)) in entries.iter().enumerate() {
                        assert!(
                            entries[i + 1..].iter().all(|(a2, b2, _)| (a2, b2) != (a, b)),
                            "{} {} {}",
                            table.name,
                            a,
                            b
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_find_lookup() {
        assert!(find_lookup("MANUFACTURER_CODE").is_some());
        assert!(find_lookup("NO_SUCH_TABLE").is_none());
        for (i, t) in LOOKUP_TABLES.iter().enumerate() {
            assert!(LOOKUP_TABLES[i + 1..].iter().all(|o| o.name != t.name), "{}", t.name);
        }
    }
}
