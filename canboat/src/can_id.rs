//! 29-bit CAN identifier decomposition

use crate::error::N2kError;

pub const DESTINATION_BROADCAST: u8 = 0xff;

/// J1939 addressing mode of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PF < 240: addressed, the PS byte is the destination
    Pdu1,
    /// PF >= 240: broadcast, the PS byte is part of the PGN
    Pdu2,
}

impl Format {
    pub fn from_pgn(pgn: u32) -> Self {
        if (pgn >> 8) & 0xff < 240 {
            Format::Pdu1
        } else {
            Format::Pdu2
        }
    }
}

/// Fields of an extended CAN identifier
///
/// The PGN keeps both the data page and the reserved (EDP) bit, so J1939 and
/// NMEA 2000 pages stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanId {
    pub priority: u8,
    pub pgn: u32,
    pub source: u8,
    pub destination: u8,
}

impl CanId {
    /// Split a 29-bit identifier into priority, PGN, source and destination
    pub fn decode(id: u32) -> Result<Self, N2kError> {
        if id > 0x1FFF_FFFF {
            return Err(N2kError::InvalidFrame(format!(
                "CAN id {:#x} does not fit in 29 bits",
                id
            )));
        }

        let pf = (id >> 16) & 0xff;
        let ps = (id >> 8) & 0xff;
        let rdp = (id >> 24) & 0x3;
        let (pgn, destination) = if pf < 240 {
            ((rdp << 16) | (pf << 8), ps as u8)
        } else {
            ((rdp << 16) | (pf << 8) | ps, DESTINATION_BROADCAST)
        };

        Ok(Self {
            priority: ((id >> 26) & 0x7) as u8,
            pgn,
            source: (id & 0xff) as u8,
            destination,
        })
    }

    /// Assemble the 29-bit identifier
    ///
    /// For PDU1 PGNs the destination goes into the PS byte; for PDU2 the
    /// destination is implied broadcast and ignored.
    pub fn build(priority: u8, pgn: u32, source: u8, destination: u8) -> u32 {
        let pgn = pgn & 0x3ffff;
        let prio = u32::from(priority & 0x7) << 26;
        match Format::from_pgn(pgn) {
            Format::Pdu1 => prio | (pgn & 0x3ff00) << 8 | u32::from(destination) << 8 | u32::from(source),
            Format::Pdu2 => prio | pgn << 8 | u32::from(source),
        }
    }

    pub fn to_raw(&self) -> u32 {
        Self::build(self.priority, self.pgn, self.source, self.destination)
    }

    pub fn format(&self) -> Format {
        Format::from_pgn(self.pgn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_address_claim() {
        let id = CanId::decode(0x18EEFF00).unwrap();
        assert_eq!(id.priority, 6);
        assert_eq!(id.pgn, 60928);
        assert_eq!(id.source, 0);
        assert_eq!(id.destination, 255);
        assert_eq!(id.format(), Format::Pdu1);
    }

    #[test]
    fn test_decode_pdu1_addressed() {
        // ISO request from 0x23 to 0x42
        let id = CanId::decode(0x18EA4223).unwrap();
        assert_eq!(id.pgn, 59904);
        assert_eq!(id.destination, 0x42);
        assert_eq!(id.source, 0x23);
    }

    #[test]
    fn test_decode_pdu2_broadcast() {
        // Vessel heading, priority 2, source 7
        let id = CanId::decode(0x09F11207).unwrap();
        assert_eq!(id.priority, 2);
        assert_eq!(id.pgn, 127250);
        assert_eq!(id.source, 7);
        assert_eq!(id.destination, DESTINATION_BROADCAST);
    }

    #[test]
    fn test_decode_keeps_reserved_bit() {
        let id = CanId::decode(0x0200_0000 | 0x00FA_0001).unwrap();
        assert_eq!(id.pgn, 0x2FA00);
    }

    #[test]
    fn test_decode_rejects_wide_id() {
        assert!(matches!(
            CanId::decode(0x2000_0000),
            Err(N2kError::InvalidFrame(_))
        ));
    }

    #[test]
    fn test_build_decode_identity() {
        for prio in 0..8u8 {
            for pgn in [59392u32, 59904, 60928, 61184, 65280, 126208, 127250, 129029, 130816, 0x2F000] {
                for src in [0u8, 1, 127, 254] {
                    let dst = if Format::from_pgn(pgn) == Format::Pdu2 { 255 } else { 42 };
                    let raw = CanId::build(prio, pgn, src, dst);
                    let id = CanId::decode(raw).unwrap();
                    assert_eq!((id.priority, id.pgn, id.source, id.destination), (prio, pgn, src, dst));
                    assert_eq!(id.to_raw(), raw);
                }
            }
        }
    }
}
