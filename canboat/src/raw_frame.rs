//! A frame as read from the bus or a log line

use crate::can_id::CanId;
use crate::error::N2kError;

/// Largest payload a PGN can carry without the ISO transport protocol
pub const FAST_PACKET_MAX: usize = 223;

/// Largest payload of an ISO transport protocol session
pub const ISO_TP_MAX: usize = 1785;

/// One CAN frame, or an already assembled multi-frame payload, with its addressing
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    /// ISO 8601 timestamp as given by the source, or synthesized on ingest
    pub timestamp: String,
    pub priority: u8,
    pub pgn: u32,
    pub source: u8,
    pub destination: u8,
    pub data: Vec<u8>,
}

impl RawFrame {
    pub fn new(timestamp: impl Into<String>, priority: u8, pgn: u32, source: u8, destination: u8, data: Vec<u8>) -> Self {
        Self {
            timestamp: timestamp.into(),
            priority,
            pgn,
            source,
            destination,
            data,
        }
    }

    /// Build a frame from a 29-bit CAN identifier
    pub fn from_can_id(timestamp: impl Into<String>, id: u32, data: &[u8]) -> Result<Self, N2kError> {
        if data.len() > ISO_TP_MAX {
            return Err(N2kError::InvalidFrame(format!("payload of {} bytes is too long", data.len())));
        }
        let id = CanId::decode(id)?;
        Ok(Self::new(timestamp, id.priority, id.pgn, id.source, id.destination, data.to_vec()))
    }

    /// The 29-bit identifier this frame would be sent with
    pub fn can_id(&self) -> u32 {
        CanId::build(self.priority, self.pgn, self.source, self.destination)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy of this frame carrying another PGN and payload, used for reassembled messages
    pub fn with_payload(&self, pgn: u32, data: Vec<u8>) -> Self {
        Self {
            pgn,
            data,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_can_id() {
        let frame = RawFrame::from_can_id("2023-01-01T00:00:00.000Z", 0x09F10D0A, &[0u8; 8]).unwrap();
        assert_eq!(frame.priority, 2);
        assert_eq!(frame.pgn, 127245);
        assert_eq!(frame.source, 10);
        assert_eq!(frame.destination, 255);
        assert_eq!(frame.can_id(), 0x09F10D0A);
        assert_eq!(frame.len(), 8);
    }

    #[test]
    fn test_rejects_bad_id() {
        assert!(matches!(
            RawFrame::from_can_id("", 0x2000_0000, &[]),
            Err(N2kError::InvalidFrame(_))
        ));
    }
}
