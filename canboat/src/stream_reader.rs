//! NMEA 2000 stream reader
//!
//! Stateful front end of the codec. Frames are pushed one at a time and
//! complete messages come out decoded:
//! - single-frame PGNs are decoded immediately
//! - fast-packet PGNs are assembled per (source, PGN)
//! - ISO transport sessions (PGN 60416/60160) are assembled per (sender, receiver)
//!   and delivered as the PGN they carry
//!
//! Messages come out in the order their last fragment arrived. A frame that
//! breaks a partial message yields an error for that frame only; the reader
//! keeps going.
//!
//! # Usage
//!
//! ```no_run
//! use std::time::Instant;
//! use canboat::{N2kStreamReader, RawFrame};
//!
//! let mut reader = N2kStreamReader::new().unwrap();
//! let frame = RawFrame::from_can_id("2023-01-01T00:00:00.000Z", 0x09F1120A, &[0, 0x5A, 0x1D, 0xFF, 0x7F, 0xFF, 0x7F, 0]).unwrap();
//! if let Ok(Some(message)) = reader.push(&frame, Instant::now()) {
//!     println!("{} {}", message.pgn.pgn, message.pgn.description);
//! }
//! ```

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoder::{decode, Message};
use crate::error::N2kError;
use crate::fast_packet::{FastPacketAssembler, DEFAULT_FAST_PACKET_TIMEOUT};
use crate::iso_tp::{IsoTpAssembler, DEFAULT_ISO_TP_TIMEOUT, PGN_TP_CM, PGN_TP_DT};
use crate::pgn::{registry, Registry, Transport};
use crate::raw_frame::RawFrame;

/// PGN 127509 Inverter Status
pub const PGN_INVERTER_STATUS: u32 = 127509;

/// Reassembly settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub fast_packet_timeout_ms: u64,
    pub iso_tp_timeout_ms: u64,
    /// Treat 127509 as fast-packet even though its payload fits one frame
    pub inverter_status_fast_packet: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fast_packet_timeout_ms: DEFAULT_FAST_PACKET_TIMEOUT.as_millis() as u64,
            iso_tp_timeout_ms: DEFAULT_ISO_TP_TIMEOUT.as_millis() as u64,
            inverter_status_fast_packet: true,
        }
    }
}

/// NMEA 2000 stream reader that assembles multi-frame messages and decodes them
pub struct N2kStreamReader {
    registry: &'static Registry,
    fast: FastPacketAssembler,
    iso: IsoTpAssembler,
    config: ReaderConfig,
}

impl N2kStreamReader {
    /// Create a reader with default timeouts
    pub fn new() -> Result<Self, N2kError> {
        Self::with_config(ReaderConfig::default())
    }

    pub fn with_config(config: ReaderConfig) -> Result<Self, N2kError> {
        Ok(Self {
            registry: registry()?,
            fast: FastPacketAssembler::new(Duration::from_millis(config.fast_packet_timeout_ms)),
            iso: IsoTpAssembler::new(Duration::from_millis(config.iso_tp_timeout_ms)),
            config,
        })
    }

    /// Messages still being assembled
    pub fn pending(&self) -> usize {
        self.fast.pending() + self.iso.pending()
    }

    /// Process a frame and return a complete message if available
    ///
    /// # Arguments
    /// * `frame` - One CAN frame, or an already assembled payload longer than 8 bytes
    /// * `now` - Monotonic time of arrival, used for the reassembly timeouts
    ///
    /// # Returns
    /// `Ok(Some(Message))` when the frame completes a message, `Ok(None)` while
    /// fragments are outstanding.
    pub fn push(&mut self, frame: &RawFrame, now: Instant) -> Result<Option<Message>, N2kError> {
        self.fast.expire(now);
        self.iso.expire(now);

        if frame.len() > 8 {
            return decode(frame.clone()).map(Some);
        }

        match frame.pgn {
            PGN_TP_CM => {
                let completed = self.iso.push_control(frame.source, frame.destination, &frame.data, now);
                // control frames are messages of their own as well
                return match completed? {
                    Some(session) => self.deliver(frame, session.pgn, session.source, session.destination, session.data),
                    None => decode(frame.clone()).map(Some),
                };
            }
            PGN_TP_DT => {
                return match self.iso.push_data(frame.source, frame.destination, &frame.data, now)? {
                    Some(session) => self.deliver(frame, session.pgn, session.source, session.destination, session.data),
                    None => Ok(None),
                };
            }
            _ => {}
        }

        match self.transport(frame.pgn) {
            Transport::Fast => match self.fast.push(frame.pgn, frame.source, &frame.data, now)? {
                Some(data) => decode(frame.with_payload(frame.pgn, data)).map(Some),
                None => Ok(None),
            },
            // Mixed PGNs only use fast-packet beyond 8 bytes, so a CAN frame is a single frame
            Transport::Single | Transport::Mixed | Transport::IsoTp => decode(frame.clone()).map(Some),
        }
    }

    fn transport(&self, pgn: u32) -> Transport {
        if pgn == PGN_INVERTER_STATUS && !self.config.inverter_status_fast_packet {
            return Transport::Single;
        }
        self.registry.transport(pgn).unwrap_or(Transport::Single)
    }

    fn deliver(
        &self,
        frame: &RawFrame,
        pgn: u32,
        source: u8,
        destination: u8,
        data: Vec<u8>,
    ) -> Result<Option<Message>, N2kError> {
        debug!("ISO-TP delivered PGN {} ({} bytes) from {}", pgn, data.len(), source);
        let mut assembled = frame.with_payload(pgn, data);
        assembled.source = source;
        assembled.destination = destination;
        decode(assembled).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Value;
    use crate::fast_packet::fast_packet_frames;
    use chrono::NaiveDate;

    fn frame(pgn: u32, source: u8, destination: u8, data: &[u8]) -> RawFrame {
        RawFrame::new("2023-01-01T00:00:00.000Z", 6, pgn, source, destination, data.to_vec())
    }

    #[test]
    fn test_single_frame_decoded_immediately() {
        let mut reader = N2kStreamReader::new().unwrap();
        let msg = reader
            .push(&frame(127250, 1, 255, &[0x00, 0x5A, 0x1D, 0xFF, 0x7F, 0xFF, 0x7F, 0x00]), Instant::now())
            .unwrap()
            .unwrap();
        assert_eq!(msg.pgn.description, "Vessel Heading");
    }

    #[test]
    fn test_fast_packet_message() {
        let payload: Vec<u8> = vec![
            0x01, 0x10, 0x4B, 0x00, 0x51, 0x25, 0x02, 0x00, 0xe8, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        let frames = fast_packet_frames(2, &payload).unwrap();
        let mut reader = N2kStreamReader::new().unwrap();
        let now = Instant::now();
        let mut messages = Vec::new();
        for data in &frames {
            if let Some(msg) = reader.push(&frame(129029, 3, 255, data), now).unwrap() {
                messages.push(msg);
            }
        }
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].pgn.description, "GNSS Position Data");
        assert_eq!(messages[0].frame.data, payload);
        assert_eq!(reader.pending(), 0);
    }

    #[test]
    fn test_completion_order_follows_last_fragment() {
        let a: Vec<u8> = (0..20).collect();
        let b: Vec<u8> = (100..110).collect();
        let fa = fast_packet_frames(0, &a).unwrap();
        let fb = fast_packet_frames(0, &b).unwrap();
        let mut reader = N2kStreamReader::new().unwrap();
        let now = Instant::now();

        let mut order = Vec::new();
        let sequence = [(1u8, &fa[0]), (2, &fb[0]), (1, &fa[1]), (2, &fb[1]), (1, &fa[2])];
        for (source, data) in sequence {
            if let Some(msg) = reader.push(&frame(129029, source, 255, data), now).unwrap() {
                order.push(msg.frame.source);
            }
        }
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn test_reassembly_error_does_not_stall() {
        let payload: Vec<u8> = (0..20).collect();
        let frames = fast_packet_frames(1, &payload).unwrap();
        let mut reader = N2kStreamReader::new().unwrap();
        let now = Instant::now();
        assert!(reader.push(&frame(129029, 3, 255, &frames[1]), now).is_err());
        for data in &frames[..2] {
            assert!(reader.push(&frame(129029, 3, 255, data), now).unwrap().is_none());
        }
        assert!(reader.push(&frame(129029, 3, 255, &frames[2]), now).unwrap().is_some());
    }

    #[test]
    fn test_iso_tp_broadcast_product_information() {
        let mut payload = vec![0x64, 0x08, 0x10, 0x27];
        payload.extend_from_slice(b"Depth sounder@@@@@@@@@@@");
        assert_eq!(payload.len(), 28);

        let mut reader = N2kStreamReader::new().unwrap();
        let now = Instant::now();
        let announce = [32, 28, 0, 4, 0xff, 0x14, 0xF0, 0x01];
        let control = reader.push(&frame(60416, 35, 255, &announce), now).unwrap().unwrap();
        assert_eq!(control.pgn.description, "ISO Transport Protocol, Connection Management - Broadcast Announce");

        let mut delivered = Vec::new();
        for (i, chunk) in payload.chunks(7).enumerate() {
            let mut data = vec![(i + 1) as u8];
            data.extend_from_slice(chunk);
            if let Some(msg) = reader.push(&frame(60160, 35, 255, &data), now).unwrap() {
                delivered.push(msg);
            }
        }
        assert_eq!(delivered.len(), 1);
        let msg = &delivered[0];
        assert_eq!(msg.frame.pgn, 126996);
        assert_eq!(msg.frame.source, 35);
        assert_eq!(msg.frame.data, payload);
        assert_eq!(msg.value("Model ID"), Some(&Value::Text("Depth sounder".to_string())));
    }

    #[test]
    fn test_system_time_short_transfer() {
        // These frames announce 8 bytes, not 10, and carry a date and time other than
        // 2023-01-01 01:00. The decoder's test_system_time covers that instant.
        let a = [0x40, 0x08, 0x01, 0xF1, 0x7B, 0x52, 0x11, 0x00];
        let b = [0x41, 0xC1, 0x58, 0xF3, 0xFB, 0x00, 0x00, 0x00];
        let mut reader = N2kStreamReader::new().unwrap();
        let now = Instant::now();
        assert!(reader.push(&frame(126992, 4, 255, &a), now).unwrap().is_none());
        let msg = reader.push(&frame(126992, 4, 255, &b), now).unwrap().unwrap();

        assert_eq!(msg.frame.data, vec![0x01, 0xF1, 0x7B, 0x52, 0x11, 0x00, 0xC1, 0x58]);
        assert_eq!(msg.value("SID"), Some(&Value::Number { raw: 1, value: 1.0 }));
        assert_eq!(msg.value("Source"), Some(&Value::Lookup { raw: 1, label: Some("GLONASS") }));
        assert_eq!(msg.value("Date"), Some(&Value::Date(NaiveDate::from_ymd_opt(2027, 10, 24).unwrap())));
        // 148904 s is past the end of a day
        assert!(matches!(msg.value("Time"), Some(Value::OutOfRange { raw: 1_489_043_473, .. })));
        assert_eq!(reader.pending(), 0);
    }

    #[test]
    fn test_assembled_payload_decoded_directly() {
        let payload = [0x01, 0xF0, 0x9E, 0x4B, 0x00, 0x51, 0x25, 0x02, 0xFF, 0xFF];
        let mut reader = N2kStreamReader::new().unwrap();
        let msg = reader.push(&frame(126992, 4, 255, &payload), Instant::now()).unwrap().unwrap();
        assert_eq!(msg.value("Date"), Some(&Value::Date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())));
    }

    #[test]
    fn test_inverter_status_flag() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = N2kStreamReader::with_config(ReaderConfig {
            inverter_status_fast_packet: false,
            ..ReaderConfig::default()
        })
        .unwrap();
        assert!(reader.push(&frame(127509, 9, 255, &data), Instant::now()).unwrap().is_some());

        let mut reader = N2kStreamReader::new().unwrap();
        let framed = [0x20, 0x04, 0x01, 0x02, 0x03, 0x04, 0xFF, 0xFF];
        let msg = reader.push(&frame(127509, 9, 255, &framed), Instant::now()).unwrap().unwrap();
        assert_eq!(msg.frame.data, data.to_vec());
    }
}
