//! J1939 transport protocol (TP.CM on PGN 60416, TP.DT on PGN 60160)
//!
//! A session is opened by an RTS (addressed) or BAM (broadcast) control frame
//! announcing the transported PGN, its size and frame count. Data frames carry
//! a 1-based index in byte 0 and 7 payload bytes.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::can_id::DESTINATION_BROADCAST;
use crate::error::N2kError;
use crate::raw_frame::ISO_TP_MAX;

pub const PGN_TP_CM: u32 = 60416;
pub const PGN_TP_DT: u32 = 60160;

pub const DEFAULT_ISO_TP_TIMEOUT: Duration = Duration::from_millis(1250);

const TP_RTS: u8 = 16;
const TP_CTS: u8 = 17;
const TP_EOM: u8 = 19;
const TP_BAM: u8 = 32;
const TP_ABORT: u8 = 255;

const DATA_PER_FRAME: usize = 7;

// (sender, receiver)
type SessionKey = (u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionKind {
    Broadcast,
    Addressed,
}

struct Session {
    kind: SessionKind,
    pgn: u32,
    total_len: usize,
    frame_count: usize,
    received: Vec<bool>,
    data: Vec<u8>,
    last_seen: Instant,
}

impl Session {
    fn all_received(&self) -> bool {
        self.received.iter().all(|r| *r)
    }

    fn into_message(mut self, source: u8, destination: u8) -> IsoTpMessage {
        self.data.truncate(self.total_len);
        IsoTpMessage {
            pgn: self.pgn,
            source,
            destination,
            data: self.data,
        }
    }
}

/// A payload delivered by a completed transport session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoTpMessage {
    pub pgn: u32,
    pub source: u8,
    pub destination: u8,
    pub data: Vec<u8>,
}

fn embedded_pgn(data: &[u8]) -> u32 {
    u32::from(data[5]) | u32::from(data[6]) << 8 | u32::from(data[7]) << 16
}

/// Reassembles transport protocol sessions per (sender, receiver)
pub struct IsoTpAssembler {
    sessions: HashMap<SessionKey, Session>,
    timeout: Duration,
}

impl IsoTpAssembler {
    pub fn new(timeout: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            timeout,
        }
    }

    pub fn pending(&self) -> usize {
        self.sessions.len()
    }

    /// Drop sessions idle for longer than the timeout
    pub fn expire(&mut self, now: Instant) -> usize {
        let timeout = self.timeout;
        let before = self.sessions.len();
        self.sessions.retain(|(sender, receiver), session| {
            if now.saturating_duration_since(session.last_seen) <= timeout {
                return true;
            }
            let received = session.received.iter().filter(|r| **r).count();
            match session.kind {
                SessionKind::Addressed => warn!(
                    "ISO-TP session {} -> {} for PGN {} timed out after {} of {} frames",
                    sender, receiver, session.pgn, received, session.frame_count
                ),
                SessionKind::Broadcast => debug!(
                    "ISO-TP broadcast from {} for PGN {} timed out after {} of {} frames",
                    sender, session.pgn, received, session.frame_count
                ),
            }
            false
        });
        before - self.sessions.len()
    }

    /// Handle a TP.CM control frame sent by `source` to `destination`
    pub fn push_control(
        &mut self,
        source: u8,
        destination: u8,
        data: &[u8],
        now: Instant,
    ) -> Result<Option<IsoTpMessage>, N2kError> {
        if data.len() < 8 {
            return Err(N2kError::InvalidFrame(format!(
                "ISO-TP control frame of {} bytes",
                data.len()
            )));
        }
        let pgn = embedded_pgn(data);

        match data[0] {
            code @ (TP_RTS | TP_BAM) => {
                let total_len = usize::from(u16::from_le_bytes([data[1], data[2]]));
                let frame_count = usize::from(data[3]);
                if total_len == 0 || total_len > ISO_TP_MAX || frame_count != total_len.div_ceil(DATA_PER_FRAME) {
                    return Err(N2kError::reassembly(
                        pgn,
                        source,
                        format!("announced {} bytes in {} frames", total_len, frame_count),
                    ));
                }
                let kind = if code == TP_BAM || destination == DESTINATION_BROADCAST {
                    SessionKind::Broadcast
                } else {
                    SessionKind::Addressed
                };
                if let Some(old) = self.sessions.remove(&(source, destination)) {
                    debug!("ISO-TP session {} -> {} for PGN {} replaced by PGN {}", source, destination, old.pgn, pgn);
                }
                self.sessions.insert(
                    (source, destination),
                    Session {
                        kind,
                        pgn,
                        total_len,
                        frame_count,
                        received: vec![false; frame_count],
                        data: vec![0xff; frame_count * DATA_PER_FRAME],
                        last_seen: now,
                    },
                );
                Ok(None)
            }
            TP_CTS => {
                // sent by the receiver of the session
                if let Some(session) = self.sessions.get_mut(&(destination, source)) {
                    session.last_seen = now;
                }
                Ok(None)
            }
            TP_EOM => {
                let key = (destination, source);
                let Some(session) = self.sessions.remove(&key) else {
                    return Ok(None);
                };
                if session.kind == SessionKind::Addressed && session.all_received() {
                    Ok(Some(session.into_message(destination, source)))
                } else {
                    Err(N2kError::reassembly(
                        session.pgn,
                        destination,
                        "end of message acknowledged before all frames arrived",
                    ))
                }
            }
            TP_ABORT => {
                let aborted = self
                    .sessions
                    .remove(&(source, destination))
                    .or_else(|| self.sessions.remove(&(destination, source)));
                match aborted {
                    Some(session) => Err(N2kError::reassembly(session.pgn, source, "session aborted")),
                    None => Ok(None),
                }
            }
            code => Err(N2kError::reassembly(pgn, source, format!("unknown control code {}", code))),
        }
    }

    /// Handle a TP.DT data frame sent by `source` to `destination`
    pub fn push_data(
        &mut self,
        source: u8,
        destination: u8,
        data: &[u8],
        now: Instant,
    ) -> Result<Option<IsoTpMessage>, N2kError> {
        let key = (source, destination);
        let Some(session) = self.sessions.get_mut(&key) else {
            return Err(N2kError::reassembly(PGN_TP_DT, source, "data frame without open session"));
        };

        let index = data.first().map(|i| usize::from(*i)).unwrap_or(0);
        if index == 0 || index > session.frame_count {
            let reason = format!("frame index {} outside 1..={}", index, session.frame_count);
            let pgn = session.pgn;
            self.sessions.remove(&key);
            return Err(N2kError::reassembly(pgn, source, reason));
        }

        let start = (index - 1) * DATA_PER_FRAME;
        let chunk = &data[1..data.len().min(1 + DATA_PER_FRAME)];
        session.data[start..start + chunk.len()].copy_from_slice(chunk);
        session.received[index - 1] = true;
        session.last_seen = now;

        if session.kind == SessionKind::Broadcast && session.all_received() {
            return Ok(self
                .sessions
                .remove(&key)
                .map(|s| s.into_message(source, destination)));
        }
        Ok(None)
    }
}

impl Default for IsoTpAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_ISO_TP_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(code: u8, len: u16, count: u8, pgn: u32) -> [u8; 8] {
        let len = len.to_le_bytes();
        [code, len[0], len[1], count, 0xff, pgn as u8, (pgn >> 8) as u8, (pgn >> 16) as u8]
    }

    fn data_frame(index: u8, payload: &[u8]) -> [u8; 8] {
        let mut frame = [0xffu8; 8];
        frame[0] = index;
        let start = (usize::from(index) - 1) * 7;
        let end = payload.len().min(start + 7);
        frame[1..1 + end - start].copy_from_slice(&payload[start..end]);
        frame
    }

    #[test]
    fn test_broadcast_product_information() {
        let payload: Vec<u8> = (0..28).collect();
        let mut asm = IsoTpAssembler::default();
        let now = Instant::now();

        assert_eq!(asm.push_control(35, 255, &control(32, 28, 4, 126996), now).unwrap(), None);
        for index in 1..4 {
            assert_eq!(asm.push_data(35, 255, &data_frame(index, &payload), now).unwrap(), None);
        }
        let message = asm.push_data(35, 255, &data_frame(4, &payload), now).unwrap().unwrap();
        assert_eq!(message.pgn, 126996);
        assert_eq!(message.source, 35);
        assert_eq!(message.destination, 255);
        assert_eq!(message.data, payload);
        assert_eq!(asm.pending(), 0);
    }

    #[test]
    fn test_frames_fill_by_index() {
        let payload: Vec<u8> = (0..10).collect();
        let mut asm = IsoTpAssembler::default();
        let now = Instant::now();
        asm.push_control(4, 255, &control(32, 10, 2, 65240), now).unwrap();
        assert_eq!(asm.push_data(4, 255, &data_frame(2, &payload), now).unwrap(), None);
        let message = asm.push_data(4, 255, &data_frame(1, &payload), now).unwrap().unwrap();
        assert_eq!(message.data, payload);
    }

    #[test]
    fn test_addressed_session_completes_on_eom() {
        let payload: Vec<u8> = (0..12).collect();
        let mut asm = IsoTpAssembler::default();
        let now = Instant::now();

        asm.push_control(10, 20, &control(16, 12, 2, 65226), now).unwrap();
        asm.push_control(20, 10, &control(17, 0, 2, 65226), now).unwrap();
        asm.push_data(10, 20, &data_frame(1, &payload), now).unwrap();
        assert_eq!(asm.push_data(10, 20, &data_frame(2, &payload), now).unwrap(), None);

        let message = asm.push_control(20, 10, &control(19, 12, 2, 65226), now).unwrap().unwrap();
        assert_eq!(message.pgn, 65226);
        assert_eq!((message.source, message.destination), (10, 20));
        assert_eq!(message.data, payload);
    }

    #[test]
    fn test_eom_before_all_frames() {
        let payload: Vec<u8> = (0..12).collect();
        let mut asm = IsoTpAssembler::default();
        let now = Instant::now();
        asm.push_control(10, 20, &control(16, 12, 2, 65226), now).unwrap();
        asm.push_data(10, 20, &data_frame(1, &payload), now).unwrap();
        assert!(asm.push_control(20, 10, &control(19, 12, 2, 65226), now).is_err());
        assert_eq!(asm.pending(), 0);
    }

    #[test]
    fn test_abort() {
        let mut asm = IsoTpAssembler::default();
        let now = Instant::now();
        asm.push_control(10, 20, &control(16, 12, 2, 65226), now).unwrap();
        let result = asm.push_control(20, 10, &control(255, 0, 0, 65226), now);
        assert!(matches!(result, Err(N2kError::Reassembly { pgn: 65226, .. })));
        assert!(asm.push_data(10, 20, &[1, 0, 0, 0, 0, 0, 0, 0], now).is_err());
    }

    #[test]
    fn test_bad_announcement() {
        let mut asm = IsoTpAssembler::default();
        let now = Instant::now();
        assert!(asm.push_control(1, 255, &control(32, 28, 3, 126996), now).is_err());
        assert!(asm.push_control(1, 255, &control(32, 2000, 255, 126996), now).is_err());
        assert!(asm.push_control(1, 255, &[32, 0, 0], now).is_err());
    }

    #[test]
    fn test_timeout() {
        let mut asm = IsoTpAssembler::default();
        let start = Instant::now();
        asm.push_control(1, 255, &control(32, 28, 4, 126996), start).unwrap();
        asm.push_control(2, 3, &control(16, 28, 4, 126996), start).unwrap();
        assert_eq!(asm.expire(start + Duration::from_millis(1000)), 0);
        assert_eq!(asm.expire(start + Duration::from_millis(1300)), 2);
        assert_eq!(asm.pending(), 0);
    }
}
