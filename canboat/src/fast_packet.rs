//! NMEA 2000 fast-packet reassembly
//!
//! Byte 0 of every frame carries a 3 bit sequence counter and a 5 bit frame
//! index. Frame 0 holds the total length in byte 1 and 6 payload bytes; the
//! following frames hold 7 payload bytes each.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::N2kError;
use crate::raw_frame::FAST_PACKET_MAX;

pub const DEFAULT_FAST_PACKET_TIMEOUT: Duration = Duration::from_millis(250);

const FIRST_FRAME_PAYLOAD: usize = 6;
const NEXT_FRAME_PAYLOAD: usize = 7;

// Key for tracking multi-frame messages: (source, PGN)
type FastPacketKey = (u8, u32);

struct FastPacketBuffer {
    sequence: u8,
    next_index: u8,
    total_len: usize,
    data: Vec<u8>,
    last_seen: Instant,
}

impl FastPacketBuffer {
    fn is_complete(&self) -> bool {
        self.data.len() >= self.total_len
    }

    fn into_payload(mut self) -> Vec<u8> {
        self.data.truncate(self.total_len);
        self.data
    }
}

/// Number of CAN frames needed for a fast-packet payload of `len` bytes
pub fn frame_count(len: usize) -> usize {
    if len <= FIRST_FRAME_PAYLOAD {
        1
    } else {
        1 + (len - FIRST_FRAME_PAYLOAD).div_ceil(NEXT_FRAME_PAYLOAD)
    }
}

/// Split a payload into 8 byte fast-packet frames using sequence counter `sequence`
///
/// Unused bytes of the last frame are padded with 0xff.
pub fn fast_packet_frames(sequence: u8, payload: &[u8]) -> Result<Vec<[u8; 8]>, N2kError> {
    if payload.is_empty() || payload.len() > FAST_PACKET_MAX {
        return Err(N2kError::Unsupported(format!(
            "fast-packet payload of {} bytes",
            payload.len()
        )));
    }

    let header = (sequence & 0x7) << 5;
    let mut frames = Vec::with_capacity(frame_count(payload.len()));

    let mut first = [0xffu8; 8];
    first[0] = header;
    first[1] = payload.len() as u8;
    let take = payload.len().min(FIRST_FRAME_PAYLOAD);
    first[2..2 + take].copy_from_slice(&payload[..take]);
    frames.push(first);

    for (i, chunk) in payload[take..].chunks(NEXT_FRAME_PAYLOAD).enumerate() {
        let mut frame = [0xffu8; 8];
        frame[0] = header | ((i + 1) as u8 & 0x1f);
        frame[1..1 + chunk.len()].copy_from_slice(chunk);
        frames.push(frame);
    }
    Ok(frames)
}

/// Reassembles fast-packet frames per (source, PGN)
pub struct FastPacketAssembler {
    buffers: HashMap<FastPacketKey, FastPacketBuffer>,
    timeout: Duration,
}

impl FastPacketAssembler {
    pub fn new(timeout: Duration) -> Self {
        Self {
            buffers: HashMap::new(),
            timeout,
        }
    }

    /// Number of messages being assembled
    pub fn pending(&self) -> usize {
        self.buffers.len()
    }

    /// Drop partial messages that saw no frame within the timeout
    pub fn expire(&mut self, now: Instant) -> usize {
        let timeout = self.timeout;
        let before = self.buffers.len();
        self.buffers.retain(|(source, pgn), buffer| {
            let alive = now.saturating_duration_since(buffer.last_seen) <= timeout;
            if !alive {
                debug!("Fast-packet PGN {} from {} timed out after {} of {} bytes", pgn, source, buffer.data.len(), buffer.total_len);
            }
            alive
        });
        before - self.buffers.len()
    }

    /// Feed one frame
    ///
    /// # Returns
    /// `Ok(Some(payload))` when this frame completes a message, `Ok(None)` while
    /// more frames are needed, and an error for frames that do not continue the
    /// message in progress. The partial message is discarded on error.
    pub fn push(&mut self, pgn: u32, source: u8, data: &[u8], now: Instant) -> Result<Option<Vec<u8>>, N2kError> {
        let header = *data
            .first()
            .ok_or_else(|| N2kError::InvalidFrame(format!("empty fast-packet frame for PGN {}", pgn)))?;
        let sequence = header >> 5;
        let index = header & 0x1f;
        let key = (source, pgn);

        if index == 0 {
            let total_len = usize::from(
                *data
                    .get(1)
                    .ok_or_else(|| N2kError::reassembly(pgn, source, "first frame without length byte"))?,
            );
            if total_len == 0 || total_len > FAST_PACKET_MAX {
                self.buffers.remove(&key);
                return Err(N2kError::reassembly(pgn, source, format!("invalid length {}", total_len)));
            }
            if let Some(old) = self.buffers.remove(&key) {
                debug!(
                    "Fast-packet PGN {} from {}: new first frame replaces sequence {} at {} of {} bytes",
                    pgn,
                    source,
                    old.sequence,
                    old.data.len(),
                    old.total_len
                );
            }

            let mut buffer = FastPacketBuffer {
                sequence,
                next_index: 1,
                total_len,
                data: Vec::with_capacity(total_len + NEXT_FRAME_PAYLOAD),
                last_seen: now,
            };
            buffer.data.extend_from_slice(&data[2.min(data.len())..]);

            if buffer.is_complete() {
                return Ok(Some(buffer.into_payload()));
            }
            self.buffers.insert(key, buffer);
            return Ok(None);
        }

        let Some(buffer) = self.buffers.get_mut(&key) else {
            return Err(N2kError::reassembly(
                pgn,
                source,
                format!("frame {} of sequence {} without first frame", index, sequence),
            ));
        };

        if buffer.sequence != sequence || buffer.next_index != index {
            let reason = format!(
                "frame {} of sequence {} while expecting frame {} of sequence {}",
                index, sequence, buffer.next_index, buffer.sequence
            );
            self.buffers.remove(&key);
            return Err(N2kError::reassembly(pgn, source, reason));
        }

        buffer.data.extend_from_slice(&data[1..]);
        buffer.next_index += 1;
        buffer.last_seen = now;

        if buffer.is_complete() {
            return Ok(self.buffers.remove(&key).map(FastPacketBuffer::into_payload));
        }
        Ok(None)
    }
}

impl Default for FastPacketAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_FAST_PACKET_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(len: usize) -> Vec<u8> {
        (0..len).map(|i| i as u8).collect()
    }

    #[test]
    fn test_in_order_frames_complete() {
        let data = payload(20);
        let frames = fast_packet_frames(3, &data).unwrap();
        assert_eq!(frames.len(), 3);

        let mut asm = FastPacketAssembler::default();
        let now = Instant::now();
        assert_eq!(asm.push(129029, 7, &frames[0], now).unwrap(), None);
        assert_eq!(asm.push(129029, 7, &frames[1], now).unwrap(), None);
        assert_eq!(asm.push(129029, 7, &frames[2], now).unwrap(), Some(data));
        assert_eq!(asm.pending(), 0);
    }

    #[test]
    fn test_out_of_order_frames_yield_nothing() {
        let frames = fast_packet_frames(1, &payload(20)).unwrap();
        let mut asm = FastPacketAssembler::default();
        let now = Instant::now();
        assert_eq!(asm.push(129029, 7, &frames[0], now).unwrap(), None);
        assert!(matches!(
            asm.push(129029, 7, &frames[2], now),
            Err(N2kError::Reassembly { pgn: 129029, src: 7, .. })
        ));
        // the partial message was discarded
        assert!(asm.push(129029, 7, &frames[1], now).is_err());
        assert_eq!(asm.pending(), 0);
    }

    #[test]
    fn test_new_first_frame_discards_prior_state() {
        let old = fast_packet_frames(1, &payload(20)).unwrap();
        let new_data: Vec<u8> = (100..115).collect();
        let new = fast_packet_frames(2, &new_data).unwrap();

        let mut asm = FastPacketAssembler::default();
        let now = Instant::now();
        asm.push(129029, 7, &old[0], now).unwrap();
        asm.push(129029, 7, &old[1], now).unwrap();
        assert_eq!(asm.push(129029, 7, &new[0], now).unwrap(), None);
        assert_eq!(asm.push(129029, 7, &new[1], now).unwrap(), None);
        assert_eq!(asm.push(129029, 7, &new[2], now).unwrap(), Some(new_data));
    }

    #[test]
    fn test_sequence_mismatch() {
        let frames = fast_packet_frames(1, &payload(20)).unwrap();
        let other = fast_packet_frames(4, &payload(20)).unwrap();
        let mut asm = FastPacketAssembler::default();
        let now = Instant::now();
        asm.push(130816, 9, &frames[0], now).unwrap();
        assert!(asm.push(130816, 9, &other[1], now).is_err());
    }

    #[test]
    fn test_sources_are_independent() {
        let a = fast_packet_frames(0, &payload(10)).unwrap();
        let b_data: Vec<u8> = (50..60).collect();
        let b = fast_packet_frames(0, &b_data).unwrap();
        let mut asm = FastPacketAssembler::default();
        let now = Instant::now();
        asm.push(126996, 1, &a[0], now).unwrap();
        asm.push(126996, 2, &b[0], now).unwrap();
        assert_eq!(asm.push(126996, 2, &b[1], now).unwrap(), Some(b_data));
        assert_eq!(asm.push(126996, 1, &a[1], now).unwrap(), Some(payload(10)));
    }

    #[test]
    fn test_timeout_drops_partial() {
        let frames = fast_packet_frames(1, &payload(20)).unwrap();
        let mut asm = FastPacketAssembler::default();
        let start = Instant::now();
        asm.push(129029, 7, &frames[0], start).unwrap();
        assert_eq!(asm.expire(start + Duration::from_millis(100)), 0);
        assert_eq!(asm.expire(start + Duration::from_millis(300)), 1);
        assert!(asm.push(129029, 7, &frames[1], start + Duration::from_millis(300)).is_err());
    }

    #[test]
    fn test_single_frame_fast_packet() {
        let mut asm = FastPacketAssembler::default();
        let frame = [0x20, 0x04, 1, 2, 3, 4, 0xff, 0xff];
        assert_eq!(asm.push(127509, 3, &frame, Instant::now()).unwrap(), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_system_time_two_frames() {
        let mut asm = FastPacketAssembler::default();
        let now = Instant::now();
        let a = [0x40, 0x0A, 0x01, 0xF0, 0x9E, 0x4B, 0x00, 0x51];
        let b = [0x41, 0x25, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        assert_eq!(asm.push(126992, 4, &a, now).unwrap(), None);
        let data = asm.push(126992, 4, &b, now).unwrap().unwrap();
        assert_eq!(data, vec![0x01, 0xF0, 0x9E, 0x4B, 0x00, 0x51, 0x25, 0x02, 0xFF, 0xFF]);
    }

    #[test]
    fn test_frame_count() {
        assert_eq!(frame_count(6), 1);
        assert_eq!(frame_count(7), 2);
        assert_eq!(frame_count(13), 2);
        assert_eq!(frame_count(14), 3);
        assert_eq!(frame_count(223), 32);
        assert!(fast_packet_frames(0, &[0u8; 224]).is_err());
    }
}
