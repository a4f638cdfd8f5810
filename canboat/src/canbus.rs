//! SocketCAN input
//!
//! NMEA 2000 only uses 29-bit identifiers; standard frames on the same bus are
//! reported as `InvalidData` and can be skipped by the caller.

use std::io;
use std::time::Duration;

use chrono::{DateTime, Utc};
use socketcan::{CanSocket, EmbeddedFrame, Id, Socket};
use tracing::{info, warn};

use crate::raw_frame::RawFrame;

/// Read timeout that lets the caller run periodic work on a quiet bus
pub const READ_TIMEOUT: Duration = Duration::from_millis(500);

/// Opens a CAN socket, retrying every 10 seconds until it succeeds
///
/// # Arguments
/// * `interface` - Name of the CAN interface (e.g., "can0", "vcan0")
pub fn open_can_socket_with_retry(interface: &str) -> CanSocket {
    loop {
        match CanSocket::open(interface) {
            Ok(socket) => {
                info!("Opened CAN interface {}", interface);
                return socket;
            }
            Err(e) => {
                warn!("Failed to open CAN interface '{}': {}", interface, e);
                warn!("Retrying in 10 seconds...");
                std::thread::sleep(Duration::from_secs(10));
            }
        }
    }
}

/// Sets the read timeout so [`read_frame`] returns `WouldBlock`/`TimedOut` on a quiet bus
pub fn configure_socket(socket: &mut CanSocket) -> io::Result<()> {
    socket.set_read_timeout(READ_TIMEOUT)
}

/// Reads one CAN frame and stamps it with the local time of arrival
pub fn read_frame(socket: &CanSocket) -> io::Result<RawFrame> {
    let frame = socket.read_frame()?;
    let id = match frame.id() {
        Id::Extended(id) => id.as_raw(),
        Id::Standard(id) => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("standard CAN id {:03X} is not NMEA 2000", id.as_raw()),
            ));
        }
    };
    to_raw_frame(id, frame.data(), Utc::now())
}

/// Convert an identifier and payload received at `time` into a [`RawFrame`]
pub fn to_raw_frame(id: u32, data: &[u8], time: DateTime<Utc>) -> io::Result<RawFrame> {
    let timestamp = time.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
    RawFrame::from_can_id(timestamp, id, data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}

/// True for the errors a read timeout produces
pub fn is_timeout(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_raw_frame() {
        let time = Utc.with_ymd_and_hms(2023, 1, 1, 10, 20, 30).unwrap();
        let frame = to_raw_frame(0x09F1120A, &[0, 0x5A, 0x1D, 0xFF, 0x7F, 0xFF, 0x7F, 0], time).unwrap();
        assert_eq!(frame.timestamp, "2023-01-01T10:20:30.000Z");
        assert_eq!(frame.pgn, 127250);
        assert_eq!(frame.source, 10);
        assert_eq!(frame.priority, 2);
    }

    #[test]
    fn test_to_raw_frame_rejects_bad_id() {
        let err = to_raw_frame(0x2000_0000, &[], Utc::now()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_is_timeout() {
        assert!(is_timeout(&io::Error::from(io::ErrorKind::WouldBlock)));
        assert!(is_timeout(&io::Error::from(io::ErrorKind::TimedOut)));
        assert!(!is_timeout(&io::Error::from(io::ErrorKind::BrokenPipe)));
    }
}
