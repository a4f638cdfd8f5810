//! Error kinds raised by the codec

use thiserror::Error;

/// Errors that can occur while ingesting, reassembling or decoding NMEA 2000 traffic
#[derive(Error, Debug, Clone, PartialEq)]
pub enum N2kError {
    /// Malformed CAN identifier or payload length
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    /// A text line does not follow its declared input format
    #[error("Parse error ({format}): {reason}")]
    Parse { format: &'static str, reason: String },

    /// No registry entry exists for this PGN. Decoding continues with a fallback entry.
    #[error("Unknown PGN {0}")]
    UnknownPgn(u32),

    /// Out-of-order or cross-session fragment, or an aborted transport session
    #[error("Reassembly error for PGN {pgn} from source {src}: {reason}")]
    Reassembly { pgn: u32, src: u8, reason: String },

    /// A value falls outside the declared range of its field
    #[error("Field '{field}' out of range: {value}")]
    FieldOutOfRange { field: String, value: f64 },

    /// The operation is not supported for this PGN or field type
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// The static tables are inconsistent
    #[error("Registry error: {0}")]
    Registry(String),
}

impl N2kError {
    pub(crate) fn parse(format: &'static str, reason: impl Into<String>) -> Self {
        N2kError::Parse {
            format,
            reason: reason.into(),
        }
    }

    pub(crate) fn reassembly(pgn: u32, src: u8, reason: impl Into<String>) -> Self {
        N2kError::Reassembly {
            pgn,
            src,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = N2kError::parse("YDWG-02", "missing direction");
        assert_eq!(e.to_string(), "Parse error (YDWG-02): missing direction");

        let e = N2kError::reassembly(129029, 3, "frame 4 out of order");
        assert_eq!(
            e.to_string(),
            "Reassembly error for PGN 129029 from source 3: frame 4 out of order"
        );
        assert_eq!(N2kError::UnknownPgn(64000).to_string(), "Unknown PGN 64000");
    }
}
