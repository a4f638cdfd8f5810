use canboat::{Message, RawFrame};

use crate::config::SourceFilterConfig;

/// PGN and source selection from the command line and the configuration file
#[derive(Debug, Clone, Default)]
pub struct FrameFilter {
    /// Only print this PGN
    pub only_pgn: Option<u32>,
    /// Only accept frames from this source
    pub only_source: Option<u8>,
    pub source_map: SourceFilterConfig,
}

impl FrameFilter {
    /// Early check on a frame, before it reaches the stream reader
    /// # Returns
    /// true if frame should be processed, false if it should be skipped
    pub fn should_process_frame(&self, frame: &RawFrame) -> bool {
        if self.only_source.is_some_and(|src| src != frame.source) {
            return false;
        }
        self.source_map.should_accept(frame.pgn, frame.source)
    }

    /// Check on a complete message. Transport sessions deliver a PGN that
    /// differs from the PGN of their frames, so the PGN filter applies here.
    pub fn should_process_message(&self, message: &Message) -> bool {
        if self.only_pgn.is_some_and(|pgn| pgn != message.frame.pgn) {
            return false;
        }
        self.source_map.should_accept(message.frame.pgn, message.frame.source)
    }

    /// Whether raw frames of this PGN are echoed with `-raw`
    pub fn should_show_raw(&self, frame: &RawFrame) -> bool {
        self.only_pgn.is_none_or(|pgn| pgn == frame.pgn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canboat::decode;

    fn heading(source: u8) -> RawFrame {
        RawFrame::new("", 2, 127250, source, 255, vec![0, 0x5A, 0x1D, 0xFF, 0x7F, 0xFF, 0x7F, 0xFC])
    }

    #[test]
    fn test_default_accepts_everything() {
        let filter = FrameFilter::default();
        assert!(filter.should_process_frame(&heading(10)));
        assert!(filter.should_process_message(&decode(heading(10)).unwrap()));
        assert!(filter.should_show_raw(&heading(10)));
    }

    #[test]
    fn test_source_filter() {
        let filter = FrameFilter {
            only_source: Some(10),
            ..FrameFilter::default()
        };
        assert!(filter.should_process_frame(&heading(10)));
        assert!(!filter.should_process_frame(&heading(11)));
    }

    #[test]
    fn test_pgn_filter() {
        let filter = FrameFilter {
            only_pgn: Some(129025),
            ..FrameFilter::default()
        };
        let message = decode(heading(10)).unwrap();
        assert!(filter.should_process_frame(&heading(10)));
        assert!(!filter.should_process_message(&message));
        assert!(!filter.should_show_raw(&heading(10)));
    }

    #[test]
    fn test_configured_source_map() {
        let mut filter = FrameFilter::default();
        filter.source_map.pgn_source_map.insert(127250, 22);
        assert!(!filter.should_process_frame(&heading(10)));
        assert!(filter.should_process_frame(&heading(22)));
    }
}
