use std::time::Instant;

use crate::decoder::Message;

/// Trait for components that consume decoded NMEA 2000 messages
///
/// Every complete message is offered to each handler, which decides
/// internally which PGNs it cares about.
pub trait MessageHandler {
    /// Process a decoded message that completed at `timestamp`
    fn handle_message(&mut self, message: &Message, timestamp: Instant);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;
    use crate::raw_frame::RawFrame;

    struct HeadingCounter {
        seen: usize,
    }

    impl MessageHandler for HeadingCounter {
        fn handle_message(&mut self, message: &Message, _timestamp: Instant) {
            if message.pgn.pgn == 127250 {
                self.seen += 1;
            }
        }
    }

    #[test]
    fn test_handler_receives_messages() {
        let heading = RawFrame::new("", 2, 127250, 10, 255, vec![0, 0x5A, 0x1D, 0xFF, 0x7F, 0xFF, 0x7F, 0xFC]);
        let rudder = RawFrame::new("", 2, 127245, 10, 255, vec![0xFF; 8]);
        let mut handler = HeadingCounter { seen: 0 };
        for frame in [heading.clone(), rudder, heading] {
            let message = decode(frame).unwrap();
            handler.handle_message(&message, Instant::now());
        }
        assert_eq!(handler.seen, 2);
    }
}
