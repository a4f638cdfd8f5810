use std::io::{self, Write};
use std::time::Instant;

use canboat::render::{render, render_data};
use canboat::{Message, MessageHandler, RenderConfig};

/// Writes every message it is handed in the configured output format
pub struct MessagePrinter<W: Write> {
    out: W,
    config: RenderConfig,
    /// Replaces the timestamp of every message
    fixtime: Option<String>,
    error: Option<io::Error>,
}

impl<W: Write> MessagePrinter<W> {
    pub fn new(out: W, config: RenderConfig, fixtime: Option<String>) -> Self {
        Self {
            out,
            config,
            fixtime,
            error: None,
        }
    }

    /// The first write error since the last call, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn write(&mut self, message: &Message) -> io::Result<()> {
        writeln!(self.out, "{}", render(message, &self.config))?;
        if self.config.show_data {
            writeln!(self.out, "{}", render_data(message))?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> MessageHandler for MessagePrinter<W> {
    fn handle_message(&mut self, message: &Message, _timestamp: Instant) {
        if self.error.is_some() {
            return;
        }
        let result = match &self.fixtime {
            Some(time) => {
                let mut message = message.clone();
                message.frame.timestamp = time.clone();
                self.write(&message)
            }
            None => self.write(message),
        };
        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canboat::{decode, RawFrame};

    fn heading() -> Message {
        decode(RawFrame::new(
            "2023-01-01T00:00:00.000Z",
            2,
            127250,
            10,
            255,
            vec![0, 0x5A, 0x1D, 0xFF, 0x7F, 0xFF, 0x7F, 0xFC],
        ))
        .unwrap()
    }

    #[test]
    fn test_prints_one_line_per_message() {
        let mut printer = MessagePrinter::new(Vec::new(), RenderConfig::json(), None);
        printer.handle_message(&heading(), Instant::now());
        printer.handle_message(&heading(), Instant::now());
        assert!(printer.take_error().is_none());

        let out = String::from_utf8(printer.into_output()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let json: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(json["pgn"], 127250);
        assert_eq!(json["timestamp"], "2023-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_fixtime_overrides_timestamp() {
        let mut printer = MessagePrinter::new(Vec::new(), RenderConfig::json(), Some("2000-01-01T00:00:00Z".to_string()));
        printer.handle_message(&heading(), Instant::now());

        let out = String::from_utf8(printer.into_output()).unwrap();
        let json: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(json["timestamp"], "2000-01-01T00:00:00Z");
    }

    #[test]
    fn test_data_dump_follows_message() {
        let config = RenderConfig {
            show_data: true,
            ..RenderConfig::default()
        };
        let mut printer = MessagePrinter::new(Vec::new(), config, None);
        printer.handle_message(&heading(), Instant::now());

        let out = String::from_utf8(printer.into_output()).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.starts_with("2023-01-01T00:00:00.000Z 2  10 255 127250 Vessel Heading:"));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_kept() {
        let mut printer = MessagePrinter::new(Broken, RenderConfig::default(), None);
        printer.handle_message(&heading(), Instant::now());
        let err = printer.take_error().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(printer.take_error().is_none());
    }
}
