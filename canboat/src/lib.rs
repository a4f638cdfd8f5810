//! NMEA 2000 codec
//!
//! This library turns NMEA 2000 traffic into structured messages and back:
//! - PGN, field type and lookup registries built from static tables
//! - Fast-packet and ISO transport protocol reassembly
//! - Bit-level field decoding with "not present", "error" and range handling
//! - Encoding of fixed-layout PGNs and of group function commands
//! - JSON and text rendering
//! - Parsers for the common gateway log formats and a SocketCAN reader
//!
//! # Features
//!
//! - **Registries**: Every known PGN with its fields, resolved per payload
//!   when several definitions share a number
//! - **Stream Reader**: Frames in, decoded messages out, in completion order
//! - **Renderer**: Stateless output driven by a [`RenderConfig`]
//!
//! # Example
//!
//! ```no_run
//! use std::time::Instant;
//! use canboat::{ingest, render, N2kStreamReader, RenderConfig};
//!
//! let mut reader = N2kStreamReader::new().unwrap();
//! let line = "2023-01-01T00:00:00.000Z,2,127250,10,255,8,00,5a,1d,ff,7f,ff,7f,fc";
//! let frame = ingest::parse_plain(line).unwrap();
//! if let Ok(Some(message)) = reader.push(&frame, Instant::now()) {
//!     println!("{}", render::render(&message, &RenderConfig::json()));
//! }
//! ```

pub mod bits;
pub mod can_id;
pub mod canbus;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod fast_packet;
pub mod field_type;
pub mod ingest;
pub mod iso_tp;
pub mod lookup;
pub mod message_handler;
pub mod physical;
pub mod pgn;
pub mod raw_frame;
pub mod render;
pub mod stream_reader;

// Re-export commonly used types
pub use can_id::CanId;
pub use decoder::{decode, FieldValue, Message, Value};
pub use encoder::{encode_fields, encode_values, GroupFunction, Parameter};
pub use error::N2kError;
pub use ingest::{detect_format, parse_line, IngestClock, InputFormat};
pub use message_handler::MessageHandler;
pub use pgn::{registry, PgnDef, Registry};
pub use raw_frame::RawFrame;
pub use render::{GeoFormat, NameStyle, OutputFormat, RenderConfig};
pub use stream_reader::{N2kStreamReader, ReaderConfig};
