//! Parsers for the text log formats written by NMEA 2000 gateways and tools
//!
//! Each parser turns one line into a [`RawFrame`]. Timestamps come out as
//! ISO 8601 with millisecond precision. Formats without a date take it from an
//! [`IngestClock`], which pins the wall-clock date the first time it is asked.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::N2kError;
use crate::raw_frame::{RawFrame, FAST_PACKET_MAX};

const PLAIN_MAX: usize = 8;
const MAX_PRN: u32 = 0x3ffff;

/// Line formats understood by [`parse_line`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `TIMESTAMP,prio,pgn,src,dst,len,b0,..` with at most 8 bytes
    Plain,
    /// Same as plain with up to 223 bytes
    Fast,
    /// `TIMESTAMP - PGN CANID DATA`
    Airmar,
    /// `$PCDIN,PGN,TIME,SRC,DATA*CS`
    Chetco,
    /// Garmin CSV export with a millisecond counter
    GarminCsv,
    /// Garmin CSV export with `MM_DD_YYYY_HH_MM_SS_MS` timestamps
    GarminCsvAbsolute,
    /// `HH:MM:SS.fff R CANID DATA`
    Ydwg02,
    /// `Asss.fff SRCDSTP PGN DATA`
    ActisenseN2kAscii,
}

impl InputFormat {
    pub const ALL: [InputFormat; 8] = [
        InputFormat::Plain,
        InputFormat::Fast,
        InputFormat::Airmar,
        InputFormat::Chetco,
        InputFormat::GarminCsv,
        InputFormat::GarminCsvAbsolute,
        InputFormat::Ydwg02,
        InputFormat::ActisenseN2kAscii,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputFormat::Plain => "plain",
            InputFormat::Fast => "fast",
            InputFormat::Airmar => "airmar",
            InputFormat::Chetco => "chetco",
            InputFormat::GarminCsv => "garmin",
            InputFormat::GarminCsvAbsolute => "garmin-absolute",
            InputFormat::Ydwg02 => "ydwg02",
            InputFormat::ActisenseN2kAscii => "actisense-ascii",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputFormat {
    type Err = N2kError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        InputFormat::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| N2kError::Unsupported(format!("input format '{}'", s)))
    }
}

/// Source of the date for formats that only log a time of day or a relative time
#[derive(Debug, Clone)]
pub struct IngestClock {
    now: Option<DateTime<Utc>>,
    start: Option<DateTime<Utc>>,
}

impl IngestClock {
    /// Clock pinned to the wall clock at first use
    pub fn new() -> Self {
        Self { now: None, start: None }
    }

    /// Clock that reads `now` instead of the wall clock
    pub fn fixed(now: DateTime<Utc>) -> Self {
        Self {
            now: Some(now),
            start: None,
        }
    }

    fn start(&mut self) -> DateTime<Utc> {
        *self.start.get_or_insert_with(|| self.now.unwrap_or_else(Utc::now))
    }

    /// Date of the first message
    pub fn date(&mut self) -> NaiveDate {
        self.start().date_naive()
    }

    /// Absolute time of a message `offset` after the first one, where the
    /// first message was logged at `first_offset`
    fn relative(&mut self, first_offset: Duration, offset: Duration) -> DateTime<Utc> {
        if self.start.is_none() {
            let now = self.now.unwrap_or_else(Utc::now);
            self.start = Some(now - first_offset);
        }
        self.start() + offset
    }
}

impl Default for IngestClock {
    fn default() -> Self {
        Self::new()
    }
}

fn iso(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

fn iso_naive(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

fn from_millis(format: &'static str, millis: i64) -> Result<String, N2kError> {
    DateTime::from_timestamp_millis(millis)
        .map(iso)
        .ok_or_else(|| N2kError::parse(format, format!("timestamp {} out of range", millis)))
}

fn number<T: FromStr>(format: &'static str, what: &str, s: Option<&str>) -> Result<T, N2kError> {
    let s = s.map(str::trim).ok_or_else(|| N2kError::parse(format, format!("missing {}", what)))?;
    s.parse()
        .map_err(|_| N2kError::parse(format, format!("invalid {} '{}'", what, s)))
}

fn hex_number(format: &'static str, what: &str, s: Option<&str>) -> Result<u32, N2kError> {
    let s = s.map(str::trim).ok_or_else(|| N2kError::parse(format, format!("missing {}", what)))?;
    u32::from_str_radix(s, 16).map_err(|_| N2kError::parse(format, format!("invalid {} '{}'", what, s)))
}

fn hex_byte(format: &'static str, s: &str) -> Result<u8, N2kError> {
    u8::from_str_radix(s.trim(), 16).map_err(|_| N2kError::parse(format, format!("invalid data byte '{}'", s)))
}

/// Bytes of a run of hex digit pairs without separators
fn hex_run(format: &'static str, s: &str) -> Result<Vec<u8>, N2kError> {
    let s = s.trim();
    if s.len() % 2 != 0 || !s.is_ascii() {
        return Err(N2kError::parse(format, format!("odd hex data '{}'", s)));
    }
    (0..s.len()).step_by(2).map(|i| hex_byte(format, &s[i..i + 2])).collect()
}

fn check_frame(format: &'static str, priority: u32, pgn: u32, max_len: usize, len: usize) -> Result<(), N2kError> {
    if priority > 7 {
        return Err(N2kError::parse(format, format!("priority {} out of range", priority)));
    }
    if pgn > MAX_PRN {
        return Err(N2kError::parse(format, format!("PGN {} out of range", pgn)));
    }
    if len > max_len {
        return Err(N2kError::parse(format, format!("{} data bytes, at most {} allowed", len, max_len)));
    }
    Ok(())
}

fn csv_frame(format: InputFormat, line: &str, max_len: usize) -> Result<RawFrame, N2kError> {
    let name = format.name();
    let mut parts = line.trim().split(',');
    let timestamp = parts.next().filter(|t| !t.is_empty()).ok_or_else(|| N2kError::parse(name, "empty line"))?;
    let priority: u32 = number(name, "priority", parts.next())?;
    let pgn: u32 = number(name, "PGN", parts.next())?;
    let source: u8 = number(name, "source", parts.next())?;
    let destination: u8 = number(name, "destination", parts.next())?;
    let len: usize = number(name, "length", parts.next())?;
    check_frame(name, priority, pgn, max_len, len)?;

    let data = parts
        .filter(|p| !p.trim().is_empty())
        .take(len)
        .map(|p| hex_byte(name, p))
        .collect::<Result<Vec<u8>, _>>()?;
    if data.len() < len {
        return Err(N2kError::parse(name, format!("{} data bytes announced, {} found", len, data.len())));
    }
    Ok(RawFrame::new(timestamp, priority as u8, pgn, source, destination, data))
}

/// `2023-01-01T00:00:00.000Z,2,127250,10,255,8,00,5a,1d,ff,7f,ff,7f,00`
pub fn parse_plain(line: &str) -> Result<RawFrame, N2kError> {
    csv_frame(InputFormat::Plain, line, PLAIN_MAX)
}

/// Plain CSV carrying a whole fast-packet payload on one line
pub fn parse_fast(line: &str) -> Result<RawFrame, N2kError> {
    csv_frame(InputFormat::Fast, line, FAST_PACKET_MAX)
}

/// `2016-04-09T16:41:39.628Z - 127250 09F1120A 005A1DFF7FFF7F00`
///
/// The PGN column is informational, addressing comes from the CAN id. Data
/// may be one hex run or separate bytes.
pub fn parse_airmar(line: &str) -> Result<RawFrame, N2kError> {
    let name = InputFormat::Airmar.name();
    let mut tokens = line.split_whitespace();
    let timestamp = tokens.next().ok_or_else(|| N2kError::parse(name, "empty line"))?;
    let mut token = tokens.next();
    if token.is_some_and(|t| t.starts_with('-')) {
        token = tokens.next();
    }
    let _pgn: u32 = number(name, "PGN", token)?;
    let id = hex_number(name, "CAN id", tokens.next())?;
    let mut data = Vec::new();
    for token in tokens {
        data.extend(hex_run(name, &token.replace(',', ""))?);
    }
    if data.len() > FAST_PACKET_MAX {
        return Err(N2kError::parse(name, format!("{} data bytes", data.len())));
    }
    RawFrame::from_can_id(timestamp, id, &data)
}

/// XOR of the characters between `$` and `*`
pub fn nmea_checksum(sentence: &str) -> u8 {
    sentence.bytes().fold(0, |acc, b| acc ^ b)
}

/// `$PCDIN,01F119,00000000,0F,2AAF00D1067414FF*59`
///
/// PGN, time in milliseconds since the epoch and source are hex. The
/// checksum must match.
pub fn parse_chetco(line: &str) -> Result<RawFrame, N2kError> {
    let name = InputFormat::Chetco.name();
    let line = line.trim();
    let body = line
        .strip_prefix('$')
        .filter(|b| b.starts_with("PCDIN,"))
        .ok_or_else(|| N2kError::parse(name, "not a $PCDIN sentence"))?;
    let (sentence, checksum) = body.split_once('*').ok_or_else(|| N2kError::parse(name, "missing checksum"))?;
    let expected = u8::from_str_radix(checksum.trim(), 16)
        .map_err(|_| N2kError::parse(name, format!("invalid checksum '{}'", checksum)))?;
    let actual = nmea_checksum(sentence);
    if actual != expected {
        return Err(N2kError::parse(
            name,
            format!("checksum {:02X} does not match computed {:02X}", expected, actual),
        ));
    }

    let mut parts = sentence.split(',').skip(1);
    let pgn = hex_number(name, "PGN", parts.next())?;
    let millis = hex_number(name, "timestamp", parts.next())?;
    let source = hex_number(name, "source", parts.next())?;
    let data = hex_run(name, parts.next().unwrap_or(""))?;
    let source = u8::try_from(source).map_err(|_| N2kError::parse(name, format!("source {} out of range", source)))?;
    check_frame(name, 0, pgn, FAST_PACKET_MAX, data.len())?;
    Ok(RawFrame::new(from_millis(name, i64::from(millis))?, 0, pgn, source, 255, data))
}

/// `SEQ,MILLIS,PGN,NAME,MFG,SRC,DST,PRIO,SINGLE,LEN,0xDATA`
pub fn parse_garmin_csv(line: &str) -> Result<RawFrame, N2kError> {
    garmin(InputFormat::GarminCsv, line)
}

/// `SEQ,MM_DD_YYYY_HH_MM_SS_MS,PGN,NAME,MFG,SRC,DST,PRIO,SINGLE,LEN,0xDATA`
pub fn parse_garmin_csv_absolute(line: &str) -> Result<RawFrame, N2kError> {
    garmin(InputFormat::GarminCsvAbsolute, line)
}

fn garmin(format: InputFormat, line: &str) -> Result<RawFrame, N2kError> {
    let name = format.name();
    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() < 11 {
        return Err(N2kError::parse(name, format!("{} columns, expected 11", parts.len())));
    }
    let _sequence: u64 = number(name, "sequence", Some(parts[0]))?;
    let timestamp = if format == InputFormat::GarminCsvAbsolute {
        let t: Vec<u32> = parts[1]
            .split('_')
            .map(|p| number(name, "timestamp", Some(p)))
            .collect::<Result<_, _>>()?;
        let [month, day, year, hours, minutes, seconds, millis] = t[..] else {
            return Err(N2kError::parse(name, format!("invalid timestamp '{}'", parts[1])));
        };
        let time = NaiveDate::from_ymd_opt(year as i32, month, day)
            .and_then(|d| d.and_hms_milli_opt(hours, minutes, seconds, millis % 1000))
            .ok_or_else(|| N2kError::parse(name, format!("invalid timestamp '{}'", parts[1])))?;
        iso_naive(time)
    } else {
        from_millis(name, number(name, "timestamp", Some(parts[1]))?)?
    };
    let pgn: u32 = number(name, "PGN", Some(parts[2]))?;
    // parts 3 and 4 hold the PGN name and the manufacturer
    let source: u8 = number(name, "source", Some(parts[5]))?;
    let destination: u8 = number(name, "destination", Some(parts[6]))?;
    let priority: u32 = number(name, "priority", Some(parts[7]))?;
    let len: usize = number(name, "length", Some(parts[9]))?;
    check_frame(name, priority, pgn, FAST_PACKET_MAX, len)?;

    let hex = parts[10].trim();
    let hex = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X")).unwrap_or(hex);
    let data = hex_run(name, hex)?;
    if data.len() != len {
        return Err(N2kError::parse(name, format!("{} data bytes announced, {} found", len, data.len())));
    }
    Ok(RawFrame::new(timestamp, priority as u8, pgn, source, destination, data))
}

/// `00:17:55.475 R 0DF50B23 FF FF FF FF FF 00 00 FF`
pub fn parse_ydwg02(line: &str, clock: &mut IngestClock) -> Result<RawFrame, N2kError> {
    let name = InputFormat::Ydwg02.name();
    let mut tokens = line.split_whitespace();
    let time = tokens.next().ok_or_else(|| N2kError::parse(name, "empty line"))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S%.f")
        .map_err(|_| N2kError::parse(name, format!("invalid time '{}'", time)))?;
    match tokens.next() {
        Some("R") | Some("T") => {}
        other => return Err(N2kError::parse(name, format!("invalid direction {:?}", other))),
    }
    let id = hex_number(name, "CAN id", tokens.next())?;
    let data = tokens.map(|t| hex_byte(name, t)).collect::<Result<Vec<u8>, _>>()?;
    if data.len() > PLAIN_MAX {
        return Err(N2kError::parse(name, format!("{} data bytes in a CAN frame", data.len())));
    }
    let timestamp = iso_naive(clock.date().and_time(time));
    RawFrame::from_can_id(timestamp, id, &data)
}

/// `A173321.107 23FF7 1F513 012F3070002F30709F`
///
/// The second column packs the source, destination and priority:
/// `prio = n & 0xf`, `dst = (n >> 4) & 0xff`, `src = (n >> 12) & 0xff`.
/// The time is relative to the start of the log.
pub fn parse_actisense_n2k_ascii(line: &str, clock: &mut IngestClock) -> Result<RawFrame, N2kError> {
    let name = InputFormat::ActisenseN2kAscii.name();
    let mut tokens = line.split_whitespace();
    let time = tokens
        .next()
        .and_then(|t| t.strip_prefix('A'))
        .ok_or_else(|| N2kError::parse(name, "line does not start with 'A'"))?;
    let (seconds, millis) = time.split_once('.').unwrap_or((time, "0"));
    let seconds: i64 = number(name, "seconds", Some(seconds))?;
    let millis: i64 = number(name, "milliseconds", Some(millis))?;
    let offset = Duration::seconds(seconds) + Duration::milliseconds(millis % 1000);
    let timestamp = iso(clock.relative(Duration::seconds(seconds), offset));

    let n = hex_number(name, "address", tokens.next())?;
    let priority = n & 0xf;
    let destination = ((n >> 4) & 0xff) as u8;
    let source = ((n >> 12) & 0xff) as u8;
    let pgn = hex_number(name, "PGN", tokens.next())?;
    let data = match tokens.next() {
        Some(hex) => hex_run(name, hex)?,
        None => Vec::new(),
    };
    check_frame(name, priority, pgn, FAST_PACKET_MAX, data.len())?;
    Ok(RawFrame::new(timestamp, priority as u8, pgn, source, destination, data))
}

/// Parse a line in a known format
pub fn parse_line(format: InputFormat, line: &str, clock: &mut IngestClock) -> Result<RawFrame, N2kError> {
    match format {
        InputFormat::Plain => parse_plain(line),
        InputFormat::Fast => parse_fast(line),
        InputFormat::Airmar => parse_airmar(line),
        InputFormat::Chetco => parse_chetco(line),
        InputFormat::GarminCsv => parse_garmin_csv(line),
        InputFormat::GarminCsvAbsolute => parse_garmin_csv_absolute(line),
        InputFormat::Ydwg02 => parse_ydwg02(line, clock),
        InputFormat::ActisenseN2kAscii => parse_actisense_n2k_ascii(line, clock),
    }
}

/// Guess the format of a line
///
/// Returns `None` for blank lines and lines that match no known format.
pub fn detect_format(line: &str) -> Option<InputFormat> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.starts_with("$PCDIN") {
        return Some(InputFormat::Chetco);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let first = tokens[0];
    if let Some(rest) = first.strip_prefix('A') {
        if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit() || c == '.') && tokens.len() >= 3 {
            return Some(InputFormat::ActisenseN2kAscii);
        }
    }
    if tokens.len() >= 3
        && matches!(tokens[1], "R" | "T")
        && NaiveTime::parse_from_str(first, "%H:%M:%S%.f").is_ok()
    {
        return Some(InputFormat::Ydwg02);
    }
    if tokens.len() >= 4 && tokens[1].starts_with('-') && !line.contains(',') {
        return Some(InputFormat::Airmar);
    }

    let columns: Vec<&str> = line.split(',').collect();
    if columns.len() >= 11 && columns[0].chars().all(|c| c.is_ascii_digit()) && columns[10].trim().starts_with("0x") {
        return Some(if columns[1].contains('_') {
            InputFormat::GarminCsvAbsolute
        } else {
            InputFormat::GarminCsv
        });
    }
    if columns.len() >= 6 {
        return match columns[5].trim().parse::<usize>() {
            Ok(len) if len > PLAIN_MAX => Some(InputFormat::Fast),
            Ok(_) => Some(InputFormat::Plain),
            Err(_) => None,
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn clock() -> IngestClock {
        IngestClock::fixed(Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_plain() {
        let frame = parse_plain("2023-01-01T00:00:00.000Z,2,127250,10,255,8,00,5a,1d,ff,7f,ff,7f,00").unwrap();
        assert_eq!(frame.timestamp, "2023-01-01T00:00:00.000Z");
        assert_eq!((frame.priority, frame.pgn, frame.source, frame.destination), (2, 127250, 10, 255));
        assert_eq!(frame.data, vec![0x00, 0x5a, 0x1d, 0xff, 0x7f, 0xff, 0x7f, 0x00]);
    }

    #[test]
    fn test_plain_errors() {
        assert!(matches!(
            parse_plain("2023-01-01T00:00:00.000Z,2,127250,10,255,8,00,5a"),
            Err(N2kError::Parse { format: "plain", .. })
        ));
        assert!(parse_plain("2023-01-01T00:00:00.000Z,9,127250,10,255,1,00").is_err());
        assert!(parse_plain("2023-01-01T00:00:00.000Z,2,127250,10,255,9,0,1,2,3,4,5,6,7,8").is_err());
        assert!(parse_plain("2023-01-01T00:00:00.000Z,2,127250,10,255,1,zz").is_err());
        assert!(parse_plain("").is_err());
    }

    #[test]
    fn test_fast() {
        let line = "2023-01-01T00:00:00.000Z,3,126992,4,255,10,01,f0,9e,4b,00,51,25,02,ff,ff";
        assert_eq!(detect_format(line), Some(InputFormat::Fast));
        let frame = parse_fast(line).unwrap();
        assert_eq!(frame.data.len(), 10);
        assert_eq!(frame.data[2], 0x9e);
    }

    #[test]
    fn test_airmar() {
        let line = "2016-04-09T16:41:39.628Z - 127250 09F1120A 005A1DFF7FFF7F00";
        assert_eq!(detect_format(line), Some(InputFormat::Airmar));
        let frame = parse_airmar(line).unwrap();
        assert_eq!((frame.priority, frame.pgn, frame.source), (2, 127250, 10));
        assert_eq!(frame.data.len(), 8);
        assert_eq!(frame.timestamp, "2016-04-09T16:41:39.628Z");
    }

    #[test]
    fn test_chetco() {
        let sentence = "PCDIN,01F119,00000000,0F,2AAF00D1067414FF";
        let line = format!("${}*{:02X}", sentence, nmea_checksum(sentence));
        assert_eq!(detect_format(&line), Some(InputFormat::Chetco));
        let frame = parse_chetco(&line).unwrap();
        assert_eq!(frame.pgn, 0x01F119);
        assert_eq!(frame.source, 0x0F);
        assert_eq!(frame.destination, 255);
        assert_eq!(frame.data, vec![0x2A, 0xAF, 0x00, 0xD1, 0x06, 0x74, 0x14, 0xFF]);
        assert_eq!(frame.timestamp, "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_chetco_bad_checksum() {
        let sentence = "PCDIN,01F119,00000000,0F,2AAF00D1067414FF";
        let wrong = nmea_checksum(sentence) ^ 0x01;
        let line = format!("${}*{:02X}", sentence, wrong);
        assert!(matches!(parse_chetco(&line), Err(N2kError::Parse { format: "chetco", .. })));
    }

    #[test]
    fn test_garmin_relative() {
        let line = "0,486942,127508,Battery Status,Garmin,6,255,2,1,8,0x017505FF7FFFFFFF";
        assert_eq!(detect_format(line), Some(InputFormat::GarminCsv));
        let frame = parse_garmin_csv(line).unwrap();
        assert_eq!((frame.priority, frame.pgn, frame.source, frame.destination), (2, 127508, 6, 255));
        assert_eq!(frame.data, vec![0x01, 0x75, 0x05, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF]);
        assert_eq!(frame.timestamp, "1970-01-01T00:08:06.942Z");
    }

    #[test]
    fn test_garmin_absolute() {
        let line = "12,06_01_2023_12_30_15_250,127508,Battery Status,Garmin,6,255,2,1,8,0x017505FF7FFFFFFF";
        assert_eq!(detect_format(line), Some(InputFormat::GarminCsvAbsolute));
        let frame = parse_garmin_csv_absolute(line).unwrap();
        assert_eq!(frame.timestamp, "2023-06-01T12:30:15.250Z");
        assert!(parse_garmin_csv_absolute("12,06_01_2023,127508,a,b,6,255,2,1,8,0x01").is_err());
    }

    #[test]
    fn test_ydwg02() {
        let mut clock = clock();
        let line = "00:17:55.475 R 0DF50B23 FF FF FF FF FF 00 00 FF";
        assert_eq!(detect_format(line), Some(InputFormat::Ydwg02));
        let frame = parse_ydwg02(line, &mut clock).unwrap();
        assert_eq!(frame.timestamp, "2023-06-01T00:17:55.475Z");
        assert_eq!(frame.pgn, 128267);
        assert_eq!(frame.source, 0x23);
        assert_eq!(frame.priority, 3);
        assert_eq!(frame.data.len(), 8);
        assert!(parse_ydwg02("00:17:55.475 X 0DF50B23 FF", &mut clock).is_err());
    }

    #[test]
    fn test_actisense_ascii() {
        let mut clock = clock();
        let line = "A000010.100 23FF7 1F513 012F3070002F30709F";
        assert_eq!(detect_format(line), Some(InputFormat::ActisenseN2kAscii));
        let frame = parse_actisense_n2k_ascii(line, &mut clock).unwrap();
        assert_eq!(frame.priority, 7);
        assert_eq!(frame.destination, 0xFF);
        assert_eq!(frame.source, 0x23);
        assert_eq!(frame.pgn, 0x1F513);
        assert_eq!(frame.data.len(), 9);
        assert_eq!(frame.timestamp, "2023-06-01T12:00:00.100Z");

        let later = parse_actisense_n2k_ascii("A000012.000 23FF7 1F513 01", &mut clock).unwrap();
        assert_eq!(later.timestamp, "2023-06-01T12:00:02.000Z");
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_format(""), None);
        assert_eq!(detect_format("hello world"), None);
        assert_eq!(
            detect_format("2023-01-01T00:00:00.000Z,2,127250,10,255,8,00,5a,1d,ff,7f,ff,7f,00"),
            Some(InputFormat::Plain)
        );
    }

    #[test]
    fn test_format_names() {
        for format in InputFormat::ALL {
            assert_eq!(format.name().parse::<InputFormat>().unwrap(), format);
        }
        assert!("nope".parse::<InputFormat>().is_err());
    }
}
