//! Command line options of the analyzer
//!
//! Options are single dash words matched without regard to case, so existing
//! invocations such as `analyzer -json -geo dms 129025` keep working.

use std::path::PathBuf;

use canboat::{GeoFormat, InputFormat, NameStyle, OutputFormat, RenderConfig};

pub const USAGE: &str = "\
Usage: analyzer [OPTIONS] [PGN]

Reads NMEA 2000 frames from a log (stdin or -file) or a SocketCAN interface
and prints the decoded messages.

OPTIONS:
    -json                 One JSON object per message
    -nv                   Lookup values as {\"value\", \"name\"} in JSON
    -empty                Also print fields without a value
    -si                   Keep SI units (no conversion to deg, bar, C, Ah)
    -camel                camelCase field names
    -upper-camel          UpperCamelCase field names
    -geo dd|dm|dms        Latitude/longitude notation
    -raw                  Echo every frame as read
    -data                 Dump payload bytes under each message
    -debug                Show reserved and spare fields
    -d                    Debug logging
    -q                    Only log errors
    -src N                Only frames from source address N
    -format NAME          Input format instead of detecting it per line
                          (plain, fast, airmar, chetco, garmin, garmin-absolute,
                          ydwg02, actisense-ascii)
    -file FILE            Read this file instead of stdin
    -can IFACE            Read from a SocketCAN interface
    -config FILE          Configuration file (default analyzer.json)
    -fixtime STR          Print STR as the timestamp of every message
    -explain              Describe every known PGN and exit
    -explain-json         Describe every known PGN as JSON and exit
    -version              Print the version and exit
    --help, -h            Show this help message
    PGN                   Only print this PGN";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Analyze,
    Explain,
    ExplainJson,
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
    Can(String),
}

/// Parsed command line
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub action: Action,
    pub input: Input,
    pub config_path: Option<PathBuf>,
    pub format: Option<InputFormat>,
    pub only_pgn: Option<u32>,
    pub only_source: Option<u8>,
    pub fixtime: Option<String>,
    pub log_level: Option<&'static str>,
    pub show_raw: bool,
    json: bool,
    name_value: bool,
    show_empty: bool,
    si: bool,
    name_style: Option<NameStyle>,
    geo: Option<GeoFormat>,
    show_bytes: bool,
    show_data: bool,
}

impl Options {
    /// Switch on the output options given on the command line
    pub fn apply(&self, config: &mut RenderConfig) {
        if self.json {
            config.format = OutputFormat::Json;
        }
        config.name_value |= self.name_value;
        config.show_empty |= self.show_empty;
        config.si |= self.si;
        config.show_bytes |= self.show_bytes;
        config.show_data |= self.show_data;
        if let Some(style) = self.name_style {
            config.name_style = style;
        }
        if let Some(geo) = self.geo {
            config.geo = geo;
        }
    }

    pub fn name_style(&self) -> NameStyle {
        self.name_style.unwrap_or_default()
    }
}

fn value<I: Iterator<Item = String>>(args: &mut I, option: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("option {} needs a value", option))
}

/// Parse the arguments that follow the program name
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.to_ascii_lowercase().as_str() {
            "--help" | "-h" | "-help" => options.action = Action::Help,
            "-version" | "--version" => options.action = Action::Version,
            "-explain" => options.action = Action::Explain,
            "-explain-json" => options.action = Action::ExplainJson,
            "-json" => options.json = true,
            "-nv" => options.name_value = true,
            "-empty" => options.show_empty = true,
            "-si" => options.si = true,
            "-camel" => options.name_style = Some(NameStyle::Camel),
            "-upper-camel" => options.name_style = Some(NameStyle::UpperCamel),
            "-raw" => options.show_raw = true,
            "-data" => options.show_data = true,
            "-debug" => options.show_bytes = true,
            "-d" => options.log_level = Some("debug"),
            "-q" => options.log_level = Some("error"),
            "-geo" => options.geo = Some(value(&mut args, "-geo")?.parse()?),
            "-src" => {
                let src = value(&mut args, "-src")?;
                let src = src.parse().map_err(|_| format!("invalid source address '{}'", src))?;
                options.only_source = Some(src);
            }
            "-format" => {
                let name = value(&mut args, "-format")?;
                options.format = Some(name.parse().map_err(|e: canboat::N2kError| e.to_string())?);
            }
            "-file" => options.input = Input::File(PathBuf::from(value(&mut args, "-file")?)),
            "-can" => options.input = Input::Can(value(&mut args, "-can")?),
            "-config" => options.config_path = Some(PathBuf::from(value(&mut args, "-config")?)),
            "-fixtime" => options.fixtime = Some(value(&mut args, "-fixtime")?),
            _ => match arg.parse::<u32>() {
                Ok(pgn) if pgn > 0 => options.only_pgn = Some(pgn),
                _ => return Err(format!("Unknown or invalid argument {}", arg)),
            },
        }
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.action, Action::Analyze);
        assert_eq!(options.input, Input::Stdin);
        assert_eq!(options.only_pgn, None);
        assert!(!options.show_raw);
    }

    #[test]
    fn test_output_flags() {
        let options = parse(&["-json", "-NV", "-empty", "-geo", "dms", "-upper-camel", "-debug"]).unwrap();
        let mut config = RenderConfig::default();
        options.apply(&mut config);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.name_value);
        assert!(config.show_empty);
        assert!(config.show_bytes);
        assert!(!config.si);
        assert_eq!(config.geo, GeoFormat::Dms);
        assert_eq!(config.name_style, NameStyle::UpperCamel);
    }

    #[test]
    fn test_flags_keep_configured_defaults() {
        let options = parse(&["-data"]).unwrap();
        let mut config = RenderConfig {
            si: true,
            ..RenderConfig::json()
        };
        options.apply(&mut config);
        assert!(config.si);
        assert!(config.show_data);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_input_and_filters() {
        let options = parse(&["-file", "log.txt", "-src", "22", "-format", "ydwg02", "129025"]).unwrap();
        assert_eq!(options.input, Input::File(PathBuf::from("log.txt")));
        assert_eq!(options.only_source, Some(22));
        assert_eq!(options.format, Some(InputFormat::Ydwg02));
        assert_eq!(options.only_pgn, Some(129025));

        let options = parse(&["-can", "vcan0", "-fixtime", "2023-01-01T00:00:00Z"]).unwrap();
        assert_eq!(options.input, Input::Can("vcan0".to_string()));
        assert_eq!(options.fixtime.as_deref(), Some("2023-01-01T00:00:00Z"));
    }

    #[test]
    fn test_actions() {
        assert_eq!(parse(&["-explain"]).unwrap().action, Action::Explain);
        assert_eq!(parse(&["-explain-json", "-camel"]).unwrap().action, Action::ExplainJson);
        assert_eq!(parse(&["--help"]).unwrap().action, Action::Help);
        assert_eq!(parse(&["-version"]).unwrap().action, Action::Version);
        assert_eq!(parse(&["-d"]).unwrap().log_level, Some("debug"));
        assert_eq!(parse(&["-q"]).unwrap().log_level, Some("error"));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(parse(&["-bogus"]).is_err());
        assert!(parse(&["0"]).is_err());
        assert!(parse(&["-geo", "utm"]).is_err());
        assert!(parse(&["-src"]).is_err());
        assert!(parse(&["-src", "300"]).is_err());
        assert!(parse(&["-format", "nmea0183"]).is_err());
    }
}
