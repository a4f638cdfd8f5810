use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;
use std::time::Instant;

use tracing::{debug, info, warn};

mod app_metrics;
mod cli;
mod config;
mod frame_filter;
mod printer;

use app_metrics::{AppMetrics, MetricsLogger};
use cli::{Action, Input, Options};
use config::{Config, DEFAULT_CONFIG_FILE};
use frame_filter::FrameFilter;
use printer::MessagePrinter;

use canboat::render::{explain, explain_json, render_raw};
use canboat::{canbus, detect_format, parse_line, registry, IngestClock, InputFormat, MessageHandler, N2kStreamReader, OutputFormat, RawFrame};

// ========== Logging Setup ==========

fn init_logging(log_config: &config::LogConfig, level: &str) -> Result<(), Box<dyn Error>> {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let timer = || {
        fmt::time::OffsetTime::local_rfc_3339().unwrap_or_else(|_| {
            fmt::time::OffsetTime::new(time::UtcOffset::UTC, time::format_description::well_known::Rfc3339)
        })
    };

    let file_layer = if log_config.to_file {
        std::fs::create_dir_all(&log_config.directory)?;
        let file_appender = rolling::daily(&log_config.directory, &log_config.file_prefix);
        Some(fmt::layer().with_writer(file_appender).with_ansi(false).with_timer(timer()))
    } else {
        None
    };

    // stdout carries the decoded messages
    let console_layer = fmt::layer().with_writer(io::stderr).with_timer(timer());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

// ========== Analyzer ==========

/// Everything between an input line or CAN frame and the printed message
struct Analyzer<W: Write> {
    reader: N2kStreamReader,
    clock: IngestClock,
    format: Option<InputFormat>,
    filter: FrameFilter,
    printer: MessagePrinter<W>,
    show_raw: bool,
    raw_to_stderr: bool,
    metrics: AppMetrics,
    metrics_logger: MetricsLogger,
}

impl<W: Write> Analyzer<W> {
    fn process_line(&mut self, line: &str) -> io::Result<()> {
        self.metrics.lines += 1;
        if line.trim().is_empty() {
            return Ok(());
        }
        let format = match self.format.or_else(|| detect_format(line)) {
            Some(format) => format,
            None => {
                self.metrics.rejected_lines += 1;
                warn!("No input format matches line: {}", line);
                return Ok(());
            }
        };
        match parse_line(format, line, &mut self.clock) {
            Ok(frame) => self.process_frame(frame),
            Err(e) => {
                self.metrics.rejected_lines += 1;
                warn!("Skipping line: {}", e);
                Ok(())
            }
        }
    }

    fn process_frame(&mut self, frame: RawFrame) -> io::Result<()> {
        self.metrics.frames += 1;
        if !self.filter.should_process_frame(&frame) {
            return Ok(());
        }
        if self.show_raw && self.filter.should_show_raw(&frame) {
            if self.raw_to_stderr {
                writeln!(io::stderr(), "{}", render_raw(&frame))?;
            } else {
                writeln!(io::stdout(), "{}", render_raw(&frame))?;
            }
        }

        let now = Instant::now();
        match self.reader.push(&frame, now) {
            Ok(Some(message)) => {
                if message.is_fallback() {
                    self.metrics.fallback_decodes += 1;
                }
                if self.filter.should_process_message(&message) {
                    self.metrics.messages += 1;
                    self.printer.handle_message(&message, now);
                }
            }
            Ok(None) => {}
            Err(e) => {
                self.metrics.reassembly_errors += 1;
                warn!("{}", e);
            }
        }

        match self.printer.take_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn read_lines<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            // a damaged byte spoils its own line only
            let line = String::from_utf8_lossy(&buffer);
            self.process_line(line.trim_end_matches(['\r', '\n']))?;
            self.metrics_logger.check_and_log(&mut self.metrics);
        }
        self.printer.flush()?;
        self.metrics_logger.flush(&mut self.metrics);
        Ok(())
    }

    fn read_can(&mut self, interface: &str) -> io::Result<()> {
        info!("Opening CAN interface: {}", interface);
        let mut socket = canbus::open_can_socket_with_retry(interface);
        canbus::configure_socket(&mut socket)?;
        info!("Listening for NMEA 2000 messages");

        loop {
            match canbus::read_frame(&socket) {
                Ok(frame) => {
                    self.process_frame(frame)?;
                    self.printer.flush()?;
                }
                Err(e) if canbus::is_timeout(&e) => {}
                Err(e) if e.kind() == io::ErrorKind::InvalidData => debug!("Skipping CAN frame: {}", e),
                Err(e) => {
                    self.metrics.can_errors += 1;
                    warn!("Error reading CAN frame: {}", e);
                    warn!("CAN bus connection lost. Attempting to reconnect...");

                    socket = canbus::open_can_socket_with_retry(interface);
                    canbus::configure_socket(&mut socket)?;
                    info!("Reconnected to CAN bus. Resuming operation");

                    std::thread::sleep(canbus::READ_TIMEOUT);
                }
            }

            self.metrics_logger.check_and_log(&mut self.metrics);
        }
    }
}

fn load_config(options: &Options) -> Config {
    let path = options.config_path.clone().unwrap_or_else(|| DEFAULT_CONFIG_FILE.into());
    match Config::from_file(&path) {
        Ok(config) => config,
        Err(e) => {
            // logging is not up yet
            if options.config_path.is_some() {
                eprintln!("Warning: Could not load {}: {}", path.display(), e);
                eprintln!("Using default configuration");
            }
            Config::default()
        }
    }
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let config = load_config(&options);
    let level = options.log_level.unwrap_or(config.logging.level.as_str());
    init_logging(&config.logging, level)?;

    match options.action {
        Action::Explain => {
            println!("{}", explain(registry()?, options.name_style()));
            return Ok(());
        }
        Action::ExplainJson => {
            println!("{}", serde_json::to_string_pretty(&explain_json(registry()?))?);
            return Ok(());
        }
        Action::Analyze | Action::Help | Action::Version => {}
    }

    let mut render_config = config.output.clone();
    options.apply(&mut render_config);
    let json = render_config.format == OutputFormat::Json;
    if !json {
        info!("NMEA 2000 analyzer {}", env!("CARGO_PKG_VERSION"));
    }

    let mut analyzer = Analyzer {
        reader: N2kStreamReader::with_config(config.reassembly.clone())?,
        clock: IngestClock::new(),
        format: options.format,
        filter: FrameFilter {
            only_pgn: options.only_pgn,
            only_source: options.only_source,
            source_map: config.source_filter.clone(),
        },
        printer: MessagePrinter::new(io::stdout().lock(), render_config, options.fixtime.clone()),
        show_raw: options.show_raw,
        raw_to_stderr: json,
        metrics: AppMetrics::new(),
        metrics_logger: MetricsLogger::new(config.metrics.log_interval()),
    };

    match &options.input {
        Input::Stdin => analyzer.read_lines(io::stdin().lock())?,
        Input::File(path) => analyzer.read_lines(BufReader::new(File::open(path)?))?,
        Input::Can(interface) => analyzer.read_can(interface)?,
    }
    Ok(())
}

// ========== Main Application ==========

fn main() -> ExitCode {
    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", cli::USAGE);
            return ExitCode::from(1);
        }
    };

    match options.action {
        Action::Help => {
            println!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Action::Version => {
            println!("analyzer {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.downcast_ref::<io::Error>().is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe) => {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canboat::RenderConfig;
    use std::time::Duration;

    fn analyzer(config: RenderConfig, filter: FrameFilter) -> Analyzer<Vec<u8>> {
        Analyzer {
            reader: N2kStreamReader::new().unwrap(),
            clock: IngestClock::new(),
            format: None,
            filter,
            printer: MessagePrinter::new(Vec::new(), config, None),
            show_raw: false,
            raw_to_stderr: true,
            metrics: AppMetrics::new(),
            metrics_logger: MetricsLogger::new(Duration::from_secs(3600)),
        }
    }

    const HEADING: &str = "2023-01-01T00:00:00.000Z,2,127250,10,255,8,00,5a,1d,ff,7f,ff,7f,fc";
    // PGN 129029 GNSS Position Data split into fast-packet frames
    const POSITION: [&str; 2] = [
        "2023-01-01T00:00:01.000Z,3,129029,3,255,8,40,2b,00,00,00,00,00,00",
        "2023-01-01T00:00:01.010Z,3,129029,3,255,8,41,00,00,00,00,00,00,00",
    ];

    #[test]
    fn test_lines_to_messages() {
        let mut analyzer = analyzer(RenderConfig::json(), FrameFilter::default());
        let input = format!("{}\n\nnot a frame\n{}\n", HEADING, HEADING);
        analyzer.read_lines(input.as_bytes()).unwrap();

        let out = String::from_utf8(analyzer.printer_output()).unwrap();
        assert_eq!(out.lines().count(), 2);
        for line in out.lines() {
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(json["pgn"], 127250);
        }
    }

    #[test]
    fn test_invalid_utf8_only_skips_its_line() {
        let mut analyzer = analyzer(RenderConfig::json(), FrameFilter::default());
        let mut input = Vec::new();
        input.extend_from_slice(HEADING.as_bytes());
        input.extend_from_slice(b"\n2023-01-01T00:00:00.000Z,2,127250,10,255,8,\xff\n");
        input.extend_from_slice(HEADING.as_bytes());
        input.push(b'\n');
        analyzer.read_lines(input.as_slice()).unwrap();

        let out = String::from_utf8(analyzer.printer_output()).unwrap();
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_counts_lines_and_rejections() {
        let mut analyzer = analyzer(RenderConfig::json(), FrameFilter::default());
        analyzer.process_line(HEADING).unwrap();
        analyzer.process_line("not a frame").unwrap();
        analyzer.process_line("2023-01-01T00:00:00.000Z,9,127250,10,255,1,00").unwrap();
        assert_eq!(analyzer.metrics.lines, 3);
        assert_eq!(analyzer.metrics.rejected_lines, 2);
        assert_eq!(analyzer.metrics.frames, 1);
        assert_eq!(analyzer.metrics.messages, 1);
    }

    #[test]
    fn test_pgn_filter_applies_after_reassembly() {
        let filter = FrameFilter {
            only_pgn: Some(129029),
            ..FrameFilter::default()
        };
        let mut analyzer = analyzer(RenderConfig::json(), filter);
        analyzer.process_line(HEADING).unwrap();
        analyzer.process_line(POSITION[0]).unwrap();
        assert_eq!(analyzer.metrics.messages, 0);
        assert_eq!(analyzer.metrics.frames, 2);
    }

    #[test]
    fn test_fragment_without_start_is_counted() {
        let mut analyzer = analyzer(RenderConfig::json(), FrameFilter::default());
        analyzer.process_line(POSITION[1]).unwrap();
        assert_eq!(analyzer.metrics.reassembly_errors, 1);
        assert_eq!(analyzer.metrics.messages, 0);
    }

    impl Analyzer<Vec<u8>> {
        fn printer_output(self) -> Vec<u8> {
            self.printer.into_output()
        }
    }
}
