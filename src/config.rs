use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use canboat::{ReaderConfig, RenderConfig};

/// Configuration file read when `-config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "analyzer.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LogConfig,
    pub reassembly: ReaderConfig,
    pub source_filter: SourceFilterConfig,
    pub metrics: MetricsConfig,
    /// Output defaults; command line flags switch options on top of these
    pub output: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Directory where log files will be stored
    pub directory: String,
    /// Log file name prefix (date will be appended)
    pub file_prefix: String,
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Also write the log to a daily file in `directory`
    pub to_file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: "./logs".to_string(),
            file_prefix: "analyzer".to_string(),
            level: "info".to_string(),
            to_file: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceFilterConfig {
    /// Map of PGN to allowed source address
    /// If a PGN is present in this map, only messages from the specified source will be accepted
    /// If a PGN is not in the map, all sources are accepted
    #[serde(default)]
    pub pgn_source_map: std::collections::HashMap<u32, u8>,
}

impl SourceFilterConfig {
    /// Check if a message should be accepted based on its PGN and source
    pub fn should_accept(&self, pgn: u32, source: u8) -> bool {
        match self.pgn_source_map.get(&pgn) {
            Some(&allowed_source) => source == allowed_source,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub log_interval_seconds: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { log_interval_seconds: 60 }
    }
}

impl MetricsConfig {
    pub fn log_interval(&self) -> Duration {
        Duration::from_secs(self.log_interval_seconds)
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canboat::{GeoFormat, OutputFormat};

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.to_file);
        assert_eq!(config.reassembly.fast_packet_timeout_ms, 250);
        assert_eq!(config.reassembly.iso_tp_timeout_ms, 1250);
        assert!(config.reassembly.inverter_status_fast_packet);
        assert_eq!(config.metrics.log_interval(), Duration::from_secs(60));
        assert_eq!(config.output.format, OutputFormat::Human);
    }

    #[test]
    fn test_source_filter_no_filter() {
        let filter = SourceFilterConfig::default();
        assert!(filter.should_accept(129025, 10));
        assert!(filter.should_accept(127488, 5));
    }

    #[test]
    fn test_source_filter_with_filter() {
        let mut filter = SourceFilterConfig::default();
        filter.pgn_source_map.insert(129025, 22);
        filter.pgn_source_map.insert(127488, 5);

        assert!(filter.should_accept(129025, 22));
        assert!(!filter.should_accept(129025, 10));
        assert!(filter.should_accept(127488, 5));
        assert!(!filter.should_accept(127488, 22));

        // no filter for this PGN
        assert!(filter.should_accept(130312, 10));
    }

    #[test]
    fn test_source_filter_serialization() {
        let mut filter = SourceFilterConfig::default();
        filter.pgn_source_map.insert(129025, 22);

        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("129025"));

        let deserialized: SourceFilterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.pgn_source_map.get(&129025), Some(&22));
    }

    #[test]
    fn test_config_deserialization() {
        let json = r#"{
            "logging": { "level": "debug", "to_file": true },
            "reassembly": { "fast_packet_timeout_ms": 500, "inverter_status_fast_packet": false },
            "source_filter": { "pgn_source_map": { "129025": 22 } },
            "metrics": { "log_interval_seconds": 10 },
            "output": { "format": "json", "geo": "dms", "show_empty": true }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.to_file);
        assert_eq!(config.logging.directory, "./logs");
        assert_eq!(config.reassembly.fast_packet_timeout_ms, 500);
        assert_eq!(config.reassembly.iso_tp_timeout_ms, 1250);
        assert!(!config.reassembly.inverter_status_fast_packet);
        assert!(!config.source_filter.should_accept(129025, 1));
        assert_eq!(config.metrics.log_interval_seconds, 10);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.geo, GeoFormat::Dms);
        assert!(config.output.show_empty);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.logging.file_prefix, "analyzer");
        assert_eq!(config.metrics.log_interval_seconds, 60);
    }

    #[test]
    fn test_from_file_missing() {
        assert!(Config::from_file("/nonexistent/analyzer.json").is_err());
    }

    #[test]
    fn test_log_config_serialization() {
        let log_config = LogConfig {
            directory: "/var/log/canboat".to_string(),
            file_prefix: "n2k".to_string(),
            level: "debug".to_string(),
            to_file: true,
        };

        let json = serde_json::to_string(&log_config).unwrap();
        let deserialized: LogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.directory, "/var/log/canboat");
        assert_eq!(deserialized.file_prefix, "n2k");
        assert_eq!(deserialized.level, "debug");
        assert!(deserialized.to_file);
    }
}
