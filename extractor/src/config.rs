use std::path::PathBuf;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT: &str = "MessageData.bin.json";

/// Logger configuration used by the extractor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level_filter: LevelFilter,
}

impl LoggerConfig {
    /// `-q` wins over `-v`; each `-v` raises the level by one step.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level_filter = if quiet {
            LevelFilter::Error
        } else {
            match verbose {
                0 => LevelFilter::Info,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };
        Self { level_filter }
    }

    /// `RUST_LOG` still overrides the configured level.
    pub fn init(&self) {
        env_logger::Builder::new()
            .filter_level(self.level_filter)
            .parse_default_env()
            .init();
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level_filter: LevelFilter::Info }
    }
}

/// Resolved configuration of one `extract-text` run.
/// Please use [`ExtractConfigBuilder`] to build it from code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// The MessageData.bin to read.
    pub source: PathBuf,
    /// Where the JSON goes.
    pub output: PathBuf,
    /// Replace `output` if it already exists.
    pub overwrite: bool,
    /// Indent the JSON.
    pub pretty: bool,
    pub logger_config: LoggerConfig,
}

pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            config: ExtractConfig {
                source: source.into(),
                output: PathBuf::from(DEFAULT_OUTPUT),
                overwrite: false,
                pretty: false,
                logger_config: LoggerConfig::default(),
            },
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.config.output = output.into();
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.config.overwrite = overwrite;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    pub fn with_logger_config(mut self, logger_config: LoggerConfig) -> Self {
        self.config.logger_config = logger_config;
        self
    }

    /// Retrieves the configuration built
    pub fn get(self) -> ExtractConfig {
        self.config
    }
}
