//! The `farm-to-console` command line: turns Harvest Moon DS message files into JSON.

pub mod config;
pub mod extract;

pub use config::{ExtractConfig, ExtractConfigBuilder, LoggerConfig};
pub use extract::extract_text;
