//! Runtime configuration for the CLI.
//!
//! The product file is resolved from `--data`, then `STOCKROOM_DATA`, then
//! `<data dir>/stockroom/products.json`.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Environment variable naming the product file.
pub const DATA_ENV: &str = "STOCKROOM_DATA";

const DEFAULT_LOG_FILTER: &str = "warn";
const FILE_NAME: &str = "products.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub output: OutputFormat,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    /// Resolve configuration from CLI flags and the process environment.
    pub fn resolve(data: Option<PathBuf>, output: OutputFormat) -> Self {
        Self::resolve_with(data, std::env::var_os(DATA_ENV), output)
    }

    /// Resolve configuration with an explicit environment value (testable).
    pub fn resolve_with(
        data: Option<PathBuf>,
        env_data: Option<OsString>,
        output: OutputFormat,
    ) -> Self {
        let data_file = data
            .or_else(|| env_data.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(default_data_file);

        Self {
            data_file,
            output,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn default_data_file() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("stockroom").join(FILE_NAME),
        None => {
            tracing::warn!("no platform data directory; using ./{FILE_NAME}");
            PathBuf::from(FILE_NAME)
        }
    }
}
