#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, LogFormat};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Settings after the command line has been layered over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub verbose: bool,
    pub log_format: LogFormat,
    pub args: Vec<String>,
}

impl ConfigProvider for ResolvedConfig {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn log_format(&self) -> LogFormat {
        self.log_format
    }

    fn args(&self) -> &[String] {
        &self.args
    }
}
