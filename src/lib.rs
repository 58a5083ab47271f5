pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use self::config::{toml_config::TomlConfig, ResolvedConfig};
pub use self::core::{sample::Sample, ConfigProvider, LogFormat};
pub use utils::error::{Result, SampleError};
